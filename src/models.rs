//! Data models for the notes application.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Core Note Type
// ============================================================================

/// A single note as it appears in the feed.
///
/// `timestamp` doubles as identifier and sort key. `content` is trusted
/// markup and is never escaped when rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub timestamp: i64,
    pub content: String,
}

impl Note {
    pub fn new(timestamp: i64, content: impl Into<String>) -> Self {
        Self {
            timestamp,
            content: content.into(),
        }
    }
}

/// Formats a note timestamp as `YYYY-MM-DD HH:MM` in the given zone.
pub fn render_timestamp<Tz: TimeZone>(timestamp: i64, tz: &Tz) -> String
where
    Tz::Offset: fmt::Display,
{
    match DateTime::from_timestamp(timestamp, 0) {
        Some(utc) => utc.with_timezone(tz).format("%Y-%m-%d %H:%M").to_string(),
        None => format!("@{}", timestamp),
    }
}

impl Note {
    /// Listing entry: the timestamp line, then the content, each newline
    /// terminated.
    pub fn listing_in<Tz: TimeZone>(&self, tz: &Tz) -> String
    where
        Tz::Offset: fmt::Display,
    {
        format!("{}\n{}\n", render_timestamp(self.timestamp, tz), self.content)
    }
}

/// Listing entry in UTC, the zone note times are recorded in.
impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.listing_in(&Utc))
    }
}
