//! Note cards.
//!
//! Each note becomes a `div.card`:
//!
//! ```text
//! <div id="{timestamp}" class="card">
//!   <h2>{date}</h2>
//!   <p>{content}</p>
//!   <div class="links">
//!     <div><h3>References</h3></div>
//!     <div><h3>Mentions</h3></div>
//!   </div>
//! </div>
//! ```
//!
//! The links area is rendered empty; nothing feeds references or mentions yet.

use crate::dom::Element;
use crate::models::Note;
use chrono::{DateTime, Local, TimeZone, Timelike};

pub const CARD_CLASS: &str = "card";
pub const LINKS_CLASS: &str = "links";

/// Card header text: the UTC calendar date followed by the local time of day.
///
/// Hours, minutes and seconds are not zero padded, so 09:05:03 shows as
/// `9:5:3`. Pages already in circulation depend on this format.
pub fn format_card_date<Tz: TimeZone>(timestamp: i64, tz: &Tz) -> String {
    let Some(utc) = DateTime::from_timestamp(timestamp, 0) else {
        return "Invalid Date".to_string();
    };
    let local = utc.with_timezone(tz);
    format!(
        "{} {}:{}:{}",
        utc.format("%Y-%m-%d"),
        local.hour(),
        local.minute(),
        local.second()
    )
}

/// Builds the card for `note`, reading times in the machine's zone.
pub fn create_card(note: &Note) -> Element {
    create_card_in(note, &Local)
}

pub fn create_card_in<Tz: TimeZone>(note: &Note, tz: &Tz) -> Element {
    // Numeric ids are not valid selectors but browsers accept them.
    let mut card = Element::new("div")
        .with_id(note.timestamp.to_string())
        .with_class(CARD_CLASS);

    let mut header = Element::new("h2");
    header.set_inner_html(format_card_date(note.timestamp, tz));
    let mut body = Element::new("p");
    body.set_inner_html(note.content.clone());
    card.append_child(header);
    card.append_child(body);

    let mut links = Element::new("div").with_class(LINKS_CLASS);
    for heading in ["References", "Mentions"] {
        let mut summary = Element::new("h3");
        summary.set_inner_html(heading);
        let mut section = Element::new("div");
        section.append_child(summary);
        links.append_child(section);
    }
    card.append_child(links);

    card
}

/// Renders cards for `notes` back to back, in the given order.
pub fn render_cards<Tz: TimeZone>(notes: &[Note], tz: &Tz) -> String {
    notes
        .iter()
        .map(|note| create_card_in(note, tz).render())
        .collect()
}
