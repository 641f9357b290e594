//! Error types for the notes application.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures reading or copying the note data file.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Cannot access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Invalid note data in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Failures loading the note list from a source.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Invalid feed URL: {0}")]
    Url(#[from] url::ParseError),
    #[error("Feed request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Feed answered {status} for {url}")]
    Status { url: String, status: u16 },
    #[error("Feed body is not a note list: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DialogError {
    #[error("Option {0:?} is not offered by the select")]
    UnknownOption(String),
    #[error("A select needs at least one option")]
    NoOptions,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Errors surfaced by HTTP handlers.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "request failed");
        let body = ErrorBody {
            error: self.to_string(),
        };
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}
