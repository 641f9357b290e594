//! HTTP route handlers for the web application.

use crate::card::render_cards;
use crate::dialog::DialogController;
use crate::dom::Element;
use crate::error::{AppError, StoreError};
use crate::feed::{populate, NoteSource};
use crate::templates::{index_page, notes_fragment};
use crate::AppState;
use axum::{
    extract::State,
    http::header::CONTENT_TYPE,
    response::{Html, IntoResponse, Response},
};
use chrono::Local;
use std::io::ErrorKind;
use std::sync::Arc;

/// Id of the container the cards are appended to.
pub const MAIN_ID: &str = "main";

// ============================================================================
// Index Handler
// ============================================================================

pub async fn index(State(state): State<Arc<AppState>>) -> Result<Html<String>, AppError> {
    let mut main = Element::new("main").with_id(MAIN_ID);
    populate(&state.store, &mut main).await?;
    Ok(Html(index_page(&main, &DialogController::favorite_animal())))
}

// ============================================================================
// Partials
// ============================================================================

pub async fn notes_partial(State(state): State<Arc<AppState>>) -> Result<Html<String>, AppError> {
    let notes = state.store.load().await?;
    if notes.is_empty() {
        return Ok(Html(notes_fragment(&Element::new("main"))));
    }
    Ok(Html(render_cards(&notes, &Local)))
}

// ============================================================================
// Feed
// ============================================================================

/// The data file, byte for byte. Clients reverse it themselves.
pub async fn feed(State(state): State<Arc<AppState>>) -> Result<Response, AppError> {
    let path = state.store.path();
    let body = match tokio::fs::read(path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => b"[]".to_vec(),
        Err(source) => {
            return Err(StoreError::Io {
                path: path.to_path_buf(),
                source,
            }
            .into())
        }
    };
    Ok(([(CONTENT_TYPE, "application/json")], body).into_response())
}
