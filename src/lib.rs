//! Notecards library - re-exports for testing and external use.
//!
//! - `models`: the `Note` record
//! - `store`: the JSON data file the feed is served from
//! - `dom`: a small element tree for building markup
//! - `card`: note-to-card rendering
//! - `feed`: loading notes (file or HTTP) and populating containers
//! - `dialog`: the favorite-animal dialog controller
//! - `templates`: page layout, styles and inline scripts
//! - `handlers`: HTTP route handlers

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub mod card;
pub mod config;
pub mod dialog;
pub mod dom;
pub mod error;
pub mod feed;
pub mod handlers;
pub mod models;
pub mod store;
pub mod templates;

// ============================================================================
// Application State
// ============================================================================

#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Config,
    pub store: NoteStore,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, StoreError> {
        let store = NoteStore::open(&config.data_path)?;
        Ok(Self { config, store })
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn app(state: Arc<AppState>) -> Router {
    let mut router = Router::new()
        .route("/", get(handlers::index))
        .route("/partials/notes", get(handlers::notes_partial))
        .route(FEED_PATH, get(handlers::feed));

    if let Some(dir) = &state.config.static_dir {
        router = router.nest_service("/static", ServeDir::new(dir));
    }

    router.layer(TraceLayer::new_for_http()).with_state(state)
}

// Re-export commonly used types
pub use card::{create_card, create_card_in, format_card_date, render_cards};
pub use config::Config;
pub use dialog::{close_status, CloseEvent, DialogController, DialogElements, DialogState};
pub use dom::{html_escape, Element, Node};
pub use error::{AppError, ConfigError, DialogError, LoadError, StoreError};
pub use feed::{append_cards, populate, spawn_populate, FeedClient, NoteSource, FEED_PATH};
pub use models::Note;
pub use store::NoteStore;
