//! Loading notes and filling a container with cards.

use crate::card::create_card;
use crate::dom::Element;
use crate::error::LoadError;
use crate::models::Note;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use url::Url;

/// Path of the feed document, relative to the server root.
pub const FEED_PATH: &str = "/static/data.json";

/// Anything that can hand out the note list, newest first.
#[async_trait]
pub trait NoteSource: Send + Sync {
    async fn load(&self) -> Result<Vec<Note>, LoadError>;
}

// ============================================================================
// HTTP Feed
// ============================================================================

/// Reads the feed from a running server.
///
/// One GET per `load()`. No retry and no timeout: a hung server leaves the
/// caller waiting.
#[derive(Debug, Clone)]
pub struct FeedClient {
    client: reqwest::Client,
    feed_url: Url,
}

impl FeedClient {
    pub fn new(base_url: &str) -> Result<Self, LoadError> {
        let feed_url = Url::parse(base_url)?.join(FEED_PATH)?;
        Ok(Self {
            client: reqwest::Client::new(),
            feed_url,
        })
    }

    pub fn feed_url(&self) -> &Url {
        &self.feed_url
    }
}

#[async_trait]
impl NoteSource for FeedClient {
    async fn load(&self) -> Result<Vec<Note>, LoadError> {
        tracing::debug!(url = %self.feed_url, "fetching note feed");
        let response = self.client.get(self.feed_url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status {
                url: self.feed_url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        let mut notes: Vec<Note> = serde_json::from_slice(&body)?;
        // The feed appends new notes at the end.
        notes.reverse();
        Ok(notes)
    }
}

// ============================================================================
// Populating
// ============================================================================

/// Appends one card per note to `container`, in slice order.
pub fn append_cards(notes: &[Note], container: &mut Element) -> usize {
    for note in notes {
        container.append_child(create_card(note));
    }
    notes.len()
}

/// Loads from `source` and appends the cards to `container`.
pub async fn populate<S>(source: &S, container: &mut Element) -> Result<usize, LoadError>
where
    S: NoteSource + ?Sized,
{
    let notes = source.load().await?;
    let count = append_cards(&notes, container);
    tracing::info!(cards = count, "populated container");
    Ok(count)
}

/// Runs [`populate`] as its own task.
///
/// The container is locked only after the load finishes. Await the handle to
/// learn how many cards were added or why loading failed.
pub fn spawn_populate(
    source: Arc<dyn NoteSource>,
    container: Arc<Mutex<Element>>,
) -> JoinHandle<Result<usize, LoadError>> {
    tokio::spawn(async move {
        let notes = source.load().await?;
        let mut main = container.lock().await;
        let count = append_cards(&notes, &mut main);
        tracing::info!(cards = count, "populated container");
        Ok(count)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::CARD_CLASS;
    use crate::error::StoreError;
    use std::path::PathBuf;

    struct FixedSource(Vec<Note>);

    #[async_trait]
    impl NoteSource for FixedSource {
        async fn load(&self) -> Result<Vec<Note>, LoadError> {
            Ok(self.0.clone())
        }
    }

    struct BrokenSource;

    #[async_trait]
    impl NoteSource for BrokenSource {
        async fn load(&self) -> Result<Vec<Note>, LoadError> {
            Err(LoadError::Store(StoreError::Io {
                path: PathBuf::from("data.json"),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
            }))
        }
    }

    fn ids(container: &Element) -> Vec<String> {
        container
            .children_with_class(CARD_CLASS)
            .filter_map(|c| c.id.clone())
            .collect()
    }

    #[test]
    fn test_feed_url_is_fixed_path() {
        let client = FeedClient::new("http://localhost:8000/some/page").unwrap();
        assert_eq!(client.feed_url().as_str(), "http://localhost:8000/static/data.json");
    }

    #[test]
    fn test_bad_base_url() {
        assert!(matches!(FeedClient::new("not a url"), Err(LoadError::Url(_))));
    }

    #[tokio::test]
    async fn test_populate_appends_in_load_order() {
        let source = FixedSource(vec![Note::new(3, "c"), Note::new(2, "b"), Note::new(1, "a")]);
        let mut main = Element::new("main").with_id("main");
        let count = populate(&source, &mut main).await.unwrap();
        assert_eq!(count, 3);
        assert_eq!(ids(&main), vec!["3", "2", "1"]);
    }

    #[tokio::test]
    async fn test_populate_empty_feed() {
        let mut main = Element::new("main");
        assert_eq!(populate(&FixedSource(Vec::new()), &mut main).await.unwrap(), 0);
        assert!(main.children.is_empty());
    }

    #[tokio::test]
    async fn test_populate_failure_leaves_container_untouched() {
        let mut main = Element::new("main");
        assert!(populate(&BrokenSource, &mut main).await.is_err());
        assert!(main.children.is_empty());
    }

    #[tokio::test]
    async fn test_spawned_populate_reports_completion() {
        let container = Arc::new(Mutex::new(Element::new("main")));
        let source: Arc<dyn NoteSource> = Arc::new(FixedSource(vec![Note::new(9, "x")]));
        let count = spawn_populate(source, container.clone()).await.unwrap().unwrap();
        assert_eq!(count, 1);
        assert_eq!(ids(&*container.lock().await), vec!["9"]);
    }

    #[tokio::test]
    async fn test_spawned_populate_reports_failure() {
        let container = Arc::new(Mutex::new(Element::new("main")));
        let result = spawn_populate(Arc::new(BrokenSource), container).await.unwrap();
        assert!(matches!(result, Err(LoadError::Store(_))));
    }
}
