//! File-backed note storage.
//!
//! Notes live in a single JSON array, oldest first. The file is also what the
//! server hands out as the feed, so its order is the feed's source order.

use crate::error::{LoadError, StoreError};
use crate::feed::NoteSource;
use crate::models::Note;
use async_trait::async_trait;
use std::fs;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};

pub const DATA_FILE: &str = "data.json";

#[derive(Debug, Clone)]
pub struct NoteStore {
    path: PathBuf,
}

impl NoteStore {
    /// Opens the store under `data_path`, creating the directory if needed.
    pub fn open(data_path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let data_path = data_path.as_ref();
        fs::create_dir_all(data_path).map_err(|source| StoreError::Io {
            path: data_path.to_path_buf(),
            source,
        })?;
        Ok(Self {
            path: data_path.join(DATA_FILE),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Notes in file order. A missing file is an empty store.
    pub fn read_source(&self) -> Result<Vec<Note>, StoreError> {
        self.parse(fs::read_to_string(&self.path))
    }

    /// Same as [`read_source`](Self::read_source) without blocking the runtime.
    pub async fn read_source_async(&self) -> Result<Vec<Note>, StoreError> {
        self.parse(tokio::fs::read_to_string(&self.path).await)
    }

    fn parse(&self, read: io::Result<String>) -> Result<Vec<Note>, StoreError> {
        let raw = match read {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };
        serde_json::from_str(&raw).map_err(|source| StoreError::Json {
            path: self.path.clone(),
            source,
        })
    }

    /// Notes newest first.
    pub fn newest_first(&self) -> Result<Vec<Note>, StoreError> {
        let mut notes = self.read_source()?;
        notes.reverse();
        Ok(notes)
    }

    /// Copies the data file to `dest` and returns how many notes it holds.
    ///
    /// The copy is validated first so a corrupt store is never backed up
    /// over a good one.
    pub fn backup(&self, dest: impl AsRef<Path>) -> Result<usize, StoreError> {
        let dest = dest.as_ref();
        let notes = self.read_source()?;

        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent).map_err(|source| StoreError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        if self.path.is_file() {
            fs::copy(&self.path, dest).map_err(|source| StoreError::Io {
                path: dest.to_path_buf(),
                source,
            })?;
        } else {
            fs::write(dest, "[]").map_err(|source| StoreError::Io {
                path: dest.to_path_buf(),
                source,
            })?;
        }

        tracing::info!(dest = %dest.display(), notes = notes.len(), "backed up note store");
        Ok(notes.len())
    }
}

#[async_trait]
impl NoteSource for NoteStore {
    async fn load(&self) -> Result<Vec<Note>, LoadError> {
        let mut notes = self.read_source_async().await?;
        notes.reverse();
        Ok(notes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn store_with(raw: &str) -> (TempDir, NoteStore) {
        let dir = TempDir::new().unwrap();
        let store = NoteStore::open(dir.path()).unwrap();
        fs::write(store.path(), raw).unwrap();
        (dir, store)
    }

    #[test]
    fn test_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = NoteStore::open(dir.path().join("nested")).unwrap();
        assert!(store.read_source().unwrap().is_empty());
    }

    #[test]
    fn test_directory_in_place_of_data_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let store = NoteStore::open(dir.path()).unwrap();
        fs::create_dir(store.path()).unwrap();
        assert!(matches!(store.read_source(), Err(StoreError::Io { .. })));
    }

    #[tokio::test]
    async fn test_async_load_rejects_directory_data_file() {
        let dir = TempDir::new().unwrap();
        let store = NoteStore::open(dir.path()).unwrap();
        fs::create_dir(store.path()).unwrap();
        assert!(matches!(store.load().await, Err(LoadError::Store(StoreError::Io { .. }))));
    }

    #[tokio::test]
    async fn test_async_load_of_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = NoteStore::open(dir.path()).unwrap();
        assert!(store.load().await.unwrap().is_empty());
    }

    #[test]
    fn test_newest_first_reverses_source_order() {
        let (_dir, store) = store_with(
            r#"[{"timestamp": 1, "content": "a"}, {"timestamp": 2, "content": "b"}]"#,
        );
        let stamps: Vec<i64> = store.newest_first().unwrap().iter().map(|n| n.timestamp).collect();
        assert_eq!(stamps, vec![2, 1]);
    }

    #[test]
    fn test_invalid_json_is_reported() {
        let (_dir, store) = store_with("not json");
        assert!(matches!(store.read_source(), Err(StoreError::Json { .. })));
    }

    #[test]
    fn test_backup_copies_file() {
        let (dir, store) = store_with(r#"[{"timestamp": 5, "content": "x"}]"#);
        let dest = dir.path().join("backups").join("copy.json");
        assert_eq!(store.backup(&dest).unwrap(), 1);
        assert_eq!(
            fs::read_to_string(&dest).unwrap(),
            fs::read_to_string(store.path()).unwrap()
        );
    }

    #[test]
    fn test_backup_refuses_corrupt_store() {
        let (dir, store) = store_with("{");
        let dest = dir.path().join("copy.json");
        assert!(store.backup(&dest).is_err());
        assert!(!dest.exists());
    }

    #[tokio::test]
    async fn test_store_as_note_source() {
        let (_dir, store) = store_with(
            r#"[{"timestamp": 10, "content": "old"}, {"timestamp": 20, "content": "new"}]"#,
        );
        let notes = store.load().await.unwrap();
        assert_eq!(notes[0].content, "new");
    }
}
