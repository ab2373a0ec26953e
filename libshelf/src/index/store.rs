//! Index Store: loads the on-disk catalog file and refreshes it from a
//! fetched payload.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

use super::catalog::{parse_library_index, LibraryIndex};

/// Failure to produce a usable index from the catalog file.
///
/// All variants are the same failure class for callers: the index is
/// corrupt, and a recovery pass over the filesystem is required to get a
/// status view at all.
#[derive(Debug, Error)]
pub enum CorruptIndexError {
    /// Catalog file does not exist at the configured location.
    #[error("index file not found at {path}")]
    Missing { path: PathBuf },

    /// Catalog file exists but could not be read.
    #[error("cannot read index file {path}: {source}")]
    Unreadable { path: PathBuf, source: io::Error },

    /// Catalog file was read but does not parse into the index shape.
    #[error("malformed index file {path}: {source}")]
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Failure to refresh the catalog file from a fetched payload.
#[derive(Debug, Error)]
pub enum RefreshError {
    /// The fetched payload does not parse; the existing file is untouched.
    #[error("fetched index payload is malformed: {source}")]
    Malformed { source: serde_json::Error },

    /// The validated payload could not be written to disk.
    #[error("cannot write index file {path}: {source}")]
    Write { path: PathBuf, source: io::Error },
}

/// Loads and refreshes the catalog file at its configured location.
#[derive(Debug, Clone)]
pub struct IndexStore {
    path: PathBuf,
}

impl IndexStore {
    /// Create a store for the catalog file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the catalog file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the catalog file into a [`LibraryIndex`].
    ///
    /// No retry is attempted here; a missing or stale file is for the
    /// index-fetch collaborator to repair.
    pub fn load(&self) -> Result<LibraryIndex, CorruptIndexError> {
        if !self.path.exists() {
            return Err(CorruptIndexError::Missing {
                path: self.path.clone(),
            });
        }

        let content =
            fs::read_to_string(&self.path).map_err(|e| CorruptIndexError::Unreadable {
                path: self.path.clone(),
                source: e,
            })?;

        let index =
            parse_library_index(&content).map_err(|e| CorruptIndexError::Malformed {
                path: self.path.clone(),
                source: e,
            })?;

        debug!(libraries = index.len(), "index loaded");
        Ok(index)
    }

    /// Validate a fetched payload and write it as the new catalog file.
    ///
    /// A payload that does not parse is rejected before anything is
    /// written, so a refresh can never replace a good index with a bad
    /// one. Returns the parsed index for immediate use.
    pub fn refresh(&self, payload: &str) -> Result<LibraryIndex, RefreshError> {
        let index =
            parse_library_index(payload).map_err(|e| RefreshError::Malformed { source: e })?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| RefreshError::Write {
                path: self.path.clone(),
                source: e,
            })?;
        }
        fs::write(&self.path, payload).map_err(|e| RefreshError::Write {
            path: self.path.clone(),
            source: e,
        })?;

        info!(libraries = index.len(), path = %self.path.display(), "index refreshed");
        Ok(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const SAMPLE: &str = r#"{"libraries":[{"name":"Servo","releases":[{"version":"1.1.0"}]}]}"#;

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().unwrap();
        let store = IndexStore::new(temp.path().join("library_index.json"));
        assert!(matches!(
            store.load(),
            Err(CorruptIndexError::Missing { .. })
        ));
    }

    #[test]
    fn test_load_malformed_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("library_index.json");
        fs::write(&path, "{ definitely not an index").unwrap();

        let store = IndexStore::new(&path);
        assert!(matches!(
            store.load(),
            Err(CorruptIndexError::Malformed { .. })
        ));
    }

    #[test]
    fn test_load_valid_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("library_index.json");
        fs::write(&path, SAMPLE).unwrap();

        let index = IndexStore::new(&path).load().unwrap();
        assert_eq!(index.len(), 1);
        assert!(index.find("Servo").is_some());
    }

    #[test]
    fn test_refresh_writes_valid_payload() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("library_index.json");

        let store = IndexStore::new(&path);
        let index = store.refresh(SAMPLE).unwrap();
        assert_eq!(index.len(), 1);

        // The written file loads back identically.
        let reloaded = store.load().unwrap();
        assert_eq!(index, reloaded);
    }

    #[test]
    fn test_refresh_rejects_malformed_payload() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("library_index.json");
        fs::write(&path, SAMPLE).unwrap();

        let store = IndexStore::new(&path);
        let result = store.refresh("not a catalog");
        assert!(matches!(result, Err(RefreshError::Malformed { .. })));

        // Existing file must be left untouched.
        assert_eq!(fs::read_to_string(&path).unwrap(), SAMPLE);
    }
}
