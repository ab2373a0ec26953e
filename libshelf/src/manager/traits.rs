//! Trait seams for the manager's external collaborators.
//!
//! These abstractions keep the network fetch and the archive format out of
//! the reconciliation core, and enable testing without network access.

use std::path::Path;

use super::ManagerResult;

/// Fetches the raw catalog payload from a remote index service.
pub trait IndexFetcher: Send + Sync {
    /// Fetch the catalog payload from a URL.
    ///
    /// # Arguments
    ///
    /// * `url` - The URL of the published catalog file
    ///
    /// # Returns
    ///
    /// The raw payload text; validation against the index shape is the
    /// caller's job (see `IndexStore::refresh`).
    fn fetch_index(&self, url: &str) -> ManagerResult<String>;
}

/// Extractor for library archives.
pub trait ArchiveExtractor: Send + Sync {
    /// Extract an archive into a destination directory.
    ///
    /// # Arguments
    ///
    /// * `archive_path` - Path to the archive file
    /// * `dest_dir` - Directory to extract into
    ///
    /// # Returns
    ///
    /// The number of file entries written on success.
    fn extract(&self, archive_path: &Path, dest_dir: &Path) -> ManagerResult<usize>;

    /// List entry names within an archive without extracting.
    fn list_contents(&self, archive_path: &Path) -> ManagerResult<Vec<String>>;
}
