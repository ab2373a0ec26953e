//! Local library store: discovery of installed libraries on disk.
//!
//! The libraries directory holds one immediate child directory per
//! installed library. Folder naming convention: words separated by
//! underscores, with an optional version suffix separated by a hyphen
//! (e.g. `Audio_Player-2.3.1`). This store treats the directory as
//! read-only; [`truncate_dir`] is a separate collaborator used by the
//! install workflow, never by status reconciliation.

use std::fs;
use std::path::{Path, PathBuf};

use super::{ManagerError, ManagerResult};

/// One folder under the libraries root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstalledLibrary {
    folder_name: String,
    path: PathBuf,
}

impl InstalledLibrary {
    /// Raw folder name as it appears on disk.
    pub fn folder_name(&self) -> &str {
        &self.folder_name
    }

    /// Full path of the library folder.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Name to look up in the catalog: the part before the first hyphen,
    /// with underscores restored to spaces.
    ///
    /// Best-effort: a hyphen that is part of the library name itself is
    /// indistinguishable from the version separator.
    pub fn index_name(&self) -> String {
        let name_part = self
            .folder_name
            .split('-')
            .next()
            .unwrap_or(&self.folder_name);
        name_part.replace('_', " ")
    }

    /// Version suffix after the first hyphen, if the folder carries one.
    pub fn version_str(&self) -> Option<&str> {
        self.folder_name.split_once('-').map(|(_, version)| version)
    }
}

/// Store for enumerating locally installed libraries.
#[derive(Debug, Clone)]
pub struct LocalLibraryStore {
    root: PathBuf,
}

impl LocalLibraryStore {
    /// Create a store rooted at the libraries directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Root directory of the store.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// List installed library folders.
    ///
    /// A missing root means nothing is installed. Non-directory children
    /// (stray files, archives) are skipped. Results are sorted by folder
    /// name so report order is stable across platforms.
    pub fn list(&self) -> ManagerResult<Vec<InstalledLibrary>> {
        let mut libraries = Vec::new();

        if !self.root.exists() {
            return Ok(libraries);
        }

        let entries = fs::read_dir(&self.root).map_err(|e| ManagerError::ReadFailed {
            path: self.root.clone(),
            source: e,
        })?;

        for entry in entries.flatten() {
            let path = entry.path();
            if !path.is_dir() {
                continue;
            }
            let folder_name = entry.file_name().to_string_lossy().into_owned();
            libraries.push(InstalledLibrary { folder_name, path });
        }

        libraries.sort_by(|a, b| a.folder_name.cmp(&b.folder_name));
        Ok(libraries)
    }
}

/// Remove every immediate child of `dir`, keeping the directory itself.
///
/// Children are removed recursively. The first failed removal aborts the
/// whole operation and surfaces that failure; no rollback is attempted.
pub fn truncate_dir(dir: &Path) -> ManagerResult<()> {
    let entries = fs::read_dir(dir).map_err(|e| ManagerError::ReadFailed {
        path: dir.to_path_buf(),
        source: e,
    })?;

    for entry in entries {
        let entry = entry.map_err(|e| ManagerError::ReadFailed {
            path: dir.to_path_buf(),
            source: e,
        })?;
        let path = entry.path();
        let removed = if path.is_dir() {
            fs::remove_dir_all(&path)
        } else {
            fs::remove_file(&path)
        };
        removed.map_err(|e| ManagerError::WriteFailed { path, source: e })?;
    }

    Ok(())
}
