//! Catalog data model and JSON parsing.

use semver::Version;
use serde::{Deserialize, Serialize};

/// The deserialized library catalog.
///
/// Library names are unique keys; releases for a given name are
/// distinguishable by version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibraryIndex {
    /// Every library known to the catalog.
    pub libraries: Vec<IndexedLibrary>,
}

impl LibraryIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self {
            libraries: Vec::new(),
        }
    }

    /// Find a library by name.
    pub fn find(&self, name: &str) -> Option<&IndexedLibrary> {
        self.libraries
            .iter()
            .find(|l| l.name.eq_ignore_ascii_case(name))
    }

    /// Number of libraries in the catalog.
    pub fn len(&self) -> usize {
        self.libraries.len()
    }

    /// True if the catalog lists no libraries.
    pub fn is_empty(&self) -> bool {
        self.libraries.is_empty()
    }
}

impl Default for LibraryIndex {
    fn default() -> Self {
        Self::new()
    }
}

/// A single library record in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexedLibrary {
    /// Library display name; unique within the catalog.
    pub name: String,

    /// Available releases, in publication order.
    pub releases: Vec<Release>,
}

impl IndexedLibrary {
    /// The newest release by version.
    pub fn latest(&self) -> Option<&Release> {
        self.releases.iter().max_by(|a, b| a.version.cmp(&b.version))
    }

    /// Find a release by exact version string.
    pub fn release(&self, version: &str) -> Option<&Release> {
        self.releases
            .iter()
            .find(|r| r.version.to_string() == version)
    }
}

/// One release of a library.
///
/// Only `version` participates in status reconciliation; the remaining
/// fields are carried for the download/install collaborators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Release {
    /// Release version.
    pub version: Version,

    /// Archive download URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// SHA-256 checksum of the archive.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checksum: Option<String>,

    /// Archive size in bytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
}

/// Parse a catalog payload into a [`LibraryIndex`].
///
/// # Format
///
/// ```json
/// {
///   "libraries": [
///     { "name": "Servo",
///       "releases": [ { "version": "1.1.0", "url": "...", "checksum": "...", "size": 1024 } ] }
///   ]
/// }
/// ```
pub fn parse_library_index(content: &str) -> Result<LibraryIndex, serde_json::Error> {
    serde_json::from_str(content)
}
