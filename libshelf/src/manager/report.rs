//! Report rows produced by status reconciliation.

use std::fmt;
use std::slice;

/// Classification of one installed library against the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LibraryStatus {
    /// Installed version is the newest release the catalog knows.
    UpToDate,
    /// The catalog lists a newer release than the installed version.
    Outdated,
    /// Never matched against catalog data.
    Unknown,
}

impl LibraryStatus {
    /// Report label; [`LibraryStatus::Unknown`] renders as the empty
    /// string.
    pub fn label(&self) -> &'static str {
        match self {
            LibraryStatus::UpToDate => "up-to-date",
            LibraryStatus::Outdated => "outdated",
            LibraryStatus::Unknown => "",
        }
    }
}

impl fmt::Display for LibraryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One row of the status report.
///
/// Status and diagnostic are mutually informative, not mutually
/// exclusive: a row may carry both (e.g. an indexed library whose
/// installed version could not be read from its folder name).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessResult {
    /// Display name of the library.
    pub name: String,
    /// Status classification.
    pub status: LibraryStatus,
    /// Optional diagnostic note.
    pub error: Option<String>,
}

impl ProcessResult {
    /// Create a report row.
    pub fn new(name: impl Into<String>, status: LibraryStatus, error: Option<String>) -> Self {
        Self {
            name: name.into(),
            status,
            error,
        }
    }
}

/// Ordered collection of report rows.
///
/// Insertion order is discovery order and is preserved verbatim; rows are
/// appended, never merged or deduplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LibProcessResults {
    results: Vec<ProcessResult>,
}

impl LibProcessResults {
    /// Create an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one row.
    pub fn push(&mut self, result: ProcessResult) {
        self.results.push(result);
    }

    /// Iterate rows in insertion order.
    pub fn iter(&self) -> slice::Iter<'_, ProcessResult> {
        self.results.iter()
    }

    /// Rows as a slice, in insertion order.
    pub fn as_slice(&self) -> &[ProcessResult] {
        &self.results
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// True if the report has no rows.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

impl<'a> IntoIterator for &'a LibProcessResults {
    type Item = &'a ProcessResult;
    type IntoIter = slice::Iter<'a, ProcessResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
