//! Library catalog index: data model, parsing, and the on-disk store.
//!
//! The catalog is a JSON document published by the remote index service,
//! listing every library it knows about together with the releases
//! available for each. This module owns two concerns:
//!
//! - **Catalog model**: [`LibraryIndex`], [`IndexedLibrary`] and
//!   [`Release`], plus name lookup and latest-release selection.
//! - **Index Store**: [`IndexStore`] loads the catalog file from its
//!   configured location and reports structural corruption as a distinct
//!   [`CorruptIndexError`]; it also writes a freshly fetched payload back
//!   to disk after validating it.
//!
//! The index is constructed fresh on every status request and discarded
//! once the status context has been built; there is no in-memory cache
//! across requests.

mod catalog;
mod store;

pub use catalog::{parse_library_index, IndexedLibrary, LibraryIndex, Release};
pub use store::{CorruptIndexError, IndexStore, RefreshError};

// Re-export semver::Version for convenience
pub use semver::Version;
