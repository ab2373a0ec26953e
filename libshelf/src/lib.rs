//! libshelf - local view of a remote library catalog.
//!
//! This library maintains a local copy of a published library index and
//! reconciles it against the libraries actually installed on disk,
//! producing one consolidated status row per library.
//!
//! # High-Level API
//!
//! ```ignore
//! use libshelf::config::ConfigFile;
//! use libshelf::index::IndexStore;
//! use libshelf::manager::{status_context, LocalLibraryStore};
//!
//! let config = ConfigFile::load()?;
//! let index_store = IndexStore::new(&config.index.path);
//! let libraries = LocalLibraryStore::new(&config.libraries.directory);
//!
//! // A corrupt or missing index degrades to a best-effort view instead
//! // of failing; only an unreadable libraries directory is fatal.
//! let context = status_context(&index_store, &libraries)?;
//! for row in context.results() {
//!     println!("{} {}", row.name, row.status);
//! }
//! ```

pub mod config;
pub mod index;
pub mod logging;
pub mod manager;

/// Version of the libshelf library and CLI.
///
/// Synchronized across all workspace members; injected at compile time
/// from `Cargo.toml`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
