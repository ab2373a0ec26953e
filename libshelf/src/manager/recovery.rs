//! Recovery strategy for a corrupt catalog.

use tracing::warn;

use super::local::LocalLibraryStore;
use super::probe;
use super::report::LibProcessResults;
use super::status::StatusContext;
use super::{ManagerError, ManagerResult};

/// Synthesize a usable status context without a valid index.
///
/// Invoked exactly once, only after the index store has reported
/// corruption. Every installed library becomes a probe-derived entry
/// carrying the "Unknown Version" diagnostic — precision is traded for
/// availability. The only failure mode is the inability to enumerate the
/// libraries directory, surfaced as [`ManagerError::RecoveryFailed`].
pub fn recover_from_corrupt_index(libraries: &LocalLibraryStore) -> ManagerResult<StatusContext> {
    let installed = libraries.list().map_err(|err| match err {
        ManagerError::ReadFailed { path, source } => ManagerError::RecoveryFailed { path, source },
        other => other,
    })?;

    let mut results = LibProcessResults::new();
    for library in &installed {
        warn!(folder = library.folder_name(), "resolving library from folder name");
        results.push(probe::resolve_from_folder(library.folder_name()));
    }

    Ok(StatusContext::new(results))
}
