//! Status context construction and the load-or-recover entry point.

use semver::Version;
use tracing::{info, warn};

use crate::index::{IndexStore, LibraryIndex};

use super::local::{InstalledLibrary, LocalLibraryStore};
use super::probe;
use super::recovery::recover_from_corrupt_index;
use super::report::{LibProcessResults, LibraryStatus, ProcessResult};
use super::ManagerResult;

/// The reconciled status view handed to the presentation layer.
///
/// One entry per library known from the index or found in the libraries
/// directory. Immutable after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusContext {
    results: LibProcessResults,
}

impl StatusContext {
    pub(crate) fn new(results: LibProcessResults) -> Self {
        Self { results }
    }

    /// Report rows in discovery order.
    pub fn results(&self) -> &LibProcessResults {
        &self.results
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// True if no libraries were discovered.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

/// Outcome of attempting to load the catalog.
#[derive(Debug)]
pub enum LoadOutcome {
    /// The catalog parsed; build a status context from it.
    Loaded(LibraryIndex),
    /// The catalog was corrupt and a degraded context was synthesized from
    /// the filesystem instead.
    Recovered(StatusContext),
}

/// Attempt the index load, falling back to filesystem recovery.
///
/// Index corruption is always downgraded to a recovery attempt; the error
/// returned here can only be the recovery's own failure to enumerate the
/// libraries directory.
pub fn load_or_recover(
    index_store: &IndexStore,
    libraries: &LocalLibraryStore,
) -> ManagerResult<LoadOutcome> {
    match index_store.load() {
        Ok(index) => Ok(LoadOutcome::Loaded(index)),
        Err(err) => {
            warn!(error = %err, "index load failed, attempting filesystem recovery");
            let context = recover_from_corrupt_index(libraries)?;
            warn!(entries = context.len(), "recovered a degraded status context");
            Ok(LoadOutcome::Recovered(context))
        }
    }
}

/// Build the consolidated status report.
///
/// This is the single caller-facing entry point: it returns either a
/// complete [`StatusContext`] (possibly containing "Unknown Version"
/// entries) or one fatal error. There is no partial output.
pub fn status_context(
    index_store: &IndexStore,
    libraries: &LocalLibraryStore,
) -> ManagerResult<StatusContext> {
    match load_or_recover(index_store, libraries)? {
        LoadOutcome::Loaded(index) => {
            info!(libraries = index.len(), "building status context from loaded index");
            build_status_context(&index, libraries)
        }
        LoadOutcome::Recovered(context) => Ok(context),
    }
}

/// Cross-reference a loaded index with the installed libraries.
///
/// Absence of catalog data degrades individual entries, never the whole
/// call; the only failure is the directory enumeration itself.
pub fn build_status_context(
    index: &LibraryIndex,
    libraries: &LocalLibraryStore,
) -> ManagerResult<StatusContext> {
    let mut results = LibProcessResults::new();
    for installed in libraries.list()? {
        results.push(classify(index, &installed));
    }
    Ok(StatusContext::new(results))
}

/// Classify one installed library against the index.
fn classify(index: &LibraryIndex, installed: &InstalledLibrary) -> ProcessResult {
    let name = installed.index_name();

    let Some(library) = index.find(&name) else {
        warn!(folder = installed.folder_name(), "not in index, using folder name");
        return probe::resolve_from_folder(installed.folder_name());
    };

    // An indexed library with no releases has nothing to compare against.
    let Some(latest) = library.latest() else {
        return probe::resolve_from_folder(installed.folder_name());
    };

    match installed.version_str() {
        Some(version) => {
            let status = if is_current(version, &latest.version) {
                LibraryStatus::UpToDate
            } else {
                LibraryStatus::Outdated
            };
            ProcessResult::new(library.name.clone(), status, None)
        }
        // Indexed but the folder carries no version suffix: the library is
        // known, its installed version is not.
        None => ProcessResult::new(
            library.name.clone(),
            LibraryStatus::Outdated,
            Some(probe::UNKNOWN_VERSION.to_string()),
        ),
    }
}

/// Compare semantically when the installed suffix parses as a version,
/// by string equality against the latest release otherwise.
fn is_current(installed: &str, latest: &Version) -> bool {
    match Version::parse(installed) {
        Ok(version) => version >= *latest,
        Err(_) => installed == latest.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::parse_library_index;
    use crate::manager::ManagerError;
    use std::fs;
    use tempfile::TempDir;

    fn test_index() -> LibraryIndex {
        parse_library_index(
            r#"{"libraries":[
                {"name":"Servo","releases":[{"version":"1.0.0"},{"version":"1.1.0"}]},
                {"name":"Audio Player","releases":[{"version":"2.3.1"}]},
                {"name":"Hollow","releases":[]}
            ]}"#,
        )
        .unwrap()
    }

    fn library_root(folders: &[&str]) -> TempDir {
        let temp = TempDir::new().unwrap();
        for folder in folders {
            fs::create_dir(temp.path().join(folder)).unwrap();
        }
        temp
    }

    #[test]
    fn test_up_to_date() {
        let temp = library_root(&["Servo-1.1.0"]);
        let store = LocalLibraryStore::new(temp.path());
        let context = build_status_context(&test_index(), &store).unwrap();

        let rows = context.results().as_slice();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Servo");
        assert_eq!(rows[0].status, LibraryStatus::UpToDate);
        assert_eq!(rows[0].error, None);
    }

    #[test]
    fn test_outdated() {
        let temp = library_root(&["Servo-1.0.0"]);
        let store = LocalLibraryStore::new(temp.path());
        let context = build_status_context(&test_index(), &store).unwrap();

        assert_eq!(context.results().as_slice()[0].status, LibraryStatus::Outdated);
    }

    #[test]
    fn test_underscored_name_matches_index() {
        let temp = library_root(&["Audio_Player-2.3.1"]);
        let store = LocalLibraryStore::new(temp.path());
        let context = build_status_context(&test_index(), &store).unwrap();

        let rows = context.results().as_slice();
        assert_eq!(rows[0].name, "Audio Player");
        assert_eq!(rows[0].status, LibraryStatus::UpToDate);
    }

    #[test]
    fn test_unindexed_falls_back_to_probe() {
        let temp = library_root(&["My_Weird_Lib-2"]);
        let store = LocalLibraryStore::new(temp.path());
        let context = build_status_context(&test_index(), &store).unwrap();

        let rows = context.results().as_slice();
        assert_eq!(rows[0].name, "My Weird Lib v. 2");
        assert_eq!(rows[0].status, LibraryStatus::Unknown);
        assert_eq!(rows[0].error.as_deref(), Some(probe::UNKNOWN_VERSION));
    }

    #[test]
    fn test_indexed_without_version_suffix() {
        let temp = library_root(&["Servo"]);
        let store = LocalLibraryStore::new(temp.path());
        let context = build_status_context(&test_index(), &store).unwrap();

        let rows = context.results().as_slice();
        assert_eq!(rows[0].name, "Servo");
        assert_eq!(rows[0].status, LibraryStatus::Outdated);
        assert_eq!(rows[0].error.as_deref(), Some(probe::UNKNOWN_VERSION));
    }

    #[test]
    fn test_indexed_with_no_releases_falls_back() {
        let temp = library_root(&["Hollow-0.1.0"]);
        let store = LocalLibraryStore::new(temp.path());
        let context = build_status_context(&test_index(), &store).unwrap();

        let rows = context.results().as_slice();
        assert_eq!(rows[0].status, LibraryStatus::Unknown);
        assert_eq!(rows[0].error.as_deref(), Some(probe::UNKNOWN_VERSION));
    }

    #[test]
    fn test_every_indexed_library_is_classified() {
        let temp = library_root(&["Servo-1.0.0", "Servo_Extra-9.9.9", "Audio_Player-2.3.1"]);
        let store = LocalLibraryStore::new(temp.path());
        let context = build_status_context(&test_index(), &store).unwrap();

        for row in context.results() {
            if row.name == "Servo" || row.name == "Audio Player" {
                assert_ne!(row.status, LibraryStatus::Unknown);
            }
        }
    }

    #[test]
    fn test_is_current_non_semver_falls_back_to_string_equality() {
        let latest = Version::new(2, 0, 0);
        assert!(is_current("2.0.0", &latest));
        assert!(!is_current("two", &latest));
        assert!(!is_current("1.9", &latest));
    }

    #[test]
    fn test_load_outcome_loaded() {
        let temp = TempDir::new().unwrap();
        let index_path = temp.path().join("library_index.json");
        fs::write(
            &index_path,
            r#"{"libraries":[{"name":"Servo","releases":[{"version":"1.1.0"}]}]}"#,
        )
        .unwrap();
        fs::create_dir(temp.path().join("libs")).unwrap();

        let outcome = load_or_recover(
            &IndexStore::new(&index_path),
            &LocalLibraryStore::new(temp.path().join("libs")),
        )
        .unwrap();
        assert!(matches!(outcome, LoadOutcome::Loaded(_)));
    }

    #[test]
    fn test_load_outcome_recovered() {
        let temp = TempDir::new().unwrap();
        let index_path = temp.path().join("library_index.json");
        fs::write(&index_path, "garbage").unwrap();
        let libs = temp.path().join("libs");
        fs::create_dir(&libs).unwrap();
        fs::create_dir(libs.join("Servo-1.1.0")).unwrap();

        let outcome =
            load_or_recover(&IndexStore::new(&index_path), &LocalLibraryStore::new(&libs))
                .unwrap();
        match outcome {
            LoadOutcome::Recovered(context) => assert_eq!(context.len(), 1),
            other => panic!("expected recovery, got {other:?}"),
        }
    }

    #[test]
    fn test_status_context_fatal_when_recovery_impossible() {
        let temp = TempDir::new().unwrap();
        // No index file, and the libraries "directory" is a file.
        let libs = temp.path().join("libs");
        fs::write(&libs, b"").unwrap();

        let result = status_context(
            &IndexStore::new(temp.path().join("library_index.json")),
            &LocalLibraryStore::new(&libs),
        );
        assert!(matches!(result, Err(ManagerError::RecoveryFailed { .. })));
    }
}
