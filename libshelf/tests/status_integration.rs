//! End-to-end status reconciliation over a real temporary filesystem.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use libshelf::index::IndexStore;
use libshelf::manager::{
    status_context, LibraryStatus, LocalLibraryStore, ManagerError,
};

const CATALOG: &str = r#"{
  "libraries": [
    { "name": "Servo", "releases": [ { "version": "1.1.0" } ] }
  ]
}"#;

struct Fixture {
    _temp: TempDir,
    index_path: PathBuf,
    libraries_dir: PathBuf,
}

impl Fixture {
    fn new() -> Self {
        let temp = TempDir::new().unwrap();
        let index_path = temp.path().join("library_index.json");
        let libraries_dir = temp.path().join("libraries");
        fs::create_dir(&libraries_dir).unwrap();
        Self {
            _temp: temp,
            index_path,
            libraries_dir,
        }
    }

    fn write_catalog(&self, content: &str) {
        fs::write(&self.index_path, content).unwrap();
    }

    fn install(&self, folder: &str) {
        let dir = self.libraries_dir.join(folder);
        fs::create_dir(&dir).unwrap();
        // A marker file so the folder looks like a real installation.
        fs::write(dir.join("library.properties"), b"").unwrap();
    }

    fn status(&self) -> Result<libshelf::manager::StatusContext, ManagerError> {
        status_context(
            &IndexStore::new(&self.index_path),
            &LocalLibraryStore::new(&self.libraries_dir),
        )
    }
}

fn assert_row(
    rows: &[libshelf::manager::ProcessResult],
    name: &str,
    label: &str,
    error: Option<&str>,
) {
    let row = rows
        .iter()
        .find(|r| r.name == name)
        .unwrap_or_else(|| panic!("no row named {name:?} in {rows:?}"));
    assert_eq!(row.status.label(), label);
    assert_eq!(row.error.as_deref(), error);
}

#[test]
fn installed_at_latest_release_is_up_to_date() {
    let fx = Fixture::new();
    fx.write_catalog(CATALOG);
    fx.install("Servo-1.1.0");

    let context = fx.status().unwrap();
    assert_eq!(context.len(), 1);
    assert_row(context.results().as_slice(), "Servo", "up-to-date", None);
}

#[test]
fn installed_behind_latest_release_is_outdated() {
    let fx = Fixture::new();
    fx.write_catalog(CATALOG);
    fx.install("Servo-1.0.0");

    let context = fx.status().unwrap();
    assert_row(context.results().as_slice(), "Servo", "outdated", None);
}

#[test]
fn unindexed_library_is_guessed_from_folder_name() {
    let fx = Fixture::new();
    fx.write_catalog(CATALOG);
    fx.install("My_Weird_Lib-2");

    let context = fx.status().unwrap();
    assert_row(
        context.results().as_slice(),
        "My Weird Lib v. 2",
        "",
        Some("Unknown Version"),
    );
}

#[test]
fn mixed_directory_yields_one_row_per_folder() {
    let fx = Fixture::new();
    fx.write_catalog(CATALOG);
    fx.install("Servo-1.1.0");
    fx.install("My_Weird_Lib-2");

    let context = fx.status().unwrap();
    assert_eq!(context.len(), 2);
    let rows = context.results().as_slice();
    assert_row(rows, "Servo", "up-to-date", None);
    assert_row(rows, "My Weird Lib v. 2", "", Some("Unknown Version"));
}

#[test]
fn missing_catalog_recovers_with_one_entry_per_folder() {
    let fx = Fixture::new();
    fx.install("Servo-1.1.0");
    fx.install("Audio_Player-2.3.1");
    fx.install("NoSeparators");

    let context = fx.status().unwrap();
    assert_eq!(context.len(), 3);
    for row in context.results() {
        assert_eq!(row.status, LibraryStatus::Unknown);
        assert_eq!(row.error.as_deref(), Some("Unknown Version"));
    }
}

#[test]
fn corrupt_catalog_recovers_with_guessed_identities() {
    let fx = Fixture::new();
    fx.write_catalog("{ \"libraries\": [ truncated");
    fx.install("Servo-1.1.0");

    let context = fx.status().unwrap();
    assert_eq!(context.len(), 1);
    assert_row(
        context.results().as_slice(),
        "Servo v. 1.1.0",
        "",
        Some("Unknown Version"),
    );
}

#[test]
fn unreadable_libraries_directory_is_fatal_during_recovery() {
    let temp = TempDir::new().unwrap();
    // No catalog file, and the libraries "directory" is a plain file, so
    // enumeration fails regardless of process privileges.
    let bogus = temp.path().join("libraries");
    fs::write(&bogus, b"").unwrap();

    let result = status_context(
        &IndexStore::new(temp.path().join("library_index.json")),
        &LocalLibraryStore::new(&bogus),
    );

    match result {
        Err(ManagerError::RecoveryFailed { path, .. }) => assert_eq!(path, bogus),
        other => panic!("expected RecoveryFailed, got {other:?}"),
    }
}

#[test]
fn report_order_is_stable_across_runs() {
    let fx = Fixture::new();
    fx.write_catalog(CATALOG);
    fx.install("Zebra_Lib-1.0.0");
    fx.install("Servo-1.1.0");
    fx.install("Alpha_Lib-0.1.0");

    let first: Vec<String> = fx
        .status()
        .unwrap()
        .results()
        .iter()
        .map(|r| r.name.clone())
        .collect();
    let second: Vec<String> = fx
        .status()
        .unwrap()
        .results()
        .iter()
        .map(|r| r.name.clone())
        .collect();

    assert_eq!(first, second);
    assert_eq!(first.len(), 3);
}

#[test]
fn marker_files_in_libraries_root_are_ignored() {
    let fx = Fixture::new();
    fx.write_catalog(CATALOG);
    fx.install("Servo-1.1.0");
    fs::write(fx.libraries_dir.join("README.txt"), b"not a library").unwrap();

    let context = fx.status().unwrap();
    assert_eq!(context.len(), 1);
}
