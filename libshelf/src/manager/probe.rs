//! Filesystem probe: best-effort library identity from a folder name.

use super::report::{LibraryStatus, ProcessResult};

/// Diagnostic attached to every entry whose identity was guessed from its
/// folder name instead of resolved against the catalog.
pub const UNKNOWN_VERSION: &str = "Unknown Version";

/// Derive a display identity for a library folder that could not be
/// matched against the catalog.
///
/// The transform is fixed and deterministic: underscores become single
/// spaces (folder convention for multi-word names), then the first hyphen
/// becomes the literal `" v. "` (folder convention for an embedded version
/// suffix). A name with no separators passes through unchanged — absence
/// of separators does not mean the entry was resolved, so the result still
/// carries the [`UNKNOWN_VERSION`] diagnostic.
///
/// Best-effort only: a hyphen that belongs to the library name itself is
/// indistinguishable from the version separator.
pub fn resolve_from_folder(folder_name: &str) -> ProcessResult {
    let spaced = folder_name.replace('_', " ");
    let name = match spaced.split_once('-') {
        Some((head, tail)) => format!("{head} v. {tail}"),
        None => spaced,
    };

    ProcessResult::new(name, LibraryStatus::Unknown, Some(UNKNOWN_VERSION.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transform_name_and_version() {
        let result = resolve_from_folder("Foo_Bar-1.0");
        assert_eq!(result.name, "Foo Bar v. 1.0");
        assert_eq!(result.status, LibraryStatus::Unknown);
        assert_eq!(result.status.label(), "");
        assert_eq!(result.error.as_deref(), Some(UNKNOWN_VERSION));
    }

    #[test]
    fn test_no_separators_passes_through() {
        let result = resolve_from_folder("NoSeparators");
        assert_eq!(result.name, "NoSeparators");
        assert_eq!(result.error.as_deref(), Some(UNKNOWN_VERSION));
    }

    #[test]
    fn test_only_first_hyphen_is_version_separator() {
        let result = resolve_from_folder("Foo-1.0.0-rc.1");
        assert_eq!(result.name, "Foo v. 1.0.0-rc.1");
    }

    #[test]
    fn test_underscores_without_version() {
        let result = resolve_from_folder("My_Weird_Lib");
        assert_eq!(result.name, "My Weird Lib");
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(
            resolve_from_folder("My_Weird_Lib-2"),
            resolve_from_folder("My_Weird_Lib-2")
        );
        assert_eq!(resolve_from_folder("My_Weird_Lib-2").name, "My Weird Lib v. 2");
    }
}
