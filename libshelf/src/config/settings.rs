//! Settings structs for all configuration sections.
//!
//! Each struct represents one `[section]` of the INI config file. These
//! are pure data types; parsing and serialization live in the file module.

use std::path::PathBuf;

/// Complete application configuration loaded from config.ini.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigFile {
    /// Catalog index settings
    pub index: IndexSettings,
    /// Installed-libraries settings
    pub libraries: LibrariesSettings,
    /// Logging settings
    pub logging: LoggingSettings,
}

/// Catalog index configuration (`[index]`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexSettings {
    /// Well-known location of the local catalog file.
    pub path: PathBuf,
    /// URL the catalog is fetched from on `--update-index`.
    pub url: String,
}

/// Installed-libraries configuration (`[libraries]`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibrariesSettings {
    /// Directory whose immediate children are installed libraries.
    pub directory: PathBuf,
}

/// Logging configuration (`[logging]`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingSettings {
    /// Directory for log files.
    pub directory: PathBuf,
    /// Log file name.
    pub file: String,
}
