//! Default values and path helpers for all configuration settings.

use std::path::PathBuf;

use super::settings::{ConfigFile, IndexSettings, LibrariesSettings, LoggingSettings};

/// Default URL of the published catalog file.
pub const DEFAULT_INDEX_URL: &str = "https://downloads.libshelf.org/library_index.json";

/// Default log file name.
pub const DEFAULT_LOG_FILE: &str = "libshelf.log";

fn home_dir() -> PathBuf {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Directory holding the config file, the catalog file, and logs.
pub fn config_dir() -> PathBuf {
    home_dir().join(".libshelf")
}

/// Path of the INI config file.
pub fn config_file_path() -> PathBuf {
    config_dir().join("config.ini")
}

/// Default location of the local catalog file.
pub fn default_index_path() -> PathBuf {
    config_dir().join("library_index.json")
}

/// Default libraries directory.
pub fn default_libraries_dir() -> PathBuf {
    home_dir().join("libshelf").join("libraries")
}

/// Default log directory.
pub fn default_log_dir() -> PathBuf {
    config_dir().join("logs")
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            index: IndexSettings {
                path: default_index_path(),
                url: DEFAULT_INDEX_URL.to_string(),
            },
            libraries: LibrariesSettings {
                directory: default_libraries_dir(),
            },
            logging: LoggingSettings {
                directory: default_log_dir(),
                file: DEFAULT_LOG_FILE.to_string(),
            },
        }
    }
}
