//! Configuration for paths and the remote catalog location.
//!
//! Settings live in `~/.libshelf/config.ini`. A missing file means
//! defaults; a missing key inside a section falls back to its default
//! individually. Settings structs live in [`settings`](self), constants
//! and path helpers in the defaults module, INI load/save in the file
//! module.

mod defaults;
mod file;
mod settings;

pub use defaults::{
    config_dir, config_file_path, default_index_path, default_libraries_dir, default_log_dir,
    DEFAULT_INDEX_URL, DEFAULT_LOG_FILE,
};
pub use file::ConfigFileError;
pub use settings::{ConfigFile, IndexSettings, LibrariesSettings, LoggingSettings};
