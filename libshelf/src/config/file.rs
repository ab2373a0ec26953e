//! INI load/save for the config file.

use std::path::{Path, PathBuf};

use ini::Ini;
use thiserror::Error;

use super::defaults::config_file_path;
use super::settings::ConfigFile;

/// Configuration file errors.
#[derive(Debug, Error)]
pub enum ConfigFileError {
    /// Failed to read or parse the config file
    #[error("failed to read config file: {0}")]
    Read(#[from] ini::Error),

    /// Failed to write the config file
    #[error("failed to write config file {path}: {source}")]
    Write { path: PathBuf, source: std::io::Error },

    /// Failed to create the config directory
    #[error("failed to create config directory: {0}")]
    Directory(std::io::Error),
}

impl ConfigFile {
    /// Load configuration from the default path (~/.libshelf/config.ini).
    ///
    /// A missing file yields defaults.
    pub fn load() -> Result<Self, ConfigFileError> {
        Self::load_from(&config_file_path())
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigFileError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let ini = Ini::load_from_file(path)?;
        Ok(parse_ini(&ini))
    }

    /// Save configuration to the default path.
    pub fn save(&self) -> Result<(), ConfigFileError> {
        self.save_to(&config_file_path())
    }

    /// Save configuration to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigFileError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ConfigFileError::Directory)?;
        }

        to_ini(self)
            .write_to_file(path)
            .map_err(|e| ConfigFileError::Write {
                path: path.to_path_buf(),
                source: e,
            })
    }
}

fn parse_ini(ini: &Ini) -> ConfigFile {
    let mut config = ConfigFile::default();

    if let Some(section) = ini.section(Some("index")) {
        if let Some(path) = section.get("path") {
            config.index.path = PathBuf::from(path);
        }
        if let Some(url) = section.get("url") {
            config.index.url = url.to_string();
        }
    }

    if let Some(section) = ini.section(Some("libraries")) {
        if let Some(directory) = section.get("directory") {
            config.libraries.directory = PathBuf::from(directory);
        }
    }

    if let Some(section) = ini.section(Some("logging")) {
        if let Some(directory) = section.get("directory") {
            config.logging.directory = PathBuf::from(directory);
        }
        if let Some(file) = section.get("file") {
            config.logging.file = file.to_string();
        }
    }

    config
}

fn to_ini(config: &ConfigFile) -> Ini {
    let mut ini = Ini::new();
    ini.with_section(Some("index"))
        .set("path", config.index.path.display().to_string())
        .set("url", config.index.url.clone());
    ini.with_section(Some("libraries"))
        .set("directory", config.libraries.directory.display().to_string());
    ini.with_section(Some("logging"))
        .set("directory", config.logging.directory.display().to_string())
        .set("file", config.logging.file.clone());
    ini
}
