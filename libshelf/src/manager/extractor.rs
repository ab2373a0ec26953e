//! Zip archive extraction with stage-identifying errors.

use std::fs::{self, File};
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;
use zip::result::ZipError;
use zip::ZipArchive;

use super::traits::ArchiveExtractor;
use super::ManagerResult;

/// Permission bits for extracted directories (rwxr-xr-x).
const DIR_MODE: u32 = 0o755;
/// Permission bits for extracted files (rw-rw-r--).
const FILE_MODE: u32 = 0o664;

/// Errors raised during archive extraction.
///
/// Each variant names the stage that failed. The first error aborts the
/// whole extraction; nothing already written is rolled back.
#[derive(Debug, Error)]
pub enum ExtractionError {
    /// The archive file itself could not be opened.
    #[error("cannot open archive {path}: {source}")]
    ArchiveOpen { path: PathBuf, source: io::Error },

    /// The archive file is not a readable zip.
    #[error("cannot read archive {path}: {source}")]
    ArchiveRead { path: PathBuf, source: ZipError },

    /// An entry path would escape the destination directory.
    #[error("archive entry '{name}' escapes the destination directory")]
    UnsafePath { name: String },

    /// Directory creation failed during extraction.
    #[error("cannot create directory {path} during extraction: {source}")]
    DirCreate { path: PathBuf, source: io::Error },

    /// An archived file entry could not be opened.
    #[error("cannot open archived file '{name}': {source}")]
    FileOpen { name: String, source: ZipError },

    /// An archived file entry could not be read.
    #[error("cannot read archived file '{name}': {source}")]
    FileRead { name: String, source: io::Error },

    /// An extracted file could not be written.
    #[error("cannot write extracted file {path}: {source}")]
    FileWrite { path: PathBuf, source: io::Error },
}

/// Extractor for zip library archives.
///
/// Directory entries are created mode rwxr-xr-x, file entries are written
/// byte-for-byte mode rw-rw-r-- (on unix; modes are a no-op elsewhere).
/// Entries with absolute paths or parent-directory segments are rejected
/// before anything is joined onto the destination.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZipExtractor;

impl ZipExtractor {
    /// Create a new extractor.
    pub fn new() -> Self {
        Self
    }

    fn open(&self, archive_path: &Path) -> Result<ZipArchive<File>, ExtractionError> {
        let file = File::open(archive_path).map_err(|e| ExtractionError::ArchiveOpen {
            path: archive_path.to_path_buf(),
            source: e,
        })?;
        ZipArchive::new(file).map_err(|e| ExtractionError::ArchiveRead {
            path: archive_path.to_path_buf(),
            source: e,
        })
    }
}

impl ArchiveExtractor for ZipExtractor {
    fn extract(&self, archive_path: &Path, dest_dir: &Path) -> ManagerResult<usize> {
        let mut archive = self.open(archive_path)?;
        let mut written = 0;

        for i in 0..archive.len() {
            let mut entry = archive.by_index(i).map_err(|e| ExtractionError::FileOpen {
                name: format!("entry #{i}"),
                source: e,
            })?;
            let name = entry.name().to_string();

            // enclosed_name() is None for absolute paths and any path
            // containing parent-directory segments.
            let Some(relative) = entry.enclosed_name() else {
                return Err(ExtractionError::UnsafePath { name }.into());
            };
            let target = dest_dir.join(relative);

            if entry.is_dir() {
                fs::create_dir_all(&target).map_err(|e| ExtractionError::DirCreate {
                    path: target.clone(),
                    source: e,
                })?;
                apply_mode(&target, DIR_MODE).map_err(|e| ExtractionError::DirCreate {
                    path: target.clone(),
                    source: e,
                })?;
            } else {
                if let Some(parent) = target.parent() {
                    fs::create_dir_all(parent).map_err(|e| ExtractionError::DirCreate {
                        path: parent.to_path_buf(),
                        source: e,
                    })?;
                }

                let mut content = Vec::new();
                entry
                    .read_to_end(&mut content)
                    .map_err(|e| ExtractionError::FileRead {
                        name: name.clone(),
                        source: e,
                    })?;
                fs::write(&target, &content).map_err(|e| ExtractionError::FileWrite {
                    path: target.clone(),
                    source: e,
                })?;
                apply_mode(&target, FILE_MODE).map_err(|e| ExtractionError::FileWrite {
                    path: target.clone(),
                    source: e,
                })?;
                written += 1;
            }
        }

        debug!(archive = %archive_path.display(), files = written, "extraction complete");
        Ok(written)
    }

    fn list_contents(&self, archive_path: &Path) -> ManagerResult<Vec<String>> {
        let archive = self.open(archive_path)?;
        Ok(archive.file_names().map(str::to_string).collect())
    }
}

#[cfg(unix)]
fn apply_mode(path: &Path, mode: u32) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(mode))
}

#[cfg(not(unix))]
fn apply_mode(_path: &Path, _mode: u32) -> io::Result<()> {
    Ok(())
}
