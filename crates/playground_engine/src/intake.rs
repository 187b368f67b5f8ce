use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use playground_core::{FileHandle, Skill};
use thiserror::Error;

const UNKNOWN_MIME: &str = "application/octet-stream";

#[derive(Debug, Error)]
pub enum IntakeError {
    #[error("file not found: {0}")]
    NotFound(PathBuf),
    #[error("not a regular file: {0}")]
    NotAFile(PathBuf),
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Reads a local file into a `FileHandle`, declaring its MIME type from the
/// extension. Whether a skill accepts it is decided by the workflow.
pub fn load_file(path: &Path) -> Result<FileHandle, IntakeError> {
    let meta = fs::metadata(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => IntakeError::NotFound(path.to_path_buf()),
        _ => IntakeError::Io {
            path: path.to_path_buf(),
            source: err,
        },
    })?;
    if !meta.is_file() {
        return Err(IntakeError::NotAFile(path.to_path_buf()));
    }

    let bytes = fs::read(path).map_err(|source| IntakeError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let mime = Skill::mime_for(&name).unwrap_or(UNKNOWN_MIME);
    Ok(FileHandle::new(name, mime, bytes))
}
