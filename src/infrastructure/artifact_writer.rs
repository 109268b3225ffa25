//! Writes export artifacts to disk.

use std::fs;
use std::path::{Path, PathBuf};

use crate::application::Artifact;
use crate::domain::{AppError, Result};

/// Write an artifact into `dir`, creating the directory if needed.
///
/// # Errors
/// Returns error if the directory or file cannot be written.
pub fn write_artifact(dir: &Path, artifact: &Artifact) -> Result<PathBuf> {
    fs::create_dir_all(dir)
        .map_err(|e| AppError::io(format!("Failed to create directory {}", dir.display()), e))?;

    let path = dir.join(&artifact.file_name);
    fs::write(&path, &artifact.bytes)
        .map_err(|e| AppError::io(format!("Failed to write {}", path.display()), e))?;

    tracing::info!(path = %path.display(), bytes = artifact.bytes.len(), "Artifact written");

    Ok(path)
}
