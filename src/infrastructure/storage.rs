use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::error::{AppError, Result};

/// Resolve a file inside `dir`, refusing names that would escape it
pub fn resolve_in_dir(dir: &Path, file_name: &str) -> Result<PathBuf> {
    let candidate = Path::new(file_name);
    let plain = candidate.components().count() == 1
        && candidate.file_name().map(|n| n == file_name).unwrap_or(false);
    if !plain {
        return Err(AppError::ValidationError(format!(
            "'{}' is not a plain file name",
            file_name
        )));
    }
    Ok(dir.join(candidate))
}

/// Create the parent directory of an output file when needed
pub fn ensure_parent_dir(path: &Path) -> std::io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => ensure_dir(parent),
        _ => Ok(()),
    }
}

fn ensure_dir(path: &Path) -> std::io::Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}
