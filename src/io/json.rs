use super::ensure_parent_dir;
use crate::error::MidlineError;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), MidlineError> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value).map_err(|e| MidlineError::Write {
        path: path.to_path_buf(),
        reason: format!("failed to serialize JSON: {e}"),
    })?;
    fs::write(path, json).map_err(|e| MidlineError::Write {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}
