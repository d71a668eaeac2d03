//! Atomic persistence
//!
//! Content is written to a temporary file in the target's own directory
//! (same filesystem, so the final rename is atomic) and then persisted
//! over the target. A concurrent reader sees the old content or the new
//! content, never a mix; concurrent writers race at the rename and the
//! last one wins in full.

use crate::error::{EnvEditError, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Atomically replace `path` with `content`, creating parent directories
/// as needed.
pub fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    fs::create_dir_all(&parent)?;

    let mut temp_file = NamedTempFile::new_in(&parent)?;
    temp_file.write_all(content.as_bytes())?;
    temp_file.flush()?;
    temp_file
        .persist(path)
        .map_err(|e| EnvEditError::Io(e.error))?;
    Ok(())
}
