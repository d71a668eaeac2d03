//! Reading env files from disk
//!
//! The document model is rebuilt from disk on every read and every write;
//! nothing is cached across requests.

use crate::core::{Entry, EnvDocument};
use crate::descriptions::DescriptionMap;
use crate::error::{EnvEditError, Result};
use std::fs;
use std::path::Path;

/// Read an env file into a document.
///
/// Fails with [`EnvEditError::FileNotFound`] if the path does not exist or
/// is not a regular file. Invalid UTF-8 is replaced rather than rejected;
/// env files are treated as text whatever their encoding damage.
pub fn read_env_file(path: &Path) -> Result<EnvDocument> {
    if !path.is_file() {
        return Err(EnvEditError::file_not_found(path));
    }
    let bytes = fs::read(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => EnvEditError::file_not_found(path),
        _ => EnvEditError::Io(e),
    })?;
    Ok(EnvDocument::parse(&String::from_utf8_lossy(&bytes)))
}

/// Read an env file and project its entries in one step.
pub fn read_entries(
    path: &Path,
    descriptions: &DescriptionMap,
) -> Result<(EnvDocument, Vec<Entry>)> {
    let document = read_env_file(path)?;
    let entries = document.entries(descriptions);
    Ok((document, entries))
}
