//! High-level operations tying the document model to disk
//!
//! These are the shapes the library exposes to collaborators (a CLI here,
//! an HTTP layer elsewhere): list candidate files, read entries, apply a
//! batch. Each call is one self-contained unit of work over one file.

use crate::core::{EditBatch, Entry};
use crate::descriptions::DescriptionMap;
use crate::error::Result;
use crate::io::{read_entries, read_env_file, write_atomic, RootConfig};
use log::debug;
use std::path::Path;

/// List candidate env files under the configured root, sorted by path
/// depth then lexicographically.
pub fn list_env_files(config: &RootConfig) -> Vec<String> {
    config.discover()
}

/// Read the entries of an env file.
pub fn get_entries(path: &Path, descriptions: &DescriptionMap) -> Result<Vec<Entry>> {
    let (_, entries) = read_entries(path, descriptions)?;
    Ok(entries)
}

/// Apply a batch of edits and upserts to an env file, persist atomically,
/// and return the entries re-read from disk.
///
/// The returned entries always come from a fresh parse of the persisted
/// bytes, never from the in-memory state that produced them.
pub fn apply_edits(
    path: &Path,
    batch: &EditBatch,
    descriptions: &DescriptionMap,
) -> Result<Vec<Entry>> {
    let mut document = read_env_file(path)?;
    document.apply(batch)?;
    let content = document.render();
    debug!(
        "writing {} bytes ({} lines) to {}",
        content.len(),
        document.len(),
        path.display()
    );
    write_atomic(path, &content)?;
    get_entries(path, descriptions)
}

/// Apply a batch in memory and return the file content it would produce,
/// without persisting anything.
pub fn preview_edits(path: &Path, batch: &EditBatch) -> Result<String> {
    let mut document = read_env_file(path)?;
    document.apply(batch)?;
    Ok(document.render())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{EntryEdit, QuoteStyle, Upsert};
    use crate::error::EnvEditError;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_apply_edits_persists_and_rereads() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("app.env");
        fs::write(&path, "FOO=bar\n").unwrap();

        let batch = EditBatch {
            entries: vec![EntryEdit {
                id: 0,
                value: "baz".into(),
                quote: QuoteStyle::Double,
            }],
            upserts: vec![],
        };
        let entries = apply_edits(&path, &batch, &DescriptionMap::empty()).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "FOO=\"baz\"\n");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].value, "baz");
        assert_eq!(entries[0].quote, QuoteStyle::Double);
    }

    #[test]
    fn test_apply_edits_missing_file() {
        let dir = TempDir::new().unwrap();
        let result = apply_edits(
            &dir.path().join("absent.env"),
            &EditBatch::default(),
            &DescriptionMap::empty(),
        );
        assert!(matches!(result, Err(EnvEditError::FileNotFound { .. })));
    }

    #[test]
    fn test_invalid_batch_leaves_file_untouched() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("app.env");
        fs::write(&path, "FOO=bar\n").unwrap();

        let batch = EditBatch {
            entries: vec![EntryEdit {
                id: 0,
                value: "ok".into(),
                quote: QuoteStyle::None,
            }],
            upserts: vec![Upsert {
                key: "BAD KEY".into(),
                value: "x".into(),
                quote: QuoteStyle::None,
            }],
        };
        assert!(apply_edits(&path, &batch, &DescriptionMap::empty()).is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), "FOO=bar\n");
    }

    #[test]
    fn test_preview_does_not_write() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("app.env");
        fs::write(&path, "FOO=bar\n").unwrap();

        let batch = EditBatch {
            entries: vec![],
            upserts: vec![Upsert {
                key: "NEW".into(),
                value: "x".into(),
                quote: QuoteStyle::None,
            }],
        };
        let preview = preview_edits(&path, &batch).unwrap();
        assert_eq!(preview, "FOO=bar\n\nNEW=x\n");
        assert_eq!(fs::read_to_string(&path).unwrap(), "FOO=bar\n");
    }
}
