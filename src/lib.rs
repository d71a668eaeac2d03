//! envedit: a library for editing `KEY=VALUE` env files while preserving
//! their textual structure
//!
//! Env files are edited by people and tooling alike; this library makes
//! the tooling side safe. A file is parsed into an ordered sequence of
//! raw lines, assignments are projected out as entries addressed by their
//! line position, and edits rewrite only the lines they target — comments,
//! blank lines, ordering, quoting style, and unrecognized lines all
//! survive the round trip. Writes are atomic whole-file replaces.
//!
//! # Features
//!
//! - **Structure-preserving edits**: only the targeted lines change
//! - **By-identity edits and by-key upserts** in validated batches
//! - **Quote-style aware** value parsing and re-serialization
//! - **Atomic file replacement**; readers never see a partial write
//! - **Root-scoped path resolution** with traversal rejection
//! - **Recursive discovery** of candidate env files under a root
//!
//! # Quick Start
//!
//! ## Reading entries
//!
//! ```rust,no_run
//! use envedit::{get_entries, DescriptionMap, Result};
//! use std::path::Path;
//!
//! fn main() -> Result<()> {
//!     let descriptions = DescriptionMap::load(Path::new("descriptions.json"));
//!     let entries = get_entries(Path::new("app.env"), &descriptions)?;
//!     for entry in entries {
//!         println!("{}: {}={}", entry.id, entry.key, entry.value);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Editing and upserting
//!
//! ```rust,no_run
//! use envedit::{
//!     apply_edits, DescriptionMap, EditBatch, EntryEdit, QuoteStyle, Result, Upsert,
//! };
//! use std::path::Path;
//!
//! fn main() -> Result<()> {
//!     let batch = EditBatch {
//!         entries: vec![EntryEdit {
//!             id: 2,
//!             value: "new value".to_string(),
//!             quote: QuoteStyle::Double,
//!         }],
//!         upserts: vec![Upsert {
//!             key: "ADDED".to_string(),
//!             value: "1".to_string(),
//!             quote: QuoteStyle::None,
//!         }],
//!     };
//!     let entries = apply_edits(Path::new("app.env"), &batch, &DescriptionMap::empty())?;
//!     println!("{} entries after write", entries.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Discovering files under a root
//!
//! ```rust,no_run
//! use envedit::RootConfig;
//!
//! let config = RootConfig::from_env();
//! for rel_path in config.discover() {
//!     println!("{rel_path}");
//! }
//! ```
//!
//! # Architecture
//!
//! - [`core`]: line parsing, the document model, and the update engine
//! - [`io`]: reading, atomic writing, and root-scoped path resolution
//! - [`ops`]: the high-level operations collaborators consume
//! - [`descriptions`]: the read-only key annotation map
//! - [`error`]: the error taxonomy
//!
//! The document model is rebuilt from disk for every operation; there is
//! no cross-request cache and no locking. Concurrent writers race at the
//! atomic rename and the last one wins in full.

// Public API exports
pub use error::{EnvEditError, Result};

// Core types
pub use crate::core::{
    is_valid_key, parse_line, serialize_value, EditBatch, Entry, EntryEdit, EnvDocument,
    ParsedLine, QuoteStyle, Upsert,
};

// IO types
pub use io::{read_entries, read_env_file, write_atomic, RootConfig, DEFAULT_FILENAME, DEFAULT_ROOT};

// Operations and annotations
pub use descriptions::DescriptionMap;
pub use ops::{apply_edits, get_entries, list_env_files, preview_edits};

// Internal modules
pub mod core;
pub mod descriptions;
pub mod error;
pub mod io;
pub mod ops;

// CLI components are only needed by the binary
#[cfg(feature = "cli")]
pub mod cli_bin;

#[cfg(test)]
mod tests {
    use super::*;

    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_end_to_end_workflow() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("app.env");
        fs::write(&path, "FOO=bar\n# comment\nBAZ=\"q u o\"\n").unwrap();

        // Read the file
        let entries = get_entries(&path, &DescriptionMap::empty()).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].id, 2);
        assert_eq!(entries[1].value, "q u o");

        // Edit one entry and add another
        let batch = EditBatch {
            entries: vec![EntryEdit {
                id: 2,
                value: "hi\"there".to_string(),
                quote: QuoteStyle::Double,
            }],
            upserts: vec![Upsert {
                key: "ADDED".to_string(),
                value: "yes".to_string(),
                quote: QuoteStyle::None,
            }],
        };
        let entries = apply_edits(&path, &batch, &DescriptionMap::empty()).unwrap();
        assert_eq!(entries.len(), 3);

        // The untouched line and the comment survive verbatim
        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(
            content,
            "FOO=bar\n# comment\nBAZ=\"hi\\\"there\"\n\nADDED=yes\n"
        );
    }

    #[test]
    fn test_write_never_trusts_memory() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("app.env");
        fs::write(&path, "A=1\n").unwrap();

        // The escaped form written to disk is what comes back, not the
        // pre-serialization value: quoted values are never unescaped.
        let batch = EditBatch {
            entries: vec![EntryEdit {
                id: 0,
                value: "a\\b".to_string(),
                quote: QuoteStyle::Single,
            }],
            upserts: vec![],
        };
        let entries = apply_edits(&path, &batch, &DescriptionMap::empty()).unwrap();
        assert_eq!(entries[0].value, "a\\\\b");
    }
}
