//! The update engine: by-identity edits and upserts-by-key
//!
//! A batch is validated in full before the first line is touched, so a
//! rejected batch leaves both the in-memory document and (because nothing
//! gets persisted) the file exactly as they were.

use crate::core::document::EnvDocument;
use crate::core::line::{is_valid_key, parse_line, serialize_value, QuoteStyle};
use crate::error::{EnvEditError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// An edit addressed to an existing line by its id.
///
/// Only the value and quote style change; the key is re-derived from the
/// line at that position and never altered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryEdit {
    pub id: usize,
    pub value: String,
    #[serde(default)]
    pub quote: QuoteStyle,
}

/// An insert-or-overwrite operation addressed by key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Upsert {
    pub key: String,
    pub value: String,
    #[serde(default)]
    pub quote: QuoteStyle,
}

/// One batch of edits and upserts.
///
/// Edits target disjoint line ids and commute; when the same id appears
/// more than once, the last occurrence wins. Upserts are applied in
/// sequence order against the progressively-mutated line sequence, so
/// order matters for them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditBatch {
    #[serde(default)]
    pub entries: Vec<EntryEdit>,
    #[serde(default)]
    pub upserts: Vec<Upsert>,
}

impl EditBatch {
    /// Parse a batch from its JSON wire form. Any shape mismatch is an
    /// [`EnvEditError::InvalidPayload`].
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| EnvEditError::invalid_payload(e.to_string()))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty() && self.upserts.is_empty()
    }

    fn edits_by_id(&self) -> BTreeMap<usize, &EntryEdit> {
        self.entries.iter().map(|e| (e.id, e)).collect()
    }
}

/// Values must stay on one physical line or they would corrupt the
/// document structure on re-join.
fn ensure_single_line(value: &str) -> Result<()> {
    if value.contains('\n') || value.contains('\r') {
        return Err(EnvEditError::invalid_value(
            "value must not contain line breaks",
        ));
    }
    Ok(())
}

impl EnvDocument {
    /// Apply a batch of by-identity edits and ordered upserts.
    ///
    /// Validation of the entire batch happens up front: edit ids must be
    /// in range and target lines that currently parse as assignments,
    /// upsert keys must be valid identifiers, and no value may contain a
    /// line break. On error the document is unchanged.
    ///
    /// Upserts overwrite the first line carrying their key, else queue an
    /// append. When the batch contains upserts, trailing blank lines are
    /// trimmed and queued appends land after one blank separator line.
    pub fn apply(&mut self, batch: &EditBatch) -> Result<()> {
        let edits = batch.edits_by_id();

        let mut resolved: Vec<(usize, String, &EntryEdit)> = Vec::with_capacity(edits.len());
        for (&id, &edit) in &edits {
            let Some(line) = self.lines().get(id) else {
                return Err(EnvEditError::out_of_range(id, self.len()));
            };
            ensure_single_line(&edit.value)?;
            let Some(key) = parse_line(line).key else {
                return Err(EnvEditError::invalid_key(line.trim()));
            };
            resolved.push((id, key.to_owned(), edit));
        }
        for upsert in &batch.upserts {
            if !is_valid_key(&upsert.key) {
                return Err(EnvEditError::invalid_key(&upsert.key));
            }
            ensure_single_line(&upsert.value)?;
        }

        for (id, key, edit) in resolved {
            self.lines_mut()[id] = format!("{}={}", key, serialize_value(&edit.value, edit.quote));
        }

        if batch.upserts.is_empty() {
            return Ok(());
        }

        let mut appended: Vec<String> = Vec::new();
        for upsert in &batch.upserts {
            let line = format!(
                "{}={}",
                upsert.key,
                serialize_value(&upsert.value, upsert.quote)
            );
            let found = self
                .lines()
                .iter()
                .position(|raw| parse_line(raw).key == Some(upsert.key.as_str()));
            match found {
                Some(index) => self.lines_mut()[index] = line,
                None => appended.push(line),
            }
        }

        let lines = self.lines_mut();
        while lines.last().is_some_and(|line| line.is_empty()) {
            lines.pop();
        }
        if !appended.is_empty() {
            if !lines.is_empty() {
                lines.push(String::new());
            }
            lines.append(&mut appended);
        }
        Ok(())
    }
}
