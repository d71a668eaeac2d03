//! Key annotations sourced from a static JSON document
//!
//! The map is read-only and best-effort: a missing or malformed file
//! yields an empty map, and individual entries that are not
//! string-to-string or whose key is not a valid identifier are skipped.

use crate::core::line::is_valid_key;
use log::{debug, warn};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// A read-only key→description lookup.
#[derive(Debug, Clone, Default)]
pub struct DescriptionMap {
    map: HashMap<String, String>,
}

impl DescriptionMap {
    /// An empty map; every lookup yields `""`.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load annotations from a JSON object of string values.
    ///
    /// Never fails: any problem with the file or its shape degrades to an
    /// empty (or partial) map.
    pub fn load(path: &Path) -> Self {
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) => {
                debug!("no descriptions at {}: {}", path.display(), e);
                return Self::default();
            }
        };
        let text = String::from_utf8_lossy(&bytes);
        match serde_json::from_str::<serde_json::Value>(&text) {
            Ok(serde_json::Value::Object(object)) => {
                let mut map = HashMap::new();
                for (key, value) in object {
                    match value {
                        serde_json::Value::String(text) if is_valid_key(&key) => {
                            map.insert(key, text);
                        }
                        _ => debug!("skipping malformed description entry {:?}", key),
                    }
                }
                Self { map }
            }
            Ok(_) => {
                warn!("descriptions file {} is not a JSON object", path.display());
                Self::default()
            }
            Err(e) => {
                warn!("failed to parse descriptions {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// The description for a key, or `""` when absent.
    pub fn get(&self, key: &str) -> &str {
        self.map.get(key).map(String::as_str).unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl FromIterator<(String, String)> for DescriptionMap {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            map: iter.into_iter().collect(),
        }
    }
}
