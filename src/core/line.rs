//! Line-level parsing and value serialization
//!
//! A line is either an assignment (`KEY=value`, optionally prefixed with
//! `export `) or opaque text that must survive a round-trip untouched:
//! comments, blank lines, and anything that does not fit the
//! identifier-`=`-value shape. Parsing borrows from the raw line and never
//! allocates; serialization is the inverse operation used when a value is
//! rewritten.

use crate::error::{EnvEditError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

static KEY_RE: OnceLock<Regex> = OnceLock::new();

/// Check whether a string is a valid env key identifier.
pub fn is_valid_key(key: &str) -> bool {
    KEY_RE
        .get_or_init(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("key regex compiles"))
        .is_match(key)
}

/// Quote style of an env value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuoteStyle {
    /// Bare value, no surrounding quotes
    #[default]
    None,
    /// Single-quoted value (`'...'`)
    Single,
    /// Double-quoted value (`"..."`)
    Double,
}

impl QuoteStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Single => "single",
            Self::Double => "double",
        }
    }
}

impl fmt::Display for QuoteStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuoteStyle {
    type Err = EnvEditError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "none" => Ok(Self::None),
            "single" => Ok(Self::Single),
            "double" => Ok(Self::Double),
            other => Err(EnvEditError::invalid_quote(other)),
        }
    }
}

/// A parsed view of one raw line.
///
/// `key` is `None` when the line is blank, a comment, or not a valid
/// assignment. When `key` is `Some`, `value` is `Some` as well (an empty
/// string for `KEY=`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedLine<'a> {
    pub raw: &'a str,
    pub key: Option<&'a str>,
    pub value: Option<&'a str>,
    pub quote: QuoteStyle,
}

impl<'a> ParsedLine<'a> {
    fn opaque(raw: &'a str) -> Self {
        Self {
            raw,
            key: None,
            value: None,
            quote: QuoteStyle::None,
        }
    }

    /// Whether this line is a recognized `KEY=value` assignment.
    pub fn is_assignment(&self) -> bool {
        self.key.is_some()
    }
}

/// Parse one raw line into its structured form.
///
/// Quoted values are stripped of their outer quotes but never unescaped;
/// whatever escape sequences the file contains are surfaced verbatim.
pub fn parse_line(raw: &str) -> ParsedLine<'_> {
    let stripped = raw.trim();
    if stripped.is_empty() || stripped.starts_with('#') {
        return ParsedLine::opaque(raw);
    }

    // Leading whitespace and an optional `export ` prefix (exactly that
    // literal, case-sensitive) are tolerated but not preserved on edit.
    let line = raw.trim_start();
    let line = line.strip_prefix("export ").unwrap_or(line);

    let Some((left, right)) = line.split_once('=') else {
        return ParsedLine::opaque(raw);
    };

    let key = left.trim();
    if !is_valid_key(key) {
        return ParsedLine::opaque(raw);
    }

    let value_part = right.trim();
    if value_part.len() >= 2 && value_part.starts_with('\'') && value_part.ends_with('\'') {
        return ParsedLine {
            raw,
            key: Some(key),
            value: Some(&value_part[1..value_part.len() - 1]),
            quote: QuoteStyle::Single,
        };
    }
    if value_part.len() >= 2 && value_part.starts_with('"') && value_part.ends_with('"') {
        return ParsedLine {
            raw,
            key: Some(key),
            value: Some(&value_part[1..value_part.len() - 1]),
            quote: QuoteStyle::Double,
        };
    }
    ParsedLine {
        raw,
        key: Some(key),
        value: Some(value_part),
        quote: QuoteStyle::None,
    }
}

/// Render a value back into line text according to its quote style.
///
/// Backslashes are escaped before the delimiter to avoid double-escaping.
/// Bare values pass through unchanged; keeping them free of characters
/// that would corrupt line structure is the update engine's job.
pub fn serialize_value(value: &str, quote: QuoteStyle) -> String {
    match quote {
        QuoteStyle::None => value.to_string(),
        QuoteStyle::Single => {
            format!("'{}'", value.replace('\\', "\\\\").replace('\'', "\\'"))
        }
        QuoteStyle::Double => {
            format!("\"{}\"", value.replace('\\', "\\\\").replace('"', "\\\""))
        }
    }
}
