//! Error types for the envedit library
//!
//! This module provides the error taxonomy for all library operations:
//! path resolution, file I/O, payload validation, and the field-level
//! checks performed by the update engine.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for all library operations
#[derive(Error, Debug)]
pub enum EnvEditError {
    /// I/O related errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Relative path is empty or escapes the configured root
    #[error("invalid path: {path:?}")]
    InvalidPath { path: String },

    /// Target file does not exist or is not a regular file
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Edit/upsert payload has a malformed shape
    #[error("invalid payload: {reason}")]
    InvalidPayload { reason: String },

    /// Key is not a valid identifier, or the targeted line is not an assignment
    #[error("invalid key: {key:?}")]
    InvalidKey { key: String },

    /// Value fails field-level validation
    #[error("invalid value: {reason}")]
    InvalidValue { reason: String },

    /// Quote style is not one of none/single/double
    #[error("invalid quote style: {quote:?}")]
    InvalidQuote { quote: String },

    /// Edit id is beyond the current line count
    #[error("line id {id} out of range (file has {len} lines)")]
    OutOfRange { id: usize, len: usize },
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, EnvEditError>;

impl EnvEditError {
    /// Create a new invalid path error
    pub fn invalid_path(path: impl Into<String>) -> Self {
        Self::InvalidPath { path: path.into() }
    }

    /// Create a new file not found error
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a new invalid payload error
    pub fn invalid_payload(reason: impl Into<String>) -> Self {
        Self::InvalidPayload {
            reason: reason.into(),
        }
    }

    /// Create a new invalid key error
    pub fn invalid_key(key: impl Into<String>) -> Self {
        Self::InvalidKey { key: key.into() }
    }

    /// Create a new invalid value error
    pub fn invalid_value(reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            reason: reason.into(),
        }
    }

    /// Create a new invalid quote error
    pub fn invalid_quote(quote: impl Into<String>) -> Self {
        Self::InvalidQuote {
            quote: quote.into(),
        }
    }

    /// Create a new out of range error
    pub fn out_of_range(id: usize, len: usize) -> Self {
        Self::OutOfRange { id, len }
    }
}
