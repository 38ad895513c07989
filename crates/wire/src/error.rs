//! Wire error types

use thiserror::Error;

/// Reasons a stored string is not a Stash envelope
///
/// Bulk scans treat every variant as "not one of ours" and skip the entry.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DecodeError {
    /// No value stored under the key
    #[error("no stored value")]
    Absent,

    /// Text is not valid JSON once quote markers are restored
    #[error("invalid JSON: {0}")]
    InvalidJson(String),

    /// Valid JSON, but not the envelope shape
    #[error("not an envelope: {0}")]
    InvalidShape(String),
}

impl From<serde_json::Error> for DecodeError {
    fn from(e: serde_json::Error) -> Self {
        if e.is_data() {
            DecodeError::InvalidShape(e.to_string())
        } else {
            DecodeError::InvalidJson(e.to_string())
        }
    }
}

/// Failure to render a value as JSON text
#[derive(Debug, Error)]
#[error("encode failed: {0}")]
pub struct EncodeError(#[from] serde_json::Error);
