//! Unified error types for Stash.
//!
//! Data operations on [`Stash`](crate::Stash) never fail. Errors only come
//! out of the configuration seams: building a facade, loading settings and
//! naming a backend kind.

use stash_core::CoreError;
use thiserror::Error;

/// All Stash errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Backend kind name not recognized
    #[error("unknown backend kind: {0}")]
    UnknownKind(String),

    /// Configuration rejected (bad TOML, bad field value)
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for Stash operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this error came from configuration input.
    pub fn is_config_error(&self) -> bool {
        matches!(self, Error::InvalidConfig(_))
    }

    /// Check if this error came from an unknown kind name.
    pub fn is_unknown_kind(&self) -> bool {
        matches!(self, Error::UnknownKind(_))
    }
}

// Convert from core errors
impl From<CoreError> for Error {
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::UnknownKind(name) => Error::UnknownKind(name),
            CoreError::InvalidConfig(msg) => Error::InvalidConfig(msg),
        }
    }
}
