//! Core error types

use thiserror::Error;

/// Errors raised while interpreting configuration-level input
#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    /// Backend kind name not recognized
    #[error("unknown backend kind: {0}")]
    UnknownKind(String),

    /// Configuration value rejected
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for core operations
pub type CoreResult<T> = std::result::Result<T, CoreError>;
