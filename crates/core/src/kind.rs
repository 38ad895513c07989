//! Backend kinds
//!
//! | Kind | Wire name | Lifetime |
//! |------|-----------|----------|
//! | Durable | `local` | survives the host session |
//! | Session | `session` | scoped to the host session |
//! | InMemory | `memory` | process-local fallback |

use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which key-value provider an operation targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// Host storage that outlives the session
    #[serde(rename = "local")]
    Durable,
    /// Host storage bound to the session
    Session,
    /// Process-local fallback store
    #[serde(rename = "memory")]
    InMemory,
}

impl BackendKind {
    /// The two host-provided kinds, in slot order
    pub const NATIVE: [BackendKind; 2] = [BackendKind::Durable, BackendKind::Session];

    /// Wire name used in configuration
    pub fn as_str(&self) -> &'static str {
        match self {
            BackendKind::Durable => "local",
            BackendKind::Session => "session",
            BackendKind::InMemory => "memory",
        }
    }

    /// True for the host-provided kinds
    pub fn is_native(&self) -> bool {
        !matches!(self, BackendKind::InMemory)
    }
}

impl Default for BackendKind {
    fn default() -> Self {
        BackendKind::Session
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BackendKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "local" | "durable" => Ok(BackendKind::Durable),
            "session" => Ok(BackendKind::Session),
            "memory" | "inmemory" | "in-memory" => Ok(BackendKind::InMemory),
            _ => Err(CoreError::UnknownKind(s.to_string())),
        }
    }
}
