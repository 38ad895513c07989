//! Facade configuration
//!
//! ```toml
//! default_kind = "local"
//! undo_enabled = true
//! probe_key = "__my_probe__"
//! ```
//!
//! Every field is optional; omitted fields take their defaults.

use serde::{Deserialize, Serialize};
use stash_core::{BackendKind, CoreError, CoreResult};
use stash_storage::PROBE_KEY;

/// Settings applied when a facade is built
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StashConfig {
    /// Kind targeted by the generic operations
    pub default_kind: BackendKind,

    /// Whether writes are tracked for undo from the start
    pub undo_enabled: bool,

    /// Reserved key used by the capability probe
    /// Must be non-empty and contain no whitespace.
    pub probe_key: String,
}

impl Default for StashConfig {
    fn default() -> Self {
        Self {
            default_kind: BackendKind::Session,
            undo_enabled: false,
            probe_key: PROBE_KEY.to_string(),
        }
    }
}

impl StashConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(s: &str) -> CoreResult<Self> {
        let config: StashConfig =
            toml::from_str(s).map_err(|e| CoreError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check field constraints
    pub fn validate(&self) -> CoreResult<()> {
        if self.probe_key.is_empty() {
            return Err(CoreError::InvalidConfig(
                "probe_key must not be empty".to_string(),
            ));
        }
        if self.probe_key.chars().any(char::is_whitespace) {
            return Err(CoreError::InvalidConfig(format!(
                "probe_key must not contain whitespace: {:?}",
                self.probe_key
            )));
        }
        Ok(())
    }
}
