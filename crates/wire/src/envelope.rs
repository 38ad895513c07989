//! Envelope codec
//!
//! Every managed entry is persisted as
//!
//! ```text
//! {"_data_":<value>,"_ts_":<created ms>,"_exp_":<expiry ms>}
//! ```
//!
//! with `_exp_` present only when a TTL was supplied, and with every `"`
//! in the text replaced by [`QUOTE_MARKER`]. The replacement is applied to
//! the rendered JSON as a whole, so quotes escaped inside string data
//! (`\"`) become `\^^` as well.
//!
//! ```
//! use stash_core::Value;
//! use stash_wire::Envelope;
//!
//! let raw = Envelope::new(Value::from("hi"), 1_700_000_000_000).encode().unwrap();
//! assert_eq!(raw, "{^^_data_^^:^^hi^^,^^_ts_^^:1700000000000}");
//! assert_eq!(Envelope::decode(&raw).unwrap().data, Value::from("hi"));
//! ```

use crate::error::{DecodeError, EncodeError};
use crate::json::JsonValue;
use serde::{Deserialize, Serialize};
use stash_core::{Timestamp, Value};

/// Two-character stand-in for `"` in persisted text
pub const QUOTE_MARKER: &str = "^^";

/// A stored value plus its metadata
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope {
    /// The caller's value
    pub data: Value,
    /// Write time (epoch milliseconds)
    pub created_at: Timestamp,
    /// Expiry time (epoch milliseconds), when a TTL was given
    pub expires_at: Option<Timestamp>,
}

#[derive(Serialize)]
struct WireEnvelope<'a> {
    #[serde(rename = "_data_")]
    data: JsonValue<'a>,
    #[serde(rename = "_ts_")]
    created_at: Timestamp,
    #[serde(rename = "_exp_", skip_serializing_if = "Option::is_none")]
    expires_at: Option<Timestamp>,
}

#[derive(Deserialize)]
struct StoredEnvelope {
    #[serde(rename = "_data_")]
    data: serde_json::Value,
    #[serde(rename = "_ts_")]
    created_at: Timestamp,
    #[serde(rename = "_exp_", default)]
    expires_at: Option<Timestamp>,
}

impl Envelope {
    /// Envelope without expiry
    pub fn new(data: Value, created_at: Timestamp) -> Self {
        Self {
            data,
            created_at,
            expires_at: None,
        }
    }

    /// Envelope expiring `ttl_millis` after `created_at`
    ///
    /// Negative TTLs are kept as given and yield an already-expired entry.
    pub fn with_ttl(data: Value, created_at: Timestamp, ttl_millis: i64) -> Self {
        Self {
            data,
            created_at,
            expires_at: Some(created_at.saturating_add(ttl_millis)),
        }
    }

    /// The TTL this envelope was written with
    pub fn ttl_millis(&self) -> Option<i64> {
        self.expires_at.map(|exp| exp - self.created_at)
    }

    /// True once `now` has reached the expiry time
    pub fn is_expired(&self, now: Timestamp) -> bool {
        matches!(self.expires_at, Some(exp) if now >= exp)
    }

    /// Render to the persisted string form
    pub fn encode(&self) -> Result<String, EncodeError> {
        encode(&self.data, self.created_at, self.expires_at)
    }

    /// Parse a persisted string
    pub fn decode(raw: &str) -> Result<Self, DecodeError> {
        decode(Some(raw))
    }
}

/// Encode value and metadata into the persisted string form
pub fn encode(
    data: &Value,
    created_at: Timestamp,
    expires_at: Option<Timestamp>,
) -> Result<String, EncodeError> {
    let json = serde_json::to_string(&WireEnvelope {
        data: JsonValue(data),
        created_at,
        expires_at,
    })?;
    Ok(json.replace('"', QUOTE_MARKER))
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "bool",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

/// Decode a value read from a backend
///
/// `None` (nothing stored) fails with [`DecodeError::Absent`].
pub fn decode(raw: Option<&str>) -> Result<Envelope, DecodeError> {
    let raw = raw.ok_or(DecodeError::Absent)?;
    let json = raw.replace(QUOTE_MARKER, "\"");
    // Envelopes are objects only; a derived struct would also take a sequence
    let parsed: serde_json::Value = serde_json::from_str(&json)?;
    if !parsed.is_object() {
        return Err(DecodeError::InvalidShape(format!(
            "expected an object, found {}",
            json_kind(&parsed)
        )));
    }
    let stored: StoredEnvelope = serde_json::from_value(parsed)?;
    Ok(Envelope {
        data: Value::from(stored.data),
        created_at: stored.created_at,
        expires_at: stored.expires_at,
    })
}
