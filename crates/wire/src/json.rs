//! JSON text for Stash values
//!
//! | Value Type | JSON Encoding |
//! |------------|--------------|
//! | Null | `null` |
//! | Bool | `true`/`false` |
//! | Int | number |
//! | Float (integral) | integer digits, no `.0` |
//! | Float (finite) | number |
//! | Float (NaN, ±Inf) | `null` |
//! | String | `"..."` |
//! | Array | `[...]` |
//! | Object | `{...}`, members in sorted key order |
//!
//! Object members are always emitted sorted by key. Objects written by
//! other producers in insertion order therefore come back re-ordered once
//! Stash rewrites them (a re-set, an undo restore); member values and the
//! set of members are unchanged.
//!
//! Decoding maps integral numbers that fit in an `i64` to `Int` and every
//! other number to `Float`, so `Float(3.0)` reads back as `Int(3)`.

use crate::error::{DecodeError, EncodeError};
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};
use stash_core::Value;

/// Integral floats below this magnitude are written as integers
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Serialization view of a [`Value`]
///
/// `Value` itself derives serde's externally tagged form; this wrapper
/// produces plain JSON with deterministic member ordering.
#[derive(Debug, Clone, Copy)]
pub struct JsonValue<'a>(pub &'a Value);

impl Serialize for JsonValue<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.0 {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(i) => serializer.serialize_i64(*i),
            Value::Float(f) if f.fract() == 0.0 && f.abs() < MAX_SAFE_INTEGER => {
                serializer.serialize_i64(*f as i64)
            }
            Value::Float(f) if f.is_finite() => serializer.serialize_f64(*f),
            Value::Float(_) => serializer.serialize_unit(),
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(&JsonValue(item))?;
                }
                seq.end()
            }
            Value::Object(members) => {
                let mut entries: Vec<_> = members.iter().collect();
                entries.sort_by_key(|(k, _)| *k);

                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (k, v) in entries {
                    map.serialize_entry(k, &JsonValue(v))?;
                }
                map.end()
            }
        }
    }
}

/// Encode a Value to JSON text
pub fn encode_json(value: &Value) -> Result<String, EncodeError> {
    Ok(serde_json::to_string(&JsonValue(value))?)
}

/// Decode JSON text to a Value
pub fn decode_json(json: &str) -> Result<Value, DecodeError> {
    let parsed: serde_json::Value = serde_json::from_str(json)?;
    Ok(Value::from(parsed))
}
