//! Wire encoding for Stash
//!
//! This crate implements the persisted form of a Stash entry: the JSON
//! envelope `{_data_, _ts_, _exp_}` with every double quote replaced by the
//! `^^` marker, so stored strings never contain a raw `"`.
//!
//! ## Examples
//!
//! ```
//! use stash_core::Value;
//! use stash_wire::{decode, encode};
//!
//! let raw = encode(&Value::from(r#"a "quoted" word"#), 1_700_000_000_000, None).unwrap();
//! assert!(!raw.contains('"'));
//!
//! let envelope = decode(Some(&raw)).unwrap();
//! assert_eq!(envelope.data, Value::from(r#"a "quoted" word"#));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod envelope;
pub mod error;
pub mod json;

pub use envelope::{decode, encode, Envelope, QUOTE_MARKER};
pub use error::{DecodeError, EncodeError};
pub use json::{decode_json, encode_json, JsonValue};
