//! # Stash
//!
//! Key-value persistence facade over host storage areas.
//!
//! Stash stores schema-free [`Value`]s under whitespace-normalized keys in
//! durable (`local`) or session storage, wrapping each one in an envelope
//! that records when it was written and, optionally, when it expires.
//!
//! ## Quick Start
//!
//! ```
//! use stashkv::prelude::*;
//!
//! let mut stash = Stash::new();
//!
//! // Per-kind operations
//! stash.local().set("user:1", "Alice", None);
//! stash.session().set("token", "abc", Some(60_000));
//!
//! // Configured-kind operations (session by default)
//! assert_eq!(stash.get("token"), Some(Value::from("abc")));
//!
//! // Bulk clears
//! stash.local().clear_namespace("user");
//! assert_eq!(stash.local().len(), 0);
//! ```
//!
//! ## Features
//!
//! - **Expiration**: entries written with a TTL vanish once it has elapsed,
//!   lazily on read or eagerly via `clear_expired`
//! - **Namespaces**: colon-delimited prefixes cleared with `clear_namespace`
//! - **Undo**: with tracking enabled, `undo` swaps a key with its previous
//!   value; calling it again redoes
//! - **Fallback**: when a host store is unusable, operations transparently
//!   land in a per-kind in-memory store

#![warn(missing_docs)]

mod error;
mod handle;
mod stash;

pub mod prelude;

// Re-export main entry points
pub use error::{Error, Result};
pub use handle::KindHandle;
pub use stash::{Stash, StashBuilder};

// Re-export component types
pub use stash_core::{
    normalize, BackendKind, CanonicalKey, Clock, ManualClock, SystemClock, Timestamp, Value,
};
pub use stash_engine::StashConfig;
pub use stash_storage::{DisabledStore, FallbackStore, MemoryStore, RawStore, SharedStore, StoreError};
pub use stash_wire::Envelope;
