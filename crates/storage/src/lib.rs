//! Storage layer for Stash
//!
//! This crate implements the backends behind the facade:
//! - [`RawStore`]: the primitive host contract (get/set/remove/key/length/clear)
//! - [`Backend`]: canonical-key view used by the engine, implemented for every store
//! - [`MemoryStore`] / [`SharedStore`]: insertion-ordered in-memory stores
//! - [`FallbackStore`]: per-kind key-spaces used when a host store is unusable
//! - [`supports`]: capability probe

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod fallback;
pub mod memory;
pub mod probe;
pub mod raw;

pub use fallback::FallbackStore;
pub use memory::{MemoryStore, SharedStore};
pub use probe::{supports, supports_with_key, PROBE_KEY};
pub use raw::{Backend, DisabledStore, RawStore, StoreError};
