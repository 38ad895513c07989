//! Convenient imports for Stash.
//!
//! ```
//! use stashkv::prelude::*;
//!
//! let mut stash = Stash::new();
//! stash.set("key", "value", None);
//! ```

// Main entry point
pub use crate::stash::{Stash, StashBuilder};

// Error handling
pub use crate::error::{Error, Result};

// Core types
pub use stash_core::{BackendKind, CanonicalKey, Value};

// Host stores
pub use stash_storage::{DisabledStore, MemoryStore, RawStore, SharedStore};

// Configuration
pub use stash_engine::StashConfig;
