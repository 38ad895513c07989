//! Engine layer for stash
//!
//! Backend-agnostic logic the facade is assembled from:
//! - Namespace index: expired-entry and prefix sweeps over any [`Backend`]
//! - Undo ledger: single-slot per-key history and toggle planning
//! - Configuration: [`StashConfig`], loadable from TOML
//!
//! [`Backend`]: stash_storage::Backend

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod namespace;
pub mod undo;

pub use config::StashConfig;
pub use namespace::{clear_expired, clear_namespace, expired_keys, namespace_keys};
pub use undo::{Toggle, UndoLedger, UndoSlot};
