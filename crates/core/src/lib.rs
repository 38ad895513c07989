//! Core types for Stash
//!
//! Shared vocabulary for every other crate in the workspace:
//! - [`Value`]: the schema-free data stored under a key
//! - [`CanonicalKey`] and [`NamespacePrefix`]: normalized key forms
//! - [`BackendKind`]: which provider an operation targets
//! - [`Clock`]: time source for envelope timestamps

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod key;
pub mod kind;
pub mod time;
pub mod value;

pub use error::{CoreError, CoreResult};
pub use key::{normalize, CanonicalKey, NamespacePrefix, NAMESPACE_SEPARATOR};
pub use kind::BackendKind;
pub use time::{Clock, ManualClock, SystemClock, Timestamp};
pub use value::Value;
