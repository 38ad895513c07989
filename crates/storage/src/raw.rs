//! Raw host key-value contract
//!
//! The shape of a host storage area: string keys, string values, positional
//! enumeration. Durable and Session storage are two independently addressed
//! instances of this contract.

use stash_core::CanonicalKey;
use thiserror::Error;

/// Host store failures
///
/// Only writes can fail; reads of an unusable store simply find nothing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Write would exceed the store's quota
    #[error("quota exceeded: need {needed} bytes, quota is {quota}")]
    QuotaExceeded {
        /// Bytes the store would hold after the write
        needed: usize,
        /// Configured quota
        quota: usize,
    },

    /// Storage is switched off in this context
    #[error("storage disabled")]
    Disabled,

    /// Any other host failure
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Primitive host key-value store
pub trait RawStore {
    /// Read the value under `key`
    fn get_item(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Delete `key`; no-op when missing
    fn remove_item(&mut self, key: &str);

    /// Key at enumeration position `index`
    fn key(&self, index: usize) -> Option<String>;

    /// Number of entries held, including foreign ones
    fn length(&self) -> usize;

    /// Delete every entry
    fn clear(&mut self);
}

/// Canonical-key view of a store, used by the engine and facade
///
/// Enumeration order is the store's own and is stable between mutations.
pub trait Backend {
    /// Read the raw persisted string
    fn read(&self, key: &CanonicalKey) -> Option<String>;

    /// Persist a raw string
    fn write(&mut self, key: &CanonicalKey, value: &str) -> Result<(), StoreError>;

    /// Remove an entry
    fn remove(&mut self, key: &CanonicalKey);

    /// Key at enumeration position `index`
    fn key_at(&self, index: usize) -> Option<CanonicalKey>;

    /// Raw entry count
    fn count(&self) -> usize;

    /// Remove every entry
    fn clear_all(&mut self);

    /// Snapshot of every key in enumeration order
    fn keys(&self) -> Vec<CanonicalKey> {
        (0..self.count()).filter_map(|i| self.key_at(i)).collect()
    }
}

impl<S: RawStore + ?Sized> Backend for S {
    fn read(&self, key: &CanonicalKey) -> Option<String> {
        self.get_item(key.as_str())
    }

    fn write(&mut self, key: &CanonicalKey, value: &str) -> Result<(), StoreError> {
        self.set_item(key.as_str(), value)
    }

    fn remove(&mut self, key: &CanonicalKey) {
        self.remove_item(key.as_str())
    }

    fn key_at(&self, index: usize) -> Option<CanonicalKey> {
        self.key(index).map(CanonicalKey::from_stored)
    }

    fn count(&self) -> usize {
        self.length()
    }

    fn clear_all(&mut self) {
        self.clear()
    }
}

/// Host store that rejects every write, as in a sandboxed context
#[derive(Debug, Default, Clone, Copy)]
pub struct DisabledStore;

impl RawStore for DisabledStore {
    fn get_item(&self, _key: &str) -> Option<String> {
        None
    }

    fn set_item(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Disabled)
    }

    fn remove_item(&mut self, _key: &str) {}

    fn key(&self, _index: usize) -> Option<String> {
        None
    }

    fn length(&self) -> usize {
        0
    }

    fn clear(&mut self) {}
}
