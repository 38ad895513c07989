//! In-memory stores
//!
//! [`MemoryStore`] behaves like a browser storage area: keys enumerate in
//! insertion order, overwriting a key keeps its position, and an optional
//! quota makes oversized writes fail. [`SharedStore`] is a cloneable handle
//! so a host can keep inspecting a store after handing it to a facade.

use crate::raw::{RawStore, StoreError};
use parking_lot::Mutex;
use rustc_hash::FxHashMap;
use std::sync::Arc;

/// Insertion-ordered string map implementing [`RawStore`]
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: FxHashMap<String, String>,
    order: Vec<String>,
    quota_bytes: Option<usize>,
    used_bytes: usize,
}

fn entry_size(key: &str, value: &str) -> usize {
    key.len() + value.len()
}

impl MemoryStore {
    /// Create an unbounded store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding at most `quota_bytes` of keys plus values
    pub fn with_quota(quota_bytes: usize) -> Self {
        Self {
            quota_bytes: Some(quota_bytes),
            ..Self::default()
        }
    }

    /// Bytes currently held
    pub fn used_bytes(&self) -> usize {
        self.used_bytes
    }

    /// Check if the store holds no entries
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterate entries in enumeration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.order.iter().filter_map(move |k| {
            self.entries
                .get(k)
                .map(|v| (k.as_str(), v.as_str()))
        })
    }
}

impl RawStore for MemoryStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let replaced = self
            .entries
            .get(key)
            .map(|old| entry_size(key, old))
            .unwrap_or(0);
        let needed = self.used_bytes - replaced + entry_size(key, value);
        if let Some(quota) = self.quota_bytes {
            if needed > quota {
                return Err(StoreError::QuotaExceeded { needed, quota });
            }
        }

        if self
            .entries
            .insert(key.to_string(), value.to_string())
            .is_none()
        {
            self.order.push(key.to_string());
        }
        self.used_bytes = needed;
        Ok(())
    }

    fn remove_item(&mut self, key: &str) {
        if let Some(old) = self.entries.remove(key) {
            self.used_bytes -= entry_size(key, &old);
            self.order.retain(|k| k != key);
        }
    }

    fn key(&self, index: usize) -> Option<String> {
        self.order.get(index).cloned()
    }

    fn length(&self) -> usize {
        self.order.len()
    }

    fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
        self.used_bytes = 0;
    }
}

/// Cloneable handle to a [`MemoryStore`]
///
/// All clones address the same entries.
#[derive(Debug, Clone, Default)]
pub struct SharedStore {
    inner: Arc<Mutex<MemoryStore>>,
}

impl SharedStore {
    /// Share a fresh unbounded store
    pub fn new() -> Self {
        Self::default()
    }

    /// Share an existing store
    pub fn from_store(store: MemoryStore) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    /// Share a fresh store with a byte quota
    pub fn with_quota(quota_bytes: usize) -> Self {
        Self::from_store(MemoryStore::with_quota(quota_bytes))
    }

    /// Run `f` against the underlying store
    pub fn with<R>(&self, f: impl FnOnce(&MemoryStore) -> R) -> R {
        f(&self.inner.lock())
    }
}

impl RawStore for SharedStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.inner.lock().get_item(key)
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.inner.lock().set_item(key, value)
    }

    fn remove_item(&mut self, key: &str) {
        self.inner.lock().remove_item(key)
    }

    fn key(&self, index: usize) -> Option<String> {
        self.inner.lock().key(index)
    }

    fn length(&self) -> usize {
        self.inner.lock().length()
    }

    fn clear(&mut self) {
        self.inner.lock().clear()
    }
}
