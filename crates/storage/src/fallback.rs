//! In-memory fallback
//!
//! When a host store is unusable, its operations land here. The fallback
//! keeps one independent key-space per requested kind, so length and
//! enumeration stay accurate per kind even though the storage is
//! process-local for all of them.

use crate::memory::MemoryStore;
use stash_core::BackendKind;

/// Process-local stand-in for the host stores
#[derive(Debug, Clone, Default)]
pub struct FallbackStore {
    durable: MemoryStore,
    session: MemoryStore,
    memory: MemoryStore,
}

impl FallbackStore {
    /// Create an empty fallback
    pub fn new() -> Self {
        Self::default()
    }

    /// Key-space standing in for `kind`
    pub fn space(&self, kind: BackendKind) -> &MemoryStore {
        match kind {
            BackendKind::Durable => &self.durable,
            BackendKind::Session => &self.session,
            BackendKind::InMemory => &self.memory,
        }
    }

    /// Mutable key-space standing in for `kind`
    pub fn space_mut(&mut self, kind: BackendKind) -> &mut MemoryStore {
        match kind {
            BackendKind::Durable => &mut self.durable,
            BackendKind::Session => &mut self.session,
            BackendKind::InMemory => &mut self.memory,
        }
    }
}
