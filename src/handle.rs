//! Kind-scoped view of the facade.
//!
//! ```ignore
//! stash.local().set("k", "v", None);
//! stash.session().clear_namespace("ns1:");
//! ```

use crate::stash::Stash;
use stash_core::{BackendKind, CanonicalKey, Value};
use stash_wire::Envelope;

/// Operations pinned to one backend kind.
///
/// Obtained from [`Stash::local`], [`Stash::session`] or [`Stash::kind`].
#[derive(Debug)]
pub struct KindHandle<'a> {
    stash: &'a mut Stash,
    kind: BackendKind,
}

impl<'a> KindHandle<'a> {
    pub(crate) fn new(stash: &'a mut Stash, kind: BackendKind) -> Self {
        Self { stash, kind }
    }

    /// The kind this handle addresses.
    pub fn backend_kind(&self) -> BackendKind {
        self.kind
    }

    /// See [`Stash::get_in`].
    pub fn get(&mut self, key: &str) -> Option<Value> {
        self.stash.get_in(self.kind, key)
    }

    /// See [`Stash::get_entry_in`].
    pub fn get_entry(&mut self, key: &str) -> Option<Envelope> {
        self.stash.get_entry_in(self.kind, key)
    }

    /// See [`Stash::set_in`].
    pub fn set(&mut self, key: &str, data: impl Into<Value>, ttl_millis: Option<i64>) {
        self.stash.set_in(self.kind, key, data, ttl_millis)
    }

    /// See [`Stash::remove_in`].
    pub fn remove(&mut self, key: &str) {
        self.stash.remove_in(self.kind, key)
    }

    /// See [`Stash::key_at_in`].
    pub fn key_at(&mut self, index: usize) -> Option<CanonicalKey> {
        self.stash.key_at_in(self.kind, index)
    }

    /// See [`Stash::len_in`].
    pub fn len(&mut self) -> usize {
        self.stash.len_in(self.kind)
    }

    /// See [`Stash::is_empty_in`].
    pub fn is_empty(&mut self) -> bool {
        self.stash.is_empty_in(self.kind)
    }

    /// See [`Stash::keys_in`].
    pub fn keys(&mut self) -> Vec<CanonicalKey> {
        self.stash.keys_in(self.kind)
    }

    /// See [`Stash::contains_in`].
    pub fn contains(&mut self, key: &str) -> bool {
        self.stash.contains_in(self.kind, key)
    }

    /// See [`Stash::clear_all_in`].
    pub fn clear_all(&mut self) {
        self.stash.clear_all_in(self.kind)
    }

    /// See [`Stash::clear_expired_in`].
    pub fn clear_expired(&mut self) -> usize {
        self.stash.clear_expired_in(self.kind)
    }

    /// See [`Stash::clear_namespace_in`].
    pub fn clear_namespace(&mut self, prefix: &str) -> usize {
        self.stash.clear_namespace_in(self.kind, prefix)
    }

    /// See [`Stash::undo_in`].
    pub fn undo(&mut self, key: &str) -> Option<Value> {
        self.stash.undo_in(self.kind, key)
    }
}
