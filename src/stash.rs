//! Main facade entry point for Stash.
//!
//! This module provides the `Stash` struct, which owns the host stores, the
//! in-memory fallback, the probe results and the undo ledger.

use crate::error::Result;
use crate::handle::KindHandle;
use stash_core::{BackendKind, CanonicalKey, Clock, SystemClock, Value};
use stash_engine::{namespace, StashConfig, Toggle, UndoLedger};
use stash_storage::{probe, Backend, FallbackStore, MemoryStore, RawStore};
use stash_wire::Envelope;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, error, warn};

/// Position of a native kind in the per-kind probe tables
fn native_slot(kind: BackendKind) -> Option<usize> {
    match kind {
        BackendKind::Durable => Some(0),
        BackendKind::Session => Some(1),
        BackendKind::InMemory => None,
    }
}

/// The storage facade.
///
/// Every data operation comes in three forms: per kind (`set_in`), on the
/// configured kind (`set`), and through a kind handle (`stash.local().set`).
/// Keys are normalized on the way in, so `"key 2"` and `"key2"` address the
/// same entry.
///
/// # Example
///
/// ```
/// use stashkv::prelude::*;
///
/// let mut stash = Stash::new();
/// stash.local().set("user:1", "Alice", None);
/// assert_eq!(stash.local().get("user : 1"), Some(Value::from("Alice")));
///
/// // Entries with a negative TTL are already expired
/// stash.set("gone", 1, Some(-1));
/// assert_eq!(stash.get("gone"), None);
/// ```
pub struct Stash {
    durable: Box<dyn RawStore>,
    session: Box<dyn RawStore>,
    fallback: FallbackStore,

    /// Cached probe results, by native slot
    probed: [Option<bool>; 2],
    /// Caller-forced probe results, by native slot
    overrides: [Option<bool>; 2],
    /// Native kinds whose writes have failed since the last reprobe
    demoted: [bool; 2],
    probe_key: String,

    kind: BackendKind,
    ledger: UndoLedger,
    clock: Arc<dyn Clock>,
}

impl Stash {
    /// Create a facade over fresh in-memory host stores with default settings.
    pub fn new() -> Self {
        StashBuilder::new().assemble()
    }

    /// Create a builder for facade configuration.
    ///
    /// # Example
    ///
    /// ```
    /// use stashkv::prelude::*;
    ///
    /// let local = SharedStore::new();
    /// let mut stash = Stash::builder()
    ///     .durable(local.clone())
    ///     .kind(BackendKind::Durable)
    ///     .undo(true)
    ///     .build()
    ///     .unwrap();
    ///
    /// stash.set("k", "v", None);
    /// assert_eq!(local.length(), 1);
    /// ```
    pub fn builder() -> StashBuilder {
        StashBuilder::new()
    }

    // =========================================================================
    // Kind handles
    // =========================================================================

    /// Operations on durable (local) storage.
    pub fn local(&mut self) -> KindHandle<'_> {
        KindHandle::new(self, BackendKind::Durable)
    }

    /// Operations on session storage.
    pub fn session(&mut self) -> KindHandle<'_> {
        KindHandle::new(self, BackendKind::Session)
    }

    /// Operations on any kind.
    pub fn kind(&mut self, kind: BackendKind) -> KindHandle<'_> {
        KindHandle::new(self, kind)
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    /// Set the kind targeted by the generic operations.
    pub fn configure_kind(&mut self, kind: BackendKind) {
        debug!(%kind, "configured storage kind");
        self.kind = kind;
    }

    /// Set the configured kind by name (`local`, `session` or `memory`).
    pub fn configure_kind_named(&mut self, name: &str) -> Result<()> {
        let kind = name.parse::<BackendKind>()?;
        self.configure_kind(kind);
        Ok(())
    }

    /// The kind targeted by the generic operations.
    pub fn configured_kind(&self) -> BackendKind {
        self.kind
    }

    /// Turn undo tracking on or off.
    pub fn enable_undo(&mut self, on: bool) {
        self.ledger.set_enabled(on);
    }

    /// Whether writes are being tracked for undo.
    pub fn is_undo_enabled(&self) -> bool {
        self.ledger.is_enabled()
    }

    // =========================================================================
    // Backend selection
    // =========================================================================

    /// Force the probe result for a native kind, or `None` to stop forcing.
    ///
    /// Has no effect for [`BackendKind::InMemory`].
    pub fn override_support(&mut self, kind: BackendKind, supported: Option<bool>) {
        if let Some(slot) = native_slot(kind) {
            debug!(%kind, ?supported, "storage support overridden");
            self.overrides[slot] = supported;
        }
    }

    /// Forget cached probe results and write-failure demotions.
    ///
    /// The next operation on each native kind probes again.
    pub fn reprobe(&mut self) {
        self.probed = [None; 2];
        self.demoted = [false; 2];
    }

    /// The kind that operations on `kind` currently land in.
    ///
    /// Native kinds map to themselves while usable and to
    /// [`BackendKind::InMemory`] otherwise.
    pub fn resolved_kind(&mut self, kind: BackendKind) -> BackendKind {
        if self.is_supported(kind) {
            kind
        } else {
            BackendKind::InMemory
        }
    }

    /// The in-memory fallback, for inspection.
    pub fn fallback(&self) -> &FallbackStore {
        &self.fallback
    }

    fn is_supported(&mut self, kind: BackendKind) -> bool {
        let Some(slot) = native_slot(kind) else {
            return false;
        };
        if self.demoted[slot] {
            return false;
        }
        if let Some(forced) = self.overrides[slot] {
            return forced;
        }
        if let Some(cached) = self.probed[slot] {
            return cached;
        }

        let store: &mut dyn RawStore = match kind {
            BackendKind::Durable => self.durable.as_mut(),
            _ => self.session.as_mut(),
        };
        let supported = probe::supports_with_key(store, &self.probe_key);
        if !supported {
            warn!(%kind, "host storage unusable, using in-memory fallback");
        }
        self.probed[slot] = Some(supported);
        supported
    }

    fn demote(&mut self, kind: BackendKind) {
        if let Some(slot) = native_slot(kind) {
            self.demoted[slot] = true;
        }
    }

    fn store_mut(&mut self, kind: BackendKind) -> &mut dyn RawStore {
        if !self.is_supported(kind) {
            return self.fallback.space_mut(kind);
        }
        match kind {
            BackendKind::Durable => self.durable.as_mut(),
            BackendKind::Session => self.session.as_mut(),
            BackendKind::InMemory => self.fallback.space_mut(kind),
        }
    }

    // =========================================================================
    // Per-kind API
    // =========================================================================

    /// Read the data stored under `key`.
    ///
    /// Returns `None` when nothing is stored, when the stored text is not an
    /// envelope, or when the entry has expired. In the latter two cases the
    /// entry is removed.
    pub fn get_in(&mut self, kind: BackendKind, key: &str) -> Option<Value> {
        self.get_entry_in(kind, key).map(|envelope| envelope.data)
    }

    /// Read the full envelope stored under `key`, with the same eviction
    /// rules as [`get_in`](Self::get_in).
    pub fn get_entry_in(&mut self, kind: BackendKind, key: &str) -> Option<Envelope> {
        let key = CanonicalKey::new(key);
        self.read_entry(kind, &key)
    }

    /// Store `data` under `key`, expiring `ttl_millis` after now if given.
    ///
    /// A negative TTL stores an entry that is already expired.
    pub fn set_in(
        &mut self,
        kind: BackendKind,
        key: &str,
        data: impl Into<Value>,
        ttl_millis: Option<i64>,
    ) {
        let key = CanonicalKey::new(key);
        self.write_entry(kind, &key, data.into(), ttl_millis);
    }

    /// Remove `key`. Undo slots are left alone.
    pub fn remove_in(&mut self, kind: BackendKind, key: &str) {
        let key = CanonicalKey::new(key);
        self.store_mut(kind).remove(&key);
    }

    /// Key at enumeration position `index`.
    pub fn key_at_in(&mut self, kind: BackendKind, index: usize) -> Option<CanonicalKey> {
        self.store_mut(kind).key_at(index)
    }

    /// Number of entries, including ones not written through the facade.
    pub fn len_in(&mut self, kind: BackendKind) -> usize {
        self.store_mut(kind).count()
    }

    /// Check if `kind` holds no entries.
    pub fn is_empty_in(&mut self, kind: BackendKind) -> bool {
        self.len_in(kind) == 0
    }

    /// Snapshot of every key, in enumeration order.
    pub fn keys_in(&mut self, kind: BackendKind) -> Vec<CanonicalKey> {
        self.store_mut(kind).keys()
    }

    /// Check if `key` holds a live entry. Expired entries are evicted.
    pub fn contains_in(&mut self, kind: BackendKind, key: &str) -> bool {
        self.get_entry_in(kind, key).is_some()
    }

    /// Remove every entry.
    pub fn clear_all_in(&mut self, kind: BackendKind) {
        debug!(%kind, "clearing storage");
        self.store_mut(kind).clear_all();
    }

    /// Remove every expired envelope, returning how many were removed.
    pub fn clear_expired_in(&mut self, kind: BackendKind) -> usize {
        let now = self.clock.now_millis();
        namespace::clear_expired(self.store_mut(kind), now)
    }

    /// Remove every key under `prefix`, returning how many were removed.
    pub fn clear_namespace_in(&mut self, kind: BackendKind, prefix: &str) -> usize {
        namespace::clear_namespace(self.store_mut(kind), prefix)
    }

    /// Swap `key` with its retained prior value and return the new live value.
    ///
    /// With undo disabled, or nothing retained for `key`, this returns the
    /// live value untouched. When the retained state is "no entry", the
    /// live entry is removed and `None` returned. Calling it again swaps
    /// back, so undo and redo are the same operation.
    pub fn undo_in(&mut self, kind: BackendKind, key: &str) -> Option<Value> {
        let key = CanonicalKey::new(key);
        let current = self.read_entry(kind, &key).map(|envelope| envelope.data);

        match self.ledger.plan_toggle(kind, &key, current.clone()) {
            Toggle::Unchanged(live) => live,
            Toggle::Restore(previous) => {
                self.write_entry(kind, &key, previous.clone(), None);
                Some(previous)
            }
            Toggle::Remove => {
                self.ledger.record_before_write(kind, &key, current);
                self.store_mut(kind).remove(&key);
                None
            }
        }
    }

    // =========================================================================
    // Configured-kind API
    // =========================================================================

    /// [`get_in`](Self::get_in) on the configured kind.
    pub fn get(&mut self, key: &str) -> Option<Value> {
        self.get_in(self.kind, key)
    }

    /// [`get_entry_in`](Self::get_entry_in) on the configured kind.
    pub fn get_entry(&mut self, key: &str) -> Option<Envelope> {
        self.get_entry_in(self.kind, key)
    }

    /// [`set_in`](Self::set_in) on the configured kind.
    pub fn set(&mut self, key: &str, data: impl Into<Value>, ttl_millis: Option<i64>) {
        self.set_in(self.kind, key, data, ttl_millis)
    }

    /// [`remove_in`](Self::remove_in) on the configured kind.
    pub fn remove(&mut self, key: &str) {
        self.remove_in(self.kind, key)
    }

    /// [`key_at_in`](Self::key_at_in) on the configured kind.
    pub fn key_at(&mut self, index: usize) -> Option<CanonicalKey> {
        self.key_at_in(self.kind, index)
    }

    /// [`len_in`](Self::len_in) on the configured kind.
    pub fn len(&mut self) -> usize {
        self.len_in(self.kind)
    }

    /// [`is_empty_in`](Self::is_empty_in) on the configured kind.
    pub fn is_empty(&mut self) -> bool {
        self.is_empty_in(self.kind)
    }

    /// [`keys_in`](Self::keys_in) on the configured kind.
    pub fn keys(&mut self) -> Vec<CanonicalKey> {
        self.keys_in(self.kind)
    }

    /// [`contains_in`](Self::contains_in) on the configured kind.
    pub fn contains(&mut self, key: &str) -> bool {
        self.contains_in(self.kind, key)
    }

    /// [`clear_all_in`](Self::clear_all_in) on the configured kind.
    pub fn clear_all(&mut self) {
        self.clear_all_in(self.kind)
    }

    /// [`clear_expired_in`](Self::clear_expired_in) on the configured kind.
    pub fn clear_expired(&mut self) -> usize {
        self.clear_expired_in(self.kind)
    }

    /// [`clear_namespace_in`](Self::clear_namespace_in) on the configured kind.
    pub fn clear_namespace(&mut self, prefix: &str) -> usize {
        self.clear_namespace_in(self.kind, prefix)
    }

    /// [`undo_in`](Self::undo_in) on the configured kind.
    pub fn undo(&mut self, key: &str) -> Option<Value> {
        self.undo_in(self.kind, key)
    }

    // =========================================================================
    // Read and write paths
    // =========================================================================

    fn read_entry(&mut self, kind: BackendKind, key: &CanonicalKey) -> Option<Envelope> {
        let now = self.clock.now_millis();
        let store = self.store_mut(kind);
        let raw = store.read(key)?;

        match Envelope::decode(&raw) {
            Ok(envelope) if envelope.is_expired(now) => {
                debug!(%kind, %key, "evicting expired entry");
                store.remove(key);
                None
            }
            Ok(envelope) => Some(envelope),
            Err(e) => {
                debug!(%kind, %key, error = %e, "evicting undecodable entry");
                store.remove(key);
                None
            }
        }
    }

    fn write_entry(
        &mut self,
        kind: BackendKind,
        key: &CanonicalKey,
        data: Value,
        ttl_millis: Option<i64>,
    ) {
        if self.ledger.is_enabled() {
            let previous = self.read_entry(kind, key).map(|envelope| envelope.data);
            self.ledger.record_before_write(kind, key, previous);
        }

        let now = self.clock.now_millis();
        let envelope = match ttl_millis {
            Some(ttl) => Envelope::with_ttl(data, now, ttl),
            None => Envelope::new(data, now),
        };
        let raw = match envelope.encode() {
            Ok(raw) => raw,
            Err(e) => {
                error!(%kind, %key, error = %e, "failed to encode entry, write skipped");
                return;
            }
        };

        let native = self.is_supported(kind);
        let Err(e) = self.store_mut(kind).write(key, &raw) else {
            return;
        };
        if !native {
            error!(%kind, %key, error = %e, "in-memory write failed");
            return;
        }

        warn!(%kind, %key, error = %e, "host write failed, demoting to in-memory fallback");
        self.demote(kind);
        if let Err(e) = self.fallback.space_mut(kind).write(key, &raw) {
            error!(%kind, %key, error = %e, "in-memory write failed");
        }
    }
}

impl Default for Stash {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Stash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stash")
            .field("kind", &self.kind)
            .field("undo_enabled", &self.ledger.is_enabled())
            .field("probed", &self.probed)
            .field("overrides", &self.overrides)
            .field("demoted", &self.demoted)
            .finish_non_exhaustive()
    }
}

/// Builder for facade configuration.
///
/// Host stores default to fresh [`MemoryStore`]s and the clock to
/// [`SystemClock`].
///
/// # Example
///
/// ```
/// use stashkv::prelude::*;
///
/// let stash = Stash::builder()
///     .config_toml(r#"default_kind = "local""#)
///     .unwrap()
///     .session(DisabledStore)
///     .build()
///     .unwrap();
/// assert_eq!(stash.configured_kind(), BackendKind::Durable);
/// ```
pub struct StashBuilder {
    durable: Option<Box<dyn RawStore>>,
    session: Option<Box<dyn RawStore>>,
    clock: Option<Arc<dyn Clock>>,
    config: StashConfig,
}

impl StashBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            durable: None,
            session: None,
            clock: None,
            config: StashConfig::default(),
        }
    }

    /// Host store behind [`BackendKind::Durable`].
    pub fn durable(mut self, store: impl RawStore + 'static) -> Self {
        self.durable = Some(Box::new(store));
        self
    }

    /// Host store behind [`BackendKind::Session`].
    pub fn session(mut self, store: impl RawStore + 'static) -> Self {
        self.session = Some(Box::new(store));
        self
    }

    /// Time source for timestamps and expiry checks.
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Replace all settings.
    pub fn config(mut self, config: StashConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace all settings from a TOML document.
    pub fn config_toml(self, toml: &str) -> Result<Self> {
        let config = StashConfig::from_toml_str(toml)?;
        Ok(self.config(config))
    }

    /// Kind targeted by the generic operations.
    pub fn kind(mut self, kind: BackendKind) -> Self {
        self.config.default_kind = kind;
        self
    }

    /// Whether undo tracking starts enabled.
    pub fn undo(mut self, enabled: bool) -> Self {
        self.config.undo_enabled = enabled;
        self
    }

    /// Reserved key used by the capability probe.
    pub fn probe_key(mut self, key: impl Into<String>) -> Self {
        self.config.probe_key = key.into();
        self
    }

    /// Validate the settings and build the facade.
    pub fn build(self) -> Result<Stash> {
        self.config.validate()?;
        Ok(self.assemble())
    }

    fn assemble(self) -> Stash {
        let StashConfig {
            default_kind,
            undo_enabled,
            probe_key,
        } = self.config;

        Stash {
            durable: self
                .durable
                .unwrap_or_else(|| Box::new(MemoryStore::new())),
            session: self
                .session
                .unwrap_or_else(|| Box::new(MemoryStore::new())),
            fallback: FallbackStore::new(),
            probed: [None; 2],
            overrides: [None; 2],
            demoted: [false; 2],
            probe_key,
            kind: default_kind,
            ledger: UndoLedger::new(undo_enabled),
            clock: self.clock.unwrap_or_else(|| Arc::new(SystemClock)),
        }
    }
}

impl Default for StashBuilder {
    fn default() -> Self {
        Self::new()
    }
}
