//! Undo ledger
//!
//! One retained prior value per (kind, key). Each write made while tracking
//! is on replaces the slot with the value being overwritten, and a toggle
//! writes the slot back through the same path. Toggling therefore swaps the
//! two most recent values back and forth; older values are gone.
//!
//! ```text
//! set A      slot = <none>      live = A
//! set B      slot = A           live = B
//! toggle     slot = B           live = A   -> returns A
//! toggle     slot = A           live = B   -> returns B
//! ```
//!
//! The ledger only decides; the facade owns the write path and carries the
//! decision out.

use rustc_hash::FxHashMap;
use stash_core::{BackendKind, CanonicalKey, Value};
use tracing::debug;

/// What a slot retains
#[derive(Debug, Clone, PartialEq)]
pub enum UndoSlot {
    /// The key had no entry before the recorded write
    Absent,
    /// The value that was overwritten
    Value(Value),
}

impl From<Option<Value>> for UndoSlot {
    fn from(previous: Option<Value>) -> Self {
        match previous {
            Some(v) => UndoSlot::Value(v),
            None => UndoSlot::Absent,
        }
    }
}

/// Outcome of a toggle request
#[derive(Debug, Clone, PartialEq)]
pub enum Toggle {
    /// Nothing to swap; report the live value as is
    Unchanged(Option<Value>),
    /// Write the retained value back as the live value
    Restore(Value),
    /// The retained state is "no entry": remove the live value
    Remove,
}

/// Per-kind, per-key single-slot history
#[derive(Debug, Clone, Default)]
pub struct UndoLedger {
    enabled: bool,
    slots: FxHashMap<(BackendKind, CanonicalKey), UndoSlot>,
}

impl UndoLedger {
    /// Create a ledger, tracking or not
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            slots: FxHashMap::default(),
        }
    }

    /// Turn tracking on or off
    ///
    /// Turning it off leaves existing slots in place but inert.
    pub fn set_enabled(&mut self, on: bool) {
        self.enabled = on;
    }

    /// Whether writes are being tracked
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Retain `previous` as the value `key` is about to lose
    ///
    /// No-op while tracking is off.
    pub fn record_before_write(
        &mut self,
        kind: BackendKind,
        key: &CanonicalKey,
        previous: Option<Value>,
    ) {
        if !self.enabled {
            return;
        }
        self.slots.insert((kind, key.clone()), previous.into());
    }

    /// The retained slot, regardless of whether tracking is on
    pub fn retained(&self, kind: BackendKind, key: &CanonicalKey) -> Option<&UndoSlot> {
        self.slots.get(&(kind, key.clone()))
    }

    /// Decide what toggling `key` should do given its live value
    pub fn plan_toggle(
        &self,
        kind: BackendKind,
        key: &CanonicalKey,
        current: Option<Value>,
    ) -> Toggle {
        if !self.enabled {
            return Toggle::Unchanged(current);
        }
        match self.retained(kind, key) {
            Some(UndoSlot::Value(prev)) => {
                debug!(%kind, %key, "undo restores retained value");
                Toggle::Restore(prev.clone())
            }
            Some(UndoSlot::Absent) => {
                debug!(%kind, %key, "undo removes entry written without predecessor");
                Toggle::Remove
            }
            None => Toggle::Unchanged(current),
        }
    }

    /// Number of retained slots
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Check if no slot has been recorded
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
