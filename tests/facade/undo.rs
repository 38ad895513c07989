//! Undo Tests
//!
//! Enabling and disabling, per-kind toggling and redo by repetition.

use crate::*;

fn value5() -> Value {
    Value::from("edit #1")
}

fn value6() -> Value {
    Value::from("edit #2")
}

// =============================================================================
// ENABLE / DISABLE
// =============================================================================

#[test]
fn test_enable_and_disable_undo() {
    let mut h = create_harness();
    assert!(!h.stash.is_undo_enabled());

    h.stash.enable_undo(true);
    assert!(h.stash.is_undo_enabled());

    h.stash.enable_undo(false);
    assert!(!h.stash.is_undo_enabled());
}

#[test]
fn test_undo_disabled_returns_current_value() {
    let mut h = create_harness();
    for kind in [BackendKind::Durable, BackendKind::Session] {
        h.stash.set_in(kind, KEY1, value5(), None);
        h.stash.set_in(kind, KEY1, value6(), None);

        assert_eq!(h.stash.undo_in(kind, KEY1), Some(value6()));
        assert_eq!(h.stash.undo_in(kind, KEY1), Some(value6()));
        assert_eq!(h.stash.get_in(kind, KEY1), Some(value6()));
    }
}

#[test]
fn test_writes_while_disabled_are_not_tracked() {
    let mut h = create_harness();
    h.stash.local().set(KEY1, value5(), None);
    h.stash.local().set(KEY1, value6(), None);

    h.stash.enable_undo(true);
    // nothing retained yet
    assert_eq!(h.stash.local().undo(KEY1), Some(value6()));
}

// =============================================================================
// UNDO / REDO PER KIND
// =============================================================================

#[test]
fn test_undo_and_redo_per_kind() {
    for kind in [BackendKind::Durable, BackendKind::Session] {
        let mut h = create_harness_with(|b| b.undo(true));
        h.stash.set_in(kind, KEY1, value5(), None);
        h.stash.set_in(kind, KEY1, value6(), None);

        assert_eq!(h.stash.undo_in(kind, KEY1), Some(value5()));
        assert_eq!(h.stash.get_in(kind, KEY1), Some(value5()));

        // redo is a repeated undo
        assert_eq!(h.stash.undo_in(kind, KEY1), Some(value6()));
        assert_eq!(h.stash.undo_in(kind, KEY1), Some(value5()));
        assert_eq!(h.stash.undo_in(kind, KEY1), Some(value6()));
        assert_eq!(h.stash.undo_in(kind, KEY1), Some(value5()));
        assert_eq!(h.stash.undo_in(kind, KEY1), Some(value6()));
        assert_eq!(h.stash.get_in(kind, KEY1), Some(value6()));
    }
}

#[test]
fn test_undo_on_configured_kind() {
    let mut h = create_harness_with(|b| b.undo(true));

    h.stash.configure_kind(BackendKind::Session);
    h.stash.set(KEY1, value5(), None);
    h.stash.set(KEY1, value6(), None);
    assert_eq!(h.stash.get(KEY1), Some(value6()));
    h.stash.undo(KEY1);
    assert_eq!(h.stash.get(KEY1), Some(value5()));
    h.stash.undo(KEY1);
    assert_eq!(h.stash.get(KEY1), Some(value6()));

    h.stash.configure_kind(BackendKind::Durable);
    h.stash.set(KEY1, value5(), None);
    h.stash.set(KEY1, value6(), None);
    assert_eq!(h.stash.undo(KEY1), Some(value5()));
    assert_eq!(h.stash.get(KEY1), Some(value5()));
    assert_eq!(h.stash.undo(KEY1), Some(value6()));
    assert_eq!(h.stash.get(KEY1), Some(value6()));
}

#[test]
fn test_undo_slots_are_per_kind() {
    let mut h = create_harness_with(|b| b.undo(true));
    h.stash.local().set(KEY1, "local a", None);
    h.stash.local().set(KEY1, "local b", None);
    h.stash.session().set(KEY1, "session a", None);

    assert_eq!(h.stash.local().undo(KEY1), Some(Value::from("local a")));
    assert_eq!(
        h.stash.session().get(KEY1),
        Some(Value::from("session a"))
    );
}

#[test]
fn test_undo_keys_are_normalized() {
    let mut h = create_harness_with(|b| b.undo(true));
    h.stash.local().set("key 1", value5(), None);
    h.stash.local().set("key1", value6(), None);

    assert_eq!(h.stash.local().undo(" key1 "), Some(value5()));
}

#[test]
fn test_undo_of_first_write_removes_entry() {
    let mut h = create_harness_with(|b| b.undo(true));
    h.stash.local().set(KEY1, value5(), None);

    assert_eq!(h.stash.local().undo(KEY1), None);
    assert_eq!(h.local.get_item("key1"), None);
    assert_eq!(h.stash.local().undo(KEY1), Some(value5()));
}

#[test]
fn test_undo_restores_without_ttl() {
    let mut h = create_harness_with(|b| b.undo(true));
    h.stash.local().set(KEY1, value5(), Some(60_000));
    h.stash.local().set(KEY1, value6(), None);

    assert_eq!(h.stash.local().undo(KEY1), Some(value5()));
    let entry = h.stash.local().get_entry(KEY1).unwrap();
    assert_eq!(entry.expires_at, None);
}

#[test]
fn test_undo_unknown_key_returns_none() {
    let mut h = create_harness_with(|b| b.undo(true));
    assert_eq!(h.stash.local().undo("never-set"), None);
}

#[test]
fn test_expired_prior_value_is_not_retained() {
    let mut h = create_harness_with(|b| b.undo(true));
    h.stash.local().set(KEY1, value5(), Some(10));
    h.clock.advance(10);
    h.stash.local().set(KEY1, value6(), None);

    // the overwritten entry had expired, so the slot holds "no entry"
    assert_eq!(h.stash.local().undo(KEY1), None);
}
