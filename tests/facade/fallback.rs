//! Fallback Tests
//!
//! Operations on unusable host stores land in per-kind in-memory key-spaces
//! and behave exactly as they would natively.

use crate::*;
use stashkv::DisabledStore;

fn create_unsupported() -> Harness {
    let mut h = create_harness();
    h.stash.override_support(BackendKind::Durable, Some(false));
    h.stash.override_support(BackendKind::Session, Some(false));
    h
}

#[test]
fn test_fallback_is_transparent() {
    let mut h = create_unsupported();
    assert_eq!(h.stash.resolved_kind(BackendKind::Durable), BackendKind::InMemory);

    h.stash.local().set(KEY1, value1(), None);
    h.stash.local().set(KEY3, value3(), None);
    h.stash.session().set(KEY1, value1(), None);
    h.stash.session().set(KEY3, value3(), None);

    // nothing reached the hosts
    assert_eq!(h.local.length(), 0);
    assert_eq!(h.session.length(), 0);

    let durable = h.stash.fallback().space(BackendKind::Durable);
    assert_eq!(durable.get_item("key1").unwrap().find(RAW1), Some(1));
    let session = h.stash.fallback().space(BackendKind::Session);
    assert_eq!(session.get_item("key3").unwrap().find(RAW3), Some(1));

    assert_eq!(h.stash.local().get(KEY1), Some(value1()));
    assert_eq!(h.stash.session().get(KEY3), Some(value3()));

    assert_eq!(h.stash.session().key_at(0).unwrap(), "key1");
    assert_eq!(h.stash.local().key_at(1).unwrap(), "key3");

    assert_eq!(h.stash.session().len(), 2);
    assert_eq!(h.stash.local().len(), 2);

    h.stash.session().remove(KEY1);
    assert_eq!(h.stash.session().get(KEY1), None);
    h.stash.local().remove(KEY1);
    assert_eq!(h.stash.local().get(KEY1), None);

    h.stash.session().set("myNameSpace:myKey", "my namespaced value", None);
    assert_eq!(
        h.stash.session().get("myNameSpace:myKey"),
        Some(Value::from("my namespaced value"))
    );
}

#[test]
fn test_fallback_sweeps_are_per_kind() {
    let mut h = create_unsupported();
    h.stash.session().set("keep", 0, None);
    h.stash.session().set("expiringKey1", "v1", Some(60_000));
    h.stash.session().set("expiringKey2", "v2", Some(60_000));
    let count = h.stash.session().len();

    h.stash.session().set("expiringKey3", "v3", Some(-1));
    h.stash.session().set("expiringKey4", "v4", Some(-1));
    h.stash.local().set("expiringKey5", "v5", Some(-1));
    h.stash.local().set("other", 1, None);

    assert_eq!(h.stash.session().clear_expired(), 2);
    assert_eq!(h.stash.session().len(), count);

    // the durable space still holds its expired entry until accessed
    assert_eq!(h.stash.local().len(), 2);
    assert_eq!(h.stash.local().get("expiringKey5"), None);
    assert_eq!(h.stash.local().len(), 1);

    h.stash.session().set("ns1:a", 1, None);
    h.stash.local().set("ns1:a", 1, None);
    assert_eq!(h.stash.session().clear_namespace("ns1"), 1);
    assert_eq!(h.stash.local().get("ns1:a"), Some(Value::Int(1)));

    h.stash.session().clear_all();
    assert_eq!(h.stash.session().len(), 0);
    assert_eq!(h.stash.local().len(), 2);
}

#[test]
fn test_fallback_supports_undo() {
    let mut h = create_unsupported();
    h.stash.enable_undo(true);
    h.stash.local().set(KEY1, "a", None);
    h.stash.local().set(KEY1, "b", None);

    assert_eq!(h.stash.local().undo(KEY1), Some(Value::from("a")));
    assert_eq!(h.stash.local().undo(KEY1), Some(Value::from("b")));
}

#[test]
fn test_restoring_support_switches_back() {
    let mut h = create_unsupported();
    h.stash.local().set("k", "fallback", None);

    h.stash.override_support(BackendKind::Durable, None);
    assert_eq!(h.stash.resolved_kind(BackendKind::Durable), BackendKind::Durable);
    assert_eq!(h.stash.local().get("k"), None);

    h.stash.local().set("k", "native", None);
    assert_eq!(h.local.length(), 1);
    assert_eq!(h.stash.fallback().space(BackendKind::Durable).length(), 1);
}

#[test]
fn test_disabled_host_is_detected_by_probe() {
    let session = SharedStore::new();
    let mut stash = Stash::builder()
        .durable(DisabledStore)
        .session(session.clone())
        .build()
        .unwrap();

    assert_eq!(stash.resolved_kind(BackendKind::Durable), BackendKind::InMemory);
    assert_eq!(stash.resolved_kind(BackendKind::Session), BackendKind::Session);

    stash.local().set("k", "v", None);
    assert_eq!(stash.local().get("k"), Some(Value::from("v")));
    assert_eq!(stash.local().len(), 1);
    // the probe leaves no trace
    assert_eq!(session.length(), 0);
}

#[test]
fn test_quota_exhaustion_demotes_to_fallback() {
    let local = SharedStore::with_quota(200);
    let mut stash = Stash::builder().durable(local.clone()).build().unwrap();

    stash.local().set("small", 1, None);
    assert_eq!(local.length(), 1);

    stash.local().set("big", "x".repeat(500), None);
    assert_eq!(local.length(), 1);
    assert_eq!(stash.resolved_kind(BackendKind::Durable), BackendKind::InMemory);
    assert_eq!(stash.local().get("big"), Some(Value::from("x".repeat(500))));

    stash.reprobe();
    assert_eq!(stash.resolved_kind(BackendKind::Durable), BackendKind::Durable);
    assert_eq!(stash.local().get("small"), Some(Value::Int(1)));
}

#[test]
fn test_explicit_in_memory_kind() {
    let mut h = create_harness();
    h.stash.kind(BackendKind::InMemory).set("k", "v", None);

    assert_eq!(h.local.length(), 0);
    assert_eq!(h.session.length(), 0);
    assert_eq!(h.stash.kind(BackendKind::InMemory).len(), 1);
    assert_eq!(h.stash.fallback().space(BackendKind::InMemory).length(), 1);
}
