//! Configuration Tests
//!
//! Kind selection for the generic operations, builder settings and TOML.

use crate::*;

#[test]
fn test_default_kind_is_session() {
    let mut h = create_harness();
    assert_eq!(h.stash.configured_kind(), BackendKind::Session);

    set_fixtures_generic(&mut h.stash);
    assert_fixture_layout(&h.session);
    assert_eq!(h.local.length(), 0);
    assert_generic_reads(&mut h.stash);
}

#[test]
fn test_configure_local() {
    let mut h = create_harness();
    h.stash.configure_kind_named("local").unwrap();

    set_fixtures_generic(&mut h.stash);
    assert_fixture_layout(&h.local);
    assert_eq!(h.session.length(), 0);
    assert_generic_reads(&mut h.stash);
}

#[test]
fn test_configure_session() {
    let mut h = create_harness_with(|b| b.kind(BackendKind::Durable));
    h.stash.configure_kind(BackendKind::Session);

    set_fixtures_generic(&mut h.stash);
    assert_fixture_layout(&h.session);
    assert_generic_reads(&mut h.stash);
}

#[test]
fn test_generic_operations_follow_configured_kind() {
    let mut h = create_harness();
    h.stash.configure_kind(BackendKind::Durable);
    h.stash.set("a", 1, None);
    h.stash.set("gone", 2, Some(-1));

    assert_eq!(h.stash.len(), 2);
    assert_eq!(h.stash.key_at(0).unwrap(), "a");
    assert_eq!(h.stash.clear_expired(), 1);
    assert!(h.stash.contains("a"));
    h.stash.remove("a");
    assert!(h.stash.is_empty());

    h.stash.set("x", 1, None);
    h.stash.clear_all();
    assert_eq!(h.local.length(), 0);
}

#[test]
fn test_unknown_kind_name_is_rejected() {
    let mut h = create_harness();
    let err = h.stash.configure_kind_named("cookie").unwrap_err();
    assert!(err.is_unknown_kind());
    assert_eq!(h.stash.configured_kind(), BackendKind::Session);
}

#[test]
fn test_builder_applies_toml() {
    let h = create_harness_with(|b| {
        b.config_toml(
            r#"
            default_kind = "local"
            undo_enabled = true
            "#,
        )
        .unwrap()
    });
    assert_eq!(h.stash.configured_kind(), BackendKind::Durable);
    assert!(h.stash.is_undo_enabled());
}

#[test]
fn test_builder_rejects_bad_toml() {
    let err = Stash::builder()
        .config_toml("default_kind = 5")
        .err()
        .expect("bad TOML should be rejected");
    assert!(err.is_config_error());
}

#[test]
fn test_config_struct_applies() {
    let config = StashConfig {
        default_kind: BackendKind::Durable,
        undo_enabled: true,
        ..StashConfig::default()
    };
    let h = create_harness_with(|b| b.config(config));
    assert_eq!(h.stash.configured_kind(), BackendKind::Durable);
    assert!(h.stash.is_undo_enabled());
}

#[test]
fn test_custom_probe_key() {
    let mut h = create_harness_with(|b| b.probe_key("__custom_probe__"));
    h.stash.local().set("k", 1, None);
    assert_eq!(h.local.length(), 1);
    assert_eq!(h.local.get_item("__custom_probe__"), None);
}

fn set_fixtures_generic(stash: &mut Stash) {
    stash.set(KEY1, value1(), None);
    stash.set(KEY2, value2(), None);
    stash.set(KEY3, value3(), None);
    stash.set(KEY4, value4(), None);
}

fn assert_generic_reads(stash: &mut Stash) {
    assert_eq!(stash.get(KEY1), Some(value1()));
    assert_eq!(stash.get(KEY2), Some(value2()));
    assert_eq!(stash.get(KEY3), Some(value3()));
    assert_eq!(stash.get(KEY4), Some(value4()));
}
