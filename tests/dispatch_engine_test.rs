//! Dispatch engine behaviour at a single node.

mod common;

use common::{engine_with, resolve_all};
use ctui::input::{BindingTable, KeySequenceAccumulator, KeyToken};
use proptest::prelude::*;

fn key(name: &str) -> KeyToken {
    KeyToken::new(name)
}

proptest! {
    #[test]
    fn prop_digits_concatenate_into_repeat(digits in "[1-9][0-9]{0,5}") {
        let mut acc = KeySequenceAccumulator::new();
        for c in digits.chars() {
            acc.record(&KeyToken::from(c));
        }
        acc.record(&key("t"));
        prop_assert_eq!(acc.repeat(), digits.parse::<u32>().unwrap());
        prop_assert_eq!(acc.signature(), "t");
    }

    #[test]
    fn prop_esc_always_returns_to_idle(keys in "[a-z0-9]{0,8}") {
        let mut engine =
            engine_with(&[("global", "gg", "jump_to_first"), ("global", "abc", "deep")]);
        resolve_all(&mut engine, &keys, "frame");
        prop_assert_eq!(engine.resolve(&key("esc"), "frame", true), None);
        prop_assert!(engine.state().is_idle());
        prop_assert_eq!(engine.repeat_count(), 0);
    }
}

#[test]
fn test_digits_concatenate() {
    let mut engine = engine_with(&[("global", "t", "move_down")]);
    resolve_all(&mut engine, "12", "frame");
    assert_eq!(engine.state().repeat(), 12);
}

#[test]
fn test_prefix_waits_then_resolves() {
    let mut engine = engine_with(&[("global", "gg", "jump_to_first")]);

    assert_eq!(engine.resolve(&key("g"), "frame", true), None);
    assert!(engine.is_prefix("g"));
    assert!(!engine.state().is_idle());

    let command = engine.resolve(&key("g"), "frame", true);
    assert_eq!(command.as_deref(), Some("jump_to_first"));
    assert!(engine.state().is_idle());
}

#[test]
fn test_node_and_global_scopes_share_a_prefix() {
    let mut engine = engine_with(&[
        ("contact_list", "ig", "add_google_contact"),
        ("global", "ii", "add_attribute"),
    ]);

    assert_eq!(
        resolve_all(&mut engine, "ig", "contact_list").as_deref(),
        Some("add_google_contact")
    );
    assert_eq!(resolve_all(&mut engine, "ii", "contact_list").as_deref(), Some("add_attribute"));
    // Not visible from another context.
    assert_eq!(resolve_all(&mut engine, "ig", "contact_details"), None);
}

#[test]
fn test_esc_resets_from_any_depth() {
    let mut engine = engine_with(&[("global", "abc", "deep")]);
    resolve_all(&mut engine, "42ab", "frame");
    assert_eq!(engine.state().pending_keys(), "ab");

    engine.resolve(&key("esc"), "frame", true);
    assert!(engine.state().is_idle());
    assert_eq!(engine.state().repeat(), 0);
}

#[test]
fn test_duplicate_registration_last_wins_with_warning() {
    let mut table = BindingTable::new();
    table.register("global", "x", "foo");
    table.register("global", "x", "bar");

    assert_eq!(table.lookup("x", &["global"]).map(String::as_str), Some("bar"));
    assert_eq!(table.warnings().len(), 1);
    assert!(table.warnings()[0].to_string().contains("foo"));
}

#[test]
fn test_simulation_leaves_state_unchanged() {
    let mut engine =
        engine_with(&[("global", "gg", "jump_to_first"), ("global", "t", "move_down")]);
    resolve_all(&mut engine, "3g", "frame");
    let before = engine.state().clone();

    engine.set_simulating(true);
    for k in ["down", "up", "g", "t", "5", "esc", "z"] {
        engine.resolve(&key(k), "contact_list", false);
        engine.resolve(&key(k), "frame", true);
    }
    assert_eq!(engine.state().pending, before.pending);
    assert_eq!(engine.state().is_bubbling, before.is_bubbling);
    engine.set_simulating(false);

    assert_eq!(engine.resolve(&key("g"), "frame", true).as_deref(), Some("jump_to_first"));
    assert_eq!(engine.repeat_count(), 3);
}

#[test]
fn test_repeat_count_end_to_end() {
    let mut engine = engine_with(&[("global", "t", "move_down")]);
    let command = resolve_all(&mut engine, "5t", "frame");
    assert_eq!(command.as_deref(), Some("move_down"));
    assert_eq!(engine.repeat_count(), 5);
}

#[test]
fn test_unknown_key_abandoned_at_terminal() {
    let mut engine = engine_with(&[("global", "gg", "jump_to_first")]);
    assert_eq!(engine.resolve(&key("z"), "frame", true), None);
    assert!(engine.state().is_idle());
}

#[test]
fn test_named_token_sequence() {
    let mut engine = engine_with(&[("global", "ctrl r", "reload")]);
    let command = engine.resolve(&key("ctrl r"), "frame", true);
    assert_eq!(command.as_deref(), Some("reload"));
}
