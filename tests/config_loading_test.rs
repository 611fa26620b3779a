//! Loading configuration files from disk.

mod common;

use std::fs;
use std::path::PathBuf;

use ctui::config::{self, ConfigSource};
use ctui::error::{ConfigError, CtuiError, ErrorCategory};
use ctui::input::keybindings::render_ini;
use ctui::input::{default_bindings, GLOBAL_CONTEXT};
use tempfile::TempDir;

fn write_config(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("config.ini");
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_missing_file_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let loaded = config::load(&dir.path().join("absent.ini")).unwrap();
    assert_eq!(loaded.source, ConfigSource::Defaults);
    assert_eq!(loaded.bindings.len(), default_bindings().len());
}

#[test]
fn test_file_replaces_defaults() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        "[keybindings.global]\nmove_down = j\nquit = q\n\n[keybindings.contact_list]\nsearch_contact = /\n",
    );

    let loaded = config::load(&path).unwrap();
    assert_eq!(loaded.source, ConfigSource::File(path));
    assert_eq!(loaded.bindings.len(), 3);
    let lookup = |seq: &str, ctx: &str| loaded.bindings.lookup(seq, &[ctx]).cloned();
    assert_eq!(lookup("j", GLOBAL_CONTEXT).as_deref(), Some("move_down"));
    assert_eq!(lookup("t", GLOBAL_CONTEXT), None);
    assert_eq!(lookup("/", "contact_list").as_deref(), Some("search_contact"));
}

#[test]
fn test_rendered_defaults_load_back() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, &render_ini(&default_bindings()));

    let loaded = config::load(&path).unwrap();
    assert_eq!(loaded.bindings.entries(), default_bindings().entries());
    assert!(loaded.bindings.warnings().is_empty());
}

#[test]
fn test_digit_sequence_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[keybindings.global]\nmove_down = 2t\n");

    let err = config::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::DigitInSequence { .. }), "{:?}", err);
    let err: CtuiError = err.into();
    assert_eq!(err.category(), ErrorCategory::Configuration);
    assert!(err.user_message().starts_with("Configuration error"));
}

#[test]
fn test_empty_sequence_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[keybindings.global]\nquit =\n");
    assert!(matches!(
        config::load(&path),
        Err(ConfigError::EmptySequence { .. })
    ));
}

#[test]
fn test_display_section() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        "[keybindings.global]\nquit = q\n\n[display]\nnav_width = 42\n\n[editor]\neditor = vim\n",
    );
    let loaded = config::load(&path).unwrap();
    assert_eq!(loaded.display.nav_width, 42);
}

#[test]
fn test_malformed_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[keybindings.global\nquit = q\n");
    assert!(config::load(&path).is_err());
}

#[test]
fn test_loaded_bindings_drive_the_app() {
    let loaded = config::load_from_str("[keybindings.global]\nmove_down = j\n").unwrap();
    let mut app = common::TestAppBuilder::new()
        .with_contact("A")
        .with_contact("B")
        .with_bindings(loaded.bindings)
        .build();
    common::press(&mut app, "j");
    assert_eq!(app.frame.list.position(), 1);
}
