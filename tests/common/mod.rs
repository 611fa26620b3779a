//! Common test utilities for integration tests.
//!
//! # Example
//!
//! ```ignore
//! use common::TestAppBuilder;
//!
//! let mut app = TestAppBuilder::new().with_contact("Eve").build();
//! press(&mut app, "2t");
//! ```

#![allow(dead_code)]

use ctui::app::App;
use ctui::config::AppConfig;
use ctui::input::{BindingTable, DispatchEngine, KeyToken};
use ctui::models::{Contact, Gift, Note};
use ctui::repository::ContactRepository;

/// Builder for creating test App instances with various configurations.
#[derive(Default)]
pub struct TestAppBuilder {
    contacts: Vec<Contact>,
    bindings: Option<BindingTable>,
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a contact without details.
    pub fn with_contact(mut self, name: &str) -> Self {
        self.contacts.push(Contact::new(name));
        self
    }

    /// Adds a contact with one attribute, one gift and one note.
    pub fn with_detailed_contact(mut self, name: &str) -> Self {
        let mut contact = Contact::new(name).with_attribute("mail", "someone@example.org");
        if let Ok(gift) = Gift::new("Book") {
            contact = contact.with_gift(gift);
        }
        if let Ok(note) = Note::new("20240101", "first note") {
            contact = contact.with_note(note);
        }
        self.contacts.push(contact);
        self
    }

    /// Replaces the default bindings.
    pub fn with_bindings(mut self, bindings: BindingTable) -> Self {
        self.bindings = Some(bindings);
        self
    }

    pub fn build(self) -> App {
        let mut config = AppConfig::defaults();
        if let Some(bindings) = self.bindings {
            config.bindings = bindings;
        }
        App::new(config, ContactRepository::with_contacts(self.contacts))
    }
}

/// The original widget test setup: four contacts, the first two without
/// details and the last two with details.
pub fn widget_test_app() -> App {
    TestAppBuilder::new()
        .with_contact("A Contact")
        .with_contact("B Contact")
        .with_detailed_contact("C Contact")
        .with_detailed_contact("D Contact")
        .build()
}

/// Presses single-character keys, one per char.
pub fn press(app: &mut App, keys: &str) {
    for c in keys.chars() {
        app.handle_key(KeyToken::from(c));
    }
}

/// Presses named keys such as `"enter"` or `"ctrl r"`.
pub fn press_named(app: &mut App, keys: &[&str]) {
    for key in keys {
        app.handle_key(KeyToken::from(*key));
    }
}

/// Engine over `(context, sequence, command)` triples.
pub fn engine_with(bindings: &[(&str, &str, &str)]) -> DispatchEngine {
    let mut table = BindingTable::new();
    for (context, sequence, command) in bindings {
        table.register(*context, *sequence, *command);
    }
    DispatchEngine::new(table)
}

/// Resolves `keys` one char at a time at a terminal node in `context`,
/// returning the last result.
pub fn resolve_all(engine: &mut DispatchEngine, keys: &str, context: &str) -> Option<String> {
    let mut last = None;
    for c in keys.chars() {
        last = engine.resolve(&KeyToken::from(c), context, true);
    }
    last
}
