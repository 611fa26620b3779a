//! One row of the contact list.

use super::action::AppAction;
use crate::input::{contexts, replay, Dispatchable, KeyOutcome, KeyToken, KeypressRouter, NodeCx};

pub struct ContactEntry {
    router: KeypressRouter<ContactEntry>,
    name: String,
}

impl ContactEntry {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            router: KeypressRouter::builder(contexts::CONTACT_ENTRY)
                .command("rename_contact", ContactEntry::rename_contact)
                .command("delete_contact", ContactEntry::delete_contact)
                .build(),
            name: name.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    fn rename_contact(&mut self, cx: &mut NodeCx<'_, AppAction>) -> KeyOutcome {
        cx.emit(AppAction::console(format!("rename-contact {}", self.name)));
        KeyOutcome::Handled
    }

    fn delete_contact(&mut self, cx: &mut NodeCx<'_, AppAction>) -> KeyOutcome {
        cx.emit(AppAction::console(format!("delete-contact {}", self.name)));
        KeyOutcome::Handled
    }
}

impl Dispatchable for ContactEntry {
    type Action = AppAction;

    fn router(&self) -> &KeypressRouter<Self> {
        &self.router
    }

    fn native_keypress(&mut self, key: KeyToken, cx: &mut NodeCx<'_, AppAction>) -> KeyOutcome {
        if key.is_enter() {
            // Opening a contact is the same as moving into the details pane.
            return replay(self, cx, "right", 1);
        }
        KeyOutcome::Unhandled(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{default_bindings, DispatchEngine};

    /// Offers keys to `entry`, letting a stand-in root retry what it returns.
    fn press(
        entry: &mut ContactEntry,
        engine: &mut DispatchEngine,
        keys: &[&str],
    ) -> (KeyOutcome, Vec<AppAction>) {
        let mut actions = Vec::new();
        let mut outcome = KeyOutcome::Handled;
        for k in keys {
            let mut cx = NodeCx::new(engine, &mut actions);
            outcome = entry.keypress(KeyToken::new(*k), &mut cx);
            if let KeyOutcome::Unhandled(key) = &outcome {
                engine.resolve(key, contexts::FRAME, true);
            }
        }
        (outcome, actions)
    }

    #[test]
    fn test_rename_prefills_console() {
        let mut engine = DispatchEngine::new(default_bindings());
        let mut entry = ContactEntry::new("Alice");
        let (outcome, actions) = press(&mut entry, &mut engine, &["c", "w"]);
        assert!(outcome.is_handled());
        assert_eq!(actions, vec![AppAction::console("rename-contact Alice")]);
    }

    #[test]
    fn test_enter_is_passed_up_as_right() {
        let mut engine = DispatchEngine::new(default_bindings());
        let mut entry = ContactEntry::new("Alice");
        let (outcome, actions) = press(&mut entry, &mut engine, &["enter"]);
        assert_eq!(outcome, KeyOutcome::Unhandled(KeyToken::new("right")));
        assert!(actions.is_empty());
    }

    #[test]
    fn test_global_command_is_not_claimed() {
        let mut engine = DispatchEngine::new(default_bindings());
        let mut entry = ContactEntry::new("Alice");
        let mut actions = Vec::new();
        let mut cx = NodeCx::new(&mut engine, &mut actions);
        let outcome = entry.keypress(KeyToken::new("t"), &mut cx);
        assert_eq!(outcome, KeyOutcome::Unhandled(KeyToken::new("t")));
        assert!(engine.state().is_bubbling);
        assert_eq!(engine.state().pending_keys(), "t");
    }
}
