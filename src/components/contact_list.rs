//! The contact list pane.

use super::action::AppAction;
use super::contact_entry::ContactEntry;
use super::cursor::ListCursor;
use crate::input::{
    contexts, offer, replay, Dispatchable, KeyOutcome, KeyToken, KeypressRouter, NodeCx,
};

pub struct ContactList {
    router: KeypressRouter<ContactList>,
    entries: Vec<ContactEntry>,
    cursor: ListCursor,
}

impl ContactList {
    pub fn new(names: Vec<String>) -> Self {
        Self {
            router: KeypressRouter::builder(contexts::CONTACT_LIST)
                .command("move_down", ContactList::move_down)
                .command("move_up", ContactList::move_up)
                .command("jump_to_first", ContactList::jump_to_first)
                .command("jump_to_last", ContactList::jump_to_last)
                .command("move_right", ContactList::move_right)
                .command("search_contact", ContactList::search_contact)
                .command("set_contact_filter", ContactList::set_contact_filter)
                .command("clear_contact_filter", ContactList::clear_contact_filter)
                .build(),
            entries: names.into_iter().map(ContactEntry::new).collect(),
            cursor: ListCursor::default(),
        }
    }

    /// Replaces the rows, keeping the cursor on the same contact if it is
    /// still listed.
    pub fn set_names(&mut self, names: Vec<String>) {
        let focused = self.focused_name().map(str::to_string);
        self.entries = names.into_iter().map(ContactEntry::new).collect();
        match focused {
            Some(name) if self.select(&name) => {}
            _ => self.cursor.clamp(self.entries.len()),
        }
    }

    /// Moves the cursor onto `name`. Returns false if it is not listed.
    pub fn select(&mut self, name: &str) -> bool {
        match self.entries.iter().position(|e| e.name() == name) {
            Some(position) => {
                self.cursor.set(position, self.entries.len());
                true
            }
            None => false,
        }
    }

    pub fn focused_name(&self) -> Option<&str> {
        self.entries.get(self.cursor.position()).map(ContactEntry::name)
    }

    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(ContactEntry::name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn move_down(&mut self, cx: &mut NodeCx<'_, AppAction>) -> KeyOutcome {
        let times = cx.times();
        replay(self, cx, "down", times);
        KeyOutcome::Handled
    }

    fn move_up(&mut self, cx: &mut NodeCx<'_, AppAction>) -> KeyOutcome {
        let times = cx.times();
        replay(self, cx, "up", times);
        KeyOutcome::Handled
    }

    fn jump_to_first(&mut self, cx: &mut NodeCx<'_, AppAction>) -> KeyOutcome {
        replay(self, cx, "home", 1);
        KeyOutcome::Handled
    }

    fn jump_to_last(&mut self, cx: &mut NodeCx<'_, AppAction>) -> KeyOutcome {
        replay(self, cx, "end", 1);
        KeyOutcome::Handled
    }

    /// Hands `right` to the frame, which switches to the details pane.
    fn move_right(&mut self, cx: &mut NodeCx<'_, AppAction>) -> KeyOutcome {
        replay(self, cx, "right", 1)
    }

    fn search_contact(&mut self, cx: &mut NodeCx<'_, AppAction>) -> KeyOutcome {
        cx.emit(AppAction::OpenSearch);
        KeyOutcome::Handled
    }

    fn set_contact_filter(&mut self, cx: &mut NodeCx<'_, AppAction>) -> KeyOutcome {
        cx.emit(AppAction::OpenFilter);
        KeyOutcome::Handled
    }

    fn clear_contact_filter(&mut self, cx: &mut NodeCx<'_, AppAction>) -> KeyOutcome {
        cx.emit(AppAction::ClearFilter);
        KeyOutcome::Handled
    }
}

impl Dispatchable for ContactList {
    type Action = AppAction;

    fn router(&self) -> &KeypressRouter<Self> {
        &self.router
    }

    fn native_keypress(&mut self, key: KeyToken, cx: &mut NodeCx<'_, AppAction>) -> KeyOutcome {
        let key = match self.entries.get_mut(self.cursor.position()) {
            Some(entry) => match offer(entry, key, cx) {
                KeyOutcome::Handled => return KeyOutcome::Handled,
                KeyOutcome::Unhandled(key) => key,
            },
            None => key,
        };

        match self.cursor.apply(key.as_str(), self.entries.len()) {
            Some(true) => {
                if let Some(name) = self.focused_name() {
                    cx.emit(AppAction::SelectContact(name.to_string()));
                }
                KeyOutcome::Handled
            }
            _ => KeyOutcome::Unhandled(key),
        }
    }
}
