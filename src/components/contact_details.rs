//! The details pane: attributes, then gifts, then notes of one contact.

use super::action::AppAction;
use super::cursor::ListCursor;
use super::detail_entry::{AttributeEntry, DetailEntry, GiftEntry, NoteEntry};
use crate::console::FocusedDetail;
use crate::input::{contexts, replay, Dispatchable, KeyOutcome, KeyToken, KeypressRouter, NodeCx};
use crate::models::{Contact, Note};

pub struct ContactDetails {
    router: KeypressRouter<ContactDetails>,
    contact: Option<String>,
    entries: Vec<DetailEntry>,
    cursor: ListCursor,
}

impl Default for ContactDetails {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactDetails {
    pub fn new() -> Self {
        Self {
            router: KeypressRouter::builder(contexts::CONTACT_DETAILS)
                .command("move_down", ContactDetails::move_down)
                .command("move_up", ContactDetails::move_up)
                .command("jump_to_first", ContactDetails::jump_to_first)
                .command("jump_to_last", ContactDetails::jump_to_last)
                .command("move_left", ContactDetails::move_left)
                .command("add_gift", ContactDetails::add_gift)
                .build(),
            contact: None,
            entries: Vec::new(),
            cursor: ListCursor::default(),
        }
    }

    /// Shows `contact`. The cursor stays in place when the same contact is
    /// shown again (after an edit) and starts at the top otherwise.
    pub fn set_contact(&mut self, contact: Option<&Contact>) {
        let same = contact.map(|c| c.name.as_str()) == self.contact.as_deref();
        self.contact = contact.map(|c| c.name.clone());
        self.entries = contact.map(build_entries).unwrap_or_default();
        if same {
            self.cursor.clamp(self.entries.len());
        } else {
            self.cursor = ListCursor::default();
        }
    }

    pub fn contact_name(&self) -> Option<&str> {
        self.contact.as_deref()
    }

    pub fn focus_detail(&mut self, detail: &FocusedDetail) -> bool {
        match self.entries.iter().position(|e| e.matches(detail)) {
            Some(position) => {
                self.cursor.set(position, self.entries.len());
                true
            }
            None => false,
        }
    }

    pub fn focused(&self) -> Option<FocusedDetail> {
        self.entries.get(self.cursor.position()).map(DetailEntry::focused)
    }

    pub fn focused_note(&self) -> Option<&Note> {
        match self.entries.get(self.cursor.position()) {
            Some(DetailEntry::Note(entry)) => Some(entry.note()),
            _ => None,
        }
    }

    pub fn entries(&self) -> &[DetailEntry] {
        &self.entries
    }

    pub fn position(&self) -> usize {
        self.cursor.position()
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

    fn move_left(&mut self, cx: &mut NodeCx<'_, AppAction>) -> KeyOutcome {
        replay(self, cx, "left", 1)
    }

    fn add_gift(&mut self, cx: &mut NodeCx<'_, AppAction>) -> KeyOutcome {
        cx.emit(AppAction::console("add-gift "));
        KeyOutcome::Handled
    }
}

fn build_entries(contact: &Contact) -> Vec<DetailEntry> {
    let attributes = contact
        .attributes
        .iter()
        .cloned()
        .map(|a| DetailEntry::Attribute(AttributeEntry::new(a)));
    let gifts = contact
        .gifts
        .iter()
        .cloned()
        .map(|g| DetailEntry::Gift(GiftEntry::new(g)));
    let notes = contact
        .notes
        .iter()
        .cloned()
        .map(|n| DetailEntry::Note(NoteEntry::new(n)));
    attributes.chain(gifts).chain(notes).collect()
}

impl Dispatchable for ContactDetails {
    type Action = AppAction;

    fn router(&self) -> &KeypressRouter<Self> {
        &self.router
    }

    fn native_keypress(&mut self, key: KeyToken, cx: &mut NodeCx<'_, AppAction>) -> KeyOutcome {
        let key = match self.entries.get_mut(self.cursor.position()) {
            Some(entry) => match entry.keypress(key, cx) {
                KeyOutcome::Handled => return KeyOutcome::Handled,
                KeyOutcome::Unhandled(key) => key,
            },
            None => key,
        };

        match self.cursor.apply(key.as_str(), self.entries.len()) {
            Some(true) => KeyOutcome::Handled,
            _ => KeyOutcome::Unhandled(key),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Attribute, Gift};

    fn contact() -> Contact {
        let mut c = Contact::new("Alice").with_attribute("phone", "1");
        c.add_gift(Gift::new("Book").unwrap()).unwrap();
        c.add_note(Note::new("20240101", "hi").unwrap()).unwrap();
        c
    }

    #[test]
    fn test_entries_are_grouped_by_kind() {
        let mut details = ContactDetails::new();
        details.set_contact(Some(&contact()));
        let contexts: Vec<_> = details.entries().iter().map(DetailEntry::context).collect();
        assert_eq!(contexts, vec!["attribute_entry", "gift_entry", "note_entry"]);
        assert_eq!(
            details.focused(),
            Some(FocusedDetail::Attribute(Attribute::new("phone", "1")))
        );
    }

    #[test]
    fn test_cursor_kept_for_same_contact() {
        let mut details = ContactDetails::new();
        let c = contact();
        details.set_contact(Some(&c));
        assert!(details.focus_detail(&FocusedDetail::Note("20240101".into())));
        assert_eq!(details.focused_note().map(|n| n.note_id.as_str()), Some("20240101"));

        details.set_contact(Some(&c));
        assert_eq!(details.position(), 2);

        details.set_contact(Some(&Contact::new("Bob")));
        assert_eq!(details.position(), 0);
        assert!(details.is_empty());
        assert_eq!(details.focused(), None);
    }
}
