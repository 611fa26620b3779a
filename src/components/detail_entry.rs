//! Rows of the details pane.
//!
//! Each detail kind is its own node with its own context, so the same key
//! sequence (`cw`, `D`) means a different command on an attribute, a gift
//! or a note.

use super::action::AppAction;
use crate::console::FocusedDetail;
use crate::input::{contexts, offer, Dispatchable, KeyOutcome, KeyToken, KeypressRouter, NodeCx};
use crate::models::{Attribute, Gift, Note};

pub struct AttributeEntry {
    router: KeypressRouter<AttributeEntry>,
    attribute: Attribute,
}

impl AttributeEntry {
    pub fn new(attribute: Attribute) -> Self {
        Self {
            router: KeypressRouter::builder(contexts::ATTRIBUTE_ENTRY)
                .command("edit_attribute", AttributeEntry::edit_attribute)
                .command("delete_attribute", AttributeEntry::delete_attribute)
                .command("copy_attribute", AttributeEntry::copy_attribute)
                .build(),
            attribute,
        }
    }

    pub fn attribute(&self) -> &Attribute {
        &self.attribute
    }

    fn edit_attribute(&mut self, cx: &mut NodeCx<'_, AppAction>) -> KeyOutcome {
        cx.emit(AppAction::console(format!(
            "edit-attribute {} {}",
            self.attribute.key, self.attribute.value
        )));
        KeyOutcome::Handled
    }

    fn delete_attribute(&mut self, cx: &mut NodeCx<'_, AppAction>) -> KeyOutcome {
        cx.emit(AppAction::console(format!(
            "delete-attribute {} {}",
            self.attribute.key, self.attribute.value
        )));
        KeyOutcome::Handled
    }

    fn copy_attribute(&mut self, cx: &mut NodeCx<'_, AppAction>) -> KeyOutcome {
        cx.emit(AppAction::CopyToClipboard(self.attribute.value.clone()));
        KeyOutcome::Handled
    }
}

impl Dispatchable for AttributeEntry {
    type Action = AppAction;

    fn router(&self) -> &KeypressRouter<Self> {
        &self.router
    }

    fn native_keypress(&mut self, key: KeyToken, _cx: &mut NodeCx<'_, AppAction>) -> KeyOutcome {
        KeyOutcome::Unhandled(key)
    }
}

pub struct GiftEntry {
    router: KeypressRouter<GiftEntry>,
    gift: Gift,
}

impl GiftEntry {
    pub fn new(gift: Gift) -> Self {
        Self {
            router: KeypressRouter::builder(contexts::GIFT_ENTRY)
                .command("rename_gift", GiftEntry::rename_gift)
                .command("delete_gift", GiftEntry::delete_gift)
                .command("mark_gifted", GiftEntry::mark_gifted)
                .build(),
            gift,
        }
    }

    pub fn gift(&self) -> &Gift {
        &self.gift
    }

    fn rename_gift(&mut self, cx: &mut NodeCx<'_, AppAction>) -> KeyOutcome {
        cx.emit(AppAction::console(format!("rename-gift {}", self.gift.name)));
        KeyOutcome::Handled
    }

    fn delete_gift(&mut self, cx: &mut NodeCx<'_, AppAction>) -> KeyOutcome {
        cx.emit(AppAction::console(format!("delete-gift {}", self.gift.name)));
        KeyOutcome::Handled
    }

    /// Toggles the gifted flag.
    fn mark_gifted(&mut self, cx: &mut NodeCx<'_, AppAction>) -> KeyOutcome {
        let command = if self.gift.gifted {
            "unmark-gifted"
        } else {
            "mark-gifted"
        };
        cx.emit(AppAction::RunConsoleCommand(format!("{} {}", command, self.gift.name)));
        KeyOutcome::Handled
    }
}

impl Dispatchable for GiftEntry {
    type Action = AppAction;

    fn router(&self) -> &KeypressRouter<Self> {
        &self.router
    }

    fn native_keypress(&mut self, key: KeyToken, cx: &mut NodeCx<'_, AppAction>) -> KeyOutcome {
        if key.is_enter() {
            return self.rename_gift(cx);
        }
        KeyOutcome::Unhandled(key)
    }
}

pub struct NoteEntry {
    router: KeypressRouter<NoteEntry>,
    note: Note,
}

impl NoteEntry {
    pub fn new(note: Note) -> Self {
        Self {
            router: KeypressRouter::builder(contexts::NOTE_ENTRY)
                .command("edit_note", NoteEntry::edit_note)
                .command("rename_note", NoteEntry::rename_note)
                .command("delete_note", NoteEntry::delete_note)
                .build(),
            note,
        }
    }

    pub fn note(&self) -> &Note {
        &self.note
    }

    fn edit_note(&mut self, cx: &mut NodeCx<'_, AppAction>) -> KeyOutcome {
        // The console is a single line.
        let content = self.note.content.lines().collect::<Vec<_>>().join(" ");
        cx.emit(AppAction::console(format!("edit-note {} {}", self.note.note_id, content)));
        KeyOutcome::Handled
    }

    fn rename_note(&mut self, cx: &mut NodeCx<'_, AppAction>) -> KeyOutcome {
        cx.emit(AppAction::console(format!("rename-note {}", self.note.note_id)));
        KeyOutcome::Handled
    }

    fn delete_note(&mut self, cx: &mut NodeCx<'_, AppAction>) -> KeyOutcome {
        cx.emit(AppAction::console(format!("delete-note {}", self.note.note_id)));
        KeyOutcome::Handled
    }
}

impl Dispatchable for NoteEntry {
    type Action = AppAction;

    fn router(&self) -> &KeypressRouter<Self> {
        &self.router
    }

    fn native_keypress(&mut self, key: KeyToken, cx: &mut NodeCx<'_, AppAction>) -> KeyOutcome {
        if key.is_enter() {
            return self.edit_note(cx);
        }
        KeyOutcome::Unhandled(key)
    }
}

/// A row of the details pane.
pub enum DetailEntry {
    Attribute(AttributeEntry),
    Gift(GiftEntry),
    Note(NoteEntry),
}

impl DetailEntry {
    pub fn keypress(&mut self, key: KeyToken, cx: &mut NodeCx<'_, AppAction>) -> KeyOutcome {
        match self {
            DetailEntry::Attribute(entry) => offer(entry, key, cx),
            DetailEntry::Gift(entry) => offer(entry, key, cx),
            DetailEntry::Note(entry) => offer(entry, key, cx),
        }
    }

    pub fn context(&self) -> &'static str {
        match self {
            DetailEntry::Attribute(entry) => entry.router().context(),
            DetailEntry::Gift(entry) => entry.router().context(),
            DetailEntry::Note(entry) => entry.router().context(),
        }
    }

    pub fn focused(&self) -> FocusedDetail {
        match self {
            DetailEntry::Attribute(entry) => FocusedDetail::Attribute(entry.attribute.clone()),
            DetailEntry::Gift(entry) => FocusedDetail::Gift(entry.gift.name.clone()),
            DetailEntry::Note(entry) => FocusedDetail::Note(entry.note.note_id.clone()),
        }
    }

    pub fn matches(&self, detail: &FocusedDetail) -> bool {
        match (self, detail) {
            (DetailEntry::Attribute(entry), FocusedDetail::Attribute(attribute)) => {
                &entry.attribute == attribute
            }
            (DetailEntry::Gift(entry), FocusedDetail::Gift(name)) => &entry.gift.name == name,
            (DetailEntry::Note(entry), FocusedDetail::Note(id)) => &entry.note.note_id == id,
            _ => false,
        }
    }
}
