//! Root of the widget tree: the two panes side by side.

use chrono::Local;

use super::action::AppAction;
use super::contact_details::ContactDetails;
use super::contact_list::ContactList;
use crate::input::{contexts, offer, Dispatchable, KeyOutcome, KeyToken, KeypressRouter, NodeCx};
use crate::models::NOTE_ID_FORMAT;

/// Which pane receives keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pane {
    #[default]
    List,
    Details,
}

pub struct ContactFrame {
    router: KeypressRouter<ContactFrame>,
    pub list: ContactList,
    pub details: ContactDetails,
    focus: Pane,
}

impl ContactFrame {
    pub fn new(list: ContactList, details: ContactDetails) -> Self {
        Self {
            router: KeypressRouter::builder(contexts::FRAME)
                .command("quit", ContactFrame::quit)
                .command("reload", ContactFrame::reload)
                .command("add_contact", ContactFrame::add_contact)
                .command("add_attribute", ContactFrame::add_attribute)
                .command("add_note", ContactFrame::add_note)
                .terminal()
                .build(),
            list,
            details,
            focus: Pane::List,
        }
    }

    pub fn focus(&self) -> Pane {
        self.focus
    }

    /// Moves focus to `pane`. The details pane only takes focus when it has
    /// rows.
    pub fn focus_pane(&mut self, pane: Pane) -> bool {
        if pane == Pane::Details && self.details.is_empty() {
            return false;
        }
        self.focus = pane;
        true
    }

    /// Falls back to the list when the details pane lost its rows.
    pub fn ensure_focus(&mut self) {
        if self.focus == Pane::Details && self.details.is_empty() {
            self.focus = Pane::List;
        }
    }

    fn quit(&mut self, cx: &mut NodeCx<'_, AppAction>) -> KeyOutcome {
        cx.emit(AppAction::Quit);
        KeyOutcome::Handled
    }

    fn reload(&mut self, cx: &mut NodeCx<'_, AppAction>) -> KeyOutcome {
        cx.emit(AppAction::Reload);
        KeyOutcome::Handled
    }

    fn add_contact(&mut self, cx: &mut NodeCx<'_, AppAction>) -> KeyOutcome {
        cx.emit(AppAction::console("add-contact "));
        KeyOutcome::Handled
    }

    fn add_attribute(&mut self, cx: &mut NodeCx<'_, AppAction>) -> KeyOutcome {
        cx.emit(AppAction::console("add-attribute "));
        KeyOutcome::Handled
    }

    /// Prefills today's date as the note id.
    fn add_note(&mut self, cx: &mut NodeCx<'_, AppAction>) -> KeyOutcome {
        let today = Local::now().date_naive().format(NOTE_ID_FORMAT);
        cx.emit(AppAction::console(format!("add-note {} ", today)));
        KeyOutcome::Handled
    }
}

impl Dispatchable for ContactFrame {
    type Action = AppAction;

    fn router(&self) -> &KeypressRouter<Self> {
        &self.router
    }

    fn native_keypress(&mut self, key: KeyToken, cx: &mut NodeCx<'_, AppAction>) -> KeyOutcome {
        let outcome = match self.focus {
            Pane::List => offer(&mut self.list, key, cx),
            Pane::Details => offer(&mut self.details, key, cx),
        };
        let key = match outcome {
            KeyOutcome::Handled => return KeyOutcome::Handled,
            KeyOutcome::Unhandled(key) => key,
        };

        let target = match (key.as_str(), self.focus) {
            ("right", Pane::List) => Pane::Details,
            ("left", Pane::Details) => Pane::List,
            _ => return KeyOutcome::Unhandled(key),
        };
        if self.focus_pane(target) {
            tracing::debug!("frame: focus {:?}", target);
            KeyOutcome::Handled
        } else {
            KeyOutcome::Unhandled(key)
        }
    }
}
