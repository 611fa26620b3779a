//! Console submissions: commands, search and filter.

use super::App;
use crate::components::{ConsoleEvent, ConsoleMode, Pane};
use crate::console::{self, CommandOutcome, Focus, Selection};
use crate::input::KeyToken;

impl App {
    pub(crate) fn handle_console_key(&mut self, key: &KeyToken) {
        match self.console.handle_key(key) {
            ConsoleEvent::Editing => {}
            ConsoleEvent::FilterChanged(text) => self.set_filter(Some(text)),
            ConsoleEvent::Submitted { mode, text } => self.submit(mode, &text),
            ConsoleEvent::Cancelled(ConsoleMode::Filter) => self.set_filter(None),
            ConsoleEvent::Cancelled(_) => {}
        }

        if !self.console.is_active() {
            self.engine.reset();
        }
    }

    fn submit(&mut self, mode: ConsoleMode, text: &str) {
        match mode {
            ConsoleMode::Command => self.execute_command(text),
            ConsoleMode::Search => self.search(text),
            ConsoleMode::Filter => {
                self.set_filter(Some(text.to_string()));
                if self.filter.is_some() {
                    self.console.show_message(format!("f={}", text));
                }
            }
        }
    }

    /// Runs a console line against the focused contact and detail.
    pub(crate) fn execute_command(&mut self, line: &str) {
        let contact = self.frame.list.focused_name().map(str::to_string);
        let detail = match self.frame.focus() {
            Pane::Details => self.frame.details.focused(),
            Pane::List => None,
        };
        let selection = Selection {
            contact: contact.as_deref(),
            detail: detail.as_ref(),
        };

        match console::run(line, &mut self.repository, &selection) {
            Ok(outcome) => self.apply_outcome(outcome),
            Err(err) => self.show_error(err.into()),
        }
    }

    fn apply_outcome(&mut self, outcome: CommandOutcome) {
        if outcome.quit {
            self.should_quit = true;
            return;
        }

        self.refresh();
        match outcome.focus {
            Some(Focus::Contact(name)) => {
                if !self.frame.list.select(&name) && self.filter.is_some() {
                    // Hidden by the filter.
                    self.set_filter(None);
                    self.frame.list.select(&name);
                }
                self.sync_details();
            }
            Some(Focus::Detail(detail)) => {
                if self.frame.details.focus_detail(&detail) {
                    self.frame.focus_pane(Pane::Details);
                }
            }
            None => {}
        }

        if !outcome.message.is_empty() {
            self.console.show_message(outcome.message);
        }
    }

    fn search(&mut self, query: &str) {
        let Some(name) = self.repository.search(query).map(str::to_string) else {
            self.console.show_message("Contact not found");
            return;
        };
        if !self.frame.list.select(&name) {
            self.set_filter(None);
            self.frame.list.select(&name);
        }
        self.sync_details();
        self.frame.focus_pane(Pane::List);
    }
}
