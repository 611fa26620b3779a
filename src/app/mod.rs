//! Application state and logic for the TUI.
//!
//! [`App`] owns everything mutable: the dispatch engine, the contact
//! repository, the widget tree and the console. Keys go either to the
//! console (while it is open) or through the widget tree; widgets answer
//! with [`AppAction`]s that the app applies once the key has been fully
//! dispatched.

mod actions;
mod commands;

use std::path::PathBuf;

use crossterm::event::{self, Event};
use ratatui::{backend::Backend, Terminal};

use crate::components::{Console, ContactDetails, ContactFrame, ContactList};
use crate::config::{AppConfig, ConfigSource, DisplayConfig};
use crate::error::{CtuiResult, UiError};
use crate::input::{DispatchEngine, Dispatchable, KeyToken, NodeCx};
use crate::repository::ContactRepository;
use crate::ui;

pub struct App {
    pub engine: DispatchEngine,
    pub repository: ContactRepository,
    pub frame: ContactFrame,
    pub console: Console,
    /// Active contact filter, if any.
    pub filter: Option<String>,
    pub display: DisplayConfig,
    pub should_quit: bool,
    /// Configuration file re-read on `reload`.
    config_path: Option<PathBuf>,
    clipboard: Option<arboard::Clipboard>,
}

impl App {
    pub fn new(config: AppConfig, repository: ContactRepository) -> Self {
        let list = ContactList::new(repository.names());
        let mut details = ContactDetails::new();
        details.set_contact(list.focused_name().and_then(|name| repository.get(name)));

        let mut console = Console::new();
        if let Some(warning) = config.bindings.warnings().first() {
            console.show_message(format!("Warning: {}", warning));
        }

        let config_path = match config.source {
            ConfigSource::File(path) => Some(path),
            ConfigSource::Defaults => None,
        };

        Self {
            engine: DispatchEngine::new(config.bindings),
            repository,
            frame: ContactFrame::new(list, details),
            console,
            filter: None,
            display: config.display,
            should_quit: false,
            config_path,
            clipboard: None,
        }
    }

    /// Handles one keypress.
    pub fn handle_key(&mut self, key: KeyToken) {
        if self.console.is_active() {
            self.handle_console_key(&key);
            return;
        }

        let mut actions = Vec::new();
        let mut cx = NodeCx::new(&mut self.engine, &mut actions);
        let outcome = self.frame.keypress(key, &mut cx);
        tracing::trace!("key outcome: {:?}", outcome);

        if !actions.is_empty() {
            self.console.clear_message();
        }
        for action in actions {
            self.apply_action(action);
        }
        self.frame.ensure_focus();
    }

    /// Presses each key in turn. Used by tests and scripted input.
    pub fn press_keys<I, K>(&mut self, keys: I)
    where
        I: IntoIterator<Item = K>,
        K: Into<KeyToken>,
    {
        for key in keys {
            self.handle_key(key.into());
        }
    }

    /// Text of the bottom line: the console while editing, else the last
    /// message, else the focused note's date.
    pub fn status_line(&self) -> String {
        if self.console.is_active() || self.console.message().is_some() {
            return self.console.line();
        }
        self.meta_line().unwrap_or_default()
    }

    /// Date of the focused note while the details pane has focus.
    pub fn meta_line(&self) -> Option<String> {
        if self.frame.focus() != crate::components::Pane::Details {
            return None;
        }
        self.frame.details.focused_note().map(|note| note.display_date())
    }

    /// Rebuilds both panes from the repository.
    pub(crate) fn refresh(&mut self) {
        let names = self.repository.filtered_names(self.filter.as_deref().unwrap_or(""));
        self.frame.list.set_names(names);
        self.sync_details();
    }

    fn sync_details(&mut self) {
        let contact = self
            .frame
            .list
            .focused_name()
            .and_then(|name| self.repository.get(name));
        self.frame.details.set_contact(contact);
        self.frame.ensure_focus();
    }

    /// Runs the draw/read loop until the user quits.
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> CtuiResult<()> {
        tracing::info!("ctui started with {} contacts", self.repository.len());

        while !self.should_quit {
            terminal
                .draw(|f| ui::render(f, self))
                .map_err(|e| UiError::RenderFailed {
                    component: "frame".to_string(),
                    message: e.to_string(),
                })?;

            let event = event::read().map_err(|e| UiError::InputError {
                message: e.to_string(),
            })?;
            match event {
                Event::Key(key) => {
                    let Some(token) = KeyToken::from_event(&key) else {
                        continue;
                    };
                    // Always available, whatever the bindings say.
                    if token.as_str() == "ctrl c" {
                        self.should_quit = true;
                        continue;
                    }
                    self.handle_key(token);
                }
                // Redrawn on the next iteration.
                Event::Resize(_, _) => {}
                _ => {}
            }
        }

        tracing::info!("ctui exiting");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{ConsoleMode, Pane};

    fn app() -> App {
        App::new(AppConfig::defaults(), ContactRepository::sample())
    }

    #[test]
    fn test_new_focuses_first_contact() {
        let app = app();
        assert_eq!(app.frame.list.focused_name(), Some("Alice Smith"));
        assert_eq!(app.frame.details.contact_name(), Some("Alice Smith"));
        assert_eq!(app.frame.focus(), Pane::List);
        assert!(app.engine.state().is_idle());
    }

    #[test]
    fn test_move_down_updates_details() {
        let mut app = app();
        app.press_keys(["t"]);
        assert_eq!(app.frame.list.focused_name(), Some("Bob Jones"));
        assert_eq!(app.frame.details.contact_name(), Some("Bob Jones"));
    }

    #[test]
    fn test_quit_binding() {
        let mut app = app();
        app.press_keys(["q"]);
        assert!(app.should_quit);
    }

    #[test]
    fn test_console_swallows_keys_and_resets_engine() {
        let mut app = app();
        app.press_keys(["I"]);
        assert_eq!(app.console.mode(), Some(ConsoleMode::Command));
        assert_eq!(app.console.input(), "add-contact ");

        app.press_keys(["t", "esc"]);
        assert!(!app.console.is_active());
        assert_eq!(app.frame.list.position(), 0);
        assert!(app.engine.state().is_idle());
    }

    #[test]
    fn test_meta_line_shows_note_date() {
        let mut app = app();
        // Alice: 2 attributes, 2 gifts, 1 note.
        app.press_keys(["n", "G"]);
        assert_eq!(app.frame.focus(), Pane::Details);
        assert_eq!(app.meta_line().as_deref(), Some("17-03-2024"));
        assert_eq!(app.status_line(), "17-03-2024");

        app.press_keys(["g", "g"]);
        assert_eq!(app.meta_line(), None);
    }

    #[test]
    fn test_binding_warning_is_shown() {
        let mut config = AppConfig::defaults();
        config.bindings.register("global", "t", "move_up");
        let app = App::new(config, ContactRepository::sample());
        assert!(app.console.message().unwrap_or("").starts_with("Warning"));
    }
}
