//! Applying widget side effects.

use super::App;
use crate::components::{AppAction, ConsoleMode};
use crate::config;
use crate::error::{CtuiError, UiError};

impl App {
    pub(crate) fn apply_action(&mut self, action: AppAction) {
        tracing::debug!("action: {:?}", action);
        match action {
            AppAction::Quit => self.should_quit = true,
            AppAction::Reload => self.reload(),
            AppAction::OpenConsole { prefill } => self.console.open(ConsoleMode::Command, &prefill),
            AppAction::OpenSearch => self.console.open(ConsoleMode::Search, ""),
            AppAction::OpenFilter => {
                let current = self.filter.clone().unwrap_or_default();
                self.console.open(ConsoleMode::Filter, &current);
            }
            AppAction::ClearFilter => {
                if self.filter.is_some() {
                    self.set_filter(None);
                    self.console.show_message("Filter cleared.");
                }
            }
            AppAction::SelectContact(name) => {
                let contact = self.repository.get(&name);
                self.frame.details.set_contact(contact);
            }
            AppAction::CopyToClipboard(text) => match self.copy_to_clipboard(&text) {
                Ok(()) => self.console.show_message(format!("Copied: {}", text)),
                Err(err) => self.show_error(err.into()),
            },
            AppAction::RunConsoleCommand(line) => self.execute_command(&line),
        }
    }

    /// Replaces the filter and rebuilds the list.
    pub(crate) fn set_filter(&mut self, filter: Option<String>) {
        self.filter = filter.filter(|text| !text.is_empty());
        self.refresh();
    }

    pub(crate) fn show_error(&mut self, err: CtuiError) {
        tracing::warn!("[{}] {}", err.error_code(), err);
        self.console.show_message(err.user_message());
    }

    /// Re-reads the bindings from the configuration file, if there is one,
    /// and rebuilds the panes.
    fn reload(&mut self) {
        if let Some(path) = self.config_path.clone() {
            match config::load(&path) {
                Ok(loaded) => {
                    self.engine = crate::input::DispatchEngine::new(loaded.bindings);
                    self.display = loaded.display;
                }
                Err(err) => {
                    self.show_error(err.into());
                    return;
                }
            }
        }
        self.refresh();
        self.console.show_message("Reloaded.");
    }

    fn copy_to_clipboard(&mut self, text: &str) -> Result<(), UiError> {
        let failed = |operation: &str, err: arboard::Error| UiError::ClipboardError {
            operation: operation.to_string(),
            message: err.to_string(),
        };

        if self.clipboard.is_none() {
            self.clipboard = Some(arboard::Clipboard::new().map_err(|e| failed("open", e))?);
        }
        match self.clipboard.as_mut() {
            Some(clipboard) => clipboard.set_text(text.to_string()).map_err(|e| failed("copy", e)),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::app::App;
    use crate::components::{AppAction, ConsoleMode};
    use crate::config::AppConfig;
    use crate::repository::ContactRepository;

    fn app() -> App {
        App::new(AppConfig::defaults(), ContactRepository::sample())
    }

    #[test]
    fn test_open_filter_prefills_current_filter() {
        let mut app = app();
        app.set_filter(Some("smi".into()));
        app.apply_action(AppAction::OpenFilter);
        assert_eq!(app.console.mode(), Some(ConsoleMode::Filter));
        assert_eq!(app.console.input(), "smi");
    }

    #[test]
    fn test_clear_filter_restores_all_contacts() {
        let mut app = app();
        app.set_filter(Some("bob".into()));
        assert_eq!(app.frame.list.len(), 1);
        app.apply_action(AppAction::ClearFilter);
        assert_eq!(app.filter, None);
        assert_eq!(app.frame.list.len(), app.repository.len());
        assert_eq!(app.console.message(), Some("Filter cleared."));
    }

    #[test]
    fn test_select_contact_shows_details() {
        let mut app = app();
        app.apply_action(AppAction::SelectContact("Carla Müller".into()));
        assert_eq!(app.frame.details.contact_name(), Some("Carla Müller"));
    }

    #[test]
    fn test_reload_without_file() {
        let mut app = app();
        app.apply_action(AppAction::Reload);
        assert_eq!(app.console.message(), Some("Reloaded."));
    }

    #[test]
    fn test_run_console_command_action() {
        let mut app = app();
        app.apply_action(AppAction::RunConsoleCommand("add-contact Eve".into()));
        assert!(app.repository.contains("Eve"));
        assert_eq!(app.frame.list.focused_name(), Some("Eve"));
    }
}
