//! The bottom line: command prompt, search, live filter and status text.
//!
//! While the console is open it receives every key directly; the dispatch
//! engine is not consulted.

use unicode_width::UnicodeWidthStr;

use crate::console::ConsoleCommand;
use crate::input::KeyToken;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleMode {
    /// `:` command line.
    Command,
    /// `/` contact search.
    Search,
    /// `:filter ` live contact filter.
    Filter,
}

impl ConsoleMode {
    pub fn prompt(&self) -> &'static str {
        match self {
            ConsoleMode::Command => ":",
            ConsoleMode::Search => "/",
            ConsoleMode::Filter => ":filter ",
        }
    }
}

/// What the app should do after a console keystroke.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleEvent {
    /// Keep editing.
    Editing,
    /// The filter text changed (filter mode only).
    FilterChanged(String),
    Submitted { mode: ConsoleMode, text: String },
    Cancelled(ConsoleMode),
}

#[derive(Debug, Clone, Default)]
pub struct Console {
    mode: Option<ConsoleMode>,
    input: String,
    message: Option<String>,
}

impl Console {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self, mode: ConsoleMode, prefill: &str) {
        self.mode = Some(mode);
        self.input = prefill.to_string();
        self.message = None;
    }

    pub fn close(&mut self) {
        self.mode = None;
        self.input.clear();
    }

    pub fn show_message(&mut self, message: impl Into<String>) {
        self.close();
        self.message = Some(message.into());
    }

    pub fn clear_message(&mut self) {
        self.message = None;
    }

    pub fn is_active(&self) -> bool {
        self.mode.is_some()
    }

    pub fn mode(&self) -> Option<ConsoleMode> {
        self.mode
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Prompt plus input, as rendered.
    pub fn line(&self) -> String {
        match self.mode {
            Some(mode) => format!("{}{}", mode.prompt(), self.input),
            None => self.message.clone().unwrap_or_default(),
        }
    }

    /// Terminal column of the text cursor while editing.
    pub fn cursor_column(&self) -> Option<u16> {
        self.mode.map(|mode| {
            let width = mode.prompt().width() + self.input.width();
            u16::try_from(width).unwrap_or(u16::MAX)
        })
    }

    pub fn handle_key(&mut self, key: &KeyToken) -> ConsoleEvent {
        let Some(mode) = self.mode else {
            return ConsoleEvent::Editing;
        };

        match key.as_str() {
            KeyToken::ESC => {
                self.close();
                return ConsoleEvent::Cancelled(mode);
            }
            KeyToken::ENTER => {
                let text = std::mem::take(&mut self.input);
                self.close();
                return ConsoleEvent::Submitted { mode, text };
            }
            "ctrl w" => self.delete_word(),
            "backspace" => {
                self.input.pop();
            }
            "tab" if mode == ConsoleMode::Command => self.complete(),
            _ => match key.as_char() {
                Some(c) => self.input.push(c),
                None => return ConsoleEvent::Editing,
            },
        }

        if mode == ConsoleMode::Filter {
            ConsoleEvent::FilterChanged(self.input.clone())
        } else {
            ConsoleEvent::Editing
        }
    }

    /// Cuts back to the last space, keeping the space.
    fn delete_word(&mut self) {
        match self.input.rfind(' ') {
            Some(index) => self.input.truncate(index + 1),
            None => self.input.clear(),
        }
    }

    /// Completes the command word when exactly one command matches it.
    fn complete(&mut self) {
        if self.input.contains(' ') {
            return;
        }
        if let Some(name) = ConsoleCommand::complete(&self.input) {
            self.input = format!("{} ", name);
        }
    }
}
