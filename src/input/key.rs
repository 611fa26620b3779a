//! Key tokens.
//!
//! A [`KeyToken`] names one physical keypress the way the binding
//! configuration spells it: printable characters are themselves (`"a"`,
//! `"G"`, `"/"`), everything else gets a lowercase name (`"enter"`,
//! `"esc"`, `"page down"`), and modifiers are written as a prefix
//! separated by a space (`"ctrl w"`, `"meta x"`).

use std::fmt;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// One physical keypress.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyToken(String);

impl KeyToken {
    pub const ESC: &'static str = "esc";
    pub const ENTER: &'static str = "enter";

    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_esc(&self) -> bool {
        self.0 == Self::ESC
    }

    pub fn is_enter(&self) -> bool {
        self.0 == Self::ENTER
    }

    /// Returns the value of a single decimal digit token.
    pub fn digit(&self) -> Option<u32> {
        let mut chars = self.0.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => c.to_digit(10),
            _ => None,
        }
    }

    /// Returns the character of a printable single-character token.
    pub fn as_char(&self) -> Option<char> {
        let mut chars = self.0.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if !c.is_control() => Some(c),
            _ => None,
        }
    }

    /// Converts a terminal key event into a token.
    ///
    /// Returns `None` for release/repeat events and for keys that have no
    /// name in the binding vocabulary (media keys, lone modifiers).
    pub fn from_event(event: &KeyEvent) -> Option<Self> {
        if event.kind == KeyEventKind::Release {
            return None;
        }

        let ctrl = event.modifiers.contains(KeyModifiers::CONTROL);
        let alt = event.modifiers.contains(KeyModifiers::ALT);

        let base = match event.code {
            KeyCode::Char(c) => {
                if ctrl {
                    return Some(Self(format!("ctrl {}", c.to_ascii_lowercase())));
                }
                if alt {
                    return Some(Self(format!("meta {}", c)));
                }
                return Some(Self(c.to_string()));
            }
            KeyCode::Enter => "enter".to_string(),
            KeyCode::Esc => "esc".to_string(),
            KeyCode::Backspace => "backspace".to_string(),
            KeyCode::Tab => "tab".to_string(),
            KeyCode::BackTab => return Some(Self::new("shift tab")),
            KeyCode::Up => "up".to_string(),
            KeyCode::Down => "down".to_string(),
            KeyCode::Left => "left".to_string(),
            KeyCode::Right => "right".to_string(),
            KeyCode::Home => "home".to_string(),
            KeyCode::End => "end".to_string(),
            KeyCode::PageUp => "page up".to_string(),
            KeyCode::PageDown => "page down".to_string(),
            KeyCode::Delete => "delete".to_string(),
            KeyCode::Insert => "insert".to_string(),
            KeyCode::F(n) => format!("f{}", n),
            _ => return None,
        };

        let token = if ctrl {
            format!("ctrl {}", base)
        } else if alt {
            format!("meta {}", base)
        } else if event.modifiers.contains(KeyModifiers::SHIFT) {
            format!("shift {}", base)
        } else {
            base
        };

        Some(Self(token))
    }
}

impl fmt::Display for KeyToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for KeyToken {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<char> for KeyToken {
    fn from(c: char) -> Self {
        Self(c.to_string())
    }
}
