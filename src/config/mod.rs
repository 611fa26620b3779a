//! Application configuration.
//!
//! The configuration file is INI. Key bindings live in one section per
//! context:
//!
//! ```ini
//! [keybindings.global]
//! move_down = t
//! jump_to_first = gg
//!
//! [keybindings.contact_list]
//! search_contact = /
//!
//! [display]
//! nav_width = 30
//! ```
//!
//! A present file replaces the built-in bindings entirely. A missing file
//! falls back to [`default_bindings`](crate::input::default_bindings).

mod loader;

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::SystemError;
use crate::input::BindingTable;

pub use loader::{load, load_from_str, validate_sequence};

const APP_DIR: &str = "ctui";
const CONFIG_FILE: &str = "config.ini";

/// Where the active configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Defaults,
    File(PathBuf),
}

/// Layout options from the `[display]` section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Width of the contact list column.
    pub nav_width: u16,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { nav_width: 30 }
    }
}

/// Fully loaded configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bindings: BindingTable,
    pub display: DisplayConfig,
    pub source: ConfigSource,
}

impl AppConfig {
    /// Built-in bindings and default display settings.
    pub fn defaults() -> Self {
        Self {
            bindings: crate::input::default_bindings(),
            display: DisplayConfig::default(),
            source: ConfigSource::Defaults,
        }
    }

    pub fn with_display(mut self, display: DisplayConfig) -> Self {
        self.display = display;
        self
    }
}

/// `<config_dir>/ctui/config.ini`.
pub fn default_config_path() -> Result<PathBuf, SystemError> {
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
        .ok_or(SystemError::NoConfigDirectory)
}

/// The explicit path if given, otherwise the default location.
pub fn resolve_config_path(explicit: Option<&Path>) -> Result<PathBuf, SystemError> {
    match explicit {
        Some(path) => Ok(path.to_path_buf()),
        None => default_config_path(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_path_ends_with_app_file() {
        if let Ok(path) = default_config_path() {
            assert!(path.ends_with("ctui/config.ini"));
        }
    }

    #[test]
    fn test_explicit_path_wins() {
        let path = resolve_config_path(Some(Path::new("/tmp/custom.ini")));
        assert_eq!(path.ok(), Some(PathBuf::from("/tmp/custom.ini")));
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::defaults();
        assert_eq!(config.display.nav_width, 30);
        assert_eq!(config.source, ConfigSource::Defaults);
        assert!(!config.bindings.is_empty());

        let config = config.with_display(DisplayConfig { nav_width: 42 });
        assert_eq!(config.display.nav_width, 42);
    }
}
