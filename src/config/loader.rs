//! INI loading via the `config` crate.

use std::path::Path;

use ::config::{Config, File, FileFormat, Map, Value, ValueKind};

use super::{AppConfig, ConfigSource, DisplayConfig};
use crate::error::ConfigError;
use crate::input::BindingTable;

const KEYBINDINGS: &str = "keybindings";
const DISPLAY: &str = "display";

/// Loads the configuration at `path`.
///
/// A missing file yields the built-in defaults. A file that exists but
/// cannot be parsed, or that binds an invalid key sequence, is an error.
pub fn load(path: &Path) -> Result<AppConfig, ConfigError> {
    if !path.exists() {
        tracing::info!(
            "No config file at {}, using default keybindings",
            path.display()
        );
        return Ok(AppConfig::defaults());
    }

    let config = Config::builder()
        .add_source(File::from(path).format(FileFormat::Ini).required(true))
        .build()
        .map_err(|e| ConfigError::Unreadable {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    let mut loaded = from_config(&config)?;
    loaded.source = ConfigSource::File(path.to_path_buf());
    tracing::info!(
        "Loaded {} keybindings from {}",
        loaded.bindings.len(),
        path.display()
    );
    Ok(loaded)
}

/// Parses INI text. Used for inline configuration and tests.
pub fn load_from_str(text: &str) -> Result<AppConfig, ConfigError> {
    let config = Config::builder()
        .add_source(File::from_str(text, FileFormat::Ini))
        .build()
        .map_err(|e| ConfigError::MalformedSection {
            section: String::from("<inline>"),
            message: e.to_string(),
        })?;
    from_config(&config)
}

fn from_config(config: &Config) -> Result<AppConfig, ConfigError> {
    let bindings = match config.get_table(KEYBINDINGS) {
        Ok(contexts) => parse_keybindings(contexts)?,
        Err(::config::ConfigError::NotFound(_)) => {
            tracing::warn!("Config file has no [keybindings.*] sections; no keys are bound");
            BindingTable::new()
        }
        Err(e) => {
            return Err(ConfigError::MalformedSection {
                section: KEYBINDINGS.to_string(),
                message: e.to_string(),
            })
        }
    };

    let display = match config.get::<DisplayConfig>(DISPLAY) {
        Ok(display) => display,
        Err(::config::ConfigError::NotFound(_)) => DisplayConfig::default(),
        Err(e) => {
            return Err(ConfigError::InvalidDisplay {
                message: e.to_string(),
            })
        }
    };
    if display.nav_width == 0 {
        return Err(ConfigError::InvalidDisplay {
            message: "nav_width must be greater than zero".to_string(),
        });
    }

    Ok(AppConfig {
        bindings,
        display,
        source: ConfigSource::Defaults,
    })
}

fn parse_keybindings(contexts: Map<String, Value>) -> Result<BindingTable, ConfigError> {
    let mut table = BindingTable::new();

    for (context, entries) in contexts {
        let entries = match entries.kind {
            ValueKind::Table(entries) => entries,
            _ => {
                return Err(ConfigError::MalformedSection {
                    section: format!("{}.{}", KEYBINDINGS, context),
                    message: "entries belong in [keybindings.<context>] sections".to_string(),
                })
            }
        };

        for (command, value) in entries {
            let sequence = match value.kind {
                ValueKind::String(sequence) => sequence,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        context: context.clone(),
                        command,
                    })
                }
            };
            validate_sequence(&context, &command, &sequence)?;
            table.register(context.as_str(), sequence.as_str(), command.as_str());
        }
    }

    for warning in table.warnings() {
        tracing::warn!("config: {}", warning);
    }
    Ok(table)
}

/// Rejects sequences the engine could never match: empty ones, and ones
/// containing digits (the accumulator consumes digits as repeat counts).
pub fn validate_sequence(context: &str, command: &str, sequence: &str) -> Result<(), ConfigError> {
    if sequence.trim().is_empty() {
        return Err(ConfigError::EmptySequence {
            context: context.to_string(),
            command: command.to_string(),
        });
    }
    if sequence.chars().any(|c| c.is_ascii_digit()) {
        return Err(ConfigError::DigitInSequence {
            context: context.to_string(),
            command: command.to_string(),
            sequence: sequence.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::GLOBAL_CONTEXT;

    #[test]
    fn test_sections_become_contexts() {
        let config = load_from_str(
            "[keybindings.global]\nmove_down = j\njump_to_first = gg\n\n\
             [keybindings.contact_list]\nsearch_contact = /\n",
        )
        .unwrap();

        let table = &config.bindings;
        assert_eq!(table.len(), 3);
        assert_eq!(
            table.lookup("j", &[GLOBAL_CONTEXT]).map(String::as_str),
            Some("move_down")
        );
        assert_eq!(
            table.lookup("/", &["contact_list"]).map(String::as_str),
            Some("search_contact")
        );
        assert!(table.is_prefix("g"));
    }

    #[test]
    fn test_file_replaces_defaults() {
        let config = load_from_str("[keybindings.global]\nquit = Q\n").unwrap();
        assert_eq!(config.bindings.len(), 1);
        assert_eq!(config.bindings.lookup("t", &[GLOBAL_CONTEXT]), None);
    }

    #[test]
    fn test_named_key_sequence_is_kept_verbatim() {
        let config = load_from_str("[keybindings.global]\nreload = ctrl r\n").unwrap();
        assert_eq!(
            config.bindings.lookup("ctrl r", &[GLOBAL_CONTEXT]).map(String::as_str),
            Some("reload")
        );
    }

    #[test]
    fn test_digit_is_rejected() {
        let err = load_from_str("[keybindings.global]\nmove_down = 2t\n").unwrap_err();
        assert!(matches!(err, ConfigError::DigitInSequence { .. }));
    }

    #[test]
    fn test_empty_is_rejected() {
        let err = load_from_str("[keybindings.global]\nquit =\n").unwrap_err();
        assert!(matches!(err, ConfigError::EmptySequence { .. }));
    }

    #[test]
    fn test_display_section() {
        let config = load_from_str("[display]\nnav_width = 44\n").unwrap();
        assert_eq!(config.display.nav_width, 44);
        assert!(config.bindings.is_empty());

        let err = load_from_str("[display]\nnav_width = 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidDisplay { .. }));
    }

    #[test]
    fn test_unrelated_sections_are_ignored() {
        let config = load_from_str(
            "[editor]\neditor = vim\n\n[paths]\ncontacts = ~/c\n\n[keybindings.global]\nquit = q\n",
        )
        .unwrap();
        assert_eq!(config.bindings.len(), 1);
        assert_eq!(config.display, DisplayConfig::default());
    }

    #[test]
    fn test_validate_sequence() {
        assert!(validate_sequence("global", "quit", "q").is_ok());
        assert!(validate_sequence("global", "quit", "page down").is_ok());
        assert!(validate_sequence("global", "quit", " ").is_err());
        assert!(validate_sequence("global", "quit", "f5").is_err());
    }
}
