//! Errors raised while loading the configuration file.

use std::path::PathBuf;

use thiserror::Error;

/// A configuration file that cannot be turned into a binding table.
///
/// Every variant is fatal: the application does not start with a
/// half-loaded configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("cannot read config file '{}': {message}", path.display())]
    Unreadable { path: PathBuf, message: String },

    #[error("malformed section [{section}]: {message}")]
    MalformedSection { section: String, message: String },

    #[error("[keybindings.{context}] {command}: expected a key sequence string")]
    InvalidValue { context: String, command: String },

    #[error("[keybindings.{context}] {command}: empty key sequence")]
    EmptySequence { context: String, command: String },

    #[error("[keybindings.{context}] {command}: '{sequence}' contains a digit; digits are reserved for repeat counts")]
    DigitInSequence {
        context: String,
        command: String,
        sequence: String,
    },

    #[error("[display] {message}")]
    InvalidDisplay { message: String },
}

impl ConfigError {
    pub fn error_code(&self) -> &'static str {
        match self {
            ConfigError::Unreadable { .. } => "E_CFG_READ",
            ConfigError::MalformedSection { .. } => "E_CFG_SECTION",
            ConfigError::InvalidValue { .. } => "E_CFG_VALUE",
            ConfigError::EmptySequence { .. } => "E_CFG_EMPTY_SEQ",
            ConfigError::DigitInSequence { .. } => "E_CFG_DIGIT_SEQ",
            ConfigError::InvalidDisplay { .. } => "E_CFG_DISPLAY",
        }
    }
}
