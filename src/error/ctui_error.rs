//! Unified error type for the ctui application.

use std::fmt;

use super::category::ErrorCategory;
use super::command::CommandError;
use super::config::ConfigError;
use super::system::SystemError;
use super::ui::UiError;

/// Unified error type for the ctui application.
///
/// Wraps every domain error so that `main` and the app controller can
/// categorize, log and present them uniformly.
#[derive(Debug)]
pub enum CtuiError {
    /// Configuration file problems (fatal at startup).
    Config(ConfigError),

    /// Console command failures (shown in the console line).
    Command(CommandError),

    /// UI/terminal errors.
    Ui(UiError),

    /// System/filesystem errors.
    System(SystemError),
}

impl CtuiError {
    /// Get the category of this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            CtuiError::Config(_) => ErrorCategory::Configuration,
            CtuiError::Command(_) => ErrorCategory::User,
            CtuiError::Ui(err) => {
                if err.is_recoverable() {
                    ErrorCategory::User
                } else {
                    ErrorCategory::System
                }
            }
            CtuiError::System(_) => ErrorCategory::System,
        }
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            CtuiError::Config(err) => format!("Configuration error: {}", err),
            CtuiError::Command(err) => format!("Error: {}", err),
            CtuiError::Ui(err) => err.user_message(),
            CtuiError::System(err) => err.user_message(),
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            CtuiError::Config(err) => err.error_code(),
            CtuiError::Command(err) => err.error_code(),
            CtuiError::Ui(err) => err.error_code(),
            CtuiError::System(err) => err.error_code(),
        }
    }

    /// Get the recovery hint for this error.
    pub fn recovery_hint(&self) -> &'static str {
        self.category().recovery_hint()
    }

    pub fn is_recoverable(&self) -> bool {
        self.category().is_recoverable()
    }
}

impl fmt::Display for CtuiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CtuiError::Config(err) => write!(f, "{}", err),
            CtuiError::Command(err) => write!(f, "{}", err),
            CtuiError::Ui(err) => write!(f, "{}", err),
            CtuiError::System(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for CtuiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CtuiError::Config(err) => Some(err),
            CtuiError::Command(err) => Some(err),
            CtuiError::Ui(err) => Some(err),
            CtuiError::System(err) => Some(err),
        }
    }
}

impl From<ConfigError> for CtuiError {
    fn from(err: ConfigError) -> Self {
        CtuiError::Config(err)
    }
}

impl From<CommandError> for CtuiError {
    fn from(err: CommandError) -> Self {
        CtuiError::Command(err)
    }
}

impl From<UiError> for CtuiError {
    fn from(err: UiError) -> Self {
        CtuiError::Ui(err)
    }
}

impl From<SystemError> for CtuiError {
    fn from(err: SystemError) -> Self {
        CtuiError::System(err)
    }
}

impl From<std::io::Error> for CtuiError {
    fn from(err: std::io::Error) -> Self {
        use super::system::classify_io_error;
        CtuiError::System(classify_io_error(err, None, "I/O operation"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_config_error_category() {
        let err: CtuiError = ConfigError::EmptySequence {
            context: "global".into(),
            command: "quit".into(),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert!(!err.is_recoverable());
        assert!(err.user_message().starts_with("Configuration error:"));
    }

    #[test]
    fn test_command_error_is_recoverable() {
        let err: CtuiError = CommandError::NoContactSelected.into();
        assert_eq!(err.category(), ErrorCategory::User);
        assert!(err.is_recoverable());
        assert_eq!(err.user_message(), "Error: no contact selected");
    }

    #[test]
    fn test_ui_error_category_depends_on_recoverability() {
        let clip: CtuiError = UiError::ClipboardError {
            operation: "write".into(),
            message: "x".into(),
        }
        .into();
        assert_eq!(clip.category(), ErrorCategory::User);

        let term: CtuiError = UiError::TerminalInitFailed {
            message: "x".into(),
        }
        .into();
        assert_eq!(term.category(), ErrorCategory::System);
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "not found");
        let err: CtuiError = io_err.into();
        assert_eq!(err.category(), ErrorCategory::System);
        assert!(matches!(err, CtuiError::System(_)));
        assert!(err.source().is_some());
    }
}
