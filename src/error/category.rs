//! Error category classification for unified error handling.
//!
//! Categories decide how an error reaches the user: configuration and
//! system problems stop the application at startup, user errors are shown
//! in the console line and the session continues.

use std::fmt;

/// High-level categorization of errors for handling decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// User action required (bad console input, unknown contact).
    /// Reported in the console; the application keeps running.
    User,

    /// System/OS errors (filesystem, permissions, terminal).
    System,

    /// Configuration errors (malformed config file, invalid key sequence).
    /// Fatal at load time.
    Configuration,
}

impl ErrorCategory {
    /// Returns true if the application can keep running after an error of
    /// this category.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, ErrorCategory::User)
    }

    /// Returns a short label for the category suitable for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::User => "user",
            ErrorCategory::System => "system",
            ErrorCategory::Configuration => "configuration",
        }
    }

    /// Returns a user-friendly description of the category.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCategory::User => "User action required",
            ErrorCategory::System => "System error",
            ErrorCategory::Configuration => "Configuration problem",
        }
    }

    /// Returns suggested recovery actions for this category.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            ErrorCategory::User => "Please check your input and try again",
            ErrorCategory::System => "Check file permissions and your terminal settings",
            ErrorCategory::Configuration => {
                "Check the [keybindings.*] sections of your config.ini"
            }
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_user_errors_are_recoverable() {
        assert!(ErrorCategory::User.is_recoverable());
        assert!(!ErrorCategory::System.is_recoverable());
        assert!(!ErrorCategory::Configuration.is_recoverable());
    }

    #[test]
    fn test_category_as_str_and_display() {
        assert_eq!(ErrorCategory::User.as_str(), "user");
        assert_eq!(ErrorCategory::Configuration.as_str(), "configuration");
        assert_eq!(format!("{}", ErrorCategory::System), "system");
    }

    #[test]
    fn test_category_hint() {
        assert!(ErrorCategory::Configuration.recovery_hint().contains("config.ini"));
        assert!(ErrorCategory::User.description().contains("User"));
    }
}
