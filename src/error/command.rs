//! Errors returned by console commands.

use thiserror::Error;

/// A console command that could not be carried out.
///
/// Shown in the console line as `Error: <message>`; never fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("not an editor command: {0}")]
    Unknown(String),

    #[error("{command}: missing argument {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error("no contact selected")]
    NoContactSelected,

    #[error("no {0} selected")]
    NoDetailSelected(&'static str),

    #[error("contact '{0}' not found")]
    ContactNotFound(String),

    #[error("contact '{0}' already exists")]
    ContactExists(String),

    #[error("{kind} '{name}' not found")]
    DetailNotFound { kind: &'static str, name: String },

    #[error("{kind} '{name}' already exists")]
    DetailExists { kind: &'static str, name: String },

    #[error("invalid gift name '{0}': only letters, digits, spaces and hyphens are allowed")]
    InvalidGiftName(String),

    #[error("invalid note id '{0}': expected a date as YYYYMMDD")]
    InvalidNoteId(String),
}

impl CommandError {
    pub fn error_code(&self) -> &'static str {
        match self {
            CommandError::Unknown(_) => "E_CMD_UNKNOWN",
            CommandError::MissingArgument { .. } => "E_CMD_ARG",
            CommandError::NoContactSelected | CommandError::NoDetailSelected(_) => {
                "E_CMD_NO_SELECTION"
            }
            CommandError::ContactNotFound(_) | CommandError::DetailNotFound { .. } => {
                "E_CMD_NOT_FOUND"
            }
            CommandError::ContactExists(_) | CommandError::DetailExists { .. } => "E_CMD_EXISTS",
            CommandError::InvalidGiftName(_) | CommandError::InvalidNoteId(_) => "E_CMD_INVALID",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            CommandError::Unknown("frobnicate".into()).to_string(),
            "not an editor command: frobnicate"
        );
        assert_eq!(
            CommandError::MissingArgument {
                command: "add-note",
                argument: "ID",
            }
            .to_string(),
            "add-note: missing argument ID"
        );
        assert_eq!(
            CommandError::DetailNotFound {
                kind: "gift",
                name: "Book".into()
            }
            .to_string(),
            "gift 'Book' not found"
        );
    }

    #[test]
    fn test_codes_group_variants() {
        assert_eq!(CommandError::NoContactSelected.error_code(), "E_CMD_NO_SELECTION");
        assert_eq!(
            CommandError::InvalidNoteId("x".into()).error_code(),
            CommandError::InvalidGiftName("y".into()).error_code()
        );
    }
}
