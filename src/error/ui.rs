//! UI-related error types.
//!
//! Errors from the terminal, rendering and the system clipboard.

use std::fmt;

/// UI-specific error variants.
#[derive(Debug, Clone)]
pub enum UiError {
    /// Terminal initialization failed.
    TerminalInitFailed { message: String },

    /// Terminal restore failed.
    TerminalRestoreFailed { message: String },

    /// Rendering error.
    RenderFailed { component: String, message: String },

    /// Reading a terminal event failed.
    InputError { message: String },

    /// Clipboard operation failed.
    ClipboardError { operation: String, message: String },
}

impl UiError {
    /// Check if this error is recoverable (UI can continue working).
    pub fn is_recoverable(&self) -> bool {
        matches!(self, UiError::ClipboardError { .. })
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            UiError::TerminalInitFailed { .. } => {
                "Failed to initialize the terminal. Please check your terminal settings.".to_string()
            }
            UiError::TerminalRestoreFailed { .. } => {
                "Failed to restore terminal. You may need to run `reset`.".to_string()
            }
            UiError::RenderFailed { component, .. } => {
                format!("Failed to render {}.", component)
            }
            UiError::InputError { .. } => {
                "An error occurred while reading keyboard input.".to_string()
            }
            UiError::ClipboardError { operation, .. } => {
                format!("Failed to {} clipboard.", operation)
            }
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            UiError::TerminalInitFailed { .. } => "E_UI_TERM_INIT",
            UiError::TerminalRestoreFailed { .. } => "E_UI_TERM_RESTORE",
            UiError::RenderFailed { .. } => "E_UI_RENDER",
            UiError::InputError { .. } => "E_UI_INPUT",
            UiError::ClipboardError { .. } => "E_UI_CLIPBOARD",
        }
    }
}

impl fmt::Display for UiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UiError::TerminalInitFailed { message } => {
                write!(f, "Terminal initialization failed: {}", message)
            }
            UiError::TerminalRestoreFailed { message } => {
                write!(f, "Terminal restore failed: {}", message)
            }
            UiError::RenderFailed { component, message } => {
                write!(f, "Render failed for {}: {}", component, message)
            }
            UiError::InputError { message } => write!(f, "Input error: {}", message),
            UiError::ClipboardError { operation, message } => {
                write!(f, "Clipboard {} failed: {}", operation, message)
            }
        }
    }
}

impl std::error::Error for UiError {}
