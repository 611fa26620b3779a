//! Unified error handling for ctui.
//!
//! - **Error Categories**: decide whether an error is fatal or shown in the console
//! - **Domain-specific Errors**: Config, Command, UI and System errors
//! - **Unified Error Type**: `CtuiError` consolidates all error types
//! - **Result Type Alias**: `CtuiResult<T>`
//!
//! | Category | Raised by | Fatal |
//! |----------|-----------|-------|
//! | Configuration | config loader | Yes (at startup) |
//! | User | console commands, clipboard | No |
//! | System | terminal, filesystem | Yes |
//!
//! The dispatch engine never returns errors: unknown key sequences are
//! silently abandoned.

mod category;
mod command;
mod config;
mod ctui_error;
mod result;
mod system;
mod ui;

pub use category::ErrorCategory;
pub use command::CommandError;
pub use config::ConfigError;
pub use ctui_error::CtuiError;
pub use result::{CtuiResult, ResultExt};
pub use system::{classify_io_error, SystemError};
pub use ui::UiError;
