//! Terminal lifetime management.
//!
//! [`TerminalManager`] puts the terminal into raw mode on the alternate
//! screen and restores it when dropped, on every exit path.
//!
//! ```no_run
//! use ctui::terminal::{setup_panic_hook, TerminalManager};
//!
//! fn main() -> ctui::error::CtuiResult<()> {
//!     setup_panic_hook();
//!     let mut manager = TerminalManager::new()?;
//!     manager.terminal().draw(|_frame| {}).ok();
//!     Ok(())
//! }
//! ```

mod panic;
mod setup;

pub use panic::setup_panic_hook;
pub use setup::{emergency_restore, enter_tui_mode, leave_tui_mode};

use crossterm::terminal::enable_raw_mode;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};

use crate::error::{CtuiResult, UiError};

/// Restores the terminal when dropped. Created only by [`TerminalManager`].
pub struct TerminalGuard {
    cleaned_up: bool,
}

impl TerminalGuard {
    fn new() -> Self {
        Self { cleaned_up: false }
    }

    /// Restores the terminal. Later calls do nothing.
    pub fn cleanup(&mut self) {
        if self.cleaned_up {
            return;
        }
        self.cleaned_up = true;
        leave_tui_mode(&mut io::stdout());
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        self.cleanup();
    }
}

/// Owns the ratatui terminal for the lifetime of the UI.
pub struct TerminalManager {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    guard: TerminalGuard,
}

impl TerminalManager {
    /// Enables raw mode, enters the alternate screen and clears it.
    pub fn new() -> CtuiResult<Self> {
        enable_raw_mode().map_err(init_failed)?;

        let mut stdout = io::stdout();
        // From here on the guard undoes raw mode if a later step fails.
        let guard = TerminalGuard::new();
        enter_tui_mode(&mut stdout).map_err(init_failed)?;

        let mut terminal = Terminal::new(CrosstermBackend::new(stdout)).map_err(init_failed)?;
        terminal.clear().map_err(init_failed)?;

        tracing::debug!("terminal initialised");
        Ok(Self { terminal, guard })
    }

    pub fn terminal(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }

    /// Restores the terminal before the manager is dropped.
    pub fn restore(&mut self) -> CtuiResult<()> {
        self.guard.cleanup();
        self.terminal.show_cursor().map_err(|e| UiError::TerminalRestoreFailed {
            message: e.to_string(),
        })?;
        Ok(())
    }
}

fn init_failed(err: io::Error) -> UiError {
    UiError::TerminalInitFailed {
        message: err.to_string(),
    }
}
