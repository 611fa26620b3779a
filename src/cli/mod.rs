//! CLI module for ctui.
//!
//! Flags are handled before the terminal is touched:
//!
//! ```ignore
//! let args = ctui::cli::Args::parse();
//! if let Some(result) = run_cli_command(args.command(), &config) {
//!     return result;
//! }
//! // No CLI command, continue to TUI
//! ```

pub mod args;

pub use args::{parse_args, Args, CliCommand, VERSION};

use color_eyre::Result;

use crate::config::AppConfig;
use crate::input::keybindings::render_ini;

/// Run a CLI command if applicable.
///
/// * `None` - If the command is `RunTui` (no CLI action needed)
/// * `Some(result)` - If a CLI command was executed
pub fn run_cli_command(command: CliCommand, config: &AppConfig) -> Option<Result<()>> {
    match command {
        CliCommand::PrintKeybindings => {
            print!("{}", render_ini(&config.bindings));
            Some(Ok(()))
        }
        CliCommand::RunTui => None,
    }
}
