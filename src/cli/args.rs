//! Command-line argument parsing for ctui.

use std::path::PathBuf;

use clap::Parser;

/// The current version of ctui, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Parser)]
#[command(name = "ctui", version, about = "Vim-style terminal contact manager")]
pub struct Args {
    /// Configuration file (default: <config dir>/ctui/config.ini)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print the active key bindings in configuration file format and exit
    #[arg(long)]
    pub print_keybindings: bool,
}

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    PrintKeybindings,
    /// Run the TUI application (default)
    RunTui,
}

impl Args {
    pub fn command(&self) -> CliCommand {
        if self.print_keybindings {
            CliCommand::PrintKeybindings
        } else {
            CliCommand::RunTui
        }
    }
}

/// Parses `args` (program name first).
pub fn parse_args<I, T>(args: I) -> Result<Args, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Args::try_parse_from(args)
}
