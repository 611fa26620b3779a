//! The vim-like `:` command line.
//!
//! Parsing and execution of data commands. The console widget itself lives
//! in [`crate::components::console`]; it hands submitted lines to
//! [`run`] together with the current [`Selection`].

mod command;

pub use command::{run, CommandOutcome, ConsoleCommand, Focus, FocusedDetail, Selection};
