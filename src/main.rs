use clap::Parser;
use color_eyre::Result;

use ctui::app::App;
use ctui::cli::{run_cli_command, Args};
use ctui::config::{self, resolve_config_path, AppConfig};
use ctui::error::ResultExt;
use ctui::logging;
use ctui::repository::ContactRepository;
use ctui::terminal::{setup_panic_hook, TerminalManager};

fn load_config(args: &Args) -> Result<AppConfig> {
    match resolve_config_path(args.config.as_deref()).log_failure("locate configuration") {
        Some(path) => Ok(config::load(&path)?),
        None => Ok(AppConfig::defaults()),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    color_eyre::install()?;

    // Runs without logs if the log file cannot be opened.
    logging::init().log_failure("initialise logging");

    // A malformed configuration file stops the program before the
    // terminal is touched.
    let config = load_config(&args)?;

    if let Some(result) = run_cli_command(args.command(), &config) {
        return result;
    }

    setup_panic_hook();

    let mut app = App::new(config, ContactRepository::sample());
    let mut manager = TerminalManager::new()?;
    let result = app.run(manager.terminal());
    manager.restore()?;

    Ok(result?)
}
