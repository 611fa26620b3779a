//! tracing subscriber setup.
//!
//! stdout belongs to the TUI, so events go to
//! `<data_local_dir>/ctui/ctui.log`. The level comes from `CTUI_LOG`
//! (`EnvFilter` syntax) and defaults to `info`.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::error::{classify_io_error, SystemError};

pub const LOG_ENV: &str = "CTUI_LOG";
const LOG_FILE: &str = "ctui.log";

/// `<data_local_dir>/ctui/ctui.log`.
pub fn default_log_path() -> Result<PathBuf, SystemError> {
    dirs::data_local_dir()
        .map(|dir| dir.join("ctui").join(LOG_FILE))
        .ok_or(SystemError::NoDataDirectory)
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Installs the global subscriber writing to `path`.
///
/// Fails if the file cannot be opened or a subscriber is already set.
/// Callers treat failure as "run without logs".
pub fn init_at(path: &Path) -> Result<(), SystemError> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).map_err(|e| SystemError::DirectoryCreationFailed {
            path: dir.to_path_buf(),
            message: e.to_string(),
        })?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| classify_io_error(e, Some(path.to_path_buf()), "open log file"))?;

    let file_layer = fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .with_filter(env_filter());

    tracing_subscriber::registry()
        .with(file_layer)
        .try_init()
        .map_err(|e| SystemError::IoError {
            operation: "install log subscriber".to_string(),
            path: None,
            message: e.to_string(),
        })?;

    tracing::debug!("logging to {}", path.display());
    Ok(())
}

/// Installs the subscriber at the default location.
pub fn init() -> Result<PathBuf, SystemError> {
    let path = default_log_path()?;
    init_at(&path)?;
    Ok(path)
}
