use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::config::{LogSettings, default_log_dir};

pub const LOG_FILE: &str = "looptape.log";

pub fn log_dir(settings: &LogSettings) -> Option<PathBuf> {
    settings.dir.clone().or_else(default_log_dir)
}

/// Install a file-backed subscriber. The terminal belongs to the TUI, so
/// nothing is ever written to stdout/stderr once this is up.
///
/// The returned guard flushes the writer on drop and must outlive the app.
pub fn init(settings: &LogSettings) -> Option<WorkerGuard> {
    let dir = log_dir(settings)?;
    if let Err(e) = std::fs::create_dir_all(&dir) {
        eprintln!("looptape: cannot create log dir {}: {e}", dir.display());
        return None;
    }

    let appender = tracing_appender::rolling::never(&dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&settings.level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .with_thread_names(true)
        .try_init()
        .ok()?;

    Some(guard)
}
