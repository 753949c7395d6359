//! File-based logging setup.
//!
//! The TUI owns the terminal, so logs go to `${SCRAWL_HOME}/logs/` instead of
//! stderr. Filtering is controlled with the `SCRAWL_LOG` env var (standard
//! `tracing_subscriber` filter syntax); default is `warn`.

use anyhow::Result;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::config::paths;

/// Initializes file logging and returns the flush guard.
///
/// The returned guard must be kept alive for the duration of the process;
/// dropping it flushes and stops the background writer.
///
/// # Errors
/// Returns an error if the log directory cannot be created.
pub fn init() -> Result<WorkerGuard> {
    let logs_dir = paths::logs_dir();
    std::fs::create_dir_all(&logs_dir)?;

    let appender = tracing_appender::rolling::daily(logs_dir, "scrawl.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_env("SCRAWL_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();

    Ok(guard)
}
