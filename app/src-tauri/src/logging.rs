//! Logging setup
//!
//! Logs go to `<data_local_dir>/com.mascot.app/logs/mascot.log`, rotated by
//! size. `MASCOT_LOG_DIR` overrides the directory and `RUST_LOG` the filter.
//! Falls back to stderr when the log directory can't be created.

use std::path::PathBuf;

use mascot_core::APP_IDENTIFIER;
use rolling_file::{BasicRollingFileAppender, RollingConditionBasic};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::EnvFilter;

const LOG_FILE_NAME: &str = "mascot.log";
const MAX_LOG_SIZE: u64 = 5 * 1024 * 1024;
const MAX_LOG_FILES: usize = 3;

/// Directory for log files, honoring `MASCOT_LOG_DIR`.
pub fn log_dir() -> Option<PathBuf> {
    if let Some(dir) = std::env::var_os("MASCOT_LOG_DIR") {
        return Some(PathBuf::from(dir));
    }
    dirs::data_local_dir().map(|p| p.join(APP_IDENTIFIER).join("logs"))
}

/// Initialize the global subscriber. The returned guard must be kept alive
/// for as long as logs should be written.
pub fn init_logging() -> Option<WorkerGuard> {
    let filter = EnvFilter::builder()
        .with_default_directive(tracing::Level::INFO.into())
        .from_env_lossy();

    let appender = log_dir().and_then(|dir| {
        std::fs::create_dir_all(&dir).ok()?;
        BasicRollingFileAppender::new(
            dir.join(LOG_FILE_NAME),
            RollingConditionBasic::new().max_size(MAX_LOG_SIZE),
            MAX_LOG_FILES,
        )
        .ok()
    });

    if let Some(appender) = appender {
        let (writer, guard) = tracing_appender::non_blocking(appender);
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_ansi(false)
            .with_writer(writer)
            .init();
        return Some(guard);
    }

    // Fallback to stderr
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
    None
}
