//! File logging for the browser.
//!
//! The TUI owns the terminal, so events only ever go to a file. Screen
//! transitions and recreations are logged at `debug`; restore and save
//! failures of the selection at `warn`.

use std::path::{Path, PathBuf};

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable naming the log file path.
pub const LOG_PATH_ENV: &str = "PANESHOP_LOG";

/// Filter used when `RUST_LOG` is unset: this crate at `info`, dependencies
/// at `warn`.
const DEFAULT_FILTER: &str = "warn,paneshop=info";

/// Per-run log file next to `base`: `{base}.{timestamp}.{pid}`.
pub fn log_file_path(base: &Path, timestamp: u64, pid: u32) -> PathBuf {
    let mut name = base.as_os_str().to_owned();
    name.push(format!(".{}.{}", timestamp, pid));
    PathBuf::from(name)
}

/// Installs the file subscriber when `PANESHOP_LOG` is set; otherwise a
/// no-op and every `tracing` call is discarded.
pub fn init_tracing() {
    let Some(base) = std::env::var_os(LOG_PATH_ENV) else {
        return;
    };

    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let path = log_file_path(Path::new(&base), timestamp, std::process::id());

    let Ok(file) = std::fs::File::create(&path) else {
        eprintln!("Warning: Failed to create log file: {}", path.display());
        return;
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_timer(fmt::time::UtcTime::rfc_3339());

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();
    tracing::info!(path = %path.display(), "logging started");
}
