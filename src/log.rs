// src/log.rs
use std::fs::{self, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::fmt::time::Uptime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

fn filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

/// Append log lines to `path` (parent dirs created), timestamped with
/// elapsed time since start. `RUST_LOG` overrides `level` when set.
///
/// Returns `Ok(false)` if a global subscriber was already installed.
pub fn init_file(path: &Path, level: &str) -> io::Result<bool> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    let installed = tracing_subscriber::registry()
        .with(filter(level))
        .with(fmt::layer().with_timer(Uptime::default()).with_ansi(false).with_writer(Mutex::new(file)))
        .try_init()
        .is_ok();
    Ok(installed)
}

/// Log to stderr instead of a file.
pub fn init_stderr(level: &str) -> bool {
    tracing_subscriber::registry()
        .with(filter(level))
        .with(fmt::layer().with_timer(Uptime::default()).with_writer(io::stderr))
        .try_init()
        .is_ok()
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        ::tracing::info!($($arg)*)
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        ::tracing::debug!($($arg)*)
    };
}

/// Warn-level logging
#[macro_export]
macro_rules! logw {
    ($($arg:tt)*) => {
        ::tracing::warn!($($arg)*)
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        ::tracing::error!($($arg)*)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_init_is_a_no_op() {
        let dir = std::env::temp_dir().join(format!("nfldata-log-{}", std::process::id()));
        let path = dir.join("debug.log");
        let _ = init_file(&path, "debug").unwrap();
        assert!(path.exists());
        assert!(!init_stderr("info"));
        let _ = fs::remove_dir_all(dir);
    }
}
