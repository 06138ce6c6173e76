// src/log.rs
//
// tracing-backed logging. The short macros keep call sites terse:
//   logf!("Fetch: GET {url}");
// Output goes to .store/debug.log, or stderr if that can't be opened.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};
use std::time::Instant;

use tracing_subscriber::{EnvFilter, fmt::time::uptime};

use crate::config::consts::{DEFAULT_LOG_FILTER, LOG_FILE, STORE_DIR};

#[doc(hidden)]
pub use tracing;

static START: OnceLock<Instant> = OnceLock::new();

fn start() -> Instant {
    *START.get_or_init(Instant::now)
}

fn fmt_elapsed(ms: u128) -> String {
    let total_ms = ms as u64;
    let h = total_ms / 3_600_000;
    let m = (total_ms % 3_600_000) / 60_000;
    let s = (total_ms % 60_000) / 1_000;
    let ms = total_ms % 1_000;
    format!("{h:02}:{m:02}:{s:02}.{ms:03}")
}

/// Time since the process started logging, as `HH:MM:SS.mmm`.
pub fn elapsed_stamp() -> String {
    fmt_elapsed(start().elapsed().as_millis())
}

pub fn log_path() -> PathBuf {
    PathBuf::from(STORE_DIR).join(LOG_FILE)
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Install the global subscriber. Safe to call more than once; later calls are no-ops.
pub fn init() {
    start();

    let path = log_path();
    let file = path
        .parent()
        .map_or(Ok(()), fs::create_dir_all)
        .and_then(|_| OpenOptions::new().create(true).append(true).open(&path));

    let installed = match file {
        Ok(file) => tracing_subscriber::fmt()
            .with_env_filter(env_filter())
            .with_timer(uptime())
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .try_init()
            .is_ok(),
        Err(e) => {
            let ok = tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_timer(uptime())
                .with_writer(std::io::stderr)
                .try_init()
                .is_ok();
            if ok {
                tracing::warn!("Log: {} unavailable ({e}), using stderr", path.display());
            }
            ok
        }
    };

    if installed {
        tracing::info!("Log: initialized ({})", env!("CARGO_PKG_VERSION"));
    }
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        $crate::log::tracing::info!($($arg)*)
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        $crate::log::tracing::debug!($($arg)*)
    };
}

/// Warn-level logging
#[macro_export]
macro_rules! logw {
    ($($arg:tt)*) => {
        $crate::log::tracing::warn!($($arg)*)
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        $crate::log::tracing::error!($($arg)*)
    };
}
