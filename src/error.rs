// src/error.rs
use std::{io, path::PathBuf};

use thiserror::Error;

/// A single HTTP GET that didn't produce a usable body.
#[derive(Debug, Error)]
pub enum NetError {
    #[error("could not build HTTP client: {0}")]
    Client(String),

    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },

    #[error("request to {url} timed out")]
    Timeout { url: String },

    #[error("request to {url} failed: {reason}")]
    Transport { url: String, reason: String },
}

/// Run-level failures. Any of these aborts the whole scrape run;
/// per-image problems are recorded in `DownloadOutcome::Failure` instead.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("invalid URL {input:?}: {reason}")]
    InvalidUrl { input: String, reason: String },

    #[error("network error: {0}")]
    Network(#[from] NetError),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("cannot use folder {}: {source}", path.display())]
    Storage {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ScrapeError {
    pub(crate) fn invalid_url(input: &str, reason: impl Into<String>) -> Self {
        ScrapeError::InvalidUrl { input: s!(input), reason: reason.into() }
    }

    pub(crate) fn storage(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ScrapeError::Storage { path: path.into(), source }
    }
}
