// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod csv;
pub mod error;
pub mod file;
pub mod progress;
pub mod scrape;
pub mod types;

pub mod gui;

pub use error::{NetError, ScrapeError};
pub use types::{DownloadOutcome, DownloadResult, ImageReference, RunSummary, ScrapeRequest};
