// src/scrape/mod.rs
mod download;
mod fetch;
mod run;

pub use download::download_all;
pub use fetch::{extract_references, fetch_images, parse_source_url};
pub use run::{describe_outcome, downloaded_count, run};
