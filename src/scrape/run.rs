// src/scrape/run.rs
use crate::{
    core::net::Transport,
    error::ScrapeError,
    progress::Progress,
    types::{RunSummary, ScrapeRequest},
};

use super::{download_all, fetch_images};

/// One scrape run: fetch the page, then download everything it references.
///
/// Fetch errors end the run before the destination folder is touched.
pub fn run(
    client: &dyn Transport,
    request: &ScrapeRequest,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary, ScrapeError> {
    logf!(
        "Run: Begin url={} dir={}",
        request.source_url(),
        request.destination().display()
    );

    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("Fetching {}", request.source_url().trim()));
    }

    let references = fetch_images(client, request.source_url())?;

    if let Some(p) = progress.as_deref_mut() {
        p.found(&references);
        p.log(&format!("Found {} image(s)", references.len()));
    }

    let results = download_all(client, &references, request.destination(), progress)?;

    let summary = RunSummary {
        source_url: s!(request.source_url().trim()),
        destination: request.destination().to_path_buf(),
        results,
    };
    logf!("Run: Done {}", summary.headline());
    Ok(summary)
}

/// Images actually written by a run; errors count as zero.
pub fn downloaded_count(outcome: &Result<RunSummary, ScrapeError>) -> usize {
    outcome.as_ref().map_or(0, RunSummary::succeeded)
}

/// Status line for the end of a run.
pub fn describe_outcome(outcome: &Result<RunSummary, ScrapeError>) -> String {
    match outcome {
        Ok(summary) if summary.failed() == 0 => summary.headline(),
        Ok(summary) => format!("{} ({} failed)", summary.headline(), summary.failed()),
        Err(e) => format!("Error: {e}. 0 images downloaded"),
    }
}
