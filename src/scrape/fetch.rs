// src/scrape/fetch.rs
use url::Url;

use crate::{
    core::{html, net::Transport},
    error::ScrapeError,
    types::ImageReference,
};

/// Accept only absolute http(s) URLs with a host. No network involved.
pub fn parse_source_url(input: &str) -> Result<Url, ScrapeError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ScrapeError::invalid_url(input, "empty"));
    }

    let url = Url::parse(trimmed).map_err(|e| ScrapeError::invalid_url(input, e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        other => {
            return Err(ScrapeError::invalid_url(
                input,
                format!("unsupported scheme '{other}' (use http or https)"),
            ));
        }
    }
    if url.host_str().is_none_or(str::is_empty) {
        return Err(ScrapeError::invalid_url(input, "missing host"));
    }
    Ok(url)
}

/// Resolve every `<img src>` of `doc` against `base`, in document order.
/// Sources that can't be joined (e.g. `http://[broken`) are skipped.
pub fn extract_references(base: &Url, doc: &str) -> Vec<ImageReference> {
    html::image_sources(doc)
        .into_iter()
        .filter_map(|src| match base.join(&src) {
            Ok(abs) => Some(ImageReference::new(abs)),
            Err(e) => {
                logd!("Fetch: skipping unresolvable src {src:?}: {e}");
                None
            }
        })
        .collect()
}

/// GET `source_url` and list its images.
///
/// Invalid input fails before any request is made. An empty body is a parse
/// error; any other body is parsed leniently (possibly yielding nothing).
pub fn fetch_images(
    client: &dyn Transport,
    source_url: &str,
) -> Result<Vec<ImageReference>, ScrapeError> {
    let base = parse_source_url(source_url)?;

    logf!("Fetch: GET {base}");
    let body = client.get_text(&base)?;

    if body.trim().is_empty() {
        return Err(ScrapeError::Parse(format!("empty response body from {base}")));
    }

    let refs = extract_references(&base, &body);
    logf!("Fetch: {} image(s) on {base} ({} bytes)", refs.len(), body.len());
    Ok(refs)
}
