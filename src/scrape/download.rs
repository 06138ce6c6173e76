// src/scrape/download.rs
use std::path::{Path, PathBuf};

use crate::{
    core::{naming, net::Transport},
    error::ScrapeError,
    file,
    progress::Progress,
    types::{DownloadOutcome, DownloadResult, ImageReference},
};

/// Download every reference into `destination`, one after another.
///
/// The directory is checked/created first; if that fails nothing is
/// downloaded. After that, a failing image only marks its own result as
/// `Failure` and the loop moves on. Results come back in input order.
pub fn download_all(
    client: &dyn Transport,
    references: &[ImageReference],
    destination: &Path,
    mut progress: Option<&mut dyn Progress>,
) -> Result<Vec<DownloadResult>, ScrapeError> {
    file::ensure_directory(destination)?;

    logf!("Download: Begin count={} dir={}", references.len(), destination.display());
    if let Some(p) = progress.as_deref_mut() {
        p.begin(references.len());
    }

    let mut results = Vec::with_capacity(references.len());

    for (i, reference) in references.iter().enumerate() {
        let outcome = match download_one(client, reference, destination) {
            Ok(path) => {
                logd!("Download: [{}] {} → {}", i + 1, reference.absolute_url, path.display());
                DownloadOutcome::Success(path)
            }
            Err(reason) => {
                logw!("Download: [{}] {} failed: {reason}", i + 1, reference.absolute_url);
                DownloadOutcome::Failure(reason)
            }
        };

        let result = DownloadResult { reference: reference.clone(), outcome };
        if let Some(p) = progress.as_deref_mut() {
            p.item_done(i, &result);
        }
        results.push(result);
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    Ok(results)
}

fn download_one(
    client: &dyn Transport,
    reference: &ImageReference,
    destination: &Path,
) -> Result<PathBuf, String> {
    let url = &reference.absolute_url;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(format!("unsupported URL scheme '{}'", url.scheme()));
    }

    let payload = client.get_bytes(url).map_err(|e| e.to_string())?;

    let name = naming::ensure_extension(
        &reference.suggested_filename,
        payload.content_type.as_deref(),
        &payload.bytes,
    );

    file::write_unique(destination, &name, &payload.bytes)
        .map_err(|e| format!("write failed for {name}: {e}"))
}
