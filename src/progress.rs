// src/progress.rs
use crate::types::{DownloadResult, ImageReference};

/// Lightweight progress reporting used by a scrape run.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// The page was parsed; these are the images about to be downloaded.
    fn found(&mut self, _refs: &[ImageReference]) {}

    /// Called before the first download with the number of images.
    fn begin(&mut self, _total: usize) {}

    /// One image attempt finished (either way). `index` is its position in the page.
    fn item_done(&mut self, _index: usize, _result: &DownloadResult) {}

    /// Called after the last download attempt.
    fn finish(&mut self) {}
}
