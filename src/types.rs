// src/types.rs
use std::path::{Path, PathBuf};

use url::Url;

use crate::core::naming;

/// One user-triggered run: which page, and where the images go.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeRequest {
    source_url: String,
    destination: PathBuf,
}

impl ScrapeRequest {
    pub fn new(source_url: impl Into<String>, destination: impl Into<PathBuf>) -> Self {
        Self {
            source_url: source_url.into(),
            destination: destination.into(),
        }
    }
    pub fn source_url(&self) -> &str { &self.source_url }
    pub fn destination(&self) -> &Path { &self.destination }
}

/// An image found on the page, already resolved against the page URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageReference {
    pub absolute_url: Url,
    pub suggested_filename: String,
}

impl ImageReference {
    pub fn new(absolute_url: Url) -> Self {
        let suggested_filename = naming::suggested_filename(&absolute_url);
        Self { absolute_url, suggested_filename }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DownloadOutcome {
    Success(PathBuf),
    Failure(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DownloadResult {
    pub reference: ImageReference,
    pub outcome: DownloadOutcome,
}

impl DownloadResult {
    pub fn is_success(&self) -> bool {
        matches!(self.outcome, DownloadOutcome::Success(_))
    }

    pub fn saved_path(&self) -> Option<&Path> {
        match &self.outcome {
            DownloadOutcome::Success(p) => Some(p),
            DownloadOutcome::Failure(_) => None,
        }
    }

    pub fn failure_reason(&self) -> Option<&str> {
        match &self.outcome {
            DownloadOutcome::Success(_) => None,
            DownloadOutcome::Failure(r) => Some(r),
        }
    }
}

/// Per-run aggregate handed back to the UI.
#[derive(Clone, Debug)]
pub struct RunSummary {
    pub source_url: String,
    pub destination: PathBuf,
    pub results: Vec<DownloadResult>,
}

impl RunSummary {
    #[inline]
    pub fn total(&self) -> usize { self.results.len() }

    #[inline]
    pub fn succeeded(&self) -> usize { self.results.iter().filter(|r| r.is_success()).count() }

    #[inline]
    pub fn failed(&self) -> usize { self.total() - self.succeeded() }

    pub fn failures(&self) -> impl Iterator<Item = &DownloadResult> {
        self.results.iter().filter(|r| !r.is_success())
    }

    /// "N of M images downloaded"
    pub fn headline(&self) -> String {
        format!("{} of {} images downloaded", self.succeeded(), self.total())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(url: &str, outcome: DownloadOutcome) -> DownloadResult {
        DownloadResult {
            reference: ImageReference::new(Url::parse(url).unwrap()),
            outcome,
        }
    }

    #[test]
    fn summary_counts() {
        let summary = RunSummary {
            source_url: s!("https://example.com/"),
            destination: PathBuf::from("out"),
            results: vec![
                result("https://example.com/a.png", DownloadOutcome::Success("out/a.png".into())),
                result("https://example.com/b.png", DownloadOutcome::Failure(s!("HTTP 404"))),
                result("https://example.com/c.png", DownloadOutcome::Success("out/c.png".into())),
            ],
        };
        assert_eq!(summary.total(), 3);
        assert_eq!(summary.succeeded(), 2);
        assert_eq!(summary.failed(), 1);
        assert_eq!(summary.headline(), "2 of 3 images downloaded");

        let failed: Vec<&str> = summary.failures().map(|r| r.reference.absolute_url.as_str()).collect();
        assert_eq!(failed, vec!["https://example.com/b.png"]);
        assert_eq!(summary.results[1].failure_reason(), Some("HTTP 404"));
        assert_eq!(summary.results[0].saved_path(), Some(Path::new("out/a.png")));
    }

    #[test]
    fn reference_takes_name_from_path() {
        let r = ImageReference::new(Url::parse("https://cdn.example.com/img/cat.jpg?w=200").unwrap());
        assert_eq!(r.suggested_filename, "cat.jpg");
    }
}
