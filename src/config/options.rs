// src/config/options.rs
use std::path::PathBuf;
use std::time::Duration;

use super::consts::*;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppOptions {
    pub net: NetOptions,
    pub output: OutputOptions,
    pub export: ExportOptions,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NetOptions {
    pub user_agent: String,
    /// Applies to the page GET and to connection setup.
    pub page_timeout: Duration,
    /// Applies to each image GET.
    pub download_timeout: Duration,
}

impl Default for NetOptions {
    fn default() -> Self {
        Self {
            user_agent: s!(USER_AGENT),
            page_timeout: Duration::from_secs(PAGE_TIMEOUT_SECS),
            download_timeout: Duration::from_secs(DOWNLOAD_TIMEOUT_SECS),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputOptions {
    pub dir: PathBuf,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self { dir: PathBuf::from(DEFAULT_OUT_DIR) }
    }
}

impl OutputOptions {
    /// Parse GUI text into a directory. Blank falls back to the default folder.
    pub fn set_dir(&mut self, text: &str) {
        let t = text.trim();
        self.dir = if t.is_empty() {
            PathBuf::from(DEFAULT_OUT_DIR)
        } else {
            PathBuf::from(t)
        };
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> char {
        match self { ExportFormat::Csv => ',', ExportFormat::Tsv => '\t' }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub include_headers: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            include_headers: true,
        }
    }
}

impl ExportOptions {
    pub fn report_filename(&self) -> String {
        format!("{REPORT_STEM}.{}", self.format.ext())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_dir_falls_back_to_default() {
        let mut out = OutputOptions { dir: PathBuf::from("elsewhere") };
        out.set_dir("   ");
        assert_eq!(out.dir, PathBuf::from(DEFAULT_OUT_DIR));
        out.set_dir(" pics/cats ");
        assert_eq!(out.dir, PathBuf::from("pics/cats"));
    }

    #[test]
    fn report_name_follows_format() {
        let mut ex = ExportOptions::default();
        assert_eq!(ex.report_filename(), "scrape_report.csv");
        ex.format = ExportFormat::Tsv;
        assert_eq!(ex.report_filename(), "scrape_report.tsv");
    }
}
