// src/config/consts.rs

// Net
pub const USER_AGENT: &str = concat!(
    "Mozilla/5.0 (compatible; img_scrape/",
    env!("CARGO_PKG_VERSION"),
    ")"
);
pub const PAGE_TIMEOUT_SECS: u64 = 10;
pub const DOWNLOAD_TIMEOUT_SECS: u64 = 30;

// Output
pub const DEFAULT_OUT_DIR: &str = "scraped_images";
pub const FALLBACK_STEM: &str = "image";
pub const MAX_FILENAME_BYTES: usize = 200; // leaves room for "(N)" under NAME_MAX
pub const MAX_COLLISION_SUFFIX: usize = 9_999;

// Export
pub const REPORT_STEM: &str = "scrape_report";

// Logging
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";
pub const DEFAULT_LOG_FILTER: &str = "info,img_scrape=debug";
