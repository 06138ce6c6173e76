// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Submodules stay private; consumers only see actions::{copy_urls,export,open_folder,redownload,scrape}.

mod copy;         // src/gui/actions/copy.rs
mod export;       // src/gui/actions/export.rs
mod open_folder;  // src/gui/actions/open_folder.rs
mod redownload;   // src/gui/actions/redownload.rs
mod scrape;       // src/gui/actions/scrape.rs

pub use copy::copy_urls;
pub use export::export;
pub use open_folder::open_folder;
pub use redownload::redownload;
pub use scrape::scrape;
