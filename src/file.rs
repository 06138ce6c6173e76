// src/file.rs

use std::{
    fs::{self, OpenOptions},
    io::{self, ErrorKind, Write},
    path::{Path, PathBuf},
};

use crate::{
    config::{consts::MAX_COLLISION_SUFFIX, options::ExportOptions},
    core::naming::with_suffix,
    csv::to_export_string,
    error::ScrapeError,
    types::{DownloadOutcome, DownloadResult},
};

/// Make sure `dir` is a usable directory, creating it (and parents) if missing.
pub fn ensure_directory(dir: &Path) -> Result<(), ScrapeError> {
    if dir.exists() && !dir.is_dir() {
        return Err(ScrapeError::storage(
            dir,
            io::Error::new(ErrorKind::AlreadyExists, "path exists but is not a directory"),
        ));
    }
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|e| ScrapeError::storage(dir, e))?;
        logd!("File: created {}", dir.display());
    }
    Ok(())
}

/// Write `bytes` to `dir/name`, or to `name(1)`, `name(2)`, … if taken.
///
/// Files are opened create-new, so nothing already on disk (from this run or
/// an earlier one) is ever overwritten. A failed write removes its partial file.
pub fn write_unique(dir: &Path, name: &str, bytes: &[u8]) -> io::Result<PathBuf> {
    for n in 0..=MAX_COLLISION_SUFFIX {
        let path = dir.join(with_suffix(name, n));
        let mut file = match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(f) => f,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => continue,
            Err(e) => return Err(e),
        };
        if let Err(e) = file.write_all(bytes).and_then(|_| file.flush()) {
            drop(file);
            let _ = fs::remove_file(&path);
            return Err(e);
        }
        if n > 0 {
            logd!("File: {name} taken, saved as {}", path.display());
        }
        return Ok(path);
    }
    Err(io::Error::new(
        ErrorKind::AlreadyExists,
        format!("no free name for {name} after {MAX_COLLISION_SUFFIX} attempts"),
    ))
}

pub const REPORT_HEADERS: [&str; 5] = ["#", "URL", "Status", "File", "Reason"];

/// One row per download attempt, in page order.
pub fn report_rows(results: &[DownloadResult]) -> Vec<Vec<String>> {
    results
        .iter()
        .enumerate()
        .map(|(i, r)| {
            let (status, file, reason) = match &r.outcome {
                DownloadOutcome::Success(p) => ("ok", p.display().to_string(), s!()),
                DownloadOutcome::Failure(why) => ("failed", s!(), why.clone()),
            };
            vec![
                (i + 1).to_string(),
                s!(r.reference.absolute_url.as_str()),
                s!(status),
                file,
                reason,
            ]
        })
        .collect()
}

/// Write the run report into `dir` (never overwriting). Returns the path written.
pub fn write_report(
    export: &ExportOptions,
    dir: &Path,
    results: &[DownloadResult],
) -> Result<PathBuf, ScrapeError> {
    ensure_directory(dir)?;

    let headers: Vec<String> = REPORT_HEADERS.iter().map(|h| s!(*h)).collect();
    let contents = to_export_string(
        &headers,
        &report_rows(results),
        export.include_headers,
        export.format.delim(),
    );

    write_unique(dir, &export.report_filename(), contents.as_bytes())
        .map_err(|e| ScrapeError::storage(dir, e))
}
