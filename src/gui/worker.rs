// src/gui/worker.rs
//
// One background thread per scrape run. The UI thread owns the Receiver and
// drains it every frame; `Finished` is always the last event sent.

use std::{
    io,
    path::PathBuf,
    slice,
    sync::mpsc::{self, Receiver},
    thread,
};

use crate::{
    core::net::Transport,
    error::ScrapeError,
    scrape,
    types::{DownloadResult, ImageReference, RunSummary, ScrapeRequest},
};

use super::progress::{GuiProgress, Notify};

#[derive(Debug)]
pub enum WorkerEvent {
    Log(String),
    Found(Vec<ImageReference>),
    Begin(usize),
    ItemDone { index: usize, result: DownloadResult },
    Finished(Result<RunSummary, ScrapeError>),
    /// Only event of a single-image re-download; `index` is the table row.
    Redownloaded { index: usize, outcome: Result<DownloadResult, ScrapeError> },
}

pub fn spawn<T>(transport: T, request: ScrapeRequest, notify: Notify) -> io::Result<Receiver<WorkerEvent>>
where
    T: Transport + Send + 'static,
{
    let (tx, rx) = mpsc::channel();

    thread::Builder::new()
        .name(s!("scrape-worker"))
        .spawn(move || {
            let mut prog = GuiProgress::new(tx, notify);
            let outcome = scrape::run(&transport, &request, Some(&mut prog));
            prog.send(WorkerEvent::Finished(outcome));
        })?;

    Ok(rx)
}

/// Download one already-found image again into `destination`, off the UI thread.
pub fn spawn_redownload<T>(
    transport: T,
    index: usize,
    reference: ImageReference,
    destination: PathBuf,
    notify: Notify,
) -> io::Result<Receiver<WorkerEvent>>
where
    T: Transport + Send + 'static,
{
    let (tx, rx) = mpsc::channel();

    thread::Builder::new()
        .name(s!("redownload-worker"))
        .spawn(move || {
            let prog = GuiProgress::new(tx, notify);
            let outcome = scrape::download_all(&transport, slice::from_ref(&reference), &destination, None)
                .and_then(|mut results| {
                    results
                        .pop()
                        .ok_or_else(|| ScrapeError::Parse(s!("download produced no result")))
                });
            prog.send(WorkerEvent::Redownloaded { index, outcome });
        })?;

    Ok(rx)
}
