// src/gui/progress.rs
use std::sync::mpsc::Sender;

use crate::{
    progress::Progress,
    types::{DownloadResult, ImageReference},
};

use super::worker::WorkerEvent;

/// Wakes the UI after an event was queued (egui: `ctx.request_repaint()`).
pub type Notify = Box<dyn Fn() + Send>;

/// Progress sink living on the worker thread; forwards everything to the UI
/// thread as `WorkerEvent`s. Never touches UI state directly.
pub struct GuiProgress {
    tx: Sender<WorkerEvent>,
    notify: Notify,
    done: usize,
    total: usize,
}

impl GuiProgress {
    pub fn new(tx: Sender<WorkerEvent>, notify: Notify) -> Self {
        Self { tx, notify, done: 0, total: 0 }
    }

    pub(super) fn send(&self, event: WorkerEvent) {
        // Receiver gone means the window closed; nothing left to tell.
        if self.tx.send(event).is_ok() {
            (self.notify)();
        }
    }
}

impl Progress for GuiProgress {
    fn log(&mut self, msg: &str) {
        self.send(WorkerEvent::Log(s!(msg)));
    }
    fn found(&mut self, refs: &[ImageReference]) {
        self.send(WorkerEvent::Found(refs.to_vec()));
    }
    fn begin(&mut self, total: usize) {
        self.total = total;
        self.send(WorkerEvent::Begin(total));
    }
    fn item_done(&mut self, index: usize, result: &DownloadResult) {
        self.done += 1;
        self.send(WorkerEvent::ItemDone { index, result: result.clone() });
    }
    fn finish(&mut self) {
        // Finished follows right behind and owns the status line.
        logd!("Worker: downloads finished ({}/{})", self.done, self.total);
    }
}
