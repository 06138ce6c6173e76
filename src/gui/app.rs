// src/gui/app.rs
use std::{
    error::Error,
    sync::mpsc::{Receiver, TryRecvError},
    time::Duration,
};

use eframe::egui;

use crate::{
    config::state::{AppState, Tab},
    scrape::describe_outcome,
    types::{DownloadOutcome, ImageReference, RunSummary},
};

use super::{components, worker::WorkerEvent};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Image Scraper",
        options,
        Box::new(|cc| {
            let state = AppState::default();
            cc.egui_ctx.set_visuals(visuals_for(state.gui.dark_mode));
            Ok(Box::new(App::new(state)))
        }),
    )?;
    Ok(())
}

pub fn visuals_for(dark: bool) -> egui::Visuals {
    if dark { egui::Visuals::dark() } else { egui::Visuals::light() }
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // text fields
    pub url_text: String,
    pub dest_text: String,

    // status/progress (the worker only ever talks through `events`)
    pub status: String,
    pub running: bool,
    pub events: Option<Receiver<WorkerEvent>>,
    pub done: usize,
    pub total: usize,

    // current run, index-aligned: outcomes[i] belongs to found[i]
    pub found: Vec<ImageReference>,
    pub outcomes: Vec<Option<DownloadOutcome>>,
    pub last_summary: Option<RunSummary>,

    pub log_lines: Vec<String>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let dest_text = state.options.output.dir.to_string_lossy().into_owned();
        logf!("Init: dest={dest_text}");
        Self {
            state,
            url_text: s!(),
            dest_text,
            status: s!("Idle"),
            running: false,
            events: None,
            done: 0,
            total: 0,
            found: Vec::new(),
            outcomes: Vec::new(),
            last_summary: None,
            log_lines: Vec::new(),
        }
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn status<T: Into<String>>(&mut self, msg: T) {
        self.status = msg.into();
    }

    pub fn push_log<T: AsRef<str>>(&mut self, msg: T) {
        self.log_lines.push(format!("[{}] {}", crate::log::elapsed_stamp(), msg.as_ref()));
    }

    #[inline]
    pub fn progress_fraction(&self) -> f32 {
        if self.total == 0 { 0.0 } else { self.done as f32 / self.total as f32 }
    }

    /// Clear everything left from the previous run.
    pub fn reset_for_run(&mut self) {
        self.found.clear();
        self.outcomes.clear();
        self.last_summary = None;
        self.log_lines.clear();
        self.done = 0;
        self.total = 0;
    }

    /// Drain whatever the worker queued since the last frame.
    pub fn poll_worker(&mut self) {
        let Some(rx) = self.events.as_ref() else { return };

        let mut queued = Vec::new();
        let mut disconnected = false;
        loop {
            match rx.try_recv() {
                Ok(ev) => queued.push(ev),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    disconnected = true;
                    break;
                }
            }
        }

        for ev in queued {
            self.apply(ev);
        }

        if disconnected && self.running {
            loge!("Worker: channel closed before the run finished");
            self.running = false;
            self.events = None;
            self.status("Error: scrape worker stopped unexpectedly");
            self.push_log("[ERROR] scrape worker stopped unexpectedly");
        }
    }

    pub fn apply(&mut self, event: WorkerEvent) {
        match event {
            WorkerEvent::Log(msg) => {
                self.status(msg.clone());
                self.push_log(msg);
            }
            WorkerEvent::Found(refs) => {
                self.outcomes = vec![None; refs.len()];
                self.found = refs;
                for r in &self.found {
                    self.log_lines.push(format!("    IMG: {}", r.absolute_url));
                }
            }
            WorkerEvent::Begin(total) => {
                self.total = total;
                self.done = 0;
            }
            WorkerEvent::ItemDone { index, result } => {
                self.done += 1;
                let line = match &result.outcome {
                    DownloadOutcome::Success(p) => format!("Saved {} → {}", result.reference.absolute_url, p.display()),
                    DownloadOutcome::Failure(why) => format!("[WARN] Failed {}: {why}", result.reference.absolute_url),
                };
                if let Some(slot) = self.outcomes.get_mut(index) {
                    *slot = Some(result.outcome);
                }
                self.status(format!("Downloading ({}/{})", self.done, self.total));
                self.push_log(line);
            }
            WorkerEvent::Finished(outcome) => {
                self.running = false;
                self.events = None;

                let line = describe_outcome(&outcome);
                match &outcome {
                    Ok(summary) => logf!("Scrape: OK {}", summary.headline()),
                    Err(e) => loge!("Scrape: Error {e}"),
                }
                self.push_log(format!("[DONE] {line}"));
                self.status(line);
                self.last_summary = outcome.ok();
            }
            WorkerEvent::Redownloaded { index, outcome } => {
                self.running = false;
                self.events = None;

                let (line, status) = match outcome {
                    Ok(result) => {
                        let url = result.reference.absolute_url.to_string();
                        let msg = match &result.outcome {
                            DownloadOutcome::Success(p) => format!("Saved {url} → {}", p.display()),
                            DownloadOutcome::Failure(why) => format!("[WARN] Failed {url}: {why}"),
                        };
                        let status = match &result.outcome {
                            DownloadOutcome::Success(p) => format!("Downloaded again: {}", p.display()),
                            DownloadOutcome::Failure(why) => format!("Download failed: {why}"),
                        };
                        if let Some(slot) = self.outcomes.get_mut(index) {
                            *slot = Some(result.outcome.clone());
                        }
                        if let Some(row) = self.last_summary.as_mut().and_then(|s| s.results.get_mut(index)) {
                            *row = result;
                        }
                        (msg, status)
                    }
                    Err(e) => {
                        loge!("Redownload: Error {e}");
                        (format!("[ERROR] {e}"), format!("Error: {e}"))
                    }
                };
                self.push_log(line);
                self.status(status);
            }
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_worker();

        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            components::url_bar::draw(ui, self);
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            components::status_bar::draw(ui, self);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::tabs::draw(ui, self);

            ui.separator();

            match self.state.gui.current_tab {
                Tab::Images => components::image_table::draw(ui, self),
                Tab::Log => components::log_panel::draw(ui, self),
            }
        });

        // Events wake us via request_repaint; this is only a backstop.
        if self.running {
            ctx.request_repaint_after(Duration::from_millis(250));
        }
    }
}
