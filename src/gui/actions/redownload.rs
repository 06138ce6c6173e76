// src/gui/actions/redownload.rs
use eframe::egui;

use crate::{
    core::net::HttpClient,
    gui::{app::App, worker},
};

/// Fetch row `index` of the current run again into the destination folder.
pub fn redownload(app: &mut App, ctx: &egui::Context, index: usize) {
    if app.running {
        logd!("Redownload: Clicked while a run is active, ignored");
        return;
    }
    let Some(reference) = app.found.get(index).cloned() else {
        logw!("Redownload: no image at row {index}");
        return;
    };

    // The folder the run saved into wins over whatever was typed since.
    let destination = match app.last_summary.as_ref() {
        Some(summary) => summary.destination.clone(),
        None => {
            app.state.options.output.set_dir(&app.dest_text);
            app.state.options.output.dir.clone()
        }
    };

    let client = match HttpClient::new(&app.state.options.net) {
        Ok(c) => c,
        Err(e) => {
            loge!("Redownload: {e}");
            app.status(format!("Error: {e}"));
            return;
        }
    };

    logf!("Redownload: [{}] {} → {}", index + 1, reference.absolute_url, destination.display());
    let repaint = ctx.clone();
    match worker::spawn_redownload(client, index, reference, destination, Box::new(move || repaint.request_repaint())) {
        Ok(rx) => {
            app.events = Some(rx);
            app.running = true;
            if let Some(slot) = app.outcomes.get_mut(index) {
                *slot = None;
            }
            app.status(format!("Downloading image {} again…", index + 1));
        }
        Err(e) => {
            loge!("Redownload: could not start worker: {e}");
            app.status(format!("Error: could not start worker: {e}"));
        }
    }
}
