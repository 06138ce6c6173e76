// src/gui/actions/scrape.rs
use eframe::egui;

use crate::{
    core::net::HttpClient,
    gui::{app::App, worker},
    scrape::parse_source_url,
    types::ScrapeRequest,
};

pub fn scrape(app: &mut App, ctx: &egui::Context) {
    if app.running {
        logd!("Scrape: Clicked while a run is active, ignored");
        return;
    }

    // Bad input never reaches the network.
    if let Err(e) = parse_source_url(&app.url_text) {
        logw!("Scrape: {e}");
        app.status(format!("Error: {e}. 0 images downloaded"));
        return;
    }

    app.state.options.output.set_dir(&app.dest_text);
    app.dest_text = app.state.options.output.dir.to_string_lossy().into_owned();

    let client = match HttpClient::new(&app.state.options.net) {
        Ok(c) => c,
        Err(e) => {
            loge!("Scrape: {e}");
            app.status(format!("Error: {e}. 0 images downloaded"));
            return;
        }
    };

    let request = ScrapeRequest::new(app.url_text.trim(), app.state.options.output.dir.clone());
    logf!("Scrape: Start url={} dir={}", request.source_url(), request.destination().display());

    app.reset_for_run();

    let repaint = ctx.clone();
    match worker::spawn(client, request, Box::new(move || repaint.request_repaint())) {
        Ok(rx) => {
            app.events = Some(rx);
            app.running = true;
            app.status("Starting…");
        }
        Err(e) => {
            loge!("Scrape: could not start worker: {e}");
            app.status(format!("Error: could not start worker: {e}. 0 images downloaded"));
        }
    }
}
