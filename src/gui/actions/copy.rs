// src/gui/actions/copy.rs
use eframe::egui;

use crate::gui::app::App;

/// Put every image URL of the current run on the clipboard, one per line.
pub fn copy_urls(app: &mut App, ui_ctx: &egui::Context) {
    if app.found.is_empty() {
        app.status("Nothing to copy");
        logd!("Copy: Clicked, but there's nothing to copy");
        return;
    }

    let txt = app
        .found
        .iter()
        .map(|r| r.absolute_url.as_str())
        .collect::<Vec<_>>()
        .join("\n");

    logf!("Copy: urls={}", app.found.len());
    ui_ctx.copy_text(txt);
    app.status(format!("Copied {} URL(s) to clipboard", app.found.len()));
}
