// src/gui/components/status_bar.rs
//
// Bottom panel: report export controls, progress bar, status line.

use eframe::egui;

use crate::{
    config::options::ExportFormat,
    gui::{actions, app::App},
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.add_space(4.0);
    ui.horizontal(|ui| {
        let export = &mut app.state.options.export;

        ui.label("Format:");
        let prev_fmt = export.format;
        ui.selectable_value(&mut export.format, ExportFormat::Csv, "CSV");
        ui.selectable_value(&mut export.format, ExportFormat::Tsv, "TSV");
        if export.format != prev_fmt {
            logf!("UI: Export format → {:?}", export.format);
        }

        let before_headers = export.include_headers;
        ui.checkbox(&mut export.include_headers, "Include headers");
        if export.include_headers != before_headers {
            logf!("UI: Include_headers → {}", export.include_headers);
        }

        ui.separator();

        if ui.add_enabled(!app.found.is_empty(), egui::Button::new("Copy URLs")).clicked() {
            actions::copy_urls(app, ui.ctx());
        }

        let can_export = !app.running && app.last_summary.is_some();
        if ui
            .add_enabled(can_export, egui::Button::new("Export report"))
            .on_disabled_hover_text("Available after a run finishes")
            .clicked()
        {
            actions::export(app);
        }
    });

    let bar = egui::ProgressBar::new(app.progress_fraction())
        .desired_height(14.0)
        .text(format!("{}/{}", app.done, app.total));
    ui.add(bar);

    ui.horizontal(|ui| {
        ui.label("Status:");
        ui.monospace(app.status.as_str());
    });
    ui.add_space(4.0);
}
