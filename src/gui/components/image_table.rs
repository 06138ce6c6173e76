// src/gui/components/image_table.rs
//
// One row per image of the current run. Purely a view over App.found/outcomes.

use eframe::egui::{self, Align, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::{
    gui::{actions, app::App},
    types::DownloadOutcome,
};

const HEADERS: [&str; 5] = ["#", "URL", "Status", "File / Reason", ""];

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    if app.found.is_empty() {
        let hint = if app.running { "Fetching page…" } else { "No images yet. Enter a URL and press SCRAPE." };
        ui.weak(hint);
        return;
    }

    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;
        s.bar_width = 10.0;
    }

    let ok_color = egui::Color32::from_rgb(60, 170, 80);
    let err_color = ui.visuals().error_fg_color;
    let idle = !app.running;
    let mut redownload_row: Option<usize> = None;

    TableBuilder::new(ui)
        .id_salt("image_table")
        .striped(true)
        .auto_shrink([false, false])
        .min_scrolled_height(0.0)
        .column(Column::exact(40.0))
        .column(Column::initial(420.0).resizable(true).clip(true).at_least(80.0))
        .column(Column::initial(70.0).resizable(true).clip(true))
        .column(Column::remainder().clip(true))
        .column(Column::exact(28.0))
        .header(24.0, |mut header| {
            for h in HEADERS {
                header.col(|ui| {
                    ui.add(egui::Label::new(RichText::new(h).strong()).selectable(false));
                });
            }
        })
        .body(|body| {
            body.rows(20.0, app.found.len(), |mut row| {
                let i = row.index();
                let reference = &app.found[i];
                let outcome = app.outcomes.get(i).and_then(Option::as_ref);

                row.col(|ui| {
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        ui.label((i + 1).to_string());
                    });
                });
                row.col(|ui| {
                    ui.style_mut().wrap_mode = Some(TextWrapMode::Truncate);
                    ui.label(reference.absolute_url.as_str())
                        .on_hover_text(reference.absolute_url.as_str());
                });
                row.col(|ui| match outcome {
                    None => { ui.weak("Pending"); }
                    Some(DownloadOutcome::Success(_)) => { ui.colored_label(ok_color, "Saved"); }
                    Some(DownloadOutcome::Failure(_)) => { ui.colored_label(err_color, "Failed"); }
                });
                row.col(|ui| {
                    ui.style_mut().wrap_mode = Some(TextWrapMode::Truncate);
                    match outcome {
                        None => { ui.weak(reference.suggested_filename.as_str()); }
                        Some(DownloadOutcome::Success(path)) => {
                            let name = path
                                .file_name()
                                .map(|n| n.to_string_lossy().into_owned())
                                .unwrap_or_else(|| path.display().to_string());
                            ui.label(name).on_hover_text(path.display().to_string());
                        }
                        Some(DownloadOutcome::Failure(why)) => {
                            ui.label(why.as_str()).on_hover_text(why.as_str());
                        }
                    }
                });
                row.col(|ui| {
                    let finished = outcome.is_some();
                    if ui
                        .add_enabled(idle && finished, egui::Button::new("⟳").small())
                        .on_hover_text("Download this image again")
                        .clicked()
                    {
                        redownload_row = Some(i);
                    }
                });
            });
        });

    // Act after the table releases its borrow of App
    if let Some(i) = redownload_row {
        actions::redownload(app, ui.ctx(), i);
    }
}
