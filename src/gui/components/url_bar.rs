// src/gui/components/url_bar.rs
//
// Top panel: page URL, SCRAPE, destination folder, theme toggle.

use eframe::egui::{self, widgets::Spinner};

use crate::gui::{
    actions,
    app::{App, visuals_for},
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let mut scrape_clicked = false;
    let mut open_folder_clicked = false;

    ui.add_space(4.0);
    ui.horizontal(|ui| {
        ui.label("URL:");
        let url_w = (ui.available_width() - 140.0).max(120.0);
        let url_edit = ui.add_enabled(
            !app.running,
            egui::TextEdit::singleline(&mut app.url_text)
                .hint_text("https://example.com/gallery")
                .font(egui::TextStyle::Monospace)
                .desired_width(url_w),
        );
        if url_edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            scrape_clicked = true;
        }

        let red = egui::Color32::from_rgb(220, 30, 30);
        let black = egui::Color32::BLACK;

        let button_scrape = ui.add_enabled(
            !app.running,
            egui::Button::new(egui::RichText::new("SCRAPE").color(black).strong()).fill(red),
        );
        if button_scrape.clicked() {
            scrape_clicked = true;
        }

        if app.running {
            ui.add(Spinner::new().size(16.0));
        }
    });

    ui.horizontal(|ui| {
        ui.label("Save to:");
        if ui
            .add_enabled(
                !app.running,
                egui::TextEdit::singleline(&mut app.dest_text)
                    .font(egui::TextStyle::Monospace)
                    .desired_width(320.0),
            )
            .changed()
        {
            logd!("UI: dest_text changed → {}", app.dest_text);
        }

        if ui.button("📁").on_hover_text("Open destination folder").clicked() {
            open_folder_clicked = true;
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let dark = app.state.gui.dark_mode;
            let label = if dark { "☀ Light" } else { "🌙 Dark" };
            if ui.button(label).clicked() {
                app.state.gui.dark_mode = !dark;
                ui.ctx().set_visuals(visuals_for(!dark));
                logd!("UI: dark_mode → {}", !dark);
            }
        });
    });
    ui.add_space(4.0);

    // Handle actions after the closures release their borrows
    if open_folder_clicked {
        actions::open_folder(app);
    }
    if scrape_clicked && !app.running {
        actions::scrape(app, ui.ctx());
    }
}
