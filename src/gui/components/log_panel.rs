// src/gui/components/log_panel.rs
use eframe::egui;

use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    if app.log_lines.is_empty() {
        ui.weak("Nothing logged yet.");
        return;
    }

    egui::ScrollArea::vertical()
        .id_salt("log_scroll")
        .auto_shrink([false, false])
        .stick_to_bottom(true)
        .show(ui, |ui| {
            for line in &app.log_lines {
                let text = egui::RichText::new(line).monospace();
                let text = if line.contains("[ERROR]") {
                    text.color(ui.visuals().error_fg_color)
                } else if line.contains("[WARN]") {
                    text.color(ui.visuals().warn_fg_color)
                } else {
                    text
                };
                ui.label(text);
            }
        });
}
