// src/gui/components/tabs.rs
use eframe::egui;

use crate::{config::state::Tab, gui::app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        let images_title = if app.found.is_empty() {
            s!("Images")
        } else {
            format!("Images ({})", app.found.len())
        };

        for (tab, title) in [(Tab::Images, images_title), (Tab::Log, s!("Log"))] {
            let selected = app.state.gui.current_tab == tab;
            if ui.selectable_label(selected, title).clicked() && !selected {
                logf!("UI: Tab switch {:?} → {:?}", app.state.gui.current_tab, tab);
                app.state.gui.current_tab = tab;
            }
        }
    });
}
