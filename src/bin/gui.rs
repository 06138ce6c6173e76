// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use eframe::egui::ViewportBuilder;
use img_scrape::{config::state::GuiState, gui, loge, logf};

fn main() {
    img_scrape::log::init();
    logf!("Start: img_scrape {}", env!("CARGO_PKG_VERSION"));

    let size = GuiState::default();
    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_title("Image Scraper")
            .with_inner_size([size.window_w, size.window_h])
            .with_min_inner_size([640.0, 420.0]),
        ..Default::default()
    };

    if let Err(e) = gui::run(options) {
        loge!("GUI failed: {e}");
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
