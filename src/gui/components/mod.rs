// src/gui/components/mod.rs
pub mod image_table;
pub mod log_panel;
pub mod status_bar;
pub mod tabs;
pub mod url_bar;
