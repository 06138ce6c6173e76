// src/config/state.rs
use super::options::AppOptions;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Images,
    Log,
}

#[derive(Clone, Debug)]
pub struct GuiState {
    pub window_w: f32,
    pub window_h: f32,
    pub dark_mode: bool,

    /// Active tab in the central panel
    pub current_tab: Tab,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            window_w: 980.0,
            window_h: 680.0,
            dark_mode: true,
            current_tab: Tab::Images,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}
