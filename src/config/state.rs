// src/config/state.rs
use super::consts::{WINDOW_H, WINDOW_W};
use super::options::SeasonOptions;

#[derive(Clone, Debug)]
pub struct GuiState {
    pub window_w: f32,
    pub window_h: f32,

    /// Bottom panel listing the charted rows
    pub show_rows: bool,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            window_w: WINDOW_W,
            window_h: WINDOW_H,
            show_rows: false,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub season: SeasonOptions,
    pub gui: GuiState,
}
