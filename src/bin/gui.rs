// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use eframe::egui::ViewportBuilder;
use mlb_dash::{
    config::{
        consts::{STARTUP_ERROR_H, STARTUP_ERROR_W, WINDOW_TITLE},
        state::AppState,
    },
    gui, loge,
    progress::LogProgress,
    scrape,
};

fn main() {
    mlb_dash::log::init();

    let state = AppState::default();

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size([state.gui.window_w, state.gui.window_h]),
        ..Default::default()
    };

    // Everything is fetched up front; no dashboard without data.
    let mut progress = LogProgress::default();
    let tables = match scrape::collect_season(&state.season, Some(&mut progress)) {
        Ok(t) => t,
        Err(e) => {
            loge!("Startup: {}", e);
            let message = gui::startup_error_text(&state.season, &e);
            eprintln!("{}", message);
            let options = eframe::NativeOptions {
                viewport: ViewportBuilder::default()
                    .with_title(WINDOW_TITLE)
                    .with_inner_size([STARTUP_ERROR_W, STARTUP_ERROR_H]),
                ..Default::default()
            };
            if let Err(ui_err) = gui::run_startup_error(options, message) {
                loge!("Startup error window: {}", ui_err);
            }
            std::process::exit(1);
        }
    };

    if let Err(e) = gui::run(options, state, tables) {
        loge!("GUI failed: {}", e);
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
