// src/gui/app.rs
use std::error::Error;

use eframe::egui;

use crate::{
    config::{
        consts::WINDOW_TITLE,
        options::{SeasonOptions, StatPage},
        state::AppState,
    },
    error::ScrapeError,
    scrape::SeasonTables,
};

use super::{components, dashboard::Dashboard};

/// Open the window over already-fetched tables. Blocks until it closes.
pub fn run(
    options: eframe::NativeOptions,
    state: AppState,
    tables: SeasonTables,
) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(move |_cc| Ok(Box::new(App::new(state, tables)))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,
    pub dashboard: Dashboard,
}

impl App {
    pub fn new(state: AppState, tables: SeasonTables) -> Self {
        let dashboard = Dashboard::new(tables);
        logf!(
            "Init: season={}, current={:?}, metrics={}",
            state.season.year,
            dashboard.current(),
            dashboard.visible_metrics().len()
        );
        Self { state, dashboard }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(self.dashboard.status());
                if let Some(notice) = self.dashboard.notice() {
                    ui.separator();
                    let color = ui.visuals().error_fg_color;
                    ui.colored_label(color, notice);
                }
            });
        });

        egui::SidePanel::left("categories")
            .resizable(false)
            .show(ctx, |ui| {
                components::category_panel::draw(ui, self);
            });

        egui::SidePanel::right("metrics")
            .resizable(false)
            .show(ctx, |ui| {
                components::metric_panel::draw(ui, &mut self.dashboard);
            });

        if self.state.gui.show_rows {
            egui::TopBottomPanel::bottom("charted_rows")
                .resizable(true)
                .default_height(220.0)
                .show(ctx, |ui| {
                    components::data_table::draw(ui, self.dashboard.chart());
                });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            components::chart_view::draw(ui, self.dashboard.chart());
        });
    }
}

/// Error window for a failed startup fetch. On Windows the GUI build has no
/// console, so this is the only place the failure can be read.
pub fn run_startup_error(options: eframe::NativeOptions, message: String) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(move |_cc| Ok(Box::new(StartupError { message }))),
    )?;
    Ok(())
}

pub fn startup_error_text(season: &SeasonOptions, err: &ScrapeError) -> String {
    let mut out = format!("Could not load the {} season.\n\n{}\n\nPages:", season.year, err);
    for page in StatPage::ALL {
        out.push_str("\n  ");
        out.push_str(&season.page_url(page));
    }
    out
}

struct StartupError {
    message: String,
}

impl eframe::App for StartupError {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Startup failed");
            ui.separator();
            ui.monospace(self.message.as_str());
            ui.add_space(12.0);
            if ui.button("Close").clicked() {
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }
        });
    }
}
