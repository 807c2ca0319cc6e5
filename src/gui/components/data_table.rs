// src/gui/components/data_table.rs
//
// Bottom panel: the charted rows as a striped table (rank, name, value).
// Purely a view over the chart model.

use eframe::egui::{self, Align, Layout};
use egui_extras::{Column, TableBuilder};

use crate::chart::BarChart;

pub fn draw(ui: &mut egui::Ui, chart: Option<&BarChart>) {
    let Some(chart) = chart else {
        ui.label("Nothing charted yet");
        return;
    };

    TableBuilder::new(ui)
        .striped(true)
        .cell_layout(Layout::left_to_right(Align::Center))
        .column(Column::exact(36.0))
        .column(Column::initial(220.0).resizable(true).clip(true))
        .column(Column::remainder().at_least(60.0))
        .header(22.0, |mut header| {
            header.col(|ui| { ui.strong("#"); });
            header.col(|ui| { ui.strong("Name"); });
            header.col(|ui| { ui.strong(chart.title.as_str()); });
        })
        .body(|mut body| {
            for (i, bar) in chart.bars.iter().enumerate() {
                body.row(18.0, |mut row| {
                    row.col(|ui| { ui.label(format!("{}", i + 1)); });
                    row.col(|ui| { ui.label(bar.label.as_str()); });
                    row.col(|ui| { ui.monospace(bar.value_text()); });
                });
            }
        });
}
