// src/gui/components/metric_panel.rs
//
// Right panel: the current table's visible metric buttons.

use eframe::egui;

use crate::gui::dashboard::Dashboard;

pub fn draw(ui: &mut egui::Ui, dashboard: &mut Dashboard) {
    ui.heading("Metrics");
    ui.separator();

    let metrics = dashboard.visible_metrics();
    if metrics.is_empty() {
        ui.label("No metrics for this table");
        return;
    }

    let active = dashboard.last_metric().map(str::to_owned);
    let mut clicked: Option<String> = None;

    egui::ScrollArea::vertical()
        .id_salt("metric_buttons_scroll")
        .show(ui, |ui| {
            for m in &metrics {
                let selected = active.as_deref() == Some(m.as_str());
                if ui.selectable_label(selected, m.as_str()).clicked() {
                    clicked = Some(m.clone());
                }
            }
        });

    if let Some(m) = clicked {
        dashboard.select_metric(&m);
    }
}
