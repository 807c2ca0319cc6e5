// src/gui/components/category_panel.rs
//
// Left panel: one button per table plus the charted-rows toggle.
// Clicking the current table again is allowed and re-shows its buttons.

use eframe::egui;

use crate::config::options::Category;
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Tables");
    ui.separator();

    let current = app.dashboard.current();
    for category in Category::ALL {
        let button = egui::Button::new(category.label())
            .selected(category == current)
            .min_size(egui::vec2(ui.available_width(), 32.0));
        if ui.add(button).clicked() {
            app.dashboard.switch_table(category);
        }
        ui.add_space(6.0);
    }

    ui.separator();
    ui.checkbox(&mut app.state.gui.show_rows, "Show charted rows");

    let table = app.dashboard.current_table();
    ui.small(format!("{} players · {} columns", table.nrows(), table.ncols()));
}
