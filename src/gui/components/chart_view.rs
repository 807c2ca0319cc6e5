// src/gui/components/chart_view.rs
//
// Paints the horizontal bar chart. Highest value on top, names in a left
// gutter, rounded value just past the end of each bar. The whole area is
// repainted from the model every frame, so a new chart never overlaps the old.

use eframe::egui::{self, Align2, Color32, FontId, Pos2, Rect, Sense, Stroke};

use crate::chart::BarChart;

const TITLE_H: f32 = 32.0;
const NAME_GUTTER: f32 = 170.0;
const VALUE_GUTTER: f32 = 56.0;
const BAR_FILL: Color32 = Color32::from_rgb(31, 119, 180);

pub fn draw(ui: &mut egui::Ui, chart: Option<&BarChart>) {
    let Some(chart) = chart else {
        ui.centered_and_justified(|ui| {
            ui.label("Pick a metric on the right to draw a chart");
        });
        return;
    };

    let size = ui.available_size();
    let (response, painter) = ui.allocate_painter(size, Sense::hover());
    let rect = response.rect;
    let text_color = ui.visuals().text_color();

    painter.text(
        Pos2::new(rect.center().x, rect.top() + 4.0),
        Align2::CENTER_TOP,
        &chart.title,
        FontId::proportional(18.0),
        text_color,
    );

    if chart.is_empty() {
        painter.text(
            rect.center(),
            Align2::CENTER_CENTER,
            "No values to plot",
            FontId::proportional(14.0),
            text_color,
        );
        return;
    }

    let plot = Rect::from_min_max(
        Pos2::new(rect.left() + NAME_GUTTER, rect.top() + TITLE_H),
        Pos2::new(rect.right() - VALUE_GUTTER, rect.bottom() - 4.0),
    );
    if plot.width() <= 0.0 || plot.height() <= 0.0 {
        return;
    }

    let (lo, hi) = chart.value_range();
    let span = (hi - lo).max(f64::EPSILON);
    let x_of = |v: f64| plot.left() + (((v - lo) / span) as f32) * plot.width();
    let zero_x = x_of(0.0);

    let slot = plot.height() / chart.len() as f32;
    let name_font = FontId::proportional(12.0);
    let value_font = FontId::proportional(10.0);

    for (i, bar) in chart.bars.iter().enumerate() {
        let top = plot.top() + slot * i as f32;
        let mid = top + slot * 0.5;
        painter.text(
            Pos2::new(plot.left() - 6.0, mid),
            Align2::RIGHT_CENTER,
            &bar.label,
            name_font.clone(),
            text_color,
        );
        // blank cell: name only
        if bar.value.is_nan() {
            continue;
        }
        let end_x = x_of(bar.value);

        let bar_rect = Rect::from_min_max(
            Pos2::new(zero_x.min(end_x), top + slot * 0.15),
            Pos2::new(zero_x.max(end_x), top + slot * 0.85),
        );
        painter.rect_filled(bar_rect, 0.0, BAR_FILL);
        painter.text(
            Pos2::new(zero_x.max(end_x) + 4.0, mid),
            Align2::LEFT_CENTER,
            bar.value_text(),
            value_font.clone(),
            Color32::DARK_GRAY,
        );
    }

    painter.line_segment(
        [Pos2::new(zero_x, plot.top()), Pos2::new(zero_x, plot.bottom())],
        Stroke::new(1.0, text_color),
    );
}
