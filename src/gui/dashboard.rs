// src/gui/dashboard.rs
//
// Dashboard state: which table is current, which metric buttons exist and
// are visible, and the chart on screen. No egui types in here; the
// components read this and call `switch_table` / `select_metric` on clicks.

use std::collections::HashMap;

use crate::{
    chart::BarChart,
    config::options::{Category, StatPage},
    data::Table,
    error::ChartError,
    scrape::SeasonTables,
};

/// A metric button: created once per button group, then shown/hidden.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MetricButton {
    column: String,
    visible: bool,
}

impl MetricButton {
    fn new(column: String) -> Self {
        Self { column, visible: false }
    }
    pub fn column(&self) -> &str { &self.column }
    pub fn is_visible(&self) -> bool { self.visible }
}

pub struct Dashboard {
    tables: SeasonTables,

    // Lazily populated; qualified categories reuse their page's list
    buttons: HashMap<StatPage, Vec<MetricButton>>,

    current: Category,
    status: String,
    notice: Option<String>,

    // None until the first metric is picked
    chart: Option<BarChart>,
    last_metric: Option<String>,
}

impl Dashboard {
    pub fn new(tables: SeasonTables) -> Self {
        let mut d = Self {
            tables,
            buttons: HashMap::new(),
            current: Category::Batting,
            status: s!(),
            notice: None,
            chart: None,
            last_metric: None,
        };
        d.show_metric_buttons(d.current);
        d.show_current_table();
        d
    }

    /* ---------- reads ---------- */

    #[inline] pub fn current(&self) -> Category { self.current }
    #[inline] pub fn status(&self) -> &str { &self.status }
    #[inline] pub fn notice(&self) -> Option<&str> { self.notice.as_deref() }
    #[inline] pub fn chart(&self) -> Option<&BarChart> { self.chart.as_ref() }
    #[inline] pub fn last_metric(&self) -> Option<&str> { self.last_metric.as_deref() }

    pub fn table(&self, category: Category) -> &Table { self.tables.get(category) }
    pub fn current_table(&self) -> &Table { self.tables.get(self.current) }

    /// Buttons owned by `category`'s group; empty until first shown.
    pub fn buttons(&self, category: Category) -> &[MetricButton] {
        self.buttons
            .get(&category.button_group())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Metric names currently on screen, top to bottom.
    pub fn visible_metrics(&self) -> Vec<String> {
        self.buttons(self.current)
            .iter()
            .filter(|b| b.visible)
            .map(|b| b.column.clone())
            .collect()
    }

    /* ---------- events ---------- */

    /// Hide the old table's buttons, make `to` current, show its buttons.
    /// Leaves the chart alone.
    pub fn switch_table(&mut self, to: Category) {
        let from = self.current;
        self.hide_metric_buttons(from);
        self.current = to;
        self.show_metric_buttons(to);
        self.show_current_table();
        logf!("UI: Table switch {:?} → {:?}", from, to);
    }

    /// Redraw for `column`. A bad column keeps the old chart and sets a notice.
    pub fn select_metric(&mut self, column: &str) {
        match self.plot_new(column) {
            Ok(()) => self.notice = None,
            Err(e) => {
                loge!("Chart: {} ({:?})", e, self.current);
                self.notice = Some(e.to_string());
            }
        }
    }

    /// Replace the chart with the current table's top rows by `column`.
    pub fn plot_new(&mut self, column: &str) -> Result<(), ChartError> {
        let chart = BarChart::build(self.current_table(), column)?;
        logd!("Chart: {} on {:?}, {} bars", column, self.current, chart.len());
        self.chart = Some(chart);
        self.last_metric = Some(s!(column));
        Ok(())
    }

    /* ---------- helpers ---------- */

    fn show_metric_buttons(&mut self, category: Category) {
        let table = self.tables.get(category);
        let buttons = self
            .buttons
            .entry(category.button_group())
            .or_insert_with(|| {
                let cols = table.metric_columns();
                logd!("UI: Creating {} metric buttons for {:?}", cols.len(), category);
                cols.into_iter().map(MetricButton::new).collect()
            });
        for b in buttons.iter_mut() {
            b.visible = true;
        }
    }

    fn hide_metric_buttons(&mut self, category: Category) {
        if let Some(buttons) = self.buttons.get_mut(&category.button_group()) {
            for b in buttons.iter_mut() {
                b.visible = false;
            }
        }
    }

    fn show_current_table(&mut self) {
        self.status = format!("Current table: {}", self.current.label());
    }
}
