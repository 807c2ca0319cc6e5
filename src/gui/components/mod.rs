// src/gui/components/mod.rs
pub mod category_panel;
pub mod chart_view;
pub mod data_table;
pub mod metric_panel;
