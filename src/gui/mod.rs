// src/gui/mod.rs
pub mod app;
pub mod components;
pub mod dashboard;

pub use app::{run, run_startup_error, startup_error_text};
