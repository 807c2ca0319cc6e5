//! # Scraping "specs" module
//!
//! Page-specific knowledge of where the data lives in the site's HTML and how
//! to pull it out. Specs only extract: fetching policy, post-processing and
//! presentation live in `scrape` and `gui`.
//!
//! ## Conventions
//! - **Case-insensitive** tag detection through `core::html::Markup`; no
//!   full-document regexes.
//! - Parsing is split from fetching so every spec is testable **offline**
//!   against captured or hand-written markup.
//! - Output is a text-only `data::Table`; numeric coercion happens later.
//!
//! ## Current specs
//! - `stat_table` – the `players_standard_*` tables on the season pages,
//!   including ones the site ships inside HTML comments.
pub mod stat_table;
