// src/error.rs
use std::fmt;

/// Failures while getting a stats table off the site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScrapeError {
    /// Network unreachable, timeout or non-success HTTP status.
    Fetch(String),
    /// Target table missing or its header/body shapes disagree.
    Parse(String),
}

impl ScrapeError {
    pub fn fetch<T: Into<String>>(msg: T) -> Self { ScrapeError::Fetch(msg.into()) }
    pub fn parse<T: Into<String>>(msg: T) -> Self { ScrapeError::Parse(msg.into()) }
}

impl fmt::Display for ScrapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScrapeError::Fetch(msg) => write!(f, "fetch failed: {msg}"),
            ScrapeError::Parse(msg) => write!(f, "parse failed: {msg}"),
        }
    }
}

impl std::error::Error for ScrapeError {}

impl From<reqwest::Error> for ScrapeError {
    fn from(e: reqwest::Error) -> Self {
        ScrapeError::Fetch(e.to_string())
    }
}

/// A chart request the current table cannot satisfy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChartError {
    UnknownColumn(String),
    NotNumeric(String),
    MissingNameColumn,
}

impl fmt::Display for ChartError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChartError::UnknownColumn(c) => write!(f, "no column named `{c}` in the current table"),
            ChartError::NotNumeric(c) => write!(f, "column `{c}` is not numeric"),
            ChartError::MissingNameColumn => write!(f, "current table has no player name column"),
        }
    }
}

impl std::error::Error for ChartError {}
