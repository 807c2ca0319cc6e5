// src/core/net.rs

// Blocking HTTPS GET. One request per page, no retries.

use std::time::Duration;

use crate::config::consts::{HTTP_TIMEOUT_SECS, USER_AGENT};
use crate::error::ScrapeError;

pub fn http_get(url: &str) -> Result<String, ScrapeError> {
    let client = reqwest::blocking::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
        .build()?;

    logd!("GET {}", url);
    let resp = client.get(url).send()?;

    let status = resp.status();
    if !status.is_success() {
        return Err(ScrapeError::fetch(format!("HTTP error: {} {}", status, url)));
    }
    Ok(resp.text()?)
}
