//! Single-shot HTTP GET against the IAM endpoint.

use reqwest::{StatusCode, Url};

use crate::error::Result;

/// Status and body of an HTTP response, read in full.
#[derive(Debug, Clone)]
pub(crate) struct RawResponse {
    pub status: u16,
    /// Status line text, e.g. `403 Forbidden`.
    pub status_line: String,
    pub body: String,
}

impl RawResponse {
    pub(crate) fn new(status: StatusCode, body: String) -> Self {
        Self {
            status: status.as_u16(),
            status_line: status_line(status),
            body,
        }
    }
}

fn status_line(status: StatusCode) -> String {
    match status.canonical_reason() {
        Some(reason) => format!("{} {}", status.as_u16(), reason),
        None => status.as_u16().to_string(),
    }
}

/// Sends a GET request and reads the whole body.
///
/// The response is consumed by `text()`, which releases the connection on
/// every path, including when reading the body fails.
pub(crate) async fn get(http: &reqwest::Client, url: Url) -> Result<RawResponse> {
    let response = http.get(url).send().await?;
    let status = response.status();
    let body = response.text().await?;
    tracing::debug!(status = status.as_u16(), "received IAM response");
    Ok(RawResponse::new(status, body))
}

/// Blocking counterpart of [`get`].
#[cfg(feature = "blocking")]
pub(crate) fn get_blocking(http: &reqwest::blocking::Client, url: Url) -> Result<RawResponse> {
    let response = http.get(url).send()?;
    let status = response.status();
    let body = response.text()?;
    tracing::debug!(status = status.as_u16(), "received IAM response");
    Ok(RawResponse::new(status, body))
}
