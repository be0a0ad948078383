//! Shared HTTP plumbing for the SiliconFlow clients

use std::time::Duration;

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use crate::text::truncate_chars;
use crate::{AsrSummaryError, Result};

/// Per-request timeout; large audio uploads need a generous bound.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

const MAX_ERROR_BODY_CHARS: usize = 300;

pub(crate) fn build_client() -> Result<Client> {
    Ok(Client::builder().timeout(REQUEST_TIMEOUT).build()?)
}

/// Turn a non-2xx response into a transport error carrying the status.
pub(crate) async fn ensure_success(response: Response, endpoint: &'static str) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    tracing::debug!("{} returned {}: {}", endpoint, status, body);

    Err(AsrSummaryError::Transport {
        endpoint,
        status: status.as_u16(),
        body: truncate_chars(body.trim(), MAX_ERROR_BODY_CHARS),
    })
}

/// Read the body and decode it as JSON.
pub(crate) async fn read_json<T: DeserializeOwned>(
    response: Response,
    endpoint: &'static str,
) -> Result<T> {
    let bytes = response.bytes().await?;
    parse_json(&bytes, endpoint)
}

pub(crate) fn parse_json<T: DeserializeOwned>(bytes: &[u8], endpoint: &'static str) -> Result<T> {
    serde_json::from_slice(bytes)
        .map_err(|e| AsrSummaryError::Parse(format!("invalid {} response: {}", endpoint, e)))
}
