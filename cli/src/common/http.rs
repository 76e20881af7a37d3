//! # Shared HTTP Helpers (`common::http`)
//!
//! File: cli/src/common/http.rs
//!
//! Both external services are called the same way: one POST, a bounded
//! timeout, no retries, and the body parsed as JSON without looking at the
//! status code first. A non-2xx answer with a non-JSON body therefore shows up
//! as a `MoodbotError::Decode` carrying the status and an excerpt of the body.
//!
use crate::core::error::{MoodbotError, Result};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

/// Builds a `reqwest::Client` with the given request timeout.
pub fn build_client(timeout: Duration) -> Result<reqwest::Client> {
    let client = reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(MoodbotError::from)?;
    Ok(client)
}

/// Joins a configured base host and a relative path with exactly one `/`.
pub fn join_url(host: &str, path: &str) -> String {
    format!(
        "{}/{}",
        host.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Reads the whole body of `response` and deserializes it into `T`.
pub async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let status = response.status();
    let body = response.text().await.map_err(MoodbotError::from)?;
    debug!("Received HTTP {} with {} byte body", status, body.len());
    serde_json::from_str(&body)
        .map_err(|source| MoodbotError::decode(status.as_u16(), source, &body).into())
}
