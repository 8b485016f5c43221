//! One-shot user geolocation via an IP geolocation JSON endpoint.
//!
//! The endpoint answers `{"status": "success", "lat": .., "lon": ..}` or
//! `{"status": "fail", "message": ".."}`. A failure is never fatal to the
//! session: callers proceed without a user location and skip distance
//! annotations.

use std::time::Duration;

use cafescout_core::Coordinate;
use reqwest::{Client, Url};
use serde::Deserialize;
use thiserror::Error;

/// Errors from a geolocation lookup.
#[derive(Debug, Error)]
pub enum LocateError {
    /// The service refused to locate this client (`"status": "fail"`).
    #[error("geolocation denied: {0}")]
    Denied(String),

    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Deserialize)]
struct LocatePayload {
    lat: f64,
    lon: f64,
}

/// Client for the geolocation endpoint.
pub struct GeoClient {
    client: Client,
    url: Url,
}

impl GeoClient {
    /// Creates a client for the geolocation service at `url`.
    ///
    /// # Errors
    ///
    /// Returns [`LocateError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`LocateError::Denied`] if `url` is not a
    /// valid URL.
    pub fn new(url: &str, timeout_secs: u64) -> Result<Self, LocateError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("cafescout/0.1 (cafe-search)")
            .build()?;

        let url =
            Url::parse(url).map_err(|e| LocateError::Denied(format!("invalid URL '{url}': {e}")))?;

        Ok(Self { client, url })
    }

    /// Looks up this client's position.
    ///
    /// # Errors
    ///
    /// - [`LocateError::Denied`] when the service reports `"status": "fail"`.
    /// - [`LocateError::Http`] on network failure, timeout, or non-2xx status.
    /// - [`LocateError::Deserialize`] if the body does not match the expected
    ///   shape.
    pub async fn locate(&self) -> Result<Coordinate, LocateError> {
        let response = self.client.get(self.url.clone()).send().await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;
        let value: serde_json::Value =
            serde_json::from_str(&body).map_err(|e| LocateError::Deserialize {
                context: self.url.to_string(),
                source: e,
            })?;

        if value.get("status").and_then(serde_json::Value::as_str) == Some("fail") {
            let msg = value
                .get("message")
                .and_then(serde_json::Value::as_str)
                .unwrap_or("unknown reason")
                .to_string();
            return Err(LocateError::Denied(msg));
        }

        let payload: LocatePayload =
            serde_json::from_value(value).map_err(|e| LocateError::Deserialize {
                context: self.url.to_string(),
                source: e,
            })?;

        Ok(Coordinate {
            lat: payload.lat,
            lon: payload.lon,
        })
    }
}
