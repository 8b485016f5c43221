//! HTTP client for the cafe search service.
//!
//! Wraps `reqwest` with typed error handling and response deserialization.
//! The service signals application-level failures with an `"error"` field in
//! an otherwise-200 JSON body; those surface as [`SearchError::ApiError`].

use std::time::Duration;

use reqwest::{Client, Url};

use crate::error::SearchError;
use crate::types::CitySearch;

/// Client for the cafe search service.
///
/// Owns the HTTP client and base URL. Point `base_url` at a mock server in
/// tests; the per-request timeout closes the "search that never resolves"
/// hole a timeout-less client would have.
pub struct SearchClient {
    client: Client,
    base_url: Url,
}

impl SearchClient {
    /// Creates a client for the service at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`SearchError::ApiError`] if `base_url`
    /// is not a valid URL.
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self, SearchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("cafescout/0.1 (cafe-search)")
            .build()?;

        // Normalise: ensure the base URL ends with exactly one slash so that
        // join() appends the endpoint path instead of replacing the last
        // path segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised)
            .map_err(|e| SearchError::ApiError(format!("invalid base URL '{base_url}': {e}")))?;

        Ok(Self { client, base_url })
    }

    /// Searches for cafes in `city`.
    ///
    /// Calls `GET /search?city=<city>` and returns the parsed [`CitySearch`].
    /// No retry and no backoff: a failure surfaces once and the caller keeps
    /// whatever results it already had.
    ///
    /// # Errors
    ///
    /// - [`SearchError::ApiError`] if the response carries an `"error"` field.
    /// - [`SearchError::Http`] on network failure, timeout, or non-2xx status.
    /// - [`SearchError::Deserialize`] if the body does not match the expected
    ///   shape.
    pub async fn search(&self, city: &str) -> Result<CitySearch, SearchError> {
        let url = self.build_url(city);
        let body = self.request_json(&url).await?;
        Self::check_api_error(&body)?;

        serde_json::from_value(body).map_err(|e| SearchError::Deserialize {
            context: format!("search(city={city})"),
            source: e,
        })
    }

    /// Builds the search URL with a properly percent-encoded `city` parameter.
    fn build_url(&self, city: &str) -> Url {
        let mut url = self
            .base_url
            .join("search")
            .unwrap_or_else(|_| self.base_url.clone());
        url.query_pairs_mut().append_pair("city", city);
        url
    }

    /// Sends a GET request, asserts a 2xx HTTP status, and parses the response
    /// body as JSON.
    async fn request_json(&self, url: &Url) -> Result<serde_json::Value, SearchError> {
        let response = self.client.get(url.clone()).send().await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| SearchError::Deserialize {
            context: url.to_string(),
            source: e,
        })
    }

    /// Checks the top-level `"error"` field and returns an error if present.
    fn check_api_error(body: &serde_json::Value) -> Result<(), SearchError> {
        if let Some(msg) = body.get("error").and_then(serde_json::Value::as_str) {
            return Err(SearchError::ApiError(msg.to_string()));
        }
        Ok(())
    }
}
