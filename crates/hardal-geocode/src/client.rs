//! HTTP client for the Google Geocoding API.
//!
//! Wraps `reqwest` with API key handling, German region/language biasing and
//! typed response deserialization. The provider's `status` field is mapped to
//! `Ok(None)` for "no match" and to [`GeocodeError::ApiStatus`] for failures.

use std::time::Duration;

use reqwest::{Client, Url};

use crate::error::GeocodeError;
use crate::types::{GeocodeResponse, GeocodeResult};

const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/";
const GEOCODE_PATH: &str = "maps/api/geocode/json";
const REGION: &str = "de";
const LANGUAGE: &str = "de";

/// Client for the Google Geocoding API.
///
/// Use [`GeocodeClient::new`] for production or [`GeocodeClient::with_base_url`]
/// to point at a mock server in tests.
pub struct GeocodeClient {
    client: Client,
    api_key: String,
    endpoint: Url,
}

impl std::fmt::Debug for GeocodeClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeocodeClient")
            .field("endpoint", &self.endpoint.as_str())
            .field("api_key", &"[redacted]")
            .finish_non_exhaustive()
    }
}

impl GeocodeClient {
    /// Creates a new client pointed at the production Google endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, GeocodeError> {
        Self::with_base_url(api_key, timeout_secs, user_agent, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`GeocodeError::InvalidBaseUrl`] if
    /// `base_url` is not a valid URL.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, GeocodeError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(timeout_secs.min(5)))
            .user_agent(user_agent)
            .build()?;

        // Exactly one trailing slash so `join` appends rather than replacing
        // the last path segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let endpoint = Url::parse(&normalised)
            .and_then(|base| base.join(GEOCODE_PATH))
            .map_err(|e| GeocodeError::InvalidBaseUrl {
                base_url: base_url.to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            endpoint,
        })
    }

    /// Resolves a free-text address and returns the first candidate.
    ///
    /// Results are biased towards Germany and returned in German.
    ///
    /// # Errors
    ///
    /// - [`GeocodeError::Http`] on network failure, timeout or non-2xx status.
    /// - [`GeocodeError::Deserialize`] if the body is not the expected shape.
    /// - [`GeocodeError::ApiStatus`] if the provider rejects the request.
    pub async fn geocode(&self, query: &str) -> Result<Option<GeocodeResult>, GeocodeError> {
        let url = self.build_url(query);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|e| GeocodeError::Http(e.without_url()))?;
        let body = response
            .text()
            .await
            .map_err(|e| GeocodeError::Http(e.without_url()))?;

        let parsed: GeocodeResponse =
            serde_json::from_str(&body).map_err(|e| GeocodeError::Deserialize {
                context: "geocode response".to_string(),
                source: e,
            })?;

        Self::first_result(parsed)
    }

    /// Builds the request URL with percent-encoded query parameters.
    fn build_url(&self, query: &str) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("address", query)
            .append_pair("key", &self.api_key)
            .append_pair("region", REGION)
            .append_pair("language", LANGUAGE);
        url
    }

    fn first_result(response: GeocodeResponse) -> Result<Option<GeocodeResult>, GeocodeError> {
        match response.status.as_str() {
            "OK" => response
                .results
                .into_iter()
                .next()
                .map(|first| {
                    serde_json::from_value(first).map_err(|e| GeocodeError::Deserialize {
                        context: "first geocode result".to_string(),
                        source: e,
                    })
                })
                .transpose(),
            "ZERO_RESULTS" => Ok(None),
            _ => Err(GeocodeError::ApiStatus {
                message: response
                    .error_message
                    .unwrap_or_else(|| "no error message".to_string()),
                status: response.status,
            }),
        }
    }
}
