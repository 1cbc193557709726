//! HTTP client for the Overpass interpreter.
//!
//! Wraps `reqwest` with query construction, fixed-delay retry, and
//! normalization into [`cafescout_core::CafeLocation`] records. A non-2xx
//! status or network failure counts as transient and is retried; a body
//! that fails to parse is not.

use std::time::Duration;

use reqwest::{Client, Url};

use cafescout_core::CafeLocation;

use crate::error::OverpassError;
use crate::normalize::normalize_elements;
use crate::query::{brand_area_query, SearchArea};
use crate::retry::retry_with_delay;
use crate::types::OverpassResponse;

const DEFAULT_BASE_URL: &str = "https://lz4.overpass-api.de/api/interpreter";

/// Client for brand location queries against an Overpass interpreter.
///
/// Use [`OverpassClient::new`] for the public endpoint or
/// [`OverpassClient::with_base_url`] to point at a mirror or a mock server
/// in tests.
pub struct OverpassClient {
    client: Client,
    base_url: Url,
    /// Embedded as the Overpass `[timeout:]` directive; the HTTP timeout
    /// uses the same value.
    query_timeout_secs: u64,
    /// Additional attempts after the first failure.
    max_retries: u32,
    /// Fixed delay between attempts.
    retry_delay_secs: u64,
}

impl OverpassClient {
    /// Creates a client pointed at the public Overpass endpoint.
    ///
    /// `max_retries` is the number of additional attempts after the first
    /// failure for transient errors; set to `0` to disable retries.
    ///
    /// # Errors
    ///
    /// Returns [`OverpassError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(
        timeout_secs: u64,
        user_agent: &str,
        max_retries: u32,
        retry_delay_secs: u64,
    ) -> Result<Self, OverpassError> {
        Self::with_base_url(
            timeout_secs,
            user_agent,
            max_retries,
            retry_delay_secs,
            DEFAULT_BASE_URL,
        )
    }

    /// Creates a client with a custom interpreter URL (mirrors, wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`OverpassError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`OverpassError::InvalidEndpoint`] if
    /// `base_url` is not a valid URL.
    pub fn with_base_url(
        timeout_secs: u64,
        user_agent: &str,
        max_retries: u32,
        retry_delay_secs: u64,
        base_url: &str,
    ) -> Result<Self, OverpassError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        let base_url = Url::parse(base_url).map_err(|e| OverpassError::InvalidEndpoint {
            url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            base_url,
            query_timeout_secs: timeout_secs,
            max_retries,
            retry_delay_secs,
        })
    }

    /// Fetches every location tagged with `brand` inside `area`.
    ///
    /// Returns the normalized records in upstream element order, minus
    /// elements without a resolvable coordinate. An empty list is a valid
    /// result and means the brand has no matching locations in the area;
    /// a failed fetch is an `Err`, never an empty `Ok`.
    ///
    /// # Errors
    ///
    /// - [`OverpassError::Http`] — network failure after all retries.
    /// - [`OverpassError::UnexpectedStatus`] — non-2xx status after all
    ///   retries.
    /// - [`OverpassError::Deserialize`] — response body is not the expected
    ///   JSON shape (not retried).
    pub async fn fetch_brand_locations(
        &self,
        brand: &str,
        area: &SearchArea,
    ) -> Result<Vec<CafeLocation>, OverpassError> {
        let query = brand_area_query(brand, area, self.query_timeout_secs);
        let url = self.interpreter_url(&query);

        let response = retry_with_delay(self.max_retries, self.retry_delay_secs, || {
            let url = url.clone();
            async move {
                let response = self.client.get(url.clone()).send().await?;
                let status = response.status();
                if !status.is_success() {
                    return Err(OverpassError::UnexpectedStatus {
                        status: status.as_u16(),
                        url: url.to_string(),
                    });
                }

                let body = response.text().await?;
                serde_json::from_str::<OverpassResponse>(&body).map_err(|e| {
                    OverpassError::Deserialize {
                        context: format!("brand query for '{brand}'"),
                        source: e,
                    }
                })
            }
        })
        .await?;

        Ok(normalize_elements(response.elements, brand))
    }

    /// Builds the interpreter request URL with the query in the `data`
    /// parameter, percent-encoded via [`Url::query_pairs_mut`].
    fn interpreter_url(&self, query: &str) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut().append_pair("data", query);
        url
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
