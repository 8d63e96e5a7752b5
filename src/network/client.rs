//! Exchange-rate client - fetches `latest/{BASE}` snapshots from the provider

use std::time::{Duration, Instant};

use crate::error::FetchError;
use crate::messages::{NetworkResponse, RatePurpose};
use crate::models::RateSnapshot;

/// Thin wrapper over a shared reqwest client and the provider root
#[derive(Clone, Debug)]
pub struct RatesClient {
    client: reqwest::Client,
    base_url: String,
}

impl RatesClient {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        RatesClient { client, base_url }
    }

    /// URL of the latest rates relative to `base`.
    ///
    /// The code is used verbatim, so an empty base yields `.../latest/`.
    pub fn latest_url(&self, base: &str) -> String {
        format!("{}/latest/{}", self.base_url, base)
    }

    /// Fetch and decode the latest rates for `base`
    pub async fn fetch_latest(&self, base: &str) -> Result<RateSnapshot, FetchError> {
        let resp = self.client.get(self.latest_url(base)).send().await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let body = resp.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

/// Run one rate request and package the outcome for the App layer
pub async fn execute_fetch(
    client: &RatesClient,
    id: u64,
    base: &str,
    purpose: RatePurpose,
) -> NetworkResponse {
    let start = Instant::now();
    let result = client.fetch_latest(base).await;
    let time_ms = start.elapsed().as_millis() as u64;

    match result {
        Ok(snapshot) => NetworkResponse::Rates {
            id,
            purpose,
            snapshot,
            time_ms,
        },
        Err(e) => {
            tracing::warn!(id, base, kind = e.kind(), error = %e, "Rate request failed");
            NetworkResponse::Error {
                id,
                purpose,
                message: e.to_string(),
                time_ms,
            }
        }
    }
}

/// Create an HTTP client with the given request timeout
pub fn create_client(timeout: Duration) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}
