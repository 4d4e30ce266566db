//! HTTP client for the Overpass API interpreter endpoint.

use std::time::Duration;

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use reqwest::Client;

use crate::error::PlacesError;
use crate::retry::retry_with_backoff;
use crate::types::{OverpassResponse, RawElement};

/// Shop categories that count as hardware stores.
const SHOP_FILTER: &str = "hardware|doityourself|building_materials";

/// Query-by-radius client for the Overpass API.
///
/// Non-2xx responses surface as typed errors; transient failures (network
/// errors, 429, 5xx) are retried with exponential backoff up to
/// `max_retries` additional attempts.
pub struct OverpassClient {
    client: Client,
    endpoint: String,
    max_retries: u32,
    backoff_base_secs: u64,
}

impl OverpassClient {
    /// Creates an `OverpassClient` with configured timeout, `User-Agent`,
    /// and retry policy.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(
        endpoint: &str,
        timeout_secs: u64,
        user_agent: &str,
        max_retries: u32,
        backoff_base_secs: u64,
    ) -> Result<Self, PlacesError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            client,
            endpoint: endpoint.trim_end_matches('/').to_owned(),
            max_retries,
            backoff_base_secs,
        })
    }

    /// Fetches raw hardware-shop elements (nodes and ways, with centroids)
    /// within `radius_meters` of `(lat, lon)`.
    ///
    /// # Errors
    ///
    /// - [`PlacesError::UnexpectedStatus`] — non-2xx response after all
    ///   retries are exhausted.
    /// - [`PlacesError::Http`] — network or TLS failure after all retries.
    /// - [`PlacesError::Deserialize`] — response body is not valid Overpass
    ///   JSON (not retried).
    pub async fn fetch_hardware_shops(
        &self,
        lat: f64,
        lon: f64,
        radius_meters: u32,
    ) -> Result<Vec<RawElement>, PlacesError> {
        let query = format!(
            "[out:json];\
             (node[\"shop\"~\"{SHOP_FILTER}\"](around:{radius_meters},{lat},{lon});\
             way[\"shop\"~\"{SHOP_FILTER}\"](around:{radius_meters},{lat},{lon}););\
             out center;"
        );
        let url = format!(
            "{}?data={}",
            self.endpoint,
            utf8_percent_encode(&query, NON_ALPHANUMERIC)
        );

        retry_with_backoff(self.max_retries, self.backoff_base_secs, || {
            let url = url.clone();
            async move {
                let response = self.client.get(&url).send().await?;
                let status = response.status();

                if !status.is_success() {
                    return Err(PlacesError::UnexpectedStatus {
                        status: status.as_u16(),
                        url,
                    });
                }

                let body = response.text().await?;
                let parsed = serde_json::from_str::<OverpassResponse>(&body).map_err(|e| {
                    PlacesError::Deserialize {
                        context: "Overpass response".to_owned(),
                        source: e,
                    }
                })?;

                Ok(parsed.elements)
            }
        })
        .await
    }
}
