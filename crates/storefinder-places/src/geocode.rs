//! Free-text geocoding via Nominatim.

use std::time::Duration;

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use reqwest::Client;
use serde::Deserialize;
use storefinder_core::UserLocation;

use crate::error::PlacesError;

/// Nominatim returns coordinates as decimal strings.
#[derive(Debug, Deserialize)]
struct GeocodeHit {
    lat: String,
    lon: String,
    display_name: String,
}

/// Free-text address / postal-code geocoding client.
pub struct GeocodeClient {
    client: Client,
    base_url: String,
}

impl GeocodeClient {
    /// Creates a `GeocodeClient` with configured timeout and `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(base_url: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, PlacesError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_owned(),
        })
    }

    /// Resolves a free-text query to a [`UserLocation`].
    ///
    /// Returns `Ok(None)` when the query has no match — the
    /// location-unresolvable case, which callers surface as a retryable
    /// prompt rather than a failure.
    ///
    /// # Errors
    ///
    /// - [`PlacesError::UnexpectedStatus`] — non-2xx response.
    /// - [`PlacesError::Http`] — network or TLS failure.
    /// - [`PlacesError::Deserialize`] — response body is not valid JSON.
    pub async fn geocode(&self, query: &str) -> Result<Option<UserLocation>, PlacesError> {
        let url = format!(
            "{}/search?q={}&format=json&limit=1",
            self.base_url,
            utf8_percent_encode(query, NON_ALPHANUMERIC)
        );

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(PlacesError::UnexpectedStatus {
                status: status.as_u16(),
                url,
            });
        }

        let body = response.text().await?;
        let hits = serde_json::from_str::<Vec<GeocodeHit>>(&body).map_err(|e| {
            PlacesError::Deserialize {
                context: format!("geocode response for \"{query}\""),
                source: e,
            }
        })?;

        let Some(hit) = hits.into_iter().next() else {
            return Ok(None);
        };

        let (Ok(lat), Ok(lon)) = (hit.lat.parse::<f64>(), hit.lon.parse::<f64>()) else {
            tracing::warn!(
                query,
                lat = %hit.lat,
                lon = %hit.lon,
                "geocode hit has unparseable coordinates"
            );
            return Ok(None);
        };

        Ok(Some(UserLocation {
            lat,
            lon,
            label: hit.display_name,
        }))
    }
}
