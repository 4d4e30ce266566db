//! External AI search lookup for brand logos.
//!
//! Sends the brand name as a search-grounded prompt and constrains the
//! response to a single-field JSON object, `{"logoUrl": "..."}`. The whole
//! tier is optional: without an API credential the client is simply never
//! constructed.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;

use crate::error::BrandingError;

const MODEL: &str = "gemini-3-flash-preview";

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct LogoPayload {
    #[serde(rename = "logoUrl")]
    logo_url: Option<String>,
}

/// Client for the external logo search service.
pub struct LogoSearchClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl LogoSearchClient {
    /// Creates a `LogoSearchClient` with configured timeout and `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`BrandingError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(
        base_url: &str,
        api_key: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, BrandingError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_owned(),
            api_key: api_key.to_owned(),
        })
    }

    /// Asks the search service for the official logo URL of `brand`.
    ///
    /// Returns `Ok(None)` when the service answers without a usable URL.
    ///
    /// # Errors
    ///
    /// - [`BrandingError::UnexpectedStatus`] — non-2xx response.
    /// - [`BrandingError::Http`] — network or TLS failure.
    /// - [`BrandingError::Deserialize`] — response or payload is not the
    ///   expected JSON shape.
    pub async fn find_logo_url(&self, brand: &str) -> Result<Option<String>, BrandingError> {
        let url = format!(
            "{}/v1beta/models/{MODEL}:generateContent",
            self.base_url
        );
        let prompt = format!(
            "Find the official high-resolution logo URL for the hardware store \
             franchise: \"{brand}\". Look for a direct link to a transparent PNG, \
             SVG, or high-quality favicon. Return only the URL string."
        );
        let body = serde_json::json!({
            "contents": [{"parts": [{"text": prompt}]}],
            "tools": [{"google_search": {}}],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": {
                    "type": "OBJECT",
                    "properties": {
                        "logoUrl": {
                            "type": "STRING",
                            "description": "The direct URL to the official franchise logo image."
                        }
                    },
                    "required": ["logoUrl"]
                }
            }
        });

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(BrandingError::UnexpectedStatus {
                status: status.as_u16(),
            });
        }

        let raw = response.text().await?;
        let parsed = serde_json::from_str::<GenerateContentResponse>(&raw).map_err(|e| {
            BrandingError::Deserialize {
                context: format!("logo search response for \"{brand}\""),
                source: e,
            }
        })?;

        let Some(text) = parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .and_then(|p| p.text)
        else {
            return Ok(None);
        };

        let payload = serde_json::from_str::<LogoPayload>(&text).map_err(|e| {
            BrandingError::Deserialize {
                context: format!("logo payload for \"{brand}\""),
                source: e,
            }
        })?;

        Ok(payload.logo_url.filter(|u| !u.is_empty()))
    }
}
