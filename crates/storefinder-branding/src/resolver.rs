//! Tiered logo resolution: curated table → persistent cache → external
//! lookup with write-through → generic icon.

use std::collections::HashMap;
use std::sync::Arc;

use futures::stream::{self, StreamExt};
use storefinder_core::GENERIC_LOGO_DATA_URI;

use crate::cache::LogoCache;
use crate::curated::curated_logo;
use crate::search::LogoSearchClient;

/// Resolves brand names to display logo URLs.
///
/// Resolution is total: every tier failure degrades to the next one, and
/// the generic category icon closes the chain. External results with an
/// `http(s)` URL are written through to the cache, so repeat resolutions of
/// the same brand converge without further external calls.
pub struct LogoResolver {
    cache: Arc<dyn LogoCache>,
    search: Option<LogoSearchClient>,
}

impl LogoResolver {
    #[must_use]
    pub fn new(cache: Arc<dyn LogoCache>, search: Option<LogoSearchClient>) -> Self {
        Self { cache, search }
    }

    /// Resolves one brand to a logo URL. Never fails.
    pub async fn resolve(&self, brand: &str) -> String {
        if let Some(url) = curated_logo(brand) {
            return url.to_owned();
        }

        match self.cache.get(brand) {
            Ok(Some(url)) => {
                tracing::debug!(brand, "logo cache hit");
                return url;
            }
            Ok(None) => {}
            Err(e) => tracing::warn!(brand, error = %e, "logo cache read failed"),
        }

        let Some(search) = &self.search else {
            return GENERIC_LOGO_DATA_URI.to_owned();
        };

        match search.find_logo_url(brand).await {
            Ok(Some(url)) if is_well_formed_http(&url) => {
                if let Err(e) = self.cache.insert(brand, &url) {
                    tracing::warn!(brand, error = %e, "logo cache write failed");
                }
                url
            }
            Ok(_) => {
                tracing::debug!(brand, "external lookup returned no usable url");
                GENERIC_LOGO_DATA_URI.to_owned()
            }
            Err(e) => {
                tracing::warn!(brand, error = %e, "external logo lookup failed");
                GENERIC_LOGO_DATA_URI.to_owned()
            }
        }
    }

    /// Resolves every brand concurrently and merges the completions into one
    /// map — the single serialized merge point for a result set's logo
    /// refinement. At most `max_concurrent` lookups are in flight at once;
    /// completion order is unspecified and does not affect the result.
    pub async fn resolve_all(
        &self,
        brands: &[String],
        max_concurrent: usize,
    ) -> HashMap<String, String> {
        stream::iter(brands)
            .map(|brand| async move {
                let url = self.resolve(brand).await;
                tracing::debug!(brand = %brand, "brand logo resolved");
                (brand.clone(), url)
            })
            .buffer_unordered(max_concurrent.max(1))
            .collect::<Vec<(String, String)>>()
            .await
            .into_iter()
            .collect()
    }
}

fn is_well_formed_http(url: &str) -> bool {
    match reqwest::Url::parse(url) {
        Ok(parsed) => matches!(parsed.scheme(), "http" | "https"),
        Err(_) => false,
    }
}
