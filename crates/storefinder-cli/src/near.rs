//! Command handlers: one aggregation cycle per invocation.
//!
//! Failure policy follows the error taxonomy: data-unavailable and
//! location-unresolvable conditions print a retryable message and exit
//! cleanly; enrichment failures never surface here at all.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use storefinder_branding::{JsonFileCache, LogoResolver, LogoSearchClient};
use storefinder_core::{build_categories, AppConfig, Store, UserLocation};
use storefinder_places::{fetch_stores, GeocodeClient, OverpassClient};

use crate::render;

pub(crate) async fn run(
    config: &AppConfig,
    query: Option<&str>,
    coords: Option<(f64, f64)>,
    no_logos: bool,
) -> anyhow::Result<()> {
    let Some(location) = resolve_location(config, query, coords).await? else {
        println!("Location not found. Try a ZIP code.");
        return Ok(());
    };

    let overpass = OverpassClient::new(
        &config.overpass_url,
        config.request_timeout_secs,
        &config.user_agent,
        config.max_retries,
        config.retry_backoff_base_secs,
    )?;

    let stores = match fetch_stores(&overpass, &location).await {
        Ok(stores) => stores,
        Err(e) => {
            tracing::error!(error = %e, "store aggregation failed");
            println!("Unable to reach store database. Try again.");
            return Ok(());
        }
    };

    if stores.is_empty() {
        println!("No stores found within 50 miles.");
        return Ok(());
    }

    let logos = if no_logos {
        HashMap::new()
    } else {
        let resolver = build_resolver(config)?;
        let brands = unique_brands(&stores);
        resolver
            .resolve_all(&brands, config.max_concurrent_logo_lookups)
            .await
    };

    let categories = build_categories(&stores, &logos);
    print!("{}", render::render_categories(&location, &categories));
    Ok(())
}

pub(crate) async fn run_logo(config: &AppConfig, brand: &str) -> anyhow::Result<()> {
    let resolver = build_resolver(config)?;
    println!("{}", resolver.resolve(brand).await);
    Ok(())
}

pub(crate) async fn run_geocode(config: &AppConfig, query: &str) -> anyhow::Result<()> {
    let geocoder = GeocodeClient::new(
        &config.nominatim_url,
        config.request_timeout_secs,
        &config.user_agent,
    )?;
    match geocoder.geocode(query).await {
        Ok(Some(location)) => {
            println!("{} ({}, {})", location.label, location.lat, location.lon);
        }
        Ok(None) => println!("Location not found. Try a ZIP code."),
        Err(e) => {
            tracing::error!(error = %e, "geocoding failed");
            println!("Unable to reach the geocoding service. Try again.");
        }
    }
    Ok(())
}

async fn resolve_location(
    config: &AppConfig,
    query: Option<&str>,
    coords: Option<(f64, f64)>,
) -> anyhow::Result<Option<UserLocation>> {
    if let Some((lat, lon)) = coords {
        return Ok(Some(UserLocation {
            lat,
            lon,
            label: format!("{lat:.4}, {lon:.4}"),
        }));
    }

    let Some(query) = query else {
        anyhow::bail!("provide a location query, or explicit --lat and --lon");
    };

    let geocoder = GeocodeClient::new(
        &config.nominatim_url,
        config.request_timeout_secs,
        &config.user_agent,
    )?;
    match geocoder.geocode(query).await {
        Ok(hit) => Ok(hit),
        Err(e) => {
            tracing::error!(error = %e, "geocoding failed");
            Ok(None)
        }
    }
}

fn build_resolver(config: &AppConfig) -> anyhow::Result<LogoResolver> {
    let cache = Arc::new(JsonFileCache::new(&config.logo_cache_path));
    let search = match &config.gemini_api_key {
        Some(key) => Some(LogoSearchClient::new(
            &config.logo_search_url,
            key,
            config.request_timeout_secs,
            &config.user_agent,
        )?),
        None => {
            tracing::warn!("GEMINI_API_KEY is not set — external logo resolution is disabled");
            None
        }
    };
    Ok(LogoResolver::new(cache, search))
}

/// Distinct brands in first-appearance order; each fires one resolution.
fn unique_brands(stores: &[Store]) -> Vec<String> {
    let mut seen = HashSet::new();
    stores
        .iter()
        .filter(|s| seen.insert(s.brand.clone()))
        .map(|s| s.brand.clone())
        .collect()
}
