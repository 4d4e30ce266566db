//! Store Aggregator: one fetch-and-enrich cycle against the geographic data
//! source.
//!
//! The full list is fetched and enriched before it is returned, so callers
//! never observe a partially built result. Enrichment failures (hours,
//! logos) degrade to conservative defaults per record; a fetch failure
//! aborts the whole cycle with no partial results.

use storefinder_core::{distance_miles, evaluate_hours, normalize_brand, Store, UserLocation};

use crate::client::OverpassClient;
use crate::error::PlacesError;
use crate::logo::initial_logo_url;
use crate::types::RawElement;

/// Fixed search radius: 50 miles.
pub const SEARCH_RADIUS_METERS: u32 = 80_467;

/// Display name used when a source element carries no `name` tag.
const NAME_FALLBACK: &str = "Local Shop";

/// Address shown when no structured address tags are present.
const ADDRESS_FALLBACK: &str = "Address not listed";

/// Fetches all hardware stores within [`SEARCH_RADIUS_METERS`] of `origin`
/// and enriches each into a [`Store`], sorted ascending by distance.
///
/// # Errors
///
/// Propagates [`PlacesError`] from the upstream fetch; the aggregation has
/// no partial-success mode.
pub async fn fetch_stores(
    client: &OverpassClient,
    origin: &UserLocation,
) -> Result<Vec<Store>, PlacesError> {
    let elements = client
        .fetch_hardware_shops(origin.lat, origin.lon, SEARCH_RADIUS_METERS)
        .await?;

    let mut stores: Vec<Store> = elements
        .iter()
        .filter_map(|el| enrich_element(el, origin))
        .collect();
    stores.sort_by(|a, b| a.distance_miles.total_cmp(&b.distance_miles));

    tracing::info!(
        count = stores.len(),
        origin = %origin.label,
        "aggregated stores within search radius"
    );
    Ok(stores)
}

/// Builds one enriched [`Store`] from a raw element. Returns `None` only
/// when the element has no usable coordinates.
fn enrich_element(el: &RawElement, origin: &UserLocation) -> Option<Store> {
    let Some((lat, lon)) = el.position() else {
        tracing::warn!(id = %el.id(), "skipping element without coordinates");
        return None;
    };

    let name = el.tag("name").unwrap_or(NAME_FALLBACK).to_owned();
    let brand = normalize_brand(&name);
    let website = el
        .tag("website")
        .or_else(|| el.tag("contact:website"))
        .map(str::to_owned);
    let phone = el
        .tag("phone")
        .or_else(|| el.tag("contact:phone"))
        .map(str::to_owned);
    let opening_hours = el.tag("opening_hours").map(str::to_owned);
    let open_status = evaluate_hours(opening_hours.as_deref());
    let logo_url = Some(initial_logo_url(&brand, website.as_deref()));

    Some(Store {
        id: el.id(),
        address: join_address(el),
        lat,
        lon,
        distance_miles: distance_miles(origin.lat, origin.lon, lat, lon),
        brand,
        name,
        phone,
        website,
        opening_hours,
        open_status,
        logo_url,
    })
}

/// Space-joins the structured address tags, skipping absent fields.
fn join_address(el: &RawElement) -> String {
    let parts: Vec<&str> = ["addr:housenumber", "addr:street", "addr:city", "addr:postcode"]
        .into_iter()
        .filter_map(|key| el.tag(key))
        .collect();
    if parts.is_empty() {
        ADDRESS_FALLBACK.to_owned()
    } else {
        parts.join(" ")
    }
}
