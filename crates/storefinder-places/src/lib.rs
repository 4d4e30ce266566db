//! Geographic data source access: Overpass store queries, the enrichment
//! pipeline that turns raw elements into [`storefinder_core::Store`]
//! records, Nominatim geocoding, and the directions deep-link.

pub mod aggregate;
pub mod client;
pub mod directions;
pub mod error;
pub mod geocode;
pub mod logo;
mod retry;
pub mod types;

pub use aggregate::{fetch_stores, SEARCH_RADIUS_METERS};
pub use client::OverpassClient;
pub use directions::directions_url;
pub use error::PlacesError;
pub use geocode::GeocodeClient;
pub use logo::initial_logo_url;
pub use types::{OverpassResponse, RawElement};
