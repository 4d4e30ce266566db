use serde::{Deserialize, Serialize};

/// Whether a store is open at the time of evaluation.
///
/// Distinct from a plain boolean: `Unknown` covers absent, unparseable, or
/// non-matching opening-hours data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpenStatus {
    Open,
    Closed,
    Unknown,
}

/// A single enriched store record, produced once per raw source element
/// during aggregation and not mutated afterwards. Logo refinement is applied
/// through the category builder's override map, not by patching the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Store {
    /// Source element id, unique per raw record.
    pub id: String,
    pub name: String,
    /// Joined from structured address tags; a fixed fallback string when
    /// none are present.
    pub address: String,
    pub lat: f64,
    pub lon: f64,
    /// Great-circle distance from the query origin, in miles.
    pub distance_miles: f64,
    /// Canonical brand after normalization; the grouping key.
    pub brand: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    /// Raw opening-hours string as tagged at the source.
    pub opening_hours: Option<String>,
    pub open_status: OpenStatus,
    /// Best-guess logo from the synchronous heuristic; superseded by the
    /// resolver's override map when one lands.
    pub logo_url: Option<String>,
}

/// Query origin: latitude/longitude plus a human-readable label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserLocation {
    pub lat: f64,
    pub lon: f64,
    pub label: String,
}

/// One brand's group in the rendered list: the nearest store as the
/// representative, the rest ascending by distance.
///
/// Groups are only built from stores that exist, so `nearest` is always
/// present. `min_distance` duplicates `nearest.distance_miles` as the sort
/// key across groups.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryResult {
    pub brand: String,
    pub nearest: Store,
    pub others: Vec<Store>,
    pub min_distance: f64,
}
