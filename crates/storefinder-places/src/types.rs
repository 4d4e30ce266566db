//! Wire types for the Overpass API response.

use std::collections::BTreeMap;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct OverpassResponse {
    pub elements: Vec<RawElement>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Center {
    pub lat: f64,
    pub lon: f64,
}

/// One raw element from an Overpass query. Nodes carry a point location;
/// ways and relations carry the centroid requested via `out center`.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum RawElement {
    Node {
        id: u64,
        lat: f64,
        lon: f64,
        #[serde(default)]
        tags: BTreeMap<String, String>,
    },
    Way {
        id: u64,
        center: Option<Center>,
        #[serde(default)]
        tags: BTreeMap<String, String>,
    },
    Relation {
        id: u64,
        center: Option<Center>,
        #[serde(default)]
        tags: BTreeMap<String, String>,
    },
}

impl RawElement {
    /// Source identifier, unique across element kinds (`node/123` and
    /// `way/123` are distinct records).
    #[must_use]
    pub fn id(&self) -> String {
        match self {
            RawElement::Node { id, .. } => format!("node/{id}"),
            RawElement::Way { id, .. } => format!("way/{id}"),
            RawElement::Relation { id, .. } => format!("relation/{id}"),
        }
    }

    /// Point location for nodes, centroid for ways and relations. `None`
    /// when the server omitted a centroid.
    #[must_use]
    pub fn position(&self) -> Option<(f64, f64)> {
        match self {
            RawElement::Node { lat, lon, .. } => Some((*lat, *lon)),
            RawElement::Way { center, .. } | RawElement::Relation { center, .. } => {
                center.map(|c| (c.lat, c.lon))
            }
        }
    }

    #[must_use]
    pub fn tags(&self) -> &BTreeMap<String, String> {
        match self {
            RawElement::Node { tags, .. }
            | RawElement::Way { tags, .. }
            | RawElement::Relation { tags, .. } => tags,
        }
    }

    #[must_use]
    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags().get(key).map(String::as_str)
    }
}
