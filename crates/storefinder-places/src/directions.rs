//! Deep-link construction for the external mapping service.

use storefinder_core::Store;

/// Builds a directions URL to `store` for hand-off to the external mapping
/// service. Terminal action: the caller opens or prints it and nothing comes
/// back.
#[must_use]
pub fn directions_url(store: &Store) -> String {
    format!(
        "https://www.google.com/maps/dir/?api=1&destination={},{}",
        store.lat, store.lon
    )
}

#[cfg(test)]
mod tests {
    use storefinder_core::OpenStatus;

    use super::*;

    #[test]
    fn builds_destination_link() {
        let store = Store {
            id: "node/1".to_owned(),
            name: "Ace Hardware".to_owned(),
            address: "800 K St".to_owned(),
            lat: 38.5816,
            lon: -121.4944,
            distance_miles: 1.2,
            brand: "Ace Hardware".to_owned(),
            phone: None,
            website: None,
            opening_hours: None,
            open_status: OpenStatus::Unknown,
            logo_url: None,
        };
        assert_eq!(
            directions_url(&store),
            "https://www.google.com/maps/dir/?api=1&destination=38.5816,-121.4944"
        );
    }
}
