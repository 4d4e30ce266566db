//! Grouping of enriched stores into per-brand categories.

use std::collections::HashMap;

use crate::types::{CategoryResult, Store};

/// Groups `stores` by canonical brand and sorts the groups by the distance
/// of each brand's nearest location.
///
/// `logo_overrides` maps brands to asynchronously resolved logo URLs; when a
/// brand is present there, the override supersedes each member store's
/// initial logo. The function is a pure projection — recompute it whenever
/// the store list or the override map changes.
///
/// Within a group, `others` is ascending by distance; across groups the
/// result is ascending by `min_distance`.
#[must_use]
pub fn build_categories(
    stores: &[Store],
    logo_overrides: &HashMap<String, String>,
) -> Vec<CategoryResult> {
    let mut groups: Vec<(String, Vec<Store>)> = Vec::new();
    for store in stores {
        let mut store = store.clone();
        if let Some(url) = logo_overrides.get(&store.brand) {
            store.logo_url = Some(url.clone());
        }
        match groups.iter_mut().find(|(brand, _)| *brand == store.brand) {
            Some((_, members)) => members.push(store),
            None => groups.push((store.brand.clone(), vec![store])),
        }
    }

    let mut results: Vec<CategoryResult> = groups
        .into_iter()
        .map(|(brand, mut members)| {
            members.sort_by(|a, b| a.distance_miles.total_cmp(&b.distance_miles));
            let nearest = members.remove(0);
            let min_distance = nearest.distance_miles;
            CategoryResult {
                brand,
                nearest,
                others: members,
                min_distance,
            }
        })
        .collect();

    results.sort_by(|a, b| a.min_distance.total_cmp(&b.min_distance));
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::OpenStatus;

    fn store(id: &str, name: &str, brand: &str, distance: f64) -> Store {
        Store {
            id: id.to_owned(),
            name: name.to_owned(),
            address: "Address not listed".to_owned(),
            lat: 0.0,
            lon: 0.0,
            distance_miles: distance,
            brand: brand.to_owned(),
            phone: None,
            website: None,
            opening_hours: None,
            open_status: OpenStatus::Unknown,
            logo_url: None,
        }
    }

    #[test]
    fn nearest_is_group_minimum_and_groups_sort_ascending() {
        let stores = vec![
            store("1", "Home Depot #401", "Home Depot", 2.1),
            store("2", "The Home Depot", "Home Depot", 5.4),
            store("3", "Joe's Hardware", "Joe's Hardware", 1.0),
        ];
        let categories = build_categories(&stores, &HashMap::new());

        assert_eq!(categories.len(), 2);
        assert_eq!(categories[0].brand, "Joe's Hardware");
        assert!((categories[0].min_distance - 1.0).abs() < f64::EPSILON);
        assert!(categories[0].others.is_empty());

        assert_eq!(categories[1].brand, "Home Depot");
        assert!((categories[1].min_distance - 2.1).abs() < f64::EPSILON);
        assert_eq!(categories[1].others.len(), 1);
        assert!((categories[1].others[0].distance_miles - 5.4).abs() < f64::EPSILON);
    }

    #[test]
    fn every_input_store_appears_exactly_once() {
        let stores = vec![
            store("a", "Ace Hardware", "Ace Hardware", 3.0),
            store("b", "Ace Hardware Downtown", "Ace Hardware", 1.5),
            store("c", "Ace Hardware North", "Ace Hardware", 7.2),
            store("d", "Menards", "Menards", 4.4),
        ];
        let categories = build_categories(&stores, &HashMap::new());

        let mut seen: Vec<String> = categories
            .iter()
            .flat_map(|c| {
                std::iter::once(c.nearest.id.clone()).chain(c.others.iter().map(|s| s.id.clone()))
            })
            .collect();
        seen.sort();
        assert_eq!(seen, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn nearest_distance_bounds_every_other_member() {
        let stores = vec![
            store("a", "Ace", "Ace Hardware", 3.0),
            store("b", "Ace", "Ace Hardware", 1.5),
            store("c", "Ace", "Ace Hardware", 7.2),
        ];
        let categories = build_categories(&stores, &HashMap::new());
        let group = &categories[0];
        for other in &group.others {
            assert!(group.nearest.distance_miles <= other.distance_miles);
        }
    }

    #[test]
    fn others_sorted_ascending_within_group() {
        let stores = vec![
            store("a", "Ace", "Ace Hardware", 7.2),
            store("b", "Ace", "Ace Hardware", 1.5),
            store("c", "Ace", "Ace Hardware", 3.0),
        ];
        let categories = build_categories(&stores, &HashMap::new());
        let distances: Vec<f64> = categories[0]
            .others
            .iter()
            .map(|s| s.distance_miles)
            .collect();
        assert_eq!(distances, vec![3.0, 7.2]);
    }

    #[test]
    fn logo_override_supersedes_initial_logo() {
        let mut with_logo = store("a", "Ace", "Ace Hardware", 1.0);
        with_logo.logo_url = Some("https://example.com/initial.png".to_owned());
        let overrides = HashMap::from([(
            "Ace Hardware".to_owned(),
            "https://example.com/resolved.svg".to_owned(),
        )]);
        let categories = build_categories(&[with_logo], &overrides);
        assert_eq!(
            categories[0].nearest.logo_url.as_deref(),
            Some("https://example.com/resolved.svg")
        );
    }

    #[test]
    fn override_for_other_brand_leaves_logo_alone() {
        let mut with_logo = store("a", "Ace", "Ace Hardware", 1.0);
        with_logo.logo_url = Some("https://example.com/initial.png".to_owned());
        let overrides = HashMap::from([(
            "Menards".to_owned(),
            "https://example.com/resolved.svg".to_owned(),
        )]);
        let categories = build_categories(&[with_logo], &overrides);
        assert_eq!(
            categories[0].nearest.logo_url.as_deref(),
            Some("https://example.com/initial.png")
        );
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(build_categories(&[], &HashMap::new()).is_empty());
    }

    #[test]
    fn different_brands_never_share_a_group() {
        let stores = vec![
            store("a", "Ace", "Ace Hardware", 1.0),
            store("b", "Menards", "Menards", 1.0),
        ];
        let categories = build_categories(&stores, &HashMap::new());
        assert_eq!(categories.len(), 2);
    }
}
