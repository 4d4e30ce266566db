//! Canonical brand resolution for raw business names.
//!
//! Matching is deliberately conservative: a missed grouping (two variants of
//! the same chain kept apart) is preferable to merging unrelated businesses.

/// Ordered `(substring, canonical name)` rules, evaluated first match wins.
/// Matching is case-insensitive containment against the raw name.
const BRAND_RULES: &[(&str, &str)] = &[
    ("home depot", "Home Depot"),
    ("lowe", "Lowe's"),
    ("ace hardware", "Ace Hardware"),
    ("menards", "Menards"),
    ("harbor freight", "Harbor Freight"),
    ("true value", "True Value"),
    ("grainger", "Grainger"),
    ("sherwin", "Sherwin-Williams"),
    ("tractor supply", "Tractor Supply Co."),
    ("do it best", "Do It Best"),
    ("northern tool", "Northern Tool"),
    ("west marine", "West Marine"),
    ("builders firstsource", "Builders FirstSource"),
];

/// Maps a raw business name to its canonical brand.
///
/// Unknown names pass through unchanged and are treated as independent
/// single-location brands.
#[must_use]
pub fn normalize_brand(name: &str) -> String {
    let lower = name.to_lowercase();
    for (pattern, canonical) in BRAND_RULES {
        if lower.contains(pattern) {
            return (*canonical).to_string();
        }
    }
    name.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_are_case_insensitive() {
        assert_eq!(normalize_brand("ACE HARDWARE #123"), "Ace Hardware");
    }

    #[test]
    fn substring_anywhere_in_name_matches() {
        assert_eq!(normalize_brand("The Home Depot Pro Desk"), "Home Depot");
        assert_eq!(normalize_brand("Lowe's Home Improvement"), "Lowe's");
    }

    #[test]
    fn unknown_names_pass_through() {
        assert_eq!(normalize_brand("Bob's Corner Store"), "Bob's Corner Store");
    }

    #[test]
    fn normalization_is_idempotent() {
        for (_, canonical) in BRAND_RULES {
            assert_eq!(normalize_brand(canonical), *canonical);
        }
        let once = normalize_brand("Bob's Corner Store");
        assert_eq!(normalize_brand(&once), once);
    }

    #[test]
    fn rule_order_decides_precedence() {
        // "home depot" precedes "lowe" in the table; a name containing both
        // resolves to the earlier rule.
        assert_eq!(normalize_brand("Home Depot (formerly Lowe's)"), "Home Depot");
    }

    #[test]
    fn empty_name_passes_through() {
        assert_eq!(normalize_brand(""), "");
    }
}
