//! Hand-maintained table of vetted brand logos, checked before any cache or
//! external lookup.

/// Vetted `(brand, logo URL)` pairs. Lookup is case-insensitive: an exact
/// key match, or the queried brand name containing a key.
const CURATED_LOGOS: &[(&str, &str)] = &[
    (
        "The Home Depot",
        "https://commons.wikimedia.org/wiki/Special:FilePath/TheHomeDepot.svg",
    ),
    (
        "Home Depot",
        "https://commons.wikimedia.org/wiki/Special:FilePath/TheHomeDepot.svg",
    ),
    (
        "Lowe's",
        "https://upload.wikimedia.org/wikipedia/commons/5/59/Lowe%27s_icon.png",
    ),
    (
        "Ace Hardware",
        "https://commons.wikimedia.org/wiki/Special:FilePath/Ace%20Hardware%20logo.svg",
    ),
    (
        "True Value",
        "https://commons.wikimedia.org/wiki/Special:FilePath/True%20Value%20logo.svg",
    ),
    (
        "Do it Best",
        "https://commons.wikimedia.org/wiki/Special:FilePath/Do%20It%20Best%20-%202024.svg",
    ),
    (
        "Harbor Freight Tools",
        "https://upload.wikimedia.org/wikipedia/commons/a/a1/Harbor_Freight_Logo.png",
    ),
    (
        "Harbor Freight",
        "https://upload.wikimedia.org/wikipedia/commons/a/a1/Harbor_Freight_Logo.png",
    ),
    (
        "Tractor Supply Co.",
        "https://commons.wikimedia.org/wiki/Special:FilePath/Tractor%20Supply%20logo.svg",
    ),
    (
        "Fastenal",
        "https://commons.wikimedia.org/wiki/Special:FilePath/Fastenal%20logo.svg",
    ),
    (
        "Grainger",
        "https://commons.wikimedia.org/wiki/Special:FilePath/Grainger%20logo.svg",
    ),
    (
        "Friedman's Home Improvement (CA)",
        "https://commons.wikimedia.org/wiki/Special:FilePath/Friedman-logo.svg",
    ),
    (
        "Outdoor Supply Hardware (OSH) (CA)",
        "https://www.outdoorsupplyhardware.com/ASSETS/IMAGES/LOGOS/CLIENT/21/logo.png",
    ),
    (
        "Cole's Hardware (CA - Bay Area)",
        "https://www.coleshardware.com/site/assets/landing-images/Downloads/rgbjpgcolor.jpg",
    ),
    (
        "Anawalt Lumber (CA - LA)",
        "https://cdn.builder.io/api/v1/image/assets%2F26de3b5246e2495c96cc9e6d7b9d10cf%2F7296fc3006974805986037f0562e054b",
    ),
    (
        "Ganahl Lumber (CA - SoCal)",
        "https://www.ganahllumber.com/images/GanahlFooterLogoMobile.png",
    ),
];

/// Looks up a vetted logo for `brand`: case-insensitive exact key match, or
/// the brand name containing a key as a substring.
#[must_use]
pub fn curated_logo(brand: &str) -> Option<&'static str> {
    let lower = brand.to_lowercase();
    CURATED_LOGOS
        .iter()
        .find(|(key, _)| {
            let key = key.to_lowercase();
            key == lower || lower.contains(&key)
        })
        .map(|(_, url)| *url)
}
