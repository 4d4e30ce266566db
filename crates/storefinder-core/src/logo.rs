//! Shared logo data: the generic category icon and the canonical-brand →
//! image-CDN domain table used by the synchronous logo heuristic.

/// Generic hardware-category icon (blue circle, white wrench) as an inline
/// SVG data URI. The terminal fallback everywhere a brand logo cannot be
/// resolved.
pub const GENERIC_LOGO_DATA_URI: &str = "data:image/svg+xml,%3Csvg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 40 40'%3E%3Ccircle cx='20' cy='20' r='20' fill='%231A73E8'/%3E%3Cpath fill='white' d='M28.5,11.5c-2.1-2.1-5.5-2.1-7.6,0l-9.4,9.4c-0.4,0.4-0.4,1,0,1.4l2.1,2.1l-4.1,4.1c-0.4,0.4-0.4,1,0,1.4l1.4,1.4c0.4,0.4,1,0.4,1.4,0l4.1-4.1l2.1,2.1c0.4,0.4,1,0.4,1.4,0l9.4-9.4C30.6,17,30.6,13.6,28.5,11.5z M25.4,17.1l-1.4-1.4l4.2-4.2l1.4,1.4L25.4,17.1z'/%3E%3C/svg%3E";

/// Primary web domains for the major chains, keyed by lowercased canonical
/// brand name.
const BRAND_DOMAINS: &[(&str, &str)] = &[
    ("home depot", "homedepot.com"),
    ("lowe's", "lowes.com"),
    ("ace hardware", "acehardware.com"),
    ("menards", "menards.com"),
    ("harbor freight", "harborfreight.com"),
    ("true value", "truevalue.com"),
    ("grainger", "grainger.com"),
    ("sherwin-williams", "sherwin-williams.com"),
    ("tractor supply co.", "tractorsupply.com"),
    ("do it best", "doitbest.com"),
    ("northern tool", "northerntool.com"),
    ("west marine", "westmarine.com"),
    ("builders firstsource", "bldr.com"),
];

/// Looks up the web domain for a canonical brand name, case-insensitively.
#[must_use]
pub fn brand_domain(canonical_brand: &str) -> Option<&'static str> {
    let lower = canonical_brand.to_lowercase();
    BRAND_DOMAINS
        .iter()
        .find(|(name, _)| *name == lower)
        .map(|(_, domain)| *domain)
}
