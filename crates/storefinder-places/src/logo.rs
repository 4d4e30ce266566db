//! Synchronous initial logo heuristic.
//!
//! A lighter-weight companion to the async resolver in
//! `storefinder-branding`: immediately available, best guess only. Known
//! chains map to an image-CDN lookup by domain; independent shops with a
//! website get a favicon-service URL keyed by their own host; everything
//! else gets the generic category icon.

use storefinder_core::{brand_domain, GENERIC_LOGO_DATA_URI};

/// Returns an immediately usable logo URL for a canonical brand.
#[must_use]
pub fn initial_logo_url(brand: &str, website: Option<&str>) -> String {
    if let Some(domain) = brand_domain(brand) {
        return format!("https://logo.clearbit.com/{domain}");
    }

    if let Some(site) = website {
        if let Some(host) = reqwest::Url::parse(site).ok().and_then(|u| {
            u.host_str().map(str::to_owned)
        }) {
            return format!("https://www.google.com/s2/favicons?domain={host}&sz=128");
        }
    }

    GENERIC_LOGO_DATA_URI.to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_brand_uses_image_cdn() {
        assert_eq!(
            initial_logo_url("Home Depot", None),
            "https://logo.clearbit.com/homedepot.com"
        );
    }

    #[test]
    fn known_brand_ignores_website() {
        // The chain lookup wins even when the individual store has its own
        // site.
        assert_eq!(
            initial_logo_url("Ace Hardware", Some("https://acesacramento.example.com")),
            "https://logo.clearbit.com/acehardware.com"
        );
    }

    #[test]
    fn unknown_brand_with_website_uses_favicon_service() {
        assert_eq!(
            initial_logo_url("Joe's Hardware", Some("https://joeshardware.example.com/about")),
            "https://www.google.com/s2/favicons?domain=joeshardware.example.com&sz=128"
        );
    }

    #[test]
    fn invalid_website_falls_through_to_generic_icon() {
        assert_eq!(
            initial_logo_url("Joe's Hardware", Some("not a url")),
            GENERIC_LOGO_DATA_URI
        );
    }

    #[test]
    fn no_website_falls_through_to_generic_icon() {
        assert_eq!(initial_logo_url("Joe's Hardware", None), GENERIC_LOGO_DATA_URI);
    }
}
