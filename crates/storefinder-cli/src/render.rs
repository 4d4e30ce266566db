//! Plain-text rendering of grouped results.

use std::fmt::Write;

use storefinder_core::{CategoryResult, OpenStatus, Store, UserLocation};
use storefinder_places::directions_url;

pub(crate) fn render_categories(
    location: &UserLocation,
    categories: &[CategoryResult],
) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Hardware stores near {} - {} brand(s)\n",
        location.label,
        categories.len()
    );

    for (rank, category) in categories.iter().enumerate() {
        let _ = writeln!(
            out,
            "{}. {} - {:.1} mi",
            rank + 1,
            category.brand,
            category.min_distance
        );
        if let Some(logo) = &category.nearest.logo_url {
            let _ = writeln!(out, "   logo: {logo}");
        }
        render_store(&mut out, &category.nearest);
        if !category.others.is_empty() {
            let _ = writeln!(out, "   {} more:", category.others.len());
            for other in &category.others {
                render_store(&mut out, other);
            }
        }
        out.push('\n');
    }

    out
}

fn render_store(out: &mut String, store: &Store) {
    let _ = writeln!(
        out,
        "   - {} · {} · {:.1} mi · {}",
        store.name,
        store.address,
        store.distance_miles,
        status_text(store.open_status)
    );
    if let Some(phone) = &store.phone {
        let _ = writeln!(out, "     phone: {phone}");
    }
    if let Some(website) = &store.website {
        let _ = writeln!(out, "     web: {website}");
    }
    let _ = writeln!(out, "     directions: {}", directions_url(store));
}

fn status_text(status: OpenStatus) -> &'static str {
    match status {
        OpenStatus::Open => "open now",
        OpenStatus::Closed => "closed now",
        OpenStatus::Unknown => "hours unknown",
    }
}
