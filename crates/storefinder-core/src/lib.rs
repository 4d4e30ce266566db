//! Domain logic for the hardware-store finder: data model, distance math,
//! brand normalization, opening-hours evaluation, and category grouping.
//!
//! Everything in this crate is pure and I/O-free; network access lives in
//! `storefinder-places` and `storefinder-branding`.

pub mod app_config;
pub mod brands;
pub mod categories;
pub mod config;
pub mod error;
pub mod geo;
pub mod hours;
pub mod logo;
pub mod types;

pub use app_config::AppConfig;
pub use brands::normalize_brand;
pub use categories::build_categories;
pub use config::{load_app_config, load_app_config_from_env};
pub use error::ConfigError;
pub use geo::distance_miles;
pub use hours::{evaluate_hours, evaluate_hours_at};
pub use logo::{brand_domain, GENERIC_LOGO_DATA_URI};
pub use types::{CategoryResult, OpenStatus, Store, UserLocation};
