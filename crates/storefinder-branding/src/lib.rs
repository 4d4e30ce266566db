//! Brand logo resolution: a tiered fallback chain over a curated table, a
//! persistent write-through cache, and an optional external search lookup,
//! with the generic category icon as the terminal base case.

pub mod cache;
pub mod curated;
pub mod error;
pub mod resolver;
pub mod search;

pub use cache::{JsonFileCache, LogoCache, MemoryCache};
pub use curated::curated_logo;
pub use error::BrandingError;
pub use resolver::LogoResolver;
pub use search::LogoSearchClient;
