//! Persistent brand → logo URL cache.
//!
//! The cache is the one piece of durable cross-cycle state. Access is
//! load-mutate-rewrite over the whole serialized mapping per call; writers
//! racing on the same brand compute the same answer, so write order is
//! immaterial. The trait keeps the resolver testable with an in-memory fake.

use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tempfile::NamedTempFile;

use crate::error::BrandingError;

/// Key-value store for resolved logo URLs.
pub trait LogoCache: Send + Sync {
    /// Case-sensitive exact-key lookup.
    ///
    /// # Errors
    ///
    /// Returns [`BrandingError`] if the backing store cannot be read.
    fn get(&self, brand: &str) -> Result<Option<String>, BrandingError>;

    /// Inserts or replaces the cached URL for `brand`.
    ///
    /// # Errors
    ///
    /// Returns [`BrandingError`] if the backing store cannot be rewritten.
    fn insert(&self, brand: &str, url: &str) -> Result<(), BrandingError>;
}

/// Durable JSON-file cache. Each call reads the whole mapping; inserts
/// rewrite it atomically via a temp file in the same directory.
pub struct JsonFileCache {
    path: PathBuf,
}

impl JsonFileCache {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn display_path(&self) -> String {
        self.path.display().to_string()
    }

    fn load_map(&self) -> Result<BTreeMap<String, String>, BrandingError> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let raw = std::fs::read_to_string(&self.path).map_err(|e| BrandingError::CacheIo {
            path: self.display_path(),
            source: e,
        })?;
        serde_json::from_str(&raw).map_err(|e| BrandingError::CacheParse {
            path: self.display_path(),
            source: e,
        })
    }

    fn store_map(&self, map: &BTreeMap<String, String>) -> Result<(), BrandingError> {
        let json = serde_json::to_string_pretty(map).map_err(|e| BrandingError::CacheParse {
            path: self.display_path(),
            source: e,
        })?;

        let dir = self
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let mut tmp = NamedTempFile::new_in(dir).map_err(|e| BrandingError::CacheIo {
            path: self.display_path(),
            source: e,
        })?;
        tmp.write_all(json.as_bytes())
            .map_err(|e| BrandingError::CacheIo {
                path: self.display_path(),
                source: e,
            })?;
        tmp.persist(&self.path).map_err(|e| BrandingError::CacheIo {
            path: self.display_path(),
            source: e.error,
        })?;
        Ok(())
    }
}

impl LogoCache for JsonFileCache {
    fn get(&self, brand: &str) -> Result<Option<String>, BrandingError> {
        Ok(self.load_map()?.get(brand).cloned())
    }

    fn insert(&self, brand: &str, url: &str) -> Result<(), BrandingError> {
        let mut map = self.load_map()?;
        map.insert(brand.to_owned(), url.to_owned());
        self.store_map(&map)
    }
}

/// In-memory cache for tests and cache-less runs.
#[derive(Default)]
pub struct MemoryCache {
    map: Mutex<BTreeMap<String, String>>,
}

impl MemoryCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl LogoCache for MemoryCache {
    fn get(&self, brand: &str) -> Result<Option<String>, BrandingError> {
        let map = self
            .map
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        Ok(map.get(brand).cloned())
    }

    fn insert(&self, brand: &str, url: &str) -> Result<(), BrandingError> {
        let mut map = self
            .map
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        map.insert(brand.to_owned(), url.to_owned());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let cache = JsonFileCache::new(dir.path().join("logos.json"));
        assert_eq!(cache.get("Home Depot").unwrap(), None);
    }

    #[test]
    fn insert_then_get_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let cache = JsonFileCache::new(dir.path().join("logos.json"));
        cache
            .insert("Joe's Hardware", "https://cdn.example.com/joes.png")
            .unwrap();
        assert_eq!(
            cache.get("Joe's Hardware").unwrap().as_deref(),
            Some("https://cdn.example.com/joes.png")
        );
    }

    #[test]
    fn mapping_survives_a_new_cache_instance() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logos.json");
        JsonFileCache::new(&path)
            .insert("Joe's Hardware", "https://cdn.example.com/joes.png")
            .unwrap();

        let reopened = JsonFileCache::new(&path);
        assert_eq!(
            reopened.get("Joe's Hardware").unwrap().as_deref(),
            Some("https://cdn.example.com/joes.png")
        );
    }

    #[test]
    fn insert_preserves_existing_entries() {
        let dir = tempfile::tempdir().unwrap();
        let cache = JsonFileCache::new(dir.path().join("logos.json"));
        cache.insert("A", "https://a.example.com/logo.png").unwrap();
        cache.insert("B", "https://b.example.com/logo.png").unwrap();
        assert_eq!(
            cache.get("A").unwrap().as_deref(),
            Some("https://a.example.com/logo.png")
        );
    }

    #[test]
    fn repeated_insert_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let cache = JsonFileCache::new(dir.path().join("logos.json"));
        cache.insert("A", "https://a.example.com/logo.png").unwrap();
        cache.insert("A", "https://a.example.com/logo.png").unwrap();
        assert_eq!(
            cache.get("A").unwrap().as_deref(),
            Some("https://a.example.com/logo.png")
        );
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let cache = MemoryCache::new();
        cache.insert("Joe's Hardware", "https://cdn.example.com/joes.png").unwrap();
        assert_eq!(cache.get("joe's hardware").unwrap(), None);
    }

    #[test]
    fn corrupt_file_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logos.json");
        std::fs::write(&path, "{ not json").unwrap();
        let cache = JsonFileCache::new(&path);
        assert!(matches!(
            cache.get("A"),
            Err(BrandingError::CacheParse { .. })
        ));
    }
}
