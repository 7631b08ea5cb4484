//! Address-geocode cache shared across pipelines and batch runs.

use dashmap::DashMap;

/// A previously resolved geocode result.
#[derive(Debug, Clone, PartialEq)]
pub struct CachedLocation {
    pub lat: f64,
    pub lon: f64,
    /// Display label returned by the provider, when it supplied one
    pub resolved_address: Option<String>,
}

/// Process-lifetime geocode cache, keyed by normalized address text.
///
/// Entries are never evicted or expired; the cache grows monotonically and
/// is shared by reference across concurrent pipelines. Duplicate
/// population of the same key is harmless — entries are value-equal for a
/// given key, so the last write wins without locking.
#[derive(Debug, Default)]
pub struct GeocodeCache {
    entries: DashMap<String, CachedLocation>,
}

impl GeocodeCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalized lookup key: lowercased, whitespace-trimmed address text.
    pub fn normalize_key(address: &str) -> String {
        address.to_lowercase().trim().to_string()
    }

    /// Look up a previously resolved address.
    pub fn get(&self, address: &str) -> Option<CachedLocation> {
        self.entries
            .get(&Self::normalize_key(address))
            .map(|entry| entry.value().clone())
    }

    /// Store a resolved address under its normalized key.
    pub fn insert(&self, address: &str, location: CachedLocation) {
        self.entries.insert(Self::normalize_key(address), location);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
