//! Identity cache for hydrated models
//!
//! Every cacheable model is stored behind an `Arc` under its composite
//! string key, so two lookups of the same key hand back the same allocation
//! (`Arc::ptr_eq`). Entries are bounded by an LRU policy; callers can also
//! evict single keys or clear the whole cache.

use lru::LruCache;
use std::{fmt, num::NonZeroUsize, sync::Arc};
use tracing::debug;

/// Entries kept per entity type when no capacity is given.
pub const DEFAULT_CAPACITY: usize = 512;

/// Bounded map from cache key to a shared model instance.
pub struct IdentityCache<T> {
    name: &'static str,
    entries: LruCache<String, Arc<T>>,
}

impl<T> IdentityCache<T> {
    /// Create a cache holding at most `capacity` entries (minimum 1).
    pub fn new(name: &'static str, capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            name,
            entries: LruCache::new(capacity),
        }
    }

    /// Look up a key, marking it as recently used.
    pub fn get(&mut self, key: &str) -> Option<Arc<T>> {
        let hit = self.entries.get(key).cloned();
        debug!(
            cache = self.name,
            key,
            hit = hit.is_some(),
            "identity cache lookup"
        );
        hit
    }

    /// Look up a key without touching recency.
    pub fn peek(&self, key: &str) -> Option<&Arc<T>> {
        self.entries.peek(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains(key)
    }

    /// Store `value` under `key`, returning whatever it replaced.
    pub fn insert(&mut self, key: String, value: Arc<T>) -> Option<Arc<T>> {
        debug!(cache = self.name, key = key.as_str(), "identity cache insert");
        self.entries.put(key, value)
    }

    /// Remove a single entry.
    pub fn evict(&mut self, key: &str) -> Option<Arc<T>> {
        self.entries.pop(key)
    }

    pub fn clear(&mut self) {
        debug!(cache = self.name, "identity cache cleared");
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.entries.cap().get()
    }
}

impl<T> fmt::Debug for IdentityCache<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IdentityCache")
            .field("name", &self.name)
            .field("len", &self.entries.len())
            .field("capacity", &self.entries.cap())
            .finish()
    }
}
