//! Bounded LRU set of canonical state keys.
//!
//! The search prunes any node whose canonical id it has already entered.
//! The set is strict least-recently-used: a hit refreshes the key, an
//! insert beyond capacity evicts the stalest key.

use std::num::NonZeroUsize;

use fxhash::FxBuildHasher;
use lru::LruCache;

/// Default bound on remembered state keys.
pub const DEFAULT_MAX_KEYS: usize = 1_000_000;

pub struct TranspositionCache {
    keys: LruCache<String, (), FxBuildHasher>,
}

impl TranspositionCache {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_MAX_KEYS)
    }

    pub fn with_capacity(max_keys: usize) -> Self {
        let capacity = NonZeroUsize::new(max_keys.max(1)).unwrap();
        TranspositionCache {
            keys: LruCache::with_hasher(capacity, FxBuildHasher::default()),
        }
    }

    /// Membership test; a hit refreshes the key to most-recent.
    pub fn has(&mut self, key: &str) -> bool {
        self.keys.get(key).is_some()
    }

    /// Insert as most-recent, evicting the least-recent key past capacity.
    /// Re-adding an existing key refreshes it.
    pub fn add(&mut self, key: String) {
        self.keys.put(key, ());
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }
}

impl Default for TranspositionCache {
    fn default() -> Self {
        Self::new()
    }
}
