//! Bounded translation cache.
//!
//! Memoizes `(text, source_lang, target_lang) -> translation` with a hard
//! capacity. Once full the cache freezes: new entries are silently dropped
//! instead of evicting old ones. That fill-then-freeze behavior is
//! deliberate and pinned by tests; there is no eviction policy to tune.

use std::collections::HashMap;
use std::sync::Mutex;

type CacheKey = (String, String, String);

/// Counters and size exposed by [`TranslationCache::stats`].
#[derive(Debug, Clone, PartialEq)]
pub struct CacheStats {
    pub size: usize,
    pub hits: u64,
    pub misses: u64,
    /// Percentage of lookups that hit, 0.0 before any lookup.
    pub hit_rate: f64,
}

struct CacheInner {
    entries: HashMap<CacheKey, String>,
    hits: u64,
    misses: u64,
}

/// Fill-then-freeze memoization cache for translations.
///
/// Lookups and inserts are serialized by an internal mutex, so two threads
/// racing through a miss both re-validate capacity at insert time and the
/// last write wins. No operation here ever fails; absence is `None`.
pub struct TranslationCache {
    inner: Mutex<CacheInner>,
    capacity: usize,
}

impl TranslationCache {
    pub const DEFAULT_CAPACITY: usize = 1000;

    pub fn new(capacity: usize) -> Self {
        Self {
            inner: Mutex::new(CacheInner {
                entries: HashMap::new(),
                hits: 0,
                misses: 0,
            }),
            capacity,
        }
    }

    /// Exact-match lookup, case-sensitive, no normalization.
    pub fn get(&self, text: &str, source_lang: &str, target_lang: &str) -> Option<String> {
        let key = (
            text.to_string(),
            source_lang.to_string(),
            target_lang.to_string(),
        );
        let mut inner = self.inner.lock().unwrap();
        match inner.entries.get(&key).cloned() {
            Some(value) => {
                inner.hits += 1;
                Some(value)
            }
            None => {
                inner.misses += 1;
                None
            }
        }
    }

    /// Stores a translation unless the cache is already at capacity, in
    /// which case the value is silently discarded.
    pub fn insert(&self, text: &str, source_lang: &str, target_lang: &str, value: &str) {
        let key = (
            text.to_string(),
            source_lang.to_string(),
            target_lang.to_string(),
        );
        let mut inner = self.inner.lock().unwrap();
        // Overwrites of an existing key are allowed; only net growth is capped.
        if inner.entries.contains_key(&key) || inner.entries.len() < self.capacity {
            inner.entries.insert(key, value.to_string());
        }
    }

    /// Empties the entries. Hit/miss counters deliberately survive so the
    /// lifetime hit rate stays queryable; use [`reset_stats`] to drop them.
    ///
    /// [`reset_stats`]: TranslationCache::reset_stats
    pub fn clear(&self) {
        self.inner.lock().unwrap().entries.clear();
    }

    /// Zeroes the hit/miss counters.
    pub fn reset_stats(&self) {
        let mut inner = self.inner.lock().unwrap();
        inner.hits = 0;
        inner.misses = 0;
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn stats(&self) -> CacheStats {
        let inner = self.inner.lock().unwrap();
        let lookups = inner.hits + inner.misses;
        let hit_rate = if lookups > 0 {
            inner.hits as f64 / lookups as f64 * 100.0
        } else {
            0.0
        };
        CacheStats {
            size: inner.entries.len(),
            hits: inner.hits,
            misses: inner.misses,
            hit_rate,
        }
    }
}

impl Default for TranslationCache {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}
