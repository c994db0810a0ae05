//! Bounded query cache with LRU eviction and entry expiry
//!
//! The cache is an explicit object owned by whoever needs memoization, not
//! process-wide state. Values are shared as `Arc`s so a hit never copies the
//! cached result.

use lru::LruCache;
use parking_lot::Mutex;
use serde::Serialize;
use std::num::NonZeroUsize;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

#[derive(Debug)]
struct CacheEntry<V> {
    value: Arc<V>,
    inserted_at: Instant,
}

/// Snapshot of cache counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub entries: usize,
    pub capacity: usize,
}

impl CacheStats {
    /// Hit rate as a percentage of all lookups
    pub fn hit_rate(&self) -> f64 {
        let lookups = self.hits + self.misses;
        if lookups == 0 {
            0.0
        } else {
            (self.hits as f64 / lookups as f64) * 100.0
        }
    }
}

/// Thread-safe memoization cache keyed by the exact query string
///
/// A capacity of zero disables caching entirely; every lookup misses and
/// nothing is stored. The lock is held only for lookup and insertion, never
/// while a value is being computed.
#[derive(Debug)]
pub struct QueryCache<V> {
    entries: Option<Mutex<LruCache<String, CacheEntry<V>>>>,
    ttl: Option<Duration>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl<V> QueryCache<V> {
    /// Create a cache holding at most `capacity` entries
    ///
    /// Entries older than `ttl` are treated as absent; `None` keeps entries
    /// until they are evicted.
    pub fn new(capacity: usize, ttl: Option<Duration>) -> Self {
        Self {
            entries: NonZeroUsize::new(capacity).map(|cap| Mutex::new(LruCache::new(cap))),
            ttl,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Create a cache that never stores anything
    pub fn disabled() -> Self {
        Self::new(0, None)
    }

    /// Whether the cache stores entries at all
    pub fn is_enabled(&self) -> bool {
        self.entries.is_some()
    }

    /// Maximum number of entries
    pub fn capacity(&self) -> usize {
        self.entries
            .as_ref()
            .map_or(0, |entries| entries.lock().cap().get())
    }

    /// Current number of entries, including expired ones not yet purged
    pub fn len(&self) -> usize {
        self.entries.as_ref().map_or(0, |entries| entries.lock().len())
    }

    /// Whether the cache holds no entries
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every entry
    pub fn clear(&self) {
        if let Some(entries) = &self.entries {
            entries.lock().clear();
        }
    }

    /// Look up a fresh entry, marking it most recently used
    pub fn get(&self, key: &str) -> Option<Arc<V>> {
        let found = self.lookup(key);
        let counter = if found.is_some() {
            &self.hits
        } else {
            &self.misses
        };
        counter.fetch_add(1, Ordering::Relaxed);
        found
    }

    /// Insert a value unless a fresh entry already exists for the key
    ///
    /// Returns whichever value ends up cached, so concurrent callers racing
    /// on the same key all observe one shared result.
    pub fn insert_or_fetch(&self, key: &str, value: Arc<V>) -> Arc<V> {
        let Some(entries) = &self.entries else {
            return value;
        };

        let mut entries = entries.lock();
        if let Some(existing) = entries.get(key) {
            if self.is_fresh(existing) {
                return Arc::clone(&existing.value);
            }
        }

        entries.put(
            key.to_string(),
            CacheEntry {
                value: Arc::clone(&value),
                inserted_at: Instant::now(),
            },
        );
        value
    }

    /// Return the cached value for `key`, computing it on a miss
    ///
    /// `compute` runs without the lock held.
    pub fn get_or_compute<F>(&self, key: &str, compute: F) -> Arc<V>
    where
        F: FnOnce() -> V,
    {
        if let Some(value) = self.get(key) {
            return value;
        }
        self.insert_or_fetch(key, Arc::new(compute()))
    }

    /// Current counters
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries: self.len(),
            capacity: self.capacity(),
        }
    }

    fn lookup(&self, key: &str) -> Option<Arc<V>> {
        let mut entries = self.entries.as_ref()?.lock();

        let expired = match entries.get(key) {
            Some(entry) if self.is_fresh(entry) => return Some(Arc::clone(&entry.value)),
            Some(_) => true,
            None => false,
        };

        if expired {
            entries.pop(key);
        }
        None
    }

    fn is_fresh(&self, entry: &CacheEntry<V>) -> bool {
        self.ttl
            .is_none_or(|ttl| entry.inserted_at.elapsed() < ttl)
    }
}
