//! Concurrent Weighted LRU Cache Implementation
//!
//! A thread-safe wrapper around the weighted LRU cache. This is the
//! multi-threaded counterpart to [`WeightedLruCache`](crate::WeightedLruCache).
//!
//! # How It Works
//!
//! The cache is one logical resource: every operation - including `get`,
//! which promotes the entry it finds - mutates the recency order, so there
//! are no read-only operations to run in parallel. The wrapper therefore
//! serializes all access through a single `parking_lot::Mutex`:
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │        ConcurrentWeightedLruCache            │
//! │                                              │
//! │   get / put / remove / size / len            │
//! │        │                                     │
//! │   ┌────▼────┐      ┌──────────────────────┐  │
//! │   │  Mutex  │─────▶│ WeightedLruSegment   │  │
//! │   └─────────┘      │ (map + list + budget)│  │
//! │                    └──────────────────────┘  │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! ## Why not lock striping?
//!
//! Sharding the key space across independently locked segments scales
//! better, but recency order becomes per-segment: a shard may evict an
//! entry while another shard holds strictly older ones, and the minimal
//! eviction guarantee no longer holds globally. This wrapper keeps the
//! exact global order; embedders who can accept approximate ordering can
//! shard instances of [`WeightedLruCache`] themselves.
//!
//! # When to Use
//!
//! **Use ConcurrentWeightedLruCache when:**
//! - Multiple threads need cache access with exact LRU semantics
//! - Critical sections are short (all operations are O(1) amortized)
//!
//! **Consider alternatives when:**
//! - Single-threaded access only → use `WeightedLruCache`
//! - Extremely hot read paths that cannot tolerate one lock → shard
//!   per-key-space instances and accept per-shard ordering
//!
//! # Thread Safety
//!
//! `ConcurrentWeightedLruCache` is `Send + Sync` and can be shared via
//! `Arc`.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use std::thread;
//! use weighted_lru::ConcurrentWeightedLruCache;
//!
//! let cache = Arc::new(ConcurrentWeightedLruCache::new(1024).unwrap());
//!
//! let handles: Vec<_> = (0..4).map(|i| {
//!     let cache = Arc::clone(&cache);
//!     thread::spawn(move || {
//!         for j in 0..100 {
//!             cache.put(format!("key-{}-{}", i, j), j, 8).unwrap();
//!         }
//!     })
//! }).collect();
//!
//! for h in handles {
//!     h.join().unwrap();
//! }
//!
//! assert!(cache.size() <= cache.capacity());
//! ```

extern crate alloc;

use crate::config::WeightedLruConfig;
use crate::error::Result;
use crate::lru::WeightedLruSegment;
use crate::metrics::CacheMetrics;
use alloc::collections::BTreeMap;
use alloc::string::String;
use core::borrow::Borrow;
use core::hash::{BuildHasher, Hash};
use parking_lot::Mutex;

#[cfg(feature = "hashbrown")]
use hashbrown::DefaultHashBuilder;

#[cfg(not(feature = "hashbrown"))]
extern crate std;
#[cfg(not(feature = "hashbrown"))]
use std::collections::hash_map::RandomState as DefaultHashBuilder;

/// A thread-safe weighted LRU cache.
///
/// All operations are serialized through one exclusive lock, so the global
/// recency order is exact, and with it the minimal-eviction guarantee.
/// Callers observe no blocking other than waiting for the lock under
/// contention; every operation completes in bounded time.
///
/// # Type Parameters
///
/// - `K`: Key type. Must implement `Hash + Eq`.
/// - `V`: Value type. `get` requires `V: Clone` to avoid handing out
///   references that outlive the critical section; use
///   [`get_with`](Self::get_with) to read without cloning.
/// - `S`: Hash builder type. Defaults to `DefaultHashBuilder`.
pub struct ConcurrentWeightedLruCache<K, V, S = DefaultHashBuilder> {
    inner: Mutex<WeightedLruSegment<K, V, S>>,
}

impl<K: Hash + Eq, V> ConcurrentWeightedLruCache<K, V, DefaultHashBuilder> {
    /// Creates a concurrent cache with the given weight capacity.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::InvalidCapacity`](crate::CacheError::InvalidCapacity)
    /// if `capacity` is zero.
    pub fn new(capacity: u64) -> Result<Self> {
        Ok(Self::init(WeightedLruConfig::new(capacity)?, None))
    }

    /// Creates a concurrent cache from a configuration with an optional
    /// hasher.
    pub fn init(config: WeightedLruConfig, hasher: Option<DefaultHashBuilder>) -> Self {
        Self {
            inner: Mutex::new(WeightedLruSegment::with_hasher(
                config,
                hasher.unwrap_or_default(),
            )),
        }
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> ConcurrentWeightedLruCache<K, V, S> {
    /// Creates a concurrent cache with a custom hash builder.
    ///
    /// Use this for deterministic hashing or DoS-resistant hashers.
    pub fn with_hasher(config: WeightedLruConfig, hash_builder: S) -> Self {
        Self {
            inner: Mutex::new(WeightedLruSegment::with_hasher(config, hash_builder)),
        }
    }

    /// Returns the total weight capacity.
    pub fn capacity(&self) -> u64 {
        self.inner.lock().capacity()
    }

    /// Returns the aggregate weight of all resident entries.
    ///
    /// The value is exact at the time the lock is held, but may be stale by
    /// the time the caller inspects it under concurrent mutation.
    pub fn size(&self) -> u64 {
        self.inner.lock().size()
    }

    /// Returns the number of resident entries.
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// Returns `true` if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Retrieves a value from the cache, promoting it to the most recently
    /// used position.
    ///
    /// Returns a **clone** of the value to avoid holding the lock. For
    /// reads that don't need ownership, use [`get_with`](Self::get_with).
    pub fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
        V: Clone,
    {
        self.inner.lock().get(key).cloned()
    }

    /// Retrieves a value and applies a function to it while holding the
    /// lock.
    ///
    /// More efficient than [`get`](Self::get) when you only need to read
    /// from the value, as it avoids cloning. Promotes the entry. The lock
    /// is released after `f` returns, so keep `f` short.
    pub fn get_with<Q, F, R>(&self, key: &Q, f: F) -> Option<R>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
        F: FnOnce(&V) -> R,
    {
        self.inner.lock().get(key).map(f)
    }

    /// Retrieves a mutable reference and applies a function to it.
    ///
    /// Allows in-place modification of cached values without removing
    /// them. Promotes the entry.
    pub fn get_mut_with<Q, F, R>(&self, key: &Q, f: F) -> Option<R>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
        F: FnOnce(&mut V) -> R,
    {
        self.inner.lock().get_mut(key).map(f)
    }

    /// Checks whether the cache holds an entry for `key`.
    ///
    /// A pure existence check: the entry is **not** promoted.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.inner.lock().contains_key(key)
    }

    /// Removes the entry for `key`, releasing its weight.
    ///
    /// Returns whether the key was present.
    pub fn remove<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.inner.lock().remove(key)
    }

    /// Removes all entries.
    pub fn clear(&self) {
        self.inner.lock().clear();
    }
}

impl<K: Hash + Eq + Clone, V, S: BuildHasher> ConcurrentWeightedLruCache<K, V, S> {
    /// Inserts `value` under `key` with the given weight.
    ///
    /// Semantics are identical to
    /// [`WeightedLruCache::put`](crate::WeightedLruCache::put): the whole
    /// five-step sequence (validation, replacement, eviction, insertion)
    /// runs inside one critical section, so concurrent observers see either
    /// the cache before the put or after it, never in between.
    pub fn put(&self, key: K, value: V, weight: u64) -> Result<()> {
        self.inner.lock().put(key, value, weight)
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> CacheMetrics for ConcurrentWeightedLruCache<K, V, S> {
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.inner.lock().metrics_report()
    }

    fn algorithm_name(&self) -> &'static str {
        "Weighted-LRU"
    }
}

impl<K, V, S> core::fmt::Debug for ConcurrentWeightedLruCache<K, V, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ConcurrentWeightedLruCache").finish()
    }
}
