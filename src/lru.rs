//! Weighted Least Recently Used (LRU) Cache Implementation
//!
//! This module provides a memory-efficient LRU cache whose capacity is a
//! weight budget: every entry carries a strictly positive weight, and the
//! cache admits entries only while the sum of resident weights fits the
//! budget. When an insertion needs room, entries are evicted strictly in
//! least-recently-used order, and only as many as the incoming weight
//! requires.
//!
//! # Algorithm
//!
//! The cache maintains items in order of recency of use. A lookup promotes
//! its entry to the most recently used position; a `get` is a write with
//! respect to ordering, even though the stored value is unchanged. Eviction
//! pops from the least recently used end until the incoming weight fits,
//! which makes the evicted set the minimal recency-ordered prefix that can
//! free the required capacity.
//!
//! # Performance Characteristics
//!
//! - **Time Complexity**:
//!   - Get: O(1)
//!   - Put: O(1) amortized (O(k) when k entries must be evicted)
//!   - Remove: O(1)
//!
//! - **Space Complexity**:
//!   - O(n) where n is the number of resident entries; nodes live in a
//!     contiguous arena whose vacated slots are recycled
//!
//! # Thread Safety
//!
//! This implementation is not thread-safe. Every operation, including `get`,
//! mutates the recency order, so concurrent callers must serialize all
//! access: wrap the cache in a `Mutex`, or use
//! [`ConcurrentWeightedLruCache`](crate::concurrent::ConcurrentWeightedLruCache)
//! (feature `concurrent`), which does exactly that.

extern crate alloc;

use crate::config::WeightedLruConfig;
use crate::entry::CacheEntry;
use crate::error::{CacheError, Result};
use crate::list::{List, NodeIndex};
use crate::metrics::{CacheMetrics, CoreCacheMetrics};
use crate::weight::WeightBudget;
use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use core::borrow::Borrow;
use core::hash::{BuildHasher, Hash};

#[cfg(feature = "hashbrown")]
use hashbrown::DefaultHashBuilder;
#[cfg(feature = "hashbrown")]
use hashbrown::HashMap;

#[cfg(not(feature = "hashbrown"))]
extern crate std;
#[cfg(not(feature = "hashbrown"))]
use std::collections::hash_map::RandomState as DefaultHashBuilder;
#[cfg(not(feature = "hashbrown"))]
use std::collections::HashMap;

/// Internal weighted LRU segment containing the actual cache algorithm.
///
/// This is shared between `WeightedLruCache` (single-threaded) and
/// `ConcurrentWeightedLruCache` (multi-threaded). All algorithm logic is
/// implemented here to avoid code duplication.
///
/// The segment couples three structures that must stay in lockstep after
/// every operation: the key index (key → recency node), the recency list
/// (entries ordered most to least recently used), and the weight budget
/// (aggregate resident weight vs capacity).
pub(crate) struct WeightedLruSegment<K, V, S = DefaultHashBuilder> {
    map: HashMap<K, NodeIndex, S>,
    list: List<CacheEntry<K, V>>,
    budget: WeightBudget,
    metrics: CoreCacheMetrics,
}

impl<K: Hash + Eq, V, S: BuildHasher> WeightedLruSegment<K, V, S> {
    pub(crate) fn with_hasher(config: WeightedLruConfig, hash_builder: S) -> Self {
        WeightedLruSegment {
            map: HashMap::with_hasher(hash_builder),
            list: List::new(),
            budget: WeightBudget::new(config.capacity),
            metrics: CoreCacheMetrics::new(config.capacity.get()),
        }
    }

    /// Total weight capacity.
    #[inline]
    pub(crate) fn capacity(&self) -> u64 {
        self.budget.capacity()
    }

    /// Aggregate weight of all resident entries.
    #[inline]
    pub(crate) fn size(&self) -> u64 {
        self.budget.current()
    }

    /// Number of resident entries.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.map.len()
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub(crate) fn get<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let idx = match self.map.get(key).copied() {
            Some(idx) => idx,
            None => {
                self.metrics.record_miss();
                return None;
            }
        };
        self.list.move_to_front(idx);
        match self.list.get(idx) {
            Some(entry) => {
                self.metrics.record_hit(entry.weight);
                Some(&entry.value)
            }
            None => unreachable!("key index points at a vacant recency slot"),
        }
    }

    pub(crate) fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let idx = match self.map.get(key).copied() {
            Some(idx) => idx,
            None => {
                self.metrics.record_miss();
                return None;
            }
        };
        self.list.move_to_front(idx);
        let weight = match self.list.get(idx) {
            Some(entry) => entry.weight,
            None => unreachable!("key index points at a vacant recency slot"),
        };
        self.metrics.record_hit(weight);
        self.list.get_mut(idx).map(|entry| &mut entry.value)
    }

    /// Reads a value without promoting it or touching the metrics.
    pub(crate) fn peek<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let idx = self.map.get(key).copied()?;
        self.list.get(idx).map(|entry| &entry.value)
    }

    pub(crate) fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.map.contains_key(key)
    }

    pub(crate) fn remove<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let idx = match self.map.remove(key) {
            Some(idx) => idx,
            None => return false,
        };
        match self.list.remove(idx) {
            Some(entry) => self.budget.release(entry.weight),
            None => unreachable!("key index points at a vacant recency slot"),
        }
        self.metrics.record_removal();
        true
    }

    pub(crate) fn clear(&mut self) {
        self.map.clear();
        self.list.clear();
        self.budget.reset();
    }

    /// Evicts least-recently-used entries until `incoming` fits the budget.
    ///
    /// Eviction order is exactly recency order; the loop stops as soon as
    /// the incoming weight fits, so the evicted set is the minimal LRU
    /// prefix. Failure is only reachable when `incoming` exceeds the whole
    /// capacity, since a fully drained cache holds zero weight.
    fn make_room(&mut self, incoming: u64) -> Result<()> {
        while self.budget.would_exceed(incoming) {
            match self.list.remove_last() {
                Some(victim) => {
                    self.map.remove(&victim.key);
                    self.budget.release(victim.weight);
                    self.metrics.record_eviction(victim.weight);
                }
                None => {
                    return Err(CacheError::WeightExceedsCapacity {
                        weight: incoming,
                        capacity: self.budget.capacity(),
                    })
                }
            }
        }
        Ok(())
    }

    pub(crate) fn metrics_report(&self) -> BTreeMap<String, f64> {
        let mut report = self.metrics.to_btreemap();
        report.insert("current_weight".to_string(), self.budget.current() as f64);
        report.insert(
            "utilization".to_string(),
            self.budget.current() as f64 / self.budget.capacity() as f64,
        );
        report
    }
}

impl<K: Hash + Eq + Clone, V, S: BuildHasher> WeightedLruSegment<K, V, S> {
    pub(crate) fn put(&mut self, key: K, value: V, weight: u64) -> Result<()> {
        if weight == 0 {
            return Err(CacheError::InvalidWeight);
        }
        if weight > self.budget.capacity() {
            // Rejecting an oversized replacement must not destroy the
            // entry currently stored under the key.
            return Err(CacheError::WeightExceedsCapacity {
                weight,
                capacity: self.budget.capacity(),
            });
        }

        // Replacing a key is a full destroy/create pair, never a partial
        // mutation, so the weight accounting stays exact.
        if let Some(idx) = self.map.remove(&key) {
            match self.list.remove(idx) {
                Some(old) => self.budget.release(old.weight),
                None => unreachable!("key index points at a vacant recency slot"),
            }
        }

        self.make_room(weight)?;

        let idx = self
            .list
            .push_front(CacheEntry::new(key.clone(), value, weight));
        self.map.insert(key, idx);
        self.budget.admit(weight);
        self.metrics.record_insertion(weight);
        Ok(())
    }
}

impl<K, V, S> core::fmt::Debug for WeightedLruSegment<K, V, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("WeightedLruSegment")
            .field("capacity", &self.budget.capacity())
            .field("current_weight", &self.budget.current())
            .field("len", &self.map.len())
            .finish()
    }
}

/// A weighted Least Recently Used (LRU) cache.
///
/// The cache has a fixed weight capacity. Every entry carries a strictly
/// positive weight; insertions evict least-recently-used entries until the
/// incoming weight fits, and an entry heavier than the whole capacity is
/// rejected without touching the cache.
///
/// All operations are O(1): the key index gives O(1) lookup, and the
/// recency order is an arena-backed linked list with O(1) promotion and
/// removal at any position.
///
/// # Examples
///
/// ```
/// use weighted_lru::WeightedLruCache;
///
/// let mut cache = WeightedLruCache::new(10).unwrap();
///
/// cache.put("a", 1, 3).unwrap();
/// cache.put("b", 2, 4).unwrap();
///
/// // Accessing an entry updates its recency
/// assert_eq!(cache.get(&"a"), Some(&1));
///
/// // Inserting beyond the budget evicts the least recently used entries
/// cache.put("c", 3, 5).unwrap();
/// assert_eq!(cache.get(&"b"), None);
/// assert_eq!(cache.get(&"a"), Some(&1));
/// assert_eq!(cache.get(&"c"), Some(&3));
/// assert_eq!(cache.size(), 8);
/// ```
pub struct WeightedLruCache<K, V, S = DefaultHashBuilder> {
    segment: WeightedLruSegment<K, V, S>,
}

impl<K, V, S> core::fmt::Debug for WeightedLruCache<K, V, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("WeightedLruCache")
            .field("segment", &self.segment)
            .finish()
    }
}

impl<K: Hash + Eq, V> WeightedLruCache<K, V, DefaultHashBuilder> {
    /// Creates a cache with the given weight capacity.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::InvalidCapacity`] if `capacity` is zero; no
    /// cache is produced in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use weighted_lru::{CacheError, WeightedLruCache};
    ///
    /// let cache: WeightedLruCache<String, u32> = WeightedLruCache::new(100).unwrap();
    /// assert_eq!(cache.capacity(), 100);
    ///
    /// let err = WeightedLruCache::<String, u32>::new(0).unwrap_err();
    /// assert_eq!(err, CacheError::InvalidCapacity);
    /// ```
    pub fn new(capacity: u64) -> Result<Self> {
        Ok(Self::init(WeightedLruConfig::new(capacity)?, None))
    }

    /// Creates a cache from a configuration with an optional hasher.
    pub fn init(config: WeightedLruConfig, hasher: Option<DefaultHashBuilder>) -> Self {
        Self {
            segment: WeightedLruSegment::with_hasher(config, hasher.unwrap_or_default()),
        }
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> WeightedLruCache<K, V, S> {
    /// Creates a cache with the specified configuration and hash builder.
    ///
    /// Use this for deterministic hashing or DoS-resistant hashers.
    pub fn with_hasher(config: WeightedLruConfig, hash_builder: S) -> Self {
        Self {
            segment: WeightedLruSegment::with_hasher(config, hash_builder),
        }
    }

    /// Returns the total weight capacity.
    #[inline]
    pub fn capacity(&self) -> u64 {
        self.segment.capacity()
    }

    /// Returns the aggregate weight of all resident entries.
    ///
    /// Always equal to the exact sum of the weights of the entries
    /// currently present, and never greater than [`capacity`](Self::capacity).
    #[inline]
    pub fn size(&self) -> u64 {
        self.segment.size()
    }

    /// Returns the number of resident entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.segment.len()
    }

    /// Returns `true` if the cache holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segment.is_empty()
    }

    /// Returns a reference to the value for `key`, promoting the entry to
    /// the most recently used position.
    ///
    /// A `get` counts as a use: a subsequent eviction will prefer every
    /// entry that was touched less recently. A miss has no side effects.
    #[inline]
    pub fn get<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.segment.get(key)
    }

    /// Returns a mutable reference to the value for `key`, promoting the
    /// entry to the most recently used position.
    #[inline]
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.segment.get_mut(key)
    }

    /// Returns a reference to the value for `key` without promoting it.
    ///
    /// Unlike [`get`](Self::get), a `peek` does not count as a use with
    /// respect to the recency order and is not recorded in the metrics.
    #[inline]
    pub fn peek<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.segment.peek(key)
    }

    /// Returns `true` if the cache holds an entry for `key`, without
    /// promoting it.
    #[inline]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.segment.contains_key(key)
    }

    /// Removes the entry for `key`, releasing its weight.
    ///
    /// Returns whether the key was present.
    #[inline]
    pub fn remove<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.segment.remove(key)
    }

    /// Removes all entries at once. The weight returns to zero; lifetime
    /// metrics are kept.
    #[inline]
    pub fn clear(&mut self) {
        self.segment.clear()
    }
}

impl<K: Hash + Eq + Clone, V, S: BuildHasher> WeightedLruCache<K, V, S> {
    /// Inserts `value` under `key` with the given weight.
    ///
    /// If the key is already present, its current entry is destroyed and
    /// replaced; the aggregate weight changes by exactly
    /// `new_weight - old_weight` (after any eviction needed for the
    /// difference). The new entry lands at the most recently used position
    /// either way.
    ///
    /// # Errors
    ///
    /// - [`CacheError::InvalidWeight`] if `weight` is zero.
    /// - [`CacheError::WeightExceedsCapacity`] if `weight` exceeds the
    ///   cache's total capacity.
    ///
    /// On error the cache is left exactly as it was; in particular, an
    /// existing entry under `key` survives an oversized replacement.
    ///
    /// # Examples
    ///
    /// ```
    /// use weighted_lru::{CacheError, WeightedLruCache};
    ///
    /// let mut cache = WeightedLruCache::new(10).unwrap();
    /// cache.put("a", 1, 4).unwrap();
    ///
    /// assert_eq!(
    ///     cache.put("a", 2, 15),
    ///     Err(CacheError::WeightExceedsCapacity { weight: 15, capacity: 10 })
    /// );
    /// // The original entry is untouched.
    /// assert_eq!(cache.peek(&"a"), Some(&1));
    /// ```
    #[inline]
    pub fn put(&mut self, key: K, value: V, weight: u64) -> Result<()> {
        self.segment.put(key, value, weight)
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> CacheMetrics for WeightedLruCache<K, V, S> {
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.segment.metrics_report()
    }

    fn algorithm_name(&self) -> &'static str {
        "Weighted-LRU"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::String;

    fn make_cache<K: Hash + Eq + Clone, V>(capacity: u64) -> WeightedLruCache<K, V> {
        WeightedLruCache::new(capacity).unwrap()
    }

    #[test]
    fn test_get_put() {
        let mut cache = make_cache(10);
        cache.put("apple", 1, 3).unwrap();
        cache.put("banana", 2, 4).unwrap();

        assert_eq!(cache.get(&"apple"), Some(&1));
        assert_eq!(cache.get(&"banana"), Some(&2));
        assert_eq!(cache.get(&"cherry"), None);
        assert_eq!(cache.size(), 7);
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_eviction_frees_minimal_prefix() {
        let mut cache = make_cache(10);
        cache.put("a", 1, 3).unwrap();
        cache.put("b", 2, 4).unwrap();

        // Needs 5; evicting "a" (LRU) frees 3, which is enough.
        cache.put("c", 3, 5).unwrap();
        assert_eq!(cache.get(&"a"), None);
        assert_eq!(cache.get(&"b"), Some(&2));
        assert_eq!(cache.get(&"c"), Some(&3));
        assert_eq!(cache.size(), 9);
    }

    #[test]
    fn test_promotion_changes_eviction_order() {
        let mut cache = make_cache(10);
        cache.put("a", 1, 5).unwrap();
        cache.put("b", 2, 5).unwrap();

        // Touch "a" so "b" becomes the eviction candidate.
        assert_eq!(cache.get(&"a"), Some(&1));
        cache.put("c", 3, 5).unwrap();

        assert_eq!(cache.get(&"b"), None);
        assert_eq!(cache.get(&"a"), Some(&1));
        assert_eq!(cache.get(&"c"), Some(&3));
    }

    #[test]
    fn test_put_existing_key_updates_accounting() {
        let mut cache = make_cache(10);
        cache.put("a", 1, 3).unwrap();
        cache.put("a", 10, 8).unwrap();

        assert_eq!(cache.size(), 8);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get(&"a"), Some(&10));
    }

    #[test]
    fn test_invalid_weight_rejected() {
        let mut cache = make_cache(10);
        assert_eq!(cache.put("a", 1, 0), Err(CacheError::InvalidWeight));
        assert!(cache.is_empty());
        assert_eq!(cache.size(), 0);
    }

    #[test]
    fn test_oversized_put_rejected_without_mutation() {
        let mut cache = make_cache(10);
        assert_eq!(
            cache.put("huge", 1, 15),
            Err(CacheError::WeightExceedsCapacity {
                weight: 15,
                capacity: 10
            })
        );
        assert!(cache.is_empty());
        assert_eq!(cache.size(), 0);
    }

    #[test]
    fn test_oversized_replacement_keeps_existing_entry() {
        let mut cache = make_cache(10);
        cache.put("a", 1, 4).unwrap();
        cache.put("b", 2, 3).unwrap();

        assert!(cache.put("a", 9, 11).is_err());

        // Neither the entry nor its recency position moved: "a" is still
        // the older of the two and the first to go.
        assert_eq!(cache.peek(&"a"), Some(&1));
        assert_eq!(cache.size(), 7);
        cache.put("c", 3, 7).unwrap();
        assert_eq!(cache.peek(&"a"), None);
        assert_eq!(cache.peek(&"b"), Some(&2));
        assert_eq!(cache.peek(&"c"), Some(&3));
        assert_eq!(cache.size(), 10);
    }

    #[test]
    fn test_exact_fit_does_not_evict() {
        let mut cache = make_cache(10);
        cache.put("a", 1, 5).unwrap();
        cache.put("b", 2, 5).unwrap();
        assert_eq!(cache.size(), 10);
        assert_eq!(cache.len(), 2);

        cache.put("c", 3, 5).unwrap();
        assert_eq!(cache.get(&"a"), None);
        assert_eq!(cache.size(), 10);
    }

    #[test]
    fn test_remove() {
        let mut cache = make_cache(10);
        cache.put("apple", 1, 4).unwrap();
        cache.put("banana", 2, 4).unwrap();

        assert!(cache.remove(&"apple"));
        assert_eq!(cache.get(&"apple"), None);
        assert_eq!(cache.size(), 4);
        assert_eq!(cache.len(), 1);

        assert!(!cache.remove(&"cherry"));
        assert!(!cache.remove(&"apple"));
    }

    #[test]
    fn test_peek_does_not_promote() {
        let mut cache = make_cache(10);
        cache.put("a", 1, 5).unwrap();
        cache.put("b", 2, 5).unwrap();

        // A peek at "a" must not save it from eviction.
        assert_eq!(cache.peek(&"a"), Some(&1));
        cache.put("c", 3, 5).unwrap();
        assert_eq!(cache.peek(&"a"), None);
        assert_eq!(cache.peek(&"b"), Some(&2));
    }

    #[test]
    fn test_get_mut() {
        let mut cache = make_cache(10);
        cache.put("apple", 1, 4).unwrap();
        if let Some(v) = cache.get_mut(&"apple") {
            *v = 3;
        }
        assert_eq!(cache.get(&"apple"), Some(&3));
        assert_eq!(cache.size(), 4);
    }

    #[test]
    fn test_clear() {
        let mut cache = make_cache(10);
        cache.put("apple", 1, 4).unwrap();
        cache.put("banana", 2, 4).unwrap();
        cache.clear();

        assert_eq!(cache.len(), 0);
        assert_eq!(cache.size(), 0);
        assert!(cache.is_empty());

        cache.put("cherry", 3, 10).unwrap();
        assert_eq!(cache.get(&"cherry"), Some(&3));
    }

    #[test]
    fn test_string_keys_borrowed_lookup() {
        let mut cache = make_cache(10);
        cache.put(String::from("apple"), 1, 3).unwrap();
        cache.put(String::from("banana"), 2, 3).unwrap();

        assert_eq!(cache.get("apple"), Some(&1));
        assert_eq!(cache.get("banana"), Some(&2));
        assert!(cache.contains_key("apple"));
        assert!(cache.remove("banana"));
    }

    #[test]
    fn test_eviction_spans_multiple_entries() {
        let mut cache = make_cache(10);
        cache.put("a", 1, 2).unwrap();
        cache.put("b", 2, 3).unwrap();
        cache.put("c", 3, 4).unwrap();

        // Needs 8 against a budget of 10: every resident entry must go.
        cache.put("d", 4, 8).unwrap();
        assert_eq!(cache.peek(&"a"), None);
        assert_eq!(cache.peek(&"b"), None);
        assert_eq!(cache.peek(&"c"), None);
        assert_eq!(cache.peek(&"d"), Some(&4));
        assert_eq!(cache.size(), 8);
    }

    #[test]
    fn test_metrics() {
        let mut cache = make_cache(10);
        let report = cache.metrics();
        assert_eq!(report.get("requests"), Some(&0.0));
        assert_eq!(report.get("cache_hits"), Some(&0.0));

        cache.put("apple", 1, 4).unwrap();
        cache.put("banana", 2, 4).unwrap();
        cache.get(&"apple");
        cache.get(&"missing");

        let report = cache.metrics();
        assert_eq!(report.get("requests"), Some(&2.0));
        assert_eq!(report.get("cache_hits"), Some(&1.0));
        assert_eq!(report.get("cache_misses"), Some(&1.0));
        assert_eq!(report.get("current_weight"), Some(&8.0));
        assert_eq!(report.get("weight_served"), Some(&4.0));

        cache.put("cherry", 3, 5).unwrap();
        let report = cache.metrics();
        assert_eq!(report.get("evictions"), Some(&1.0));
        assert!(report.get("utilization").unwrap() > &0.0);
        assert_eq!(cache.algorithm_name(), "Weighted-LRU");
    }

    #[derive(Debug, Clone, Eq, PartialEq)]
    struct ComplexValue {
        val: i32,
        description: String,
    }

    #[test]
    fn test_complex_values() {
        let mut cache = make_cache(10);
        cache
            .put(
                String::from("apple"),
                ComplexValue {
                    val: 1,
                    description: String::from("First fruit"),
                },
                6,
            )
            .unwrap();

        assert_eq!(cache.get(&String::from("apple")).unwrap().val, 1);

        cache
            .put(
                String::from("banana"),
                ComplexValue {
                    val: 2,
                    description: String::from("Second fruit"),
                },
                6,
            )
            .unwrap();

        // 6 + 6 > 10: "apple" was evicted.
        assert_eq!(cache.get(&String::from("apple")), None);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_segment_directly() {
        let mut segment: WeightedLruSegment<&str, i32, DefaultHashBuilder> =
            WeightedLruSegment::with_hasher(
                WeightedLruConfig::new(10).unwrap(),
                DefaultHashBuilder::default(),
            );
        assert_eq!(segment.len(), 0);
        assert!(segment.is_empty());
        assert_eq!(segment.capacity(), 10);

        segment.put("a", 1, 4).unwrap();
        segment.put("b", 2, 4).unwrap();
        assert_eq!(segment.len(), 2);
        assert_eq!(segment.size(), 8);
        assert_eq!(segment.get(&"a"), Some(&1));
    }
}
