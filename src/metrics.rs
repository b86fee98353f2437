//! Cache Metrics System
//!
//! Provides a metrics collection and reporting system for the cache using
//! BTreeMap-based reporting.
//!
//! # Why BTreeMap over HashMap?
//!
//! BTreeMap is used instead of HashMap for several reasons:
//! - **Deterministic ordering**: Metrics always appear in consistent order
//! - **Reproducible output**: Essential for testing and benchmark comparisons
//! - **Stable serialization**: JSON/CSV exports have predictable key ordering
//! - **Better debugging**: Consistent output makes logs more readable
//!
//! The performance difference (O(log n) vs O(1)) is negligible with ~10
//! metric keys, but the deterministic behavior matters for comparisons.

extern crate alloc;

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};

/// Counters tracked by the cache over its lifetime.
///
/// Weight fields are in the same unit as the cache capacity. Lifetime
/// counters only ever grow; the current resident weight is owned by the
/// cache's budget, not duplicated here.
#[derive(Debug, Default, Clone)]
pub struct CoreCacheMetrics {
    /// Total number of requests (gets) made to the cache
    pub requests: u64,

    /// Number of requests that resulted in cache hits
    pub cache_hits: u64,

    /// Total weight of entries served from the cache (hits only)
    pub weight_served: u64,

    /// Total weight admitted into the cache over its lifetime
    pub weight_admitted: u64,

    /// Total weight freed by capacity evictions
    pub weight_evicted: u64,

    /// Number of entries evicted due to capacity pressure
    pub evictions: u64,

    /// Number of entries removed explicitly by the caller
    pub removals: u64,

    /// The cache's total weight capacity
    pub capacity_weight: u64,
}

impl CoreCacheMetrics {
    /// Creates metrics for a cache with the given weight capacity.
    pub fn new(capacity_weight: u64) -> Self {
        Self {
            capacity_weight,
            ..Default::default()
        }
    }

    /// Records a cache hit serving an entry of the given weight.
    pub fn record_hit(&mut self, weight: u64) {
        self.requests += 1;
        self.cache_hits += 1;
        self.weight_served += weight;
    }

    /// Records a cache miss.
    ///
    /// Misses carry no weight: the cache never learns the cost of an entry
    /// it does not hold.
    pub fn record_miss(&mut self) {
        self.requests += 1;
    }

    /// Records admission of a new entry of the given weight.
    pub fn record_insertion(&mut self, weight: u64) {
        self.weight_admitted += weight;
    }

    /// Records a capacity eviction freeing the given weight.
    pub fn record_eviction(&mut self, weight: u64) {
        self.evictions += 1;
        self.weight_evicted += weight;
    }

    /// Records an explicit removal by the caller.
    pub fn record_removal(&mut self) {
        self.removals += 1;
    }

    /// Cache hit rate, 0.0 to 1.0. Zero when no requests have been made.
    pub fn hit_rate(&self) -> f64 {
        if self.requests > 0 {
            self.cache_hits as f64 / self.requests as f64
        } else {
            0.0
        }
    }

    /// Cache miss rate, 0.0 to 1.0. Zero when no requests have been made.
    pub fn miss_rate(&self) -> f64 {
        if self.requests > 0 {
            (self.requests - self.cache_hits) as f64 / self.requests as f64
        } else {
            0.0
        }
    }

    /// Converts the counters to a BTreeMap for reporting.
    ///
    /// Uses BTreeMap to ensure deterministic, consistent ordering of
    /// metrics, which keeps test output and benchmark comparisons stable.
    pub fn to_btreemap(&self) -> BTreeMap<String, f64> {
        let mut metrics = BTreeMap::new();

        metrics.insert("cache_hits".to_string(), self.cache_hits as f64);
        metrics.insert(
            "cache_misses".to_string(),
            (self.requests - self.cache_hits) as f64,
        );
        metrics.insert("capacity_weight".to_string(), self.capacity_weight as f64);
        metrics.insert("evictions".to_string(), self.evictions as f64);
        metrics.insert("hit_rate".to_string(), self.hit_rate());
        metrics.insert("miss_rate".to_string(), self.miss_rate());
        metrics.insert("removals".to_string(), self.removals as f64);
        metrics.insert("requests".to_string(), self.requests as f64);
        metrics.insert("weight_admitted".to_string(), self.weight_admitted as f64);
        metrics.insert("weight_evicted".to_string(), self.weight_evicted as f64);
        metrics.insert("weight_served".to_string(), self.weight_served as f64);

        if self.requests > 0 {
            metrics.insert(
                "eviction_rate".to_string(),
                self.evictions as f64 / self.requests as f64,
            );
        }

        metrics
    }
}

/// Trait implemented by caches that report metrics.
///
/// Uses BTreeMap to ensure deterministic ordering of metrics, which is
/// essential for reproducible benchmarks and consistent test results.
pub trait CacheMetrics {
    /// Returns all metrics as key-value pairs in deterministic order.
    ///
    /// Implementations extend the core counters with point-in-time state
    /// such as the current resident weight and utilization.
    fn metrics(&self) -> BTreeMap<String, f64>;

    /// Algorithm name for identification (e.g., "Weighted-LRU").
    fn algorithm_name(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_and_miss_counters() {
        let mut m = CoreCacheMetrics::new(100);
        assert_eq!(m.hit_rate(), 0.0);
        assert_eq!(m.miss_rate(), 0.0);

        m.record_hit(5);
        m.record_hit(3);
        m.record_miss();

        assert_eq!(m.requests, 3);
        assert_eq!(m.cache_hits, 2);
        assert_eq!(m.weight_served, 8);
        assert!((m.hit_rate() - 2.0 / 3.0).abs() < 1e-9);
        assert!((m.miss_rate() - 1.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_lifetime_weight_counters() {
        let mut m = CoreCacheMetrics::new(100);
        m.record_insertion(40);
        m.record_insertion(60);
        m.record_eviction(40);
        m.record_removal();

        assert_eq!(m.weight_admitted, 100);
        assert_eq!(m.weight_evicted, 40);
        assert_eq!(m.evictions, 1);
        assert_eq!(m.removals, 1);
    }

    #[test]
    fn test_btreemap_report() {
        let mut m = CoreCacheMetrics::new(10);
        m.record_hit(2);
        m.record_miss();
        m.record_insertion(2);

        let report = m.to_btreemap();
        assert_eq!(report.get("requests"), Some(&2.0));
        assert_eq!(report.get("cache_hits"), Some(&1.0));
        assert_eq!(report.get("cache_misses"), Some(&1.0));
        assert_eq!(report.get("capacity_weight"), Some(&10.0));
        assert_eq!(report.get("weight_admitted"), Some(&2.0));
        // Keys iterate in sorted order.
        let keys: alloc::vec::Vec<_> = report.keys().cloned().collect();
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted);
    }
}
