#![doc = include_str!("../README.md")]
//!
//! ---
//!
//! # Code Reference
//!
//! This section provides quick code examples and API references.
//!
//! ## Weight Semantics
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────────────┐
//! │                 Capacity is a weight budget                       │
//! ├───────────────────────────────────────────────────────────────────┤
//! │                                                                   │
//! │  capacity = 10                                                    │
//! │                                                                   │
//! │  MRU ──▶ ┌───────┐ ┌─────────────┐ ┌─────────┐ ──▶ LRU            │
//! │          │ c : 5 │ │   b : 4     │ │  a : 1  │                    │
//! │          └───────┘ └─────────────┘ └─────────┘                    │
//! │                                                                   │
//! │  put(d, weight 3)  ──▶  needs 3, only 0 free                      │
//! │                    ──▶  evict "a" (1): still short                │
//! │                    ──▶  evict "b" (4): fits                       │
//! │                    ──▶  admit "d"; "c" survives                   │
//! │                                                                   │
//! │  The evicted set is always the smallest least-recently-used       │
//! │  prefix that frees enough weight. Nothing is evicted for a        │
//! │  rejected insertion.                                              │
//! └───────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Quick Reference
//!
//! | Type | Description | Use Case |
//! |------|-------------|----------|
//! | [`WeightedLruCache`] | Single-threaded weighted LRU | General purpose, size-aware caching |
//! | [`ConcurrentWeightedLruCache`] | Mutex-serialized wrapper | Shared across threads, exact global ordering |
//!
//! ## Code Examples
//!
//! ### Byte-weighted value cache
//!
//! ```rust
//! use weighted_lru::WeightedLruCache;
//!
//! // 1KB budget; weights are value sizes in bytes
//! let mut cache: WeightedLruCache<&str, Vec<u8>> = WeightedLruCache::new(1024).unwrap();
//!
//! cache.put("small.txt", vec![0u8; 100], 100).unwrap();
//! cache.put("large.bin", vec![0u8; 900], 900).unwrap();
//! // 100 + 900 > 1024 is false: both fit exactly within the budget
//! assert_eq!(cache.len(), 2);
//!
//! // Another 100 bytes force the least recently used entry out
//! cache.put("new.txt", vec![0u8; 100], 100).unwrap();
//! assert!(cache.get(&"small.txt").is_none());
//! ```
//!
//! ### Count-based caching
//!
//! Give every entry weight 1 and the budget becomes an entry limit:
//!
//! ```rust
//! use weighted_lru::WeightedLruCache;
//!
//! let mut cache = WeightedLruCache::new(2).unwrap();
//! cache.put("a", 1, 1).unwrap();
//! cache.put("b", 2, 1).unwrap();
//! cache.get(&"a");             // "a" becomes most recently used
//! cache.put("c", 3, 1).unwrap(); // "b" evicted (least recently used)
//! assert!(cache.get(&"b").is_none());
//! ```
//!
//! ## Modules
//!
//! - [`config`]: Configuration structure for the cache
//! - [`entry`]: The cache entry type (key, value, weight)
//! - [`error`]: Error types and `Result` alias
//! - [`metrics`]: Metrics collection for cache performance monitoring
//! - [`lru`]: The weighted LRU cache implementation
//! - [`concurrent`]: Thread-safe wrapper (requires `concurrent` feature)

#![no_std]

/// Cache entry type.
///
/// Provides the `CacheEntry<K, V>` structure that couples a key-value pair
/// with the weight it consumes from the cache budget.
pub mod entry;

/// Recency list implementation with in-place editing capabilities.
///
/// An arena-backed doubly linked list addressed by stable indices, with a
/// free list recycling the slots of removed nodes.
///
/// **Note**: This module is internal infrastructure and should not be used
/// directly by library consumers. Use the cache implementations instead.
pub(crate) mod list;

/// Weight accounting against the fixed capacity.
///
/// Internal bookkeeping for the aggregate resident weight.
pub(crate) mod weight;

/// Cache configuration structure.
pub mod config;

/// Error types for cache construction and insertion.
pub mod error;

/// Weighted Least Recently Used (LRU) cache implementation.
///
/// Provides a cache bounded by total entry weight that evicts the least
/// recently used entries when an insertion needs room.
pub mod lru;

/// Cache metrics system.
///
/// Provides a metrics collection and reporting system with deterministic
/// BTreeMap-based output.
pub mod metrics;

/// Concurrent cache implementation.
///
/// Provides a thread-safe wrapper that serializes every operation through
/// a single lock, preserving the exact global recency order.
///
/// Available when the `concurrent` feature is enabled.
#[cfg(feature = "concurrent")]
pub mod concurrent;

// Re-export cache types
pub use lru::WeightedLruCache;

// Re-export entry and error types
pub use entry::CacheEntry;
pub use error::{CacheError, Result};

// Re-export the config type
pub use config::WeightedLruConfig;

#[cfg(feature = "concurrent")]
pub use concurrent::ConcurrentWeightedLruCache;
