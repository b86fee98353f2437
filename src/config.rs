//! Cache Configuration Module
//!
//! Configuration for the weighted LRU cache. The config struct has public
//! fields for simple instantiation, in the same spirit as the rest of the
//! crate's API:
//!
//! - **Simple**: Just create the struct with the field set
//! - **Type safety**: A `NonZeroU64` capacity makes an empty budget
//!   unrepresentable once constructed
//! - **Validated entry point**: [`WeightedLruConfig::new`] takes a plain
//!   integer and reports a zero capacity as [`CacheError::InvalidCapacity`]
//!
//! # Choosing a Capacity
//!
//! `capacity` is a **weight budget**, not an entry count. The cache holds
//! entries while the sum of their weights stays within it:
//!
//! ```text
//! capacity = total budget in your weight unit
//! resident entries ≈ capacity / average entry weight
//! ```
//!
//! **Example**: a 100MB value cache where weights are value sizes in bytes:
//! `capacity = 100 * 1024 * 1024`. For count-bounded caching, give every
//! entry weight 1 and set `capacity` to the entry limit.
//!
//! # Examples
//!
//! ```
//! use weighted_lru::config::WeightedLruConfig;
//! use weighted_lru::WeightedLruCache;
//! use core::num::NonZeroU64;
//!
//! // 10MB budget for byte-weighted values
//! let config = WeightedLruConfig {
//!     capacity: NonZeroU64::new(10 * 1024 * 1024).unwrap(),
//! };
//! let cache: WeightedLruCache<String, Vec<u8>> = WeightedLruCache::init(config, None);
//!
//! // Validated construction from an untrusted integer
//! assert!(WeightedLruConfig::new(0).is_err());
//! ```

use crate::error::{CacheError, Result};
use core::fmt;
use core::num::NonZeroU64;

/// Configuration for a weighted LRU cache.
///
/// # Fields
///
/// - `capacity`: Total weight budget. Entries are admitted while the sum of
///   their weights stays within it; a single entry heavier than the whole
///   budget is rejected outright.
///
/// # Examples
///
/// ```
/// use weighted_lru::config::WeightedLruConfig;
/// use core::num::NonZeroU64;
///
/// let config = WeightedLruConfig {
///     capacity: NonZeroU64::new(1024).unwrap(),
/// };
/// assert_eq!(config.capacity.get(), 1024);
/// ```
#[derive(Clone, Copy)]
pub struct WeightedLruConfig {
    /// Total weight budget for resident entries.
    pub capacity: NonZeroU64,
}

impl WeightedLruConfig {
    /// Creates a config from a plain integer capacity.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::InvalidCapacity`] if `capacity` is zero. No
    /// configuration (and therefore no cache) is produced in that case.
    pub fn new(capacity: u64) -> Result<Self> {
        match NonZeroU64::new(capacity) {
            Some(capacity) => Ok(WeightedLruConfig { capacity }),
            None => Err(CacheError::InvalidCapacity),
        }
    }
}

impl fmt::Debug for WeightedLruConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeightedLruConfig")
            .field("capacity", &self.capacity)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_creation() {
        let config = WeightedLruConfig {
            capacity: NonZeroU64::new(10 * 1024 * 1024).unwrap(),
        };
        assert_eq!(config.capacity.get(), 10 * 1024 * 1024);
    }

    #[test]
    fn test_validated_construction() {
        let config = WeightedLruConfig::new(1000).unwrap();
        assert_eq!(config.capacity.get(), 1000);

        assert_eq!(
            WeightedLruConfig::new(0).unwrap_err(),
            CacheError::InvalidCapacity
        );
    }
}
