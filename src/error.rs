//! Error types for cache construction and insertion.
//!
//! Lookup misses are not errors: `get` and `peek` return `Option`, `remove`
//! returns `bool`. `CacheError` covers only the cases where the caller asked
//! for something the cache can never do: constructing with no capacity,
//! or inserting an entry with an impossible weight. Every error leaves the
//! cache exactly as it was.

use core::fmt;

/// Result type alias for cache operations.
pub type Result<T> = core::result::Result<T, CacheError>;

/// Error types for cache operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheError {
    /// Cache constructed with a capacity of zero.
    InvalidCapacity,

    /// `put` called with a weight of zero. Every stored entry must consume
    /// at least one unit of the budget.
    InvalidWeight,

    /// `put` called with a weight larger than the whole capacity. No amount
    /// of eviction can admit such an entry.
    WeightExceedsCapacity {
        /// The rejected entry's weight.
        weight: u64,
        /// The cache's total weight capacity.
        capacity: u64,
    },
}

impl fmt::Display for CacheError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CacheError::InvalidCapacity => write!(f, "cache capacity must be positive"),
            CacheError::InvalidWeight => write!(f, "entry weight must be positive"),
            CacheError::WeightExceedsCapacity { weight, capacity } => write!(
                f,
                "entry weight {} exceeds cache capacity {}",
                weight, capacity
            ),
        }
    }
}

#[cfg(feature = "std")]
extern crate std;

#[cfg(feature = "std")]
impl std::error::Error for CacheError {}
