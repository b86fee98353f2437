//! Demonstrates weight-based admission and eviction.
//!
//! Run with: `cargo run --example weighted_eviction`

use weighted_lru::metrics::CacheMetrics;
use weighted_lru::{CacheError, WeightedLruCache};

fn main() {
    // A 10-unit budget; weights model per-entry cost.
    let mut cache: WeightedLruCache<&str, &str> = WeightedLruCache::new(10).unwrap();

    cache.put("a", "alpha", 3).unwrap();
    cache.put("b", "bravo", 4).unwrap();
    println!("after a:3, b:4      -> weight {}/{}", cache.size(), cache.capacity());

    // Needs 5 units: "a" (the LRU entry) is evicted, "b" survives.
    cache.put("c", "charlie", 5).unwrap();
    println!("after c:5           -> weight {}/{}", cache.size(), cache.capacity());
    println!("  a: {:?}", cache.peek(&"a"));
    println!("  b: {:?}", cache.peek(&"b"));

    // Reading "b" promotes it, redirecting the next eviction to "c".
    cache.get(&"b");
    cache.put("d", "delta", 3).unwrap();
    println!("after get(b), d:3   -> weight {}/{}", cache.size(), cache.capacity());
    println!("  b: {:?}", cache.peek(&"b"));
    println!("  c: {:?}", cache.peek(&"c"));

    // An entry heavier than the whole budget is rejected outright.
    match cache.put("huge", "whale", 15) {
        Err(CacheError::WeightExceedsCapacity { weight, capacity }) => {
            println!("put huge:15         -> rejected ({} > {})", weight, capacity)
        }
        other => println!("unexpected: {:?}", other),
    }

    println!("\nmetrics:");
    for (key, value) in cache.metrics() {
        println!("  {:<20} {}", key, value);
    }
}
