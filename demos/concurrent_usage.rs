//! Demonstrates sharing the cache across threads.
//!
//! Run with: `cargo run --example concurrent_usage --features concurrent`

use std::sync::Arc;
use std::thread;
use weighted_lru::ConcurrentWeightedLruCache;

fn main() {
    // A 4KB budget; weights are payload sizes in bytes.
    let cache: Arc<ConcurrentWeightedLruCache<String, Vec<u8>>> =
        Arc::new(ConcurrentWeightedLruCache::new(4096).unwrap());

    let writers: Vec<_> = (0..4)
        .map(|t| {
            let cache = Arc::clone(&cache);
            thread::spawn(move || {
                for i in 0..64 {
                    let key = format!("page:{}:{}", t, i);
                    let payload = vec![t as u8; 256];
                    cache.put(key, payload, 256).unwrap();
                }
            })
        })
        .collect();

    let readers: Vec<_> = (0..2)
        .map(|t| {
            let cache = Arc::clone(&cache);
            thread::spawn(move || {
                let mut hits = 0usize;
                for i in 0..64 {
                    let key = format!("page:{}:{}", t, i);
                    if cache.get_with(&key, |v| v.len()).is_some() {
                        hits += 1;
                    }
                }
                hits
            })
        })
        .collect();

    for w in writers {
        w.join().unwrap();
    }
    let hits: usize = readers.into_iter().map(|r| r.join().unwrap()).sum();

    println!("resident entries: {}", cache.len());
    println!("resident weight:  {}/{}", cache.size(), cache.capacity());
    println!("reader hits:      {}", hits);
}
