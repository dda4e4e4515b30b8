//! Least Recently Used (LRU) victim selection.
//!
//! Recency is not tracked in a separate usage stack: every line carries the
//! logical clock value of its last access, and the victim is simply the line
//! with the smallest `(valid, last_call)` key. Invalid lines therefore fill
//! before any valid line is evicted.
//!
//! # Performance
//!
//! - **Time Complexity:** O(W) per miss, W = associativity
//! - **Space Complexity:** one `u64` timestamp per line
//! - **Worst Case:** Scanning patterns larger than the set (thrashing)

use super::line::CacheLine;

/// Returns the way index to evict from `lines`.
///
/// Ties on the key go to the lowest way index. An empty slice yields way 0.
pub fn victim_way(lines: &[CacheLine]) -> usize {
    lines
        .iter()
        .enumerate()
        .min_by_key(|(_, line)| line.lru_key())
        .map_or(0, |(way, _)| way)
}
