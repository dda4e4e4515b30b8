//! Set-associative cache performance model.
//!
//! This crate estimates the hit/miss behavior and access latency of a
//! set-associative LRU cache replaying a fixed access sequence. It provides:
//! 1. **Cache:** Address decomposition, per-set LRU replacement, and the cycle-cost timing model.
//! 2. **Configuration:** JSON-loadable geometry and workload parameters.
//! 3. **Simulation:** The tiled matrix-multiply workload, trace replay, and a bump allocator.
//! 4. **Statistics:** Counter snapshots and plain-text or JSON reports.
//!
//! The model is offline and deterministic: it stores no data, only line
//! metadata, and all costs are abstract cycle counts.

/// Cache model (geometry, lines, sets, LRU, timing).
pub mod cache;
/// Common types and constants (address split, access widths, errors, latencies).
pub mod common;
/// Configuration (defaults and JSON loading).
pub mod config;
/// Workload generation, trace replay, and the simulator.
pub mod sim;
/// Statistics snapshots and reporting.
pub mod stats;

/// Main cache type; construct with `Cache::new(&CacheConfig)`.
pub use crate::cache::Cache;
/// Root configuration type; use `Config::default()` or load from JSON.
pub use crate::config::Config;
/// Top-level simulator coupling a cache with a workload.
pub use crate::sim::Simulator;
