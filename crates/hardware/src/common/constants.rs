//! Timing Model Constants.
//!
//! This module defines the fixed cycle costs of the analytical timing model. It includes:
//! 1. **Cache Latencies:** Tag lookup cost and the full hit cost.
//! 2. **Memory Latency:** Fixed cost of reaching main memory on a miss.
//! 3. **Write Response:** Acknowledgement cost returned to the CPU on a store.

/// Cycles spent by the cache answering a hit (lookup plus data-array access).
pub const CACHE_HIT_LATENCY: u64 = 6;

/// Cycles spent by the cache discovering a miss before going to memory.
pub const CACHE_MISS_LATENCY: u64 = 4;

/// Cycles spent by main memory answering a line request.
pub const MEMORY_LATENCY: u64 = 100;

/// Fixed overhead of a miss: cache lookup plus memory access.
pub const MISS_LATENCY: u64 = CACHE_MISS_LATENCY + MEMORY_LATENCY;

/// Cycles for the cache to acknowledge a store back to the CPU.
pub const WRITE_ACK_LATENCY: u64 = 1;

/// Bits per byte, used when sizing line transfers over the data bus.
pub const BITS_PER_BYTE: u64 = 8;
