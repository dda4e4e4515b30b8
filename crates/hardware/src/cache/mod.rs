//! Set-Associative Cache Model.
//!
//! This module implements a deterministic set-associative LRU cache that
//! tracks only line metadata. It provides:
//! 1. **Geometry:** Validated parameters and the tag/set/offset split.
//! 2. **Lines and sets:** Per-set lookup and whole-line LRU replacement.
//! 3. **Timing:** An analytical cycle count per access, plus write-back
//!    transfers charged lazily when the total is queried.
//!
//! # Timing model
//!
//! | access | hit                       | miss                                         |
//! |--------|---------------------------|----------------------------------------------|
//! | read   | `6 + lag(width)`          | `104 + lag(8 * line_bytes) + lag(width)`     |
//! | write  | `6 + 1`                   | `104 + lag(8 * line_bytes) + 1`              |
//!
//! where `lag(bits) = ceil(bits / data_bus_bits)`. Each dirty eviction adds
//! `lag(8 * line_bytes)` to [`Cache::time`].
//!
//! # Concurrency
//!
//! A `Cache` has no internal synchronization. It is `Send`, so callers that
//! need to share one between threads should wrap it in a `Mutex`.

/// Validated geometry and address decomposition.
pub mod geometry;

/// Cache line metadata.
pub mod line;

/// LRU victim selection.
pub mod lru;

/// A single associative set.
pub mod set;

pub use self::geometry::Geometry;
pub use self::line::CacheLine;
pub use self::set::CacheSet;

use crate::common::constants::{CACHE_HIT_LATENCY, MISS_LATENCY, WRITE_ACK_LATENCY};
use crate::common::data::AccessWidth;
use crate::common::error::{AccessError, ConfigError};
use crate::config::CacheConfig;

/// Result of one modeled access.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AccessOutcome {
    /// Whether the block was resident.
    pub hit: bool,
    /// Cycles charged to this access (write-backs excluded).
    pub cycles: u64,
}

/// Per-direction access counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AccessCounters {
    /// Read accesses issued.
    pub reads: u64,
    /// Write accesses issued.
    pub writes: u64,
    /// Reads that hit.
    pub read_hits: u64,
    /// Writes that hit.
    pub write_hits: u64,
}

/// Cache model owning all sets, the logical clock, and cumulative counters.
///
/// Every counter belongs to this instance; independent caches never share state.
#[derive(Clone, Debug)]
pub struct Cache {
    geometry: Geometry,
    sets: Vec<CacheSet>,
    calls: u64,
    hits: u64,
    misses: u64,
    total_time: u64,
    counters: AccessCounters,
}

impl Cache {
    /// Creates a cache from a configuration, validating its geometry first.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the geometry is rejected; no cache is built.
    pub fn new(config: &CacheConfig) -> Result<Self, ConfigError> {
        config.validate().map(Self::with_geometry)
    }

    /// Creates a cache with every line invalid.
    pub fn with_geometry(geometry: Geometry) -> Self {
        tracing::info!(
            sets = geometry.sets(),
            ways = geometry.ways().get(),
            line_bytes = geometry.line_bytes(),
            data_bus_bits = geometry.data_bus_bits(),
            mem_bytes = geometry.mem_bytes(),
            "cache constructed"
        );
        Self {
            sets: (0..geometry.sets())
                .map(|_| CacheSet::new(geometry.ways(), geometry.line_bytes()))
                .collect(),
            geometry,
            calls: 0,
            hits: 0,
            misses: 0,
            total_time: 0,
            counters: AccessCounters::default(),
        }
    }

    /// Models a read of `width` at byte `addr`.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::AddressOutOfRange`] for addresses beyond modeled
    /// memory. The clock and counters are left untouched in that case.
    pub fn read(&mut self, width: AccessWidth, addr: u64) -> Result<AccessOutcome, AccessError> {
        let parts = self.geometry.split(addr)?;
        self.calls += 1;
        self.counters.reads += 1;

        let hit = self.sets[parts.set].read(parts.tag, self.calls);
        let cycles = if hit {
            self.counters.read_hits += 1;
            CACHE_HIT_LATENCY + self.geometry.transfer_lag(width.bits())
        } else {
            MISS_LATENCY
                + self.geometry.line_transfer_lag()
                + self.geometry.transfer_lag(width.bits())
        };
        self.record(hit, cycles);

        tracing::trace!(addr, set = parts.set, tag = parts.tag, hit, cycles, "read");
        Ok(AccessOutcome { hit, cycles })
    }

    /// Models a write of `width` at byte `addr`.
    ///
    /// The set is first queried with a read purely to classify the access for
    /// timing (a miss fills the line there), and then the write itself marks
    /// the line dirty. The store's data width does not affect timing: only a
    /// one-cycle acknowledgement goes back to the CPU.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::AddressOutOfRange`] for addresses beyond modeled
    /// memory. The clock and counters are left untouched in that case.
    pub fn write(&mut self, width: AccessWidth, addr: u64) -> Result<AccessOutcome, AccessError> {
        let parts = self.geometry.split(addr)?;
        self.calls += 1;
        self.counters.writes += 1;

        let set = &mut self.sets[parts.set];
        let hit = set.read(parts.tag, self.calls);
        set.write(parts.tag, self.calls);

        let cycles = if hit {
            self.counters.write_hits += 1;
            CACHE_HIT_LATENCY + WRITE_ACK_LATENCY
        } else {
            MISS_LATENCY + self.geometry.line_transfer_lag() + WRITE_ACK_LATENCY
        };
        self.record(hit, cycles);

        tracing::trace!(
            addr,
            width = width.bits(),
            set = parts.set,
            tag = parts.tag,
            hit,
            cycles,
            "write"
        );
        Ok(AccessOutcome { hit, cycles })
    }

    const fn record(&mut self, hit: bool, cycles: u64) {
        if hit {
            self.hits += 1;
        } else {
            self.misses += 1;
        }
        self.total_time += cycles;
    }

    /// Number of accesses that hit.
    #[inline]
    pub const fn hits(&self) -> u64 {
        self.hits
    }

    /// Number of accesses that missed.
    #[inline]
    pub const fn misses(&self) -> u64 {
        self.misses
    }

    /// Logical clock: the number of accesses modeled so far.
    #[inline]
    pub const fn calls(&self) -> u64 {
        self.calls
    }

    /// Per-direction access counters.
    #[inline]
    pub const fn counters(&self) -> AccessCounters {
        self.counters
    }

    /// Cycles charged to accesses so far, excluding deferred write-backs.
    #[inline]
    pub const fn access_time(&self) -> u64 {
        self.total_time
    }

    /// Dirty evictions across all sets.
    pub fn mem_pushes(&self) -> u64 {
        self.sets.iter().map(CacheSet::mem_pushes).sum()
    }

    /// Cycles spent writing evicted dirty lines back to memory.
    pub fn write_back_time(&self) -> u64 {
        self.mem_pushes() * self.geometry.line_transfer_lag()
    }

    /// Total estimated time: access cycles plus one line transfer per dirty eviction.
    pub fn time(&self) -> u64 {
        self.total_time + self.write_back_time()
    }

    /// Whether the block containing `addr` is resident. Does not touch recency.
    pub fn contains(&self, addr: u64) -> bool {
        self.geometry
            .split(addr)
            .is_ok_and(|parts| self.sets[parts.set].contains(parts.tag))
    }

    /// The validated geometry.
    #[inline]
    pub const fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// All sets in index order.
    #[inline]
    pub fn sets(&self) -> &[CacheSet] {
        &self.sets
    }
}
