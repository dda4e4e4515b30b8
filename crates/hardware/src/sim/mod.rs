//! Simulation drivers.
//!
//! Everything here produces accesses for the cache model or runs it end to end:
//! 1. **Allocation:** A bump allocator that lays logical arrays out in memory.
//! 2. **Workloads:** The tiled matrix-multiply access pattern.
//! 3. **Traces:** Recorded access sequences loaded from JSON.
//! 4. **Simulator:** Couples a configuration, a cache, and a driver.

/// Bump allocator for logical arrays.
pub mod allocator;

/// Top-level simulator.
pub mod simulator;

/// Recorded access traces.
pub mod trace;

/// Synthetic workloads.
pub mod workload;

pub use allocator::{Matrix, PseudoAllocator};
pub use simulator::Simulator;
pub use trace::{Trace, TraceEntry};
pub use workload::GemmWorkload;

use crate::cache::Cache;
use crate::common::data::{AccessKind, AccessWidth};
use crate::common::error::AccessError;

/// Anything that accepts a stream of memory accesses.
///
/// Workloads and traces only talk to this trait, so they can drive the cache
/// model or any other consumer (a recorder, a mock).
pub trait AccessSink {
    /// Receives a read of `width` at byte `addr`.
    ///
    /// # Errors
    ///
    /// Implementations reject accesses they cannot model.
    fn read(&mut self, width: AccessWidth, addr: u64) -> Result<(), AccessError>;

    /// Receives a write of `width` at byte `addr`.
    ///
    /// # Errors
    ///
    /// Implementations reject accesses they cannot model.
    fn write(&mut self, width: AccessWidth, addr: u64) -> Result<(), AccessError>;

    /// Dispatches on `kind`.
    ///
    /// # Errors
    ///
    /// Propagates the error of the underlying read or write.
    fn access(&mut self, kind: AccessKind, width: AccessWidth, addr: u64) -> Result<(), AccessError> {
        match kind {
            AccessKind::Read => self.read(width, addr),
            AccessKind::Write => self.write(width, addr),
        }
    }
}

impl AccessSink for Cache {
    fn read(&mut self, width: AccessWidth, addr: u64) -> Result<(), AccessError> {
        Self::read(self, width, addr).map(|_| ())
    }

    fn write(&mut self, width: AccessWidth, addr: u64) -> Result<(), AccessError> {
        Self::write(self, width, addr).map(|_| ())
    }
}
