//! Error types.
//!
//! This module defines the failures the cache model can report. It provides:
//! 1. **Configuration Errors:** Geometry rejected at construction, before any access.
//! 2. **Access Errors:** Addresses outside the modeled memory range.
//! 3. **Simulation Errors:** Driver-level failures (files, JSON, allocation) wrapping the above.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Invalid cache geometry.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A geometry parameter was zero.
    #[error("{field} must be positive")]
    Zero {
        /// Name of the offending parameter.
        field: &'static str,
    },

    /// A geometry parameter was not a power of two.
    #[error("{field} must be a power of two, got {value}")]
    NotPowerOfTwo {
        /// Name of the offending parameter.
        field: &'static str,
        /// The rejected value.
        value: u64,
    },

    /// `sets * line_bytes` does not fit in 64 bits.
    #[error("sets ({sets}) * line_bytes ({line_bytes}) overflows the address space")]
    IndexSpaceOverflow {
        /// Number of sets.
        sets: u64,
        /// Line size in bytes.
        line_bytes: u64,
    },

    /// The bytes covered by one pass over all sets exceed main memory.
    #[error("sets * line_bytes ({span}) exceeds mem_bytes ({mem_bytes})")]
    IndexSpaceExceedsMemory {
        /// `sets * line_bytes`.
        span: u64,
        /// Modeled memory size in bytes.
        mem_bytes: u64,
    },
}

/// An access the cache refused to model.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AccessError {
    /// The address lies at or beyond the end of modeled memory.
    #[error("address {addr:#x} is outside modeled memory of {mem_bytes:#x} bytes")]
    AddressOutOfRange {
        /// The rejected address.
        addr: u64,
        /// Modeled memory size in bytes.
        mem_bytes: u64,
    },
}

/// Failure while driving a simulation.
#[derive(Debug, Error)]
pub enum SimError {
    /// Cache geometry was rejected.
    #[error("invalid cache configuration: {0}")]
    Config(#[from] ConfigError),

    /// The workload or trace issued an access the cache rejected.
    #[error("invalid access: {0}")]
    Access(#[from] AccessError),

    /// A matrix allocation pushed the bump pointer past `u64::MAX`.
    #[error("allocating {rows}x{cols} elements of {elem_bytes} bytes overflows the address space")]
    AllocationOverflow {
        /// Requested rows.
        rows: u64,
        /// Requested columns.
        cols: u64,
        /// Element size in bytes.
        elem_bytes: u64,
    },

    /// A configuration or trace file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// File that failed to load.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A configuration or trace document was malformed.
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
}
