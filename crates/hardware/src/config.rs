//! Configuration system for the cache model.
//!
//! This module defines all configuration structures used to parameterize a run. It provides:
//! 1. **Defaults:** The baseline geometry (32 sets, 2 ways, 16-byte lines, 16-bit bus, 512 KiB).
//! 2. **Structures:** Cache geometry and GEMM workload dimensions.
//! 3. **Loading:** JSON documents from strings or files, every field optional.
//!
//! Use `Config::default()` for the stock run or [`Config::from_file`] for a sweep point.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::cache::Geometry;
use crate::common::error::{ConfigError, SimError};

/// Default configuration constants.
///
/// These values reproduce the reference experiment: a 1 KiB, 2-way cache
/// in front of 512 KiB of memory running a 64x60x32 matrix multiply.
mod defaults {
    /// Number of cache sets.
    pub const SETS: u64 = 32;

    /// Associativity (lines per set).
    pub const WAYS: usize = 2;

    /// Cache line size in bytes.
    pub const LINE_BYTES: u64 = 16;

    /// Data bus width in bits.
    pub const DATA_BUS_BITS: u64 = 16;

    /// Modeled main memory size in bytes (512 KiB, `0x00000..=0x7FFFF`).
    pub const MEM_BYTES: u64 = 512 * 1024;

    /// Rows of `A` and `C`.
    pub const GEMM_M: u64 = 64;

    /// Columns of `B` and `C`.
    pub const GEMM_N: u64 = 60;

    /// Shared (reduction) dimension.
    pub const GEMM_K: u64 = 32;
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Cache geometry.
    #[serde(default)]
    pub cache: CacheConfig,
    /// Workload dimensions.
    #[serde(default)]
    pub workload: WorkloadConfig,
}

impl Config {
    /// Parses a configuration from a JSON document.
    ///
    /// Missing sections and fields fall back to their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Json`] if the document is malformed.
    pub fn from_json_str(json: &str) -> Result<Self, SimError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Io`] if the file cannot be read and
    /// [`SimError::Json`] if it is malformed.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SimError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| SimError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }
}

/// Cache geometry configuration.
///
/// All five parameters must be powers of two and
/// `sets * line_bytes <= mem_bytes`; [`CacheConfig::validate`] enforces this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct CacheConfig {
    /// Number of sets
    #[serde(default = "CacheConfig::default_sets")]
    pub sets: u64,

    /// Associativity (number of ways)
    #[serde(default = "CacheConfig::default_ways")]
    pub ways: usize,

    /// Cache line size in bytes
    #[serde(default = "CacheConfig::default_line")]
    pub line_bytes: u64,

    /// Data bus width in bits
    #[serde(default = "CacheConfig::default_bus")]
    pub data_bus_bits: u64,

    /// Modeled memory size in bytes
    #[serde(default = "CacheConfig::default_mem")]
    pub mem_bytes: u64,
}

impl CacheConfig {
    /// Returns the default number of sets.
    const fn default_sets() -> u64 {
        defaults::SETS
    }

    /// Returns the default associativity.
    const fn default_ways() -> usize {
        defaults::WAYS
    }

    /// Returns the default line size in bytes.
    const fn default_line() -> u64 {
        defaults::LINE_BYTES
    }

    /// Returns the default data bus width in bits.
    const fn default_bus() -> u64 {
        defaults::DATA_BUS_BITS
    }

    /// Returns the default memory size in bytes.
    const fn default_mem() -> u64 {
        defaults::MEM_BYTES
    }

    /// Checks the geometry and returns its validated form.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] naming the first parameter that is zero or
    /// not a power of two, or describing an impossible index space.
    pub fn validate(&self) -> Result<Geometry, ConfigError> {
        Geometry::new(
            self.sets,
            self.ways,
            self.line_bytes,
            self.data_bus_bits,
            self.mem_bytes,
        )
    }

    /// Total data capacity in bytes (`sets * ways * line_bytes`), saturating.
    pub const fn capacity_bytes(&self) -> u64 {
        self.sets
            .saturating_mul(self.ways as u64)
            .saturating_mul(self.line_bytes)
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            sets: defaults::SETS,
            ways: defaults::WAYS,
            line_bytes: defaults::LINE_BYTES,
            data_bus_bits: defaults::DATA_BUS_BITS,
            mem_bytes: defaults::MEM_BYTES,
        }
    }
}

/// Tiled matrix-multiply workload dimensions (`C[M][N] = A[M][K] * B[K][N]`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct WorkloadConfig {
    /// Rows of `A` and `C`
    #[serde(default = "WorkloadConfig::default_m")]
    pub m: u64,

    /// Columns of `B` and `C`
    #[serde(default = "WorkloadConfig::default_n")]
    pub n: u64,

    /// Reduction dimension
    #[serde(default = "WorkloadConfig::default_k")]
    pub k: u64,
}

impl WorkloadConfig {
    const fn default_m() -> u64 {
        defaults::GEMM_M
    }

    const fn default_n() -> u64 {
        defaults::GEMM_N
    }

    const fn default_k() -> u64 {
        defaults::GEMM_K
    }
}

impl Default for WorkloadConfig {
    fn default() -> Self {
        Self {
            m: defaults::GEMM_M,
            n: defaults::GEMM_N,
            k: defaults::GEMM_K,
        }
    }
}
