//! Simulator: owns the cache and the workload description side by side.

use crate::cache::Cache;
use crate::common::error::SimError;
use crate::config::Config;
use crate::stats::CacheStats;

use super::trace::Trace;
use super::workload::GemmWorkload;

/// Top-level simulator: one cache plus the configured workload.
#[derive(Clone, Debug)]
pub struct Simulator {
    cache: Cache,
    workload: GemmWorkload,
}

impl Simulator {
    /// Builds a simulator with a cold cache.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Config`] if the cache geometry is rejected.
    pub fn new(config: &Config) -> Result<Self, SimError> {
        Ok(Self {
            cache: Cache::new(&config.cache)?,
            workload: GemmWorkload::from(&config.workload),
        })
    }

    /// Runs the configured matrix-multiply workload and returns the statistics.
    ///
    /// # Errors
    ///
    /// Returns the first allocation or access error.
    pub fn run_gemm(&mut self) -> Result<CacheStats, SimError> {
        self.workload.run(&mut self.cache)?;
        let stats = self.stats();
        tracing::info!(
            hits = stats.hits,
            misses = stats.misses,
            total_time = stats.total_time,
            "gemm run complete"
        );
        Ok(stats)
    }

    /// Replays `trace` against the cache and returns the statistics.
    ///
    /// # Errors
    ///
    /// Returns the first access the cache rejects.
    pub fn run_trace(&mut self, trace: &Trace) -> Result<CacheStats, SimError> {
        trace.replay(&mut self.cache)?;
        let stats = self.stats();
        tracing::info!(
            hits = stats.hits,
            misses = stats.misses,
            total_time = stats.total_time,
            "trace replay complete"
        );
        Ok(stats)
    }

    /// Snapshot of the cache's statistics so far.
    pub fn stats(&self) -> CacheStats {
        CacheStats::from(&self.cache)
    }

    /// The simulated cache.
    pub const fn cache(&self) -> &Cache {
        &self.cache
    }

    /// The configured workload.
    pub const fn workload(&self) -> &GemmWorkload {
        &self.workload
    }
}
