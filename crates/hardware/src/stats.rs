//! Cache statistics collection and reporting.
//!
//! This module snapshots the counters of a [`Cache`] and renders them. It provides:
//! 1. **Summary:** Hits, misses, hit rate, and total estimated time.
//! 2. **Access mix:** Reads and writes with their individual hit counts.
//! 3. **Timing:** Access cycles versus deferred write-back cycles.

use std::fmt::Write as _;

use serde::Serialize;

use crate::cache::Cache;

/// Snapshot of a cache's cumulative statistics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    /// Total accesses modeled.
    pub accesses: u64,
    /// Read accesses.
    pub reads: u64,
    /// Write accesses.
    pub writes: u64,
    /// Reads that hit.
    pub read_hits: u64,
    /// Writes that hit.
    pub write_hits: u64,
    /// Accesses that hit.
    pub hits: u64,
    /// Accesses that missed.
    pub misses: u64,
    /// Dirty lines evicted (deferred write-backs).
    pub mem_pushes: u64,
    /// Cycles charged to accesses.
    pub access_time: u64,
    /// Cycles charged to write-backs.
    pub write_back_time: u64,
    /// `access_time + write_back_time`.
    pub total_time: u64,
}

impl From<&Cache> for CacheStats {
    fn from(cache: &Cache) -> Self {
        let counters = cache.counters();
        Self {
            accesses: cache.calls(),
            reads: counters.reads,
            writes: counters.writes,
            read_hits: counters.read_hits,
            write_hits: counters.write_hits,
            hits: cache.hits(),
            misses: cache.misses(),
            mem_pushes: cache.mem_pushes(),
            access_time: cache.access_time(),
            write_back_time: cache.write_back_time(),
            total_time: cache.time(),
        }
    }
}

/// Section names for selective stats output.
///
/// Valid section identifiers: `"summary"`, `"access"`, `"timing"`.
/// Pass an empty slice to `print_sections` to print all sections.
pub const STATS_SECTIONS: &[&str] = &["summary", "access", "timing"];

/// `part / whole` as a ratio, or 0 when `whole` is 0.
fn ratio(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64
    }
}

impl CacheStats {
    /// `hits / (hits + misses)`, or 0 before any access.
    pub fn hit_rate(&self) -> f64 {
        ratio(self.hits, self.hits + self.misses)
    }

    /// `misses / (hits + misses)`, or 0 before any access.
    pub fn miss_rate(&self) -> f64 {
        ratio(self.misses, self.hits + self.misses)
    }

    /// Average cycles per access including write-backs, or 0 before any access.
    pub fn average_access_time(&self) -> f64 {
        ratio(self.total_time, self.accesses)
    }

    /// Renders the requested sections as text.
    ///
    /// Unknown section names are ignored. An empty slice renders all sections.
    pub fn render_sections(&self, sections: &[String]) -> String {
        let want = |s: &str| sections.is_empty() || sections.iter().any(|x| x == s);
        let mut out = String::new();

        // Writing into a String cannot fail.
        let _ = writeln!(out, "==========================================================");
        let _ = writeln!(out, "CACHE SIMULATION STATISTICS");
        let _ = writeln!(out, "==========================================================");
        if want("summary") {
            let _ = writeln!(out, "hits                     {}", self.hits);
            let _ = writeln!(out, "misses                   {}", self.misses);
            let _ = writeln!(out, "total_time               {}", self.total_time);
            let _ = writeln!(out, "hit_rate                 {:.6}", self.hit_rate());
            let _ = writeln!(out, "----------------------------------------------------------");
        }
        if want("access") {
            let _ = writeln!(out, "ACCESS MIX");
            let _ = writeln!(
                out,
                "  op.read                {:<10} | hits: {:<10} | hit_rate: {:.2}%",
                self.reads,
                self.read_hits,
                ratio(self.read_hits, self.reads) * 100.0
            );
            let _ = writeln!(
                out,
                "  op.write               {:<10} | hits: {:<10} | hit_rate: {:.2}%",
                self.writes,
                self.write_hits,
                ratio(self.write_hits, self.writes) * 100.0
            );
            let _ = writeln!(out, "----------------------------------------------------------");
        }
        if want("timing") {
            let _ = writeln!(out, "TIMING");
            let _ = writeln!(out, "  time.access            {}", self.access_time);
            let _ = writeln!(
                out,
                "  time.write_back        {} ({} pushes)",
                self.write_back_time, self.mem_pushes
            );
            let _ = writeln!(
                out,
                "  time.avg_per_access    {:.4}",
                self.average_access_time()
            );
        }
        let _ = writeln!(out, "==========================================================");
        out
    }

    /// Prints only the requested statistics sections to stdout.
    ///
    /// Each element of `sections` should be one of `"summary"`, `"access"`,
    /// or `"timing"`. Pass an empty slice to print all sections.
    pub fn print_sections(&self, sections: &[String]) {
        print!("{}", self.render_sections(sections));
    }

    /// Prints all statistics sections to stdout.
    ///
    /// Equivalent to `print_sections(&[])`.
    pub fn print(&self) {
        self.print_sections(&[]);
    }
}
