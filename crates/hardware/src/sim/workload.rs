//! Tiled matrix-multiply (GEMM) workload.
//!
//! Computes the access pattern of `C[M][N] = A[M][K] * B[K][N]` with
//! `A: i8`, `B: i16`, `C: i32`, allocated in that order. For every output
//! element the inner loop reads one row of `A` and one column of `B`, then
//! stores the result:
//!
//! ```text
//! for y in 0..M
//!   for x in 0..N
//!     for k in 0..K
//!       read  byte  A[y][k]
//!       read  half  B[k][x]
//!     write word C[y][x]
//! ```

use crate::common::data::AccessWidth;
use crate::common::error::SimError;
use crate::config::WorkloadConfig;

use super::AccessSink;
use super::allocator::{Matrix, PseudoAllocator};

/// Matrix-multiply workload dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GemmWorkload {
    /// Rows of `A` and `C`.
    pub m: u64,
    /// Columns of `B` and `C`.
    pub n: u64,
    /// Reduction dimension.
    pub k: u64,
}

/// Placement of the three matrices in memory.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GemmLayout {
    /// Left operand, `M x K` bytes.
    pub a: Matrix,
    /// Right operand, `K x N` halfwords.
    pub b: Matrix,
    /// Result, `M x N` words.
    pub c: Matrix,
}

impl GemmWorkload {
    /// Creates a workload of the given dimensions.
    pub const fn new(m: u64, n: u64, k: u64) -> Self {
        Self { m, n, k }
    }

    /// Places `A`, `B`, and `C` with a fresh allocator.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::AllocationOverflow`] for absurd dimensions.
    pub fn layout(&self) -> Result<GemmLayout, SimError> {
        let mut alloc = PseudoAllocator::new();
        let a = alloc.allocate_matrix(self.m, self.k, AccessWidth::Byte)?;
        let b = alloc.allocate_matrix(self.k, self.n, AccessWidth::Half)?;
        let c = alloc.allocate_matrix(self.m, self.n, AccessWidth::Word)?;
        Ok(GemmLayout { a, b, c })
    }

    /// Number of accesses [`GemmWorkload::run`] issues: `M * N * (2K + 1)`.
    pub const fn access_count(&self) -> u64 {
        self.m * self.n * (2 * self.k + 1)
    }

    /// Issues the whole access sequence into `sink`.
    ///
    /// # Errors
    ///
    /// Stops at and returns the first error, from allocation or from the sink.
    pub fn run<S: AccessSink + ?Sized>(&self, sink: &mut S) -> Result<(), SimError> {
        let GemmLayout { a, b, c } = self.layout()?;
        tracing::debug!(a = a.base, b = b.base, c = c.base, "gemm layout");

        for y in 0..self.m {
            for x in 0..self.n {
                for k in 0..self.k {
                    sink.read(AccessWidth::Byte, a.addr(y, k))?;
                    sink.read(AccessWidth::Half, b.addr(k, x))?;
                }
                sink.write(AccessWidth::Word, c.addr(y, x))?;
            }
        }
        Ok(())
    }
}

impl Default for GemmWorkload {
    fn default() -> Self {
        Self::from(&WorkloadConfig::default())
    }
}

impl From<&WorkloadConfig> for GemmWorkload {
    fn from(config: &WorkloadConfig) -> Self {
        Self::new(config.m, config.n, config.k)
    }
}
