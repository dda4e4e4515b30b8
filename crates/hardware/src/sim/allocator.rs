//! Pseudo memory allocator.
//!
//! Hands out disjoint, strictly increasing address ranges starting at 0.
//! Nothing is ever freed or reused; the allocator exists only so that the
//! workload's arrays land at realistic, non-overlapping addresses.

use crate::common::data::AccessWidth;
use crate::common::error::SimError;

/// Bump allocator over the modeled address space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PseudoAllocator {
    next: u64,
}

impl PseudoAllocator {
    /// Creates an allocator whose first allocation starts at address 0.
    pub const fn new() -> Self {
        Self { next: 0 }
    }

    /// Reserves `rows * cols * elem_bytes` bytes and returns their base address.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::AllocationOverflow`] if the size or the new bump
    /// pointer would not fit in 64 bits.
    pub fn allocate(&mut self, rows: u64, cols: u64, elem_bytes: u64) -> Result<u64, SimError> {
        let overflow = || SimError::AllocationOverflow {
            rows,
            cols,
            elem_bytes,
        };
        let size = rows
            .checked_mul(cols)
            .and_then(|n| n.checked_mul(elem_bytes))
            .ok_or_else(overflow)?;
        let base = self.next;
        self.next = base.checked_add(size).ok_or_else(overflow)?;
        Ok(base)
    }

    /// Reserves a row-major `rows x cols` matrix of `elem` operands.
    ///
    /// # Errors
    ///
    /// See [`PseudoAllocator::allocate`].
    pub fn allocate_matrix(
        &mut self,
        rows: u64,
        cols: u64,
        elem: AccessWidth,
    ) -> Result<Matrix, SimError> {
        let base = self.allocate(rows, cols, elem.bytes())?;
        Ok(Matrix {
            base,
            rows,
            cols,
            elem,
        })
    }

    /// Address the next allocation will start at.
    pub const fn watermark(&self) -> u64 {
        self.next
    }
}

/// A row-major matrix placed by [`PseudoAllocator`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Matrix {
    /// Address of element `[0][0]`.
    pub base: u64,
    /// Number of rows.
    pub rows: u64,
    /// Number of columns.
    pub cols: u64,
    /// Element type.
    pub elem: AccessWidth,
}

impl Matrix {
    /// Byte address of element `[row][col]`.
    #[inline]
    pub const fn addr(&self, row: u64, col: u64) -> u64 {
        self.base + (row * self.cols + col) * self.elem.bytes()
    }

    /// Bytes occupied by the whole matrix.
    #[inline]
    pub const fn size_bytes(&self) -> u64 {
        self.rows * self.cols * self.elem.bytes()
    }
}
