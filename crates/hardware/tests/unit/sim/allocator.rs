//! Pseudo allocator tests.

use cachesim_core::common::{AccessWidth, SimError};
use cachesim_core::sim::{Matrix, PseudoAllocator};

#[test]
fn first_allocation_starts_at_zero() {
    let mut alloc = PseudoAllocator::new();
    assert_eq!(alloc.watermark(), 0);
    assert_eq!(alloc.allocate(4, 4, 1).unwrap(), 0);
    assert_eq!(alloc.watermark(), 16);
}

#[test]
fn allocations_are_contiguous_and_disjoint() {
    let mut alloc = PseudoAllocator::new();
    let a = alloc.allocate_matrix(64, 32, AccessWidth::Byte).unwrap();
    let b = alloc.allocate_matrix(32, 60, AccessWidth::Half).unwrap();
    let c = alloc.allocate_matrix(64, 60, AccessWidth::Word).unwrap();

    assert_eq!(a.base, 0);
    assert_eq!(b.base, 2048);
    assert_eq!(c.base, 5888);
    assert_eq!(alloc.watermark(), 21248);
    assert_eq!(a.base + a.size_bytes(), b.base);
    assert_eq!(b.base + b.size_bytes(), c.base);
}

#[test]
fn zero_sized_allocation_does_not_advance() {
    let mut alloc = PseudoAllocator::new();
    let _ = alloc.allocate(8, 1, 1).unwrap();
    assert_eq!(alloc.allocate(0, 10, 4).unwrap(), 8);
    assert_eq!(alloc.allocate(1, 1, 1).unwrap(), 8);
}

#[test]
fn size_overflow_is_rejected() {
    let mut alloc = PseudoAllocator::new();
    let err = alloc.allocate(u64::MAX, 2, 1).unwrap_err();
    assert!(matches!(
        err,
        SimError::AllocationOverflow {
            rows: u64::MAX,
            cols: 2,
            elem_bytes: 1
        }
    ));
    assert_eq!(alloc.watermark(), 0);
}

#[test]
fn pointer_overflow_is_rejected() {
    let mut alloc = PseudoAllocator::new();
    assert_eq!(alloc.allocate(1, 1, u64::MAX).unwrap(), 0);
    assert!(alloc.allocate(1, 1, 1).is_err());
    assert_eq!(alloc.watermark(), u64::MAX);
}

#[test]
fn matrix_addressing_is_row_major() {
    let m = Matrix {
        base: 100,
        rows: 3,
        cols: 5,
        elem: AccessWidth::Word,
    };
    assert_eq!(m.addr(0, 0), 100);
    assert_eq!(m.addr(0, 1), 104);
    assert_eq!(m.addr(1, 0), 120);
    assert_eq!(m.addr(2, 4), 100 + 14 * 4);
    assert_eq!(m.size_bytes(), 60);
}
