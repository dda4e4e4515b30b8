//! Decomposed cache address.
//!
//! A byte address seen by the cache is split into three fields:
//! 1. **Tag:** Identifies which memory block a line holds.
//! 2. **Set index:** Selects the associative group the block maps to.
//! 3. **Offset:** Selects a byte within the line (not used for timing).

/// A byte address split according to a cache geometry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AddressParts {
    /// Address bits above the set index.
    pub tag: u64,
    /// Index of the set the address maps to.
    pub set: usize,
    /// Byte offset within the cache line.
    pub offset: u64,
}
