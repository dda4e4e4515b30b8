//! Memory Access Types.
//!
//! This module defines the classification of memory accesses replayed against the cache.
//! These types are used for the following:
//! 1. **Timing:** The operand width decides how many bus cycles a hit costs.
//! 2. **Dispatch:** Reads and writes take different paths through the cache.
//! 3. **Traces:** Both types deserialize from recorded JSON traces.

use serde::{Deserialize, Serialize};

/// Width of a single operand access.
///
/// Each access touches exactly one operand of this size starting at its byte
/// address; accesses that straddle a line boundary are not split.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessWidth {
    /// 8-bit operand.
    Byte,
    /// 16-bit operand.
    Half,
    /// 32-bit operand.
    Word,
    /// 64-bit operand.
    Double,
}

impl AccessWidth {
    /// Returns the operand width in bits.
    #[inline]
    pub const fn bits(self) -> u64 {
        match self {
            Self::Byte => 8,
            Self::Half => 16,
            Self::Word => 32,
            Self::Double => 64,
        }
    }

    /// Returns the operand width in bytes.
    #[inline]
    pub const fn bytes(self) -> u64 {
        self.bits() / 8
    }
}

/// Direction of a memory access.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessKind {
    /// Data read (load).
    Read,
    /// Data write (store).
    Write,
}
