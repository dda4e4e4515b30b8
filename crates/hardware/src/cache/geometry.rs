//! Validated cache geometry and address decomposition.
//!
//! The semantic definition of the split is the div/mod form:
//!
//! - `offset = addr % line_bytes`
//! - `set    = (addr / line_bytes) % sets`
//! - `tag    = addr / (sets * line_bytes)`
//!
//! Because every parameter is checked to be a power of two at construction,
//! [`Geometry::split`] computes the same values with shifts and masks.

use std::num::NonZeroUsize;

use crate::common::addr::AddressParts;
use crate::common::constants::BITS_PER_BYTE;
use crate::common::error::{AccessError, ConfigError};

/// Immutable, validated cache geometry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Geometry {
    sets: usize,
    ways: NonZeroUsize,
    line_bytes: u64,
    data_bus_bits: u64,
    mem_bytes: u64,
    offset_bits: u32,
    set_bits: u32,
}

/// Rejects zero and non-power-of-two values for `field`.
fn check_pow2(field: &'static str, value: u64) -> Result<(), ConfigError> {
    if value == 0 {
        return Err(ConfigError::Zero { field });
    }
    if !value.is_power_of_two() {
        return Err(ConfigError::NotPowerOfTwo { field, value });
    }
    Ok(())
}

impl Geometry {
    /// Validates raw geometry parameters.
    ///
    /// # Arguments
    ///
    /// * `sets` - Number of sets.
    /// * `ways` - Lines per set.
    /// * `line_bytes` - Line size in bytes.
    /// * `data_bus_bits` - Width of the memory/CPU data bus in bits.
    /// * `mem_bytes` - Size of modeled main memory in bytes.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Zero`] or [`ConfigError::NotPowerOfTwo`] for the
    /// first offending parameter (checked in argument order), then
    /// [`ConfigError::IndexSpaceOverflow`] / [`ConfigError::IndexSpaceExceedsMemory`]
    /// if `sets * line_bytes` cannot be covered by memory.
    pub fn new(
        sets: u64,
        ways: usize,
        line_bytes: u64,
        data_bus_bits: u64,
        mem_bytes: u64,
    ) -> Result<Self, ConfigError> {
        check_pow2("sets", sets)?;
        check_pow2("ways", ways as u64)?;
        check_pow2("line_bytes", line_bytes)?;
        check_pow2("data_bus_bits", data_bus_bits)?;
        check_pow2("mem_bytes", mem_bytes)?;

        let span = sets
            .checked_mul(line_bytes)
            .ok_or(ConfigError::IndexSpaceOverflow { sets, line_bytes })?;
        if span > mem_bytes {
            return Err(ConfigError::IndexSpaceExceedsMemory { span, mem_bytes });
        }

        let set_count =
            usize::try_from(sets).map_err(|_| ConfigError::IndexSpaceOverflow { sets, line_bytes })?;
        let ways = NonZeroUsize::new(ways).ok_or(ConfigError::Zero { field: "ways" })?;

        Ok(Self {
            sets: set_count,
            ways,
            line_bytes,
            data_bus_bits,
            mem_bytes,
            offset_bits: line_bytes.trailing_zeros(),
            set_bits: sets.trailing_zeros(),
        })
    }

    /// Number of sets.
    #[inline]
    pub const fn sets(&self) -> usize {
        self.sets
    }

    /// Lines per set.
    #[inline]
    pub const fn ways(&self) -> NonZeroUsize {
        self.ways
    }

    /// Line size in bytes.
    #[inline]
    pub const fn line_bytes(&self) -> u64 {
        self.line_bytes
    }

    /// Data bus width in bits.
    #[inline]
    pub const fn data_bus_bits(&self) -> u64 {
        self.data_bus_bits
    }

    /// Modeled memory size in bytes.
    #[inline]
    pub const fn mem_bytes(&self) -> u64 {
        self.mem_bytes
    }

    /// Splits a byte address into tag, set index, and line offset.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::AddressOutOfRange`] if `addr >= mem_bytes`.
    #[inline]
    pub const fn split(&self, addr: u64) -> Result<AddressParts, AccessError> {
        if addr >= self.mem_bytes {
            return Err(AccessError::AddressOutOfRange {
                addr,
                mem_bytes: self.mem_bytes,
            });
        }
        let offset = addr & (self.line_bytes - 1);
        let set = (addr >> self.offset_bits) & (self.sets as u64 - 1);
        let tag = addr >> (self.offset_bits + self.set_bits);
        Ok(AddressParts {
            tag,
            set: set as usize,
            offset,
        })
    }

    /// Bus cycles needed to move `data_bits` across the data bus, rounded up.
    #[inline]
    pub const fn transfer_lag(&self, data_bits: u64) -> u64 {
        data_bits.div_ceil(self.data_bus_bits)
    }

    /// Bus cycles needed to move one whole line.
    #[inline]
    pub const fn line_transfer_lag(&self) -> u64 {
        self.transfer_lag(BITS_PER_BYTE * self.line_bytes)
    }
}
