//! Geometry Validation and Address Decomposition Tests.
//!
//! Construction must reject zero and non-power-of-two parameters, and the
//! shift/mask split must agree with the div/mod definition.

use cachesim_core::cache::Geometry;
use cachesim_core::common::{AccessError, AddressParts, ConfigError};
use cachesim_core::config::CacheConfig;
use rstest::rstest;

fn geometry(sets: u64, ways: usize, line: u64, bus: u64, mem: u64) -> Result<Geometry, ConfigError> {
    Geometry::new(sets, ways, line, bus, mem)
}

// ══════════════════════════════════════════════════════════
// 1. Validation
// ══════════════════════════════════════════════════════════

#[rstest]
#[case(0, 2, 16, 16, 1024, ConfigError::Zero { field: "sets" })]
#[case(3, 2, 16, 16, 1024, ConfigError::NotPowerOfTwo { field: "sets", value: 3 })]
#[case(4, 0, 16, 16, 1024, ConfigError::Zero { field: "ways" })]
#[case(4, 3, 16, 16, 1024, ConfigError::NotPowerOfTwo { field: "ways", value: 3 })]
#[case(4, 2, 0, 16, 1024, ConfigError::Zero { field: "line_bytes" })]
#[case(4, 2, 24, 16, 1024, ConfigError::NotPowerOfTwo { field: "line_bytes", value: 24 })]
#[case(4, 2, 16, 0, 1024, ConfigError::Zero { field: "data_bus_bits" })]
#[case(4, 2, 16, 12, 1024, ConfigError::NotPowerOfTwo { field: "data_bus_bits", value: 12 })]
#[case(4, 2, 16, 16, 0, ConfigError::Zero { field: "mem_bytes" })]
#[case(4, 2, 16, 16, 1000, ConfigError::NotPowerOfTwo { field: "mem_bytes", value: 1000 })]
#[case(64, 2, 32, 16, 1024, ConfigError::IndexSpaceExceedsMemory { span: 2048, mem_bytes: 1024 })]
#[case(1 << 40, 1, 1 << 40, 16, 1 << 63, ConfigError::IndexSpaceOverflow { sets: 1 << 40, line_bytes: 1 << 40 })]
fn invalid_geometry_is_rejected(
    #[case] sets: u64,
    #[case] ways: usize,
    #[case] line: u64,
    #[case] bus: u64,
    #[case] mem: u64,
    #[case] expected: ConfigError,
) {
    assert_eq!(geometry(sets, ways, line, bus, mem), Err(expected));
}

/// The first offending parameter in argument order is reported.
#[test]
fn first_bad_parameter_wins() {
    assert_eq!(
        geometry(0, 3, 24, 12, 1000),
        Err(ConfigError::Zero { field: "sets" })
    );
}

#[test]
fn smallest_geometry_is_valid() {
    let g = geometry(1, 1, 1, 1, 1).unwrap();
    assert_eq!(g.sets(), 1);
    assert_eq!(g.ways().get(), 1);
    assert_eq!(g.line_bytes(), 1);
}

/// `sets * line_bytes == mem_bytes` is the boundary and still allowed.
#[test]
fn index_space_may_equal_memory() {
    assert!(geometry(64, 2, 16, 16, 1024).is_ok());
}

#[test]
fn default_config_validates() {
    let g = CacheConfig::default().validate().unwrap();
    assert_eq!(g.sets(), 32);
    assert_eq!(g.ways().get(), 2);
    assert_eq!(g.line_bytes(), 16);
    assert_eq!(g.data_bus_bits(), 16);
    assert_eq!(g.mem_bytes(), 512 * 1024);
}

// ══════════════════════════════════════════════════════════
// 2. Address Split
// ══════════════════════════════════════════════════════════

#[rstest]
#[case(0x0000, 0, 0, 0)]
#[case(0x000F, 0, 0, 15)]
#[case(0x0010, 0, 1, 0)]
#[case(0x01F0, 0, 31, 0)]
#[case(0x0200, 1, 0, 0)]
#[case(0x1234, 9, 3, 4)]
#[case(0x7FFFF, 1023, 31, 15)]
fn split_default_geometry(
    #[case] addr: u64,
    #[case] tag: u64,
    #[case] set: usize,
    #[case] offset: u64,
) {
    let g = CacheConfig::default().validate().unwrap();
    assert_eq!(g.split(addr), Ok(AddressParts { tag, set, offset }));
}

#[test]
fn split_rejects_address_at_end_of_memory() {
    let g = CacheConfig::default().validate().unwrap();
    assert_eq!(
        g.split(512 * 1024),
        Err(AccessError::AddressOutOfRange {
            addr: 512 * 1024,
            mem_bytes: 512 * 1024
        })
    );
}

#[test]
fn split_single_set_uses_no_index_bits() {
    let g = geometry(1, 2, 16, 16, 1024).unwrap();
    let parts = g.split(0x3A7).unwrap();
    assert_eq!(parts.set, 0);
    assert_eq!(parts.tag, 0x3A7 / 16);
    assert_eq!(parts.offset, 0x3A7 % 16);
}

// ══════════════════════════════════════════════════════════
// 3. Transfer Lag
// ══════════════════════════════════════════════════════════

#[rstest]
#[case(16, 8, 1)]
#[case(16, 16, 1)]
#[case(16, 32, 2)]
#[case(16, 128, 8)]
#[case(64, 8, 1)]
#[case(64, 128, 2)]
#[case(8, 64, 8)]
fn transfer_lag_rounds_up(#[case] bus: u64, #[case] bits: u64, #[case] expected: u64) {
    let g = geometry(1, 1, 16, bus, 1024).unwrap();
    assert_eq!(g.transfer_lag(bits), expected);
}

#[test]
fn line_transfer_lag_moves_eight_bits_per_byte() {
    let g = geometry(32, 2, 16, 16, 512 * 1024).unwrap();
    assert_eq!(g.line_transfer_lag(), 8);
    let g = geometry(8, 8, 64, 32, 512 * 1024).unwrap();
    assert_eq!(g.line_transfer_lag(), 16);
}
