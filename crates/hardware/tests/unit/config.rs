//! # Configuration Tests
//!
//! Tests for configuration defaults, partial JSON documents, file loading,
//! and geometry validation.

use std::io::Write as _;

use cachesim_core::common::{ConfigError, SimError};
use cachesim_core::config::*;
use pretty_assertions::assert_eq;
use tempfile::NamedTempFile;

#[test]
fn test_cache_config_defaults() {
    let cache = CacheConfig::default();
    assert_eq!(cache.sets, 32);
    assert_eq!(cache.ways, 2);
    assert_eq!(cache.line_bytes, 16);
    assert_eq!(cache.data_bus_bits, 16);
    assert_eq!(cache.mem_bytes, 512 * 1024);
    assert_eq!(cache.capacity_bytes(), 1024);
}

#[test]
fn test_workload_config_defaults() {
    let workload = WorkloadConfig::default();
    assert_eq!((workload.m, workload.n, workload.k), (64, 60, 32));
}

#[test]
fn test_default_config_validates() {
    let geometry = Config::default().cache.validate().unwrap();
    assert_eq!(geometry.sets(), 32);
    assert_eq!(geometry.ways().get(), 2);
    assert_eq!(geometry.line_transfer_lag(), 8);
}

#[test]
fn test_empty_document_is_default() {
    assert_eq!(Config::from_json_str("{}").unwrap(), Config::default());
}

#[test]
fn test_partial_document_keeps_other_defaults() {
    let config = Config::from_json_str(r#"{ "cache": { "ways": 4 } }"#).unwrap();
    assert_eq!(config.cache.ways, 4);
    assert_eq!(config.cache.sets, 32);
    assert_eq!(config.cache.line_bytes, 16);
    assert_eq!(config.workload, WorkloadConfig::default());
}

#[test]
fn test_full_document() {
    let json = r#"{
        "cache": { "sets": 8, "ways": 8, "line_bytes": 64, "data_bus_bits": 32, "mem_bytes": 65536 },
        "workload": { "m": 4, "n": 5, "k": 6 }
    }"#;
    let config = Config::from_json_str(json).unwrap();
    assert_eq!(
        config,
        Config {
            cache: CacheConfig {
                sets: 8,
                ways: 8,
                line_bytes: 64,
                data_bus_bits: 32,
                mem_bytes: 65536,
            },
            workload: WorkloadConfig { m: 4, n: 5, k: 6 },
        }
    );
    assert_eq!(config.cache.capacity_bytes(), 4096);
}

#[test]
fn test_malformed_document_is_json_error() {
    let err = Config::from_json_str(r#"{ "cache": { "sets": "many" } }"#).unwrap_err();
    assert!(matches!(err, SimError::Json(_)));
}

#[test]
fn test_invalid_geometry_parses_but_fails_validation() {
    let config = Config::from_json_str(r#"{ "cache": { "sets": 3 } }"#).unwrap();
    assert_eq!(
        config.cache.validate().unwrap_err(),
        ConfigError::NotPowerOfTwo {
            field: "sets",
            value: 3
        }
    );
}

#[test]
fn test_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"{{ "workload": {{ "m": 2 }} }}"#).unwrap();

    let config = Config::from_file(file.path()).unwrap();
    assert_eq!(config.workload.m, 2);
    assert_eq!(config.workload.n, 60);
    assert_eq!(config.cache, CacheConfig::default());
}

#[test]
fn test_from_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.json");
    match Config::from_file(&path).unwrap_err() {
        SimError::Io { path: p, .. } => assert_eq!(p, path),
        other => panic!("expected Io error, got {other:?}"),
    }
}

#[test]
fn test_capacity_saturates() {
    let cache = CacheConfig {
        sets: u64::MAX,
        ways: 2,
        ..CacheConfig::default()
    };
    assert_eq!(cache.capacity_bytes(), u64::MAX);
}
