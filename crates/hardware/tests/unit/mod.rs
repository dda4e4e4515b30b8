//! # Unit Components
//!
//! This module is the hub for the per-component tests of the cache model,
//! its configuration, the simulation drivers, and statistics reporting.



/// Configuration defaults, JSON loading, and validation.
pub mod config;
