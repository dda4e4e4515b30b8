//! Common types and constants shared by the cache model and its drivers.
//!
//! This module provides the building blocks used across the crate. It includes:
//! 1. **Address Types:** The tag/set/offset split of a byte address.
//! 2. **Constants:** Fixed latencies of the analytical timing model.
//! 3. **Memory Access:** Operand widths and access directions.
//! 4. **Error Handling:** Configuration, access, and simulation errors.

/// Decomposed address type.
pub mod addr;

/// Timing model constants.
pub mod constants;

/// Memory access type definitions.
pub mod data;

/// Error types.
pub mod error;

pub use addr::AddressParts;
pub use data::{AccessKind, AccessWidth};
pub use error::{AccessError, ConfigError, SimError};
