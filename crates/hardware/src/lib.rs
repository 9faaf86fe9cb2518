//! Branch prediction unit for cycle-level CPU simulators.
//!
//! This crate implements the branch-prediction subsystem of a simulated core:
//! 1. **Table:** A set-associative prediction table indexed by instruction address.
//! 2. **Entries:** Always-taken, backward-taken, one-bit, two-bit, and adaptive two-level algorithms.
//! 3. **Selector:** Builds a table from a mode name; unknown modes are fatal.
//! 4. **Tag Array:** The associative addressing and LRU replacement the table is built on.
//! 5. **Configuration:** Serde-deserializable predictor settings.
//!
//! ```
//! use bpsim_core::bru::{BranchOutcomeEvent, BranchPredictor, selector};
//!
//! let mut bp = selector::create("dynamic_two_bit", 128, 4);
//! assert_eq!(bp.get_target(0x1000), 0x1004);
//!
//! bp.update(BranchOutcomeEvent::new(0x1000, true, 0x0f00));
//! assert!(bp.is_taken(0x1000));
//! assert_eq!(bp.get_target(0x1000), 0x0f00);
//! ```

/// Common types and constants (instruction size, errors).
pub mod common;
/// Predictor configuration (defaults, deserialization).
pub mod config;
/// Core front-end units (branch predictor, tag array).
pub mod core;

/// Branch prediction unit; the usual entry point.
pub use crate::core::units::bru;
/// Root configuration type; use `BpuConfig::default()` or deserialize from JSON.
pub use crate::config::BpuConfig;
