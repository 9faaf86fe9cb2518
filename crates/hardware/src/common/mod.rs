//! Common types and constants shared by the predictor components.
//!
//! This module provides:
//! 1. **Constants:** Instruction size, tag granularity, and default widths.
//! 2. **Error Handling:** The configuration error type and `Result` alias.

/// Common constants used throughout the predictor.
pub mod constants;

/// Error types for predictor construction.
pub mod error;

pub use constants::{BP_LINE_SIZE, DEFAULT_BRANCH_IP_BITS, INSTRUCTION_SIZE};
pub use error::{BpuError, Result};
