//! Global Predictor Constants.
//!
//! This module defines constants shared by the address store, the prediction
//! entries, and the selector. It includes:
//! 1. **Instruction Constants:** The fixed instruction size used for fallthrough.
//! 2. **Addressing Constants:** Tag granularity and default address width.
//! 3. **History Constants:** Pattern length for the adaptive two-level predictor.

/// Size of an instruction in bytes.
///
/// A branch that is not predicted taken falls through to `pc + INSTRUCTION_SIZE`.
pub const INSTRUCTION_SIZE: u64 = 4;

/// Addressing granularity of the predictor tag array in bytes.
///
/// Predictor entries are tag-only (no data payload), so every instruction
/// address occupies its own 4-byte "line".
pub const BP_LINE_SIZE: usize = 4;

/// Default width of a branch instruction address in bits.
pub const DEFAULT_BRANCH_IP_BITS: u32 = 32;

/// Number of recent outcomes held by the `adaptive_two_level` history register.
pub const ADAPTIVE_PATTERN_LENGTH: usize = 2;
