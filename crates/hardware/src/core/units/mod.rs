//! Prediction hardware units.
//!
//! This module contains the branch prediction unit and the set-associative
//! tag array it is addressed through.

/// Branch Resolution Unit: prediction table, entries, and selector.
pub mod bru;

/// Set-associative tag array with replacement policies.
pub mod cache;
