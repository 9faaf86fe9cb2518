//! Core front-end components.
//!
//! This module groups the hardware units the fetch and resolve stages of a
//! simulated core talk to.

/// Prediction hardware units (branch predictor, tag array).
pub mod units;
