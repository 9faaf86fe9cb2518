//! Configuration for the branch prediction unit.
//!
//! This module defines the configuration structure used to parameterize the
//! predictor. It provides:
//! 1. **Defaults:** Baseline mode, capacity, associativity, and address width.
//! 2. **Structure:** A flat, serde-deserializable `BpuConfig`.
//!
//! Configuration is usually embedded in a larger simulator document; use
//! `BpuConfig::default()` or `BpuConfig::from_json` when standalone.

use serde::Deserialize;
use serde_json::Value;

use crate::common::{BpuError, DEFAULT_BRANCH_IP_BITS, Result};

/// Default configuration constants for the predictor.
mod defaults {
    /// Default prediction mode.
    pub const MODE: &str = "dynamic_two_bit";

    /// Default total number of predictor entries.
    pub const SIZE_IN_ENTRIES: usize = 128;

    /// Default associativity (16 ways, 8 sets at the default capacity).
    pub const WAYS: usize = 16;
}

/// Branch prediction unit configuration.
///
/// The mode is kept as a string: an unrecognized name is a fatal error raised
/// by the selector, which reports the full list of supported modes.
///
/// # Examples
///
/// ```
/// use bpsim_core::config::BpuConfig;
///
/// let config = BpuConfig::from_json(r#"{ "mode": "adaptive_two_level", "ways": 4 }"#).unwrap();
/// assert_eq!(config.mode, "adaptive_two_level");
/// assert_eq!(config.ways, 4);
/// assert_eq!(config.size_in_entries, 128);
/// assert_eq!(config.branch_ip_size_in_bits, 32);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BpuConfig {
    /// Prediction algorithm name, e.g. `dynamic_two_bit`.
    #[serde(default = "BpuConfig::default_mode")]
    pub mode: String,

    /// Total number of entries across all ways.
    #[serde(default = "BpuConfig::default_size_in_entries")]
    pub size_in_entries: usize,

    /// Associativity of the predictor table.
    #[serde(default = "BpuConfig::default_ways")]
    pub ways: usize,

    /// Width of a branch instruction address in bits.
    #[serde(default = "BpuConfig::default_branch_ip_size_in_bits")]
    pub branch_ip_size_in_bits: u32,
}

impl BpuConfig {
    fn default_mode() -> String {
        defaults::MODE.to_owned()
    }

    const fn default_size_in_entries() -> usize {
        defaults::SIZE_IN_ENTRIES
    }

    const fn default_ways() -> usize {
        defaults::WAYS
    }

    const fn default_branch_ip_size_in_bits() -> u32 {
        DEFAULT_BRANCH_IP_BITS
    }

    /// Parses a configuration from a JSON document.
    ///
    /// The document must be a JSON object. Missing fields take their
    /// defaults; unknown fields are rejected.
    ///
    /// # Errors
    ///
    /// Returns [`BpuError::Config`] when the document is not valid JSON, is
    /// not an object, or does not match the schema.
    pub fn from_json(json: &str) -> Result<Self> {
        match serde_json::from_str::<Value>(json)? {
            value @ Value::Object(_) => Ok(serde_json::from_value(value)?),
            other => Err(BpuError::Config(format!(
                "expected a JSON object, found {}",
                kind(&other)
            ))),
        }
    }
}

const fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

impl Default for BpuConfig {
    fn default() -> Self {
        Self {
            mode: Self::default_mode(),
            size_in_entries: Self::default_size_in_entries(),
            ways: Self::default_ways(),
            branch_ip_size_in_bits: Self::default_branch_ip_size_in_bits(),
        }
    }
}
