//! Predictor configuration errors.
//!
//! Runtime queries and training are total and never fail. Every error in this
//! crate is a startup misconfiguration: an unknown prediction mode, a table
//! geometry the address store cannot represent, or a malformed configuration
//! document.

use thiserror::Error;

/// Errors raised while building a branch prediction unit.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BpuError {
    /// The requested prediction mode is not in the selector registry.
    #[error(
        "invalid branch prediction mode `{name}`; supported modes: {}",
        .supported.join(", ")
    )]
    UnknownMode {
        /// The mode name that was requested.
        name: String,
        /// Every mode the registry recognizes, in registry order.
        supported: Vec<&'static str>,
    },

    /// The table geometry cannot be mapped onto a set-associative tag array.
    #[error("invalid predictor geometry: {reason}")]
    InvalidGeometry {
        /// Which parameter was rejected and why.
        reason: String,
    },

    /// The configuration document could not be parsed.
    #[error("invalid predictor configuration: {0}")]
    Config(String),
}

impl BpuError {
    pub(crate) fn geometry(reason: impl Into<String>) -> Self {
        Self::InvalidGeometry {
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for BpuError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, BpuError>;
