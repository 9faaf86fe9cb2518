//! Predictor Selector.
//!
//! Maps a configured mode name to a concrete direction algorithm and builds a
//! [`PredictionTable`] for it. The registry is a static table of
//! `(name, builder)` pairs; the algorithm type is erased behind
//! `Box<dyn BranchPredictor>` at this single point, while the table itself
//! stays monomorphic on the hot path.
//!
//! An unknown mode is a startup misconfiguration. [`create`] reports it on
//! stderr with the list of supported modes and terminates the process;
//! [`try_create`] returns it as a [`BpuError`] instead.

use std::process;

use tracing::{debug, error};

use super::adaptive::Adaptive;
use super::branch_predictor::BranchPredictor;
use super::entry::Direction;
use super::one_bit::OneBit;
use super::static_bp::{AlwaysTaken, BackwardJumps};
use super::table::PredictionTable;
use super::two_bit::TwoBit;
use crate::common::constants::ADAPTIVE_PATTERN_LENGTH;
use crate::common::{BpuError, DEFAULT_BRANCH_IP_BITS, Result};
use crate::config::BpuConfig;

/// Builds a type-erased predictor from `(size_in_entries, ways, branch_ip_size_in_bits)`.
type Builder = fn(usize, usize, u32) -> Result<Box<dyn BranchPredictor>>;

/// Mode registry, in the order modes are reported to the operator.
static PREDICTORS: [(&str, Builder); 5] = [
    ("static_always_taken", build::<AlwaysTaken>),
    ("static_backward_jumps", build::<BackwardJumps>),
    ("dynamic_one_bit", build::<OneBit>),
    ("dynamic_two_bit", build::<TwoBit>),
    ("adaptive_two_level", build::<Adaptive<ADAPTIVE_PATTERN_LENGTH>>),
];

fn build<D: Direction + 'static>(
    size_in_entries: usize,
    ways: usize,
    branch_ip_size_in_bits: u32,
) -> Result<Box<dyn BranchPredictor>> {
    Ok(Box::new(PredictionTable::<D>::new(
        size_in_entries,
        ways,
        branch_ip_size_in_bits,
    )?))
}

/// Names of every supported prediction mode, in registry order.
pub fn names() -> impl Iterator<Item = &'static str> {
    PREDICTORS.iter().map(|&(name, _)| name)
}

/// Whether `name` is a supported prediction mode.
pub fn is_supported(name: &str) -> bool {
    names().any(|n| n == name)
}

/// Builds the predictor for `name`, returning configuration errors.
///
/// # Errors
///
/// - [`BpuError::UnknownMode`] if `name` is not in the registry.
/// - [`BpuError::InvalidGeometry`] if the table shape is rejected.
pub fn try_create(
    name: &str,
    size_in_entries: usize,
    ways: usize,
    branch_ip_size_in_bits: u32,
) -> Result<Box<dyn BranchPredictor>> {
    let Some(&(_, builder)) = PREDICTORS.iter().find(|&&(n, _)| n == name) else {
        return Err(BpuError::UnknownMode {
            name: name.to_owned(),
            supported: names().collect(),
        });
    };

    let bp = builder(size_in_entries, ways, branch_ip_size_in_bits)?;
    debug!(
        mode = name,
        size_in_entries, ways, branch_ip_size_in_bits, "branch predictor created"
    );
    Ok(bp)
}

/// Builds the predictor for `name` with the default 32-bit address width.
///
/// Terminates the process on a configuration error; see [`create_with_ip_bits`].
pub fn create(name: &str, size_in_entries: usize, ways: usize) -> Box<dyn BranchPredictor> {
    create_with_ip_bits(name, size_in_entries, ways, DEFAULT_BRANCH_IP_BITS)
}

/// Builds the predictor for `name`.
///
/// A configuration error is fatal: the invalid mode and every supported
/// mode are printed to stderr and the process exits with status 1.
pub fn create_with_ip_bits(
    name: &str,
    size_in_entries: usize,
    ways: usize,
    branch_ip_size_in_bits: u32,
) -> Box<dyn BranchPredictor> {
    try_create(name, size_in_entries, ways, branch_ip_size_in_bits).unwrap_or_else(|e| fatal(&e))
}

/// Builds the predictor described by `config`, returning configuration errors.
///
/// # Errors
///
/// Same as [`try_create`].
pub fn try_from_config(config: &BpuConfig) -> Result<Box<dyn BranchPredictor>> {
    try_create(
        &config.mode,
        config.size_in_entries,
        config.ways,
        config.branch_ip_size_in_bits,
    )
}

/// Builds the predictor described by `config`; configuration errors are fatal.
pub fn from_config(config: &BpuConfig) -> Box<dyn BranchPredictor> {
    try_from_config(config).unwrap_or_else(|e| fatal(&e))
}

fn fatal(err: &BpuError) -> ! {
    error!(%err, "branch predictor configuration rejected");
    eprintln!("\n[!] FATAL: {err}");
    if let BpuError::UnknownMode { supported, .. } = err {
        eprintln!("Supported modes:");
        for name in supported {
            eprintln!("\t{name}");
        }
    }
    process::exit(1);
}
