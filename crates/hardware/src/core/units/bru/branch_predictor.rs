//! Branch Predictor Interface.
//!
//! This module defines the `BranchPredictor` trait every predictor table
//! exposes, together with the two records that cross the predictor boundary:
//! the prediction handed to fetch and the resolved outcome handed back for
//! training.

/// Prediction for a single instruction address, as seen by the fetch stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BranchPredictionInfo {
    /// Address of the (possible) branch instruction.
    pub pc: u64,
    /// Whether the branch is predicted taken.
    pub taken: bool,
    /// Where fetch should continue: the trained target when predicted taken,
    /// the fallthrough address otherwise.
    pub target: u64,
}

impl BranchPredictionInfo {
    /// Creates a prediction record.
    pub const fn new(pc: u64, taken: bool, target: u64) -> Self {
        Self { pc, taken, target }
    }
}

/// Resolved outcome of a branch, delivered by the stage that executes it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BranchOutcomeEvent {
    /// Address of the branch instruction.
    pub pc: u64,
    /// Whether the branch was actually taken.
    pub taken: bool,
    /// The branch's destination address.
    pub target: u64,
}

impl BranchOutcomeEvent {
    /// Creates an outcome record.
    pub const fn new(pc: u64, taken: bool, target: u64) -> Self {
        Self { pc, taken, target }
    }
}

/// Uniform query/train contract of a branch prediction unit.
///
/// Queries take `&self` and never change replacement order; training takes
/// `&mut self`. A miss is an ordinary outcome (not taken, fallthrough target),
/// never an error.
pub trait BranchPredictor {
    /// Predicts direction and target for `pc` from a single table lookup.
    fn get_bp_info(&self, pc: u64) -> BranchPredictionInfo;

    /// Trains the predictor with a resolved branch outcome.
    ///
    /// Called once per resolved branch, whether or not the earlier
    /// prediction hit. May allocate an entry and evict another.
    fn update(&mut self, event: BranchOutcomeEvent);

    /// Predicts whether the branch at `pc` will be taken.
    fn is_taken(&self, pc: u64) -> bool {
        self.get_bp_info(pc).taken
    }

    /// Predicts the next fetch address after `pc`.
    fn get_target(&self, pc: u64) -> u64 {
        self.get_bp_info(pc).target
    }
}
