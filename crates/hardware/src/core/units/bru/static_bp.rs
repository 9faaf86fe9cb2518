//! Static Branch Predictors.
//!
//! Direction policies that ignore observed outcomes:
//! - `AlwaysTaken` predicts every branch taken.
//! - `BackwardJumps` predicts a branch taken when its target lies at or below
//!   the branch (loop back-edges), and not taken otherwise.
//!
//! Both still carry the last trained target through their prediction entry,
//! so a taken prediction comes with a usable destination.

use super::entry::Direction;

/// Always Taken direction policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AlwaysTaken;

impl Direction for AlwaysTaken {
    const COLD_TAKEN: bool = true;

    /// Always predicts taken, independent of trained state.
    #[inline]
    fn is_taken(&self, _pc: u64, _target: Option<u64>) -> bool {
        true
    }

    #[inline]
    fn train(&mut self, _taken: bool) {}
}

/// Backward-Taken / Forward-Not-Taken direction policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BackwardJumps {
    /// Last observed direction. Kept for inspection; never consulted.
    last_taken: bool,
}

impl BackwardJumps {
    /// Last observed direction.
    pub const fn last_taken(&self) -> bool {
        self.last_taken
    }
}

impl Direction for BackwardJumps {
    /// A cold slot has no target to compare against.
    const COLD_TAKEN: bool = false;

    /// Predicts taken iff the trained target is at or below `pc`.
    ///
    /// A cold slot has no target and predicts not taken.
    #[inline]
    fn is_taken(&self, pc: u64, target: Option<u64>) -> bool {
        target.is_some_and(|t| t <= pc)
    }

    #[inline]
    fn train(&mut self, taken: bool) {
        self.last_taken = taken;
    }
}
