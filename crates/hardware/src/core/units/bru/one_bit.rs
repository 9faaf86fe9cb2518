//! One-Bit Dynamic Predictor.
//!
//! Remembers the last observed direction of each branch and predicts it will
//! repeat. A loop branch mispredicts twice per loop execution: once on exit
//! and once on the next entry.

use super::entry::Direction;

/// Last-outcome direction policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OneBit {
    taken: bool,
}

impl Direction for OneBit {
    const COLD_TAKEN: bool = false;

    #[inline]
    fn is_taken(&self, _pc: u64, _target: Option<u64>) -> bool {
        self.taken
    }

    /// Overwrites the stored bit unconditionally.
    #[inline]
    fn train(&mut self, taken: bool) {
        self.taken = taken;
    }
}
