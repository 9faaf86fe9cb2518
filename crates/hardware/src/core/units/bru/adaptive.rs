//! Adaptive Two-Level Predictor.
//!
//! Each entry keeps its own K-bit history of recent outcomes and a pattern
//! table of `2^K` two-bit counters indexed by that history. A branch with a
//! short repeating pattern (e.g. taken, taken, not-taken) trains a separate
//! counter per history value and is eventually predicted exactly.
//!
//! # Performance
//!
//! - **Time Complexity:** O(1) for predict and train
//! - **Space Complexity:** `2^MAX_PATTERN_LENGTH` counters per entry, stored
//!   inline so that (re)allocating a slot never touches the heap

use super::entry::Direction;
use super::two_bit::TwoBit;

/// Longest supported history.
pub const MAX_PATTERN_LENGTH: usize = 4;

/// Per-entry local history predictor with a `K`-bit pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Adaptive<const K: usize> {
    /// Last `K` outcomes, newest in bit 0.
    history: u32,
    /// Pattern table indexed by `history`; only the first `2^K` are used.
    counters: [TwoBit; 1 << MAX_PATTERN_LENGTH],
}

impl<const K: usize> Adaptive<K> {
    const MASK: u32 = {
        assert!(
            K >= 1 && K <= MAX_PATTERN_LENGTH,
            "pattern length must be in 1..=MAX_PATTERN_LENGTH"
        );
        (1 << K) - 1
    };

    /// Current history register value.
    pub const fn history(&self) -> u32 {
        self.history
    }

    /// Counter selected by the current history.
    #[inline]
    pub fn current_counter(&self) -> TwoBit {
        self.counters[self.history as usize]
    }
}

impl<const K: usize> Default for Adaptive<K> {
    /// All-taken history and weakly-not-taken counters.
    fn default() -> Self {
        Self {
            history: Self::MASK,
            counters: [TwoBit::WeaklyNotTaken; 1 << MAX_PATTERN_LENGTH],
        }
    }
}

impl<const K: usize> Direction for Adaptive<K> {
    const COLD_TAKEN: bool = TwoBit::WeaklyNotTaken.predicts_taken();

    #[inline]
    fn is_taken(&self, _pc: u64, _target: Option<u64>) -> bool {
        self.current_counter().predicts_taken()
    }

    /// Updates the selected counter, then shifts the outcome into history.
    #[inline]
    fn train(&mut self, taken: bool) {
        self.counters[self.history as usize].update(taken);
        self.history = ((self.history << 1) | u32::from(taken)) & Self::MASK;
    }
}
