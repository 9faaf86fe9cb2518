//! Two-Bit Saturating Counter Predictor.
//!
//! A four-state counter that needs two consecutive mispredictions to flip a
//! strongly biased branch. The same counter is the building block of the
//! adaptive two-level predictor's pattern table.
//!
//! ```text
//!   not taken          not taken          not taken
//! SNT <------- WNT <------- WT <------- ST
//!     -------->    -------->   -------->
//!       taken        taken       taken
//! ```

use super::entry::Direction;

/// Two-bit saturating counter.
///
/// The cold state is `WeaklyNotTaken`, so a single taken outcome is enough
/// to predict taken.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TwoBit {
    /// Predict not taken; two taken outcomes needed to flip.
    StronglyNotTaken,
    /// Predict not taken; one taken outcome flips.
    #[default]
    WeaklyNotTaken,
    /// Predict taken; one not-taken outcome flips.
    WeaklyTaken,
    /// Predict taken; two not-taken outcomes needed to flip.
    StronglyTaken,
}

impl TwoBit {
    /// Whether this state predicts taken.
    #[inline]
    pub const fn predicts_taken(self) -> bool {
        matches!(self, Self::WeaklyTaken | Self::StronglyTaken)
    }

    /// Moves one state toward `StronglyTaken`, saturating.
    #[inline]
    pub const fn strengthen(self) -> Self {
        match self {
            Self::StronglyNotTaken => Self::WeaklyNotTaken,
            Self::WeaklyNotTaken => Self::WeaklyTaken,
            Self::WeaklyTaken | Self::StronglyTaken => Self::StronglyTaken,
        }
    }

    /// Moves one state toward `StronglyNotTaken`, saturating.
    #[inline]
    pub const fn weaken(self) -> Self {
        match self {
            Self::StronglyNotTaken | Self::WeaklyNotTaken => Self::StronglyNotTaken,
            Self::WeaklyTaken => Self::WeaklyNotTaken,
            Self::StronglyTaken => Self::WeaklyTaken,
        }
    }

    /// Applies one outcome: exactly one transition, never more.
    #[inline]
    pub const fn update(&mut self, taken: bool) {
        *self = if taken {
            self.strengthen()
        } else {
            self.weaken()
        };
    }
}

impl Direction for TwoBit {
    const COLD_TAKEN: bool = Self::WeaklyNotTaken.predicts_taken();

    #[inline]
    fn is_taken(&self, _pc: u64, _target: Option<u64>) -> bool {
        self.predicts_taken()
    }

    #[inline]
    fn train(&mut self, taken: bool) {
        self.update(taken);
    }
}
