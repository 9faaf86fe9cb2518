//! Prediction Entries.
//!
//! A prediction entry is the per-slot state of the predictor table. The
//! slot's lifecycle is shared by every algorithm and modelled here once:
//!
//! - **Cold:** freshly constructed or reset on reallocation; no target known.
//! - **Trained:** seeded with a target and updated by every training call.
//!
//! What varies between algorithms is only the direction state, captured by
//! the [`Direction`] trait and implemented in `static_bp`, `one_bit`,
//! `two_bit` and `adaptive`.

use std::fmt;

/// Direction-prediction algorithm held inside a [`PredictionEntry`].
///
/// `Default` is the cold state a slot takes when it is (re)allocated. The
/// state is `Copy` so that reallocation never allocates.
pub trait Direction: Copy + Default + fmt::Debug {
    /// Prediction of a cold slot, which has neither direction state nor a
    /// target. Must equal `Self::default().is_taken(pc, None)` for every `pc`.
    const COLD_TAKEN: bool;

    /// Predicts the direction of the branch at `pc`.
    ///
    /// `target` is the last trained target, or `None` while the slot is cold.
    fn is_taken(&self, pc: u64, target: Option<u64>) -> bool;

    /// Applies one observed outcome.
    fn train(&mut self, taken: bool);
}

/// Per-slot predictor state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PredictionEntry<D> {
    /// Never trained since the last reset.
    #[default]
    Cold,
    /// Holds a target and the algorithm's direction state.
    Trained {
        /// Direction state of the algorithm.
        direction: D,
        /// Most recently trained target.
        target: u64,
        /// Number of training calls applied since allocation.
        updates: u64,
    },
}

impl<D: Direction> PredictionEntry<D> {
    /// Predicts whether the branch at `pc` will be taken.
    #[inline]
    pub fn predict_taken(&self, pc: u64) -> bool {
        match self {
            Self::Cold => D::COLD_TAKEN,
            Self::Trained {
                direction, target, ..
            } => direction.is_taken(pc, Some(*target)),
        }
    }

    /// Returns the most recently trained target, `None` while cold.
    #[inline]
    pub const fn predict_target(&self, _pc: u64) -> Option<u64> {
        match self {
            Self::Cold => None,
            Self::Trained { target, .. } => Some(*target),
        }
    }

    /// Returns the slot to the cold state.
    pub fn reset(&mut self) {
        *self = Self::Cold;
    }

    /// Records `target` without touching the direction state.
    ///
    /// A cold slot becomes trained with zero updates.
    pub fn seed(&mut self, target: u64) {
        match self {
            Self::Cold => {
                *self = Self::Trained {
                    direction: D::default(),
                    target,
                    updates: 0,
                };
            }
            Self::Trained { target: t, .. } => *t = target,
        }
    }

    /// Applies one resolved outcome: direction state and target.
    pub fn train(&mut self, taken: bool, target: u64) {
        match self {
            Self::Cold => {
                let mut direction = D::default();
                direction.train(taken);
                *self = Self::Trained {
                    direction,
                    target,
                    updates: 1,
                };
            }
            Self::Trained {
                direction,
                target: t,
                updates,
            } => {
                direction.train(taken);
                *t = target;
                *updates = updates.saturating_add(1);
            }
        }
    }

    /// Whether the slot has been reset and not trained since.
    pub const fn is_cold(&self) -> bool {
        matches!(self, Self::Cold)
    }

    /// Number of training calls applied since the slot was allocated.
    pub const fn updates(&self) -> u64 {
        match self {
            Self::Cold => 0,
            Self::Trained { updates, .. } => *updates,
        }
    }

    /// Direction state, `None` while cold.
    pub const fn direction(&self) -> Option<&D> {
        match self {
            Self::Cold => None,
            Self::Trained { direction, .. } => Some(direction),
        }
    }
}
