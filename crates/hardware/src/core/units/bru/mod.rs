//! Branch prediction unit (BRU).
//!
//! This module contains the set-associative prediction table, the
//! per-slot prediction entries, the five direction algorithms the table can
//! be instantiated with, and the selector that builds a table by mode name.
//!
//! | Mode                    | Direction policy               |
//! |-------------------------|--------------------------------|
//! | `static_always_taken`   | [`AlwaysTaken`]                |
//! | `static_backward_jumps` | [`BackwardJumps`]              |
//! | `dynamic_one_bit`       | [`OneBit`]                     |
//! | `dynamic_two_bit`       | [`TwoBit`]                     |
//! | `adaptive_two_level`    | [`Adaptive<2>`](Adaptive)      |

pub use self::adaptive::Adaptive;
pub use self::branch_predictor::{BranchOutcomeEvent, BranchPredictionInfo, BranchPredictor};
pub use self::entry::{Direction, PredictionEntry};
pub use self::one_bit::OneBit;
pub use self::static_bp::{AlwaysTaken, BackwardJumps};
pub use self::table::PredictionTable;
pub use self::two_bit::TwoBit;

/// Adaptive two-level predictor with a per-entry local history.
pub mod adaptive;

/// Branch predictor trait and the prediction/outcome records.
pub mod branch_predictor;

/// Prediction entry lifecycle and the direction-policy trait.
pub mod entry;

/// One-bit last-outcome predictor.
pub mod one_bit;

/// Predictor selection by mode name.
pub mod selector;

/// Static predictors (always taken, backward taken).
pub mod static_bp;

/// Set-associative prediction table.
pub mod table;

/// Two-bit saturating counter predictor.
pub mod two_bit;
