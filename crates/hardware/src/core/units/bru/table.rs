//! Set-Associative Prediction Table.
//!
//! The algorithm-agnostic predictor engine. Addressing and replacement are
//! delegated to an [`AddressStore`]; the table only owns a `[way][set]` grid
//! of [`PredictionEntry`] slots and keeps it in step with the store.
//!
//! - Prediction issues one non-mutating `peek` and never disturbs the
//!   replacement order.
//! - Training issues one touching `lookup`. On a miss it inserts the address
//!   (possibly evicting another branch), resets the slot, and seeds its
//!   target before training it, so no state leaks between addresses that
//!   share a coordinate.

use tracing::trace;

use super::branch_predictor::{BranchOutcomeEvent, BranchPredictionInfo, BranchPredictor};
use super::entry::{Direction, PredictionEntry};
use crate::common::{BP_LINE_SIZE, INSTRUCTION_SIZE, Result};
use crate::core::units::cache::{AddressStore, TagArray, TagArrayGeometry};

/// Predictor table for the direction algorithm `D`, addressed through `S`.
#[derive(Debug, Clone)]
pub struct PredictionTable<D, S = TagArray> {
    /// Entry grid indexed `[way][set]`.
    entries: Vec<Vec<PredictionEntry<D>>>,
    tags: S,
}

impl<D: Direction> PredictionTable<D, TagArray> {
    /// Creates a table backed by an LRU tag array.
    ///
    /// # Arguments
    ///
    /// * `size_in_entries` - Total entries across all ways.
    /// * `ways` - Associativity.
    /// * `branch_ip_size_in_bits` - Significant bits of a branch address.
    ///
    /// # Errors
    ///
    /// Returns [`BpuError::InvalidGeometry`](crate::common::BpuError::InvalidGeometry)
    /// if the capacity cannot be split into `ways` power-of-two columns.
    pub fn new(size_in_entries: usize, ways: usize, branch_ip_size_in_bits: u32) -> Result<Self> {
        let tags = TagArray::new(&TagArrayGeometry {
            size_in_entries,
            ways,
            line_size: BP_LINE_SIZE,
            addr_size_in_bits: branch_ip_size_in_bits,
        })?;
        let sets = tags.sets();
        Ok(Self::with_store(tags, ways, sets))
    }
}

impl<D: Direction, S: AddressStore> PredictionTable<D, S> {
    /// Creates a table over an existing address store.
    ///
    /// `ways` and `sets` must cover every coordinate `store` can report.
    pub fn with_store(store: S, ways: usize, sets: usize) -> Self {
        Self {
            entries: vec![vec![PredictionEntry::default(); sets]; ways],
            tags: store,
        }
    }

    /// Entry currently holding `pc`, if resident. Does not touch replacement state.
    pub fn resident(&self, pc: u64) -> Option<&PredictionEntry<D>> {
        let way = self.tags.peek(pc)?;
        Some(&self.entries[way][self.tags.set_index(pc)])
    }

    /// The underlying address store.
    pub const fn store(&self) -> &S {
        &self.tags
    }
}

impl<D: Direction, S: AddressStore> BranchPredictor for PredictionTable<D, S> {
    fn get_bp_info(&self, pc: u64) -> BranchPredictionInfo {
        let fallthrough = pc.wrapping_add(INSTRUCTION_SIZE);
        match self.resident(pc) {
            Some(entry) if entry.predict_taken(pc) => BranchPredictionInfo::new(
                pc,
                true,
                entry.predict_target(pc).unwrap_or(fallthrough),
            ),
            _ => BranchPredictionInfo::new(pc, false, fallthrough),
        }
    }

    fn update(&mut self, event: BranchOutcomeEvent) {
        let BranchOutcomeEvent { pc, taken, target } = event;
        let set = self.tags.set_index(pc);

        let way = if let Some(way) = self.tags.lookup(pc) {
            way
        } else {
            let way = self.tags.insert(pc);
            let entry = &mut self.entries[way][set];
            trace!(pc, way, set, evicted = !entry.is_cold(), "allocating predictor entry");
            entry.reset();
            entry.seed(target);
            way
        };

        self.entries[way][set].train(taken, target);
    }
}
