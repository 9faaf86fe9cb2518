//! Set-Associative Tag Array.
//!
//! This module implements the associative address store the predictor table
//! is built on. It keeps tags only (no data payload): a hit reports which way
//! of the address's set holds the tag, and the caller keeps whatever per-slot
//! state it needs in its own `[way][set]` storage.
//!
//! Two kinds of lookup are provided. [`AddressStore::peek`] never touches the
//! replacement state, so prediction queries can be issued freely.
//! [`AddressStore::lookup`] and [`AddressStore::insert`] promote the way in the
//! replacement order and are reserved for training.

/// Tag array replacement policy implementations.
pub mod policies;

use self::policies::{LruPolicy, ReplacementPolicy};
use crate::common::{BpuError, Result};

/// Associative addressing and replacement primitive.
///
/// Ways are returned as plain indices; together with [`set_index`](Self::set_index)
/// they form the `(way, set)` coordinate of an address.
pub trait AddressStore {
    /// Looks `addr` up without updating replacement order.
    ///
    /// Returns `Some(way)` on a hit, `None` on a miss.
    fn peek(&self, addr: u64) -> Option<usize>;

    /// Looks `addr` up and, on a hit, marks the way most recently used.
    ///
    /// Returns `Some(way)` on a hit, `None` on a miss.
    fn lookup(&mut self, addr: u64) -> Option<usize>;

    /// Computes the set index for `addr`.
    fn set_index(&self, addr: u64) -> usize;

    /// Installs `addr` and returns the way it now occupies.
    ///
    /// On a full set the policy victim is silently evicted.
    fn insert(&mut self, addr: u64) -> usize;
}

/// Shape of a tag array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagArrayGeometry {
    /// Total number of tags held across all ways.
    pub size_in_entries: usize,
    /// Associativity.
    pub ways: usize,
    /// Bytes of address space covered by one tag. Must be a power of two.
    pub line_size: usize,
    /// Number of significant address bits; higher bits are ignored.
    pub addr_size_in_bits: u32,
}

impl TagArrayGeometry {
    /// Validates the geometry and returns the number of sets.
    ///
    /// # Errors
    ///
    /// Returns [`BpuError::InvalidGeometry`] when any parameter is zero, the
    /// line size is not a power of two, the address width is outside `1..=64`,
    /// the capacity or the way count is not a power of two, or there are more
    /// ways than entries.
    pub fn sets(&self) -> Result<usize> {
        if self.ways == 0 {
            return Err(BpuError::geometry("number of ways must be non-zero"));
        }
        if self.size_in_entries == 0 {
            return Err(BpuError::geometry("size in entries must be non-zero"));
        }
        if !self.line_size.is_power_of_two() {
            return Err(BpuError::geometry(format!(
                "line size {} is not a power of two",
                self.line_size
            )));
        }
        if self.addr_size_in_bits == 0 || self.addr_size_in_bits > 64 {
            return Err(BpuError::geometry(format!(
                "address width {} is outside 1..=64 bits",
                self.addr_size_in_bits
            )));
        }
        if !self.size_in_entries.is_power_of_two() {
            return Err(BpuError::geometry(format!(
                "size of {} entries is not a power of two",
                self.size_in_entries
            )));
        }
        if !self.ways.is_power_of_two() {
            return Err(BpuError::geometry(format!(
                "{} ways is not a power of two",
                self.ways
            )));
        }
        if self.ways > self.size_in_entries {
            return Err(BpuError::geometry(format!(
                "{} ways exceed the capacity of {} entries",
                self.ways, self.size_in_entries
            )));
        }
        Ok(self.size_in_entries / self.ways)
    }
}

/// A tag slot: the stored tag and whether it is in use.
#[derive(Clone, Copy, Default, Debug)]
struct TagLine {
    tag: u64,
    valid: bool,
}

/// Set-associative tag array with a pluggable replacement policy.
#[derive(Debug, Clone)]
pub struct TagArray<P = LruPolicy> {
    /// Tag slots laid out set-major: `lines[set * ways + way]`.
    lines: Vec<TagLine>,
    num_sets: usize,
    ways: usize,
    line_bytes: u64,
    addr_mask: u64,
    policy: P,
}

impl TagArray<LruPolicy> {
    /// Creates an LRU-managed tag array.
    ///
    /// # Errors
    ///
    /// Returns [`BpuError::InvalidGeometry`] if the geometry is rejected by
    /// [`TagArrayGeometry::sets`].
    pub fn new(geometry: &TagArrayGeometry) -> Result<Self> {
        let sets = geometry.sets()?;
        Self::with_policy(geometry, LruPolicy::new(sets, geometry.ways))
    }
}

impl<P: ReplacementPolicy> TagArray<P> {
    /// Creates a tag array managed by `policy`.
    ///
    /// The policy must be sized for `geometry.sets()` sets and
    /// `geometry.ways` ways.
    ///
    /// # Errors
    ///
    /// Returns [`BpuError::InvalidGeometry`] if the geometry is rejected by
    /// [`TagArrayGeometry::sets`].
    pub fn with_policy(geometry: &TagArrayGeometry, policy: P) -> Result<Self> {
        let num_sets = geometry.sets()?;
        let addr_mask = if geometry.addr_size_in_bits == 64 {
            u64::MAX
        } else {
            (1u64 << geometry.addr_size_in_bits) - 1
        };

        Ok(Self {
            lines: vec![TagLine::default(); num_sets * geometry.ways],
            num_sets,
            ways: geometry.ways,
            line_bytes: geometry.line_size as u64,
            addr_mask,
            policy,
        })
    }

    /// Number of sets.
    pub const fn sets(&self) -> usize {
        self.num_sets
    }

    /// Associativity.
    pub const fn ways(&self) -> usize {
        self.ways
    }

    fn tag(&self, addr: u64) -> u64 {
        (addr & self.addr_mask) / (self.line_bytes * self.num_sets as u64)
    }

    /// Finds the way holding `addr` within its set.
    fn find(&self, addr: u64) -> Option<usize> {
        let base = self.set_index(addr) * self.ways;
        let tag = self.tag(addr);
        self.lines[base..base + self.ways]
            .iter()
            .position(|line| line.valid && line.tag == tag)
    }
}

impl<P: ReplacementPolicy> AddressStore for TagArray<P> {
    fn peek(&self, addr: u64) -> Option<usize> {
        self.find(addr)
    }

    fn lookup(&mut self, addr: u64) -> Option<usize> {
        let way = self.find(addr)?;
        self.policy.update(self.set_index(addr), way);
        Some(way)
    }

    fn set_index(&self, addr: u64) -> usize {
        (((addr & self.addr_mask) / self.line_bytes) % self.num_sets as u64) as usize
    }

    fn insert(&mut self, addr: u64) -> usize {
        let set = self.set_index(addr);
        let way = self
            .find(addr)
            .unwrap_or_else(|| self.policy.get_victim(set));

        self.lines[set * self.ways + way] = TagLine {
            tag: self.tag(addr),
            valid: true,
        };
        self.policy.update(set, way);
        way
    }
}
