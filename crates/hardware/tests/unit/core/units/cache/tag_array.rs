//! Tag Array Tests.
//!
//! Verifies geometry validation, set/tag decomposition, the difference
//! between `peek` and `lookup`, LRU eviction on insert, and address-width
//! masking.

use bpsim_core::common::BpuError;
use bpsim_core::core::units::cache::{AddressStore, TagArray, TagArrayGeometry};
use pretty_assertions::assert_eq;
use rstest::rstest;

const fn geometry(size_in_entries: usize, ways: usize, addr_size_in_bits: u32) -> TagArrayGeometry {
    TagArrayGeometry {
        size_in_entries,
        ways,
        line_size: 4,
        addr_size_in_bits,
    }
}

fn tag_array(size_in_entries: usize, ways: usize, bits: u32) -> TagArray {
    match TagArray::new(&geometry(size_in_entries, ways, bits)) {
        Ok(tags) => tags,
        Err(e) => panic!("geometry rejected: {e}"),
    }
}

// ══════════════════════════════════════════════════════════
// 1. Geometry
// ══════════════════════════════════════════════════════════

#[rstest]
#[case(128, 4, 32)]
#[case(128, 16, 8)]
#[case(64, 1, 64)]
#[case(16, 16, 1)]
#[case(1, 1, 1)]
fn valid_geometry_yields_sets(#[case] size: usize, #[case] ways: usize, #[case] sets: usize) {
    assert_eq!(geometry(size, ways, 32).sets(), Ok(sets));
    let tags = tag_array(size, ways, 32);
    assert_eq!(tags.sets(), sets);
    assert_eq!(tags.ways(), ways);
}

#[rstest]
#[case::zero_ways(geometry(128, 0, 32))]
#[case::zero_entries(geometry(0, 4, 32))]
#[case::not_divisible(geometry(130, 4, 32))]
#[case::entries_not_power_of_two(geometry(12, 4, 32))]
#[case::capacity_not_power_of_two(geometry(500, 16, 32))]
#[case::ways_not_power_of_two(geometry(64, 9, 32))]
#[case::evenly_split_but_odd_ways(geometry(48, 3, 32))]
#[case::ways_exceed_entries(geometry(4, 8, 32))]
#[case::zero_address_bits(geometry(128, 4, 0))]
#[case::address_bits_too_wide(geometry(128, 4, 65))]
#[case::line_not_power_of_two(TagArrayGeometry { line_size: 6, ..geometry(128, 4, 32) })]
#[case::zero_line(TagArrayGeometry { line_size: 0, ..geometry(128, 4, 32) })]
fn invalid_geometry_is_rejected(#[case] bad: TagArrayGeometry) {
    assert!(matches!(bad.sets(), Err(BpuError::InvalidGeometry { .. })));
    assert!(TagArray::new(&bad).is_err());
}

// ══════════════════════════════════════════════════════════
// 2. Addressing
// ══════════════════════════════════════════════════════════

#[rstest]
#[case(0x0000, 0)]
#[case(0x0004, 1)]
#[case(0x001C, 7)]
#[case(0x0020, 0)]
#[case(0x1004, 1)]
fn set_index_uses_line_granular_bits(#[case] addr: u64, #[case] set: usize) {
    let tags = tag_array(32, 4, 32);
    assert_eq!(tags.set_index(addr), set);
}

#[test]
fn addresses_within_a_line_share_a_tag() {
    let mut tags = tag_array(32, 4, 32);
    let way = tags.insert(0x1000);
    assert_eq!(tags.peek(0x1003), Some(way));
    assert_eq!(tags.peek(0x1004), None);
}

#[test]
fn same_set_different_tag_misses() {
    let mut tags = tag_array(32, 4, 32);
    let _ = tags.insert(0x1000);
    // 8 sets of 4-byte lines: 0x1020 maps to the same set with another tag.
    assert_eq!(tags.set_index(0x1020), tags.set_index(0x1000));
    assert_eq!(tags.peek(0x1020), None);
}

#[test]
fn high_address_bits_are_ignored() {
    let mut tags = tag_array(32, 4, 32);
    let way = tags.insert(0x1000);
    assert_eq!(tags.peek(0xFFFF_0000_0000_1000), Some(way));
    assert_eq!(tags.set_index(0xFFFF_0000_0000_1000), tags.set_index(0x1000));
}

#[test]
fn full_width_addresses_do_not_alias() {
    let mut tags = tag_array(32, 4, 64);
    let _ = tags.insert(0x1000);
    assert_eq!(tags.peek(0x1_0000_1000), None);
    let _ = tags.insert(u64::MAX);
    assert!(tags.peek(u64::MAX).is_some());
}

// ══════════════════════════════════════════════════════════
// 3. Replacement
// ══════════════════════════════════════════════════════════

#[test]
fn insert_fills_ways_before_evicting() {
    let mut tags = tag_array(4, 4, 32);
    let addrs = [0x1000, 0x2000, 0x3000, 0x4000];
    let mut ways: Vec<usize> = addrs.iter().map(|&a| tags.insert(a)).collect();
    for &a in &addrs {
        assert!(tags.peek(a).is_some());
    }
    ways.sort_unstable();
    assert_eq!(ways, vec![0, 1, 2, 3]);
}

#[test]
fn insert_of_resident_address_reuses_its_way() {
    let mut tags = tag_array(4, 4, 32);
    let way = tags.insert(0x1000);
    let _ = tags.insert(0x2000);
    assert_eq!(tags.insert(0x1000), way);
    assert!(tags.peek(0x2000).is_some());
}

#[test]
fn insert_evicts_least_recently_used() {
    let mut tags = tag_array(2, 2, 32);
    let a = tags.insert(0x1000);
    let _ = tags.insert(0x2000);

    // 0x1000 is now the LRU way.
    let c = tags.insert(0x3000);
    assert_eq!(c, a);
    assert_eq!(tags.peek(0x1000), None);
    assert!(tags.peek(0x2000).is_some());
}

#[test]
fn peek_leaves_replacement_order_alone() {
    let mut tags = tag_array(2, 2, 32);
    let _ = tags.insert(0x1000);
    let _ = tags.insert(0x2000);
    for _ in 0..4 {
        assert!(tags.peek(0x1000).is_some());
    }
    let _ = tags.insert(0x3000);
    assert_eq!(tags.peek(0x1000), None);
    assert!(tags.peek(0x2000).is_some());
}

#[test]
fn lookup_promotes_the_way() {
    let mut tags = tag_array(2, 2, 32);
    let a = tags.insert(0x1000);
    let _ = tags.insert(0x2000);
    assert_eq!(tags.lookup(0x1000), Some(a));

    let _ = tags.insert(0x3000);
    assert_eq!(tags.peek(0x1000), Some(a));
    assert_eq!(tags.peek(0x2000), None);
}

#[test]
fn lookup_miss_changes_nothing() {
    let mut tags = tag_array(2, 2, 32);
    let _ = tags.insert(0x1000);
    let _ = tags.insert(0x2000);
    assert_eq!(tags.lookup(0x5000), None);
    assert_eq!(tags.peek(0x5000), None);

    let _ = tags.insert(0x3000);
    assert_eq!(tags.peek(0x1000), None);
}

#[test]
fn sets_replace_independently() {
    let mut tags = tag_array(4, 2, 32);
    // Two sets: 0x1000 and 0x1008 map to set 0, 0x1004 to set 1.
    let _ = tags.insert(0x1004);
    let _ = tags.insert(0x1000);
    let _ = tags.insert(0x1008);
    let _ = tags.insert(0x1010);
    assert_eq!(tags.peek(0x1000), None);
    assert!(tags.peek(0x1004).is_some());
}
