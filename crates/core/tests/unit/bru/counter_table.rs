//! Counter Table Tests.
//!
//! Verifies address folding, initial state and the saturation rule of the
//! direct-mapped counter table.

use bpsim_core::bru::{CounterTable, Direction};
use bpsim_core::common::ConfigError;
use rstest::rstest;

#[rstest]
#[case(0x0, 0)]
#[case(0x1, 0)]
#[case(0x2, 1)]
#[case(0x8, 0)]
#[case(0xA, 1)]
#[case(0xFFFF_FFFF, 3)]
fn index_for_small_table(#[case] address: u64, #[case] expected: usize) {
    let table = CounterTable::with_size(4).unwrap();
    assert_eq!(table.index_for(address), expected);
}

#[rstest]
#[case(0x0000_0000, 0)]
#[case(0x0001_0000, 0x8000)]
#[case(0x0002_0000, 0)]
#[case(0x0040_1a3e, 0x0d1f)]
#[case(u64::MAX, 0xFFFF)]
fn index_for_canonical_table(#[case] address: u64, #[case] expected: usize) {
    let table = CounterTable::new();
    assert_eq!(table.index_for(address), expected);
}

/// Every address lands inside the table, including the extremes of the range.
#[test]
fn index_always_in_range() {
    let table = CounterTable::with_size(8).unwrap();
    for address in [0, 1, 7, 15, 16, 1 << 32, u64::MAX - 1, u64::MAX] {
        assert!(table.index_for(address) < table.len());
    }
}

#[test]
fn fresh_table_is_zeroed() {
    let table = CounterTable::new();
    assert!(!table.is_empty());
    assert_eq!(table.get(0), 0);
    assert_eq!(table.get(table.len() - 1), 0);
}

#[test]
fn increment_walks_up_and_saturates() {
    let mut table = CounterTable::with_size(4).unwrap();
    let seen: Vec<u8> = (0..5)
        .map(|_| {
            table.bump(3, Direction::Increment);
            table.get(3)
        })
        .collect();
    assert_eq!(seen, vec![1, 2, 3, 3, 3]);
}

#[test]
fn decrement_walks_down_and_saturates() {
    let mut table = CounterTable::with_size(4).unwrap();
    for _ in 0..3 {
        table.bump(0, Direction::Increment);
    }
    let seen: Vec<u8> = (0..5)
        .map(|_| {
            table.bump(0, Direction::Decrement);
            table.get(0)
        })
        .collect();
    assert_eq!(seen, vec![2, 1, 0, 0, 0]);
}

/// Bumping one slot leaves its neighbours untouched.
#[test]
fn bump_is_local_to_one_slot() {
    let mut table = CounterTable::with_size(4).unwrap();
    table.bump(1, Direction::Increment);
    assert_eq!(table.get(0), 0);
    assert_eq!(table.get(1), 1);
    assert_eq!(table.get(2), 0);
    assert_eq!(table.get(3), 0);
}

#[rstest]
#[case(0)]
#[case(3)]
#[case(96)]
fn with_size_rejects_invalid(#[case] size: usize) {
    let err = CounterTable::with_size(size).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidTableSize(s) if s == size));
}
