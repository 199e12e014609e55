//! SlotStore Tests
//!
//! Tests verify:
//! - First-empty-slot insertion and full-store rejection
//! - Compacted, order-preserving listing
//! - Count/capacity accounting
//! - Index lookups inside and outside the slot range

use cpudex::record::Cpu;
use cpudex::store::SlotStore;

fn cpu(name: &str) -> Cpu {
    Cpu::without_mips(name, 2000, 1_000_000)
}

// =============================================================================
// Basic Operations Tests
// =============================================================================

#[test]
fn test_new_store_is_empty() {
    let store = SlotStore::new(20);

    assert_eq!(store.count(), 0);
    assert_eq!(store.capacity(), 20);
    assert!(store.is_empty());
    assert!(!store.is_full());
}

#[test]
fn test_add_and_get() {
    let mut store = SlotStore::new(20);

    assert!(store.add(cpu("Intel 4004")));

    let record = store.get(0).expect("slot 0 occupied");
    assert_eq!(record.name(), "Intel 4004");
}

#[test]
fn test_add_fills_slots_in_order() {
    let mut store = SlotStore::new(4);

    assert!(store.add(cpu("first")));
    assert!(store.add(cpu("second")));
    assert!(store.add(cpu("third")));

    assert_eq!(store.get(0).unwrap().name(), "first");
    assert_eq!(store.get(1).unwrap().name(), "second");
    assert_eq!(store.get(2).unwrap().name(), "third");
    assert!(store.get(3).is_none());
}

#[test]
fn test_add_until_full() {
    let capacity = 20;
    let mut store = SlotStore::new(capacity);

    for i in 0..capacity {
        assert!(store.add(cpu(&format!("cpu-{}", i))), "add {} should succeed", i);
    }

    assert!(store.is_full());
    assert_eq!(store.count(), capacity);
}

#[test]
fn test_add_to_full_store_fails_without_side_effect() {
    let mut store = SlotStore::new(3);

    store.add(cpu("a"));
    store.add(cpu("b"));
    store.add(cpu("c"));

    let before = store.list();

    assert!(!store.add(cpu("overflow")));

    assert_eq!(store.count(), 3);
    assert_eq!(store.list(), before);
}

// =============================================================================
// Listing Tests
// =============================================================================

#[test]
fn test_list_empty_store() {
    let store = SlotStore::new(20);

    assert!(store.list().is_empty());
}

#[test]
fn test_list_length_equals_count() {
    let mut store = SlotStore::new(20);

    for i in 0..7 {
        store.add(cpu(&format!("cpu-{}", i)));
        assert_eq!(store.list().len(), store.count());
    }
}

#[test]
fn test_list_preserves_slot_order() {
    let mut store = SlotStore::new(20);

    store.add(cpu("alpha"));
    store.add(cpu("beta"));
    store.add(cpu("gamma"));

    let records = store.list();
    let names: Vec<&str> = records.iter().map(|c| c.name()).collect();
    assert_eq!(names, vec!["alpha", "beta", "gamma"]);
}

#[test]
fn test_list_is_a_snapshot() {
    let mut store = SlotStore::new(20);

    store.add(cpu("original"));
    let snapshot = store.list();

    store.add(cpu("later"));

    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot[0].name(), "original");
    assert_eq!(store.count(), 2);
}

// =============================================================================
// Lookup Tests
// =============================================================================

#[test]
fn test_get_out_of_range_returns_none() {
    let mut store = SlotStore::new(5);
    store.add(cpu("only"));

    assert!(store.get(store.capacity()).is_none());
    assert!(store.get(store.capacity() + 10).is_none());
}

#[test]
fn test_get_empty_slot_returns_none() {
    let mut store = SlotStore::new(5);
    store.add(cpu("only"));

    // In bounds but never filled
    assert!(store.get(3).is_none());
}

#[test]
fn test_get_is_stable_across_later_adds() {
    let mut store = SlotStore::new(5);

    store.add(cpu("slot-zero"));
    store.add(cpu("slot-one"));

    store.add(cpu("slot-two"));
    store.add(cpu("slot-three"));

    assert_eq!(store.get(0).unwrap().name(), "slot-zero");
    assert_eq!(store.get(1).unwrap().name(), "slot-one");
}

#[test]
fn test_get_returns_full_record() {
    let mut store = SlotStore::new(5);

    store.add(Cpu::new("Intel 4004", 1971, 2_300, 0.09));

    let record = store.get(0).unwrap();
    assert_eq!(record.year(), 1971);
    assert_eq!(record.transistors(), 2_300);
    assert_eq!(record.mips(), Some(0.09));
}

// =============================================================================
// Edge Cases
// =============================================================================

#[test]
fn test_capacity_two_scenario() {
    let mut store = SlotStore::new(2);

    let a = Cpu::without_mips("CPU A", 1990, 1_000_000);
    let b = Cpu::without_mips("CPU B", 1995, 3_000_000);
    let c = Cpu::without_mips("CPU C", 2000, 9_000_000);

    assert!(store.add(a.clone()));
    assert!(store.add(b.clone()));
    assert!(!store.add(c));

    assert_eq!(store.count(), 2);
    assert_eq!(store.list(), vec![a, b]);
}

#[test]
fn test_zero_capacity_store_is_always_full() {
    let mut store = SlotStore::new(0);

    assert!(store.is_full());
    assert!(!store.add(cpu("nowhere")));
    assert_eq!(store.count(), 0);
    assert!(store.get(0).is_none());
}

#[test]
fn test_duplicate_records_occupy_distinct_slots() {
    let mut store = SlotStore::new(5);

    store.add(cpu("same"));
    store.add(cpu("same"));

    assert_eq!(store.count(), 2);
    assert_eq!(store.get(0).unwrap().name(), "same");
    assert_eq!(store.get(1).unwrap().name(), "same");
}
