//! SlotStore implementation
//!
//! Ordered fixed-capacity slots with first-empty-slot insertion.

use tracing::debug;

use crate::record::Cpu;

/// Bounded store of CPU records
///
/// Capacity is fixed at construction. Occupied slots keep their index for
/// the lifetime of the store.
pub struct SlotStore {
    /// The record slots, each empty or holding one record
    slots: Vec<Option<Cpu>>,
}

impl SlotStore {
    /// Create a store with the given number of empty slots
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: vec![None; capacity],
        }
    }

    /// Add a record into the first empty slot
    ///
    /// Returns `true` if a slot was found, `false` if the store is full.
    /// A failed add leaves the store untouched.
    pub fn add(&mut self, record: Cpu) -> bool {
        for (index, slot) in self.slots.iter_mut().enumerate() {
            if slot.is_none() {
                debug!(slot = index, name = record.name(), "record stored");
                *slot = Some(record);
                return true;
            }
        }

        debug!(capacity = self.slots.len(), "store full, record rejected");
        false
    }

    /// Compacted snapshot of the occupied slots, in slot order
    ///
    /// Builds a new sequence; internal storage is not mutated.
    pub fn list(&self) -> Vec<Cpu> {
        self.slots.iter().flatten().cloned().collect()
    }

    /// Number of occupied slots
    pub fn count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Fixed number of slots
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Record at the given slot index
    ///
    /// Returns `None` when the index is out of bounds or the slot is empty.
    pub fn get(&self, index: usize) -> Option<&Cpu> {
        self.slots.get(index)?.as_ref()
    }

    /// True when no slot is occupied
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(|slot| slot.is_none())
    }

    /// True when every slot is occupied
    pub fn is_full(&self) -> bool {
        self.slots.iter().all(|slot| slot.is_some())
    }
}
