//! Store Module
//!
//! Fixed-capacity, in-memory container for CPU records.
//!
//! ## Responsibilities
//! - Hold up to C records in ordered slots
//! - Fill the first empty slot on add, reject when full
//! - Answer count/capacity/index queries without mutation
//!
//! ## Data Structure Choice
//! Using `Vec<Option<Cpu>>` allocated once at construction:
//! - Slot identity is stable (removal is not supported, so no compaction)
//! - Failure is a return value, never a panic: a full store makes `add`
//!   return `false`, an out-of-range index makes `get` return `None`

mod slots;

pub use slots::SlotStore;
