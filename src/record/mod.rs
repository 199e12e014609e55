//! Record Module
//!
//! The CPU record value and its text formatting.
//!
//! ## Responsibilities
//! - Hold one CPU entry (name, release year, transistor count, MIPS)
//! - Stay immutable after construction
//! - Render a human-readable description (see `format`)
//!
//! ## Representation Choice
//! Performance is `Option<f64>`: a record built without a MIPS figure
//! carries `None`, and every consumer has to decide what "unknown" means
//! for it. No reserved magic value to compare floats against.

pub mod format;

/// One CPU record
///
/// Immutable value: constructed once, never mutated, owned by the store
/// slot it occupies once added.
#[derive(Debug, Clone, PartialEq)]
pub struct Cpu {
    /// Model name
    name: String,

    /// Release year
    year: i32,

    /// Transistor count
    transistors: u64,

    /// Performance in MIPS (Millions of Instructions Per Second),
    /// `None` when unknown
    mips: Option<f64>,
}

impl Cpu {
    /// Create a record with a known MIPS figure
    pub fn new(name: impl Into<String>, year: i32, transistors: u64, mips: f64) -> Self {
        Self {
            name: name.into(),
            year,
            transistors,
            mips: Some(mips),
        }
    }

    /// Create a record whose performance is not known
    pub fn without_mips(name: impl Into<String>, year: i32, transistors: u64) -> Self {
        Self {
            name: name.into(),
            year,
            transistors,
            mips: None,
        }
    }

    /// Model name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Release year
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Transistor count
    pub fn transistors(&self) -> u64 {
        self.transistors
    }

    /// Performance in MIPS, `None` when unknown
    pub fn mips(&self) -> Option<f64> {
        self.mips
    }
}
