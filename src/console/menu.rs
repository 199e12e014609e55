//! Menu actions and input parsing
//!
//! Turns raw console lines into typed menu actions and record fields.
//! Every parser reports failure as an `Input` error carrying the offending
//! text; the controller prints it and the session continues.

use crate::error::{CpudexError, Result};

/// One action selectable from the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    /// Prompt for a new record and add it to the store
    Add,

    /// Print every stored record
    List,

    /// Print the number of occupied slots
    Count,

    /// Print the fixed store capacity
    Capacity,

    /// Prompt for a slot index and print that record
    Show,

    /// Leave the interactive loop
    Quit,
}

// =============================================================================
// Choice Parsing
// =============================================================================

/// Parse a menu choice line
///
/// Choices map 1:1 to the store operations plus quit.
pub fn parse_choice(line: &str) -> Result<MenuAction> {
    match line.trim() {
        "1" => Ok(MenuAction::Add),
        "2" => Ok(MenuAction::List),
        "3" => Ok(MenuAction::Count),
        "4" => Ok(MenuAction::Capacity),
        "5" => Ok(MenuAction::Show),
        "6" => Ok(MenuAction::Quit),
        other => Err(CpudexError::Input(format!(
            "unknown menu choice '{}' (expected 1-6)",
            other
        ))),
    }
}

// =============================================================================
// Field Parsing
// =============================================================================

/// Parse a release year
pub fn parse_year(line: &str) -> Result<i32> {
    line.trim().parse().map_err(|_| {
        CpudexError::Input(format!("release year: not a whole number: '{}'", line.trim()))
    })
}

/// Parse a transistor count
///
/// Negative counts fail here rather than reaching the record.
pub fn parse_transistors(line: &str) -> Result<u64> {
    line.trim().parse().map_err(|_| {
        CpudexError::Input(format!(
            "transistor count: not a non-negative whole number: '{}'",
            line.trim()
        ))
    })
}

/// Parse a MIPS figure; a blank line means the performance is unknown
pub fn parse_mips(line: &str) -> Result<Option<f64>> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    trimmed
        .parse()
        .map(Some)
        .map_err(|_| CpudexError::Input(format!("MIPS: not a number: '{}'", trimmed)))
}

/// Parse a slot index
///
/// Negative indices fail here; the store only ever sees an in-type index
/// and answers the upper bound check itself.
pub fn parse_index(line: &str) -> Result<usize> {
    line.trim().parse().map_err(|_| {
        CpudexError::Input(format!(
            "slot index: not a non-negative whole number: '{}'",
            line.trim()
        ))
    })
}
