//! Console Module
//!
//! Menu rendering, line input, and input parsing.
//!
//! ## Responsibilities
//! - Render the menu and prompts to an injected writer
//! - Read raw lines from an injected reader
//! - Parse menu choices and record fields into typed values
//!
//! The reader and writer are injected at construction, so tests drive the
//! console with in-memory buffers instead of process stdio.

mod menu;
mod view;

pub use menu::{parse_choice, parse_index, parse_mips, parse_transistors, parse_year, MenuAction};
pub use view::Console;
