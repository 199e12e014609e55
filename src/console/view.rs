//! Console view
//!
//! Owns the reader and writer for the interactive session. Rendering and
//! input never touch process stdio directly; the handles are injected at
//! construction.

use std::io::{BufRead, Write};

use crate::error::Result;

/// The menu text, one entry per store operation plus quit
const MENU: &str = "\
==== cpudex ====
 1. Add a CPU record
 2. List all records
 3. Count records
 4. Show store capacity
 5. Show a record by slot index
 6. Quit";

/// Interactive console over injected I/O handles
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Create a console over the given reader and writer
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Render the menu
    pub fn show_menu(&mut self) -> Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "{}", MENU)?;
        Ok(())
    }

    /// Print a prompt label and read one line
    ///
    /// Returns the trimmed line, or `None` when the input is exhausted.
    pub fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        Ok(Some(line.trim().to_string()))
    }

    /// Print one output line
    pub fn line(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }
}
