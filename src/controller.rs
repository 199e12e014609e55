//! Controller Module
//!
//! The component that coordinates the console and the store.
//!
//! ## Responsibilities
//! - Drive the interactive loop (menu, choice, dispatch)
//! - Route menu actions to store operations
//! - Render outcomes and recover from bad input
//!
//! ## Error Model
//! Domain outcomes are handled in place: a full store or a missing slot is
//! reported to the console and the loop continues. Input errors are printed
//! and the loop continues. Only console I/O errors propagate out of `run`.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::console::{self, Console, MenuAction};
use crate::error::{CpudexError, Result};
use crate::record::format::{describe, FormatStyle};
use crate::record::Cpu;
use crate::store::SlotStore;

/// Coordinates one interactive session over a record store
///
/// The store and the console are injected at construction; the controller
/// holds the only references to both for the lifetime of the session.
pub struct Controller<R, W> {
    /// The record store
    store: SlotStore,

    /// The console view
    console: Console<R, W>,

    /// Symbols used when rendering records
    format: FormatStyle,
}

impl<R: BufRead, W: Write> Controller<R, W> {
    /// Create a controller over the given store and console
    pub fn new(store: SlotStore, console: Console<R, W>, format: FormatStyle) -> Self {
        Self {
            store,
            console,
            format,
        }
    }

    /// Run the interactive loop until quit or end of input
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.console.show_menu()?;

            // End of input closes the session like an explicit quit
            let Some(choice) = self.console.prompt("> ")? else {
                break;
            };

            let action = match console::parse_choice(&choice) {
                Ok(action) => action,
                Err(error) => {
                    self.report(error)?;
                    continue;
                }
            };

            debug!(?action, "menu action");

            if action == MenuAction::Quit {
                self.console.line("Goodbye.")?;
                break;
            }

            self.execute(action)?;
        }

        Ok(())
    }

    /// Execute a single menu action
    ///
    /// Routes actions to the store and renders the outcome.
    pub fn execute(&mut self, action: MenuAction) -> Result<()> {
        match action {
            MenuAction::Add => self.handle_add(),
            MenuAction::List => self.handle_list(),
            MenuAction::Count => self.handle_count(),
            MenuAction::Capacity => self.handle_capacity(),
            MenuAction::Show => self.handle_show(),
            MenuAction::Quit => Ok(()),
        }
    }

    // =========================================================================
    // Action Handlers
    // =========================================================================

    /// Prompt for the record fields and add the record
    fn handle_add(&mut self) -> Result<()> {
        let Some(name) = self.console.prompt("Model name: ")? else {
            return Ok(());
        };

        let Some(year_line) = self.console.prompt("Release year: ")? else {
            return Ok(());
        };
        let year = match console::parse_year(&year_line) {
            Ok(year) => year,
            Err(error) => return self.report(error),
        };

        let Some(transistors_line) = self.console.prompt("Transistor count: ")? else {
            return Ok(());
        };
        let transistors = match console::parse_transistors(&transistors_line) {
            Ok(count) => count,
            Err(error) => return self.report(error),
        };

        let Some(mips_line) = self.console.prompt("MIPS (blank if unknown): ")? else {
            return Ok(());
        };
        let mips = match console::parse_mips(&mips_line) {
            Ok(mips) => mips,
            Err(error) => return self.report(error),
        };

        let record = match mips {
            Some(mips) => Cpu::new(name, year, transistors, mips),
            None => Cpu::without_mips(name, year, transistors),
        };

        if self.store.add(record) {
            self.console.line("Record registered.")
        } else {
            self.console.line(&format!(
                "Store is full ({} slots); record not added.",
                self.store.capacity()
            ))
        }
    }

    /// Print every stored record, one described line each
    fn handle_list(&mut self) -> Result<()> {
        if self.store.is_empty() {
            return self.console.line("No records yet.");
        }

        // Slot order and list order coincide: removal is not supported,
        // so the compacted list carries the original slot indices.
        for (index, record) in self.store.list().iter().enumerate() {
            let described = describe(record, &self.format);
            self.console.line(&format!("[{}] {}", index, described))?;
        }

        Ok(())
    }

    /// Print occupied slots out of capacity
    fn handle_count(&mut self) -> Result<()> {
        self.console.line(&format!(
            "{} of {} slots occupied.",
            self.store.count(),
            self.store.capacity()
        ))
    }

    /// Print the fixed capacity
    fn handle_capacity(&mut self) -> Result<()> {
        self.console.line(&format!(
            "The store holds up to {} records.",
            self.store.capacity()
        ))
    }

    /// Prompt for a slot index and print that record
    fn handle_show(&mut self) -> Result<()> {
        let Some(index_line) = self.console.prompt("Slot index: ")? else {
            return Ok(());
        };

        let index = match console::parse_index(&index_line) {
            Ok(index) => index,
            Err(error) => return self.report(error),
        };

        match self.store.get(index) {
            Some(record) => {
                let described = describe(record, &self.format);
                self.console.line(&described)
            }
            None => self.console.line(&format!("No record at slot {}.", index)),
        }
    }

    /// Print a recoverable error and keep the session alive
    fn report(&mut self, error: CpudexError) -> Result<()> {
        debug!(%error, "recoverable input error");
        self.console.line(&format!("{}", error))
    }

    // =========================================================================
    // Accessors (for testing and debugging)
    // =========================================================================

    /// Borrow the record store
    pub fn store(&self) -> &SlotStore {
        &self.store
    }
}
