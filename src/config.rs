//! Configuration for cpudex
//!
//! Centralized configuration with sensible defaults.

use crate::error::{CpudexError, Result};
use crate::record::format::FormatStyle;

/// Default number of slots in the record store
pub const DEFAULT_CAPACITY: usize = 20;

/// Main configuration for a cpudex instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Store Configuration
    // -------------------------------------------------------------------------
    /// Fixed number of record slots. Allocated once; the store never grows.
    pub capacity: usize,

    // -------------------------------------------------------------------------
    // Formatting Configuration
    // -------------------------------------------------------------------------
    /// Digit-grouping and decimal symbols used when rendering records
    pub format: FormatStyle,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            format: FormatStyle::default(),
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Check the configuration for values that can never work.
    ///
    /// A zero-capacity store would reject every add, so it is refused at
    /// startup rather than surfacing as a permanently-full store.
    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(CpudexError::Config(
                "store capacity must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the number of record slots
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.config.capacity = capacity;
        self
    }

    /// Set the digit-grouping separator (default `'`)
    pub fn grouping_separator(mut self, symbol: char) -> Self {
        self.config.format.grouping = symbol;
        self
    }

    /// Set the decimal separator (default `.`)
    pub fn decimal_separator(mut self, symbol: char) -> Self {
        self.config.format.decimal = symbol;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
