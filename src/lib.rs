//! # cpudex
//!
//! A bounded in-memory registry of CPU records with:
//! - Fixed-capacity slot store (first-empty-slot insertion, no compaction)
//! - Pure, configurable record formatting (grouped digits, fixed decimals)
//! - Interactive console menu driven by a controller
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     Console (View)                           │
//! │               (menu rendering, line input)                   │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                     Controller                               │
//! │               (menu action dispatch loop)                    │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │  SlotStore  │          │  Formatting │
//!   │  (C slots)  │          │ (pure fns)  │
//!   └─────────────┘          └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod record;
pub mod store;
pub mod console;
pub mod controller;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{CpudexError, Result};
pub use config::Config;
pub use controller::Controller;
pub use record::Cpu;
pub use store::SlotStore;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of cpudex
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
