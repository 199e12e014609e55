//! Error types for cpudex
//!
//! Provides a unified error type for all operations. Domain outcomes with a
//! defined recovery (store full, missing slot) are not errors; the store
//! signals them through `bool` / `Option` return values.

use thiserror::Error;

/// Result type alias using CpudexError
pub type Result<T> = std::result::Result<T, CpudexError>;

/// Unified error type for cpudex operations
#[derive(Debug, Error)]
pub enum CpudexError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // -------------------------------------------------------------------------
    // Input Errors
    // -------------------------------------------------------------------------
    #[error("Input error: {0}")]
    Input(String),
}
