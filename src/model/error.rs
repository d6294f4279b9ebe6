//! Error types for stickylist.
//!
//! This module defines the error taxonomy using `thiserror`. Errors compose via
//! `?` and `From` conversions into [`AppError`] at the binary boundary.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level error returned by the CLI
//!   - [`LayoutError`] - A full relayout could not be completed (size-provider contract violated)
//!   - [`FixtureError`] - A list fixture file could not be read or parsed
//!   - [`ConfigError`](crate::config::ConfigError) - Configuration file failures
//!   - [`LoggingError`](crate::logging::LoggingError) - Log subscriber setup failures
//!
//! # Recovery Strategy
//!
//! Layout errors are fatal to the pass that raised them: the cache stays invalidated
//! and the host must fix its size provider. Lookups with out-of-range indices are
//! not errors at all; they return `None`. A sticky index outside the current bounds
//! is a logged no-op, since bounds can transiently mismatch during data updates.

use crate::config::ConfigError;
use crate::logging::LoggingError;
use crate::view_state::types::ItemIndex;
use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error encompassing all failure modes.
#[derive(Debug, Error)]
pub enum AppError {
    /// Layout pass failed.
    #[error("Layout failed: {0}")]
    Layout(#[from] LayoutError),

    /// Fixture could not be loaded.
    #[error("Failed to load list fixture: {0}")]
    Fixture(#[from] FixtureError),

    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Logging could not be initialized.
    #[error("Logging error: {0}")]
    Logging(#[from] LoggingError),

    /// Writing output failed.
    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),
}

/// Errors raised by a full relayout.
///
/// Both variants mean the host's size provider broke its contract. The pass
/// is abandoned rather than producing a zero-size frame.
///
/// # Examples
///
/// ```
/// use stickylist::model::error::LayoutError;
/// use stickylist::view_state::types::ItemIndex;
///
/// let err = LayoutError::MissingItemSize { index: ItemIndex::new(3, 1) };
/// assert!(err.to_string().contains("[3, 1]"));
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    /// The size provider returned no size for a required index.
    #[error("No size provided for item {index}")]
    MissingItemSize {
        /// Index the provider could not size.
        index: ItemIndex,
    },

    /// The size provider returned a negative or non-finite dimension.
    #[error("Invalid size {width}x{height} for item {index}")]
    InvalidItemSize {
        /// Index with the bad size.
        index: ItemIndex,
        /// Width as returned by the provider.
        width: f64,
        /// Height as returned by the provider.
        height: f64,
    },
}

impl LayoutError {
    /// Index the error refers to.
    pub fn index(&self) -> ItemIndex {
        match self {
            LayoutError::MissingItemSize { index } => *index,
            LayoutError::InvalidItemSize { index, .. } => *index,
        }
    }
}

/// Errors encountered when loading a list fixture from disk.
#[derive(Debug, Error)]
pub enum FixtureError {
    /// The fixture file does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::PathBuf;
    /// use stickylist::model::error::FixtureError;
    ///
    /// let err = FixtureError::FileNotFound { path: PathBuf::from("/tmp/missing.toml") };
    /// assert!(err.to_string().contains("/tmp/missing.toml"));
    /// ```
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// The fixture is not valid TOML or does not match the fixture schema.
    #[error("Invalid fixture in {path}: {reason}")]
    Parse {
        /// Path of the fixture.
        path: PathBuf,
        /// Parser message.
        reason: String,
    },

    /// Generic I/O error while reading the fixture.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
