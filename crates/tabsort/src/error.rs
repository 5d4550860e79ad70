//! Error types for the tabsort crate.

use thiserror::Error;

/// Errors raised when decoding a sort configuration from its wire form.
///
/// Row data never produces errors; malformed values fall back to the
/// string comparison instead.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SortConfigError {
    /// A key was given without a direction.
    #[error("sort key '{key}' has no direction")]
    KeyWithoutDirection { key: String },

    /// A direction was given without a key.
    #[error("sort direction '{direction}' has no key")]
    DirectionWithoutKey { direction: &'static str },
}

/// Result type for tabsort operations.
pub type Result<T> = std::result::Result<T, SortConfigError>;
