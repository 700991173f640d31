//! Whole-build error type

use thiserror::Error;

use crate::currency::validation::ValidationError;

/// Errors fatal to a directory build; no partial directory is ever returned
#[derive(Error, Debug, PartialEq)]
pub enum DirectoryError {
    /// The configured-overrides payload is not a JSON array of objects
    #[error("malformed currency overrides payload: {reason}")]
    Structural { reason: String },

    /// One entry of the configured-overrides batch failed strict validation
    #[error("invalid currency entry at index {index}: {source}")]
    InvalidOverride {
        index: usize,
        source: ValidationError,
    },

    /// A descriptor outside a batch context failed validation
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    /// Defaulting failed to establish a required field. This is a defect in
    /// the defaulting rules, not bad input.
    #[error("currency entry missing required field '{field}' after applying defaults")]
    DefaultingInvariant { field: &'static str },
}
