//! Error types for rental pricing and statement generation.

use thiserror::Error;

/// Result type alias for rental operations
pub type Result<T> = std::result::Result<T, RentalError>;

/// Errors that abort a calculation.
///
/// Unknown movie references are not errors of this kind: they are collected
/// into the statement's error list and the remaining rentals are still priced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RentalError {
    /// Category code is unknown, or the rule table has no rule for it
    #[error("Invalid movie code: {0}")]
    InvalidCategory(String),

    /// Template placeholder without a matching substitution
    #[error("No key found for template placeholder {{{0}}}")]
    MissingTemplateKey(String),

    /// Amount arithmetic exceeded the decimal range
    #[error("Amount overflow: {0}")]
    AmountOverflow(String),

    /// Monetary literal could not be parsed
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
}
