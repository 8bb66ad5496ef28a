//! Calculation error model.

use thiserror::Error;

/// Result type used across the calculation layer.
pub type CalcResult<T> = Result<T, CalcError>;

/// Message returned when a liquid inventory cannot be resolved.
pub const MISSING_DENSITY_OR_PERCENT: &str = "Missing density or %.";

/// Calculation-level error.
///
/// Two tiers only: input the caller can fix (`Validation`) and arithmetic that
/// could not produce a number (`Fault`). The HTTP layer maps the first to a
/// client error and the second to a server error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CalcError {
    /// The request is well-formed but cannot be calculated as given.
    #[error("{0}")]
    Validation(String),

    /// A required numeric input was absent or the arithmetic left the finite range.
    #[error("{0}")]
    Fault(String),
}

impl CalcError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn fault(msg: impl Into<String>) -> Self {
        Self::Fault(msg.into())
    }

    /// Shorthand for a required numeric field that did not decode to a number.
    pub fn not_a_number(field: &str) -> Self {
        Self::Fault(format!("{field} is missing or not a number"))
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
