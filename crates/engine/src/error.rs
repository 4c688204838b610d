//! The module contains the errors the engine can return.
//!
//! The errors are:
//!
//! - [`InvalidConfiguration`] returned when the settings cannot support a
//!   settlement (empty roster, duplicated members, bad tolerance).
//! - [`UnknownMember`] returned when a balance is computed for a payer that is
//!   not on the roster.
//! - [`InvalidCurrency`] returned when a currency code fails validation.
//! - [`KeyNotFound`] returned when a requested item does not exist.
//!
//! Malformed expense records are not errors: they are skipped and reported
//! as [`SkippedExpense`] warnings.
//!
//!  [`InvalidConfiguration`]: EngineError::InvalidConfiguration
//!  [`UnknownMember`]: EngineError::UnknownMember
//!  [`InvalidCurrency`]: EngineError::InvalidCurrency
//!  [`KeyNotFound`]: EngineError::KeyNotFound
//!  [`SkippedExpense`]: crate::SkippedExpense
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("\"{0}\" is not a family member")]
    UnknownMember(String),
    #[error("Invalid currency: {0}")]
    InvalidCurrency(String),
    #[error("\"{0}\" key not found!")]
    KeyNotFound(String),
}
