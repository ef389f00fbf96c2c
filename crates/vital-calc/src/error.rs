//! Error types for vital-calc operations.

use thiserror::Error;

/// Errors raised outside the calculators themselves.
///
/// A reversed or incomplete date range is not an error: the calculators
/// return `None` for it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VitalError {
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid age policy: {0}")]
    InvalidPolicy(String),
}

pub type Result<T> = std::result::Result<T, VitalError>;
