//! Engine errors
//!
//! Every analysis either returns a fully populated result or one of these
//! validation failures, all detected before computation proceeds. The
//! computations themselves are deterministic and pure, so nothing is retried.
//! The host layer turns an error into user-visible feedback; the engine never
//! formats presentation text.

use thiserror::Error;

/// Standard error codes (machine-readable)
pub mod codes {
    pub const SCHEMA_ERROR: &str = "SCHEMA_ERROR";
    pub const INVALID_COMPARISON: &str = "INVALID_COMPARISON";
    pub const INSUFFICIENT_DATA: &str = "INSUFFICIENT_DATA";
    pub const INVALID_INPUT: &str = "INVALID_INPUT";
    pub const DEGENERATE_VARIANCE: &str = "DEGENERATE_VARIANCE";
}

/// Validation failure raised by the engine
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ContrastaError {
    /// A column an analysis needs is absent from the dataset
    #[error("Required column not found: {column}")]
    Schema { column: String },

    /// Group pair rejected by the comparison allow-list (or equal labels)
    #[error("Comparison between '{group1}' and '{group2}' is not allowed")]
    InvalidComparison { group1: String, group2: String },

    /// Too few observations or groups for the statistic to be defined
    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    /// User-supplied value that does not parse as a number
    #[error("Not a valid number: '{token}'")]
    InvalidInput { token: String },

    /// Zero variance where the statistic divides by it
    #[error("Degenerate variance: {0}")]
    DegenerateVariance(String),
}

impl ContrastaError {
    /// Machine-readable code for the host layer
    pub fn code(&self) -> &'static str {
        match self {
            Self::Schema { .. } => codes::SCHEMA_ERROR,
            Self::InvalidComparison { .. } => codes::INVALID_COMPARISON,
            Self::InsufficientData(_) => codes::INSUFFICIENT_DATA,
            Self::InvalidInput { .. } => codes::INVALID_INPUT,
            Self::DegenerateVariance(_) => codes::DEGENERATE_VARIANCE,
        }
    }

    pub fn schema(column: impl Into<String>) -> Self {
        Self::Schema { column: column.into() }
    }

    pub fn invalid_comparison(group1: impl Into<String>, group2: impl Into<String>) -> Self {
        Self::InvalidComparison {
            group1: group1.into(),
            group2: group2.into(),
        }
    }

    pub fn insufficient_data(details: impl Into<String>) -> Self {
        Self::InsufficientData(details.into())
    }

    pub fn invalid_input(token: impl Into<String>) -> Self {
        Self::InvalidInput { token: token.into() }
    }

    pub fn degenerate_variance(details: impl Into<String>) -> Self {
        Self::DegenerateVariance(details.into())
    }
}
