//! Error types for the domain layer.

use std::fmt;
use thiserror::Error;

use super::Polarity;

/// Errors that occur during value object construction or mutation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: String,
        min: f64,
        max: f64,
        actual: f64,
    },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates an out of range validation error.
    pub fn out_of_range(field: impl Into<String>, min: f64, max: f64, actual: f64) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            min,
            max,
            actual,
        }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Returns the error code for this validation failure.
    pub fn code(&self) -> ErrorCode {
        match self {
            ValidationError::EmptyField { .. } => ErrorCode::EmptyField,
            ValidationError::OutOfRange { .. } => ErrorCode::OutOfRange,
            ValidationError::InvalidFormat { .. } => ErrorCode::InvalidFormat,
        }
    }
}

/// Errors raised by the ranking pipeline.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RankingError {
    #[error("Invalid ranking input: {reason}")]
    InvalidInput { reason: String },

    #[error("Criterion '{criterion}' cannot be normalized as {polarity}: denominator is zero")]
    DegenerateCriterion { criterion: String, polarity: Polarity },

    #[error("Dimension mismatch for {what}: expected {expected}, got {actual}")]
    DimensionMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },
}

impl RankingError {
    /// Creates an invalid input error.
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        RankingError::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Creates a degenerate criterion error.
    pub fn degenerate(criterion: impl Into<String>, polarity: Polarity) -> Self {
        RankingError::DegenerateCriterion {
            criterion: criterion.into(),
            polarity,
        }
    }

    /// Creates a dimension mismatch error.
    pub fn dimension_mismatch(what: &'static str, expected: usize, actual: usize) -> Self {
        RankingError::DimensionMismatch {
            what,
            expected,
            actual,
        }
    }

    /// Returns the error code for this ranking failure.
    pub fn code(&self) -> ErrorCode {
        match self {
            RankingError::InvalidInput { .. } => ErrorCode::InvalidInput,
            RankingError::DegenerateCriterion { .. } => ErrorCode::DegenerateCriterion,
            RankingError::DimensionMismatch { .. } => ErrorCode::DimensionMismatch,
        }
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    EmptyField,
    OutOfRange,
    InvalidFormat,

    // Ranking errors
    InvalidInput,
    DegenerateCriterion,
    DimensionMismatch,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::EmptyField => "EMPTY_FIELD",
            ErrorCode::OutOfRange => "OUT_OF_RANGE",
            ErrorCode::InvalidFormat => "INVALID_FORMAT",
            ErrorCode::InvalidInput => "INVALID_INPUT",
            ErrorCode::DegenerateCriterion => "DEGENERATE_CRITERION",
            ErrorCode::DimensionMismatch => "DIMENSION_MISMATCH",
        };
        write!(f, "{}", s)
    }
}
