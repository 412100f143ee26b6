//! Error type shared by the fold models

use std::fmt;

/// Errors that can occur while evaluating the fold models
#[derive(Debug, Clone, PartialEq)]
pub enum FoldError {
    /// An argument violated its positivity or non-negativity precondition
    InvalidInput {
        /// Name of the offending parameter (e.g. `"initial_thickness"`)
        parameter: &'static str,
        /// The rejected value
        value: f64,
    },
    /// The result does not fit in the range of `f64`
    Overflow {
        /// Operation that overflowed (e.g. `"required_length"`)
        operation: &'static str,
        /// Fold count the operation was evaluated at
        fold_count: i64,
    },
}

impl FoldError {
    /// Create error for a distance or thickness that must be finite and positive.
    pub(crate) fn non_positive(parameter: &'static str, value: f64) -> Self {
        FoldError::InvalidInput { parameter, value }
    }

    /// Create error for a negative fold count.
    pub(crate) fn negative_folds(fold_count: i32) -> Self {
        FoldError::InvalidInput {
            parameter: "fold_count",
            value: f64::from(fold_count),
        }
    }

    /// Create error for a result beyond the `f64` range.
    pub(crate) fn overflow(operation: &'static str, fold_count: impl Into<i64>) -> Self {
        FoldError::Overflow {
            operation,
            fold_count: fold_count.into(),
        }
    }

    /// True for precondition violations
    #[must_use]
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, FoldError::InvalidInput { .. })
    }

    /// True for range overflows
    #[must_use]
    pub fn is_overflow(&self) -> bool {
        matches!(self, FoldError::Overflow { .. })
    }
}

impl fmt::Display for FoldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FoldError::InvalidInput { parameter, value } if *parameter == "fold_count" => {
                write!(f, "Invalid input: fold_count must be non-negative, got {value}")
            }
            FoldError::InvalidInput { parameter, value } => {
                write!(
                    f,
                    "Invalid input: {parameter} must be finite and positive, got {value}"
                )
            }
            FoldError::Overflow {
                operation,
                fold_count,
            } => write!(
                f,
                "Overflow: {operation} exceeds the f64 range at {fold_count} folds"
            ),
        }
    }
}

impl std::error::Error for FoldError {}
