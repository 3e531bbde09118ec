//! Error types for evaluation operations.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, EvalError>;

/// Error type for resampling, prediction, scoring and rescaling.
///
/// Every variant is raised at the boundary of the operation that detects it.
/// Operations never return partial results: on error the caller's data is
/// left exactly as it was.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    /// No rows to resample, predict or rescale from.
    #[error("Empty dataset: {0}")]
    EmptyDataset(&'static str),

    /// Empty actual/predicted vectors handed to a scorer.
    #[error("Empty input: cannot score zero predictions")]
    EmptyInput,

    /// Actual and predicted vectors of unequal length.
    #[error("Length mismatch: {actual} actual values, {predicted} predicted values")]
    LengthMismatch { actual: usize, predicted: usize },

    /// Fold count outside `1..=n`.
    #[error("Invalid fold count: k = {k} for {n} rows")]
    InvalidFoldCount { k: usize, n: usize },

    /// Fold index past the number of folds.
    #[error("Fold {index} out of range for {folds} folds")]
    FoldOutOfRange { index: usize, folds: usize },

    /// Holdout split ratio outside `[0, 1]` or not finite.
    #[error("Invalid split ratio: {0} (expected a value in [0, 1])")]
    InvalidSplitRatio(f64),

    /// Zero range (min-max) or zero variance (standardization).
    ///
    /// `column` is `None` when a single value was rescaled outside any dataset.
    #[error(
        "Constant column{}: cannot rescale a column with zero spread",
        column_suffix(.column)
    )]
    ConstantColumn { column: Option<usize> },

    /// Value missing from an encoding, or a code with no category behind it.
    #[error("Unknown category {value} in column {column}")]
    UnknownCategory { column: usize, value: String },

    /// A category listed twice in a stored encoding.
    #[error("Duplicate category {value} in encoding of column {column}")]
    DuplicateCategory { column: usize, value: String },

    /// Column index past the row width.
    #[error("Column {column} out of range for rows of width {width}")]
    ColumnOutOfRange { column: usize, width: usize },

    /// A numeric value was required but a category was found.
    #[error("Non-numeric value {value:?} at row {row}, column {column}")]
    NonNumericValue {
        row: usize,
        column: usize,
        value: String,
    },

    /// A row whose width differs from the first row.
    #[error("Ragged rows: row {row} has {got} columns, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        got: usize,
    },

    /// Rows must carry at least the label column.
    #[error("Rows must have at least one column")]
    ZeroWidthRow,
}

fn column_suffix(column: &Option<usize>) -> String {
    column.map(|c| format!(" {}", c)).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_length_mismatch() {
        let err = EvalError::LengthMismatch {
            actual: 3,
            predicted: 2,
        };
        assert!(err.to_string().contains("Length mismatch"));
        assert!(err.to_string().contains("3 actual"));
    }

    #[test]
    fn test_error_display_invalid_fold_count() {
        let err = EvalError::InvalidFoldCount { k: 0, n: 10 };
        assert!(err.to_string().contains("k = 0"));
    }

    #[test]
    fn test_error_display_constant_column() {
        let err = EvalError::ConstantColumn { column: Some(4) };
        assert!(err.to_string().contains("Constant column 4:"));
        let err = EvalError::ConstantColumn { column: None };
        assert!(err.to_string().starts_with("Constant column:"));
    }

    #[test]
    fn test_error_display_non_numeric() {
        let err = EvalError::NonNumericValue {
            row: 1,
            column: 2,
            value: "abc".to_string(),
        };
        assert!(err.to_string().contains("\"abc\""));
    }

    #[test]
    fn test_error_is_std_error() {
        let err = EvalError::EmptyInput;
        let _: &dyn std::error::Error = &err;
    }
}
