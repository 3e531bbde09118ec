//! Z-score standardization.
//!
//! The standard score of a value `x` is:
//! ```text
//! z = (x - mean) / std
//! ```
//! where `std` is the population standard deviation (divisor `n`).

use super::{collect_stats, rescale_columns, ColumnStats};
use crate::dataset::{Columns, Dataset};
use crate::error::{EvalError, Result};
use serde::{Deserialize, Serialize};

/// Mean and population standard deviation of one column.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MeanStd {
    pub mean: f64,
    pub std: f64,
}

impl MeanStd {
    fn of(values: &[f64]) -> Self {
        // Summing a repeated non-representable value (0.1) leaves a residual
        // spread; an all-equal column must report exactly zero.
        if let Some(&first) = values.first() {
            if values.iter().all(|&x| x == first) {
                return MeanStd {
                    mean: first,
                    std: 0.0,
                };
            }
        }
        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        let variance = values.iter().map(|&x| (x - mean).powi(2)).sum::<f64>() / n;
        MeanStd {
            mean,
            std: variance.sqrt(),
        }
    }
}

/// Mean and population standard deviation of every selected column.
///
/// # Errors
/// - [`EvalError::EmptyDataset`] if the dataset has no rows.
/// - [`EvalError::ColumnOutOfRange`] for a selected index past the row width.
/// - [`EvalError::NonNumericValue`] if a selected column holds a category.
pub fn get_mean_std(dataset: &Dataset, columns: &Columns) -> Result<ColumnStats<MeanStd>> {
    let stats = collect_stats(dataset, columns, MeanStd::of)?;
    tracing::debug!(columns = stats.len(), rows = dataset.len(), "computed mean/std");
    Ok(stats)
}

/// `(value - mean) / std`.
///
/// # Errors
/// [`EvalError::ConstantColumn`] when `std == 0`.
pub fn standardize(value: f64, mean: f64, std: f64) -> Result<f64> {
    if std == 0.0 {
        return Err(EvalError::ConstantColumn { column: None });
    }
    Ok((value - mean) / std)
}

/// Standardizes the columns in `stats` using the given mean/std, in place.
///
/// # Errors
/// - [`EvalError::ConstantColumn`] for a zero-variance column.
/// - [`EvalError::ColumnOutOfRange`] / [`EvalError::NonNumericValue`] for an
///   unusable column.
///
/// The dataset is unchanged on error.
pub fn apply_standardization(dataset: &mut Dataset, stats: &ColumnStats<MeanStd>) -> Result<()> {
    rescale_columns(dataset, stats, |x, ms| standardize(x, ms.mean, ms.std))
}

/// Computes mean/std of the selected columns, then standardizes them in place.
///
/// Returns the statistics used. Non-selected columns are untouched, and the
/// dataset is unchanged on error.
///
/// # Errors
/// Those of [`get_mean_std`] and [`apply_standardization`].
pub fn standardize_dataset(
    dataset: &mut Dataset,
    columns: &Columns,
) -> Result<ColumnStats<MeanStd>> {
    let stats = get_mean_std(dataset, columns)?;
    apply_standardization(dataset, &stats)?;
    Ok(stats)
}
