//! Min-max normalization.
//!
//! Rescales each selected column to `[0, 1]`:
//! ```text
//! x_scaled = (x - min) / (max - min)
//! ```
//! where `min` and `max` are taken over the column before rescaling.

use super::{collect_stats, rescale_columns, ColumnStats};
use crate::dataset::{Columns, Dataset};
use crate::error::{EvalError, Result};
use serde::{Deserialize, Serialize};

/// Observed range of one column.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MinMax {
    pub min: f64,
    pub max: f64,
}

impl MinMax {
    fn of(values: &[f64]) -> Self {
        values.iter().fold(
            MinMax {
                min: f64::INFINITY,
                max: f64::NEG_INFINITY,
            },
            |acc, &x| MinMax {
                min: acc.min.min(x),
                max: acc.max.max(x),
            },
        )
    }

    /// `max - min`.
    pub fn range(&self) -> f64 {
        self.max - self.min
    }
}

/// Scans every selected column for its minimum and maximum.
///
/// # Errors
/// - [`EvalError::EmptyDataset`] if the dataset has no rows.
/// - [`EvalError::ColumnOutOfRange`] for a selected index past the row width.
/// - [`EvalError::NonNumericValue`] if a selected column holds a category.
pub fn get_dataset_minmax(dataset: &Dataset, columns: &Columns) -> Result<ColumnStats<MinMax>> {
    let stats = collect_stats(dataset, columns, MinMax::of)?;
    tracing::debug!(columns = stats.len(), rows = dataset.len(), "computed min/max");
    Ok(stats)
}

/// `(value - min) / (max - min)`.
///
/// # Errors
/// [`EvalError::ConstantColumn`] when `max == min`.
pub fn normalize(value: f64, min: f64, max: f64) -> Result<f64> {
    if max == min {
        return Err(EvalError::ConstantColumn { column: None });
    }
    Ok((value - min) / (max - min))
}

/// Rescales the columns in `stats` using the given ranges, in place.
///
/// Values outside a column's recorded range map outside `[0, 1]`, which is
/// expected when applying train-set ranges to a test set.
///
/// # Errors
/// - [`EvalError::ConstantColumn`] for a zero-range column.
/// - [`EvalError::ColumnOutOfRange`] / [`EvalError::NonNumericValue`] for an
///   unusable column.
///
/// The dataset is unchanged on error.
pub fn apply_minmax(dataset: &mut Dataset, stats: &ColumnStats<MinMax>) -> Result<()> {
    rescale_columns(dataset, stats, |x, mm| normalize(x, mm.min, mm.max))
}

/// Computes min/max of the selected columns, then normalizes them in place.
///
/// Returns the statistics used so they can be applied to other datasets
/// with [`apply_minmax`]. Non-selected columns are untouched, and the dataset
/// is unchanged on error.
///
/// # Errors
/// Those of [`get_dataset_minmax`] and [`apply_minmax`].
pub fn normalize_dataset(dataset: &mut Dataset, columns: &Columns) -> Result<ColumnStats<MinMax>> {
    let stats = get_dataset_minmax(dataset, columns)?;
    apply_minmax(dataset, &stats)?;
    Ok(stats)
}
