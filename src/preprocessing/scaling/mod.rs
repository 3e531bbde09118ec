//! Feature rescaling.
//!
//! # Available Scalings
//!
//! | Scaling | Statistic | Formula |
//! |---------|-----------|---------|
//! | [`normalize_dataset`] | [`MinMax`] | `(x - min) / (max - min)` |
//! | [`standardize_dataset`] | [`MeanStd`] | `(x - mean) / std` |
//!
//! # Mutation Contract
//!
//! Dataset-level operations rewrite the selected columns **in place** and
//! leave every other column untouched. Statistics are computed once from the
//! dataset as it was before the call, and every selected column is checked
//! (numeric, non-constant) before the first value is written: on error the
//! dataset is unchanged.
//!
//! # Example
//!
//! ```rust
//! use evalrs::dataset::{Columns, Dataset};
//! use evalrs::preprocessing::scaling::{apply_minmax, normalize_dataset};
//!
//! let mut train = Dataset::from_numeric(vec![vec![0.0, 1.0], vec![10.0, 0.0]]).unwrap();
//! let mut test = Dataset::from_numeric(vec![vec![5.0, 1.0]]).unwrap();
//!
//! // Fit on the train set, reuse the statistics on the test set.
//! let stats = normalize_dataset(&mut train, &Columns::Features).unwrap();
//! apply_minmax(&mut test, &stats).unwrap();
//! assert_eq!(test.numeric_column(0).unwrap(), vec![0.5]);
//! ```

use crate::dataset::{Columns, Dataset, Value};
use crate::error::{EvalError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub mod minmax;
pub mod standard;

pub use minmax::{apply_minmax, get_dataset_minmax, normalize, normalize_dataset, MinMax};
pub use standard::{
    apply_standardization, get_mean_std, standardize, standardize_dataset, MeanStd,
};

/// Per-column statistics, keyed by column index.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColumnStats<S> {
    stats: BTreeMap<usize, S>,
}

impl<S> ColumnStats<S> {
    pub fn get(&self, column: usize) -> Option<&S> {
        self.stats.get(&column)
    }

    /// Column indices, ascending.
    pub fn columns(&self) -> impl Iterator<Item = usize> + '_ {
        self.stats.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &S)> + '_ {
        self.stats.iter().map(|(&c, s)| (c, s))
    }

    pub fn len(&self) -> usize {
        self.stats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }
}

impl<S> FromIterator<(usize, S)> for ColumnStats<S> {
    fn from_iter<I: IntoIterator<Item = (usize, S)>>(iter: I) -> Self {
        Self {
            stats: iter.into_iter().collect(),
        }
    }
}

/// Computes one statistic per selected column from the numeric values.
fn collect_stats<S>(
    dataset: &Dataset,
    columns: &Columns,
    statistic: impl Fn(&[f64]) -> S,
) -> Result<ColumnStats<S>> {
    if dataset.is_empty() {
        return Err(EvalError::EmptyDataset("cannot compute column statistics"));
    }
    columns
        .resolve(dataset.width())?
        .into_iter()
        .map(|column| -> Result<(usize, S)> {
            let values = dataset.numeric_column(column)?;
            Ok((column, statistic(&values)))
        })
        .collect()
}

/// Rewrites every column in `stats` with `rescale`, all-or-nothing.
fn rescale_columns<S>(
    dataset: &mut Dataset,
    stats: &ColumnStats<S>,
    rescale: impl Fn(f64, &S) -> Result<f64>,
) -> Result<()> {
    let mut rescaled: Vec<(usize, Vec<f64>)> = Vec::with_capacity(stats.len());
    for (column, stat) in stats.iter() {
        let values = dataset
            .numeric_column(column)?
            .into_iter()
            .map(|x| rescale(x, stat))
            .collect::<Result<Vec<f64>>>()
            .map_err(|err| match err {
                EvalError::ConstantColumn { .. } => EvalError::ConstantColumn {
                    column: Some(column),
                },
                other => other,
            })?;
        rescaled.push((column, values));
    }

    let rows = dataset.rows_mut();
    for (column, values) in rescaled {
        tracing::trace!(column, rows = values.len(), "rescaled column");
        for (row, x) in rows.iter_mut().zip(values) {
            row[column] = Value::Numeric(x);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_stats_from_iter() {
        let stats: ColumnStats<f64> = vec![(2, 0.5), (0, 1.5)].into_iter().collect();
        assert_eq!(stats.columns().collect::<Vec<_>>(), vec![0, 2]);
        assert_eq!(stats.get(2), Some(&0.5));
        assert_eq!(stats.get(1), None);
        assert_eq!(stats.len(), 2);
    }

    #[test]
    fn test_rescale_columns_is_atomic() {
        let mut ds = Dataset::new(vec![
            vec![Value::from(1.0), Value::from("a")],
            vec![Value::from(2.0), Value::from("b")],
        ])
        .unwrap();
        let before = ds.clone();
        let stats: ColumnStats<f64> = vec![(0, 1.0), (1, 1.0)].into_iter().collect();

        let result = rescale_columns(&mut ds, &stats, |x, s| Ok(x * s));
        assert!(matches!(
            result,
            Err(EvalError::NonNumericValue { column: 1, .. })
        ));
        assert_eq!(ds, before);
    }

    #[test]
    fn test_collect_stats_empty_dataset() {
        let ds = Dataset::default();
        let result = collect_stats(&ds, &Columns::All, |v| v.len());
        assert!(matches!(result, Err(EvalError::EmptyDataset(_))));
    }
}
