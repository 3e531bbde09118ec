//! In-memory tabular datasets.
//!
//! A [`Dataset`] is an ordered sequence of [`Row`]s of identical width. By
//! convention the last column holds the label and every other column is a
//! feature; nothing else about the layout is enforced.
//!
//! # Ownership
//!
//! Datasets belong to the caller. Resampling borrows a dataset and returns new
//! datasets built from cloned rows. Rescaling and encoding take `&mut Dataset`
//! and rewrite the selected columns in place; see each operation for its
//! exact contract.
//!
//! # Example
//!
//! ```rust
//! use evalrs::dataset::{Dataset, Value};
//!
//! let ds = Dataset::new(vec![
//!     vec![Value::from(5.1), Value::from("setosa")],
//!     vec![Value::from(6.3), Value::from("virginica")],
//! ])
//! .unwrap();
//!
//! assert_eq!(ds.len(), 2);
//! assert_eq!(ds.width(), 2);
//! assert_eq!(ds.labels().next(), Some(&Value::from("setosa")));
//! ```

use crate::error::{EvalError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

mod value;
pub use self::value::Value;

/// One record: features followed by the label.
pub type Row = Vec<Value>;

/// Ordered rows of a fixed width.
///
/// Serializes as a plain list of rows; deserializing runs the same width
/// checks as [`Dataset::new`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<Row>", into = "Vec<Row>")]
pub struct Dataset {
    rows: Vec<Row>,
    width: usize,
}

impl Dataset {
    /// Builds a dataset, checking that every row has the width of the first.
    ///
    /// An empty `rows` vector is accepted and yields an empty dataset of width 0.
    ///
    /// # Errors
    /// - [`EvalError::ZeroWidthRow`] if the rows have no columns.
    /// - [`EvalError::RaggedRows`] if any row differs in width from the first.
    pub fn new(rows: Vec<Row>) -> Result<Self> {
        let width = match rows.first() {
            Some(first) => first.len(),
            None => return Ok(Self::default()),
        };
        if width == 0 {
            return Err(EvalError::ZeroWidthRow);
        }
        if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(EvalError::RaggedRows {
                row,
                expected: width,
                got: r.len(),
            });
        }
        Ok(Self { rows, width })
    }

    /// Builds an all-numeric dataset.
    pub fn from_numeric(rows: Vec<Vec<f64>>) -> Result<Self> {
        Self::new(
            rows.into_iter()
                .map(|r| r.into_iter().map(Value::Numeric).collect())
                .collect(),
        )
    }

    /// Rows known to share `width`; used when deriving subsets of a valid dataset.
    pub(crate) fn from_rows_unchecked(rows: Vec<Row>, width: usize) -> Self {
        let width = if rows.is_empty() { 0 } else { width };
        Self { rows, width }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of columns per row (0 for an empty dataset).
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Row> {
        self.rows.iter()
    }

    pub fn into_rows(self) -> Vec<Row> {
        self.rows
    }

    /// Index of the label column, `None` for an empty dataset.
    pub fn label_index(&self) -> Option<usize> {
        self.width.checked_sub(1)
    }

    /// Label (last-column) values in row order.
    pub fn labels(&self) -> impl Iterator<Item = &Value> + '_ {
        self.rows.iter().filter_map(|r| r.last())
    }

    /// Values of one column in row order.
    ///
    /// # Errors
    /// [`EvalError::ColumnOutOfRange`] if `column >= width`.
    pub fn column(&self, column: usize) -> Result<impl Iterator<Item = &Value> + '_> {
        self.check_column(column)?;
        Ok(self.rows.iter().map(move |r| &r[column]))
    }

    /// Values of one column as floats.
    ///
    /// # Errors
    /// - [`EvalError::ColumnOutOfRange`] if `column >= width`.
    /// - [`EvalError::NonNumericValue`] at the first categorical value.
    pub fn numeric_column(&self, column: usize) -> Result<Vec<f64>> {
        self.check_column(column)?;
        self.rows
            .iter()
            .enumerate()
            .map(|(row, r)| match &r[column] {
                Value::Numeric(x) => Ok(*x),
                Value::Category(s) => Err(EvalError::NonNumericValue {
                    row,
                    column,
                    value: s.clone(),
                }),
            })
            .collect()
    }

    /// Parses a column of raw tokens into floats, in place.
    ///
    /// Tokens are trimmed before parsing; values that are already numeric are
    /// kept. The whole column is parsed before anything is written, so on
    /// error the dataset is unchanged.
    ///
    /// # Errors
    /// - [`EvalError::ColumnOutOfRange`] if `column >= width`.
    /// - [`EvalError::NonNumericValue`] for the first token that is not a float.
    pub fn column_to_numeric(&mut self, column: usize) -> Result<()> {
        self.check_column(column)?;
        let parsed = self
            .rows
            .iter()
            .enumerate()
            .map(|(row, r)| match &r[column] {
                Value::Numeric(x) => Ok(*x),
                Value::Category(s) => {
                    s.trim()
                        .parse::<f64>()
                        .map_err(|_| EvalError::NonNumericValue {
                            row,
                            column,
                            value: s.clone(),
                        })
                }
            })
            .collect::<Result<Vec<f64>>>()?;

        for (r, x) in self.rows.iter_mut().zip(parsed) {
            r[column] = Value::Numeric(x);
        }
        tracing::trace!(column, rows = self.rows.len(), "parsed column to numeric");
        Ok(())
    }

    pub(crate) fn check_column(&self, column: usize) -> Result<()> {
        if column >= self.width {
            return Err(EvalError::ColumnOutOfRange {
                column,
                width: self.width,
            });
        }
        Ok(())
    }

    pub(crate) fn rows_mut(&mut self) -> &mut [Row] {
        &mut self.rows
    }

    /// Clones the rows at `indices`, in the given order.
    pub(crate) fn select(&self, indices: &[usize]) -> Dataset {
        let rows = indices.iter().map(|&i| self.rows[i].clone()).collect();
        Dataset::from_rows_unchecked(rows, self.width)
    }
}

impl TryFrom<Vec<Row>> for Dataset {
    type Error = EvalError;

    fn try_from(rows: Vec<Row>) -> Result<Self> {
        Dataset::new(rows)
    }
}

impl From<Dataset> for Vec<Row> {
    fn from(dataset: Dataset) -> Self {
        dataset.rows
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Row;
    type IntoIter = std::slice::Iter<'a, Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

/// Column selection for rescaling.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Columns {
    /// Every column, label included.
    #[default]
    All,
    /// Every column except the last (label) one.
    Features,
    /// An explicit set of column indices.
    Only(Vec<usize>),
}

impl Columns {
    /// Resolves the selection into sorted, de-duplicated indices.
    ///
    /// # Errors
    /// [`EvalError::ColumnOutOfRange`] for an explicit index `>= width`.
    pub fn resolve(&self, width: usize) -> Result<Vec<usize>> {
        match self {
            Columns::All => Ok((0..width).collect()),
            Columns::Features => Ok((0..width.saturating_sub(1)).collect()),
            Columns::Only(indices) => {
                let unique: BTreeSet<usize> = indices.iter().copied().collect();
                if let Some(&column) = unique.iter().find(|&&c| c >= width) {
                    return Err(EvalError::ColumnOutOfRange { column, width });
                }
                Ok(unique.into_iter().collect())
            }
        }
    }
}

impl From<Vec<usize>> for Columns {
    fn from(indices: Vec<usize>) -> Self {
        Columns::Only(indices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mixed() -> Dataset {
        Dataset::new(vec![
            vec![Value::from(" 1.5"), Value::from(2.0), Value::from("a")],
            vec![Value::from("2.5 "), Value::from(3.0), Value::from("b")],
        ])
        .unwrap()
    }

    #[test]
    fn test_new_rejects_ragged_rows() {
        let result = Dataset::from_numeric(vec![vec![1.0, 2.0], vec![3.0]]);
        assert_eq!(
            result,
            Err(EvalError::RaggedRows {
                row: 1,
                expected: 2,
                got: 1
            })
        );
    }

    #[test]
    fn test_new_rejects_zero_width() {
        let result = Dataset::new(vec![vec![], vec![]]);
        assert_eq!(result, Err(EvalError::ZeroWidthRow));
    }

    #[test]
    fn test_empty_dataset() {
        let ds = Dataset::new(vec![]).unwrap();
        assert!(ds.is_empty());
        assert_eq!(ds.width(), 0);
        assert_eq!(ds.label_index(), None);
    }

    #[test]
    fn test_labels_are_last_column() {
        let ds = mixed();
        let labels: Vec<&Value> = ds.labels().collect();
        assert_eq!(labels, vec![&Value::from("a"), &Value::from("b")]);
        assert_eq!(ds.label_index(), Some(2));
    }

    #[test]
    fn test_column_out_of_range() {
        let ds = mixed();
        assert!(matches!(
            ds.column(3),
            Err(EvalError::ColumnOutOfRange {
                column: 3,
                width: 3
            })
        ));
    }

    #[test]
    fn test_numeric_column_rejects_categories() {
        let ds = mixed();
        assert_eq!(ds.numeric_column(1).unwrap(), vec![2.0, 3.0]);
        assert!(matches!(
            ds.numeric_column(2),
            Err(EvalError::NonNumericValue { row: 0, column: 2, .. })
        ));
    }

    #[test]
    fn test_column_to_numeric_trims_and_parses() {
        let mut ds = mixed();
        ds.column_to_numeric(0).unwrap();
        assert_eq!(ds.numeric_column(0).unwrap(), vec![1.5, 2.5]);
    }

    #[test]
    fn test_column_to_numeric_is_atomic() {
        let mut ds = Dataset::new(vec![
            vec![Value::from("1.0"), Value::from(0.0)],
            vec![Value::from("oops"), Value::from(1.0)],
        ])
        .unwrap();
        let before = ds.clone();
        assert!(ds.column_to_numeric(0).is_err());
        assert_eq!(ds, before);
    }

    #[test]
    fn test_serde_round_trip_keeps_width() {
        let ds = mixed();
        let json = serde_json::to_string(&ds).unwrap();
        assert!(json.starts_with("[["));
        let back: Dataset = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ds);
        assert_eq!(back.width(), 3);
    }

    #[test]
    fn test_deserialize_rejects_ragged_rows() {
        let result = serde_json::from_str::<Dataset>("[[1.0],[1.0,2.0]]");
        let err = result.unwrap_err().to_string();
        assert!(err.contains("Ragged rows"), "unexpected error: {}", err);

        assert!(serde_json::from_str::<Dataset>("[[],[]]").is_err());
        let empty: Dataset = serde_json::from_str("[]").unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_columns_resolve() {
        assert_eq!(Columns::All.resolve(3).unwrap(), vec![0, 1, 2]);
        assert_eq!(Columns::Features.resolve(3).unwrap(), vec![0, 1]);
        assert_eq!(
            Columns::Only(vec![2, 0, 2]).resolve(3).unwrap(),
            vec![0, 2]
        );
        assert!(Columns::Only(vec![5]).resolve(3).is_err());
    }
}
