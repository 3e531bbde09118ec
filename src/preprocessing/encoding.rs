//! Categorical column encoding.
//!
//! Maps the distinct raw values of one column to integer codes `0, 1, 2, ...`
//! and rewrites the column with those codes, in place.
//!
//! Codes are assigned in order of first appearance, scanning rows top to
//! bottom, so the same dataset always yields the same encoding.
//!
//! # Example
//!
//! ```rust
//! use evalrs::dataset::{Dataset, Value};
//! use evalrs::preprocessing::encoding::encode_column;
//!
//! let mut ds = Dataset::new(vec![
//!     vec![Value::from(5.1), Value::from("setosa")],
//!     vec![Value::from(6.3), Value::from("virginica")],
//!     vec![Value::from(4.9), Value::from("setosa")],
//! ])
//! .unwrap();
//!
//! let encoding = encode_column(&mut ds, 1).unwrap();
//! assert_eq!(encoding.code(&Value::from("virginica")), Some(1));
//! assert_eq!(ds.numeric_column(1).unwrap(), vec![0.0, 1.0, 0.0]);
//! ```

use crate::dataset::{Dataset, Value};
use crate::error::{EvalError, Result};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Serializable form of an [`Encoding`].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EncodingParams {
    /// Column the encoding was built for.
    pub column: usize,
    /// Categories, indexed by code.
    pub categories: Vec<Value>,
}

/// Category → code mapping for one column.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(into = "EncodingParams", try_from = "EncodingParams")]
pub struct Encoding {
    column: usize,
    categories: Vec<Value>,
    index: HashMap<Value, usize>,
}

impl Encoding {
    fn from_values<'a>(column: usize, values: impl IntoIterator<Item = &'a Value>) -> Self {
        let mut categories = Vec::new();
        let mut index = HashMap::new();
        for value in values {
            if !index.contains_key(value) {
                index.insert(value.clone(), categories.len());
                categories.push(value.clone());
            }
        }
        Self {
            column,
            categories,
            index,
        }
    }

    pub fn column(&self) -> usize {
        self.column
    }

    /// Categories, indexed by code.
    pub fn categories(&self) -> &[Value] {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn code(&self, value: &Value) -> Option<usize> {
        self.index.get(value).copied()
    }

    pub fn decode(&self, code: usize) -> Option<&Value> {
        self.categories.get(code)
    }
}

impl From<Encoding> for EncodingParams {
    fn from(encoding: Encoding) -> Self {
        Self {
            column: encoding.column,
            categories: encoding.categories,
        }
    }
}

impl TryFrom<EncodingParams> for Encoding {
    type Error = EvalError;

    /// Rebuilds the lookup table; every category must appear once so that
    /// codes keep their positions.
    fn try_from(params: EncodingParams) -> Result<Self> {
        let encoding = Encoding::from_values(params.column, &params.categories);
        if encoding.len() != params.categories.len() {
            let mut seen = HashSet::new();
            if let Some(value) = params.categories.iter().find(|v| !seen.insert(*v)) {
                return Err(EvalError::DuplicateCategory {
                    column: params.column,
                    value: value.to_string(),
                });
            }
        }
        Ok(encoding)
    }
}

/// Builds the encoding of `column` from the values currently in the dataset.
///
/// # Errors
/// [`EvalError::ColumnOutOfRange`] if `column >= width`.
pub fn build_encoding(dataset: &Dataset, column: usize) -> Result<Encoding> {
    let encoding = Encoding::from_values(column, dataset.column(column)?);
    tracing::debug!(column, categories = encoding.len(), "built encoding");
    Ok(encoding)
}

/// Rewrites the encoding's column with its integer codes, in place.
///
/// Every value is looked up before the first write, so the dataset is
/// unchanged on error.
///
/// # Errors
/// - [`EvalError::ColumnOutOfRange`] if the column is past the row width.
/// - [`EvalError::UnknownCategory`] for a value the encoding does not know.
pub fn apply_encoding(dataset: &mut Dataset, encoding: &Encoding) -> Result<()> {
    let column = encoding.column;
    let codes = dataset
        .column(column)?
        .map(|value| {
            encoding
                .code(value)
                .ok_or_else(|| EvalError::UnknownCategory {
                    column,
                    value: value.to_string(),
                })
        })
        .collect::<Result<Vec<usize>>>()?;

    for (row, code) in dataset.rows_mut().iter_mut().zip(codes) {
        row[column] = Value::Numeric(code as f64);
    }
    Ok(())
}

/// Builds the encoding of `column` and applies it in place.
///
/// Returns the encoding so it can be applied to other datasets or used to
/// decode the column later.
///
/// # Errors
/// [`EvalError::ColumnOutOfRange`] if `column >= width`.
pub fn encode_column(dataset: &mut Dataset, column: usize) -> Result<Encoding> {
    let encoding = build_encoding(dataset, column)?;
    apply_encoding(dataset, &encoding)?;
    Ok(encoding)
}

/// Restores the raw categories of an encoded column, in place.
///
/// # Errors
/// - [`EvalError::ColumnOutOfRange`] if the column is past the row width.
/// - [`EvalError::UnknownCategory`] for a value that is not a valid code.
pub fn decode_column(dataset: &mut Dataset, encoding: &Encoding) -> Result<()> {
    let column = encoding.column;
    let raw = dataset
        .column(column)?
        .map(|value| {
            value
                .as_f64()
                .filter(|code| code.fract() == 0.0 && *code >= 0.0)
                .and_then(|code| encoding.decode(code as usize))
                .cloned()
                .ok_or_else(|| EvalError::UnknownCategory {
                    column,
                    value: value.to_string(),
                })
        })
        .collect::<Result<Vec<Value>>>()?;

    for (row, value) in dataset.rows_mut().iter_mut().zip(raw) {
        row[column] = value;
    }
    Ok(())
}
