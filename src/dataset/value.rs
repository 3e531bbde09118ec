//! Cell values.

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A single cell of a [`Row`](super::Row): a float or a raw categorical token.
///
/// Values have a total order so they can serve as labels in sorted
/// containers and hash maps:
/// - numeric values compare through [`OrderedFloat`] (`NaN == NaN`, `-0.0 == 0.0`),
/// - every numeric value sorts before every category,
/// - categories compare lexicographically.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// A numeric feature or label.
    Numeric(f64),
    /// A raw categorical token, before encoding.
    Category(String),
}

impl Value {
    /// Returns the float if this is a numeric value.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Numeric(x) => Some(*x),
            Value::Category(_) => None,
        }
    }

    /// Returns the token if this is a categorical value.
    pub fn as_category(&self) -> Option<&str> {
        match self {
            Value::Numeric(_) => None,
            Value::Category(s) => Some(s),
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Value::Numeric(_))
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Value {}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Value {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Value::Numeric(a), Value::Numeric(b)) => OrderedFloat(*a).cmp(&OrderedFloat(*b)),
            (Value::Numeric(_), Value::Category(_)) => Ordering::Less,
            (Value::Category(_), Value::Numeric(_)) => Ordering::Greater,
            (Value::Category(a), Value::Category(b)) => a.cmp(b),
        }
    }
}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Value::Numeric(x) => {
                0u8.hash(state);
                OrderedFloat(*x).hash(state);
            }
            Value::Category(s) => {
                1u8.hash(state);
                s.hash(state);
            }
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Numeric(x) => write!(f, "{}", x),
            Value::Category(s) => write!(f, "{}", s),
        }
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Numeric(x)
    }
}

impl From<i32> for Value {
    fn from(x: i32) -> Self {
        Value::Numeric(f64::from(x))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Category(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Category(s)
    }
}
