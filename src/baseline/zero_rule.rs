//! Zero-rule baselines: the training mode or mean, repeated.

use crate::dataset::{Dataset, Value};
use crate::error::{EvalError, Result};
use std::collections::HashMap;

/// Most frequent training label.
///
/// Ties go to the label that appears first in training order among those
/// sharing the maximum count.
pub(crate) fn mode(train: &Dataset) -> Result<Value> {
    let mut counts: HashMap<&Value, usize> = HashMap::new();
    let mut order: Vec<&Value> = Vec::new();
    for label in train.labels() {
        let count = counts.entry(label).or_insert(0);
        if *count == 0 {
            order.push(label);
        }
        *count += 1;
    }

    let mut best: Option<(&Value, usize)> = None;
    for label in order {
        let count = counts[label];
        if best.map_or(true, |(_, max)| count > max) {
            best = Some((label, count));
        }
    }

    let (label, count) = best.ok_or(EvalError::EmptyDataset(
        "zero-rule classification needs training labels",
    ))?;
    tracing::debug!(%label, count, rows = train.len(), "zero-rule mode");
    Ok(label.clone())
}

/// Arithmetic mean of the training labels.
pub(crate) fn mean(train: &Dataset) -> Result<f64> {
    let label_index = train.label_index().ok_or(EvalError::EmptyDataset(
        "zero-rule regression needs training labels",
    ))?;
    let labels = train.numeric_column(label_index)?;
    let mean = labels.iter().sum::<f64>() / labels.len() as f64;
    tracing::debug!(mean, rows = labels.len(), "zero-rule mean");
    Ok(mean)
}
