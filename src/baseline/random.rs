//! Random prediction baseline.

use crate::dataset::{Dataset, Value};
use crate::error::{EvalError, Result};
use rand::Rng;
use std::collections::HashSet;

/// Distinct label values of `train`, in order of first appearance.
pub(crate) fn distinct_labels(train: &Dataset) -> Vec<Value> {
    let mut seen = HashSet::new();
    train
        .labels()
        .filter(|label| seen.insert(*label))
        .cloned()
        .collect()
}

/// Draws `n` labels uniformly, with replacement, from the distinct labels of `train`.
///
/// Label frequency plays no role: a label seen once is as likely as one
/// seen a hundred times.
pub(crate) fn predict<R: Rng>(train: &Dataset, n: usize, rng: &mut R) -> Result<Vec<Value>> {
    if train.is_empty() {
        return Err(EvalError::EmptyDataset(
            "random baseline needs training labels",
        ));
    }
    let universe = distinct_labels(train);
    tracing::debug!(distinct = universe.len(), n, "random baseline");

    Ok((0..n)
        .map(|_| universe[rng.gen_range(0..universe.len())].clone())
        .collect())
}
