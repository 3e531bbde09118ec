//! K-fold partitioning.

use crate::dataset::{Dataset, Row};
use crate::error::{EvalError, Result};
use rand::seq::SliceRandom;
use rand::Rng;

/// The k folds produced by a cross-validation split.
///
/// Folds hold `floor(n / k)` rows each. When `n` is not divisible by `k` the
/// trailing `n - k * floor(n / k)` rows of the shuffled order are dropped and
/// reported through [`dropped`](Self::dropped).
#[derive(Debug, Clone, PartialEq)]
pub struct CrossValidationFolds {
    folds: Vec<Dataset>,
    dropped: usize,
}

impl CrossValidationFolds {
    pub fn folds(&self) -> &[Dataset] {
        &self.folds
    }

    pub fn into_folds(self) -> Vec<Dataset> {
        self.folds
    }

    /// Number of folds (k).
    pub fn len(&self) -> usize {
        self.folds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.folds.is_empty()
    }

    /// Rows left out because `n` was not a multiple of `k`.
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    /// Rows covered by all folds together.
    pub fn covered(&self) -> usize {
        self.folds.iter().map(Dataset::len).sum()
    }

    /// Train/test pair for one round of cross-validation.
    ///
    /// The test set is fold `index`; the train set concatenates every other
    /// fold in fold order.
    ///
    /// # Errors
    /// [`EvalError::FoldOutOfRange`] if `index >= k`.
    pub fn train_test(&self, index: usize) -> Result<(Dataset, Dataset)> {
        let test = self
            .folds
            .get(index)
            .ok_or(EvalError::FoldOutOfRange {
                index,
                folds: self.folds.len(),
            })?
            .clone();

        let rows: Vec<Row> = self
            .folds
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != index)
            .flat_map(|(_, fold)| fold.rows().iter().cloned())
            .collect();
        let train = Dataset::from_rows_unchecked(rows, test.width());
        Ok((train, test))
    }
}

impl IntoIterator for CrossValidationFolds {
    type Item = Dataset;
    type IntoIter = std::vec::IntoIter<Dataset>;

    fn into_iter(self) -> Self::IntoIter {
        self.folds.into_iter()
    }
}

impl<'a> IntoIterator for &'a CrossValidationFolds {
    type Item = &'a Dataset;
    type IntoIter = std::slice::Iter<'a, Dataset>;

    fn into_iter(self) -> Self::IntoIter {
        self.folds.iter()
    }
}

/// Shuffles a copy of the row order and cuts it into `k` contiguous blocks.
pub(crate) fn split<R: Rng>(
    dataset: &Dataset,
    k: usize,
    rng: &mut R,
) -> Result<CrossValidationFolds> {
    let n = dataset.len();
    if n == 0 {
        return Err(EvalError::EmptyDataset("cannot fold an empty dataset"));
    }
    if k == 0 || k > n {
        return Err(EvalError::InvalidFoldCount { k, n });
    }

    let mut order: Vec<usize> = (0..n).collect();
    order.shuffle(rng);

    let fold_size = n / k;
    let folds: Vec<Dataset> = order
        .chunks_exact(fold_size)
        .take(k)
        .map(|block| dataset.select(block))
        .collect();
    let dropped = n - k * fold_size;

    tracing::debug!(rows = n, k, fold_size, dropped, "cross-validation split");

    Ok(CrossValidationFolds { folds, dropped })
}
