//! Confusion matrix.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Cross-tabulation of actual against predicted labels.
///
/// The label universe is the set of distinct *actual* values, sorted
/// ascending. `counts()[i][j]` is the number of positions where the actual
/// value is `labels()[i]` and the predicted value is `labels()[j]`.
///
/// Predictions of a label that never occurs in the actual values have no
/// column to land in and are not counted, so [`total`](Self::total) can be
/// smaller than the number of scored rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfusionMatrix<T> {
    labels: Vec<T>,
    counts: Vec<Vec<usize>>,
}

impl<T: Ord + Clone> ConfusionMatrix<T> {
    /// Tabulates equal-length, non-empty vectors; callers check lengths.
    pub(crate) fn tabulate(actual: &[T], predicted: &[T]) -> Self {
        let labels: Vec<T> = actual
            .iter()
            .cloned()
            .collect::<BTreeSet<T>>()
            .into_iter()
            .collect();
        let mut counts = vec![vec![0usize; labels.len()]; labels.len()];

        for (a, p) in actual.iter().zip(predicted) {
            // Every actual value is in the universe by construction.
            let (Ok(i), Ok(j)) = (labels.binary_search(a), labels.binary_search(p)) else {
                continue;
            };
            counts[i][j] += 1;
        }

        Self { labels, counts }
    }

    /// Count for one (actual, predicted) pair, `None` if either label is
    /// outside the universe.
    pub fn get(&self, actual: &T, predicted: &T) -> Option<usize> {
        let i = self.labels.binary_search(actual).ok()?;
        let j = self.labels.binary_search(predicted).ok()?;
        Some(self.counts[i][j])
    }
}

impl<T> ConfusionMatrix<T> {
    /// Row/column labels, sorted ascending.
    pub fn labels(&self) -> &[T] {
        &self.labels
    }

    /// Square count matrix indexed `[actual][predicted]`.
    pub fn counts(&self) -> &[Vec<usize>] {
        &self.counts
    }

    /// Number of distinct actual labels.
    pub fn size(&self) -> usize {
        self.labels.len()
    }

    /// Sum of all cells.
    pub fn total(&self) -> usize {
        self.counts.iter().flatten().sum()
    }

    /// Sum of the diagonal: correctly predicted rows.
    pub fn correct(&self) -> usize {
        self.counts.iter().enumerate().map(|(i, row)| row[i]).sum()
    }
}

impl<T: fmt::Display> fmt::Display for ConfusionMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header: Vec<String> = self.labels.iter().map(ToString::to_string).collect();
        writeln!(f, "(P){}", header.join(" "))?;
        writeln!(f, "(A)---")?;
        for (label, row) in self.labels.iter().zip(&self.counts) {
            let cells: Vec<String> = row.iter().map(ToString::to_string).collect();
            writeln!(f, "{}| {}", label, cells.join(" "))?;
        }
        Ok(())
    }
}
