//! Scoring predictions against ground truth.
//!
//! [`Scorer`] compares a prediction vector with the actual values it was
//! positionally aligned to.
//!
//! | Metric | Formula | Labels |
//! |--------|---------|--------|
//! | [`Scorer::accuracy`] | `100 * correct / n` | any `PartialEq` |
//! | [`Scorer::confusion_matrix`] | counts per (actual, predicted) | any `Ord` |
//! | [`Scorer::mae_metric`] | `mean(|p - a|)` | `f64` |
//! | [`Scorer::mse_metric`] | `mean((p - a)^2)` | `f64` |
//! | [`Scorer::rmse_metric`] | `sqrt(mse)` | `f64` |
//!
//! Every metric fails with [`EvalError::LengthMismatch`] when the vectors
//! differ in length and with [`EvalError::EmptyInput`] when both are empty.

use crate::error::{EvalError, Result};

mod confusion;

pub use confusion::ConfusionMatrix;

/// Evaluation metrics for classification and regression predictions.
pub struct Scorer;

impl Scorer {
    /// Percentage of positions where the prediction equals the actual value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use evalrs::metrics::Scorer;
    ///
    /// let actual = [0, 0, 0, 0, 0, 1, 1, 1, 1, 1];
    /// let predicted = [0, 1, 0, 0, 0, 1, 0, 1, 1, 1];
    /// assert_eq!(Scorer::accuracy(&actual, &predicted).unwrap(), 80.0);
    /// ```
    pub fn accuracy<T: PartialEq>(actual: &[T], predicted: &[T]) -> Result<f64> {
        check_lengths(actual.len(), predicted.len())?;
        let correct = actual
            .iter()
            .zip(predicted)
            .filter(|(a, p)| a == p)
            .count();
        Ok(correct as f64 / actual.len() as f64 * 100.0)
    }

    /// Confusion matrix over the distinct actual values, sorted ascending.
    ///
    /// See [`ConfusionMatrix`] for how predicted-only labels are handled.
    pub fn confusion_matrix<T: Ord + Clone>(
        actual: &[T],
        predicted: &[T],
    ) -> Result<ConfusionMatrix<T>> {
        check_lengths(actual.len(), predicted.len())?;
        let matrix = ConfusionMatrix::tabulate(actual, predicted);
        tracing::debug!(
            labels = matrix.size(),
            counted = matrix.total(),
            rows = actual.len(),
            "confusion matrix"
        );
        Ok(matrix)
    }

    /// Mean Absolute Error.
    ///
    /// MAE = mean(|predicted - actual|)
    pub fn mae_metric(actual: &[f64], predicted: &[f64]) -> Result<f64> {
        check_lengths(actual.len(), predicted.len())?;
        let sum_abs: f64 = actual
            .iter()
            .zip(predicted)
            .map(|(&a, &p)| (p - a).abs())
            .sum();
        Ok(sum_abs / actual.len() as f64)
    }

    /// Mean Squared Error.
    ///
    /// MSE = mean((predicted - actual)^2)
    pub fn mse_metric(actual: &[f64], predicted: &[f64]) -> Result<f64> {
        check_lengths(actual.len(), predicted.len())?;
        let sum_sq: f64 = actual
            .iter()
            .zip(predicted)
            .map(|(&a, &p)| (p - a).powi(2))
            .sum();
        Ok(sum_sq / actual.len() as f64)
    }

    /// Root Mean Squared Error, in the units of the target.
    ///
    /// RMSE = sqrt(MSE)
    pub fn rmse_metric(actual: &[f64], predicted: &[f64]) -> Result<f64> {
        Ok(Self::mse_metric(actual, predicted)?.sqrt())
    }
}

fn check_lengths(actual: usize, predicted: usize) -> Result<()> {
    if actual != predicted {
        return Err(EvalError::LengthMismatch { actual, predicted });
    }
    if actual == 0 {
        return Err(EvalError::EmptyInput);
    }
    Ok(())
}
