//! Model-free baseline predictors.
//!
//! Baselines give the performance floor a real model has to beat. They use
//! the labels of a training partition and only the *size* of the test
//! partition; test-row content is never read.
//!
//! | Strategy | Prediction for every test row |
//! |----------|-------------------------------|
//! | [`BaselineStrategy::Random`] | A uniform draw from the distinct training labels |
//! | [`BaselineStrategy::ZeroRuleClassification`] | The most frequent training label |
//! | [`BaselineStrategy::ZeroRuleRegression`] | The mean training label |
//!
//! # Example
//!
//! ```rust
//! use evalrs::baseline::BaselinePredictor;
//! use evalrs::dataset::{Dataset, Value};
//!
//! let train = Dataset::from_numeric(vec![vec![0.0], vec![1.0], vec![1.0]]).unwrap();
//! let test = Dataset::from_numeric(vec![vec![5.0], vec![6.0]]).unwrap();
//!
//! let predictor = BaselinePredictor::seeded(1);
//! let preds = predictor.zero_rule_classification(&train, &test).unwrap();
//! assert_eq!(preds, vec![Value::from(1.0), Value::from(1.0)]);
//! ```

use crate::dataset::{Dataset, Value};
use crate::error::Result;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

mod random;
mod zero_rule;

/// Which baseline to run through [`BaselinePredictor::predict`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BaselineStrategy {
    Random,
    ZeroRuleClassification,
    ZeroRuleRegression,
}

/// Produces baseline predictions from a training partition.
///
/// Only [`random_algorithm`](Self::random_algorithm) consumes randomness; the
/// generator is owned by the predictor so seeded runs are reproducible.
#[derive(Clone, Debug)]
pub struct BaselinePredictor<R = StdRng> {
    rng: R,
}

impl BaselinePredictor<StdRng> {
    /// Create a predictor whose random draws are reproducible for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    /// Create a predictor seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }
}

impl<R: Rng> BaselinePredictor<R> {
    /// Create a predictor drawing from the given generator.
    pub fn from_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Run `strategy`, returning one prediction per row of `test`.
    ///
    /// Regression predictions are returned as [`Value::Numeric`].
    pub fn predict(
        &mut self,
        strategy: BaselineStrategy,
        train: &Dataset,
        test: &Dataset,
    ) -> Result<Vec<Value>> {
        match strategy {
            BaselineStrategy::Random => self.random_algorithm(train, test),
            BaselineStrategy::ZeroRuleClassification => self.zero_rule_classification(train, test),
            BaselineStrategy::ZeroRuleRegression => Ok(self
                .zero_rule_regression(train, test)?
                .into_iter()
                .map(Value::Numeric)
                .collect()),
        }
    }

    /// Independent uniform draws from the distinct training labels.
    ///
    /// # Errors
    /// [`EvalError::EmptyDataset`](crate::EvalError::EmptyDataset) if `train` has no rows.
    pub fn random_algorithm(&mut self, train: &Dataset, test: &Dataset) -> Result<Vec<Value>> {
        random::predict(train, test.len(), &mut self.rng)
    }

    /// The most frequent training label for every test row.
    ///
    /// On a tie the label seen first in `train` wins.
    ///
    /// # Errors
    /// [`EvalError::EmptyDataset`](crate::EvalError::EmptyDataset) if `train` has no rows.
    pub fn zero_rule_classification(&self, train: &Dataset, test: &Dataset) -> Result<Vec<Value>> {
        let mode = zero_rule::mode(train)?;
        Ok(vec![mode; test.len()])
    }

    /// The mean training label for every test row.
    ///
    /// # Errors
    /// - [`EvalError::EmptyDataset`](crate::EvalError::EmptyDataset) if `train` has no rows.
    /// - [`EvalError::NonNumericValue`](crate::EvalError::NonNumericValue) for a categorical label.
    pub fn zero_rule_regression(&self, train: &Dataset, test: &Dataset) -> Result<Vec<f64>> {
        let mean = zero_rule::mean(train)?;
        Ok(vec![mean; test.len()])
    }
}
