//! Dataset partitioning for model evaluation.
//!
//! # Available Splits
//!
//! | Split | Output | Rows dropped |
//! |-------|--------|--------------|
//! | [`Resampler::train_test_split`] | `(train, test)` | never |
//! | [`Resampler::cross_validation_split`] | k folds of `floor(n / k)` rows | `n mod k` trailing rows |
//!
//! # Randomness
//!
//! A [`Resampler`] owns its random generator. Seed it with
//! [`Resampler::seeded`] for reproducible splits, or inject any generator
//! through [`Resampler::from_rng`]. No global random state is touched.
//!
//! # Example
//!
//! ```rust
//! use evalrs::dataset::Dataset;
//! use evalrs::resampling::Resampler;
//!
//! let ds = Dataset::from_numeric((1..=20).map(|i| vec![i as f64]).collect()).unwrap();
//! let mut resampler = Resampler::seeded(1);
//!
//! let (train, test) = resampler.train_test_split(&ds).unwrap();
//! assert_eq!((train.len(), test.len()), (14, 6));
//!
//! let folds = resampler.cross_validation_split(&ds).unwrap();
//! assert_eq!(folds.len(), 3);
//! assert_eq!(folds.dropped(), 2);
//! ```

use crate::dataset::Dataset;
use crate::error::Result;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

mod cross_validation;
mod holdout;

pub use cross_validation::CrossValidationFolds;

/// Configuration for a [`Resampler`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResamplerConfig {
    /// Fraction of rows assigned to the train set in a holdout split.
    pub split_ratio: f64,
    /// Number of folds for cross-validation.
    pub folds: usize,
}

impl Default for ResamplerConfig {
    fn default() -> Self {
        Self {
            split_ratio: 0.7,
            folds: 3,
        }
    }
}

/// Partitions datasets into train/test sets or cross-validation folds.
///
/// The input dataset is only borrowed: every split returns new datasets
/// built from cloned rows.
#[derive(Clone, Debug)]
pub struct Resampler<R = StdRng> {
    config: ResamplerConfig,
    rng: R,
}

impl Resampler<StdRng> {
    /// Create a resampler whose splits are reproducible for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    /// Create a resampler seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }
}

impl<R: Rng> Resampler<R> {
    /// Create a resampler drawing from the given generator.
    pub fn from_rng(rng: R) -> Self {
        Self {
            config: ResamplerConfig::default(),
            rng,
        }
    }

    /// Replace the whole configuration.
    pub fn with_config(mut self, config: ResamplerConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the train fraction for [`train_test_split`](Self::train_test_split).
    pub fn with_split_ratio(mut self, split_ratio: f64) -> Self {
        self.config.split_ratio = split_ratio;
        self
    }

    /// Set k for [`cross_validation_split`](Self::cross_validation_split).
    pub fn with_folds(mut self, folds: usize) -> Self {
        self.config.folds = folds;
        self
    }

    pub fn config(&self) -> &ResamplerConfig {
        &self.config
    }

    /// Split into `(train, test)`.
    ///
    /// A uniform random permutation of the row indices is drawn; the first
    /// `floor(split_ratio * n)` indices go to the train set and the remaining
    /// ones to the test set. Every row lands in exactly one output and both
    /// outputs keep the original row order.
    ///
    /// # Errors
    /// - [`EvalError::EmptyDataset`](crate::EvalError::EmptyDataset) if the dataset has no rows.
    /// - [`EvalError::InvalidSplitRatio`](crate::EvalError::InvalidSplitRatio) if the ratio is
    ///   outside `[0, 1]` or not finite.
    pub fn train_test_split(&mut self, dataset: &Dataset) -> Result<(Dataset, Dataset)> {
        holdout::split(dataset, self.config.split_ratio, &mut self.rng)
    }

    /// Split into k folds of `floor(n / k)` rows each.
    ///
    /// A shuffled copy of the row order is cut into k contiguous blocks; the
    /// remainder rows at the tail are dropped, not redistributed. The input
    /// dataset is not modified.
    ///
    /// # Errors
    /// - [`EvalError::EmptyDataset`](crate::EvalError::EmptyDataset) if the dataset has no rows.
    /// - [`EvalError::InvalidFoldCount`](crate::EvalError::InvalidFoldCount) if `k == 0` or `k > n`.
    pub fn cross_validation_split(&mut self, dataset: &Dataset) -> Result<CrossValidationFolds> {
        cross_validation::split(dataset, self.config.folds, &mut self.rng)
    }
}
