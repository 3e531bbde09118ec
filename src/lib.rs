//! # evalrs
//!
//! Building blocks for evaluating tabular predictive models: partition a
//! dataset, produce baseline predictions, score predictions against ground
//! truth, and rescale or encode features.
//!
//! ## Core Design Principles
//!
//! - **Explicit Randomness**: Shuffles and random baselines draw from a
//!   generator owned by the [`Resampler`] or [`BaselinePredictor`]. Seed it
//!   and every run is reproducible; no global state is involved.
//! - **Explicit Mutation**: Resampling borrows the dataset and returns new
//!   ones. Scaling and encoding rewrite columns in place and say so.
//! - **All-or-Nothing**: An operation either returns a complete result or an
//!   [`EvalError`]; a failed in-place transform leaves the data untouched.
//! - **Deterministic Layouts**: Confusion-matrix labels are sorted and
//!   category codes follow first appearance, never hash-map iteration order.
//!
//! ## Quick Start
//!
//! ```rust
//! use evalrs::baseline::BaselinePredictor;
//! use evalrs::dataset::Dataset;
//! use evalrs::metrics::Scorer;
//! use evalrs::resampling::Resampler;
//!
//! let ds = Dataset::from_numeric(
//!     (0..20).map(|i| vec![i as f64, (i % 2) as f64]).collect(),
//! )
//! .unwrap();
//!
//! let (train, test) = Resampler::seeded(1).train_test_split(&ds).unwrap();
//! let predicted = BaselinePredictor::seeded(1)
//!     .zero_rule_classification(&train, &test)
//!     .unwrap();
//! let actual: Vec<_> = test.labels().cloned().collect();
//!
//! let accuracy = Scorer::accuracy(&actual, &predicted).unwrap();
//! assert!((0.0..=100.0).contains(&accuracy));
//! ```
//!
//! ## Module Structure
//!
//! - `dataset`: Rows, values and the in-memory [`Dataset`]
//! - `resampling`: Holdout and k-fold splits
//! - `baseline`: Random and zero-rule predictors
//! - `metrics`: Accuracy, confusion matrix, MAE, MSE, RMSE
//! - `preprocessing`: Min-max / z-score scaling and categorical encoding
//! - `error`: The [`EvalError`] taxonomy

/// Error taxonomy shared by every operation.
pub mod error;

/// In-memory rows and values.
pub mod dataset;

/// Train/test and k-fold partitioning.
pub mod resampling;

/// Model-free baseline predictors.
pub mod baseline;

/// Scoring predictions against ground truth.
pub mod metrics;

/// Feature scaling and categorical encoding.
pub mod preprocessing;

pub use baseline::{BaselinePredictor, BaselineStrategy};
pub use dataset::{Columns, Dataset, Row, Value};
pub use error::{EvalError, Result};
pub use metrics::{ConfusionMatrix, Scorer};
pub use resampling::{CrossValidationFolds, Resampler, ResamplerConfig};
