//! In-place column transforms applied before resampling.
//!
//! # Available Transforms
//!
//! ## Scaling
//! - [`normalize_dataset`]: min-max rescaling to `[0, 1]`
//! - [`standardize_dataset`]: zero mean, unit population standard deviation
//!
//! ## Encoding
//! - [`encode_column`]: categorical values to integer codes
//!
//! Every transform here mutates the caller's [`Dataset`](crate::dataset::Dataset)
//! in place and returns the statistics or mapping it used, so the same
//! transform can be replayed on another dataset (`apply_*`). A failed call
//! leaves the dataset untouched.

pub mod encoding;
pub mod scaling;

pub use encoding::{
    apply_encoding, build_encoding, decode_column, encode_column, Encoding, EncodingParams,
};
pub use scaling::{
    apply_minmax, apply_standardization, get_dataset_minmax, get_mean_std, normalize,
    normalize_dataset, standardize, standardize_dataset, ColumnStats, MeanStd, MinMax,
};
