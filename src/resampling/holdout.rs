//! Two-way holdout split.

use crate::dataset::Dataset;
use crate::error::{EvalError, Result};
use rand::seq::SliceRandom;
use rand::Rng;

/// Splits `dataset` into `(train, test)` using a uniform random permutation.
///
/// The first `floor(split_ratio * n)` permuted indices form the train set and
/// the rest form the test set. Both outputs keep the rows in their original
/// dataset order.
pub(crate) fn split<R: Rng>(
    dataset: &Dataset,
    split_ratio: f64,
    rng: &mut R,
) -> Result<(Dataset, Dataset)> {
    if dataset.is_empty() {
        return Err(EvalError::EmptyDataset("cannot split an empty dataset"));
    }
    if !split_ratio.is_finite() || !(0.0..=1.0).contains(&split_ratio) {
        return Err(EvalError::InvalidSplitRatio(split_ratio));
    }

    let n = dataset.len();
    let mut permutation: Vec<usize> = (0..n).collect();
    permutation.shuffle(rng);

    let train_count = train_count(n, split_ratio);
    let mut in_train = vec![false; n];
    for &i in &permutation[..train_count] {
        in_train[i] = true;
    }

    let (train_idx, test_idx): (Vec<usize>, Vec<usize>) = (0..n).partition(|&i| in_train[i]);

    tracing::debug!(
        rows = n,
        split_ratio,
        train = train_idx.len(),
        test = test_idx.len(),
        "holdout split"
    );

    Ok((dataset.select(&train_idx), dataset.select(&test_idx)))
}

/// `floor(split_ratio * n)`, clamped to `n` against rounding at ratio 1.
pub(crate) fn train_count(n: usize, split_ratio: f64) -> usize {
    ((split_ratio * n as f64).floor() as usize).min(n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use rstest::rstest;
    use std::collections::BTreeSet;

    fn ids(ds: &Dataset) -> BTreeSet<i64> {
        ds.iter().map(|r| r[0].as_f64().unwrap() as i64).collect()
    }

    fn sequence(n: usize) -> Dataset {
        Dataset::from_numeric((1..=n).map(|i| vec![i as f64]).collect()).unwrap()
    }

    #[rstest]
    #[case(20, 0.7, 14)]
    #[case(10, 0.5, 5)]
    #[case(7, 0.3, 2)]
    #[case(5, 1.0, 5)]
    #[case(5, 0.0, 0)]
    fn test_split_sizes(#[case] n: usize, #[case] ratio: f64, #[case] expected_train: usize) {
        let mut rng = StdRng::seed_from_u64(1);
        let (train, test) = split(&sequence(n), ratio, &mut rng).unwrap();
        assert_eq!(train.len(), expected_train);
        assert_eq!(train.len() + test.len(), n);
    }

    #[test]
    fn test_split_is_disjoint_and_exhaustive() {
        let ds = sequence(37);
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let (train, test) = split(&ds, 0.65, &mut rng).unwrap();
            let a = ids(&train);
            let b = ids(&test);
            assert!(a.is_disjoint(&b));
            assert_eq!(a.union(&b).count(), 37);
            assert_eq!(train.len(), train_count(37, 0.65));
        }
    }

    #[test]
    fn test_split_preserves_row_order() {
        let mut rng = StdRng::seed_from_u64(9);
        let (train, test) = split(&sequence(15), 0.6, &mut rng).unwrap();
        for part in [&train, &test] {
            let values: Vec<f64> = part.iter().map(|r| r[0].as_f64().unwrap()).collect();
            assert!(values.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn test_split_same_seed_same_result() {
        let ds = sequence(20);
        let a = split(&ds, 0.7, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = split(&ds, 0.7, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_split_empty_dataset() {
        let ds = Dataset::new(vec![]).unwrap();
        let result = split(&ds, 0.7, &mut StdRng::seed_from_u64(0));
        assert!(matches!(result, Err(EvalError::EmptyDataset(_))));
    }

    #[rstest]
    #[case(-0.1)]
    #[case(1.5)]
    #[case(f64::NAN)]
    fn test_split_invalid_ratio(#[case] ratio: f64) {
        let result = split(&sequence(4), ratio, &mut StdRng::seed_from_u64(0));
        assert!(matches!(result, Err(EvalError::InvalidSplitRatio(_))));
    }
}
