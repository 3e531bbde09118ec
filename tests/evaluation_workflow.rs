//! End-to-end evaluation runs: preprocess, resample, predict, score.

use approx::assert_abs_diff_eq;
use evalrs::preprocessing::{encode_column, normalize_dataset, standardize_dataset};
use evalrs::{
    BaselinePredictor, BaselineStrategy, Columns, Dataset, EvalError, Resampler, Scorer, Value,
};
use std::collections::BTreeSet;

fn iris_sample() -> Dataset {
    let rows = [
        (5.1, 3.5, "setosa"),
        (4.9, 3.0, "setosa"),
        (4.7, 3.2, "setosa"),
        (4.6, 3.1, "setosa"),
        (5.0, 3.6, "setosa"),
        (7.0, 3.2, "versicolor"),
        (6.4, 3.2, "versicolor"),
        (6.9, 3.1, "versicolor"),
        (5.5, 2.3, "versicolor"),
        (6.5, 2.8, "versicolor"),
        (6.3, 3.3, "virginica"),
        (5.8, 2.7, "virginica"),
        (7.1, 3.0, "virginica"),
        (6.3, 2.9, "virginica"),
        (6.5, 3.0, "virginica"),
    ];
    Dataset::new(
        rows.iter()
            .map(|&(a, b, label)| vec![Value::from(a), Value::from(b), Value::from(label)])
            .collect(),
    )
    .unwrap()
}

#[test]
fn holdout_classification_baseline() {
    let mut ds = iris_sample();
    encode_column(&mut ds, 2).unwrap();
    normalize_dataset(&mut ds, &Columns::Features).unwrap();

    let mut resampler = Resampler::seeded(1);
    let (train, test) = resampler.train_test_split(&ds).unwrap();
    assert_eq!(train.len(), 10);
    assert_eq!(test.len(), 5);

    let mut predictor = BaselinePredictor::seeded(1);
    let actual: Vec<Value> = test.labels().cloned().collect();

    for strategy in [BaselineStrategy::Random, BaselineStrategy::ZeroRuleClassification] {
        let predicted = predictor.predict(strategy, &train, &test).unwrap();
        let accuracy = Scorer::accuracy(&actual, &predicted).unwrap();
        assert!((0.0..=100.0).contains(&accuracy));

        let matrix = Scorer::confusion_matrix(&actual, &predicted).unwrap();
        // Predicted labels absent from the test labels have no column.
        assert!(matrix.total() <= test.len());
        assert_abs_diff_eq!(
            matrix.correct() as f64 / test.len() as f64 * 100.0,
            accuracy,
            epsilon = 1e-9
        );
    }
}

#[test]
fn cross_validated_regression_baseline() {
    let mut ds = Dataset::from_numeric(
        (0..21)
            .map(|i| vec![i as f64, (i * 3 % 7) as f64, 2.0 * i as f64 + 1.0])
            .collect(),
    )
    .unwrap();
    standardize_dataset(&mut ds, &Columns::Features).unwrap();

    let folds = Resampler::seeded(7).cross_validation_split(&ds).unwrap();
    assert_eq!(folds.len(), 3);
    assert_eq!(folds.dropped(), 0);

    let predictor = BaselinePredictor::seeded(0);
    for i in 0..folds.len() {
        let (train, test) = folds.train_test(i).unwrap();
        let predicted = predictor.zero_rule_regression(&train, &test).unwrap();
        let actual = test.numeric_column(test.label_index().unwrap()).unwrap();

        let mae = Scorer::mae_metric(&actual, &predicted).unwrap();
        let rmse = Scorer::rmse_metric(&actual, &predicted).unwrap();
        assert!(mae > 0.0);
        assert!(rmse >= mae);
    }
}

#[test]
fn folds_cover_rows_once() {
    let ds = Dataset::from_numeric((1..=20).map(|i| vec![i as f64]).collect()).unwrap();
    let folds = Resampler::seeded(1).cross_validation_split(&ds).unwrap();

    let sizes: Vec<usize> = folds.folds().iter().map(Dataset::len).collect();
    assert_eq!(sizes, vec![6, 6, 6]);
    assert_eq!(folds.covered(), 18);

    let ids: BTreeSet<i64> = folds
        .folds()
        .iter()
        .flat_map(|f| f.iter().map(|r| r[0].as_f64().unwrap() as i64))
        .collect();
    assert_eq!(ids.len(), 18);
}

#[test]
fn same_seed_reproduces_whole_run() {
    let run = |seed: u64| {
        let ds = iris_sample();
        let (train, test) = Resampler::seeded(seed).train_test_split(&ds).unwrap();
        BaselinePredictor::seeded(seed)
            .random_algorithm(&train, &test)
            .unwrap()
    };
    assert_eq!(run(42), run(42));
}

#[test]
fn errors_surface_without_partial_results() {
    let empty = Dataset::default();
    assert!(matches!(
        Resampler::seeded(0).train_test_split(&empty),
        Err(EvalError::EmptyDataset(_))
    ));
    assert!(matches!(
        BaselinePredictor::seeded(0).zero_rule_classification(&empty, &iris_sample()),
        Err(EvalError::EmptyDataset(_))
    ));

    let mut constant = Dataset::from_numeric(vec![vec![1.0, 0.0], vec![1.0, 1.0]]).unwrap();
    let before = constant.clone();
    assert_eq!(
        normalize_dataset(&mut constant, &Columns::All),
        Err(EvalError::ConstantColumn { column: Some(0) })
    );
    assert_eq!(constant, before);
}
