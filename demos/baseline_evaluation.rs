//! Baseline Evaluation Walkthrough
//!
//! Loads a small CSV table, encodes the class column, normalizes the
//! features and reports how the baseline predictors score under a holdout
//! split and under 3-fold cross-validation.
//!
//! Run with: cargo run --example baseline_evaluation
//! Set `RUST_LOG=evalrs=debug` to see the library's events.

use evalrs::preprocessing::{encode_column, normalize_dataset};
use evalrs::{
    BaselinePredictor, BaselineStrategy, Columns, Dataset, Resampler, Row, Scorer, Value,
};
use std::error::Error;
use tracing_subscriber::EnvFilter;

const SEED: u64 = 1;

/// Iris subset: sepal length, sepal width, petal length, petal width, class.
const IRIS_CSV: &str = "\
5.1,3.5,1.4,0.2,Iris-setosa
4.9,3.0,1.4,0.2,Iris-setosa
4.7,3.2,1.3,0.2,Iris-setosa
4.6,3.1,1.5,0.2,Iris-setosa
5.0,3.6,1.4,0.2,Iris-setosa
5.4,3.9,1.7,0.4,Iris-setosa
7.0,3.2,4.7,1.4,Iris-versicolor
6.4,3.2,4.5,1.5,Iris-versicolor
6.9,3.1,4.9,1.5,Iris-versicolor
5.5,2.3,4.0,1.3,Iris-versicolor
6.5,2.8,4.6,1.5,Iris-versicolor
5.7,2.8,4.5,1.3,Iris-versicolor

6.3,3.3,6.0,2.5,Iris-virginica
5.8,2.7,5.1,1.9,Iris-virginica
7.1,3.0,5.9,2.1,Iris-virginica
6.3,2.9,5.6,1.8,Iris-virginica
6.5,3.0,5.8,2.2,Iris-virginica
7.6,3.0,6.6,2.1,Iris-virginica
";

/// Reads every non-empty record as raw tokens.
fn load_csv(data: &str) -> Result<Dataset, Box<dyn Error>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(data.as_bytes());

    let mut rows: Vec<Row> = Vec::new();
    for record in reader.records() {
        let record = record?;
        if record.iter().all(|field| field.trim().is_empty()) {
            continue;
        }
        rows.push(record.iter().map(Value::from).collect());
    }
    Ok(Dataset::new(rows)?)
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut data = load_csv(IRIS_CSV)?;
    println!("Loaded {} rows with {} columns", data.len(), data.width());
    println!("Sample row: {:?}", data.row(0));

    // Features arrive as strings; the last column is the class.
    let label = data.width() - 1;
    for column in 0..label {
        data.column_to_numeric(column)?;
    }
    let encoding = encode_column(&mut data, label)?;
    for (code, class) in encoding.categories().iter().enumerate() {
        println!("  {} -> {}", class, code);
    }
    let ranges = normalize_dataset(&mut data, &Columns::Features)?;
    for (column, mm) in ranges.iter() {
        println!("  column {}: min={} max={}", column, mm.min, mm.max);
    }

    // --- Holdout ---
    let mut resampler = Resampler::seeded(SEED);
    let mut predictor = BaselinePredictor::seeded(SEED);

    let (train, test) = resampler.train_test_split(&data)?;
    println!("\nHoldout: {} train / {} test", train.len(), test.len());
    let actual: Vec<Value> = test.labels().cloned().collect();

    for strategy in [
        BaselineStrategy::Random,
        BaselineStrategy::ZeroRuleClassification,
    ] {
        let predicted = predictor.predict(strategy, &train, &test)?;
        let accuracy = Scorer::accuracy(&actual, &predicted)?;
        println!("{:?}: accuracy {:.2}%", strategy, accuracy);
        print!("{}", Scorer::confusion_matrix(&actual, &predicted)?);
    }

    // --- Cross-validation ---
    let folds = resampler.cross_validation_split(&data)?;
    println!(
        "\n{}-fold cross-validation ({} rows dropped)",
        folds.len(),
        folds.dropped()
    );
    let mut scores = Vec::with_capacity(folds.len());
    for i in 0..folds.len() {
        let (train, test) = folds.train_test(i)?;
        let actual: Vec<Value> = test.labels().cloned().collect();
        let predicted = predictor.zero_rule_classification(&train, &test)?;
        scores.push(Scorer::accuracy(&actual, &predicted)?);
    }
    let mean = scores.iter().sum::<f64>() / scores.len() as f64;
    println!("Zero-rule scores: {:?}, mean {:.2}%", scores, mean);

    // --- Regression on petal width ---
    let regression = Dataset::new(data.iter().map(|row| row[..4].to_vec()).collect())?;
    let (train, test) = resampler.train_test_split(&regression)?;
    let predicted = predictor.zero_rule_regression(&train, &test)?;
    let actual = test.numeric_column(3)?;
    println!(
        "\nZero-rule regression: MAE {:.4}, RMSE {:.4}",
        Scorer::mae_metric(&actual, &predicted)?,
        Scorer::rmse_metric(&actual, &predicted)?
    );

    Ok(())
}
