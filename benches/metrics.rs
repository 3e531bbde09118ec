use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use evalrs::preprocessing::{normalize_dataset, standardize_dataset};
use evalrs::{Columns, Dataset, Resampler, Scorer};

fn bench_rmse(c: &mut Criterion) {
    for size in [100, 1000, 10000, 100000].iter() {
        c.bench_with_input(BenchmarkId::new("rmse", size), size, |b, &n| {
            let y_true: Vec<f64> = (0..n).map(|i| i as f64 * 0.1).collect();
            let y_pred: Vec<f64> = (0..n).map(|i| i as f64 * 0.1 + 0.5).collect();

            b.iter(|| {
                let rmse = Scorer::rmse_metric(black_box(&y_true), black_box(&y_pred));
                black_box(rmse).ok();
            });
        });
    }
}

fn bench_confusion_matrix(c: &mut Criterion) {
    for size in [100, 1000, 10000].iter() {
        c.bench_with_input(BenchmarkId::new("confusion_matrix", size), size, |b, &n| {
            let actual: Vec<u32> = (0..n).map(|i| (i % 5) as u32).collect();
            let predicted: Vec<u32> = (0..n).map(|i| ((i * 7) % 5) as u32).collect();

            b.iter(|| {
                let cm = Scorer::confusion_matrix(black_box(&actual), black_box(&predicted));
                black_box(cm).ok();
            });
        });
    }
}

fn numeric_dataset(n: usize) -> Dataset {
    Dataset::from_numeric(
        (0..n)
            .map(|i| vec![i as f64, (i % 13) as f64, (i * i % 101) as f64, (i % 2) as f64])
            .collect(),
    )
    .expect("rectangular rows")
}

fn bench_scaling(c: &mut Criterion) {
    for size in [1000, 10000].iter() {
        let ds = numeric_dataset(*size);
        c.bench_with_input(BenchmarkId::new("normalize_dataset", size), &ds, |b, ds| {
            b.iter(|| {
                let mut ds = ds.clone();
                normalize_dataset(&mut ds, &Columns::Features).ok();
                black_box(ds);
            });
        });
        c.bench_with_input(BenchmarkId::new("standardize_dataset", size), &ds, |b, ds| {
            b.iter(|| {
                let mut ds = ds.clone();
                standardize_dataset(&mut ds, &Columns::Features).ok();
                black_box(ds);
            });
        });
    }
}

fn bench_cross_validation(c: &mut Criterion) {
    let ds = numeric_dataset(10000);
    c.bench_function("cross_validation_split_k10", |b| {
        let mut resampler = Resampler::seeded(1).with_folds(10);
        b.iter(|| black_box(resampler.cross_validation_split(&ds)).ok());
    });
}

criterion_group!(
    benches,
    bench_rmse,
    bench_confusion_matrix,
    bench_scaling,
    bench_cross_validation
);
criterion_main!(benches);
