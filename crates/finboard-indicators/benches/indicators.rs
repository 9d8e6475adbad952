//! Benchmarks for indicator implementations.

use chrono::{Days, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use finboard_core::traits::{Indicator, MultiOutputIndicator};
use finboard_core::types::{Bar, TimeSeries};
use finboard_indicators::{
    compute, BollingerBands, BollingerParams, Ema, MacdParams, PipelineConfig, Rsi, Sma,
};

fn generate_test_data(size: usize) -> Vec<f64> {
    (0..size)
        .map(|i| 100.0 + (i as f64 * 0.1).sin() * 10.0)
        .collect()
}

fn generate_series(size: usize) -> TimeSeries {
    let start = NaiveDate::from_ymd_opt(1990, 1, 1).unwrap();
    let bars = generate_test_data(size)
        .into_iter()
        .enumerate()
        .map(|(i, c)| {
            let date = start + Days::new(i as u64);
            Bar::new(date, c, c + 1.0, c - 1.0, c, 1_000.0)
        })
        .collect();
    TimeSeries::load(bars).unwrap()
}

fn benchmark_sma(c: &mut Criterion) {
    let mut group = c.benchmark_group("SMA");

    for size in [1000, 10000, 100000].iter() {
        let data = generate_test_data(*size);

        group.bench_with_input(BenchmarkId::new("sliding", size), &data, |b, data| {
            let sma = Sma::new(20).unwrap();
            b.iter(|| sma.calculate(black_box(data)))
        });
    }

    group.finish();
}

fn benchmark_ema(c: &mut Criterion) {
    let mut group = c.benchmark_group("EMA");

    for size in [1000, 10000, 100000].iter() {
        let data = generate_test_data(*size);

        group.bench_with_input(BenchmarkId::new("seeded", size), &data, |b, data| {
            let ema = Ema::new(20).unwrap();
            b.iter(|| ema.calculate(black_box(data)))
        });
    }

    group.finish();
}

fn benchmark_rsi(c: &mut Criterion) {
    let mut group = c.benchmark_group("RSI");

    for size in [1000, 10000, 100000].iter() {
        let data = generate_test_data(*size);

        group.bench_with_input(BenchmarkId::new("wilder", size), &data, |b, data| {
            let rsi = Rsi::new(14).unwrap();
            b.iter(|| rsi.calculate(black_box(data)))
        });
    }

    group.finish();
}

fn benchmark_bollinger(c: &mut Criterion) {
    let mut group = c.benchmark_group("Bollinger");

    for size in [1000, 10000].iter() {
        let data = generate_test_data(*size);

        group.bench_with_input(BenchmarkId::new("sample_std", size), &data, |b, data| {
            let bb = BollingerBands::with_params(20, 2.0).unwrap();
            b.iter(|| bb.calculate(black_box(data)))
        });
    }

    group.finish();
}

fn benchmark_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("Pipeline");
    let config = PipelineConfig {
        sma_window: 20,
        extra_sma_windows: vec![200],
        ema_window: 20,
        rsi_window: 14,
        macd: MacdParams {
            fast: 12,
            slow: 26,
            signal: 9,
        },
        bollinger: BollingerParams { window: 20, k: 2.0 },
    };

    for size in [1000, 10000].iter() {
        let series = generate_series(*size);

        group.bench_with_input(BenchmarkId::new("compute", size), &series, |b, series| {
            b.iter(|| compute(black_box(series), &config))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_sma,
    benchmark_ema,
    benchmark_rsi,
    benchmark_bollinger,
    benchmark_pipeline
);
criterion_main!(benches);
