//! Benchmarks for figure construction
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gapdash::dataset::{Dataset, Subsets};
use gapdash::views;

fn bench_bar_chart(c: &mut Criterion) {
    let dataset = Dataset::load().unwrap();
    let subsets = Subsets::derive(&dataset);

    c.bench_function("bar_chart_initial", |b| {
        b.iter(|| views::country_bar_chart(black_box(&subsets.countries), None))
    });

    c.bench_function("bar_chart_update", |b| {
        b.iter(|| views::country_bar_chart(black_box(&subsets.countries), Some("Belgium")))
    });
}

fn bench_choropleth(c: &mut Criterion) {
    let dataset = Dataset::load().unwrap();
    let subsets = Subsets::derive(&dataset);

    c.bench_function("choropleth", |b| {
        b.iter(|| views::life_exp_choropleth(black_box(&subsets.countries)))
    });
}

fn bench_serialization(c: &mut Criterion) {
    let dataset = Dataset::load().unwrap();
    let subsets = Subsets::derive(&dataset);
    let figure = views::country_bar_chart(&subsets.countries, Some("Germany"));

    c.bench_function("figure_to_json", |b| {
        b.iter(|| serde_json::to_string(black_box(&figure)).unwrap())
    });
}

criterion_group!(benches, bench_bar_chart, bench_choropleth, bench_serialization);
criterion_main!(benches);
