use criterion::{Criterion, black_box, criterion_group, criterion_main};
use sankhya_base::{
    BirthDate, analyze, build_grid, connection_triad, cycle_number, life_number, natal_tarot,
    year_tarot, ziwei_triad, zodiac,
};

fn parse_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    group.bench_function("strict", |b| {
        b.iter(|| BirthDate::parse(black_box("19790619")))
    });
    group.bench_function("lenient", |b| {
        b.iter(|| BirthDate::parse_lenient(black_box("1979-06-19")))
    });
    group.finish();
}

fn calculators_bench(c: &mut Criterion) {
    let Ok(date) = BirthDate::parse("19790619") else {
        return;
    };

    let mut group = c.benchmark_group("calculators");
    group.bench_function("life_number", |b| b.iter(|| life_number(black_box(&date))));
    group.bench_function("cycle_number", |b| {
        b.iter(|| cycle_number(black_box(&date), black_box(2025)))
    });
    group.bench_function("natal_tarot", |b| b.iter(|| natal_tarot(black_box(&date))));
    group.bench_function("year_tarot", |b| {
        b.iter(|| year_tarot(black_box(&date), black_box(2025)))
    });
    group.bench_function("ziwei_triad", |b| b.iter(|| ziwei_triad(black_box(&date))));
    group.bench_function("connection_triad", |b| {
        b.iter(|| connection_triad(black_box(&date)))
    });
    group.bench_function("zodiac", |b| b.iter(|| zodiac(black_box(&date))));
    group.finish();
}

fn grid_bench(c: &mut Criterion) {
    let Ok(date) = BirthDate::parse("19530427") else {
        return;
    };

    let mut group = c.benchmark_group("grid");
    group.bench_function("build_grid", |b| b.iter(|| build_grid(black_box(&date))));
    let grid = build_grid(&date);
    group.bench_function("analyze", |b| b.iter(|| analyze(black_box(&grid))));
    group.finish();
}

criterion_group!(benches, parse_bench, calculators_bench, grid_bench);
criterion_main!(benches);
