use criterion::{Criterion, black_box, criterion_group, criterion_main};
use sankhya_math::{Ceiling, digit_sum, reduce, reduce_steps};

fn reduce_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("reduce");
    group.bench_function("digit_sum_8_digits", |b| {
        b.iter(|| digit_sum(black_box(19_790_619)))
    });
    group.bench_function("reduce_digit", |b| {
        b.iter(|| reduce(black_box(119_988), Ceiling::Digit))
    });
    group.bench_function("reduce_arcana", |b| {
        b.iter(|| reduce(black_box(119_988), Ceiling::Arcana))
    });
    group.bench_function("reduce_steps_arcana", |b| {
        b.iter(|| reduce_steps(black_box(119_988), Ceiling::Arcana))
    });
    group.finish();
}

criterion_group!(benches, reduce_bench);
criterion_main!(benches);
