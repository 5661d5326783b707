use criterion::{black_box, criterion_group, criterion_main, Criterion};

use restock_eoq::{basic, cost_curve, with_shortages};

fn bench_models(c: &mut Criterion) {
    c.bench_function("eoq_basic", |b| {
        b.iter(|| basic(black_box(1200.0), black_box(50.0), black_box(4.0)))
    });

    c.bench_function("eoq_with_shortages", |b| {
        b.iter(|| {
            with_shortages(
                black_box(1200.0),
                black_box(50.0),
                black_box(4.0),
                black_box(2.0),
            )
        })
    });

    c.bench_function("eoq_cost_curve_100", |b| {
        b.iter(|| cost_curve(black_box(1200.0), black_box(50.0), black_box(4.0), 100))
    });
}

criterion_group!(benches, bench_models);
criterion_main!(benches);
