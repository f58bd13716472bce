use criterion::{black_box, criterion_group, criterion_main, Criterion};

use cttk_bigint::bigint::conversion::from_i64;
use cttk_bigint::bigint::limbs_for_width;
use cttk_bigint::bigint::{additive, div, mul};

const LIMBS: usize = limbs_for_width(256);

fn bench_add(c: &mut Criterion) {
    let a = from_i64::<LIMBS>(256, 123_456_789).unwrap();
    let b = from_i64::<LIMBS>(256, 987_654_321).unwrap();
    c.bench_function("add width=256", |bencher| {
        bencher.iter(|| additive::add(black_box(&a), black_box(&b)));
    });
}

fn bench_mul(c: &mut Criterion) {
    let a = from_i64::<LIMBS>(256, 123_456_789).unwrap();
    let b = from_i64::<LIMBS>(256, 987_654_321).unwrap();
    c.bench_function("mul width=256", |bencher| {
        bencher.iter(|| mul::mul(black_box(&a), black_box(&b)));
    });
}

fn bench_divrem(c: &mut Criterion) {
    let a = from_i64::<LIMBS>(256, 123_456_789_012i64).unwrap();
    let b = from_i64::<LIMBS>(256, 7919).unwrap();
    c.bench_function("divrem width=256", |bencher| {
        bencher.iter(|| div::divrem(black_box(&a), black_box(&b)));
    });
}

criterion_group!(benches, bench_add, bench_mul, bench_divrem);
criterion_main!(benches);
