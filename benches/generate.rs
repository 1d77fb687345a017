use random_token::{Casing, TokenGenerator, TokenOptions};

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

pub fn bench_generate(c: &mut Criterion) {
    let mut generator = TokenGenerator::new();

    let default = TokenOptions::new();
    c.bench_function("default 16 chars", |b| {
        b.iter(|| generator.generate(black_box(&default)))
    });

    let hex = TokenOptions::new().seed("hex").casing(Casing::Upper).length(64);
    c.bench_function("hex upper 64 chars", |b| {
        b.iter(|| generator.generate(black_box(&hex)))
    });

    let friendly = TokenOptions::new().mask("xyz");
    c.bench_function("friendly masked 16 chars", |b| {
        b.iter(|| generator.generate_friendly(black_box(&friendly)))
    });
}

criterion_group!(benches, bench_generate);
criterion_main!(benches);
