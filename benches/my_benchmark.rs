use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ngram_analyzer::rank_texts;

fn benchmark_rank_texts(c: &mut Criterion) {
    let texts = [
        "the cat sat on the mat. the cat ran after the dog.",
        "the dog sat on the mat. the dog ran after the cat.",
    ];

    c.bench_function("rank_texts", |b| {
        b.iter(|| rank_texts(black_box(&texts), black_box(2), black_box(10)))
    });
}

criterion_group!(benches, benchmark_rank_texts);
criterion_main!(benches);
