//! Performance benchmarks for tokenization and rule checking
//!
//! Run with: cargo bench --bench tokenizer_benchmarks

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;
use tajweed_core::{classify, tokenize, PauseMarkSet, PausePreset, QalqalahRule, RulePlugin};

/// Generate a voweled segment of roughly `size` chars
fn generate_segment(size: usize) -> String {
    // "qul huwa allahu ahad" with harakat, a Waqf sign and a trailing sukoon
    let base = "\u{0642}\u{064F}\u{0644}\u{0652} \u{0647}\u{064F}\u{0648}\u{064E} \
                \u{0671}\u{0644}\u{0644}\u{0651}\u{064E}\u{0647}\u{064F} \u{06D6} \
                \u{0623}\u{064E}\u{062D}\u{064E}\u{062F}\u{064C} ";
    let repeat_count = size / base.chars().count() + 1;
    base.repeat(repeat_count).chars().take(size).collect()
}

fn bench_tokenize(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokenize");

    for size in [64, 1024, 16_384] {
        let text = generate_segment(size);

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("chars", size), &text, |b, text| {
            b.iter(|| tokenize(black_box(text)));
        });
    }

    group.finish();
}

fn bench_qalqalah_pass(c: &mut Criterion) {
    let mut group = c.benchmark_group("qalqalah_pass");
    let marks = PauseMarkSet::preset(PausePreset::Default);
    let rule = QalqalahRule::new();

    for size in [64, 1024, 16_384] {
        let text = generate_segment(size);
        let chars: Vec<char> = text.chars().collect();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("chars", size), &chars, |b, chars| {
            b.iter(|| {
                let complexes = tajweed_core::Tokenizer::new().tokenize_chars(chars);
                let mut hits = 0usize;
                for (i, complex) in complexes.iter().enumerate() {
                    let stop = classify(chars, complex.end(), &marks);
                    if let Ok(Some(_)) = rule.check(complex, &stop, &complexes, i) {
                        hits += 1;
                    }
                }
                black_box(hits)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_tokenize, bench_qalqalah_pass);
criterion_main!(benches);
