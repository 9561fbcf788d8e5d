use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tajweed_core::QalqalahRule;
use tajweed_engine::{Corpus, CorpusEntry, ExecutionMode, RuleEngine};

fn synthetic_corpus(ayas: u32) -> Corpus {
    let text = "\u{0642}\u{064F}\u{0644}\u{0652} \u{0647}\u{064F}\u{0648}\u{064E} \
                \u{0671}\u{0644}\u{0644}\u{0651}\u{064E}\u{0647}\u{064F} \u{06D6} \
                \u{0623}\u{064E}\u{062D}\u{064E}\u{062F}\u{064C}";
    let entries = (1..=ayas)
        .map(|aya| CorpusEntry::new(aya / 50 + 1, aya, text))
        .collect();
    Corpus::from_entries(entries)
}

fn bench_engine_modes(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine_run");
    let corpus = synthetic_corpus(6_236);
    let rule = QalqalahRule::new();

    for mode in [ExecutionMode::Sequential, ExecutionMode::Parallel] {
        let engine = RuleEngine::builder()
            .execution_mode(mode)
            .build()
            .expect("valid engine configuration");

        group.bench_with_input(BenchmarkId::new("mode", mode), &corpus, |b, corpus| {
            b.iter(|| {
                engine
                    .run_corpus(black_box(corpus), &rule)
                    .map(|output| output.instances.len())
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_engine_modes);
criterion_main!(benches);
