//! Integration tests for corpus-level runs

use std::io::Write;
use tajweed_core::chars::{pause_mark_name, BEH, DAL, FATHA, QAF, SHADDA, SUKOON, TEH, WAQF_MEEM};
use tajweed_core::{LetterComplex, QalqalahRule, RuleError, RuleFinding, StopContext};
use tajweed_engine::{
    BismillahPolicy, Corpus, CorpusEntry, ExecutionMode, JsonCorpusFile, PausePreset, RuleEngine,
    Segment, SourceType,
};

fn sample_corpus() -> Corpus {
    Corpus::from_entries(vec![
        CorpusEntry::new(2, 1, format!("{DAL}{SUKOON} {BEH}{FATHA}")),
        CorpusEntry::new(1, 2, format!("{QAF}{SHADDA}"))
            .with_bismillah(format!("{BEH}{SUKOON}{TEH}{FATHA}")),
        CorpusEntry::new(1, 1, format!("{TEH}{FATHA} {QAF}{SUKOON} {WAQF_MEEM} {TEH}")),
    ])
}

fn positions(output: &tajweed_engine::RunOutput) -> Vec<(u32, u32, SourceType, usize)> {
    output
        .instances
        .iter()
        .map(|i| (i.sura(), i.aya(), i.source_type(), i.char_index()))
        .collect()
}

#[test]
fn test_corpus_order_then_complex_order() {
    let engine = RuleEngine::default();
    let output = engine.run_corpus(&sample_corpus(), &QalqalahRule::new()).unwrap();

    assert_eq!(
        positions(&output),
        vec![
            (1, 1, SourceType::Text, 3),
            (1, 2, SourceType::Text, 0),
            (1, 2, SourceType::Bismillah, 0),
            (2, 1, SourceType::Text, 0),
            (2, 1, SourceType::Text, 3),
        ]
    );

    let kinds: Vec<&str> = output.instances.iter().map(|i| i.kind()).collect();
    assert_eq!(
        kinds,
        vec![
            "Kubra (Major)",
            "Akbar/Kubra (Greatest/Major)",
            "Sughra (Minor)",
            "Sughra (Minor)",
            "Kubra (Major)",
        ]
    );
    assert_eq!(
        output.instances[0].finding().condition_details,
        format!(
            "Followed by Waqf mark '{}'. Explicit Sukoon at Stop.",
            pause_mark_name(WAQF_MEEM).unwrap()
        )
    );
}

#[test]
fn test_bismillah_policy_changes_aya_only() {
    let engine = RuleEngine::builder()
        .bismillah_policy(BismillahPolicy::Zero)
        .build()
        .unwrap();
    let output = engine.run_corpus(&sample_corpus(), &QalqalahRule::new()).unwrap();

    let bismillah: Vec<_> = output
        .instances
        .iter()
        .filter(|i| i.source_type() == SourceType::Bismillah)
        .collect();
    assert_eq!(bismillah.len(), 1);
    assert_eq!((bismillah[0].sura(), bismillah[0].aya()), (1, 0));
}

#[test]
fn test_empty_mark_set_only_stops_at_end() {
    let engine = RuleEngine::builder()
        .pause_preset(PausePreset::None)
        .build()
        .unwrap();
    let output = engine.run_corpus(&sample_corpus(), &QalqalahRule::new()).unwrap();

    // The sukoon qaf before the Meem mark is now mid-speech
    assert_eq!(output.instances[0].kind(), "Sughra (Minor)");
}

#[cfg(feature = "parallel")]
#[test]
fn test_sequential_and_parallel_agree() {
    let entries: Vec<CorpusEntry> = (1..=200)
        .map(|aya| {
            CorpusEntry::new(
                aya % 7 + 1,
                aya,
                format!("{QAF}{SUKOON} {BEH}{SUKOON} {DAL}{SHADDA}"),
            )
        })
        .collect();
    let corpus = Corpus::from_entries(entries);

    let sequential = RuleEngine::default()
        .run_corpus(&corpus, &QalqalahRule::new())
        .unwrap();
    let parallel = RuleEngine::builder()
        .execution_mode(ExecutionMode::Parallel)
        .threads(Some(4))
        .build()
        .unwrap()
        .run_corpus(&corpus, &QalqalahRule::new())
        .unwrap();

    assert_eq!(parallel.stats.mode_used, ExecutionMode::Parallel);
    assert_eq!(sequential.instances, parallel.instances);
    assert_eq!(sequential.instances.len(), 600);
}

#[test]
fn test_adaptive_below_threshold_runs_sequentially() {
    let engine = RuleEngine::builder()
        .execution_mode(ExecutionMode::Adaptive)
        .parallel_threshold(1_000)
        .build()
        .unwrap();
    let output = engine.run_corpus(&sample_corpus(), &QalqalahRule::new()).unwrap();
    assert_eq!(output.stats.mode_used, ExecutionMode::Sequential);
}

#[test]
fn test_plugin_sees_whole_segment() {
    // Reports every complex whose successor is a qaf
    let before_qaf = |_: &LetterComplex,
                      _: &StopContext,
                      all: &[LetterComplex],
                      index: usize|
     -> Result<Option<RuleFinding>, RuleError> {
        Ok(all
            .get(index + 1)
            .filter(|next| next.letter() == QAF)
            .map(|_| RuleFinding::new("before-qaf", "")))
    };

    let engine = RuleEngine::default();
    let segment = Segment::text(1, 1, format!("{TEH}{FATHA} {QAF}{SUKOON}"));
    let instances = engine.analyze_segment(&segment, &before_qaf).unwrap();

    assert_eq!(instances.len(), 1);
    assert_eq!(instances[0].char_index(), 0);
    assert_eq!(instances[0].word_context(), format!("{TEH}{FATHA}"));
}

#[test]
fn test_empty_corpus_gives_empty_result() {
    let corpus = Corpus::load_lenient(&JsonCorpusFile::new("/nonexistent/quran.json"));
    assert!(corpus.is_empty());
    assert_eq!(corpus.diagnostics().len(), 1);

    let output = RuleEngine::default()
        .run_corpus(&corpus, &QalqalahRule::new())
        .unwrap();
    assert!(output.instances.is_empty());
    assert_eq!(output.stats.segments_total, 0);
}

#[test]
fn test_empty_segment_text_is_not_skipped() {
    let output = RuleEngine::default()
        .run(&[Segment::text(1, 1, "")], &QalqalahRule::new())
        .unwrap();
    assert!(output.instances.is_empty());
    assert!(output.skipped.is_empty());
    assert_eq!(output.stats.segments_analyzed, 1);
}

#[test]
fn test_json_file_round() {
    let json = format!(
        r#"{{"quran": {{"suras": [{{"index": 112, "ayas": [
            {{"index": 1, "text": "{QAF}{SUKOON}", "bismillah": "{BEH}{FATHA}"}}
        ]}}]}}}}"#
    );
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();

    let corpus = Corpus::load_lenient(&JsonCorpusFile::new(file.path()));
    let output = RuleEngine::default()
        .run_corpus(&corpus, &QalqalahRule::new())
        .unwrap();

    let exported = serde_json::to_value(&output.instances).unwrap();
    assert_eq!(exported.as_array().unwrap().len(), 2);
    assert_eq!(exported[0]["sura"], 112);
    assert_eq!(exported[0]["source_type"], "text");
    assert_eq!(exported[0]["type"], "Kubra (Major)");
    assert_eq!(exported[0]["qalqalah_letter"], QAF.to_string());
    assert_eq!(exported[0]["full_letter_complex"], format!("{QAF}{SUKOON}"));
    assert_eq!(exported[1]["source_type"], "bismillah");
}
