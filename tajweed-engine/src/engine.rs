//! Rule engine and builder
//!
//! The engine walks segments in corpus order. For every letter complex it
//! classifies the position right after the complex, hands both to the rule
//! plugin together with the whole complex list, and wraps each finding with
//! its provenance.

use crate::{
    assembler::{concat_in_order, ResultAssembler, RuleInstance},
    config::EngineConfig,
    corpus::{BismillahPolicy, Corpus, Segment, SourceType},
    error::{EngineError, Result},
    executor::{auto_select, ExecutionMode, Executor, SequentialExecutor},
};
use serde::Serialize;
use std::time::{Duration, Instant};
use tajweed_core::{classify, PauseMarkSet, PausePreset, RulePlugin, Tokenizer};

#[cfg(feature = "parallel")]
use crate::executor::ParallelExecutor;

/// What happened to one segment
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SegmentOutcome {
    /// The segment was tokenized and checked
    Analyzed {
        /// Findings, in complex order
        instances: Vec<RuleInstance>,
        /// Number of letter complexes inspected
        complexes: usize,
    },
    /// The segment could not be analysed and was left out
    Skipped(SkippedSegment),
}

/// A segment left out of a run, with the reason
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedSegment {
    /// Sura of the segment
    pub sura: u32,
    /// Aya of the segment
    pub aya: u32,
    /// `text` or `bismillah`
    pub source_type: SourceType,
    /// Why it was skipped
    pub reason: String,
}

/// Counters for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunStats {
    /// Segments handed to the engine
    pub segments_total: usize,
    /// Segments actually analysed
    pub segments_analyzed: usize,
    /// Letter complexes inspected across all segments
    pub complexes: usize,
    /// Mode the run resolved to
    pub mode_used: ExecutionMode,
    /// Wall-clock time of the run
    pub elapsed: Duration,
}

/// Everything a run produces
#[derive(Debug, Clone)]
pub struct RunOutput {
    /// Rule instances in corpus order, then complex order
    pub instances: Vec<RuleInstance>,
    /// Segments that were isolated instead of analysed
    pub skipped: Vec<SkippedSegment>,
    /// Run counters
    pub stats: RunStats,
}

impl RunOutput {
    /// Number of instances per `type`, sorted by type label
    pub fn counts_by_type(&self) -> Vec<(String, usize)> {
        let mut counts = std::collections::BTreeMap::<&str, usize>::new();
        for instance in &self.instances {
            *counts.entry(instance.kind()).or_default() += 1;
        }
        counts
            .into_iter()
            .map(|(kind, count)| (kind.to_string(), count))
            .collect()
    }
}

/// Drives tokenization, stop classification and a rule plugin over segments
#[derive(Debug, Clone)]
pub struct RuleEngine {
    config: EngineConfig,
    pause_marks: PauseMarkSet,
    tokenizer: Tokenizer,
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self {
            config: EngineConfig::default(),
            pause_marks: PauseMarkSet::preset(PausePreset::Default),
            tokenizer: Tokenizer::new(),
        }
    }
}

impl RuleEngine {
    /// Create an engine with the given pause marks and configuration
    pub fn new(pause_marks: PauseMarkSet, config: EngineConfig) -> Result<Self> {
        config.validate().map_err(EngineError::Config)?;
        Ok(Self {
            config,
            pause_marks,
            tokenizer: Tokenizer::new(),
        })
    }

    /// Start a builder with default settings
    pub fn builder() -> RuleEngineBuilder {
        RuleEngineBuilder::new()
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Pause marks that count as stops
    pub fn pause_marks(&self) -> &PauseMarkSet {
        &self.pause_marks
    }

    /// Run `plugin` over `segments`
    ///
    /// Results follow segment order, then complex order, whatever the
    /// execution mode. A plugin error aborts the run.
    pub fn run<P>(&self, segments: &[Segment], plugin: &P) -> Result<RunOutput>
    where
        P: RulePlugin + ?Sized,
    {
        let start = Instant::now();
        let mode = auto_select(
            self.config.execution_mode,
            segments.len(),
            self.config.parallel_threshold,
        );
        log::debug!(
            "running rule '{}' over {} segments ({} mode)",
            plugin.name(),
            segments.len(),
            mode
        );

        let executor = self.executor_for(mode);
        let analyze = |segment: &Segment| self.analyze_one(segment, plugin);
        let outcomes = executor.execute(segments, &analyze)?;

        let mut per_segment = Vec::with_capacity(outcomes.len());
        let mut skipped = Vec::new();
        let mut complexes = 0;
        for outcome in outcomes {
            match outcome {
                SegmentOutcome::Analyzed {
                    instances,
                    complexes: count,
                } => {
                    complexes += count;
                    per_segment.push(instances);
                }
                SegmentOutcome::Skipped(skip) => skipped.push(skip),
            }
        }

        let stats = RunStats {
            segments_total: segments.len(),
            segments_analyzed: per_segment.len(),
            complexes,
            mode_used: executor.mode(),
            elapsed: start.elapsed(),
        };
        let instances = concat_in_order(per_segment);

        log::info!(
            "rule '{}': {} instances in {} segments ({} skipped, {:.1} ms)",
            plugin.name(),
            instances.len(),
            stats.segments_analyzed,
            skipped.len(),
            stats.elapsed.as_secs_f64() * 1000.0
        );

        Ok(RunOutput {
            instances,
            skipped,
            stats,
        })
    }

    /// Expand `corpus` with the configured Bismillah policy and run over it
    pub fn run_corpus<P>(&self, corpus: &Corpus, plugin: &P) -> Result<RunOutput>
    where
        P: RulePlugin + ?Sized,
    {
        let segments = corpus.segments(self.config.bismillah_policy);
        self.run(&segments, plugin)
    }

    /// Analyse a single segment
    ///
    /// A malformed segment yields no instances; the reason is logged.
    pub fn analyze_segment<P>(&self, segment: &Segment, plugin: &P) -> Result<Vec<RuleInstance>>
    where
        P: RulePlugin + ?Sized,
    {
        match self.analyze_one(segment, plugin)? {
            SegmentOutcome::Analyzed { instances, .. } => Ok(instances),
            SegmentOutcome::Skipped(_) => Ok(Vec::new()),
        }
    }

    fn executor_for(&self, mode: ExecutionMode) -> Box<dyn Executor> {
        match mode {
            #[cfg(feature = "parallel")]
            ExecutionMode::Parallel => Box::new(ParallelExecutor::new(self.config.threads)),
            _ => Box::new(SequentialExecutor),
        }
    }

    fn analyze_one<P>(&self, segment: &Segment, plugin: &P) -> Result<SegmentOutcome>
    where
        P: RulePlugin + ?Sized,
    {
        // Trailing whitespace would hide the end of the segment from the last complex
        let chars: Vec<char> = segment.text.trim_end().chars().collect();

        if let Some(reason) = malformed_reason(&chars) {
            log::warn!(
                "skipping sura {}, aya {} ({}): {}",
                segment.sura,
                segment.aya,
                segment.source_type,
                reason
            );
            return Ok(SegmentOutcome::Skipped(SkippedSegment {
                sura: segment.sura,
                aya: segment.aya,
                source_type: segment.source_type,
                reason,
            }));
        }

        let complexes = self.tokenizer.tokenize_chars(&chars);
        let assembler = ResultAssembler::new(segment, &chars);
        let mut instances = Vec::new();

        for (index, complex) in complexes.iter().enumerate() {
            let stop = classify(&chars, complex.end(), &self.pause_marks);
            let finding = plugin
                .check(complex, &stop, &complexes, index)
                .map_err(|source| EngineError::Rule {
                    rule: plugin.name().to_string(),
                    sura: segment.sura,
                    aya: segment.aya,
                    source_type: segment.source_type.to_string(),
                    source,
                })?;

            if let Some(finding) = finding {
                log::trace!(
                    "{}:{} [{}] {} at {}",
                    segment.sura,
                    segment.aya,
                    segment.source_type,
                    finding.kind,
                    complex.start()
                );
                instances.push(assembler.instance(complex.start(), finding));
            }
        }

        Ok(SegmentOutcome::Analyzed {
            instances,
            complexes: complexes.len(),
        })
    }
}

/// Why a segment text cannot be analysed, if it cannot
fn malformed_reason(chars: &[char]) -> Option<String> {
    chars.iter().enumerate().find_map(|(offset, &ch)| {
        if ch == char::REPLACEMENT_CHARACTER {
            Some(format!("replacement character at offset {offset}"))
        } else if ch.is_control() && !ch.is_whitespace() {
            Some(format!(
                "control character U+{:04X} at offset {offset}",
                ch as u32
            ))
        } else {
            None
        }
    })
}

/// Builder for [`RuleEngine`]
#[derive(Debug, Clone)]
pub struct RuleEngineBuilder {
    config: EngineConfig,
    pause_marks: PauseMarkSet,
}

impl Default for RuleEngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleEngineBuilder {
    /// Create a builder with the default pause marks
    pub fn new() -> Self {
        Self {
            config: EngineConfig::default(),
            pause_marks: PauseMarkSet::preset(PausePreset::Default),
        }
    }

    /// Use one of the named pause-mark presets
    pub fn pause_preset(mut self, preset: PausePreset) -> Self {
        self.pause_marks = PauseMarkSet::preset(preset);
        self
    }

    /// Use an explicit pause-mark set
    pub fn pause_marks(mut self, marks: PauseMarkSet) -> Self {
        self.pause_marks = marks;
        self
    }

    /// Set the execution mode
    pub fn execution_mode(mut self, mode: ExecutionMode) -> Self {
        self.config.execution_mode = mode;
        self
    }

    /// Set the thread count
    pub fn threads(mut self, count: Option<usize>) -> Self {
        self.config.threads = count;
        self
    }

    /// Set the segment count at which `Adaptive` goes parallel
    pub fn parallel_threshold(mut self, segments: usize) -> Self {
        self.config.parallel_threshold = segments;
        self
    }

    /// Set the aya index policy for Bismillah segments
    pub fn bismillah_policy(mut self, policy: BismillahPolicy) -> Self {
        self.config.bismillah_policy = policy;
        self
    }

    /// Build the engine
    pub fn build(self) -> Result<RuleEngine> {
        RuleEngine::new(self.pause_marks, self.config)
    }
}
