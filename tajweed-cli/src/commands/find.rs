//! Find command implementation

use crate::config::{parse_marks, CliConfig};
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::output::{write_instances, OutputFormat, RunSummary};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Args;
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use tajweed_core::{rule_by_name, PauseMarkSet, PausePreset};
use tajweed_engine::{
    BismillahPolicy, Corpus, ExecutionMode, JsonCorpusFile, RuleEngine, RunOutput,
};

/// Arguments for the find command
#[derive(Debug, Args)]
pub struct FindArgs {
    /// Corpus JSON files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Rule to apply [default: qalqalah]
    #[arg(short, long, value_name = "RULE")]
    pub rule: Option<String>,

    /// Waqf marks treated as stops: default, mandatory, none or all
    #[arg(short = 'p', long, value_name = "PRESET")]
    pub pauses: Option<PausePreset>,

    /// Explicit stop marks (characters or U+XXXX, comma separated)
    #[arg(long, value_name = "MARKS", conflicts_with = "pauses")]
    pub marks: Option<String>,

    /// Aya index of Bismillah segments: same-aya or zero
    #[arg(short, long, value_name = "POLICY")]
    pub bismillah: Option<BismillahPolicy>,

    /// Output format [default: text]
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Write the full instance list to FILE (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Instances shown from each end of the list in the text report
    #[arg(short = 'n', long, value_name = "N")]
    pub sample: Option<usize>,

    /// Force parallel analysis even for small corpora
    #[arg(long)]
    pub parallel: bool,

    /// Worker threads for parallel analysis
    #[arg(short, long, value_name = "N")]
    pub threads: Option<usize>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Command-line flags merged over the configuration file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindSettings {
    pub rule: String,
    pub pause_marks: PauseMarkSet,
    pub bismillah: BismillahPolicy,
    pub format: OutputFormat,
    pub sample: usize,
    pub pretty_json: bool,
    pub mode: ExecutionMode,
    pub parallel_threshold: usize,
    pub threads: Option<usize>,
}

impl FindArgs {
    /// Execute the find command
    pub fn execute(&self) -> Result<()> {
        self.init_logging()?;

        log::info!("Starting analysis");
        log::debug!("Arguments: {:?}", self);

        let config = match &self.config {
            Some(path) => CliConfig::from_file(path)?,
            None => CliConfig::default(),
        };
        config.validate()?;
        let settings = self.resolve(&config)?;

        let files = resolve_patterns(&self.input)?;
        let rule = rule_by_name(&settings.rule).map_err(|e| CliError::ConfigError(e.to_string()))?;
        let engine = RuleEngine::builder()
            .pause_marks(settings.pause_marks.clone())
            .bismillah_policy(settings.bismillah)
            .execution_mode(settings.mode)
            .parallel_threshold(settings.parallel_threshold)
            .threads(settings.threads)
            .build()
            .map_err(|e| CliError::ConfigError(e.to_string()))?;
        log::debug!(
            "{} mode, up to {} threads",
            settings.mode,
            settings.threads.unwrap_or_else(num_cpus::get)
        );

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(files.len() as u64);

        let mut corpus = Corpus::default();
        for path in &files {
            if let Ok(size) = FileReader::file_size(path) {
                log::debug!("loading {} ({} bytes)", path.display(), size);
            }
            let loaded = Corpus::load_lenient(&JsonCorpusFile::new(path));
            progress.file_completed(&path.display().to_string(), loaded.len());
            corpus.merge(loaded);
        }

        progress.analyzing(rule.name());
        let output = engine
            .run_corpus(&corpus, &*rule)
            .map_err(|e| CliError::ProcessingError(e.to_string()))?;
        progress.finish();

        let summary = RunSummary::new(rule.name(), files.len(), corpus.diagnostics().len(), &output);
        self.emit(&settings, &output, &summary)
    }

    /// Merge flags over `config`
    pub fn resolve(&self, config: &CliConfig) -> Result<FindSettings> {
        let pause_marks = match (&self.marks, self.pauses, &config.analysis.custom_marks) {
            (Some(marks), _, _) => PauseMarkSet::new(parse_marks(marks)?),
            (None, Some(preset), _) => PauseMarkSet::preset(preset),
            (None, None, Some(marks)) => PauseMarkSet::new(parse_marks(marks)?),
            (None, None, None) => PauseMarkSet::preset(config.analysis.pause_preset),
        };

        let mode = if self.parallel {
            ExecutionMode::Parallel
        } else {
            ExecutionMode::Adaptive
        };

        Ok(FindSettings {
            rule: self
                .rule
                .clone()
                .unwrap_or_else(|| config.analysis.rule.clone()),
            pause_marks,
            bismillah: self.bismillah.unwrap_or(config.analysis.bismillah_policy),
            format: self.format.unwrap_or(config.output.default_format),
            sample: self.sample.unwrap_or(config.output.sample_size),
            pretty_json: config.output.pretty_json,
            mode,
            parallel_threshold: config.performance.parallel_threshold,
            threads: self.threads.or_else(|| config.worker_threads()),
        })
    }

    /// Write results: the full list to `-o` (plus a text report on stdout),
    /// or the chosen format on stdout
    fn emit(&self, settings: &FindSettings, output: &RunOutput, summary: &RunSummary) -> Result<()> {
        match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                let mut formatter = settings
                    .format
                    .formatter(BufWriter::new(file), settings.pretty_json);
                write_instances(formatter.as_mut(), &output.instances, None, summary)?;

                if !self.quiet {
                    let mut report = OutputFormat::Text.formatter(io::stdout(), false);
                    write_instances(
                        report.as_mut(),
                        &output.instances,
                        Some(settings.sample),
                        summary,
                    )?;
                    println!();
                    println!(
                        "Saved {} instances to {}",
                        output.instances.len(),
                        path.display()
                    );
                }
            }
            None => {
                // Only the text report is sampled
                let sample = (settings.format == OutputFormat::Text).then_some(settings.sample);
                let mut formatter = settings.format.formatter(io::stdout(), settings.pretty_json);
                write_instances(formatter.as_mut(), &output.instances, sample, summary)?;
            }
        }
        Ok(())
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) -> Result<()> {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
                .try_init()
                .context("Failed to initialize logging")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn args(input: &str) -> FindArgs {
        FindArgs {
            input: vec![input.to_string()],
            rule: None,
            pauses: None,
            marks: None,
            bismillah: None,
            format: None,
            output: None,
            sample: None,
            parallel: false,
            threads: None,
            config: None,
            quiet: true,
            verbose: 0,
        }
    }

    #[test]
    fn test_resolve_defaults() {
        let settings = args("quran.json").resolve(&CliConfig::default()).unwrap();
        assert_eq!(settings.rule, "qalqalah");
        assert_eq!(settings.pause_marks, PauseMarkSet::preset(PausePreset::Default));
        assert_eq!(settings.format, OutputFormat::Text);
        assert_eq!(settings.sample, 10);
        assert_eq!(settings.mode, ExecutionMode::Adaptive);
        assert_eq!(settings.threads, None);
    }

    #[test]
    fn test_flags_override_config() {
        let mut config = CliConfig::default();
        config.analysis.pause_preset = PausePreset::Mandatory;
        config.output.sample_size = 3;
        config.performance.worker_threads = 2;

        let mut find = args("quran.json");
        find.pauses = Some(PausePreset::None);
        find.sample = Some(5);
        find.parallel = true;

        let settings = find.resolve(&config).unwrap();
        assert!(settings.pause_marks.is_empty());
        assert_eq!(settings.sample, 5);
        assert_eq!(settings.mode, ExecutionMode::Parallel);
        assert_eq!(settings.threads, Some(2));
    }

    #[test]
    fn test_custom_marks_from_config() {
        let mut config = CliConfig::default();
        config.analysis.custom_marks = Some("U+06D8".to_string());

        let settings = args("quran.json").resolve(&config).unwrap();
        assert_eq!(settings.pause_marks.sorted(), vec!['\u{06D8}']);
    }

    #[test]
    fn test_execute_writes_json_file() {
        let temp_dir = TempDir::new().unwrap();
        let corpus_path = temp_dir.path().join("quran.json");
        let output_path = temp_dir.path().join("found.json");
        // "ahadun" closing sura 112
        let text = "\u{0623}\u{064E}\u{062D}\u{064E}\u{062F}\u{064C}\u{06E2}";
        fs::write(
            &corpus_path,
            format!(r#"[{{"sura_number": 112, "verses": [{{"verse_number": 4, "text": "{text}"}}]}}]"#),
        )
        .unwrap();

        let mut find = args(&corpus_path.display().to_string());
        find.format = Some(OutputFormat::Json);
        find.output = Some(output_path.clone());
        find.execute().unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&output_path).unwrap()).unwrap();
        let array = value.as_array().unwrap();
        assert_eq!(array.len(), 1);
        assert_eq!(array[0]["sura"], 112);
        assert_eq!(array[0]["aya"], 4);
        assert_eq!(array[0]["type"], "Kubra (Major)");
        assert_eq!(array[0]["qalqalah_letter"], "\u{062F}");
    }
}
