//! Corpus loading and normalization
//!
//! All schema sniffing lives here. The rest of the engine only sees an
//! ordered list of [`CorpusEntry`] values and the [`Segment`]s they expand to.
//!
//! Two JSON layouts are recognized:
//!
//! ```text
//! { "quran": { "suras": [ { "index": 1, "ayas": [ { "index": 1, "text": "...", "bismillah": "..." } ] } ] } }
//! [ { "sura_number": 1, "verses": [ { "verse_number": 1, "text": "..." } ] } ]
//! ```
//!
//! In the list layout, `index` may replace `sura_number`/`verse_number` and
//! `ayas` may replace `verses`. Indices may be JSON numbers or numeric strings.

use crate::error::CorpusError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Where a segment's text comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
    /// The aya text itself
    Text,
    /// A Bismillah stored alongside the aya
    Bismillah,
}

impl SourceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceType::Text => "text",
            SourceType::Bismillah => "bismillah",
        }
    }
}

impl fmt::Display for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which aya index a Bismillah segment carries
///
/// Corpora disagree on whether a sura's Bismillah belongs to its first aya or
/// stands before it, so the choice is made here and not in the engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BismillahPolicy {
    /// Same index as the aya it is stored with
    #[default]
    SameAya,
    /// Always aya 0
    Zero,
}

impl BismillahPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            BismillahPolicy::SameAya => "same-aya",
            BismillahPolicy::Zero => "zero",
        }
    }

    fn aya_index(&self, aya: u32) -> u32 {
        match self {
            BismillahPolicy::SameAya => aya,
            BismillahPolicy::Zero => 0,
        }
    }
}

impl FromStr for BismillahPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "same-aya" | "same_aya" => Ok(BismillahPolicy::SameAya),
            "zero" | "0" => Ok(BismillahPolicy::Zero),
            other => Err(format!("unknown bismillah policy: {other}")),
        }
    }
}

/// One aya as delivered by a corpus
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusEntry {
    pub sura_index: u32,
    pub aya_index: u32,
    pub main_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bismillah_text: Option<String>,
}

impl CorpusEntry {
    pub fn new(sura_index: u32, aya_index: u32, main_text: impl Into<String>) -> Self {
        Self {
            sura_index,
            aya_index,
            main_text: main_text.into(),
            bismillah_text: None,
        }
    }

    pub fn with_bismillah(mut self, text: impl Into<String>) -> Self {
        self.bismillah_text = Some(text.into());
        self
    }

    /// Main text segment, then the Bismillah segment if present
    ///
    /// Empty texts produce no segment.
    pub fn segments(&self, policy: BismillahPolicy) -> Vec<Segment> {
        let mut segments = Vec::with_capacity(2);
        if !self.main_text.is_empty() {
            segments.push(Segment {
                sura: self.sura_index,
                aya: self.aya_index,
                source_type: SourceType::Text,
                text: self.main_text.clone(),
            });
        }
        if let Some(bismillah) = self.bismillah_text.as_deref().filter(|t| !t.is_empty()) {
            segments.push(Segment {
                sura: self.sura_index,
                aya: policy.aya_index(self.aya_index),
                source_type: SourceType::Bismillah,
                text: bismillah.to_string(),
            });
        }
        segments
    }
}

/// Unit of analysis: one text with its provenance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub sura: u32,
    pub aya: u32,
    pub source_type: SourceType,
    pub text: String,
}

impl Segment {
    pub fn text(sura: u32, aya: u32, text: impl Into<String>) -> Self {
        Self {
            sura,
            aya,
            source_type: SourceType::Text,
            text: text.into(),
        }
    }

    pub fn bismillah(sura: u32, aya: u32, text: impl Into<String>) -> Self {
        Self {
            sura,
            aya,
            source_type: SourceType::Bismillah,
            text: text.into(),
        }
    }
}

/// Collaborator interface for anything that can produce corpus entries
pub trait CorpusSource {
    /// Load entries in corpus order
    fn load(&self) -> Result<Corpus, CorpusError>;

    /// Short description for diagnostics
    fn describe(&self) -> String;
}

/// A JSON corpus file
#[derive(Debug, Clone)]
pub struct JsonCorpusFile {
    path: PathBuf,
}

impl JsonCorpusFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CorpusSource for JsonCorpusFile {
    fn load(&self) -> Result<Corpus, CorpusError> {
        Corpus::from_path(&self.path)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

impl CorpusSource for Vec<CorpusEntry> {
    fn load(&self) -> Result<Corpus, CorpusError> {
        Ok(Corpus::from_entries(self.clone()))
    }

    fn describe(&self) -> String {
        format!("in-memory corpus ({} entries)", self.len())
    }
}

/// Normalized corpus: entries in (sura, aya) order plus loader diagnostics
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    entries: Vec<CorpusEntry>,
    diagnostics: Vec<String>,
}

impl Corpus {
    /// Build from entries; a stable sort keeps (sura, aya) ascending
    pub fn from_entries(mut entries: Vec<CorpusEntry>) -> Self {
        entries.sort_by_key(|entry| (entry.sura_index, entry.aya_index));
        Self {
            entries,
            diagnostics: Vec::new(),
        }
    }

    /// Parse a JSON document (strict about the top-level layout)
    pub fn from_json_str(json: &str) -> Result<Self, CorpusError> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_json_value(&value)
    }

    /// Read and parse a JSON file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CorpusError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| CorpusError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Load from any source, turning failures into an empty corpus with a
    /// diagnostic
    pub fn load_lenient(source: &dyn CorpusSource) -> Self {
        match source.load() {
            Ok(corpus) => {
                for diagnostic in &corpus.diagnostics {
                    log::warn!("{}: {}", source.describe(), diagnostic);
                }
                corpus
            }
            Err(e) => {
                let diagnostic = format!("{}: {}", source.describe(), e);
                log::warn!("{diagnostic}");
                Self {
                    entries: Vec::new(),
                    diagnostics: vec![diagnostic],
                }
            }
        }
    }

    pub fn entries(&self) -> &[CorpusEntry] {
        &self.entries
    }

    pub fn diagnostics(&self) -> &[String] {
        &self.diagnostics
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append another corpus, keeping (sura, aya) order
    pub fn merge(&mut self, other: Corpus) {
        self.entries.extend(other.entries);
        self.entries
            .sort_by_key(|entry| (entry.sura_index, entry.aya_index));
        self.diagnostics.extend(other.diagnostics);
    }

    /// Expand every entry into its segments, in corpus order
    pub fn segments(&self, policy: BismillahPolicy) -> Vec<Segment> {
        self.entries
            .iter()
            .flat_map(|entry| entry.segments(policy))
            .collect()
    }

    fn from_json_value(value: &Value) -> Result<Self, CorpusError> {
        let mut builder = CorpusBuilder::default();

        if let Some(suras) = value
            .get("quran")
            .and_then(|quran| quran.get("suras"))
            .and_then(Value::as_array)
        {
            log::debug!("detected nested quran/suras layout with {} suras", suras.len());
            for sura in suras {
                builder.read_sura(sura, &SuraKeys::NESTED);
            }
        } else if let Some(suras) = value.as_array() {
            let first = suras.first().and_then(Value::as_object).ok_or_else(|| {
                CorpusError::UnrecognizedSchema("empty or non-object sura list".to_string())
            })?;
            if !first.contains_key("sura_number") && !first.contains_key("index") {
                return Err(CorpusError::UnrecognizedSchema(
                    "sura objects carry neither 'sura_number' nor 'index'".to_string(),
                ));
            }
            log::debug!("detected sura list layout with {} suras", suras.len());
            for sura in suras {
                builder.read_sura(sura, &SuraKeys::LIST);
            }
        } else {
            return Err(CorpusError::UnrecognizedSchema(
                "expected {\"quran\": {\"suras\": [...]}} or a list of sura objects".to_string(),
            ));
        }

        Ok(builder.finish())
    }
}

/// Key names to try, in order, for each field
struct SuraKeys {
    sura_index: &'static [&'static str],
    ayas: &'static [&'static str],
    aya_index: &'static [&'static str],
}

impl SuraKeys {
    const NESTED: SuraKeys = SuraKeys {
        sura_index: &["index"],
        ayas: &["ayas"],
        aya_index: &["index"],
    };

    const LIST: SuraKeys = SuraKeys {
        sura_index: &["sura_number", "index"],
        ayas: &["verses", "ayas"],
        aya_index: &["verse_number", "index"],
    };
}

#[derive(Default)]
struct CorpusBuilder {
    entries: Vec<CorpusEntry>,
    diagnostics: Vec<String>,
}

impl CorpusBuilder {
    fn read_sura(&mut self, sura: &Value, keys: &SuraKeys) {
        let Some(sura_obj) = sura.as_object() else {
            self.diagnostics.push("skipped non-object sura entry".to_string());
            return;
        };

        let Some(sura_index) = lookup_index(sura_obj, keys.sura_index) else {
            self.diagnostics
                .push(format!("skipped sura without a valid index: {}", preview(sura)));
            return;
        };

        let Some(ayas) = keys
            .ayas
            .iter()
            .find_map(|key| sura_obj.get(*key).and_then(Value::as_array))
        else {
            self.diagnostics
                .push(format!("sura {sura_index} has no aya list"));
            return;
        };

        for aya in ayas {
            let Some(aya_obj) = aya.as_object() else {
                self.diagnostics
                    .push(format!("sura {sura_index}: skipped non-object aya entry"));
                continue;
            };
            let Some(aya_index) = lookup_index(aya_obj, keys.aya_index) else {
                self.diagnostics
                    .push(format!("sura {sura_index}: skipped aya without a valid index"));
                continue;
            };

            let main_text = aya_obj
                .get("text")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string();
            let bismillah_text = aya_obj
                .get("bismillah")
                .and_then(Value::as_str)
                .filter(|text| !text.is_empty())
                .map(str::to_string);

            self.entries.push(CorpusEntry {
                sura_index,
                aya_index,
                main_text,
                bismillah_text,
            });
        }
    }

    fn finish(self) -> Corpus {
        let mut corpus = Corpus::from_entries(self.entries);
        corpus.diagnostics = self.diagnostics;
        corpus
    }
}

fn lookup_index(obj: &Map<String, Value>, keys: &[&str]) -> Option<u32> {
    keys.iter().find_map(|key| obj.get(*key)).and_then(|value| match value {
        Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

/// Truncated JSON of a value, for diagnostics
fn preview(value: &Value) -> String {
    let mut text = value.to_string();
    if text.chars().count() > 80 {
        text = text.chars().take(77).collect::<String>() + "...";
    }
    text
}
