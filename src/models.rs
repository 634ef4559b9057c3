//! Core data models for stylometer
//!
//! These models are used throughout the codebase for representing
//! feature vectors, style profiles, and analysis reports. Downstream
//! export and ML consumers depend on the exact serialized field names
//! and label strings here, so they are part of the public contract.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A sparse mapping from feature name to value.
///
/// Keys are partly fixed (`vocabulary_richness`, `gunning_fog`, ...) and
/// partly dynamic (`freq_<char>`, `pos_<tag>`, `dep_<label>`). Missing keys
/// read as `0.0`, which is how the aggregator treats sparse maps. Backed by
/// a BTreeMap so serialized output has a stable key order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureMap {
    values: BTreeMap<String, f64>,
}

impl FeatureMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a map from literal pairs (mostly useful in tests and fallbacks)
    pub fn from_pairs(pairs: &[(&str, f64)]) -> Self {
        let mut map = Self::new();
        for (key, value) in pairs {
            map.insert(*key, *value);
        }
        map
    }

    pub fn insert(&mut self, key: impl Into<String>, value: f64) {
        self.values.insert(key.into(), value);
    }

    /// Look up a feature, treating missing keys as `0.0`
    pub fn get(&self, key: &str) -> f64 {
        self.values.get(key).copied().unwrap_or(0.0)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate entries in sorted key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.values.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl FromIterator<(String, f64)> for FeatureMap {
    fn from_iter<T: IntoIterator<Item = (String, f64)>>(iter: T) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

/// Coarse level for a composite score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Level {
    Low,
    Medium,
    High,
    /// Only produced by the error profile
    Unknown,
}

impl Level {
    /// Bucket a score: `< 0.3` Low, `< 0.7` Medium, else High.
    ///
    /// Comparisons are strict `<`, so 0.3 is Medium and 0.7 is High.
    /// Scores are not clamped; anything at or above 0.7 (including
    /// out-of-range values) reads as High.
    pub fn from_score(score: f64) -> Self {
        if score < 0.3 {
            Level::Low
        } else if score < 0.7 {
            Level::Medium
        } else {
            Level::High
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Level::Low => write!(f, "Low"),
            Level::Medium => write!(f, "Medium"),
            Level::High => write!(f, "High"),
            Level::Unknown => write!(f, "Unknown"),
        }
    }
}

/// Writing style classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StyleClass {
    Academic,
    #[serde(rename = "Simple and Structured")]
    SimpleAndStructured,
    #[serde(rename = "Complex and Variable")]
    ComplexAndVariable,
    Balanced,
    Unknown,
}

impl std::fmt::Display for StyleClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StyleClass::Academic => write!(f, "Academic"),
            StyleClass::SimpleAndStructured => write!(f, "Simple and Structured"),
            StyleClass::ComplexAndVariable => write!(f, "Complex and Variable"),
            StyleClass::Balanced => write!(f, "Balanced"),
            StyleClass::Unknown => write!(f, "Unknown"),
        }
    }
}

/// Vocabulary usage pattern label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VocabularyUsage {
    Advanced,
    Moderate,
    Basic,
    Unknown,
}

impl std::fmt::Display for VocabularyUsage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VocabularyUsage::Advanced => write!(f, "Advanced"),
            VocabularyUsage::Moderate => write!(f, "Moderate"),
            VocabularyUsage::Basic => write!(f, "Basic"),
            VocabularyUsage::Unknown => write!(f, "Unknown"),
        }
    }
}

/// Sentence structure pattern label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SentenceStructure {
    Complex,
    Varied,
    Simple,
    Unknown,
}

impl std::fmt::Display for SentenceStructure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SentenceStructure::Complex => write!(f, "Complex"),
            SentenceStructure::Varied => write!(f, "Varied"),
            SentenceStructure::Simple => write!(f, "Simple"),
            SentenceStructure::Unknown => write!(f, "Unknown"),
        }
    }
}

/// Text organization pattern label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextOrganization {
    #[serde(rename = "Well Structured")]
    WellStructured,
    #[serde(rename = "Moderately Structured")]
    ModeratelyStructured,
    #[serde(rename = "Loosely Structured")]
    LooselyStructured,
    Unknown,
}

impl std::fmt::Display for TextOrganization {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TextOrganization::WellStructured => write!(f, "Well Structured"),
            TextOrganization::ModeratelyStructured => write!(f, "Moderately Structured"),
            TextOrganization::LooselyStructured => write!(f, "Loosely Structured"),
            TextOrganization::Unknown => write!(f, "Unknown"),
        }
    }
}

/// Per-source contributions to the complexity score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ComplexityComponents {
    pub vocabulary_contribution: f64,
    pub syntax_contribution: f64,
    pub readability_contribution: f64,
}

/// Complexity score with level and contribution breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplexityMetric {
    pub score: f64,
    pub level: Level,
    pub components: ComplexityComponents,
}

/// Consistency score with level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsistencyMetric {
    pub score: f64,
    pub level: Level,
}

/// Top-level style metrics of a profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleMetrics {
    pub complexity: ComplexityMetric,
    pub consistency: ConsistencyMetric,
    pub classification: StyleClass,
}

/// Categorical writing-pattern labels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WritingPatterns {
    pub vocabulary_usage: VocabularyUsage,
    pub sentence_structure: SentenceStructure,
    pub text_organization: TextOrganization,
}

/// A normalized score with a human-readable interpretation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryMetric {
    pub score: f64,
    pub interpretation: String,
}

/// Summary scores for readability, vocabulary, and structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryMetrics {
    pub readability: SummaryMetric,
    pub vocabulary: SummaryMetric,
    pub structure: SummaryMetric,
}

/// Composite classification of writing style, produced by the aggregator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleProfile {
    pub style_metrics: StyleMetrics,
    pub writing_patterns: WritingPatterns,
    pub summary_metrics: SummaryMetrics,
    /// Never empty; falls back to a single affirming message
    pub recommendations: Vec<String>,
}

impl StyleProfile {
    /// The fixed profile returned when aggregation fails internally
    pub fn unknown() -> Self {
        let zero_summary = || SummaryMetric {
            score: 0.0,
            interpretation: "Unknown".to_string(),
        };
        Self {
            style_metrics: StyleMetrics {
                complexity: ComplexityMetric {
                    score: 0.0,
                    level: Level::Unknown,
                    components: ComplexityComponents::default(),
                },
                consistency: ConsistencyMetric {
                    score: 0.0,
                    level: Level::Unknown,
                },
                classification: StyleClass::Unknown,
            },
            writing_patterns: WritingPatterns {
                vocabulary_usage: VocabularyUsage::Unknown,
                sentence_structure: SentenceStructure::Unknown,
                text_organization: TextOrganization::Unknown,
            },
            summary_metrics: SummaryMetrics {
                readability: zero_summary(),
                vocabulary: zero_summary(),
                structure: zero_summary(),
            },
            recommendations: vec!["An error occurred during analysis".to_string()],
        }
    }
}

/// The four raw feature maps behind a profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct FeatureSet {
    pub lexical: FeatureMap,
    pub syntactic: FeatureMap,
    pub structural: FeatureMap,
    pub readability: FeatureMap,
}

/// Profile plus the feature maps it was derived from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleReport {
    pub analysis: StyleProfile,
    pub features: FeatureSet,
}

/// Document metadata attached by the CLI layer (the core stays I/O-free)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentInfo {
    pub filename: String,
    pub file_size: u64,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Complete analysis output for one document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub metadata: DocumentInfo,
    pub analysis: StyleProfile,
    pub features: FeatureSet,
}

impl AnalysisReport {
    pub fn new(metadata: DocumentInfo, report: StyleReport) -> Self {
        Self {
            metadata,
            analysis: report.analysis,
            features: report.features,
        }
    }
}
