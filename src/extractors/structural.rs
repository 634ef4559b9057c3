//! Paragraph, whitespace, and sentence-length statistics
//!
//! Paragraphs split on blank-line boundaries of the trimmed text;
//! sentences split on any run of `.!?`. These metrics only mean anything
//! on the analysis view, where paragraph breaks and punctuation survive
//! cleaning.

use super::{stats, Extractor, ViewKind};
use crate::errors::ExtractionError;
use crate::models::FeatureMap;
use regex::Regex;

pub struct StructuralExtractor {
    paragraph_pattern: Regex,
    sentence_pattern: Regex,
}

impl StructuralExtractor {
    pub fn new() -> Self {
        Self {
            paragraph_pattern: Regex::new(r"\n\s*\n").expect("static regex"),
            sentence_pattern: Regex::new(r"[.!?]+").expect("static regex"),
        }
    }

    fn zero_map() -> FeatureMap {
        FeatureMap::from_pairs(&[
            ("avg_paragraph_length", 0.0),
            ("paragraph_length_variance", 0.0),
            ("paragraph_count", 0.0),
            ("text_density", 0.0),
            ("whitespace_ratio", 0.0),
            ("line_break_frequency", 0.0),
            ("sentence_length_variance", 0.0),
            ("avg_sentences_per_paragraph", 0.0),
            ("structure_consistency", 0.0),
        ])
    }
}

impl Default for StructuralExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl Extractor for StructuralExtractor {
    fn name(&self) -> &'static str {
        "structural"
    }

    fn description(&self) -> &'static str {
        "Paragraph, whitespace, and sentence-length statistics"
    }

    fn view(&self) -> ViewKind {
        ViewKind::Analysis
    }

    fn extract(&self, text: &str) -> Result<FeatureMap, ExtractionError> {
        if text.is_empty() {
            return Ok(Self::zero_map());
        }

        let paragraphs: Vec<&str> = self.paragraph_pattern.split(text.trim()).collect();
        let paragraph_lengths: Vec<f64> =
            paragraphs.iter().map(|p| p.chars().count() as f64).collect();

        // Segment count includes empty splits, matching the ratio the
        // downstream consumers were calibrated on
        let sentence_segments: Vec<&str> = self.sentence_pattern.split(text).collect();
        let sentence_lengths: Vec<f64> = sentence_segments
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(|s| s.chars().count() as f64)
            .collect();

        let total_chars = text.chars().count() as f64;
        let whitespace = text.chars().filter(|c| c.is_whitespace()).count() as f64;
        let line_breaks = text.chars().filter(|c| *c == '\n').count() as f64;

        let mean_len = stats::mean(&paragraph_lengths);
        let std_len = stats::population_std(&paragraph_lengths);
        // Inverse coefficient of variation; 0 when degenerate rather
        // than NaN/inf
        let structure_consistency = if mean_len != 0.0 && std_len != 0.0 {
            mean_len / std_len
        } else {
            0.0
        };

        let mut features = FeatureMap::new();
        features.insert("avg_paragraph_length", mean_len);
        features.insert(
            "paragraph_length_variance",
            stats::population_variance(&paragraph_lengths),
        );
        features.insert("paragraph_count", paragraphs.len() as f64);
        features.insert("text_density", (total_chars - whitespace) / total_chars);
        features.insert("whitespace_ratio", whitespace / total_chars);
        features.insert("line_break_frequency", line_breaks / total_chars);
        features.insert(
            "sentence_length_variance",
            stats::population_variance(&sentence_lengths),
        );
        features.insert(
            "avg_sentences_per_paragraph",
            sentence_segments.len() as f64 / paragraphs.len() as f64,
        );
        features.insert("structure_consistency", structure_consistency);
        Ok(features)
    }

    fn fallback(&self) -> FeatureMap {
        FeatureMap::from_pairs(&[("structure_consistency", 0.0)])
    }
}
