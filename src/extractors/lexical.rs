//! Character and word-level statistics
//!
//! Words come from a `\w+` boundary match over the lowercased text;
//! character counts run over the text as given, except the per-letter
//! frequency table, which is computed on the lowercased text. All ratios
//! guard their denominators and read 0 on empty input.

use super::{stats, Extractor, ViewKind};
use crate::errors::ExtractionError;
use crate::models::FeatureMap;
use regex::Regex;
use rustc_hash::{FxHashMap, FxHashSet};

pub struct LexicalExtractor {
    word_pattern: Regex,
}

impl LexicalExtractor {
    pub fn new() -> Self {
        Self {
            word_pattern: Regex::new(r"\b\w+\b").expect("static regex"),
        }
    }
}

impl Default for LexicalExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl Extractor for LexicalExtractor {
    fn name(&self) -> &'static str {
        "lexical"
    }

    fn description(&self) -> &'static str {
        "Vocabulary richness, word-length, and character-frequency statistics"
    }

    fn view(&self) -> ViewKind {
        ViewKind::Lexical
    }

    fn extract(&self, text: &str) -> Result<FeatureMap, ExtractionError> {
        let lowered = text.to_lowercase();
        let words: Vec<&str> = self
            .word_pattern
            .find_iter(&lowered)
            .map(|m| m.as_str())
            .collect();
        let total_words = words.len();

        let mut word_counts: FxHashMap<&str, usize> = FxHashMap::default();
        for word in &words {
            *word_counts.entry(word).or_insert(0) += 1;
        }

        let total_chars = text.chars().count();
        let unique_chars: FxHashSet<char> = text.chars().collect();
        let word_lengths: Vec<f64> = words.iter().map(|w| w.chars().count() as f64).collect();

        // Unique words / total words: one ratio, three downstream names
        let richness = if total_words > 0 {
            word_counts.len() as f64 / total_words as f64
        } else {
            0.0
        };
        let hapax_ratio = if total_words > 0 {
            let hapax = word_counts.values().filter(|&&c| c == 1).count();
            hapax as f64 / total_words as f64
        } else {
            0.0
        };
        let char_diversity = if total_chars > 0 {
            unique_chars.len() as f64 / total_chars as f64
        } else {
            0.0
        };
        let punctuation_ratio = if total_chars > 0 {
            let punct = text
                .chars()
                .filter(|c| !c.is_alphanumeric() && !c.is_whitespace())
                .count();
            punct as f64 / total_chars as f64
        } else {
            0.0
        };

        let mut features = FeatureMap::new();
        features.insert("avg_word_length", stats::mean(&word_lengths));
        features.insert("vocabulary_richness", richness);
        features.insert("type_token_ratio", richness);
        features.insert("hapax_ratio", hapax_ratio);
        features.insert("char_diversity", char_diversity);
        features.insert(
            "word_length_variance",
            stats::population_variance(&word_lengths),
        );
        features.insert("unique_words_ratio", richness);
        features.insert("punctuation_ratio", punctuation_ratio);

        if total_chars > 0 {
            let mut char_counts: FxHashMap<char, usize> = FxHashMap::default();
            for c in lowered.chars() {
                if c.is_alphabetic() {
                    *char_counts.entry(c).or_insert(0) += 1;
                }
            }
            for (c, count) in char_counts {
                features.insert(format!("freq_{c}"), count as f64 / total_chars as f64);
            }
        }

        Ok(features)
    }

    fn fallback(&self) -> FeatureMap {
        FeatureMap::from_pairs(&[("vocabulary_richness", 0.0), ("type_token_ratio", 0.0)])
    }
}
