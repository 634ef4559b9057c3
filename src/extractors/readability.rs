//! Sentence/syllable-based readability indices
//!
//! Sentences split on runs of `.!?` followed by whitespace or
//! end-of-input. Words are whitespace-delimited tokens, deliberately
//! simpler than the lexical extractor's word pattern: the readability
//! formulas are defined on raw token counts, punctuation attached.
//!
//! Syllable counts are memoized per lowercase word in a bounded,
//! thread-safe cache. Values are idempotent per key, so concurrent
//! first-writes are harmless.

use super::{Extractor, ViewKind};
use crate::errors::ExtractionError;
use crate::models::FeatureMap;
use dashmap::DashMap;
use regex::Regex;

const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u', 'y'];

/// Default capacity of the syllable memo
pub const DEFAULT_SYLLABLE_CACHE_CAPACITY: usize = 50_000;

/// Bounded, thread-safe syllable memo keyed by lowercase word.
///
/// Inserts are dropped once the cache is full; `clear` resets it. This
/// keeps a long-lived analyzer instance from growing without bound.
pub struct SyllableCache {
    entries: DashMap<String, u32>,
    capacity: usize,
}

impl SyllableCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: DashMap::new(),
            capacity,
        }
    }

    fn get_or_insert_with(&self, word: &str, count: impl FnOnce() -> u32) -> u32 {
        if let Some(cached) = self.entries.get(word) {
            return *cached;
        }
        let value = count();
        if self.entries.len() < self.capacity {
            self.entries.insert(word.to_string(), value);
        }
        value
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Reset the memo; exposed so callers control retention
    pub fn clear(&self) {
        self.entries.clear();
    }
}

pub struct ReadabilityAnalyzer {
    sentence_pattern: Regex,
    cache: SyllableCache,
}

impl ReadabilityAnalyzer {
    pub fn new() -> Self {
        Self::with_cache_capacity(DEFAULT_SYLLABLE_CACHE_CAPACITY)
    }

    pub fn with_cache_capacity(capacity: usize) -> Self {
        Self {
            sentence_pattern: Regex::new(r"[.!?]+(?:\s+|$)").expect("static regex"),
            cache: SyllableCache::new(capacity),
        }
    }

    /// The syllable memo, for inspection and explicit resets
    pub fn syllable_cache(&self) -> &SyllableCache {
        &self.cache
    }

    /// Memoized syllable count for one word (any casing)
    pub fn count_syllables(&self, word: &str) -> u32 {
        let lower = word.to_lowercase();
        self.cache
            .get_or_insert_with(&lower, || syllables_in(&lower))
    }
}

/// Count transitions into a vowel group over {a,e,i,o,u,y}; subtract one
/// for a trailing `e`; floor at 1.
fn syllables_in(word: &str) -> u32 {
    let mut count: i32 = 0;
    let mut prev_was_vowel = false;
    for c in word.chars() {
        let is_vowel = VOWELS.contains(&c);
        if is_vowel && !prev_was_vowel {
            count += 1;
        }
        prev_was_vowel = is_vowel;
    }
    if word.ends_with('e') {
        count -= 1;
    }
    count.max(1) as u32
}

impl Default for ReadabilityAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Extractor for ReadabilityAnalyzer {
    fn name(&self) -> &'static str {
        "readability"
    }

    fn description(&self) -> &'static str {
        "Flesch, Flesch-Kincaid, Gunning Fog, SMOG, and ARI readability indices"
    }

    fn view(&self) -> ViewKind {
        ViewKind::Analysis
    }

    fn extract(&self, text: &str) -> Result<FeatureMap, ExtractionError> {
        let num_sentences = self
            .sentence_pattern
            .split(text)
            .filter(|s| !s.trim().is_empty())
            .count();
        let words: Vec<&str> = text.split_whitespace().collect();
        let num_words = words.len();
        let num_syllables: u32 = words.iter().map(|w| self.count_syllables(w)).sum();
        let num_complex = words
            .iter()
            .filter(|w| self.count_syllables(w) >= 3)
            .count();

        let sentences = num_sentences as f64;
        let word_count = num_words as f64;
        let syllables = num_syllables as f64;
        let complex = num_complex as f64;

        let has_words = num_words > 0;
        let has_sentences = num_sentences > 0;

        let flesch = if has_words && has_sentences {
            206.835 - 1.015 * (word_count / sentences) - 84.6 * (syllables / word_count)
        } else {
            0.0
        };
        let flesch_kincaid = if has_words && has_sentences {
            0.39 * (word_count / sentences) + 11.8 * (syllables / word_count) - 15.59
        } else {
            0.0
        };
        let gunning_fog = if has_words && has_sentences {
            0.4 * ((word_count / sentences) + 100.0 * (complex / word_count))
        } else {
            0.0
        };
        let smog = if has_sentences {
            1.0430 * (complex * (30.0 / sentences)).sqrt() + 3.1291
        } else {
            0.0
        };
        let ari = if has_words && has_sentences {
            // Mirrors the classic definition: total characters minus spaces
            let characters =
                (text.chars().count() - text.chars().filter(|c| *c == ' ').count()) as f64;
            4.71 * (characters / word_count) + 0.5 * (word_count / sentences) - 21.43
        } else {
            0.0
        };

        let mut features = FeatureMap::new();
        features.insert("flesch_reading_ease", flesch);
        features.insert("flesch_kincaid_grade", flesch_kincaid);
        features.insert("gunning_fog", gunning_fog);
        features.insert("smog_index", smog);
        features.insert("automated_readability_index", ari);
        features.insert(
            "average_syllables_per_word",
            if has_words { syllables / word_count } else { 0.0 },
        );
        features.insert(
            "complex_word_ratio",
            if has_words { complex / word_count } else { 0.0 },
        );
        Ok(features)
    }

    fn fallback(&self) -> FeatureMap {
        FeatureMap::from_pairs(&[("flesch_reading_ease", 0.0), ("gunning_fog", 0.0)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(text: &str) -> FeatureMap {
        ReadabilityAnalyzer::new().extract(text).unwrap()
    }

    #[test]
    fn test_syllable_rule() {
        let analyzer = ReadabilityAnalyzer::new();
        assert_eq!(analyzer.count_syllables("cat"), 1);
        assert_eq!(analyzer.count_syllables("happy"), 2);
        assert_eq!(analyzer.count_syllables("beautiful"), 3);
        // Trailing e is subtracted: c-o-d-e has one counted group
        assert_eq!(analyzer.count_syllables("code"), 1);
        // Floor at 1 even when the subtraction empties the count
        assert_eq!(analyzer.count_syllables("the"), 1);
        assert_eq!(analyzer.count_syllables("xyz"), 1);
    }

    #[test]
    fn test_syllables_case_insensitive_and_memoized() {
        let analyzer = ReadabilityAnalyzer::new();
        assert_eq!(
            analyzer.count_syllables("Reading"),
            analyzer.count_syllables("reading")
        );
        assert_eq!(analyzer.syllable_cache().len(), 1);
    }

    #[test]
    fn test_cache_is_bounded() {
        let analyzer = ReadabilityAnalyzer::with_cache_capacity(2);
        for word in ["alpha", "beta", "gamma", "delta"] {
            analyzer.count_syllables(word);
        }
        assert!(analyzer.syllable_cache().len() <= 2);
        // Uncached words still get counted correctly
        assert_eq!(analyzer.count_syllables("gamma"), 2);
    }

    #[test]
    fn test_cache_clear() {
        let analyzer = ReadabilityAnalyzer::new();
        analyzer.count_syllables("word");
        assert!(!analyzer.syllable_cache().is_empty());
        analyzer.syllable_cache().clear();
        assert!(analyzer.syllable_cache().is_empty());
    }

    #[test]
    fn test_empty_input_returns_zero_map() {
        let features = extract("");
        for key in [
            "flesch_reading_ease",
            "flesch_kincaid_grade",
            "gunning_fog",
            "smog_index",
            "automated_readability_index",
            "average_syllables_per_word",
            "complex_word_ratio",
        ] {
            assert_eq!(features.get(key), 0.0, "{key} should be 0 on empty input");
        }
    }

    #[test]
    fn test_flesch_formula_reproduction() {
        // "The cat sat. The dog ran." - 2 sentences, 6 words, and the
        // documented syllable rule gives one syllable per word.
        let analyzer = ReadabilityAnalyzer::new();
        let text = "The cat sat. The dog ran.";
        let syllables: u32 = text
            .split_whitespace()
            .map(|w| analyzer.count_syllables(w))
            .sum();
        assert_eq!(syllables, 6);

        let features = analyzer.extract(text).unwrap();
        let expected = 206.835 - 1.015 * (6.0 / 2.0) - 84.6 * (6.0 / 6.0);
        assert!((features.get("flesch_reading_ease") - expected).abs() < 1e-9);
        assert!((features.get("flesch_reading_ease") - 119.19).abs() < 0.01);
    }

    #[test]
    fn test_flesch_kincaid_formula_reproduction() {
        let features = extract("The cat sat. The dog ran.");
        let expected = 0.39 * 3.0 + 11.8 * 1.0 - 15.59;
        assert!((features.get("flesch_kincaid_grade") - expected).abs() < 1e-9);
    }

    #[test]
    fn test_gunning_fog_counts_complex_words() {
        // "beautiful" (3 syllables) is the only complex word of four
        let features = extract("The beautiful cat sat.");
        let expected = 0.4 * (4.0 / 1.0 + 100.0 * (1.0 / 4.0));
        assert!((features.get("gunning_fog") - expected).abs() < 1e-9);
        assert!((features.get("complex_word_ratio") - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_smog_guard_only_needs_sentences() {
        let features = extract("Stop.");
        // One sentence, no complex words: sqrt(0) term leaves the constant
        assert!((features.get("smog_index") - 3.1291).abs() < 1e-9);
    }

    #[test]
    fn test_ari_subtracts_spaces_only() {
        let text = "ab cd.";
        // 6 chars, one space: 5 counted characters, 2 words, 1 sentence
        let features = extract(text);
        let expected = 4.71 * (5.0 / 2.0) + 0.5 * (2.0 / 1.0) - 21.43;
        assert!((features.get("automated_readability_index") - expected).abs() < 1e-9);
    }

    #[test]
    fn test_sentence_split_requires_trailing_whitespace_or_end() {
        // "3.5" must not create a sentence boundary
        let analyzer = ReadabilityAnalyzer::new();
        let features = analyzer.extract("It rose 3.5 points. Then it fell.").unwrap();
        // 2 sentences, 7 whitespace-delimited words, 7 syllables
        assert!((features.get("flesch_kincaid_grade")
            - (0.39 * (7.0 / 2.0) + 11.8 * (7.0 / 7.0) - 15.59))
            .abs()
            < 1e-9);
    }
}
