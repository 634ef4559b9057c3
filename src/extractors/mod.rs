//! Feature extractors
//!
//! Four independent extractors turn cleaned text into `FeatureMap`s:
//! - `lexical` - character/word-level statistics
//! - `readability` - sentence/syllable readability indices
//! - `structural` - paragraph, whitespace, and sentence-length statistics
//! - `syntactic` - token and parse-tree statistics via a `LinguisticAnnotator`
//!
//! Extractors are pure over their input string and have no mutual
//! dependencies, so the pipeline fans them out in parallel. They fail
//! loud: errors propagate as `ExtractionError` and the caller decides
//! whether to substitute the extractor's documented fallback map.

mod lexical;
mod readability;
mod structural;
mod syntactic;

pub use lexical::LexicalExtractor;
pub use readability::{ReadabilityAnalyzer, SyllableCache, DEFAULT_SYLLABLE_CACHE_CAPACITY};
pub use structural::StructuralExtractor;
pub use syntactic::SyntacticExtractor;

use crate::errors::ExtractionError;
use crate::models::FeatureMap;

/// Which view of the cleaned text an extractor consumes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    /// Punctuation, casing, and paragraph breaks intact
    Analysis,
    /// Aggressively stripped word stream
    Lexical,
}

/// Trait for all feature extractors
pub trait Extractor: Send + Sync {
    /// Unique identifier for this extractor, used in logs
    fn name(&self) -> &'static str;

    /// Human-readable description of what this extractor measures
    fn description(&self) -> &'static str;

    /// Which cleaned-text view this extractor's metrics are defined on
    fn view(&self) -> ViewKind {
        ViewKind::Analysis
    }

    /// Run extraction. Empty input returns the documented zero/default
    /// map rather than an error.
    fn extract(&self, text: &str) -> Result<FeatureMap, ExtractionError>;

    /// Map the pipeline substitutes when this extractor fails
    fn fallback(&self) -> FeatureMap;
}

/// Population statistics shared by the extractors
pub(crate) mod stats {
    pub fn mean(values: &[f64]) -> f64 {
        if values.is_empty() {
            return 0.0;
        }
        values.iter().sum::<f64>() / values.len() as f64
    }

    /// Population variance (divides by n, not n-1)
    pub fn population_variance(values: &[f64]) -> f64 {
        if values.is_empty() {
            return 0.0;
        }
        let m = mean(values);
        values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / values.len() as f64
    }

    pub fn population_std(values: &[f64]) -> f64 {
        population_variance(values).sqrt()
    }

}
