//! Analysis pipeline
//!
//! Orchestrates a full document analysis:
//! 1. Clean the raw text into the two views
//! 2. Fan out the four extractors (parallel by default)
//! 3. Substitute an extractor's documented fallback map if it fails
//! 4. Aggregate the feature maps into a style profile
//!
//! Extractors fail loud, so the substitution decision lives here, not
//! inside them: a failed extractor is logged and its sparse fallback map
//! flows into the aggregator, which treats missing keys as 0.0.

use crate::aggregator::StyleAggregator;
use crate::annotation::{HeuristicAnnotator, LinguisticAnnotator};
use crate::config::AnalyzerConfig;
use crate::extractors::{
    Extractor, LexicalExtractor, ReadabilityAnalyzer, StructuralExtractor, SyntacticExtractor,
    ViewKind,
};
use crate::models::{FeatureMap, FeatureSet, StyleReport};
use crate::preprocessing::{CleanedText, TextCleaner};
use tracing::{debug, error};

/// Full stylometric analysis pipeline.
pub struct StyleAnalyzer {
    cleaner: TextCleaner,
    lexical: LexicalExtractor,
    readability: ReadabilityAnalyzer,
    structural: StructuralExtractor,
    syntactic: SyntacticExtractor,
    aggregator: StyleAggregator,
    parallel: bool,
}

impl StyleAnalyzer {
    /// Analyzer with the built-in heuristic annotation backend.
    pub fn new() -> Self {
        Self::with_annotator(Box::new(HeuristicAnnotator::new()))
    }

    /// Analyzer with a custom annotation backend.
    pub fn with_annotator(annotator: Box<dyn LinguisticAnnotator>) -> Self {
        Self {
            cleaner: TextCleaner::new(),
            lexical: LexicalExtractor::new(),
            readability: ReadabilityAnalyzer::new(),
            structural: StructuralExtractor::new(),
            syntactic: SyntacticExtractor::new(annotator),
            aggregator: StyleAggregator::new(),
            parallel: true,
        }
    }

    /// Analyzer configured from a loaded `stylometer.toml`.
    pub fn from_config(config: &AnalyzerConfig) -> Self {
        let mut analyzer = Self::new();
        analyzer.readability =
            ReadabilityAnalyzer::with_cache_capacity(config.analysis.syllable_cache_capacity);
        analyzer.parallel = config.analysis.parallel;
        analyzer
    }

    /// Run the extractors one at a time instead of fanning out.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    /// The readability analyzer, for syllable-cache inspection/reset.
    pub fn readability(&self) -> &ReadabilityAnalyzer {
        &self.readability
    }

    /// Analyze one cleaned-or-raw document into a style report.
    pub fn analyze(&self, raw_text: &str) -> StyleReport {
        let views = self.cleaner.clean(raw_text);

        let (lexical, readability, structural, syntactic) = if self.parallel {
            let ((lexical, readability), (structural, syntactic)) = rayon::join(
                || {
                    rayon::join(
                        || run_extractor(&self.lexical, &views),
                        || run_extractor(&self.readability, &views),
                    )
                },
                || {
                    rayon::join(
                        || run_extractor(&self.structural, &views),
                        || run_extractor(&self.syntactic, &views),
                    )
                },
            );
            (lexical, readability, structural, syntactic)
        } else {
            (
                run_extractor(&self.lexical, &views),
                run_extractor(&self.readability, &views),
                run_extractor(&self.structural, &views),
                run_extractor(&self.syntactic, &views),
            )
        };

        let analysis = self
            .aggregator
            .aggregate(&lexical, &syntactic, &structural, &readability);

        StyleReport {
            analysis,
            features: FeatureSet {
                lexical,
                syntactic,
                structural,
                readability,
            },
        }
    }
}

impl Default for StyleAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// Run one extractor on the view its metrics are defined on, substituting
/// its documented fallback map on failure.
fn run_extractor(extractor: &dyn Extractor, views: &CleanedText) -> FeatureMap {
    let text = match extractor.view() {
        ViewKind::Analysis => views.analysis(),
        ViewKind::Lexical => views.lexical(),
    };
    match extractor.extract(text) {
        Ok(features) => {
            debug!("{} extractor produced {} features", extractor.name(), features.len());
            features
        }
        Err(e) => {
            error!(
                "{} extraction failed: {e}; substituting fallback features",
                extractor.name()
            );
            extractor.fallback()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "The study examined writing patterns across multiple documents. \
Researchers collected samples from published essays because they wanted realistic prose.\n\n\
Each document was processed independently. The results showed considerable variation in \
sentence structure and vocabulary choice.\n\n\
Further work will extend the corpus. It should also compare genres.";

    #[test]
    fn test_analyze_produces_contract_keys() {
        let report = StyleAnalyzer::new().analyze(SAMPLE);
        for key in ["vocabulary_richness", "type_token_ratio", "hapax_ratio"] {
            assert!(report.features.lexical.contains(key), "missing lexical {key}");
        }
        for key in ["flesch_reading_ease", "gunning_fog", "smog_index"] {
            assert!(
                report.features.readability.contains(key),
                "missing readability {key}"
            );
        }
        for key in ["structure_consistency", "paragraph_count"] {
            assert!(
                report.features.structural.contains(key),
                "missing structural {key}"
            );
        }
        for key in ["sentence_complexity", "syntactic_diversity"] {
            assert!(
                report.features.syntactic.contains(key),
                "missing syntactic {key}"
            );
        }
        assert!(!report.analysis.recommendations.is_empty());
    }

    #[test]
    fn test_parallel_and_sequential_agree() {
        let parallel = StyleAnalyzer::new().analyze(SAMPLE);
        let sequential = StyleAnalyzer::new().sequential().analyze(SAMPLE);
        assert_eq!(parallel, sequential);
    }

    #[test]
    fn test_empty_document() {
        let report = StyleAnalyzer::new().analyze("");
        assert_eq!(report.features.lexical.get("vocabulary_richness"), 0.0);
        assert_eq!(report.features.structural.get("paragraph_count"), 0.0);
        assert_eq!(report.features.readability.get("flesch_reading_ease"), 0.0);
        assert!(!report.analysis.recommendations.is_empty());
    }

    #[test]
    fn test_lexical_runs_on_stripped_view() {
        // Digits vanish from the lexical view, so they never count as words
        let report = StyleAnalyzer::new().analyze("word word 123 456.");
        // Only "word" survives stripping: 1 unique over 2 tokens
        assert!((report.features.lexical.get("vocabulary_richness") - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_structural_sees_paragraph_breaks() {
        let report = StyleAnalyzer::new().analyze("One paragraph here.\n\nAnd a second one.");
        assert_eq!(report.features.structural.get("paragraph_count"), 2.0);
    }
}
