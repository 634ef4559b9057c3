//! End-to-end pipeline tests
//!
//! Verifies the full clean -> extract -> aggregate flow against the
//! feature-name contract downstream export/ML consumers depend on, plus
//! fallback substitution when an extractor fails.

use stylometer::annotation::{Annotation, AnnotationError, LinguisticAnnotator};
use stylometer::models::{Level, StyleClass};
use stylometer::StyleAnalyzer;

const ESSAY: &str = "\
The researchers examined how writing style varies across academic disciplines. They \
collected essays from three departments because published work offers realistic prose. \
Each sample was cleaned and tokenized before analysis.

The first results were striking. Humanities essays showed longer sentences and richer \
vocabulary, while engineering reports preferred short declarative statements. The team \
measured readability with several classic indices.

Further analysis will broaden the corpus. It should also account for genre and audience, \
since those factors shape style as strongly as discipline does.";

/// The exact feature names the export and ML layers look up
const CONTRACT_KEYS: &[(&str, &str)] = &[
    ("lexical", "vocabulary_richness"),
    ("lexical", "type_token_ratio"),
    ("lexical", "hapax_ratio"),
    ("lexical", "avg_word_length"),
    ("lexical", "char_diversity"),
    ("lexical", "word_length_variance"),
    ("lexical", "unique_words_ratio"),
    ("lexical", "punctuation_ratio"),
    ("readability", "flesch_reading_ease"),
    ("readability", "flesch_kincaid_grade"),
    ("readability", "gunning_fog"),
    ("readability", "smog_index"),
    ("readability", "automated_readability_index"),
    ("readability", "average_syllables_per_word"),
    ("readability", "complex_word_ratio"),
    ("structural", "avg_paragraph_length"),
    ("structural", "paragraph_length_variance"),
    ("structural", "paragraph_count"),
    ("structural", "text_density"),
    ("structural", "whitespace_ratio"),
    ("structural", "line_break_frequency"),
    ("structural", "sentence_length_variance"),
    ("structural", "avg_sentences_per_paragraph"),
    ("structural", "structure_consistency"),
    ("syntactic", "avg_sentence_length"),
    ("syntactic", "sentence_complexity"),
    ("syntactic", "avg_parse_tree_depth"),
    ("syntactic", "parse_tree_breadth"),
    ("syntactic", "syntactic_diversity"),
    ("syntactic", "subordinate_clause_ratio"),
    ("syntactic", "function_word_ratio"),
];

#[test]
fn full_analysis_honors_feature_name_contract() {
    let report = StyleAnalyzer::new().analyze(ESSAY);
    for (source, key) in CONTRACT_KEYS {
        let map = match *source {
            "lexical" => &report.features.lexical,
            "readability" => &report.features.readability,
            "structural" => &report.features.structural,
            _ => &report.features.syntactic,
        };
        assert!(map.contains(key), "{source} map is missing `{key}`");
    }
}

#[test]
fn full_analysis_produces_plausible_values() {
    let report = StyleAnalyzer::new().analyze(ESSAY);

    let richness = report.features.lexical.get("vocabulary_richness");
    assert!((0.0..=1.0).contains(&richness));
    assert_eq!(richness, report.features.lexical.get("type_token_ratio"));
    assert!(report.features.lexical.get("hapax_ratio") <= richness);

    assert_eq!(report.features.structural.get("paragraph_count"), 3.0);
    assert!(report.features.readability.get("flesch_reading_ease") != 0.0);
    assert!(report.features.syntactic.get("avg_sentence_length") > 1.0);

    assert_ne!(
        report.analysis.style_metrics.classification,
        StyleClass::Unknown
    );
    assert_ne!(report.analysis.style_metrics.complexity.level, Level::Unknown);
    assert!(!report.analysis.recommendations.is_empty());
}

#[test]
fn analysis_is_deterministic() {
    let analyzer = StyleAnalyzer::new();
    let first = analyzer.analyze(ESSAY);
    let second = analyzer.analyze(ESSAY);
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn empty_document_yields_default_maps_without_error() {
    let report = StyleAnalyzer::new().analyze("");
    assert_eq!(report.features.lexical.get("vocabulary_richness"), 0.0);
    assert_eq!(report.features.readability.get("gunning_fog"), 0.0);
    assert_eq!(report.features.structural.get("structure_consistency"), 0.0);
    assert_eq!(report.features.syntactic.get("sentence_complexity"), 0.0);
    assert!(!report.analysis.recommendations.is_empty());
}

struct BrokenAnnotator;

impl LinguisticAnnotator for BrokenAnnotator {
    fn name(&self) -> &'static str {
        "broken"
    }

    fn annotate(&self, _text: &str) -> Result<Annotation, AnnotationError> {
        Err(AnnotationError::Unavailable("model missing".to_string()))
    }
}

#[test]
fn annotator_failure_substitutes_syntactic_fallback() {
    let report = StyleAnalyzer::with_annotator(Box::new(BrokenAnnotator)).analyze(ESSAY);

    // The syntactic map collapses to its documented fallback
    assert_eq!(report.features.syntactic.len(), 2);
    assert_eq!(report.features.syntactic.get("sentence_complexity"), 0.0);
    assert_eq!(report.features.syntactic.get("syntactic_diversity"), 0.0);

    // The other extractors are unaffected and aggregation still runs
    assert!(report.features.lexical.get("vocabulary_richness") > 0.0);
    assert_ne!(
        report.analysis.style_metrics.classification,
        StyleClass::Unknown
    );
}

#[test]
fn punctuation_stripping_no_longer_starves_structural_metrics() {
    // The lexical view drops sentence punctuation and paragraph breaks;
    // the structural and readability extractors must not be fed it
    let text = "Sentence one ends here. Sentence two follows!\n\nNew paragraph starts. It ends.";
    let report = StyleAnalyzer::new().analyze(text);
    assert_eq!(report.features.structural.get("paragraph_count"), 2.0);
    assert!(report.features.readability.get("flesch_kincaid_grade") != 0.0);
    // While the lexical extractor still sees only bare words
    assert_eq!(report.features.lexical.get("punctuation_ratio"), 0.0);
}
