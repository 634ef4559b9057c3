//! Style aggregation
//!
//! Fuses the four feature maps into a `StyleProfile`: weighted
//! complexity/consistency scores with level buckets, a priority-ordered
//! style classification, categorical writing-pattern labels, interpreted
//! summary metrics, and accumulated recommendations.
//!
//! Missing keys in a supplied map read as 0.0 and are never an error;
//! sparse maps are expected (the pipeline substitutes sparse fallback
//! maps when an extractor fails). The aggregator itself fails soft: it
//! is the last step before result assembly, so an internal failure
//! returns the fixed Unknown profile instead of propagating.

use crate::models::{
    ComplexityComponents, ComplexityMetric, ConsistencyMetric, FeatureMap, Level,
    SentenceStructure, StyleClass, StyleMetrics, StyleProfile, SummaryMetric, SummaryMetrics,
    TextOrganization, VocabularyUsage, WritingPatterns,
};
use anyhow::{ensure, Result};
use tracing::error;

/// Complexity score weights
const VOCABULARY_WEIGHT: f64 = 0.4;
const SYNTAX_WEIGHT: f64 = 0.4;
const READABILITY_WEIGHT: f64 = 0.2;
/// Gunning Fog is normalized against this ceiling before weighting
const FOG_NORMALIZER: f64 = 20.0;

pub struct StyleAggregator;

impl StyleAggregator {
    pub fn new() -> Self {
        Self
    }

    /// Fuse four feature maps into a profile.
    ///
    /// Never fails: an internal error is logged and the fixed Unknown
    /// profile is returned.
    pub fn aggregate(
        &self,
        lexical: &FeatureMap,
        syntactic: &FeatureMap,
        structural: &FeatureMap,
        readability: &FeatureMap,
    ) -> StyleProfile {
        match self.try_aggregate(lexical, syntactic, structural, readability) {
            Ok(profile) => profile,
            Err(e) => {
                error!("style aggregation failed, returning Unknown profile: {e:#}");
                StyleProfile::unknown()
            }
        }
    }

    fn try_aggregate(
        &self,
        lexical: &FeatureMap,
        syntactic: &FeatureMap,
        structural: &FeatureMap,
        readability: &FeatureMap,
    ) -> Result<StyleProfile> {
        let vocabulary_richness = lexical.get("vocabulary_richness");
        let type_token_ratio = lexical.get("type_token_ratio");
        let sentence_complexity = syntactic.get("sentence_complexity");
        let structure_consistency = structural.get("structure_consistency");
        let flesch = readability.get("flesch_reading_ease");
        let fog = readability.get("gunning_fog");

        // A non-finite input would poison every threshold comparison
        // below; treat it as an upstream defect rather than classify it
        for (name, value) in [
            ("vocabulary_richness", vocabulary_richness),
            ("type_token_ratio", type_token_ratio),
            ("sentence_complexity", sentence_complexity),
            ("structure_consistency", structure_consistency),
            ("flesch_reading_ease", flesch),
            ("gunning_fog", fog),
        ] {
            ensure!(value.is_finite(), "non-finite input feature {name}: {value}");
        }

        let vocabulary_contribution = vocabulary_richness * VOCABULARY_WEIGHT;
        let syntax_contribution = sentence_complexity * SYNTAX_WEIGHT;
        let readability_contribution = fog / FOG_NORMALIZER * READABILITY_WEIGHT;

        // Intentionally unclamped; extreme inputs can push this past 1.0
        // and the one-sided thresholds still hold
        let complexity_score =
            vocabulary_contribution + syntax_contribution + readability_contribution;
        let consistency_score = structure_consistency;

        let classification = classify(complexity_score, consistency_score);

        let readability_score = readability_summary_score(flesch, fog);
        let vocabulary_score = (vocabulary_richness + type_token_ratio) / 2.0;
        let structure_score = (structure_consistency + (1.0 - sentence_complexity / 100.0)) / 2.0;

        let recommendations = build_recommendations(
            readability_score,
            vocabulary_score,
            structure_score,
            complexity_score,
            consistency_score,
        );

        Ok(StyleProfile {
            style_metrics: StyleMetrics {
                complexity: ComplexityMetric {
                    score: round2(complexity_score),
                    level: Level::from_score(complexity_score),
                    components: ComplexityComponents {
                        vocabulary_contribution: round2(vocabulary_contribution),
                        syntax_contribution: round2(syntax_contribution),
                        readability_contribution: round2(readability_contribution),
                    },
                },
                consistency: ConsistencyMetric {
                    score: round2(consistency_score),
                    level: Level::from_score(consistency_score),
                },
                classification,
            },
            writing_patterns: WritingPatterns {
                vocabulary_usage: vocabulary_pattern(vocabulary_richness),
                sentence_structure: sentence_pattern(sentence_complexity),
                text_organization: organization_pattern(structure_consistency),
            },
            summary_metrics: SummaryMetrics {
                readability: SummaryMetric {
                    score: round2(readability_score),
                    interpretation: interpret_readability(readability_score).to_string(),
                },
                vocabulary: SummaryMetric {
                    score: round2(vocabulary_score),
                    interpretation: interpret_vocabulary(vocabulary_score).to_string(),
                },
                structure: SummaryMetric {
                    score: round2(structure_score),
                    interpretation: interpret_structure(structure_score).to_string(),
                },
            },
            recommendations,
        })
    }
}

impl Default for StyleAggregator {
    fn default() -> Self {
        Self::new()
    }
}

/// Round a score to two decimals for the stored profile
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Priority-ordered classification; all comparisons strict
fn classify(complexity: f64, consistency: f64) -> StyleClass {
    if complexity > 0.7 && consistency > 0.7 {
        StyleClass::Academic
    } else if complexity < 0.3 && consistency > 0.7 {
        StyleClass::SimpleAndStructured
    } else if complexity > 0.7 && consistency < 0.3 {
        StyleClass::ComplexAndVariable
    } else {
        StyleClass::Balanced
    }
}

fn vocabulary_pattern(richness: f64) -> VocabularyUsage {
    if richness > 0.7 {
        VocabularyUsage::Advanced
    } else if richness > 0.3 {
        VocabularyUsage::Moderate
    } else {
        VocabularyUsage::Basic
    }
}

fn sentence_pattern(complexity: f64) -> SentenceStructure {
    if complexity > 0.7 {
        SentenceStructure::Complex
    } else if complexity > 0.3 {
        SentenceStructure::Varied
    } else {
        SentenceStructure::Simple
    }
}

fn organization_pattern(consistency: f64) -> TextOrganization {
    if consistency > 0.7 {
        TextOrganization::WellStructured
    } else if consistency > 0.3 {
        TextOrganization::ModeratelyStructured
    } else {
        TextOrganization::LooselyStructured
    }
}

/// Normalized blend of Flesch (0-100) and Gunning Fog (6-20)
fn readability_summary_score(flesch: f64, fog: f64) -> f64 {
    let norm_flesch = flesch.clamp(0.0, 100.0) / 100.0;
    let norm_fog = (FOG_NORMALIZER - fog).clamp(0.0, 14.0) / 14.0;
    (norm_flesch + norm_fog) / 2.0
}

fn interpret_readability(score: f64) -> &'static str {
    if score > 0.8 {
        "Very Easy to Read"
    } else if score > 0.6 {
        "Easy to Read"
    } else if score > 0.4 {
        "Moderately Readable"
    } else if score > 0.2 {
        "Difficult to Read"
    } else {
        "Very Difficult to Read"
    }
}

fn interpret_vocabulary(score: f64) -> &'static str {
    if score > 0.8 {
        "Advanced and Diverse"
    } else if score > 0.6 {
        "Sophisticated"
    } else if score > 0.4 {
        "Balanced"
    } else if score > 0.2 {
        "Basic"
    } else {
        "Limited"
    }
}

fn interpret_structure(score: f64) -> &'static str {
    if score > 0.8 {
        "Well Structured and Balanced"
    } else if score > 0.6 {
        "Clear and Organized"
    } else if score > 0.4 {
        "Moderately Structured"
    } else if score > 0.2 {
        "Somewhat Disorganized"
    } else {
        "Poorly Structured"
    }
}

/// Accumulate recommendations; triggers are independent, not
/// short-circuited, and the order is fixed
fn build_recommendations(
    readability: f64,
    vocabulary: f64,
    structure: f64,
    complexity: f64,
    consistency: f64,
) -> Vec<String> {
    let mut recommendations = Vec::new();
    if readability < 0.4 {
        recommendations
            .push("Consider simplifying sentence structure for better readability".to_string());
    }
    if vocabulary < 0.4 {
        recommendations.push(
            "Try incorporating more varied vocabulary while maintaining clarity".to_string(),
        );
    }
    if structure < 0.4 {
        recommendations
            .push("Work on organizing content with clearer paragraph structure".to_string());
    }
    if complexity > 0.8 {
        recommendations
            .push("Consider breaking down complex ideas into simpler components".to_string());
    }
    if consistency < 0.3 {
        recommendations
            .push("Try to maintain more consistent paragraph lengths and structure".to_string());
    }
    if recommendations.is_empty() {
        recommendations
            .push("Your writing demonstrates good balance across all metrics".to_string());
    }
    recommendations
}
