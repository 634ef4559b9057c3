//! CSV reporter
//!
//! Flattens one report into a header row and a single value row. Scalar
//! profile fields come first, then every feature from the four maps with
//! a source prefix (`lexical_`, `syntactic_`, `structural_`,
//! `readability_`), in sorted key order so columns are stable across
//! runs and documents.

use crate::models::{AnalysisReport, FeatureMap};
use anyhow::Result;

/// Render report as a two-line CSV (header + values)
pub fn render(report: &AnalysisReport) -> Result<String> {
    let mut columns: Vec<(String, String)> = vec![
        ("filename".into(), report.metadata.filename.clone()),
        ("file_size".into(), report.metadata.file_size.to_string()),
        ("timestamp".into(), report.metadata.timestamp.to_rfc3339()),
        (
            "style_classification".into(),
            report.analysis.style_metrics.classification.to_string(),
        ),
        (
            "style_complexity".into(),
            report.analysis.style_metrics.complexity.score.to_string(),
        ),
        (
            "style_consistency".into(),
            report.analysis.style_metrics.consistency.score.to_string(),
        ),
        (
            "complexity_level".into(),
            report.analysis.style_metrics.complexity.level.to_string(),
        ),
        (
            "consistency_level".into(),
            report.analysis.style_metrics.consistency.level.to_string(),
        ),
        (
            "vocabulary_usage".into(),
            report.analysis.writing_patterns.vocabulary_usage.to_string(),
        ),
        (
            "sentence_structure".into(),
            report.analysis.writing_patterns.sentence_structure.to_string(),
        ),
        (
            "text_organization".into(),
            report.analysis.writing_patterns.text_organization.to_string(),
        ),
        (
            "readability_score".into(),
            report.analysis.summary_metrics.readability.score.to_string(),
        ),
        (
            "vocabulary_score".into(),
            report.analysis.summary_metrics.vocabulary.score.to_string(),
        ),
        (
            "structure_score".into(),
            report.analysis.summary_metrics.structure.score.to_string(),
        ),
    ];

    push_features(&mut columns, "lexical", &report.features.lexical);
    push_features(&mut columns, "syntactic", &report.features.syntactic);
    push_features(&mut columns, "structural", &report.features.structural);
    push_features(&mut columns, "readability", &report.features.readability);

    let header: Vec<String> = columns.iter().map(|(name, _)| escape(name)).collect();
    let values: Vec<String> = columns.iter().map(|(_, value)| escape(value)).collect();
    Ok(format!("{}\n{}\n", header.join(","), values.join(",")))
}

fn push_features(columns: &mut Vec<(String, String)>, prefix: &str, features: &FeatureMap) {
    for (key, value) in features.iter() {
        columns.push((format!("{prefix}_{key}"), value.to_string()));
    }
}

/// Quote a field when it contains a delimiter, quote, or newline
fn escape(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
