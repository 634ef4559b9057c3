//! Output reporters for analysis results
//!
//! Supports multiple output formats:
//! - `text` - Terminal output with ANSI styling
//! - `json` / `pretty-json` - Machine-readable JSON
//! - `csv` - Single flattened row for spreadsheet/ML ingestion

mod csv;
mod json;
mod text;

use crate::models::AnalysisReport;
use anyhow::{anyhow, Result};
use std::str::FromStr;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    PrettyJson,
    Csv,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" | "terminal" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "pretty-json" | "pretty_json" | "pretty" => Ok(OutputFormat::PrettyJson),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(anyhow!(
                "Unknown format '{}'. Valid formats: text, json, pretty-json, csv",
                s
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::PrettyJson => write!(f, "pretty-json"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}

/// Render a report in the requested format
pub fn render(report: &AnalysisReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => text::render(report),
        OutputFormat::Json => json::render_compact(report),
        OutputFormat::PrettyJson => json::render(report),
        OutputFormat::Csv => csv::render(report),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::aggregator::StyleAggregator;
    use crate::models::{AnalysisReport, DocumentInfo, FeatureMap, FeatureSet};

    /// Fixed report for reporter tests
    pub(crate) fn test_report() -> AnalysisReport {
        let lexical = FeatureMap::from_pairs(&[
            ("vocabulary_richness", 0.62),
            ("type_token_ratio", 0.62),
            ("hapax_ratio", 0.4),
        ]);
        let syntactic = FeatureMap::from_pairs(&[
            ("sentence_complexity", 0.9),
            ("syntactic_diversity", 0.55),
        ]);
        let structural = FeatureMap::from_pairs(&[
            ("structure_consistency", 0.75),
            ("paragraph_count", 3.0),
        ]);
        let readability = FeatureMap::from_pairs(&[
            ("flesch_reading_ease", 62.0),
            ("gunning_fog", 11.0),
        ]);
        let analysis =
            StyleAggregator::new().aggregate(&lexical, &syntactic, &structural, &readability);
        let metadata = DocumentInfo {
            filename: "essay.txt".to_string(),
            file_size: 2048,
            timestamp: chrono::DateTime::parse_from_rfc3339("2025-06-01T12:00:00Z")
                .unwrap()
                .with_timezone(&chrono::Utc),
        };
        AnalysisReport {
            metadata,
            analysis,
            features: FeatureSet {
                lexical,
                syntactic,
                structural,
                readability,
            },
        }
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!(
            "pretty_json".parse::<OutputFormat>().unwrap(),
            OutputFormat::PrettyJson
        );
        assert_eq!("TEXT".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert!("yaml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_render_dispatch() {
        let report = test_report();
        for format in [
            OutputFormat::Text,
            OutputFormat::Json,
            OutputFormat::PrettyJson,
            OutputFormat::Csv,
        ] {
            let rendered = render(&report, format).unwrap();
            assert!(!rendered.is_empty(), "{format} output should not be empty");
        }
    }
}
