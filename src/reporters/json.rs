//! JSON reporter
//!
//! Serializes the full report, feature maps included. Useful for piping
//! to jq or feeding the downstream training exporter, which depends on
//! the exact key names.

use crate::models::AnalysisReport;
use anyhow::Result;

/// Render report as pretty-printed JSON
pub fn render(report: &AnalysisReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Render report as compact JSON (single line)
pub fn render_compact(report: &AnalysisReport) -> Result<String> {
    Ok(serde_json::to_string(report)?)
}
