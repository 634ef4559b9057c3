//! Text (terminal) reporter with colors and formatting

use crate::models::{AnalysisReport, Level};
use anyhow::Result;
use std::fmt::Write as _;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";

/// Level colors (ANSI escape codes)
fn level_color(level: &Level) -> &'static str {
    match level {
        Level::Low => "\x1b[34m",     // Blue
        Level::Medium => "\x1b[33m",  // Yellow
        Level::High => "\x1b[35m",    // Magenta
        Level::Unknown => "\x1b[90m", // Gray
    }
}

/// Render report as formatted terminal output
pub fn render(report: &AnalysisReport) -> Result<String> {
    let mut out = String::new();
    let metrics = &report.analysis.style_metrics;
    let patterns = &report.analysis.writing_patterns;
    let summary = &report.analysis.summary_metrics;

    writeln!(out, "{BOLD}Stylometric Analysis{RESET}")?;
    writeln!(
        out,
        "{DIM}{} ({} bytes){RESET}",
        report.metadata.filename, report.metadata.file_size
    )?;
    writeln!(out)?;

    writeln!(out, "{BOLD}Classification:{RESET} {}", metrics.classification)?;
    writeln!(
        out,
        "  Complexity  {:.2} {}{}{}",
        metrics.complexity.score,
        level_color(&metrics.complexity.level),
        metrics.complexity.level,
        RESET
    )?;
    writeln!(
        out,
        "  Consistency {:.2} {}{}{}",
        metrics.consistency.score,
        level_color(&metrics.consistency.level),
        metrics.consistency.level,
        RESET
    )?;
    writeln!(out)?;

    writeln!(out, "{BOLD}Writing patterns{RESET}")?;
    writeln!(out, "  Vocabulary usage   {}", patterns.vocabulary_usage)?;
    writeln!(out, "  Sentence structure {}", patterns.sentence_structure)?;
    writeln!(out, "  Text organization  {}", patterns.text_organization)?;
    writeln!(out)?;

    writeln!(out, "{BOLD}Summary{RESET}")?;
    writeln!(
        out,
        "  Readability {:.2}  {DIM}{}{RESET}",
        summary.readability.score, summary.readability.interpretation
    )?;
    writeln!(
        out,
        "  Vocabulary  {:.2}  {DIM}{}{RESET}",
        summary.vocabulary.score, summary.vocabulary.interpretation
    )?;
    writeln!(
        out,
        "  Structure   {:.2}  {DIM}{}{RESET}",
        summary.structure.score, summary.structure.interpretation
    )?;
    writeln!(out)?;

    writeln!(out, "{BOLD}Recommendations{RESET}")?;
    for (i, recommendation) in report.analysis.recommendations.iter().enumerate() {
        writeln!(out, "  {}. {}", i + 1, recommendation)?;
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporters::tests::test_report;

    #[test]
    fn test_text_render_contains_sections() {
        let rendered = render(&test_report()).unwrap();
        assert!(rendered.contains("Classification:"));
        assert!(rendered.contains("Writing patterns"));
        assert!(rendered.contains("Recommendations"));
        assert!(rendered.contains("essay.txt"));
    }

    #[test]
    fn test_text_render_lists_all_recommendations() {
        let report = test_report();
        let rendered = render(&report).unwrap();
        for recommendation in &report.analysis.recommendations {
            assert!(rendered.contains(recommendation));
        }
    }
}
