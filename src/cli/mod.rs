//! CLI command definition and handler

use crate::config::AnalyzerConfig;
use crate::models::{AnalysisReport, DocumentInfo};
use crate::pipeline::StyleAnalyzer;
use crate::reporters::{self, OutputFormat};
use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::info;

/// Stylometer - quantitative writing-style analysis
///
/// Runs four feature extractors (lexical, syntactic, structural,
/// readability) over a plain-text document and fuses them into a style
/// profile with classification and recommendations.
#[derive(Parser, Debug)]
#[command(name = "stylometer")]
#[command(
    version,
    about = "Stylometric analysis of plain-text documents — feature vectors, style classification, and writing recommendations",
    after_help = "\
Examples:
  stylometer essay.txt                      Styled terminal report
  stylometer essay.txt --format json        JSON for scripting
  stylometer essay.txt -f csv -o out.csv    Flattened CSV row
  stylometer essay.txt --log-level debug    Verbose extraction logging"
)]
pub struct Cli {
    /// Path to the document to analyze (plain text; PDF extraction is a
    /// separate preprocessing step)
    pub input: PathBuf,

    /// Output format: text, json, pretty-json, csv (default: from
    /// stylometer.toml, else text)
    #[arg(long, short = 'f')]
    pub format: Option<String>,

    /// Output file path (default: stdout)
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,

    /// Run extractors one at a time instead of in parallel
    #[arg(long)]
    pub sequential: bool,
}

pub fn run(cli: Cli) -> Result<()> {
    let raw = std::fs::read_to_string(&cli.input)
        .with_context(|| format!("reading document {}", cli.input.display()))?;
    let file_size = std::fs::metadata(&cli.input).map(|m| m.len()).unwrap_or(0);

    let config_dir = cli.input.parent().filter(|p| !p.as_os_str().is_empty());
    let config = AnalyzerConfig::load(config_dir.unwrap_or(Path::new(".")))?;
    let format: OutputFormat = cli
        .format
        .as_deref()
        .unwrap_or(&config.output.format)
        .parse()?;

    let mut analyzer = StyleAnalyzer::from_config(&config);
    if cli.sequential {
        analyzer = analyzer.sequential();
    }

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner:.green} {msg}").expect("static template"),
    );
    spinner.set_message("Analyzing document...");
    spinner.enable_steady_tick(Duration::from_millis(100));

    let started = std::time::Instant::now();
    let report = analyzer.analyze(&raw);
    spinner.finish_and_clear();
    info!("analysis finished in {:?}", started.elapsed());

    let metadata = DocumentInfo {
        filename: cli
            .input
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| cli.input.display().to_string()),
        file_size,
        timestamp: chrono::Utc::now(),
    };
    let full_report = AnalysisReport::new(metadata, report);
    let rendered = reporters::render(&full_report, format)?;

    match &cli.output {
        Some(path) => {
            std::fs::write(path, &rendered)
                .with_context(|| format!("writing results to {}", path.display()))?;
            eprintln!(
                "{} results saved to {}",
                style("✓").green().bold(),
                style(path.display()).bold()
            );
        }
        None => print!("{rendered}"),
    }
    Ok(())
}
