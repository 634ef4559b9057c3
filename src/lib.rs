//! # stylometer
//!
//! Stylometric analysis of plain-text documents. Four independent
//! feature extractors (lexical, readability, structural, syntactic)
//! produce sparse feature maps that a rule-based aggregator fuses into a
//! `StyleProfile`: complexity/consistency scores and levels, a style
//! classification, writing-pattern labels, interpreted summary metrics,
//! and recommendations.
//!
//! ```no_run
//! use stylometer::StyleAnalyzer;
//!
//! let analyzer = StyleAnalyzer::new();
//! let report = analyzer.analyze("The cat sat on the mat. It was warm.");
//! println!("{}", report.analysis.style_metrics.classification);
//! ```
//!
//! The syntactic extractor depends on a `LinguisticAnnotator` backend;
//! the built-in `HeuristicAnnotator` is rule-based and self-contained,
//! and statistical backends can be swapped in behind the same trait.

pub mod aggregator;
pub mod annotation;
pub mod cli;
pub mod config;
pub mod errors;
pub mod extractors;
pub mod models;
pub mod pipeline;
pub mod preprocessing;
pub mod reporters;

pub use aggregator::StyleAggregator;
pub use annotation::{HeuristicAnnotator, LinguisticAnnotator};
pub use errors::{AnnotationError, ExtractionError};
pub use models::{AnalysisReport, FeatureMap, StyleProfile, StyleReport};
pub use pipeline::StyleAnalyzer;
