//! Error taxonomy for feature extraction
//!
//! Extractors fail loud: a degraded input silently corrupts too many
//! downstream numbers, so extraction errors propagate to the pipeline,
//! which decides whether to substitute the extractor's documented
//! fallback map or abort. The aggregator is the one fail-soft component
//! (see `aggregator`).

use thiserror::Error;

/// An extractor could not process its input.
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// The linguistic annotation backend failed or is unavailable
    #[error("linguistic annotation failed: {0}")]
    Annotation(#[from] AnnotationError),

    /// Input violates the cleaned-text contract
    #[error("malformed input: {0}")]
    MalformedInput(String),
}

/// Failure from a `LinguisticAnnotator` backend.
#[derive(Error, Debug)]
pub enum AnnotationError {
    /// The backend cannot run at all (missing model, unsupported language)
    #[error("annotator unavailable: {0}")]
    Unavailable(String),

    /// The backend ran but produced no usable annotation
    #[error("annotation failed: {0}")]
    Failed(String),
}
