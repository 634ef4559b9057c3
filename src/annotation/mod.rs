//! Linguistic annotation for the syntactic extractor
//!
//! The syntactic extractor needs sentence boundaries, POS tags,
//! dependency labels, and parse-tree structure. Those come from an
//! annotation backend behind the `LinguisticAnnotator` trait, so the
//! extractor depends only on the contract here, not on any concrete
//! tagging engine. `HeuristicAnnotator` is the built-in rule-based
//! backend; a statistical model can be swapped in behind the same trait.
//!
//! Tokens live in a flat arena with index-based `head`/`children` links.
//! Trees are traversed iteratively, never by recursing on child nodes.

mod heuristic;

pub use heuristic::HeuristicAnnotator;

pub use crate::errors::AnnotationError;

/// One token in the annotation arena
#[derive(Debug, Clone)]
pub struct Token {
    pub text: String,
    /// Universal POS tag, e.g. "NOUN", "VERB", "ADP"
    pub pos: String,
    /// Dependency label relating this token to its head, e.g. "nsubj"
    pub dep: String,
    /// Arena index of the syntactic head; the sentence root points at itself
    pub head: usize,
    /// Arena indices of direct dependents
    pub children: Vec<usize>,
}

/// A sentence as a slice of the token arena
#[derive(Debug, Clone)]
pub struct Sentence {
    /// Arena index of the sentence root
    pub root: usize,
    /// First token index (inclusive)
    pub start: usize,
    /// One past the last token index
    pub end: usize,
}

impl Sentence {
    pub fn token_count(&self) -> usize {
        self.end - self.start
    }
}

/// A fully annotated document
#[derive(Debug, Clone, Default)]
pub struct Annotation {
    pub tokens: Vec<Token>,
    pub sentences: Vec<Sentence>,
}

impl Annotation {
    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }

    /// Tokens of one sentence, in document order
    pub fn sentence_tokens<'a>(&'a self, sentence: &Sentence) -> &'a [Token] {
        &self.tokens[sentence.start..sentence.end]
    }
}

/// Capability contract for annotation backends.
///
/// Implementations must return a well-formed arena: every `head` and
/// child index in bounds, every sentence root inside its sentence span,
/// and `children` consistent with `head`.
pub trait LinguisticAnnotator: Send + Sync {
    /// Identifier for the backend, used in logs
    fn name(&self) -> &'static str;

    /// Annotate a document. Empty input yields an empty annotation.
    fn annotate(&self, text: &str) -> Result<Annotation, AnnotationError>;
}
