//! Token and parse-tree statistics
//!
//! Works entirely from a `LinguisticAnnotator` annotation: POS tags,
//! dependency labels, and index-linked parse trees. Tree depth is
//! computed with an explicit queue over the token arena so pathological
//! inputs cannot exhaust the stack.

use super::{stats, Extractor, ViewKind};
use crate::annotation::{Annotation, LinguisticAnnotator};
use crate::errors::ExtractionError;
use crate::models::FeatureMap;
use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::VecDeque;

const SUBORDINATE_DEPS: &[&str] = &["advcl", "acl", "ccomp", "xcomp"];
const FUNCTION_POS: &[&str] = &["ADP", "AUX", "CCONJ", "DET", "PART", "PRON", "SCONJ"];

pub struct SyntacticExtractor {
    annotator: Box<dyn LinguisticAnnotator>,
}

impl SyntacticExtractor {
    pub fn new(annotator: Box<dyn LinguisticAnnotator>) -> Self {
        Self { annotator }
    }

    fn zero_map() -> FeatureMap {
        FeatureMap::from_pairs(&[
            ("avg_sentence_length", 0.0),
            ("sentence_complexity", 0.0),
            ("avg_parse_tree_depth", 0.0),
            ("parse_tree_breadth", 0.0),
            ("syntactic_diversity", 0.0),
            ("subordinate_clause_ratio", 0.0),
            ("function_word_ratio", 0.0),
        ])
    }
}

/// Depth of the tree rooted at `root`: 1 for a bare root, plus one per
/// level below it. Breadth-first with a visited set, so a malformed
/// annotation with a cycle terminates instead of looping.
fn tree_depth(doc: &Annotation, root: usize) -> f64 {
    let mut visited = vec![false; doc.tokens.len()];
    let mut max_depth = 0u32;
    let mut queue = VecDeque::new();
    queue.push_back((root, 1u32));
    visited[root] = true;
    while let Some((idx, depth)) = queue.pop_front() {
        max_depth = max_depth.max(depth);
        for &child in &doc.tokens[idx].children {
            if child < doc.tokens.len() && !visited[child] {
                visited[child] = true;
                queue.push_back((child, depth + 1));
            }
        }
    }
    max_depth as f64
}

impl Extractor for SyntacticExtractor {
    fn name(&self) -> &'static str {
        "syntactic"
    }

    fn description(&self) -> &'static str {
        "POS, dependency, and parse-tree statistics from linguistic annotation"
    }

    fn view(&self) -> ViewKind {
        ViewKind::Analysis
    }

    fn extract(&self, text: &str) -> Result<FeatureMap, ExtractionError> {
        let doc = self.annotator.annotate(text)?;
        if doc.tokens.is_empty() {
            return Ok(Self::zero_map());
        }
        let total_tokens = doc.token_count() as f64;

        let mut sentence_lengths = Vec::with_capacity(doc.sentences.len());
        let mut verb_counts = Vec::with_capacity(doc.sentences.len());
        let mut depths = Vec::with_capacity(doc.sentences.len());
        let mut breadths = Vec::with_capacity(doc.sentences.len());
        for sentence in &doc.sentences {
            sentence_lengths.push(sentence.token_count() as f64);
            let verbs = doc
                .sentence_tokens(sentence)
                .iter()
                .filter(|t| t.pos == "VERB")
                .count();
            verb_counts.push(verbs as f64);
            depths.push(tree_depth(&doc, sentence.root));
            breadths.push(doc.tokens[sentence.root].children.len() as f64);
        }

        let mut patterns: FxHashSet<(&str, &str)> = FxHashSet::default();
        let mut subordinate = 0usize;
        let mut function_words = 0usize;
        let mut pos_counts: FxHashMap<&str, usize> = FxHashMap::default();
        let mut dep_counts: FxHashMap<&str, usize> = FxHashMap::default();
        for token in &doc.tokens {
            patterns.insert((token.dep.as_str(), doc.tokens[token.head].pos.as_str()));
            if SUBORDINATE_DEPS.contains(&token.dep.as_str()) {
                subordinate += 1;
            }
            if FUNCTION_POS.contains(&token.pos.as_str()) {
                function_words += 1;
            }
            *pos_counts.entry(token.pos.as_str()).or_insert(0) += 1;
            *dep_counts.entry(token.dep.as_str()).or_insert(0) += 1;
        }

        let mut features = FeatureMap::new();
        features.insert("avg_sentence_length", stats::mean(&sentence_lengths));
        features.insert("sentence_complexity", stats::mean(&verb_counts));
        features.insert("avg_parse_tree_depth", stats::mean(&depths));
        features.insert("parse_tree_breadth", stats::mean(&breadths));
        features.insert("syntactic_diversity", patterns.len() as f64 / total_tokens);
        features.insert(
            "subordinate_clause_ratio",
            subordinate as f64 / total_tokens,
        );
        features.insert("function_word_ratio", function_words as f64 / total_tokens);
        for (pos, count) in pos_counts {
            features.insert(
                format!("pos_{}", pos.to_lowercase()),
                count as f64 / total_tokens,
            );
        }
        for (dep, count) in dep_counts {
            features.insert(
                format!("dep_{}", dep.to_lowercase()),
                count as f64 / total_tokens,
            );
        }
        Ok(features)
    }

    fn fallback(&self) -> FeatureMap {
        FeatureMap::from_pairs(&[("sentence_complexity", 0.0), ("syntactic_diversity", 0.0)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotation::{AnnotationError, Sentence, Token};

    /// Backend returning a canned annotation, so the metric arithmetic
    /// can be checked exactly
    struct FixedAnnotator {
        doc: Annotation,
    }

    impl LinguisticAnnotator for FixedAnnotator {
        fn name(&self) -> &'static str {
            "fixed"
        }

        fn annotate(&self, _text: &str) -> Result<Annotation, AnnotationError> {
            Ok(self.doc.clone())
        }
    }

    struct FailingAnnotator;

    impl LinguisticAnnotator for FailingAnnotator {
        fn name(&self) -> &'static str {
            "failing"
        }

        fn annotate(&self, _text: &str) -> Result<Annotation, AnnotationError> {
            Err(AnnotationError::Unavailable("no model loaded".to_string()))
        }
    }

    fn token(text: &str, pos: &str, dep: &str, head: usize, children: &[usize]) -> Token {
        Token {
            text: text.to_string(),
            pos: pos.to_string(),
            dep: dep.to_string(),
            head,
            children: children.to_vec(),
        }
    }

    /// "She slept because it rained" as a two-level tree:
    /// slept(root) <- {She(nsubj), because(mark)->rained, rained(advcl) <- it(nsubj)}
    fn sample_doc() -> Annotation {
        Annotation {
            tokens: vec![
                token("She", "PRON", "nsubj", 1, &[]),
                token("slept", "VERB", "ROOT", 1, &[0, 4]),
                token("because", "SCONJ", "mark", 4, &[]),
                token("it", "PRON", "nsubj", 4, &[]),
                token("rained", "VERB", "advcl", 1, &[2, 3]),
            ],
            sentences: vec![Sentence {
                root: 1,
                start: 0,
                end: 5,
            }],
        }
    }

    fn extract_fixed(doc: Annotation) -> FeatureMap {
        SyntacticExtractor::new(Box::new(FixedAnnotator { doc }))
            .extract("unused")
            .unwrap()
    }

    #[test]
    fn test_empty_annotation_returns_zero_map() {
        let features = extract_fixed(Annotation::default());
        assert_eq!(features.get("avg_sentence_length"), 0.0);
        assert_eq!(features.get("sentence_complexity"), 0.0);
        assert!(!features.iter().any(|(k, _)| k.starts_with("pos_")));
    }

    #[test]
    fn test_sentence_metrics() {
        let features = extract_fixed(sample_doc());
        assert_eq!(features.get("avg_sentence_length"), 5.0);
        // Two VERB tokens in the single sentence
        assert_eq!(features.get("sentence_complexity"), 2.0);
        // slept -> rained -> because is the longest path: depth 3
        assert_eq!(features.get("avg_parse_tree_depth"), 3.0);
        // Root has two direct children
        assert_eq!(features.get("parse_tree_breadth"), 2.0);
    }

    #[test]
    fn test_ratio_metrics() {
        let features = extract_fixed(sample_doc());
        // advcl is the only subordinate label: 1 of 5 tokens
        assert!((features.get("subordinate_clause_ratio") - 0.2).abs() < 1e-12);
        // PRON, PRON, SCONJ are function words: 3 of 5
        assert!((features.get("function_word_ratio") - 0.6).abs() < 1e-12);
        // Pairs: (nsubj,VERB) twice collapses; 4 unique over 5 tokens
        assert!((features.get("syntactic_diversity") - 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_dynamic_keys_are_lowercased() {
        let features = extract_fixed(sample_doc());
        assert!((features.get("pos_verb") - 0.4).abs() < 1e-12);
        assert!((features.get("pos_pron") - 0.4).abs() < 1e-12);
        assert!((features.get("dep_root") - 0.2).abs() < 1e-12);
        assert!((features.get("dep_nsubj") - 0.4).abs() < 1e-12);
    }

    #[test]
    fn test_cyclic_annotation_terminates() {
        // Two tokens pointing at each other; traversal must not hang
        let doc = Annotation {
            tokens: vec![
                token("a", "NOUN", "dep", 1, &[1]),
                token("b", "NOUN", "dep", 0, &[0]),
            ],
            sentences: vec![Sentence {
                root: 0,
                start: 0,
                end: 2,
            }],
        };
        let features = extract_fixed(doc);
        assert_eq!(features.get("avg_parse_tree_depth"), 2.0);
    }

    #[test]
    fn test_annotator_failure_propagates() {
        let extractor = SyntacticExtractor::new(Box::new(FailingAnnotator));
        let result = extractor.extract("anything");
        assert!(matches!(result, Err(ExtractionError::Annotation(_))));
    }

    #[test]
    fn test_deep_chain_does_not_overflow() {
        // A 50k-token left-spine chain; recursion would blow the stack
        let n = 50_000;
        let mut tokens = Vec::with_capacity(n);
        for i in 0..n {
            let children: Vec<usize> = if i + 1 < n { vec![i + 1] } else { vec![] };
            let head = i.saturating_sub(1);
            tokens.push(token("w", "NOUN", "dep", head, &children));
        }
        let doc = Annotation {
            tokens,
            sentences: vec![Sentence {
                root: 0,
                start: 0,
                end: n,
            }],
        };
        let features = extract_fixed(doc);
        assert_eq!(features.get("avg_parse_tree_depth"), n as f64);
    }

    #[test]
    fn test_works_with_heuristic_backend() {
        let extractor =
            SyntacticExtractor::new(Box::new(crate::annotation::HeuristicAnnotator::new()));
        let features = extractor
            .extract("The cat sat on the mat. The dog ran away because it was scared.")
            .unwrap();
        assert!(features.get("avg_sentence_length") > 0.0);
        assert!(features.get("sentence_complexity") > 0.0);
        assert!(features.get("function_word_ratio") > 0.0);
        assert!(features.iter().any(|(k, _)| k.starts_with("pos_")));
        assert!(features.iter().any(|(k, _)| k.starts_with("dep_")));
    }
}
