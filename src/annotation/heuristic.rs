//! Rule-based English annotation backend
//!
//! Closed-class lexicons plus suffix heuristics for POS tagging, and a
//! flat attachment scheme for dependencies: one root per sentence,
//! modifiers attached to the nearest plausible head, everything else to
//! the root. Nowhere near a statistical parser, but it produces valid
//! single-rooted trees with realistic label distributions, which is what
//! the syntactic metrics need.

use super::{Annotation, AnnotationError, LinguisticAnnotator, Sentence, Token};
use regex::Regex;
use rustc_hash::FxHashSet;

const DETERMINERS: &[&str] = &[
    "the", "a", "an", "this", "that", "these", "those", "each", "every", "some", "any", "no",
    "another", "such", "both", "either", "neither",
];

const PRONOUNS: &[&str] = &[
    "i", "you", "he", "she", "it", "we", "they", "me", "him", "her", "us", "them", "my", "your",
    "his", "its", "our", "their", "mine", "yours", "hers", "ours", "theirs", "myself", "yourself",
    "himself", "herself", "itself", "ourselves", "themselves", "who", "whom", "whose", "which",
    "what", "something", "anything", "nothing", "everything", "someone", "anyone", "everyone",
];

const AUXILIARIES: &[&str] = &[
    "is", "am", "are", "was", "were", "be", "been", "being", "have", "has", "had", "do", "does",
    "did", "will", "would", "shall", "should", "can", "could", "may", "might", "must",
];

const ADPOSITIONS: &[&str] = &[
    "in", "on", "at", "by", "for", "with", "from", "to", "of", "about", "into", "onto", "over",
    "under", "between", "through", "during", "against", "among", "within", "without", "across",
    "behind", "beyond", "near", "above", "below", "around", "off", "up", "down", "out", "toward",
    "towards", "upon", "per",
];

const COORDINATORS: &[&str] = &["and", "or", "but", "nor", "yet", "so"];

const SUBORDINATORS: &[&str] = &[
    "because", "although", "though", "while", "since", "unless", "whereas", "if", "when",
    "whenever", "where", "wherever", "after", "before", "until", "once", "as", "that", "whether",
];

const PARTICLES: &[&str] = &["not", "n't"];

// High-frequency verbs whose forms the suffix rules miss
const COMMON_VERBS: &[&str] = &[
    "say", "said", "says", "go", "went", "gone", "goes", "get", "got", "gets", "make", "made",
    "makes", "know", "knew", "known", "knows", "think", "thought", "thinks", "take", "took",
    "taken", "takes", "see", "saw", "seen", "sees", "come", "came", "comes", "want", "wants",
    "look", "looks", "use", "uses", "find", "found", "finds", "give", "gave", "given", "gives",
    "tell", "told", "tells", "work", "works", "call", "calls", "try", "tries", "ask", "asks",
    "need", "needs", "feel", "felt", "feels", "become", "became", "becomes", "leave", "left",
    "leaves", "put", "puts", "mean", "meant", "means", "keep", "kept", "keeps", "let", "lets",
    "begin", "began", "begun", "begins", "seem", "seems", "help", "helps", "show", "shows",
    "hear", "heard", "hears", "play", "plays", "run", "ran", "runs", "move", "moves", "live",
    "lives", "believe", "believes", "hold", "held", "holds", "bring", "brought", "brings",
    "write", "wrote", "written", "writes", "sit", "sat", "sits", "stand", "stood", "stands",
    "lose", "lost", "loses", "pay", "paid", "pays", "meet", "met", "meets", "set", "sets",
    "learn", "learned", "learns", "lead", "led", "leads", "read", "reads", "grow", "grew",
    "grows", "fall", "fell", "falls", "send", "sent", "sends", "build", "built", "builds",
    "stay", "stays", "eat", "ate", "eats", "walk", "walks", "speak", "spoke", "speaks",
];

const COMMON_ADJECTIVES: &[&str] = &[
    "good", "bad", "big", "small", "large", "old", "new", "young", "high", "low", "long",
    "short", "great", "little", "own", "other", "same", "right", "wrong", "early", "late",
    "important", "few", "many", "much", "more", "most", "less", "least", "first", "last",
    "next", "able", "best", "better", "free", "full", "hard", "easy", "clear", "strong",
    "whole", "real", "sure", "dark", "light", "quick", "slow", "happy", "sad",
];

/// Built-in rule-based `LinguisticAnnotator` backend.
pub struct HeuristicAnnotator {
    token_pattern: Regex,
    boundary_pattern: Regex,
    determiners: FxHashSet<&'static str>,
    pronouns: FxHashSet<&'static str>,
    auxiliaries: FxHashSet<&'static str>,
    adpositions: FxHashSet<&'static str>,
    coordinators: FxHashSet<&'static str>,
    subordinators: FxHashSet<&'static str>,
    particles: FxHashSet<&'static str>,
    verbs: FxHashSet<&'static str>,
    adjectives: FxHashSet<&'static str>,
}

impl HeuristicAnnotator {
    pub fn new() -> Self {
        Self {
            token_pattern: Regex::new(r"\w+|[^\w\s]").expect("static regex"),
            boundary_pattern: Regex::new(r"[.!?]+(?:\s+|$)").expect("static regex"),
            determiners: DETERMINERS.iter().copied().collect(),
            pronouns: PRONOUNS.iter().copied().collect(),
            auxiliaries: AUXILIARIES.iter().copied().collect(),
            adpositions: ADPOSITIONS.iter().copied().collect(),
            coordinators: COORDINATORS.iter().copied().collect(),
            subordinators: SUBORDINATORS.iter().copied().collect(),
            particles: PARTICLES.iter().copied().collect(),
            verbs: COMMON_VERBS.iter().copied().collect(),
            adjectives: COMMON_ADJECTIVES.iter().copied().collect(),
        }
    }

    /// Split text into sentence slices, keeping terminal punctuation with
    /// its sentence.
    fn sentence_slices<'a>(&self, text: &'a str) -> Vec<&'a str> {
        let mut slices = Vec::new();
        let mut last = 0;
        for boundary in self.boundary_pattern.find_iter(text) {
            let slice = &text[last..boundary.end()];
            if !slice.trim().is_empty() {
                slices.push(slice);
            }
            last = boundary.end();
        }
        let tail = &text[last..];
        if !tail.trim().is_empty() {
            slices.push(tail);
        }
        slices
    }

    fn tag(&self, token: &str) -> &'static str {
        if !token.chars().any(|c| c.is_alphanumeric()) {
            return "PUNCT";
        }
        if token.chars().all(|c| c.is_ascii_digit()) {
            return "NUM";
        }
        let lower = token.to_lowercase();
        let word = lower.as_str();
        if self.determiners.contains(word) {
            return "DET";
        }
        if self.pronouns.contains(word) {
            return "PRON";
        }
        if self.auxiliaries.contains(word) {
            return "AUX";
        }
        if self.adpositions.contains(word) {
            return "ADP";
        }
        if self.coordinators.contains(word) {
            return "CCONJ";
        }
        if self.subordinators.contains(word) {
            return "SCONJ";
        }
        if self.particles.contains(word) {
            return "PART";
        }
        if self.verbs.contains(word) {
            return "VERB";
        }
        if self.adjectives.contains(word) {
            return "ADJ";
        }
        self.tag_by_suffix(word)
    }

    fn tag_by_suffix(&self, word: &str) -> &'static str {
        let len = word.chars().count();
        if len >= 4 && word.ends_with("ly") {
            return "ADV";
        }
        if len >= 5 && (word.ends_with("ing") || word.ends_with("ed")) {
            return "VERB";
        }
        if len >= 5 && (word.ends_with("ize") || word.ends_with("ise") || word.ends_with("ify")) {
            return "VERB";
        }
        if len >= 5
            && (word.ends_with("ous")
                || word.ends_with("ful")
                || word.ends_with("ive")
                || word.ends_with("able")
                || word.ends_with("ible")
                || word.ends_with("ical"))
        {
            return "ADJ";
        }
        "NOUN"
    }

    /// Assign dependency labels and heads for the tokens of one sentence.
    ///
    /// `offset` is the arena index of the sentence's first token; `tags`
    /// and `texts` are sentence-local. Returns (sentence-local root,
    /// per-token (dep, head) with arena indices).
    fn attach(
        &self,
        offset: usize,
        texts: &[String],
        tags: &[&'static str],
    ) -> (usize, Vec<(String, usize)>) {
        let n = tags.len();
        let root_local = tags
            .iter()
            .position(|t| *t == "VERB" || *t == "AUX")
            .or_else(|| tags.iter().position(|t| *t != "PUNCT"))
            .unwrap_or(0);
        let root = offset + root_local;

        let next_with = |from: usize, wanted: &[&str]| -> Option<usize> {
            (from + 1..n)
                .find(|&j| wanted.contains(&tags[j]))
                .map(|j| offset + j)
        };

        let mut deps = Vec::with_capacity(n);
        for i in 0..n {
            if i == root_local {
                deps.push(("ROOT".to_string(), root));
                continue;
            }
            let (dep, head) = match tags[i] {
                "PUNCT" => ("punct", root),
                "DET" => ("det", next_with(i, &["NOUN"]).unwrap_or(root)),
                "ADJ" => ("amod", next_with(i, &["NOUN"]).unwrap_or(root)),
                "NUM" => ("nummod", next_with(i, &["NOUN"]).unwrap_or(root)),
                "ADP" => ("prep", root),
                "NOUN" | "PRON" => {
                    // Object of the closest preceding preposition, unless a
                    // noun already claimed it
                    let prep = (0..i)
                        .rev()
                        .take_while(|&j| tags[j] != "NOUN" && tags[j] != "PRON")
                        .find(|&j| tags[j] == "ADP");
                    match prep {
                        Some(j) => ("pobj", offset + j),
                        None if i < root_local => ("nsubj", root),
                        None => ("obj", root),
                    }
                }
                "AUX" => ("aux", root),
                "VERB" => {
                    if (0..i).any(|j| tags[j] == "SCONJ") {
                        ("advcl", root)
                    } else {
                        ("conj", root)
                    }
                }
                "ADV" => ("advmod", next_with(i, &["VERB", "AUX"]).unwrap_or(root)),
                "CCONJ" => ("cc", root),
                "SCONJ" => ("mark", next_with(i, &["VERB", "AUX"]).unwrap_or(root)),
                "PART" => {
                    let lower = texts[i].to_lowercase();
                    if lower == "not" || lower == "n't" {
                        ("neg", root)
                    } else {
                        ("prt", root)
                    }
                }
                _ => ("dep", root),
            };
            deps.push((dep.to_string(), head));
        }
        (root_local, deps)
    }
}

impl Default for HeuristicAnnotator {
    fn default() -> Self {
        Self::new()
    }
}

impl LinguisticAnnotator for HeuristicAnnotator {
    fn name(&self) -> &'static str {
        "heuristic"
    }

    fn annotate(&self, text: &str) -> Result<Annotation, AnnotationError> {
        let mut doc = Annotation::default();
        for slice in self.sentence_slices(text) {
            let texts: Vec<String> = self
                .token_pattern
                .find_iter(slice)
                .map(|m| m.as_str().to_string())
                .collect();
            if texts.is_empty() {
                continue;
            }
            let tags: Vec<&'static str> = texts.iter().map(|t| self.tag(t)).collect();

            let offset = doc.tokens.len();
            let (root_local, deps) = self.attach(offset, &texts, &tags);

            for ((text, tag), (dep, head)) in texts.into_iter().zip(&tags).zip(deps) {
                doc.tokens.push(Token {
                    text,
                    pos: tag.to_string(),
                    dep,
                    head,
                    children: Vec::new(),
                });
            }
            let start = offset;
            let end = doc.tokens.len();
            for i in start..end {
                let head = doc.tokens[i].head;
                if head != i {
                    doc.tokens[head].children.push(i);
                }
            }
            doc.sentences.push(Sentence {
                root: offset + root_local,
                start,
                end,
            });
        }
        Ok(doc)
    }
}
