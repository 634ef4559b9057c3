//! Document cleaning with two output views
//!
//! The structural and readability extractors need paragraph breaks and
//! sentence-terminal punctuation; the lexical extractor wants bare words.
//! A single aggressively-stripped string cannot serve both, so cleaning
//! produces both views and the pipeline routes each extractor to the one
//! its metrics are defined on.

use regex::Regex;

/// Both views of a cleaned document.
#[derive(Debug, Clone)]
pub struct CleanedText {
    analysis: String,
    lexical: String,
}

impl CleanedText {
    /// Light normalization only: line endings normalized, control
    /// characters dropped. Paragraph breaks, sentence punctuation,
    /// casing, and whitespace are preserved.
    pub fn analysis(&self) -> &str {
        &self.analysis
    }

    /// Lowercased, stripped of everything but ASCII letters and spaces,
    /// whitespace runs collapsed to single spaces.
    pub fn lexical(&self) -> &str {
        &self.lexical
    }
}

/// Cleans raw extracted text into the two analysis views.
pub struct TextCleaner {
    non_letter: Regex,
}

impl TextCleaner {
    pub fn new() -> Self {
        Self {
            non_letter: Regex::new(r"[^a-zA-Z\s]").expect("static regex"),
        }
    }

    pub fn clean(&self, raw: &str) -> CleanedText {
        CleanedText {
            analysis: self.analysis_view(raw),
            lexical: self.lexical_view(raw),
        }
    }

    fn analysis_view(&self, raw: &str) -> String {
        let normalized = raw.replace("\r\n", "\n").replace('\r', "\n");
        normalized
            .chars()
            .filter(|c| !c.is_control() || *c == '\n' || *c == '\t')
            .collect()
    }

    fn lexical_view(&self, raw: &str) -> String {
        let lowered = raw.to_lowercase();
        let stripped = self.non_letter.replace_all(&lowered, "");
        stripped.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}

impl Default for TextCleaner {
    fn default() -> Self {
        Self::new()
    }
}
