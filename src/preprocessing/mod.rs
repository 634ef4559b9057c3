//! Text normalization ahead of feature extraction
//!
//! Produces the two views of a cleaned document:
//! - analysis view: punctuation, casing, and paragraph breaks intact
//! - lexical view: aggressively stripped, for pure word statistics

mod text_cleaner;

pub use text_cleaner::{CleanedText, TextCleaner};
