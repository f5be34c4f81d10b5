//! Text segmentation: words, sentences, paragraphs.
//!
//! Everything downstream operates on these three views of the essay. The
//! rules are deliberately simple and deterministic: words are maximal
//! non-whitespace runs, sentences end at `.`, `!` or `?`, and paragraphs
//! are separated by blank lines.

use once_cell::sync::Lazy;
use regex::Regex;

static SENTENCE_BOUNDARY: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+").unwrap());
static PARAGRAPH_BOUNDARY: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n\s*\n").unwrap());
static INNER_NEWLINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*\n\s*").unwrap());

/// The tokenized views of a single essay.
#[derive(Debug, Clone, Default)]
pub struct EssayTokens {
    /// Maximal non-whitespace runs, in order of appearance.
    pub words: Vec<String>,
    /// Trimmed, non-empty segments between sentence terminators.
    pub sentences: Vec<String>,
    /// Trimmed, non-empty blocks between blank-line boundaries, with
    /// internal single newlines collapsed to spaces.
    pub paragraphs: Vec<String>,
}

impl EssayTokens {
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    pub fn paragraph_count(&self) -> usize {
        self.paragraphs.len()
    }
}

/// Split raw essay text into words, sentences, and paragraphs.
///
/// Empty or whitespace-only input yields zero of each; callers guard their
/// own divisions against that.
pub fn tokenize(text: &str) -> EssayTokens {
    let normalized = text.replace("\r\n", "\n");

    let words = normalized
        .split_whitespace()
        .map(str::to_string)
        .collect::<Vec<_>>();

    let sentences = SENTENCE_BOUNDARY
        .split(&normalized)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect::<Vec<_>>();

    let paragraphs = PARAGRAPH_BOUNDARY
        .split(&normalized)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(|p| INNER_NEWLINE.replace_all(p, " ").into_owned())
        .collect::<Vec<_>>();

    EssayTokens {
        words,
        sentences,
        paragraphs,
    }
}

/// Count the whitespace-separated words in one paragraph or sentence.
pub fn count_words(segment: &str) -> usize {
    segment.split_whitespace().count()
}
