//! Vocabulary metrics: diversity, long-word usage, word-list hits.

use std::collections::HashSet;

use crate::tokenizer::EssayTokens;

/// Words longer than this many characters count as "long".
const LONG_WORD_LEN: usize = 7;

/// Lexical measurements over one essay.
#[derive(Debug, Clone, Default)]
pub struct LexicalMetrics {
    pub word_count: usize,
    pub unique_word_count: usize,
    /// Distinct words as a percentage of all words, one decimal, 0 when the
    /// essay is empty.
    pub vocab_diversity_percent: f64,
    pub long_word_count: usize,
    pub unique_long_word_count: usize,
    /// Distinct essay words found in the high-frequency list.
    pub high_freq_count: usize,
    /// Distinct essay words found in the advanced list, sorted.
    pub used_advanced_words: Vec<String>,
    /// Vocabulary sub-score, capped at 2.0.
    pub vocab_score: f64,
}

/// Compute lexical metrics against the two caller-supplied word lists.
///
/// List matching is set-based and case-insensitive: a high-frequency word
/// repeated five times in the essay still counts once.
pub fn analyze(
    tokens: &EssayTokens,
    high_frequency_words: &[String],
    advanced_words: &[String],
) -> LexicalMetrics {
    let word_count = tokens.word_count();
    if word_count == 0 {
        return LexicalMetrics::default();
    }

    let lowered: Vec<String> = tokens.words.iter().map(|w| w.to_lowercase()).collect();
    let unique: HashSet<&str> = lowered.iter().map(String::as_str).collect();
    let unique_word_count = unique.len();

    let long_word_count = tokens
        .words
        .iter()
        .filter(|w| w.chars().count() > LONG_WORD_LEN)
        .count();
    let unique_long_word_count = lowered
        .iter()
        .filter(|w| w.chars().count() > LONG_WORD_LEN)
        .collect::<HashSet<_>>()
        .len();

    let high_freq_set: HashSet<String> =
        high_frequency_words.iter().map(|w| w.to_lowercase()).collect();
    let advanced_set: HashSet<String> = advanced_words.iter().map(|w| w.to_lowercase()).collect();

    let high_freq_count = unique.iter().filter(|w| high_freq_set.contains(**w)).count();

    // Sorted so the result is deterministic regardless of hash ordering.
    let mut used_advanced_words: Vec<String> = unique
        .iter()
        .filter(|w| advanced_set.contains(**w))
        .map(|w| (*w).to_string())
        .collect();
    used_advanced_words.sort();

    let wc = word_count as f64;
    let vocab_diversity_percent = round1(unique_word_count as f64 / wc * 100.0);
    let vocab_score =
        (unique_word_count as f64 / wc * 10.0 + long_word_count as f64 / wc * 10.0).min(2.0);

    LexicalMetrics {
        word_count,
        unique_word_count,
        vocab_diversity_percent,
        long_word_count,
        unique_long_word_count,
        high_freq_count,
        used_advanced_words,
        vocab_score,
    }
}

pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
