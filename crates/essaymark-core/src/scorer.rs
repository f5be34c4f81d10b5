//! Score aggregation and normalization.
//!
//! Combines the analyzer outputs into the final 1.0–6.0 band. The tier
//! thresholds, the 0.9/0.1 content/style split, and the 7.35 normalization
//! divisor are contractual values; fixtures assert exact outputs.

use crate::lexical::round1;
use crate::patterns::TRANSITION_TERMS;
use crate::tokenizer::{count_words, EssayTokens};

/// Maximum combined score before normalization: 7.5 raw * 0.9 + 6.0 style * 0.1.
const NORMALIZATION_DIVISOR: f64 = 7.35;
const CONTENT_WEIGHT: f64 = 0.9;
const STYLE_WEIGHT: f64 = 0.1;

/// Sentence-level style measurements.
#[derive(Debug, Clone, Default)]
pub struct SentenceStats {
    pub avg_sentence_length: f64,
    pub std_dev: f64,
    pub longest_sentence_words: usize,
    /// Sentence-variety sub-score, max 2.0.
    pub variety_score: f64,
}

/// Tiered score for total essay length, max 1.0.
pub fn word_count_score(word_count: usize) -> f64 {
    match word_count {
        n if n >= 550 => 1.0,
        n if n >= 450 => 0.9,
        n if n >= 350 => 0.75,
        n if n >= 250 => 0.5,
        n if n >= 150 => 0.25,
        _ => 0.0,
    }
}

/// Per-sentence length statistics and the variety sub-score.
pub fn sentence_stats(tokens: &EssayTokens) -> SentenceStats {
    let lengths: Vec<f64> = tokens
        .sentences
        .iter()
        .map(|s| count_words(s) as f64)
        .collect();
    if lengths.is_empty() {
        return SentenceStats::default();
    }

    let n = lengths.len() as f64;
    let avg = lengths.iter().sum::<f64>() / n;
    let variance = lengths.iter().map(|l| (l - avg).powi(2)).sum::<f64>() / n;
    let std_dev = variance.sqrt();
    let longest = lengths.iter().cloned().fold(0.0, f64::max) as usize;

    let mut variety_score: f64 = 0.0;
    if std_dev > 8.0 {
        variety_score += 1.0;
    }
    if avg > 18.0 {
        variety_score += 0.5;
    }
    if longest > 30 {
        variety_score += 0.5;
    }

    SentenceStats {
        avg_sentence_length: avg,
        std_dev,
        longest_sentence_words: longest,
        variety_score: variety_score.min(2.0),
    }
}

/// Coherence sub-score from transition-term usage, max 2.0.
///
/// Each of the fixed transition terms counts once if it appears anywhere in
/// the text, however often it repeats.
pub fn coherence_score(text: &str, paragraph_count: usize) -> f64 {
    let lower = text.to_lowercase();
    let present = TRANSITION_TERMS
        .iter()
        .filter(|term| lower.contains(**term))
        .count() as f64;

    let spread = if paragraph_count > 1 {
        present / paragraph_count as f64 * 0.5
    } else {
        0.0
    };

    (present * 0.2 + spread).min(2.0)
}

/// Combine the content and style totals into the final 1.0–6.0 band.
pub fn final_score(raw_content: f64, nlp_style: f64) -> f64 {
    let combined = raw_content * CONTENT_WEIGHT + nlp_style * STYLE_WEIGHT;
    let scaled = round1(combined / NORMALIZATION_DIVISOR * 6.0);
    scaled.clamp(1.0, 6.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::tokenize;

    #[test]
    fn word_count_tiers() {
        assert_eq!(word_count_score(0), 0.0);
        assert_eq!(word_count_score(149), 0.0);
        assert_eq!(word_count_score(150), 0.25);
        assert_eq!(word_count_score(250), 0.5);
        assert_eq!(word_count_score(350), 0.75);
        assert_eq!(word_count_score(450), 0.9);
        assert_eq!(word_count_score(549), 0.9);
        assert_eq!(word_count_score(550), 1.0);
        assert_eq!(word_count_score(2000), 1.0);
    }

    #[test]
    fn sentence_stats_empty_input() {
        let stats = sentence_stats(&tokenize(""));
        assert_eq!(stats.avg_sentence_length, 0.0);
        assert_eq!(stats.variety_score, 0.0);
    }

    #[test]
    fn uniform_sentences_have_zero_deviation() {
        let stats = sentence_stats(&tokenize("one two three. four five six. seven eight nine."));
        assert_eq!(stats.avg_sentence_length, 3.0);
        assert_eq!(stats.std_dev, 0.0);
        assert_eq!(stats.variety_score, 0.0);
    }

    #[test]
    fn long_average_and_long_sentence_both_score() {
        // One 35-word sentence: avg 35 > 18, longest 35 > 30.
        let sentence = (0..35).map(|i| format!("w{i}")).collect::<Vec<_>>().join(" ");
        let stats = sentence_stats(&tokenize(&format!("{sentence}.")));
        assert_eq!(stats.variety_score, 1.0);
    }

    #[test]
    fn coherence_counts_each_term_once() {
        let text = "However, trade grew. However, it also slowed. Therefore we adapt.";
        // Two distinct terms, one paragraph: 2 * 0.2 = 0.4.
        assert!((coherence_score(text, 1) - 0.4).abs() < 1e-9);
    }

    #[test]
    fn coherence_rewards_spread_across_paragraphs() {
        let text = "However and therefore and moreover.";
        // 3 terms, 3 paragraphs: 0.6 + 3/3 * 0.5 = 1.1.
        assert!((coherence_score(text, 3) - 1.1).abs() < 1e-9);
    }

    #[test]
    fn coherence_is_capped_at_two() {
        let text = TRANSITION_TERMS.join(" ");
        assert_eq!(coherence_score(&text, 2), 2.0);
    }

    #[test]
    fn final_score_is_clamped_to_band() {
        assert_eq!(final_score(0.0, 0.0), 1.0);
        assert_eq!(final_score(7.5, 6.0), 6.0);
    }

    #[test]
    fn final_score_rounds_to_one_decimal() {
        let score = final_score(4.0, 3.0);
        // 4.0 * 0.9 + 3.0 * 0.1 = 3.9; 3.9 / 7.35 * 6 = 3.1836... -> 3.2.
        assert_eq!(score, 3.2);
    }
}
