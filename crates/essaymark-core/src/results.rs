//! The evaluation result model returned to callers.

use serde::{Deserialize, Serialize};

/// The complete score report for one essay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    /// Normalized holistic score, 1.0–6.0 in one-decimal steps.
    pub final_score: f64,
    /// Pre-normalization content score (topic + argument + length +
    /// structure + thesis), max ~7.5.
    pub raw_content_score: f64,
    /// Vocabulary / sentence-variety / coherence score, 0–6.
    pub nlp_style_score: f64,
    pub breakdown: ScoreBreakdown,
    pub topic_analysis: TopicReport,
    pub argument_analysis: ArgumentReport,
    pub metrics: EssayMetrics,
}

/// Per-category sub-scores feeding the final score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Topical relevance including the paraphrase bonus, max 2.0.
    pub topic_relevance: f64,
    /// Argumentation quality, max 2.5.
    pub argument_quality: f64,
    /// Essay-length tier, max 1.0.
    pub word_count: f64,
    /// Structural completeness, max 1.5.
    pub structure: f64,
    /// Style score as fed into the final combination, 0–6.
    pub nlp_style: f64,
}

/// How the essay engages with the prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicReport {
    /// More than 30% of qualifying prompt terms reappear in the essay.
    pub direct_address: bool,
    /// A thesis/position statement was detected in the opening.
    pub has_position: bool,
    /// Number of qualifying prompt terms (with repeats) found in the essay.
    pub prompt_term_usage: usize,
}

/// Which argumentation devices were found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArgumentReport {
    pub has_examples: bool,
    pub has_reasoning: bool,
    pub has_counter_arguments: bool,
    pub conclusion_present: bool,
}

/// Raw text measurements, reported for display alongside the scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EssayMetrics {
    pub word_count: usize,
    pub unique_words: usize,
    /// Mean words per sentence, one decimal, 0 when there are no sentences.
    pub avg_sentence_length: f64,
    pub paragraph_count: usize,
    /// Distinct essay words found in the high-frequency list.
    pub high_freq_count: usize,
    /// Distinct essay words found in the advanced list, sorted.
    pub used_advanced_words: Vec<String>,
    pub long_word_count: usize,
    pub unique_long_word_count: usize,
    /// Distinct words as a percentage of all words, 0–100.
    pub vocab_diversity_percent: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn result_round_trips_through_json() {
        let result = EvaluationResult {
            final_score: 4.5,
            raw_content_score: 5.5,
            nlp_style_score: 4.2,
            breakdown: ScoreBreakdown {
                topic_relevance: 2.0,
                argument_quality: 2.5,
                word_count: 0.75,
                structure: 1.5,
                nlp_style: 4.2,
            },
            topic_analysis: TopicReport {
                direct_address: true,
                has_position: true,
                prompt_term_usage: 5,
            },
            argument_analysis: ArgumentReport {
                has_examples: true,
                has_reasoning: true,
                has_counter_arguments: false,
                conclusion_present: true,
            },
            metrics: EssayMetrics {
                word_count: 412,
                unique_words: 208,
                avg_sentence_length: 17.2,
                paragraph_count: 5,
                high_freq_count: 12,
                used_advanced_words: vec!["pragmatic".into(), "ubiquitous".into()],
                long_word_count: 40,
                unique_long_word_count: 31,
                vocab_diversity_percent: 50.5,
            },
        };

        let json = serde_json::to_string(&result).unwrap();
        let back: EvaluationResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
    }
}
