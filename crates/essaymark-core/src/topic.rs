//! Topical relevance: lexical overlap between the prompt and the essay.

use std::collections::HashSet;

use crate::structure::StructureAnalysis;
use crate::tokenizer::EssayTokens;

/// How much of the prompt's opening must reappear verbatim to count as a
/// direct reference.
const DIRECT_REFERENCE_PREFIX_CHARS: usize = 80;

/// Topical-relevance signals for one essay.
#[derive(Debug, Clone, Default)]
pub struct TopicAnalysis {
    /// Prompt terms (with repeats) found among the essay's words.
    pub overlap_count: usize,
    /// Overlap as a fraction of all qualifying prompt terms.
    pub overlap_ratio: f64,
    /// Tiered relevance sub-score, max 1.5.
    pub topic_score: f64,
    /// True when the essay's opening quotes the start of the prompt.
    pub direct_prompt_reference: bool,
    /// 0.5 when the opening engages the prompt, either by strong overlap
    /// under a real introduction or by quoting it directly.
    pub paraphrase_bonus: f64,
    pub direct_address: bool,
}

/// Measure how directly the essay engages the prompt.
pub fn analyze(tokens: &EssayTokens, prompt: &str, structure: &StructureAnalysis) -> TopicAnalysis {
    let prompt_lower = prompt.to_lowercase();

    // Qualifying prompt terms: longer than 3 chars and not pure numbers.
    let prompt_terms: Vec<&str> = prompt_lower
        .split_whitespace()
        .filter(|t| t.chars().count() > 3 && t.parse::<f64>().is_err())
        .collect();

    let essay_words: HashSet<String> = tokens.words.iter().map(|w| w.to_lowercase()).collect();

    let overlap_count = prompt_terms
        .iter()
        .filter(|t| essay_words.contains(**t))
        .count();
    let overlap_ratio = if prompt_terms.is_empty() {
        0.0
    } else {
        overlap_count as f64 / prompt_terms.len() as f64
    };

    let topic_score = if overlap_ratio > 0.5 {
        1.5
    } else if overlap_ratio > 0.3 {
        1.0
    } else if overlap_ratio > 0.1 {
        0.5
    } else {
        0.0
    };

    let prompt_prefix: String = prompt_lower
        .chars()
        .take(DIRECT_REFERENCE_PREFIX_CHARS)
        .collect();
    let direct_prompt_reference =
        !prompt_prefix.is_empty() && structure.opening_lower.contains(&prompt_prefix);

    let paraphrase_bonus = if (overlap_ratio > 0.3 && structure.has_intro) || direct_prompt_reference
    {
        0.5
    } else {
        0.0
    };

    TopicAnalysis {
        overlap_count,
        overlap_ratio,
        topic_score,
        direct_prompt_reference,
        paraphrase_bonus,
        direct_address: overlap_ratio > 0.3,
    }
}
