//! Argumentation signals: examples, causal reasoning, counter-arguments.

use crate::patterns::{any_match, COUNTER_PATTERNS, EXAMPLE_PATTERNS, REASONING_PATTERNS};

/// Argumentation signals for one essay.
#[derive(Debug, Clone, Default)]
pub struct ArgumentAnalysis {
    pub has_examples: bool,
    pub has_reasoning: bool,
    pub has_counter_arguments: bool,
    /// Argumentation sub-score, max 2.5: a body-development tier plus 0.5
    /// per detected category.
    pub argument_score: f64,
}

/// Scan the full essay text for argumentation markers.
///
/// `meaningful_body_count` comes from the structural analyzer; essays with
/// at least two substantial body paragraphs earn the full development tier.
pub fn analyze(text: &str, meaningful_body_count: usize) -> ArgumentAnalysis {
    let has_examples = any_match(&EXAMPLE_PATTERNS, text);
    let has_reasoning = any_match(&REASONING_PATTERNS, text);
    let has_counter_arguments = any_match(&COUNTER_PATTERNS, text);

    let development = if meaningful_body_count >= 2 {
        1.0
    } else if meaningful_body_count >= 1 {
        0.5
    } else {
        0.0
    };

    let argument_score = development
        + if has_examples { 0.5 } else { 0.0 }
        + if has_reasoning { 0.5 } else { 0.0 }
        + if has_counter_arguments { 0.5 } else { 0.0 };

    ArgumentAnalysis {
        has_examples,
        has_reasoning,
        has_counter_arguments,
        argument_score,
    }
}
