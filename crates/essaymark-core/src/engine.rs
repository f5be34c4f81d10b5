//! The evaluation pipeline: tokenize, analyze, score.

use tracing::debug;

use crate::argument;
use crate::lexical::{self, round1};
use crate::results::{ArgumentReport, EssayMetrics, EvaluationResult, ScoreBreakdown, TopicReport};
use crate::scorer;
use crate::structure;
use crate::tokenizer;
use crate::topic;

/// Thesis statements earn a flat content bonus.
const THESIS_BONUS: f64 = 0.5;

/// Evaluate one essay against a prompt and two vocabulary lists.
///
/// Pure and infallible: degenerate input (empty text, empty prompt, empty
/// lists) degrades to zero metrics and the 1.0 score floor rather than an
/// error. Identical inputs always yield identical results.
pub fn evaluate(
    text: &str,
    prompt: &str,
    high_frequency_words: &[String],
    advanced_words: &[String],
) -> EvaluationResult {
    let tokens = tokenizer::tokenize(text);
    debug!(
        words = tokens.words.len(),
        sentences = tokens.sentences.len(),
        paragraphs = tokens.paragraphs.len(),
        "tokenized essay"
    );

    let lexical = lexical::analyze(&tokens, high_frequency_words, advanced_words);
    let structure = structure::analyze(&tokens);
    let topic = topic::analyze(&tokens, prompt, &structure);
    let argument = argument::analyze(text, structure.meaningful_body_count);

    let word_count_score = scorer::word_count_score(lexical.word_count);
    let sentence = scorer::sentence_stats(&tokens);
    let coherence = scorer::coherence_score(text, structure.paragraph_count);

    let nlp_style_score =
        (lexical.vocab_score + sentence.variety_score + coherence).min(6.0);

    let raw_content_score = topic.topic_score
        + topic.paraphrase_bonus
        + argument.argument_score
        + word_count_score
        + structure.structure_score
        + if structure.has_thesis { THESIS_BONUS } else { 0.0 };

    let final_score = scorer::final_score(raw_content_score, nlp_style_score);
    debug!(final_score, raw_content_score, nlp_style_score, "scored essay");

    EvaluationResult {
        final_score,
        raw_content_score,
        nlp_style_score,
        breakdown: ScoreBreakdown {
            topic_relevance: topic.topic_score + topic.paraphrase_bonus,
            argument_quality: argument.argument_score,
            word_count: word_count_score,
            structure: structure.structure_score,
            nlp_style: nlp_style_score,
        },
        topic_analysis: TopicReport {
            direct_address: topic.direct_address,
            has_position: structure.has_thesis,
            prompt_term_usage: topic.overlap_count,
        },
        argument_analysis: ArgumentReport {
            has_examples: argument.has_examples,
            has_reasoning: argument.has_reasoning,
            has_counter_arguments: argument.has_counter_arguments,
            conclusion_present: structure.has_conclusion,
        },
        metrics: EssayMetrics {
            word_count: lexical.word_count,
            unique_words: lexical.unique_word_count,
            avg_sentence_length: round1(sentence.avg_sentence_length),
            paragraph_count: structure.paragraph_count,
            high_freq_count: lexical.high_freq_count,
            used_advanced_words: lexical.used_advanced_words,
            long_word_count: lexical.long_word_count,
            unique_long_word_count: lexical.unique_long_word_count,
            vocab_diversity_percent: lexical.vocab_diversity_percent,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(n: usize, seed: &str) -> String {
        (0..n).map(|i| format!("{seed}{i}")).collect::<Vec<_>>().join(" ")
    }

    /// A well-formed five-paragraph essay used by several tests.
    fn sample_essay() -> String {
        format!(
            "I believe that cities must invest in public transportation because it \
             shapes how people live and work. {intro}\n\n\
             Firstly, transit reduces congestion. For example, metro systems move \
             thousands of commuters every hour. {body1}\n\n\
             Moreover, public transportation lowers emissions because fewer cars \
             idle in traffic. This shows a direct environmental benefit. {body2}\n\n\
             However, some may argue that buses are expensive. On the other hand, \
             road maintenance costs far more over a decade. {body3}\n\n\
             In conclusion, cities should fund transit first. {concl}",
            intro = words(25, "in"),
            body1 = words(50, "ba"),
            body2 = words(50, "bb"),
            body3 = words(50, "bc"),
            concl = words(30, "cn"),
        )
    }

    const PROMPT: &str = "Should cities invest more in public transportation";

    #[test]
    fn evaluation_is_deterministic() {
        let essay = sample_essay();
        let hf = vec!["transit".to_string(), "cities".to_string()];
        let adv = vec!["congestion".to_string(), "emissions".to_string()];
        let a = evaluate(&essay, PROMPT, &hf, &adv);
        let b = evaluate(&essay, PROMPT, &hf, &adv);
        assert_eq!(a, b);
    }

    #[test]
    fn empty_essay_hits_the_floor() {
        let r = evaluate("", "anything", &[], &[]);
        assert_eq!(r.final_score, 1.0);
        assert_eq!(r.metrics.word_count, 0);
        assert_eq!(r.metrics.paragraph_count, 0);
        assert_eq!(r.metrics.vocab_diversity_percent, 0.0);
        assert_eq!(r.nlp_style_score, 0.0);
        assert_eq!(r.raw_content_score, 0.0);
    }

    #[test]
    fn scores_stay_within_bounds() {
        let inputs = [
            String::new(),
            "one".to_string(),
            "word. ".repeat(700),
            sample_essay(),
        ];
        for text in &inputs {
            let r = evaluate(text, PROMPT, &[], &[]);
            assert!((1.0..=6.0).contains(&r.final_score), "final {}", r.final_score);
            assert!((0.0..=6.0).contains(&r.nlp_style_score));
            assert!((0.0..=100.0).contains(&r.metrics.vocab_diversity_percent));
            assert!(r.final_score.is_finite());
        }
    }

    #[test]
    fn word_count_tier_is_monotone_at_550() {
        let full: Vec<String> = (0..550).map(|i| format!("w{i}")).collect();
        let at_550 = evaluate(&full.join(" "), PROMPT, &[], &[]);
        let at_549 = evaluate(&full[..549].join(" "), PROMPT, &[], &[]);
        assert!(at_550.breakdown.word_count >= at_549.breakdown.word_count);
        assert_eq!(at_550.breakdown.word_count, 1.0);
        assert_eq!(at_549.breakdown.word_count, 0.9);
    }

    #[test]
    fn repeated_high_freq_word_counts_once() {
        let hf = vec!["growth".to_string()];
        let r = evaluate("growth growth growth growth growth", "economy", &hf, &[]);
        assert_eq!(r.metrics.high_freq_count, 1);
    }

    #[test]
    fn thesis_in_first_paragraph_sets_position() {
        let essay = "I believe that strict environmental regulation should be mandatory \
                     for all industries.\n\nIndustry emits most of the carbon we measure.";
        let r = evaluate(essay, "environmental regulation", &[], &[]);
        assert!(r.topic_analysis.has_position);
    }

    #[test]
    fn off_topic_essay_has_low_relevance() {
        let essay = "cats love milk ".repeat(300);
        let r = evaluate(
            &essay,
            "Should cities invest more in public transportation?",
            &[],
            &[],
        );
        assert!(!r.topic_analysis.direct_address);
        assert!(r.breakdown.topic_relevance <= 0.5);
    }

    #[test]
    fn five_paragraph_essay_earns_full_structure() {
        let r = evaluate(&sample_essay(), PROMPT, &[], &[]);
        assert_eq!(r.breakdown.structure, 1.5);
        assert!(r.argument_analysis.has_examples);
        assert!(r.argument_analysis.has_counter_arguments);
        assert!(r.argument_analysis.conclusion_present);
    }

    #[test]
    fn advanced_words_flow_into_metrics() {
        let adv = vec!["ubiquitous".to_string(), "ephemeral".to_string()];
        let r = evaluate(
            "Smartphones are ubiquitous devices. Fashion is ephemeral by nature.",
            "technology",
            &[],
            &adv,
        );
        assert_eq!(r.metrics.used_advanced_words, vec!["ephemeral", "ubiquitous"]);
    }

    #[test]
    fn sample_essay_scores_in_upper_band() {
        let r = evaluate(&sample_essay(), PROMPT, &[], &[]);
        // Thesis, full structure, all argument devices, strong topic overlap.
        assert!(r.topic_analysis.has_position);
        assert!(r.final_score >= 4.0, "got {}", r.final_score);
    }
}
