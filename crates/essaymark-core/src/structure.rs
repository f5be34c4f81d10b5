//! Paragraph-level structure: introduction, conclusion, body, thesis.

use crate::patterns::{any_match, STANCE_KEYWORDS, THESIS_PATTERNS};
use crate::tokenizer::{count_words, EssayTokens};

/// Minimum opening length before the stance-keyword fallback may fire.
const FALLBACK_MIN_OPENING_WORDS: usize = 40;

/// Structural signals for one essay.
#[derive(Debug, Clone, Default)]
pub struct StructureAnalysis {
    pub paragraph_count: usize,
    pub has_intro: bool,
    pub has_conclusion: bool,
    /// Body paragraphs (intro/conclusion excluded once detected) carrying
    /// more than 50 words.
    pub meaningful_body_count: usize,
    pub has_thesis: bool,
    /// Structure sub-score, capped at 1.5.
    pub structure_score: f64,
    /// First two paragraphs joined, lowercased. Reused by the topical
    /// analyzer for direct-reference detection.
    pub opening_lower: String,
    pub opening_word_count: usize,
}

/// Analyze paragraph structure and detect a thesis statement.
pub fn analyze(tokens: &EssayTokens) -> StructureAnalysis {
    let paragraphs = &tokens.paragraphs;
    let paragraph_count = paragraphs.len();

    let intro = paragraphs.first().map(String::as_str).unwrap_or("");
    let conclusion = if paragraph_count > 1 {
        paragraphs.last().map(String::as_str).unwrap_or("")
    } else {
        ""
    };

    let has_intro = count_words(intro) > 30;
    let has_conclusion = count_words(conclusion) > 30 && paragraph_count > 2;

    let body_start = usize::from(has_intro);
    let body_end = paragraph_count - usize::from(has_conclusion);
    let meaningful_body_count = paragraphs
        .get(body_start..body_end)
        .unwrap_or(&[])
        .iter()
        .filter(|p| count_words(p) > 50)
        .count();

    let mut structure_score = 0.0;
    if has_intro {
        structure_score += 0.5;
    }
    if has_conclusion {
        structure_score += 0.5;
    }
    if paragraph_count >= 4 && meaningful_body_count >= 2 {
        structure_score += 0.5;
    }

    let opening_lower = paragraphs
        .iter()
        .take(2)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();
    let opening_word_count = count_words(&opening_lower);

    let has_thesis = any_match(&THESIS_PATTERNS, &opening_lower)
        || (STANCE_KEYWORDS.is_match(&opening_lower)
            && opening_word_count > FALLBACK_MIN_OPENING_WORDS);

    StructureAnalysis {
        paragraph_count,
        has_intro,
        has_conclusion,
        meaningful_body_count,
        has_thesis,
        structure_score,
        opening_lower,
        opening_word_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::tokenize;

    fn paragraph(words: usize, seed: &str) -> String {
        (0..words)
            .map(|i| format!("{seed}{i}"))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn essay(paragraphs: &[String]) -> EssayTokens {
        tokenize(&paragraphs.join("\n\n"))
    }

    #[test]
    fn empty_essay_has_no_structure() {
        let s = analyze(&tokenize(""));
        assert_eq!(s.paragraph_count, 0);
        assert!(!s.has_intro);
        assert!(!s.has_conclusion);
        assert_eq!(s.structure_score, 0.0);
    }

    #[test]
    fn short_intro_does_not_count() {
        let s = analyze(&essay(&[paragraph(20, "w")]));
        assert!(!s.has_intro);
    }

    #[test]
    fn conclusion_requires_three_paragraphs() {
        // Two paragraphs: the second can never be a conclusion.
        let s = analyze(&essay(&[paragraph(40, "a"), paragraph(40, "b")]));
        assert!(s.has_intro);
        assert!(!s.has_conclusion);
    }

    #[test]
    fn five_paragraph_essay_earns_full_structure_score() {
        let s = analyze(&essay(&[
            paragraph(40, "intro"),
            paragraph(60, "bodya"),
            paragraph(60, "bodyb"),
            paragraph(60, "bodyc"),
            paragraph(35, "concl"),
        ]));
        assert!(s.has_intro);
        assert!(s.has_conclusion);
        assert_eq!(s.meaningful_body_count, 3);
        assert_eq!(s.structure_score, 1.5);
    }

    #[test]
    fn detected_conclusion_is_excluded_from_body_count() {
        let s = analyze(&essay(&[
            paragraph(40, "intro"),
            paragraph(60, "bodya"),
            paragraph(60, "bodyb"),
            paragraph(60, "concl"),
        ]));
        assert!(s.has_conclusion);
        assert_eq!(s.meaningful_body_count, 2);
    }

    #[test]
    fn thesis_detected_from_stance_pattern() {
        let text = "I believe that strict environmental regulation should be mandatory \
                    for all industries in every country.";
        let s = analyze(&tokenize(text));
        assert!(s.has_thesis);
    }

    #[test]
    fn fallback_needs_more_than_forty_words() {
        // "should" appears but the opening is too short for the fallback.
        let s = analyze(&tokenize("Cities should build more parks."));
        assert!(!s.has_thesis);

        let long_opening = format!("Cities should build more parks. {}", paragraph(45, "filler"));
        let s = analyze(&tokenize(&long_opening));
        assert!(s.has_thesis);
    }

    #[test]
    fn thesis_scans_only_first_two_paragraphs() {
        let s = analyze(&essay(&[
            paragraph(10, "one"),
            paragraph(10, "two"),
            "I believe that this late thesis is ignored.".to_string(),
        ]));
        assert!(!s.has_thesis);
    }
}
