//! Static pattern tables used by the analyzers.
//!
//! These are fixed, hand-tuned configuration data. The weighting that sits
//! on top of them lives in [`crate::scorer`]; nothing here is mutated at
//! runtime.

use once_cell::sync::Lazy;
use regex::Regex;

fn build(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|p| Regex::new(&format!("(?i){p}")).unwrap())
        .collect()
}

/// Thesis/position statements, matched against the essay's opening (the
/// first two paragraphs).
pub static THESIS_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    build(&[
        r"\b(agree|disagree|believe|think|contend|maintain|assert|hold)\s+that\b",
        r"\b(my|this|the)\s+(view|opinion|stance|position|argument)\s+is\b",
        r"\bit\s+is\s+(clear|evident|important|obvious|apparent|undeniable|essential|crucial)\s+that\b",
        r"\bthis\s+essay\s+(argues|contends|will\s+show|will\s+demonstrate|will\s+discuss)\b",
        r"\bi\s+will\s+(argue|show|demonstrate|explain)\b",
        r"\bthe\s+(issue|statement|claim|argument)\s+should\s+be\b",
        r"\bmy\s+position\s+is\b",
    ])
});

/// Fallback stance keywords: a weaker thesis signal that only counts when
/// the opening is long enough (> 40 words) to plausibly contain one.
pub static STANCE_KEYWORDS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(should|must|important|necessary|vital|essential|crucial|paramount)\b")
        .unwrap()
});

/// Phrases that introduce a concrete example.
pub static EXAMPLE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    build(&[
        r"\bfor\s+example\b",
        r"\bfor\s+instance\b",
        r"\bsuch\s+as\b",
        r"\bconsidering\s+the\s+case\b",
        r"\btake\s+the\s+(case|example)\b",
        r"\b(as\s+is|this\s+is)\s+evident\s+in\b",
        r"\billustrates\b",
    ])
});

/// Causal/explanatory connectives.
pub static REASONING_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    build(&[
        r"\bbecause\b",
        r"\bsince\b",
        r"\btherefore\b",
        r"\bas\s+a\s+result\b",
        r"\bthus\b",
        r"\bso\s+that\b",
        r"\bconsequently\b",
        r"\bhence\b",
        r"\bdue\s+to\b",
        r"\bthis\s+(shows|suggests|demonstrates)\b",
        r"\bwhich\s+indicates\b",
    ])
});

/// Concession and counter-argument markers.
pub static COUNTER_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    build(&[
        r"\bhowever\b",
        r"\bon\s+the\s+other\s+hand\b",
        r"\bnevertheless\b",
        r"\bnonetheless\b",
        r"\balternatively\b",
        r"\b(by|in)\s+contrast\b",
        r"\bwhile\s+it\s+is\s+true\s+that\b",
        r"\bsome\s+may\s+argue\b",
        r"\bcritics\s+contend\b",
    ])
});

/// Transition terms counted by the coherence scorer. Each term contributes
/// once no matter how often it appears.
pub const TRANSITION_TERMS: [&str; 16] = [
    "firstly",
    "secondly",
    "in contrast",
    "on the other hand",
    "for example",
    "moreover",
    "however",
    "furthermore",
    "therefore",
    "in addition",
    "consequently",
    "thus",
    "in conclusion",
    "for this reason",
    "in summary",
    "to conclude",
];

/// Test a text against a pattern set; true if any pattern matches.
pub fn any_match(patterns: &[Regex], text: &str) -> bool {
    patterns.iter().any(|p| p.is_match(text))
}
