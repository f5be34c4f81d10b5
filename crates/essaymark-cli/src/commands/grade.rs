//! The `essaymark grade` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use essaymark_core::report::{EvaluationReport, GradedEssay};
use essaymark_core::results::EvaluationResult;

use crate::config;

pub struct GradeArgs {
    pub essay: PathBuf,
    pub prompt: Option<String>,
    pub prompt_file: Option<PathBuf>,
    pub high_frequency: Option<PathBuf>,
    pub advanced: Option<PathBuf>,
    pub format: String,
    pub output: Option<PathBuf>,
    pub config: Option<PathBuf>,
}

pub fn execute(args: GradeArgs) -> Result<()> {
    let config = config::load(args.config.as_deref())?;
    let prompt = super::resolve_prompt(args.prompt, args.prompt_file)?;
    let (text, source) = super::read_essay(&args.essay)?;
    let (high_freq, advanced) = super::resolve_wordlists(
        args.high_frequency.as_deref(),
        args.advanced.as_deref(),
        &config,
    )?;

    let result = essaymark_core::evaluate(&text, &prompt, &high_freq, &advanced);

    match args.format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&result)?),
        "text" => print_text(&source, &result),
        other => anyhow::bail!("unknown format: {other} (expected text or json)"),
    }

    if let Some(path) = args.output {
        let report = EvaluationReport::new(prompt, vec![GradedEssay { source, result }]);
        report.save_json(&path)?;
        eprintln!("Report written to {}", path.display());
    }

    Ok(())
}

fn print_text(source: &str, result: &EvaluationResult) {
    println!("Essay: {source}");
    println!("Final score: {:.1} / 6.0", result.final_score);

    let mut breakdown = Table::new();
    breakdown.set_header(vec!["Category", "Score", "Max"]);
    breakdown.add_row(vec![
        Cell::new("Topic relevance"),
        Cell::new(format!("{:.2}", result.breakdown.topic_relevance)),
        Cell::new("2.0"),
    ]);
    breakdown.add_row(vec![
        Cell::new("Argument quality"),
        Cell::new(format!("{:.2}", result.breakdown.argument_quality)),
        Cell::new("2.5"),
    ]);
    breakdown.add_row(vec![
        Cell::new("Word count"),
        Cell::new(format!("{:.2}", result.breakdown.word_count)),
        Cell::new("1.0"),
    ]);
    breakdown.add_row(vec![
        Cell::new("Structure"),
        Cell::new(format!("{:.2}", result.breakdown.structure)),
        Cell::new("1.5"),
    ]);
    breakdown.add_row(vec![
        Cell::new("Style (vocab/variety/coherence)"),
        Cell::new(format!("{:.2}", result.breakdown.nlp_style)),
        Cell::new("6.0"),
    ]);
    println!("{breakdown}");

    let yes_no = |b: bool| if b { "yes" } else { "no" };
    let mut signals = Table::new();
    signals.set_header(vec!["Signal", "Detected"]);
    signals.add_row(vec!["Addresses the prompt", yes_no(result.topic_analysis.direct_address)]);
    signals.add_row(vec!["States a position", yes_no(result.topic_analysis.has_position)]);
    signals.add_row(vec!["Uses examples", yes_no(result.argument_analysis.has_examples)]);
    signals.add_row(vec!["Uses reasoning", yes_no(result.argument_analysis.has_reasoning)]);
    signals.add_row(vec![
        "Considers counter-arguments",
        yes_no(result.argument_analysis.has_counter_arguments),
    ]);
    signals.add_row(vec!["Has a conclusion", yes_no(result.argument_analysis.conclusion_present)]);
    println!("{signals}");

    let m = &result.metrics;
    println!(
        "Words: {} ({} unique, {:.1}% diversity) | Paragraphs: {} | Avg sentence: {:.1} words",
        m.word_count, m.unique_words, m.vocab_diversity_percent, m.paragraph_count,
        m.avg_sentence_length,
    );
    println!(
        "Long words: {} ({} unique) | High-frequency hits: {} | Advanced words used: {}",
        m.long_word_count,
        m.unique_long_word_count,
        m.high_freq_count,
        if m.used_advanced_words.is_empty() {
            "none".to_string()
        } else {
            m.used_advanced_words.join(", ")
        },
    );
}
