//! The `essaymark batch` command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use comfy_table::{Cell, Table};

use essaymark_core::report::{EvaluationReport, GradedEssay};

use crate::config;

pub struct BatchArgs {
    pub dir: PathBuf,
    pub prompt: Option<String>,
    pub prompt_file: Option<PathBuf>,
    pub high_frequency: Option<PathBuf>,
    pub advanced: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub config: Option<PathBuf>,
}

pub fn execute(args: BatchArgs) -> Result<()> {
    let config = config::load(args.config.as_deref())?;
    let prompt = super::resolve_prompt(args.prompt, args.prompt_file)?;
    let (high_freq, advanced) = super::resolve_wordlists(
        args.high_frequency.as_deref(),
        args.advanced.as_deref(),
        &config,
    )?;

    let mut essay_paths: Vec<PathBuf> = std::fs::read_dir(&args.dir)
        .with_context(|| format!("failed to read essay directory {}", args.dir.display()))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.extension().and_then(|e| e.to_str()) == Some("txt"))
        .collect();
    essay_paths.sort();

    if essay_paths.is_empty() {
        anyhow::bail!("no .txt essays found in {}", args.dir.display());
    }

    let mut entries = Vec::with_capacity(essay_paths.len());
    for path in &essay_paths {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read essay from {}", path.display()))?;
        let result = essaymark_core::evaluate(&text, &prompt, &high_freq, &advanced);
        tracing::info!(essay = %path.display(), score = result.final_score, "graded");
        entries.push(GradedEssay {
            source: path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string()),
            result,
        });
    }

    let report = EvaluationReport::new(prompt, entries);
    print_summary(&report);

    let output = args.output.unwrap_or_else(|| {
        config
            .output_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("essaymark-results"))
            .join(format!("report-{}.json", report.id))
    });
    report.save_json(&output)?;
    println!("Report written to {}", output.display());

    Ok(())
}

fn print_summary(report: &EvaluationReport) {
    let mut table = Table::new();
    table.set_header(vec!["Essay", "Final", "Topic", "Argument", "Structure", "Words"]);
    for entry in &report.entries {
        let r = &entry.result;
        table.add_row(vec![
            Cell::new(&entry.source),
            Cell::new(format!("{:.1}", r.final_score)),
            Cell::new(format!("{:.2}", r.breakdown.topic_relevance)),
            Cell::new(format!("{:.2}", r.breakdown.argument_quality)),
            Cell::new(format!("{:.2}", r.breakdown.structure)),
            Cell::new(r.metrics.word_count),
        ]);
    }
    println!("{table}");

    let s = &report.summary;
    println!(
        "{} essays graded: mean {:.2}, min {:.1}, max {:.1}",
        s.essay_count, s.mean_final_score, s.min_final_score, s.max_final_score,
    );
}
