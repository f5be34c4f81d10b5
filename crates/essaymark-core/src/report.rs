//! Batch evaluation reports with JSON persistence.
//!
//! The engine is pure; persistence is a caller-side convenience. A report
//! bundles the results of grading one or more essays against a single
//! prompt, with enough metadata to identify the run later.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::results::EvaluationResult;

/// One graded essay within a report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradedEssay {
    /// Where the essay text came from (file name, "stdin", ...).
    pub source: String,
    pub result: EvaluationResult,
}

/// Aggregate figures over a report's entries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportSummary {
    pub essay_count: usize,
    pub mean_final_score: f64,
    pub min_final_score: f64,
    pub max_final_score: f64,
}

/// A complete grading run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationReport {
    /// Unique report identifier.
    pub id: Uuid,
    /// When the report was created.
    pub created_at: DateTime<Utc>,
    /// The prompt every entry was graded against.
    pub prompt: String,
    pub entries: Vec<GradedEssay>,
    pub summary: ReportSummary,
}

impl EvaluationReport {
    /// Build a report from graded entries, computing the summary.
    pub fn new(prompt: impl Into<String>, entries: Vec<GradedEssay>) -> Self {
        let summary = summarize(&entries);
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            prompt: prompt.into(),
            entries,
            summary,
        }
    }

    /// Save the report as pretty-printed JSON.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }

    /// Load a report back from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report from {}", path.display()))?;
        let report: EvaluationReport =
            serde_json::from_str(&content).context("failed to parse report JSON")?;
        Ok(report)
    }
}

fn summarize(entries: &[GradedEssay]) -> ReportSummary {
    if entries.is_empty() {
        return ReportSummary {
            essay_count: 0,
            mean_final_score: 0.0,
            min_final_score: 0.0,
            max_final_score: 0.0,
        };
    }

    let scores: Vec<f64> = entries.iter().map(|e| e.result.final_score).collect();
    let sum: f64 = scores.iter().sum();
    ReportSummary {
        essay_count: entries.len(),
        mean_final_score: sum / scores.len() as f64,
        min_final_score: scores.iter().cloned().fold(f64::INFINITY, f64::min),
        max_final_score: scores.iter().cloned().fold(f64::NEG_INFINITY, f64::max),
    }
}
