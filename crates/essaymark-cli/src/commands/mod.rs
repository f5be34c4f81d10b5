//! CLI subcommand implementations.

pub mod batch;
pub mod grade;
pub mod init;
pub mod validate;

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::config::Config;

/// Resolve the prompt from `--prompt` or `--prompt-file`.
pub(crate) fn resolve_prompt(inline: Option<String>, file: Option<PathBuf>) -> Result<String> {
    match (inline, file) {
        (Some(p), _) => Ok(p),
        (None, Some(path)) => {
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read prompt from {}", path.display()))?;
            Ok(text.trim().to_string())
        }
        (None, None) => anyhow::bail!("a prompt is required: pass --prompt or --prompt-file"),
    }
}

/// Read essay text from a file, or stdin when the path is `-`.
pub(crate) fn read_essay(path: &Path) -> Result<(String, String)> {
    if path == Path::new("-") {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("failed to read essay from stdin")?;
        Ok((text, "stdin".to_string()))
    } else {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read essay from {}", path.display()))?;
        Ok((text, path.display().to_string()))
    }
}

/// Load a word list from the flag path, falling back to the config path,
/// then to an empty list.
pub(crate) fn load_wordlist(
    flag: Option<&Path>,
    from_config: Option<&Path>,
) -> Result<Vec<String>> {
    match flag.or(from_config) {
        Some(path) => {
            let words = essaymark_core::wordlist::load(path)?;
            tracing::debug!(path = %path.display(), terms = words.len(), "loaded word list");
            Ok(words)
        }
        None => Ok(Vec::new()),
    }
}

/// Resolve both word lists for a grading run.
pub(crate) fn resolve_wordlists(
    high_frequency: Option<&Path>,
    advanced: Option<&Path>,
    config: &Config,
) -> Result<(Vec<String>, Vec<String>)> {
    let hf = load_wordlist(high_frequency, config.wordlists.high_frequency.as_deref())?;
    let adv = load_wordlist(advanced, config.wordlists.advanced.as_deref())?;
    Ok((hf, adv))
}
