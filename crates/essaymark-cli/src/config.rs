//! `essaymark.toml` configuration.
//!
//! Flags always win over config values; the config only supplies defaults
//! for word-list paths and the report output directory.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

pub const DEFAULT_CONFIG_FILE: &str = "essaymark.toml";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub wordlists: WordListPaths,
    /// Directory batch reports land in when `--output` is not given.
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WordListPaths {
    pub high_frequency: Option<PathBuf>,
    pub advanced: Option<PathBuf>,
}

/// Load configuration.
///
/// An explicit `--config` path must exist; the implicit `essaymark.toml`
/// in the working directory is optional and silently skipped when absent.
pub fn load(explicit: Option<&Path>) -> Result<Config> {
    let (path, required) = match explicit {
        Some(p) => (p.to_path_buf(), true),
        None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
    };

    if !path.exists() {
        if required {
            anyhow::bail!("config file not found: {}", path.display());
        }
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let config: Config = toml::from_str(&content)
        .with_context(|| format!("failed to parse config {}", path.display()))?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_implicit_config_is_default() {
        let config = load(None).unwrap();
        assert!(config.wordlists.high_frequency.is_none());
        assert!(config.output_dir.is_none());
    }

    #[test]
    fn missing_explicit_config_is_an_error() {
        assert!(load(Some(Path::new("/nonexistent/essaymark.toml"))).is_err());
    }

    #[test]
    fn parses_wordlist_paths() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("essaymark.toml");
        std::fs::write(
            &path,
            "output_dir = \"results\"\n\n[wordlists]\nhigh_frequency = \"hf.txt\"\nadvanced = \"adv.json\"\n",
        )
        .unwrap();

        let config = load(Some(&path)).unwrap();
        assert_eq!(
            config.wordlists.high_frequency,
            Some(PathBuf::from("hf.txt"))
        );
        assert_eq!(config.wordlists.advanced, Some(PathBuf::from("adv.json")));
        assert_eq!(config.output_dir, Some(PathBuf::from("results")));
    }
}
