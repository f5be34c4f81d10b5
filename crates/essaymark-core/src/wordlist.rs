//! Vocabulary word-list loading.
//!
//! Lists arrive from the caller as external resources: either a flat JSON
//! string array or a plain-text file with one term per line (`#` comments
//! and blank lines ignored). The engine itself only ever sees slices, so an
//! absent list is simply an empty one.

use std::path::Path;

use crate::error::WordListError;

/// Load a word list from a `.json` or `.txt`/`.list` file.
pub fn load(path: &Path) -> Result<Vec<String>, WordListError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "json" => load_json(path),
        "txt" | "list" => load_text(path),
        _ => Err(WordListError::UnsupportedFormat {
            path: path.to_path_buf(),
        }),
    }
}

fn read(path: &Path) -> Result<String, WordListError> {
    std::fs::read_to_string(path).map_err(|source| WordListError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn load_json(path: &Path) -> Result<Vec<String>, WordListError> {
    let content = read(path)?;
    serde_json::from_str(&content).map_err(|source| WordListError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn load_text(path: &Path) -> Result<Vec<String>, WordListError> {
    let content = read(path)?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .map(str::to_string)
        .collect())
}

/// Count case-insensitive duplicate entries in a loaded list.
///
/// Duplicates are harmless to the engine (matching is set-based) but worth
/// surfacing when validating list files.
pub fn duplicate_count(words: &[String]) -> usize {
    let mut seen = std::collections::HashSet::new();
    words
        .iter()
        .filter(|w| !seen.insert(w.to_lowercase()))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn temp_file(suffix: &str, content: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_json_array() {
        let file = temp_file(".json", r#"["analyze", "growth", "policy"]"#);
        let words = load(file.path()).unwrap();
        assert_eq!(words, vec!["analyze", "growth", "policy"]);
    }

    #[test]
    fn loads_text_lines_skipping_comments() {
        let file = temp_file(".txt", "# common words\nanalyze\n\ngrowth\n  policy  \n");
        let words = load(file.path()).unwrap();
        assert_eq!(words, vec!["analyze", "growth", "policy"]);
    }

    #[test]
    fn rejects_unknown_extension() {
        let file = temp_file(".csv", "a,b,c");
        let err = load(file.path()).unwrap_err();
        assert!(matches!(err, WordListError::UnsupportedFormat { .. }));
    }

    #[test]
    fn rejects_malformed_json() {
        let file = temp_file(".json", r#"{"not": "an array"}"#);
        let err = load(file.path()).unwrap_err();
        assert!(matches!(err, WordListError::Parse { .. }));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load(Path::new("/nonexistent/words.json")).unwrap_err();
        assert!(matches!(err, WordListError::Io { .. }));
    }

    #[test]
    fn duplicates_are_counted_case_insensitively() {
        let words = vec![
            "Growth".to_string(),
            "growth".to_string(),
            "policy".to_string(),
        ];
        assert_eq!(duplicate_count(&words), 1);
    }
}
