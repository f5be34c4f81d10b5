//! The `essaymark validate` command.

use std::path::PathBuf;

use anyhow::Result;

use essaymark_core::wordlist;

pub fn execute(paths: &[PathBuf]) -> Result<()> {
    let mut problems = 0usize;

    for path in paths {
        match wordlist::load(path) {
            Ok(words) => {
                let duplicates = wordlist::duplicate_count(&words);
                let empty = words.iter().filter(|w| w.trim().is_empty()).count();
                print!("{}: {} terms", path.display(), words.len());
                if duplicates > 0 {
                    print!(", {duplicates} duplicate(s)");
                }
                if empty > 0 {
                    print!(", {empty} empty term(s)");
                    problems += 1;
                }
                println!();
                if words.is_empty() {
                    println!("  WARNING: list is empty; dependent metrics will be zero");
                }
            }
            Err(e) => {
                println!("{}: INVALID ({e})", path.display());
                problems += 1;
            }
        }
    }

    if problems == 0 {
        println!("All word lists valid.");
        Ok(())
    } else {
        anyhow::bail!("{problems} word list(s) failed validation")
    }
}
