//! The `essaymark init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    if std::path::Path::new(crate::config::DEFAULT_CONFIG_FILE).exists() {
        println!("essaymark.toml already exists, skipping.");
    } else {
        std::fs::write(crate::config::DEFAULT_CONFIG_FILE, SAMPLE_CONFIG)?;
        println!("Created essaymark.toml");
    }

    std::fs::create_dir_all("wordlists")?;
    for (path, content) in [
        ("wordlists/high-frequency.txt", HIGH_FREQUENCY_STARTER),
        ("wordlists/advanced.txt", ADVANCED_STARTER),
    ] {
        if std::path::Path::new(path).exists() {
            println!("{path} already exists, skipping.");
        } else {
            std::fs::write(path, content)?;
            println!("Created {path}");
        }
    }

    println!("\nNext steps:");
    println!("  1. Extend the word lists to match your study material");
    println!("  2. Run: essaymark validate --wordlist wordlists/high-frequency.txt");
    println!("  3. Run: essaymark grade --essay my-essay.txt --prompt \"Your prompt here\"");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# essaymark configuration

output_dir = "essaymark-results"

[wordlists]
high_frequency = "wordlists/high-frequency.txt"
advanced = "wordlists/advanced.txt"
"#;

const HIGH_FREQUENCY_STARTER: &str = r#"# Commonly desirable academic vocabulary, one term per line.
analyze
argument
consider
develop
evidence
factor
impact
policy
significant
society
"#;

const ADVANCED_STARTER: &str = r#"# Sophisticated vocabulary, one term per line.
ambivalent
efficacious
ephemeral
pragmatic
salient
tenuous
ubiquitous
"#;
