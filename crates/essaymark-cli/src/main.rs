//! essaymark CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "essaymark", version, about = "Heuristic essay grading")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Grade a single essay
    Grade {
        /// Essay text file, or "-" for stdin
        #[arg(long)]
        essay: PathBuf,

        /// The writing prompt, inline
        #[arg(long, conflicts_with = "prompt_file")]
        prompt: Option<String>,

        /// The writing prompt, read from a file
        #[arg(long)]
        prompt_file: Option<PathBuf>,

        /// High-frequency word list (.json or .txt)
        #[arg(long)]
        high_frequency: Option<PathBuf>,

        /// Advanced word list (.json or .txt)
        #[arg(long)]
        advanced: Option<PathBuf>,

        /// Output format: text, json
        #[arg(long, default_value = "text")]
        format: String,

        /// Write a single-entry report JSON to this path
        #[arg(long)]
        output: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Grade every .txt essay in a directory against one prompt
    Batch {
        /// Directory containing essay .txt files
        #[arg(long)]
        dir: PathBuf,

        /// The writing prompt, inline
        #[arg(long, conflicts_with = "prompt_file")]
        prompt: Option<String>,

        /// The writing prompt, read from a file
        #[arg(long)]
        prompt_file: Option<PathBuf>,

        /// High-frequency word list (.json or .txt)
        #[arg(long)]
        high_frequency: Option<PathBuf>,

        /// Advanced word list (.json or .txt)
        #[arg(long)]
        advanced: Option<PathBuf>,

        /// Report JSON output path
        #[arg(long)]
        output: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Validate word-list files
    Validate {
        /// Word-list files to check
        #[arg(long = "wordlist", required = true)]
        wordlists: Vec<PathBuf>,
    },

    /// Create a starter config and word lists
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("essaymark=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Grade {
            essay,
            prompt,
            prompt_file,
            high_frequency,
            advanced,
            format,
            output,
            config,
        } => commands::grade::execute(commands::grade::GradeArgs {
            essay,
            prompt,
            prompt_file,
            high_frequency,
            advanced,
            format,
            output,
            config,
        }),
        Commands::Batch {
            dir,
            prompt,
            prompt_file,
            high_frequency,
            advanced,
            output,
            config,
        } => commands::batch::execute(commands::batch::BatchArgs {
            dir,
            prompt,
            prompt_file,
            high_frequency,
            advanced,
            output,
            config,
        }),
        Commands::Validate { wordlists } => commands::validate::execute(&wordlists),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
