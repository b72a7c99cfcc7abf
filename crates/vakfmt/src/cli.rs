use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about = "VAK RB bibliography formatter", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Classify, extract and format citations
    Process {
        /// Citations file (JSON/YAML array, or plain text with one
        /// citation per line). Reads stdin when omitted.
        input: Option<PathBuf>,

        /// Emit structured JSON instead of a readable report
        #[arg(long)]
        json: bool,

        /// Print per-category batch statistics
        #[arg(long)]
        stats: bool,
    },
    /// Check a corpus file: structure, counts, punctuation lint
    Validate {
        /// Path to the corpus JSON/YAML file
        corpus: PathBuf,
    },
    /// Normalize every example in a corpus file
    Clean {
        /// Path to the corpus JSON/YAML file
        corpus: PathBuf,

        /// Where to write the cleaned corpus (defaults to in-place)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Generate a synthetic training corpus
    Generate {
        /// Output JSON file
        output: PathBuf,

        /// Number of examples to generate
        #[arg(short, long, default_value_t = 1100)]
        count: usize,

        /// RNG seed, for reproducible corpora
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}
