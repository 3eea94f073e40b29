//! CLI argument parsing and structure definitions.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Sentiment evaluation CLI - scoring, gold validation, batch statistics
#[derive(Parser)]
#[command(name = "sentiscore")]
#[command(
    author,
    version,
    about = "Sentiment evaluation CLI - scoring, gold validation, batch statistics",
    long_about = r#"
sentiscore - evaluate star-rating sentiment predictions against gold labels

TAXONOMY:
  1-2 stars → negative
  3 stars   → neutral
  4-5 stars → positive

INPUTS:
  • Data file        : UTF-8, one phrase per line, blank lines ignored
  • Gold-label file  : one of positive/negative/neutral per line,
                       case-insensitive, positionally aligned with the data file
  • Prediction file  : JSON array of {"label": "<n star(s)>", "score": <0..1>},
                       the classifier collaborator's batch output

EXAMPLES:
  sentiscore run --config eval.json --predictions preds.json
  sentiscore run --data phrases.txt --labels gold.txt --predictions preds.json --format json
  sentiscore validate gold.txt
  sentiscore info
"#
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run a full evaluation and print the report
    #[command(visible_alias = "r")]
    Run(RunArgs),

    /// Validate a gold-label file against the canonical taxonomy
    #[command(visible_alias = "v")]
    Validate(ValidateArgs),

    /// Show the label taxonomy and version info
    #[command(visible_alias = "i")]
    Info,
}

/// Run a full evaluation and print the report
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// JSON config file with data_path and labels_path
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Data file (one phrase per line); overrides the config
    #[arg(long, value_name = "PATH")]
    pub data: Option<PathBuf>,

    /// Gold-label file; overrides the config
    #[arg(long, value_name = "PATH")]
    pub labels: Option<PathBuf>,

    /// Precomputed prediction batch (JSON array, classifier wire format)
    #[arg(short, long, value_name = "PATH")]
    pub predictions: PathBuf,

    /// Output format
    #[arg(long, default_value = "text")]
    pub format: OutputFormat,

    /// Write the report here instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Print the per-item <phrase> : <predict> : <gold> listing
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress progress messages
    #[arg(short, long)]
    pub quiet: bool,
}

/// Validate a gold-label file against the canonical taxonomy
#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// Gold-label file to validate
    pub path: PathBuf,

    /// Suppress progress messages
    #[arg(short, long)]
    pub quiet: bool,
}

/// Report output format.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Printed textual summary
    Text,
    /// Pretty JSON
    Json,
}
