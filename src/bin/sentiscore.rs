//! sentiscore - Sentiment evaluation CLI
//!
//! Evaluates star-rating sentiment predictions against a gold-label
//! file: canonicalizes the five star tokens into
//! negative/neutral/positive, validates the gold file, computes
//! line-aligned accuracy, and prints distribution and confidence
//! statistics for the batch.
//!
//! # Usage
//!
//! ```bash
//! # Full evaluation from a config file plus a precomputed batch
//! sentiscore run --config eval.json --predictions preds.json
//!
//! # Explicit paths, JSON report
//! sentiscore run --data phrases.txt --labels gold.txt \
//!     --predictions preds.json --format json
//!
//! # Check a gold-label file by itself
//! sentiscore validate gold.txt
//! ```
//!
//! Exits non-zero on any validation, alignment, or contract failure;
//! the run aborts on the first error with no partial report.

use clap::Parser;
use sentiscore::cli::{output, Cli};
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match sentiscore::cli::run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", output::format_error("evaluation failed", &e.to_string()));
            ExitCode::FAILURE
        }
    }
}
