//! Command-line interface for sentiscore.
//!
//! Thin layer over the evaluation harness: argument parsing in
//! [`parser`], command bodies in [`commands`], formatting helpers in
//! [`output`]. The binary in `src/bin/sentiscore.rs` just parses and
//! dispatches.

pub mod commands;
pub mod output;
pub mod parser;

pub use parser::{Cli, Commands, OutputFormat, RunArgs, ValidateArgs};

use crate::Result;

/// Dispatch a parsed CLI invocation.
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Run(args) => commands::cmd_run(args),
        Commands::Validate(args) => commands::cmd_validate(args),
        Commands::Info => commands::cmd_info(),
    }
}
