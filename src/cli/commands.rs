//! Command implementations for the sentiscore CLI.

use crate::cli::output::{log_info, write_output};
use crate::cli::parser::{OutputFormat, RunArgs, ValidateArgs};
use crate::config::EvalConfig;
use crate::eval::{EvaluationPipeline, GoldLabelSet};
use crate::label::StarRating;
use crate::{Error, PrecomputedClassifier, Result};

/// `sentiscore run`: full evaluation against configured input files.
pub fn cmd_run(args: RunArgs) -> Result<()> {
    let config = resolve_config(&args)?;

    log_info(
        &format!(
            "Evaluating {} against {}",
            config.data_path.display(),
            config.labels_path.display()
        ),
        args.quiet,
    );

    let classifier = PrecomputedClassifier::from_file(&args.predictions)?;
    let pipeline = EvaluationPipeline::new(&classifier);
    let report = pipeline.run(&config)?;

    let rendered = match args.format {
        OutputFormat::Text => {
            let mut out = String::new();
            if args.verbose {
                out.push_str(&report.verbose_listing());
                out.push('\n');
            }
            out.push_str(&report.summary());
            out
        }
        OutputFormat::Json => {
            let mut json = report.to_json()?;
            json.push('\n');
            json
        }
    };
    write_output(&rendered, args.output.as_deref())
}

/// `sentiscore validate`: check a gold-label file on its own.
pub fn cmd_validate(args: ValidateArgs) -> Result<()> {
    let gold = GoldLabelSet::load(&args.path)?;
    log_info(
        &format!("{}: {} valid labels", args.path.display(), gold.len()),
        args.quiet,
    );
    println!("OK: {} labels", gold.len());
    Ok(())
}

/// `sentiscore info`: print the taxonomy and version.
pub fn cmd_info() -> Result<()> {
    println!("sentiscore {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Star-to-sentiment taxonomy:");
    for star in StarRating::ALL {
        println!("  {:7} -> {}", star.token(), star.sentiment());
    }
    Ok(())
}

/// Merge config file and per-flag path overrides into one [`EvalConfig`].
///
/// Flags win over the config file; with no config file, both flags are
/// required.
fn resolve_config(args: &RunArgs) -> Result<EvalConfig> {
    let base = match &args.config {
        Some(path) => Some(EvalConfig::from_file(path)?),
        None => None,
    };
    let data = args
        .data
        .clone()
        .or_else(|| base.as_ref().map(|c| c.data_path.clone()));
    let labels = args
        .labels
        .clone()
        .or_else(|| base.as_ref().map(|c| c.labels_path.clone()));
    match (data, labels) {
        (Some(data), Some(labels)) => Ok(EvalConfig::new(data, labels)),
        (None, _) => Err(Error::config(
            "no data file: pass --data or a config with data_path",
        )),
        (_, None) => Err(Error::config(
            "no gold-label file: pass --labels or a config with labels_path",
        )),
    }
}
