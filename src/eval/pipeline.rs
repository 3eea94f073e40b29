//! Fail-fast evaluation orchestration.
//!
//! The pipeline sequences the whole run in a strictly linear stage
//! machine:
//!
//! ```text
//! Loaded → LabelsMapped → GoldValidated → Scored → Aggregated → Reported
//! ```
//!
//! Any failure halts the run at that stage; there are no retries and
//! no partial reports. The classifier collaborator is an opaque
//! blocking batch call; the only requirement placed on it is that the
//! returned sequence matches the input text order, which the positional
//! alignment against the gold file depends on.

use crate::config::EvalConfig;
use crate::corpus;
use crate::eval::gold::GoldLabelSet;
use crate::eval::report::{EvaluationReport, PlotData};
use crate::eval::{accuracy, confidence, distribution};
use crate::types::{CanonicalRecord, RawPrediction};
use crate::{Classifier, Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Pipeline stages, in execution order.
///
/// Purely observational: progress is logged per stage, and an error
/// reported to the user names the stage it halted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Stage {
    /// Input texts read, classifier batch returned.
    Loaded,
    /// Raw star labels mapped into canonical records.
    LabelsMapped,
    /// Gold-label file parsed and validated.
    GoldValidated,
    /// Accuracy computed against the gold labels.
    Scored,
    /// Distribution and confidence statistics computed.
    Aggregated,
    /// Final report assembled.
    Reported,
}

impl Stage {
    /// Human-readable stage name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Stage::Loaded => "load",
            Stage::LabelsMapped => "label mapping",
            Stage::GoldValidated => "gold validation",
            Stage::Scored => "scoring",
            Stage::Aggregated => "aggregation",
            Stage::Reported => "report",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Orchestrates one evaluation run end to end.
///
/// Holds only a borrow of the classifier collaborator; all batch data
/// is created fresh per run and dropped once the report is emitted.
pub struct EvaluationPipeline<'a, C: Classifier + ?Sized> {
    classifier: &'a C,
}

impl<'a, C: Classifier + ?Sized> EvaluationPipeline<'a, C> {
    /// Create a pipeline around a classifier collaborator.
    pub fn new(classifier: &'a C) -> Self {
        Self { classifier }
    }

    /// Run a full evaluation from configured input files.
    ///
    /// Checks both paths before any classification work, reads the
    /// corpus, then walks the stage machine: classify, map labels,
    /// validate the gold file, score, aggregate, report.
    pub fn run(&self, config: &EvalConfig) -> Result<EvaluationReport> {
        config.check_paths()?;
        let texts = corpus::read_phrases(&config.data_path)?;
        let (predictions, records) = self.classify_and_map(&texts)?;
        let gold = self.validate_gold(config)?;
        self.finish(&predictions, records, &gold)
    }

    /// Evaluate an in-memory corpus against an already-validated gold
    /// set. This is the stage machine minus file loading.
    pub fn evaluate(&self, texts: &[String], gold: &GoldLabelSet) -> Result<EvaluationReport> {
        let (predictions, records) = self.classify_and_map(texts)?;
        self.finish(&predictions, records, gold)
    }

    /// Stages `Loaded` and `LabelsMapped`: run the classifier batch and
    /// map its output into canonical records, 1:1 with input order.
    fn classify_and_map(
        &self,
        texts: &[String],
    ) -> Result<(Vec<RawPrediction>, Vec<CanonicalRecord>)> {
        let predictions = self.classifier.classify(texts)?;
        if predictions.len() != texts.len() {
            // Order/length is the collaborator's contract; a mismatch
            // here would corrupt the positional alignment downstream.
            return Err(Error::inference(format!(
                "classifier returned {} predictions for {} texts ({})",
                predictions.len(),
                texts.len(),
                self.classifier.name()
            )));
        }
        log::info!(
            "{}: classified {} phrases with {}",
            Stage::Loaded,
            texts.len(),
            self.classifier.name()
        );

        let records: Vec<CanonicalRecord> = texts
            .iter()
            .zip(&predictions)
            .map(|(text, pred)| CanonicalRecord::from_prediction(text.clone(), pred))
            .collect();
        log::info!("{}: {} canonical records", Stage::LabelsMapped, records.len());
        Ok((predictions, records))
    }

    /// Stages `Scored`, `Aggregated`, and `Reported`.
    fn finish(
        &self,
        predictions: &[RawPrediction],
        records: Vec<CanonicalRecord>,
        gold: &GoldLabelSet,
    ) -> Result<EvaluationReport> {
        let scored = accuracy::score(&records, gold)?;
        log::info!(
            "{}: {}/{} matched",
            Stage::Scored,
            scored.matches,
            scored.total
        );

        let dist = distribution::aggregate(predictions)?;
        let conf = confidence::aggregate(predictions)?;
        log::info!("{}: distribution and confidence computed", Stage::Aggregated);

        let plot = PlotData {
            star_values: distribution::star_values(predictions),
            category_labels: distribution::category_labels(predictions),
            confidence_scores: confidence::scores(predictions),
        };
        let report = EvaluationReport::new(scored, dist, conf, plot);
        log::info!("{}: accuracy {:.4}", Stage::Reported, report.accuracy);
        Ok(report)
    }

    fn validate_gold(&self, config: &EvalConfig) -> Result<GoldLabelSet> {
        let gold = GoldLabelSet::load(&config.labels_path)?;
        log::info!("{}: {} gold labels", Stage::GoldValidated, gold.len());
        Ok(gold)
    }
}
