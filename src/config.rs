//! Evaluation run configuration.
//!
//! An [`EvalConfig`] is an explicit, immutable options struct passed
//! through the call chain; there is no ambient/global configuration
//! state. It can be built directly or loaded from a small JSON file:
//!
//! ```json
//! {
//!   "data_path": "data/phrases.txt",
//!   "labels_path": "data/labels.txt"
//! }
//! ```

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Paths for one evaluation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvalConfig {
    /// UTF-8 text corpus, one phrase per line.
    pub data_path: PathBuf,
    /// UTF-8 gold-label file, one canonical label per line, positionally
    /// aligned with `data_path`.
    pub labels_path: PathBuf,
}

impl EvalConfig {
    /// Build a config from explicit paths.
    pub fn new(data_path: impl Into<PathBuf>, labels_path: impl Into<PathBuf>) -> Self {
        Self {
            data_path: data_path.into(),
            labels_path: labels_path.into(),
        }
    }

    /// Load a config from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(Error::missing_file(path));
        }
        let raw = fs::read_to_string(path)?;
        serde_json::from_str(&raw)
            .map_err(|e| Error::config(format!("{}: {}", path.display(), e)))
    }

    /// Check that both input files resolve.
    ///
    /// Runs before any classification work so a bad path never wastes
    /// an inference pass.
    pub fn check_paths(&self) -> Result<()> {
        if !self.data_path.is_file() {
            return Err(Error::missing_file(&self.data_path));
        }
        if !self.labels_path.is_file() {
            return Err(Error::missing_file(&self.labels_path));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn from_file_reports_missing_config() {
        let err = EvalConfig::from_file(Path::new("/nonexistent/eval.json")).unwrap_err();
        assert!(matches!(err, Error::MissingFile(_)));
    }

    #[test]
    fn from_file_parses_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("eval.json");
        let mut f = fs::File::create(&path).unwrap();
        write!(
            f,
            r#"{{"data_path": "phrases.txt", "labels_path": "labels.txt"}}"#
        )
        .unwrap();

        let config = EvalConfig::from_file(&path).unwrap();
        assert_eq!(config.data_path, PathBuf::from("phrases.txt"));
        assert_eq!(config.labels_path, PathBuf::from("labels.txt"));
    }

    #[test]
    fn from_file_rejects_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("eval.json");
        fs::write(&path, "{not json").unwrap();

        let err = EvalConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn check_paths_names_the_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let data = dir.path().join("phrases.txt");
        fs::write(&data, "great phone\n").unwrap();
        let config = EvalConfig::new(&data, dir.path().join("absent.txt"));

        match config.check_paths().unwrap_err() {
            Error::MissingFile(p) => assert!(p.ends_with("absent.txt")),
            other => panic!("expected MissingFile, got {other:?}"),
        }
    }
}
