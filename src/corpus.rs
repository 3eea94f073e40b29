//! Line-oriented input files.
//!
//! Both input files (text corpus and gold labels) are UTF-8, one entry
//! per line. Lines are trimmed and blank lines are dropped before
//! counting, so line *i* of the surviving sequence is record *i*. The
//! gold reader additionally keeps 1-based file line numbers so a bad
//! label can be reported against the line the user actually sees.

use crate::{Error, Result};
use std::fs;
use std::path::Path;

/// Read the text corpus: trimmed, non-blank phrases in file order.
pub fn read_phrases(path: &Path) -> Result<Vec<String>> {
    Ok(read_numbered_lines(path)?
        .into_iter()
        .map(|(_, line)| line)
        .collect())
}

/// Read a file as `(line_number, trimmed_content)` pairs, blanks
/// dropped. Line numbers are 1-based positions in the original file.
pub fn read_numbered_lines(path: &Path) -> Result<Vec<(usize, String)>> {
    if !path.is_file() {
        return Err(Error::missing_file(path));
    }
    let raw = fs::read_to_string(path)?;
    Ok(numbered_lines(&raw))
}

/// Split already-loaded text into `(line_number, trimmed_content)`
/// pairs, blanks dropped.
#[must_use]
pub fn numbered_lines(raw: &str) -> Vec<(usize, String)> {
    raw.lines()
        .enumerate()
        .filter_map(|(idx, line)| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some((idx + 1, trimmed.to_string()))
            }
        })
        .collect()
}
