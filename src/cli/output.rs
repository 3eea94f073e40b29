//! Output formatting utilities for CLI commands.

use std::io::{self, Write};

/// Format an error message for display.
pub fn format_error(operation: &str, details: &str) -> String {
    format!("ERROR: {} - {}", operation, details)
}

/// Log a progress message to stderr (respects the quiet flag).
pub fn log_info(msg: &str, quiet: bool) {
    if !quiet {
        eprintln!("{}", msg);
    }
}

/// Write output to a file or stdout.
pub fn write_output(content: &str, path: Option<&std::path::Path>) -> crate::Result<()> {
    if let Some(path) = path {
        std::fs::write(path, content)?;
    } else {
        print!("{}", content);
        io::stdout().flush()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_error_names_operation_and_details() {
        let msg = format_error("gold validation", "bad label");
        assert_eq!(msg, "ERROR: gold validation - bad label");
    }

    #[test]
    fn write_output_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        write_output("report\n", Some(&path)).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "report\n");
    }
}
