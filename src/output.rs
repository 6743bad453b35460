//! CLI output formatting.
//!
//! One line per processed file:
//!
//! ```text
//! Resized and replaced: a.png
//! Error processing c.jpg: Processing failed: Failed to decode c.jpg: ...
//! ```
//!
//! Format functions are pure (no I/O) for testability; `print_*` wrappers
//! write to stdout. Files that don't match the extension set produce no
//! output at all, and there is no trailing summary line — the per-file
//! lines are the entire console contract.

use crate::run::FileOutcome;

/// Format the status line for one file outcome.
pub fn format_outcome(outcome: &FileOutcome) -> String {
    match outcome {
        FileOutcome::Resized { filename, .. } => {
            format!("Resized and replaced: {}", filename)
        }
        FileOutcome::Failed { filename, message } => {
            format!("Error processing {}: {}", filename, message)
        }
    }
}

/// Print the status line for one file outcome to stdout.
pub fn print_outcome(outcome: &FileOutcome) {
    println!("{}", format_outcome(outcome));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_line() {
        let outcome = FileOutcome::Resized {
            filename: "a.png".to_string(),
            width: 78,
            height: 39,
        };
        assert_eq!(format_outcome(&outcome), "Resized and replaced: a.png");
    }

    #[test]
    fn error_line_includes_filename_and_message() {
        let outcome = FileOutcome::Failed {
            filename: "c.jpg".to_string(),
            message: "Processing failed: corrupt header".to_string(),
        };
        assert_eq!(
            format_outcome(&outcome),
            "Error processing c.jpg: Processing failed: corrupt header"
        );
    }
}
