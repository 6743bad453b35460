//! The batch runner.
//!
//! Scans one directory (non-recursive) for files whose names end with a
//! recognized image extension, resizes each to the fixed target width in
//! place, and collects one [`FileOutcome`] per file.
//!
//! ## Failure isolation
//!
//! Per-file failures — corrupt bytes, zero-byte files, directories with a
//! matching name, files removed between listing and processing, write
//! failures — become [`FileOutcome::Failed`] values and never abort the
//! batch. Only a failure to list the directory itself is fatal, surfaced
//! as [`RunError`].
//!
//! ## Ordering
//!
//! The directory listing is snapshotted before processing begins, sorted by
//! file name. Files added after the listing are not processed; files removed
//! before their turn fail with a not-found error, isolated like any other.
//! Processing is strictly sequential, one file at a time.

use crate::imaging::{FitConfig, ImageBackend, RustBackend, resize_in_place};
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

/// Filename suffixes picked up by the batch (matched case-insensitively).
pub const RECOGNIZED_EXTENSIONS: &[&str] = &[".png", ".jpg", ".jpeg", ".bmp", ".gif"];

/// Fatal errors: only the directory listing itself is unguarded.
#[derive(Error, Debug)]
pub enum RunError {
    #[error("Failed to list directory: {0}")]
    Listing(#[from] walkdir::Error),
}

/// Result of processing one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// The file was resized and overwritten at its own path.
    Resized {
        filename: String,
        width: u32,
        height: u32,
    },
    /// Processing failed; the batch continued with the next file.
    Failed { filename: String, message: String },
}

impl FileOutcome {
    pub fn filename(&self) -> &str {
        match self {
            FileOutcome::Resized { filename, .. } => filename,
            FileOutcome::Failed { filename, .. } => filename,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, FileOutcome::Failed { .. })
    }
}

/// Everything that happened during one batch, in processing order.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub outcomes: Vec<FileOutcome>,
}

impl RunSummary {
    pub fn resized(&self) -> usize {
        self.outcomes.iter().filter(|o| !o.is_failure()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_failure()).count()
    }
}

/// Whether a filename ends with one of the recognized image extensions,
/// case-insensitively.
pub fn matches_extension(filename: &str) -> bool {
    let lower = filename.to_lowercase();
    RECOGNIZED_EXTENSIONS
        .iter()
        .any(|suffix| lower.ends_with(suffix))
}

/// Run the batch over `directory` with the production backend and the
/// fixed constants (width 78, quality 95).
///
/// `on_outcome` is invoked once per file, as each file finishes.
pub fn run(
    directory: &Path,
    on_outcome: impl FnMut(&FileOutcome),
) -> Result<RunSummary, RunError> {
    run_with_backend(
        &RustBackend::new(),
        directory,
        &FitConfig::default(),
        on_outcome,
    )
}

/// Run the batch using a specific backend (allows testing with mock).
pub fn run_with_backend(
    backend: &impl ImageBackend,
    directory: &Path,
    config: &FitConfig,
    mut on_outcome: impl FnMut(&FileOutcome),
) -> Result<RunSummary, RunError> {
    // Snapshot the listing up front: files added mid-run are not processed.
    // Entries are not filtered by type — a directory or symlink with a
    // matching name is attempted and fails per-file.
    let mut entries: Vec<(String, PathBuf)> = Vec::new();
    for entry in WalkDir::new(directory)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry?;
        let filename = entry.file_name().to_string_lossy().to_string();
        if matches_extension(&filename) {
            entries.push((filename, entry.into_path()));
        }
    }

    let mut summary = RunSummary::default();
    for (filename, path) in entries {
        let outcome = match resize_in_place(backend, &path, config) {
            Ok((width, height)) => FileOutcome::Resized {
                filename,
                width,
                height,
            },
            Err(e) => FileOutcome::Failed {
                filename,
                message: e.to_string(),
            },
        };
        on_outcome(&outcome);
        summary.outcomes.push(outcome);
    }

    Ok(summary)
}
