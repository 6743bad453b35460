//! High-level image operations.
//!
//! These functions combine calculations with backend execution.
//! They take configuration, compute parameters, and call the backend.

use super::backend::{BackendError, ImageBackend};
use super::calculations::fit_to_width;
use super::params::{Quality, ResizeParams};
use std::path::Path;

/// Result type for image operations.
pub type Result<T> = std::result::Result<T, BackendError>;

/// Configuration for the fixed-width fit.
///
/// Both values are fixed constants with no override surface; the `Default`
/// is the only constructor the binary uses.
#[derive(Debug, Clone, Copy)]
pub struct FitConfig {
    /// Output width applied to every image.
    pub target_width: u32,
    /// Encoding quality for lossy formats.
    pub quality: Quality,
}

impl Default for FitConfig {
    fn default() -> Self {
        Self {
            target_width: 78,
            quality: Quality::new(95),
        }
    }
}

/// Plan an in-place resize without executing it.
///
/// Useful for testing parameter generation.
pub fn plan_fit(path: &Path, original: (u32, u32), config: &FitConfig) -> ResizeParams {
    let (width, height) = fit_to_width(original, config.target_width);

    ResizeParams {
        source: path.to_path_buf(),
        output: path.to_path_buf(),
        width,
        height,
        quality: config.quality,
    }
}

/// Resize one image in place to the configured target width.
///
/// Reads the original dimensions, derives the fitted dimensions, and
/// overwrites the file at its own path. Returns the output dimensions.
pub fn resize_in_place(
    backend: &impl ImageBackend,
    path: &Path,
    config: &FitConfig,
) -> Result<(u32, u32)> {
    let dims = backend.identify(path)?;
    let params = plan_fit(path, (dims.width, dims.height), config);
    backend.resize(&params)?;
    Ok((params.width, params.height))
}
