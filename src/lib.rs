//! # batchfit
//!
//! A batch image resizer: scans one directory for image files, resizes each
//! to a fixed width of 78 pixels preserving aspect ratio, and overwrites the
//! original file in place.
//!
//! # Behavior Contract
//!
//! For every file in the directory whose name ends (case-insensitively) with
//! `.png`, `.jpg`, `.jpeg`, `.bmp`, or `.gif`:
//!
//! 1. Decode the file as an image.
//! 2. Compute `new_height = floor(78 * original_height / original_width)`.
//! 3. Resize to (78, new_height) with Lanczos3 resampling.
//! 4. Re-encode to the same format (quality 95 for JPEG) and overwrite the
//!    original path. No backup copy is kept.
//!
//! Any failure in steps 1-4 is recorded against that file and the batch
//! continues — per-file failures never abort the run. Images narrower than
//! 78 pixels are upscaled; the ratio computation has no bound check.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`run`] | Batch runner — directory listing, extension filter, per-file outcome collection |
//! | [`imaging`] | Pure-Rust image operations: identify, dimension math, Lanczos3 resize, re-encode |
//! | [`output`] | CLI output formatting — the per-file status lines |
//!
//! # Design Decisions
//!
//! ## In-Place Overwrite
//!
//! The resized image is written back to the source path with no intermediate
//! or backup copy. Data loss on a failure mid-write is an accepted risk of
//! this design; the tool exists to shrink sprite/asset directories where the
//! originals are disposable or versioned elsewhere.
//!
//! ## Fixed Constants, No Configuration
//!
//! Target width (78) and JPEG quality (95) are constants with no override
//! surface — no flags, no config file, no environment variables. The only
//! CLI input is the directory to process.
//!
//! ## Pure-Rust Imaging
//!
//! All decoding, resizing, and encoding goes through the `image` crate —
//! no ImageMagick, no system dependencies. The binary is fully
//! self-contained.
//!
//! ## Errors as Values
//!
//! Per-file processing returns a success/failure union
//! ([`run::FileOutcome`]) collected into a [`run::RunSummary`]; there is no
//! exception-style control flow. The one unguarded failure is the directory
//! listing itself, which aborts the run with [`run::RunError`].

pub mod imaging;
pub mod output;
pub mod run;
