//! Image processing — pure Rust, zero external dependencies.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Identify** | `image::image_dimensions` |
//! | **Resize** | Lanczos3 `resize_exact` |
//! | **Encode** | `image` crate encoders (JPEG with explicit quality) |
//!
//! The module is split into:
//! - **Calculations**: Pure functions for dimension math (unit testable)
//! - **Parameters**: Data structures describing image operations
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`]
//! - **Operations**: High-level functions combining calculations + backend

pub mod backend;
mod calculations;
pub mod operations;
mod params;
pub mod rust_backend;

pub use backend::{BackendError, ImageBackend};
pub use calculations::fit_to_width;
pub use operations::{FitConfig, resize_in_place};
pub use params::{Quality, ResizeParams};
pub use rust_backend::RustBackend;
// Re-exported for tests (run.rs, operations.rs tests use this)
#[cfg(test)]
pub use backend::Dimensions;
