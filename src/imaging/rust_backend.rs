//! Pure Rust image processing backend — zero external dependencies.
//!
//! Everything is statically linked into the binary.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Identify | `image::image_dimensions` (header-only read) |
//! | Decode (PNG, JPEG, BMP, GIF) | `image` crate (pure Rust decoders) |
//! | Resize | `image::DynamicImage::resize_exact` with `Lanczos3` filter |
//! | Encode → JPEG | `image::codecs::jpeg::JpegEncoder` with explicit quality |
//! | Encode → PNG/BMP/GIF | `image::DynamicImage::save_with_format` |

use super::backend::{BackendError, Dimensions, ImageBackend};
use super::params::ResizeParams;
use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat, ImageReader};
use std::path::Path;

/// Extension → encode format mapping for the formats compiled in.
///
/// Matches the recognized input extension set exactly: every file the
/// batch runner picks up can be re-encoded to its own format.
const OUTPUT_FORMATS: &[(&str, ImageFormat)] = &[
    ("png", ImageFormat::Png),
    ("jpg", ImageFormat::Jpeg),
    ("jpeg", ImageFormat::Jpeg),
    ("bmp", ImageFormat::Bmp),
    ("gif", ImageFormat::Gif),
];

/// Pure Rust backend using the `image` crate ecosystem.
///
/// See the [module docs](self) for the crate-to-operation mapping.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// Load and decode an image from disk.
fn load_image(path: &Path) -> Result<DynamicImage, BackendError> {
    ImageReader::open(path)
        .map_err(BackendError::Io)?
        .decode()
        .map_err(|e| {
            BackendError::ProcessingFailed(format!("Failed to decode {}: {}", path.display(), e))
        })
}

/// Look up the encode format for a path's extension (case-insensitive).
fn output_format(path: &Path) -> Result<ImageFormat, BackendError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    OUTPUT_FORMATS
        .iter()
        .find(|(candidate, _)| *candidate == ext)
        .map(|(_, fmt)| *fmt)
        .ok_or_else(|| {
            BackendError::ProcessingFailed(format!("Unsupported output format: {}", ext))
        })
}

/// Save a DynamicImage to the given path, inferring format from extension.
///
/// JPEG goes through an explicit encoder so the quality setting applies;
/// the remaining formats are lossless and ignore quality.
fn save_image(img: &DynamicImage, path: &Path, quality: u32) -> Result<(), BackendError> {
    match output_format(path)? {
        ImageFormat::Jpeg => save_jpeg(img, path, quality),
        format => img.save_with_format(path, format).map_err(|e| {
            BackendError::ProcessingFailed(format!("Failed to encode {}: {}", path.display(), e))
        }),
    }
}

/// Encode and save as JPEG at the given quality.
fn save_jpeg(img: &DynamicImage, path: &Path, quality: u32) -> Result<(), BackendError> {
    let file = std::fs::File::create(path).map_err(BackendError::Io)?;
    let writer = std::io::BufWriter::new(file);
    let encoder = image::codecs::jpeg::JpegEncoder::new_with_quality(writer, quality as u8);
    img.write_with_encoder(encoder)
        .map_err(|e| BackendError::ProcessingFailed(format!("JPEG encode failed: {}", e)))
}

impl ImageBackend for RustBackend {
    fn identify(&self, path: &Path) -> Result<Dimensions, BackendError> {
        let (width, height) = image::image_dimensions(path).map_err(|e| {
            BackendError::ProcessingFailed(format!("Failed to read dimensions: {}", e))
        })?;
        Ok(Dimensions { width, height })
    }

    fn resize(&self, params: &ResizeParams) -> Result<(), BackendError> {
        let img = load_image(&params.source)?;
        // resize_exact forces the computed dimensions; the aspect ratio is
        // already baked into them by the caller.
        let resized = img.resize_exact(params.width, params.height, FilterType::Lanczos3);
        save_image(&resized, &params.output, params.quality.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::imaging::params::Quality;
    use image::{ImageEncoder, RgbImage};

    /// Create a small valid JPEG file with the given dimensions.
    fn create_test_jpeg(path: &Path, width: u32, height: u32) {
        let img = RgbImage::from_fn(width, height, |x, y| {
            image::Rgb([(x % 256) as u8, (y % 256) as u8, 128])
        });
        let file = std::fs::File::create(path).unwrap();
        let writer = std::io::BufWriter::new(file);
        image::codecs::jpeg::JpegEncoder::new(writer)
            .write_image(img.as_raw(), width, height, image::ExtendedColorType::Rgb8)
            .unwrap();
    }

    /// Create a small valid PNG file with the given dimensions.
    fn create_test_png(path: &Path, width: u32, height: u32) {
        let img = RgbImage::from_fn(width, height, |x, y| {
            image::Rgb([(x % 256) as u8, (y % 256) as u8, 64])
        });
        img.save_with_format(path, ImageFormat::Png).unwrap();
    }

    #[test]
    fn identify_synthetic_jpeg() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("test.jpg");
        create_test_jpeg(&path, 200, 150);

        let backend = RustBackend::new();
        let dims = backend.identify(&path).unwrap();
        assert_eq!(dims.width, 200);
        assert_eq!(dims.height, 150);
    }

    #[test]
    fn identify_nonexistent_file_errors() {
        let backend = RustBackend::new();
        let result = backend.identify(Path::new("/nonexistent/image.jpg"));
        assert!(result.is_err());
    }

    #[test]
    fn identify_corrupt_bytes_errors() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("corrupt.jpg");
        std::fs::write(&path, b"this is not a jpeg").unwrap();

        let backend = RustBackend::new();
        assert!(backend.identify(&path).is_err());
    }

    #[test]
    fn identify_zero_byte_file_errors() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("empty.png");
        std::fs::write(&path, b"").unwrap();

        let backend = RustBackend::new();
        assert!(backend.identify(&path).is_err());
    }

    #[test]
    fn resize_jpeg_in_place() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("photo.jpg");
        create_test_jpeg(&path, 400, 300);

        let backend = RustBackend::new();
        backend
            .resize(&ResizeParams {
                source: path.clone(),
                output: path.clone(),
                width: 78,
                height: 58,
                quality: Quality::new(95),
            })
            .unwrap();

        let dims = backend.identify(&path).unwrap();
        assert_eq!(dims.width, 78);
        assert_eq!(dims.height, 58);
    }

    #[test]
    fn resize_png_in_place() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("sprite.png");
        create_test_png(&path, 200, 100);

        let backend = RustBackend::new();
        backend
            .resize(&ResizeParams {
                source: path.clone(),
                output: path.clone(),
                width: 78,
                height: 39,
                quality: Quality::new(95),
            })
            .unwrap();

        let dims = backend.identify(&path).unwrap();
        assert_eq!(dims.width, 78);
        assert_eq!(dims.height, 39);
    }

    #[test]
    fn resize_can_upscale() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("tiny.png");
        create_test_png(&path, 50, 100);

        let backend = RustBackend::new();
        backend
            .resize(&ResizeParams {
                source: path.clone(),
                output: path.clone(),
                width: 78,
                height: 156,
                quality: Quality::new(95),
            })
            .unwrap();

        let dims = backend.identify(&path).unwrap();
        assert_eq!(dims.width, 78);
        assert_eq!(dims.height, 156);
    }

    #[test]
    fn resize_unsupported_output_extension_errors() {
        let tmp = tempfile::TempDir::new().unwrap();
        let source = tmp.path().join("source.jpg");
        create_test_jpeg(&source, 100, 100);

        let backend = RustBackend::new();
        let result = backend.resize(&ResizeParams {
            source,
            output: tmp.path().join("output.tiff"),
            width: 78,
            height: 78,
            quality: Quality::new(95),
        });
        assert!(result.is_err());
    }

    #[test]
    fn resize_corrupt_source_errors() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("corrupt.gif");
        std::fs::write(&path, b"GIF89a garbage").unwrap();

        let backend = RustBackend::new();
        let result = backend.resize(&ResizeParams {
            source: path.clone(),
            output: path,
            width: 78,
            height: 39,
            quality: Quality::new(95),
        });
        assert!(result.is_err());
    }
}
