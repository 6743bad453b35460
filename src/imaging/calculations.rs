//! Pure calculation functions for image dimensions.
//!
//! All functions here are pure and testable without any I/O or images.

/// Calculate output dimensions for a fixed-width resize.
///
/// Width becomes `target_width`; height is derived from the original
/// width/height ratio using truncating integer division (floor). No bound
/// check in either direction: images narrower than the target are upscaled.
///
/// # Arguments
/// * `original` - Original image dimensions (width, height)
/// * `target_width` - Fixed output width in pixels
///
/// # Returns
/// * `(width, height)` - Output dimensions
///
/// # Examples
/// ```
/// # use batchfit::imaging::fit_to_width;
/// // 200x100 landscape fitted to 78 wide → 78x39
/// assert_eq!(fit_to_width((200, 100), 78), (78, 39));
///
/// // 50x100 portrait, narrower than target → upscaled to 78x156
/// assert_eq!(fit_to_width((50, 100), 78), (78, 156));
/// ```
pub fn fit_to_width(original: (u32, u32), target_width: u32) -> (u32, u32) {
    let (orig_w, orig_h) = original;

    // u64 intermediate: target_width * orig_h can exceed u32.
    let new_height = (target_width as u64 * orig_h as u64 / orig_w as u64) as u32;
    (target_width, new_height)
}
