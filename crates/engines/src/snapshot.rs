//! PNG rendering of a [`Canvas`].
//!
//! Feature-gated behind `png` (default on) so embeddings that only need raw
//! pixels avoid the `image` crate. The buffer conversion itself lives in
//! [`crate::pixel`].

use std::path::Path;
use undulate_core::{Canvas, EngineError};

use crate::pixel::canvas_to_rgba;

/// Writes the canvas raster as a PNG image.
///
/// Returns `EngineError::InvalidDimensions` if the raster dimensions overflow
/// `u32`, or `EngineError::Io` on write failure.
pub fn write_png(canvas: &Canvas, path: &Path) -> Result<(), EngineError> {
    let rgba = canvas_to_rgba(canvas);
    let w = u32::try_from(canvas.pixel_width()).map_err(|_| EngineError::InvalidDimensions)?;
    let h = u32::try_from(canvas.pixel_height()).map_err(|_| EngineError::InvalidDimensions)?;
    let img = image::RgbaImage::from_raw(w, h, rgba)
        .ok_or_else(|| EngineError::Io("RGBA buffer size mismatch".into()))?;
    img.save(path).map_err(|e| EngineError::Io(e.to_string()))
}
