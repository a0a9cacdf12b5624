//! Canvas-derived constants computed once at setup.

use crate::error::EngineError;
use crate::params::DEFAULT_RESOLUTION;
use serde::Serialize;

/// Sizes a sketch derives from its host window.
///
/// The logical canvas is the largest square that fits the window. Drawing
/// sizes are expressed against a [`DEFAULT_RESOLUTION`]-wide reference canvas
/// (`scaling`), and the backing raster is always `custom_size` pixels wide
/// regardless of the window (`density = custom_size / canvas_size`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CanvasGeometry {
    pub canvas_size: f64,
    pub custom_size: f64,
    /// `canvas_size / 4096`.
    pub scaling: f64,
    /// `canvas_size / custom_size`.
    pub res: f64,
}

impl CanvasGeometry {
    /// Derives the geometry for a `window_width x window_height` host.
    ///
    /// Returns `EngineError::InvalidDimensions` unless every input is finite
    /// and positive.
    pub fn new(window_width: f64, window_height: f64, custom_size: f64) -> Result<Self, EngineError> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !valid(window_width) || !valid(window_height) || !valid(custom_size) {
            return Err(EngineError::InvalidDimensions);
        }
        let canvas_size = window_width.min(window_height);
        Ok(Self {
            canvas_size,
            custom_size,
            scaling: canvas_size / DEFAULT_RESOLUTION,
            res: canvas_size / custom_size,
        })
    }

    /// Square geometry of side `size`.
    pub fn square(size: f64, custom_size: f64) -> Result<Self, EngineError> {
        Self::new(size, size, custom_size)
    }

    /// Raster pixels per logical unit.
    pub fn pixel_density(&self) -> f64 {
        1.0 / self.res
    }
}
