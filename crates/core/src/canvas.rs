//! Raster drawing surface for the sketches.
//!
//! A [`Canvas`] has a logical size (the coordinates sketches draw in) and a
//! pixel density: the backing RGB raster is `logical * density` pixels per
//! side. Drawing is source-over alpha blending, like a browser 2D canvas.
//!
//! Channels are kept as `f64` intensities so that many faint deposits add up;
//! quantization to 8 bits happens only on output ([`Canvas::to_rgb8`]).

use crate::color::Srgb;
use crate::error::EngineError;

/// Largest accepted raster side, in pixels.
pub const MAX_RASTER_SIDE: usize = 16_384;

/// An RGB raster with a logical coordinate system and a fill color.
#[derive(Debug, Clone)]
pub struct Canvas {
    width: f64,
    height: f64,
    density: f64,
    pixel_width: usize,
    pixel_height: usize,
    background: Srgb,
    samples: Vec<f64>,
}

impl Canvas {
    /// Creates a canvas of `width x height` logical units filled with `background`.
    ///
    /// Returns `EngineError::InvalidDimensions` if the logical size or density is
    /// not finite and positive, or if the resulting raster is empty or larger
    /// than [`MAX_RASTER_SIDE`] on either side.
    pub fn new(width: f64, height: f64, density: f64, background: Srgb) -> Result<Self, EngineError> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !valid(width) || !valid(height) || !valid(density) {
            return Err(EngineError::InvalidDimensions);
        }
        let pixel_width = (width * density).round();
        let pixel_height = (height * density).round();
        let side_ok = |p: f64| (1.0..=MAX_RASTER_SIDE as f64).contains(&p);
        if !side_ok(pixel_width) || !side_ok(pixel_height) {
            return Err(EngineError::InvalidDimensions);
        }
        let pixel_width = pixel_width as usize;
        let pixel_height = pixel_height as usize;

        let mut canvas = Self {
            width,
            height,
            density,
            pixel_width,
            pixel_height,
            background,
            samples: vec![0.0; pixel_width * pixel_height * 3],
        };
        canvas.clear();
        Ok(canvas)
    }

    /// Logical width.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Logical height.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Raster pixels per logical unit.
    pub fn density(&self) -> f64 {
        self.density
    }

    pub fn pixel_width(&self) -> usize {
        self.pixel_width
    }

    pub fn pixel_height(&self) -> usize {
        self.pixel_height
    }

    pub fn background(&self) -> Srgb {
        self.background
    }

    /// Row-major RGB intensities in [0, 1], `pixel_width * pixel_height * 3` long.
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Row-major 8-bit RGB bytes, rounded from [`samples`](Self::samples).
    pub fn to_rgb8(&self) -> Vec<u8> {
        self.samples.iter().map(|&v| quantize(v)).collect()
    }

    /// 8-bit RGB of raster pixel `(px, py)`, or `None` outside the raster.
    pub fn pixel(&self, px: usize, py: usize) -> Option<[u8; 3]> {
        if px >= self.pixel_width || py >= self.pixel_height {
            return None;
        }
        let i = (py * self.pixel_width + px) * 3;
        let s = &self.samples[i..i + 3];
        Some([quantize(s[0]), quantize(s[1]), quantize(s[2])])
    }

    /// Repaints every pixel with the background color.
    pub fn clear(&mut self) {
        let Srgb { r, g, b } = self.background;
        let rgb = [r, g, b].map(|c| c.clamp(0.0, 1.0));
        for px in self.samples.chunks_exact_mut(3) {
            px.copy_from_slice(&rgb);
        }
    }

    /// Fills a disc centred at logical `(cx, cy)` with `color` at opacity `alpha`.
    ///
    /// Edges are anti-aliased by linear coverage. A disc narrower than one
    /// raster pixel deposits into the pixel containing its centre, with alpha
    /// scaled by the area it covers. Non-finite input draws nothing.
    pub fn fill_circle(&mut self, cx: f64, cy: f64, diameter: f64, color: Srgb, alpha: f64) {
        let px = cx * self.density;
        let py = cy * self.density;
        let r = 0.5 * diameter * self.density;
        if !(px.is_finite() && py.is_finite() && r.is_finite()) || r <= 0.0 || alpha <= 0.0 {
            return;
        }
        let alpha = alpha.min(1.0);
        let rgb = [color.r, color.g, color.b];

        if r < 0.5 {
            if px < 0.0 || py < 0.0 {
                return;
            }
            let coverage = (std::f64::consts::PI * r * r).min(1.0);
            self.blend(px as usize, py as usize, rgb, alpha * coverage);
            return;
        }

        let x0 = (px - r - 0.5).floor().max(0.0);
        let y0 = (py - r - 0.5).floor().max(0.0);
        let x1 = (px + r + 0.5).ceil().min(self.pixel_width as f64);
        let y1 = (py + r + 0.5).ceil().min(self.pixel_height as f64);
        if x0 >= x1 || y0 >= y1 {
            return;
        }

        for y in y0 as usize..y1 as usize {
            let dy = y as f64 + 0.5 - py;
            for x in x0 as usize..x1 as usize {
                let dx = x as f64 + 0.5 - px;
                let coverage = (r + 0.5 - (dx * dx + dy * dy).sqrt()).clamp(0.0, 1.0);
                if coverage > 0.0 {
                    self.blend(x, y, rgb, alpha * coverage);
                }
            }
        }
    }

    fn blend(&mut self, x: usize, y: usize, rgb: [f64; 3], alpha: f64) {
        if x >= self.pixel_width || y >= self.pixel_height {
            return;
        }
        let i = (y * self.pixel_width + x) * 3;
        for (dst, src) in self.samples[i..i + 3].iter_mut().zip(rgb) {
            *dst += (src.clamp(0.0, 1.0) - *dst) * alpha;
        }
    }
}

fn quantize(v: f64) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}
