//! One-time color choice for a piece.

use serde::Serialize;
use undulate_core::{Hsb, RandomSource, Srgb};

/// Largest distance of the background brightness from its extreme.
const F_MAX: f64 = 0.1;

/// Background and dot colors, fixed for the lifetime of a piece.
///
/// Most pieces get a bright, barely saturated background with dark dots. The
/// `colors` toggle flips that into a dark saturated background with light dots.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ColorScheme {
    pub hue: f64,
    /// Brightness of the background; `1 - f` is its saturation.
    pub f: f64,
    pub background: Srgb,
    pub fill: Srgb,
}

impl ColorScheme {
    /// Draws the hue, then the brightness offset.
    pub fn random<R: RandomSource + ?Sized>(rng: &mut R, colors: bool) -> Self {
        let hue = rng.next_f64();
        let spread = F_MAX * (rng.next_f64() + 1.0) / 2.0;
        let f = if colors { spread } else { 1.0 - spread };
        Self::from_hue(hue, f)
    }

    /// Background `HSB(hue, 1 - f, f)`, fill `HSB((hue + f) mod 1, 1 - f, 1 - f)`.
    pub fn from_hue(hue: f64, f: f64) -> Self {
        Self {
            hue,
            f,
            background: Hsb::new(hue, 1.0 - f, f).into(),
            fill: Hsb::new((hue + f) % 1.0, 1.0 - f, 1.0 - f).into(),
        }
    }
}
