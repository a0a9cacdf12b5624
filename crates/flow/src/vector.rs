//! Immutable 2D point in the sketch's `[-1, 1]^2` domain, and its mapping
//! onto the canvas.

use glam::DVec2;
use undulate_core::{Canvas, CanvasGeometry, Srgb};

/// Fixed dot diameter at `scale == 1` on the 4096-wide reference canvas.
const DOT_DIAMETER: f64 = 4.0;

/// An immutable 2D point / vector. Every transform returns a new value.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector2(DVec2);

impl Vector2 {
    pub fn new(x: f64, y: f64) -> Self {
        Self(DVec2::new(x, y))
    }

    pub fn x(self) -> f64 {
        self.0.x
    }

    pub fn y(self) -> f64 {
        self.0.y
    }

    /// Returns this point offset by `(dx, dy)`.
    pub fn translate(self, dx: f64, dy: f64) -> Self {
        Self(self.0 + DVec2::new(dx, dy))
    }

    /// Euclidean distance to `other`.
    pub fn distance(self, other: Vector2) -> f64 {
        self.0.distance(other.0)
    }

    /// Clamps each coordinate independently to `[-1, 1]`.
    ///
    /// A NaN coordinate becomes `-1`.
    pub fn clamp_to_domain(self) -> Self {
        Self(self.0.clamp(DVec2::NEG_ONE, DVec2::ONE))
    }

    /// True if both coordinates lie in `[-1, 1]`, bounds included.
    pub fn in_domain(self) -> bool {
        (-1.0..=1.0).contains(&self.0.x) && (-1.0..=1.0).contains(&self.0.y)
    }

    /// Draws a dot at this point, `scale` times the base dot size.
    pub fn plot(self, scale: f64, plotter: &mut Plotter<'_>) {
        plotter.dot((1.0 + self.0.x) / 2.0, (1.0 + self.0.y) / 2.0, scale * plotter.scaling);
    }
}

/// Draws dots onto a canvas inside a margin of `border * canvas_size`.
///
/// Borrowed for one frame; holds the fill color and opacity chosen at setup.
pub struct Plotter<'a> {
    canvas: &'a mut Canvas,
    canvas_size: f64,
    scaling: f64,
    border: f64,
    fill: Srgb,
    alpha: f64,
    dots: usize,
}

impl<'a> Plotter<'a> {
    pub fn new(
        canvas: &'a mut Canvas,
        geometry: &CanvasGeometry,
        border: f64,
        fill: Srgb,
        alpha: f64,
    ) -> Self {
        Self {
            canvas,
            canvas_size: geometry.canvas_size,
            scaling: geometry.scaling,
            border,
            fill,
            alpha,
            dots: 0,
        }
    }

    /// Logical canvas coordinate of the normalized position `n` in `[0, 1]`.
    pub fn to_canvas(&self, n: f64) -> f64 {
        self.canvas_size * (self.border + n * (1.0 - 2.0 * self.border))
    }

    /// Fills a circle of diameter `4 * s` at normalized `(nx, ny)`.
    pub fn dot(&mut self, nx: f64, ny: f64, s: f64) {
        let cx = self.to_canvas(nx);
        let cy = self.to_canvas(ny);
        self.canvas
            .fill_circle(cx, cy, DOT_DIAMETER * s, self.fill, self.alpha);
        self.dots += 1;
    }

    /// Number of dots drawn through this plotter.
    pub fn dots(&self) -> usize {
        self.dots
    }
}
