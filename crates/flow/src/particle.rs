//! A single point advected through the flow field.

use crate::field::{Axis, Coefficients};
use crate::vector::{Plotter, Vector2};
use undulate_core::RandomSource;

/// Probability that an excursion-enabled update keeps the unclamped position.
const EXCURSION_CHANCE: f64 = 0.5;

/// A particle moving forward or backward in time through a [`Coefficients`] table.
///
/// The particle never owns coefficients: the [`Field`](crate::Field) that
/// created it lends its table on every update.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    point: Vector2,
    forward: bool,
    step: f64,
}

impl Particle {
    /// Creates a particle at `(x, y)` whose step is `±0.01 / m`.
    pub fn new(x: f64, y: f64, coefficients: &Coefficients, forward: bool) -> Self {
        let step = coefficients.base_step();
        Self {
            point: Vector2::new(x, y),
            forward,
            step: if forward { step } else { -step },
        }
    }

    pub fn point(&self) -> Vector2 {
        self.point
    }

    pub fn forward(&self) -> bool {
        self.forward
    }

    /// Signed time step: positive iff the particle moves forward.
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Flow velocity component along `axis` at the current position.
    pub fn delta(&self, coefficients: &Coefficients, axis: Axis) -> f64 {
        coefficients.evaluate(self.point.x(), self.point.y(), axis)
    }

    /// Moves one step and returns the new position without plotting.
    ///
    /// The candidate is clamped to `[-1, 1]^2`. With `excursions` enabled one
    /// number is drawn from `rng` and, half of the time, the unclamped
    /// candidate is kept instead.
    pub fn advance<R: RandomSource + ?Sized>(
        &mut self,
        coefficients: &Coefficients,
        excursions: bool,
        rng: &mut R,
    ) -> Vector2 {
        let dx = self.delta(coefficients, Axis::X);
        let dy = self.delta(coefficients, Axis::Y);
        let candidate = self.point.translate(dx * self.step, dy * self.step);
        let clamped = candidate.clamp_to_domain();

        self.point = if excursions && rng.chance(EXCURSION_CHANCE) {
            candidate
        } else {
            clamped
        };
        self.point
    }

    /// Moves one step, then plots the new position at unit scale.
    pub fn update<R: RandomSource + ?Sized>(
        &mut self,
        coefficients: &Coefficients,
        excursions: bool,
        rng: &mut R,
        plotter: &mut Plotter<'_>,
    ) {
        self.advance(coefficients, excursions, rng).plot(1.0, plotter);
    }
}
