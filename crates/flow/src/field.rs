//! The flow function and the particle population that follows it.
//!
//! A [`Coefficients`] table parameterizes a fixed polynomial/harmonic vector
//! field over `[-1, 1]^2`. It is drawn once per [`Field`] and never redrawn;
//! only the population is replaced at each reseed.

use crate::particle::Particle;
use crate::vector::Plotter;
use undulate_core::RandomSource;

/// Entries in each of the `a`, `b` and `c` tables.
pub const COEFFICIENT_COUNT: usize = 32;
/// Coefficients consumed per axis from each table.
pub const TERMS_PER_AXIS: usize = 8;
/// Smallest stiffness `m`.
pub const MIN_STIFFNESS: u32 = 8;
/// Number of distinct stiffness values above [`MIN_STIFFNESS`].
pub const STIFFNESS_SPAN: u32 = 4;
/// Step length before dividing by `m`.
const BASE_STEP: f64 = 0.01;

/// Output axis of the flow function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    /// Offset of this axis's coefficients within each table.
    fn offset(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => TERMS_PER_AXIS,
        }
    }
}

/// Flow-function coefficients: stiffness `m` and tables `a`, `b`, `c`.
#[derive(Debug, Clone, PartialEq)]
pub struct Coefficients {
    m: u32,
    a: [f64; COEFFICIENT_COUNT],
    b: [f64; COEFFICIENT_COUNT],
    c: [f64; COEFFICIENT_COUNT],
}

impl Coefficients {
    /// Draws `m` in `[8, 12)`, then all of `a`, all of `b`, all of `c`,
    /// each uniform in `[-m, m)`.
    pub fn random<R: RandomSource + ?Sized>(rng: &mut R) -> Self {
        let span = rng.next_f64() * STIFFNESS_SPAN as f64;
        let m = MIN_STIFFNESS + (span.floor() as u32).min(STIFFNESS_SPAN - 1);
        let bound = m as f64;
        let mut table = || -> [f64; COEFFICIENT_COUNT] {
            std::array::from_fn(|_| rng.next_range(-bound, bound))
        };
        let a = table();
        let b = table();
        let c = table();
        Self { m, a, b, c }
    }

    /// Builds a table from explicit values. `m` must be non-zero.
    pub fn from_parts(
        m: u32,
        a: [f64; COEFFICIENT_COUNT],
        b: [f64; COEFFICIENT_COUNT],
        c: [f64; COEFFICIENT_COUNT],
    ) -> Self {
        Self {
            m: m.max(1),
            a,
            b,
            c,
        }
    }

    pub fn m(&self) -> u32 {
        self.m
    }

    pub fn a(&self) -> &[f64; COEFFICIENT_COUNT] {
        &self.a
    }

    pub fn b(&self) -> &[f64; COEFFICIENT_COUNT] {
        &self.b
    }

    pub fn c(&self) -> &[f64; COEFFICIENT_COUNT] {
        &self.c
    }

    /// Unsigned particle step, `0.01 / m`.
    pub fn base_step(&self) -> f64 {
        BASE_STEP / self.m as f64
    }

    /// Evaluates the flow function's `axis` component at `(x, y)`.
    ///
    /// ```text
    /// a0 sin(x b0 + c0) + a1 sin(y b1 + c1) + a2 cos(x b2 + c2) + a3 cos(y b3 + c3)
    /// + a4 x + b4 x^2 + c4 x^3 + a5 y + b5 y^2 + c5 y^3
    /// + a6 xy + b6 x^2 y + c6 x y^2 + a7 x^2 y^2 + b7 x^2 y^3 + c7 x^3 y^2
    /// ```
    /// with `a_k = a[k + 8 * axis]`, likewise `b_k` and `c_k`.
    pub fn evaluate(&self, x: f64, y: f64, axis: Axis) -> f64 {
        let o = axis.offset();
        let a = &self.a[o..o + TERMS_PER_AXIS];
        let b = &self.b[o..o + TERMS_PER_AXIS];
        let c = &self.c[o..o + TERMS_PER_AXIS];

        let x2 = x * x;
        let x3 = x2 * x;
        let y2 = y * y;
        let y3 = y2 * y;

        a[0] * (x * b[0] + c[0]).sin()
            + a[1] * (y * b[1] + c[1]).sin()
            + a[2] * (x * b[2] + c[2]).cos()
            + a[3] * (y * b[3] + c[3]).cos()
            + (a[4] * x + b[4] * x2 + c[4] * x3)
            + (a[5] * y + b[5] * y2 + c[5] * y3)
            + (a[6] * x * y + b[6] * x2 * y + c[6] * x * y2)
            + (a[7] * x2 * y2 + b[7] * x2 * y3 + c[7] * x3 * y2)
    }
}

/// Owns the flow coefficients and the live particle population.
#[derive(Debug, Clone)]
pub struct Field {
    coefficients: Coefficients,
    points: Vec<Particle>,
}

impl Field {
    /// Draws fresh coefficients; the population starts empty.
    pub fn new<R: RandomSource + ?Sized>(rng: &mut R) -> Self {
        Self::with_coefficients(Coefficients::random(rng))
    }

    pub fn with_coefficients(coefficients: Coefficients) -> Self {
        Self {
            coefficients,
            points: Vec::new(),
        }
    }

    pub fn coefficients(&self) -> &Coefficients {
        &self.coefficients
    }

    pub fn m(&self) -> u32 {
        self.coefficients.m
    }

    /// Live particles in creation order.
    pub fn points(&self) -> &[Particle] {
        &self.points
    }

    /// Discards the whole population.
    pub fn clear_points(&mut self) {
        self.points.clear();
    }

    /// Appends `n` forward/backward pairs.
    ///
    /// Each pair draws `x` then `y` uniformly in `[-1, 1)` and shares that
    /// start; the forward particle is pushed first.
    pub fn initialize_points<R: RandomSource + ?Sized>(&mut self, n: usize, rng: &mut R) {
        self.points.reserve(n.saturating_mul(2));
        for _ in 0..n {
            let x = rng.next_range(-1.0, 1.0);
            let y = rng.next_range(-1.0, 1.0);
            self.points
                .push(Particle::new(x, y, &self.coefficients, true));
            self.points
                .push(Particle::new(x, y, &self.coefficients, false));
        }
    }

    /// Advances and plots every particle once, in order.
    pub fn update<R: RandomSource + ?Sized>(
        &mut self,
        excursions: bool,
        rng: &mut R,
        plotter: &mut Plotter<'_>,
    ) {
        let coefficients = &self.coefficients;
        for particle in &mut self.points {
            particle.update(coefficients, excursions, rng, plotter);
        }
    }
}
