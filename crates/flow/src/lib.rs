#![deny(unsafe_code)]
//! Undulate flow-field sketch.
//!
//! A [`Field`] draws a table of 96 random coefficients that define a smooth
//! vector field over `[-1, 1]^2`. Particles are seeded in forward/backward
//! pairs and advected through that field one step per frame, each step
//! leaving a translucent dot on the canvas. Over `times` cycles of
//! `max_frames` frames the dots build up the flow lines of the field.
//!
//! [`Undulate`] drives the whole piece through the
//! [`Simulation`](undulate_core::Simulation) trait.

pub mod colors;
pub mod field;
pub mod particle;
pub mod sketch;
pub mod vector;

pub use colors::ColorScheme;
pub use field::{Axis, Coefficients, Field};
pub use particle::Particle;
pub use sketch::{SketchParams, Toggles, Undulate};
pub use vector::{Plotter, Vector2};
