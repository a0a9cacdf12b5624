#![deny(unsafe_code)]
//! Core types and traits for the undulate generative sketches.
//!
//! Provides the host side of a sketch: the `Simulation` trait, the `Canvas`
//! raster, canvas geometry, `Srgb`/`Hsb` colors, the `RandomSource`
//! abstraction with its `Xorshift64` and `Replay` implementations, `Seed`,
//! and parameter helpers.

pub mod canvas;
pub mod color;
pub mod error;
pub mod geometry;
pub mod params;
pub mod prng;
pub mod seed;
pub mod simulation;

pub use canvas::Canvas;
pub use color::{Hsb, Srgb};
pub use error::EngineError;
pub use geometry::CanvasGeometry;
pub use prng::{RandomSource, Replay, Xorshift64};
pub use seed::Seed;
pub use simulation::{Simulation, StepOutcome};
