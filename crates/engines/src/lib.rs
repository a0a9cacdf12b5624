#![deny(unsafe_code)]
//! Sketch registry, frame-loop runner and CPU-side snapshot rendering.
//!
//! This crate sits between `undulate-core` (which defines the `Simulation`
//! trait) and the sketch crates (`undulate-flow`). The CLI depends on it to
//! avoid duplicating dispatch and frame-loop logic.

pub mod pixel;
pub mod runner;

#[cfg(feature = "png")]
pub mod snapshot;

use serde_json::Value;
use undulate_core::{Canvas, EngineError, Simulation, StepOutcome};

/// All available sketch names.
const ENGINE_NAMES: &[&str] = &["undulate"];

/// Enumeration of all available sketches.
///
/// Wraps each sketch and delegates `Simulation` trait methods.
/// Use [`EngineKind::from_name`] for string-based construction.
pub enum EngineKind {
    /// Particles advected through a random polynomial/harmonic flow field.
    Undulate(undulate_flow::Undulate),
}

impl EngineKind {
    /// Constructs a sketch by name on a square canvas of side `size` with a
    /// raster `resolution` pixels wide.
    ///
    /// Returns `EngineError::UnknownEngine` if the name is not recognized.
    pub fn from_name(
        name: &str,
        size: f64,
        resolution: f64,
        seed: u64,
        params: &Value,
    ) -> Result<Self, EngineError> {
        match name {
            "undulate" => Ok(EngineKind::Undulate(undulate_flow::Undulate::from_json(
                size, resolution, seed, params,
            )?)),
            _ => Err(EngineError::UnknownEngine(name.to_string())),
        }
    }

    /// Returns a slice of all recognized sketch names.
    pub fn list_engines() -> &'static [&'static str] {
        ENGINE_NAMES
    }

    /// Frames on which the sketch replaced its particle population, in order.
    pub fn reseed_frames(&self) -> &[u64] {
        match self {
            EngineKind::Undulate(e) => e.reseed_frames(),
        }
    }
}

impl Simulation for EngineKind {
    fn initialize(&mut self) -> Result<(), EngineError> {
        match self {
            EngineKind::Undulate(e) => e.initialize(),
        }
    }

    fn step(&mut self, frame: u64) -> Result<StepOutcome, EngineError> {
        match self {
            EngineKind::Undulate(e) => e.step(frame),
        }
    }

    fn canvas(&self) -> Option<&Canvas> {
        match self {
            EngineKind::Undulate(e) => e.canvas(),
        }
    }

    fn params(&self) -> Value {
        match self {
            EngineKind::Undulate(e) => e.params(),
        }
    }

    fn param_schema(&self) -> Value {
        match self {
            EngineKind::Undulate(e) => e.param_schema(),
        }
    }

    fn preview_captured(&self) -> bool {
        match self {
            EngineKind::Undulate(e) => e.preview_captured(),
        }
    }
}
