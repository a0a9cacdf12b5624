//! Reproducible description of a rendered piece.
//!
//! A [`Seed`] captures everything needed to recreate an image: sketch name,
//! logical canvas size, raster resolution, parameter overrides and PRNG seed.

use crate::error::EngineError;
use crate::params::DEFAULT_RESOLUTION;
use serde::{Deserialize, Serialize};

/// Reproducible specification for a rendered piece.
///
/// Two identical `Seed` values fed to the same binary produce identical output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Seed {
    pub engine: String,
    /// Logical canvas side (the smaller window dimension in a browser host).
    pub size: f64,
    /// Raster side in pixels; the `res` query parameter.
    pub resolution: f64,
    pub params: serde_json::Value,
    pub seed: u64,
}

impl Seed {
    /// Creates a new Seed with default params (`{}`) and the default resolution.
    pub fn new(engine: &str, size: f64, seed: u64) -> Self {
        Self {
            engine: engine.to_string(),
            size,
            resolution: DEFAULT_RESOLUTION,
            params: serde_json::Value::Object(serde_json::Map::new()),
            seed,
        }
    }

    /// Validates that size and resolution are finite and positive.
    pub fn validate(&self) -> Result<(), EngineError> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !valid(self.size) || !valid(self.resolution) {
            return Err(EngineError::InvalidDimensions);
        }
        Ok(())
    }
}
