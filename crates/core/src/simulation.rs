//! The `Simulation` trait every sketch implements.
//!
//! A sketch is driven by its host: `initialize` once (setup), then `step`
//! once per frame until it answers [`StepOutcome::Halt`]. The trait is
//! object-safe so sketches can be used as `dyn Simulation`.

use crate::canvas::Canvas;
use crate::error::EngineError;
use serde_json::Value;

/// What the host should do after a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Keep calling `step` with the next frame index.
    Continue,
    /// The sketch is finished; further frames are no-ops.
    Halt,
}

/// Core trait for frame-driven generative sketches.
pub trait Simulation {
    /// One-time setup: derive constants, draw one-time random choices and
    /// create the canvas.
    fn initialize(&mut self) -> Result<(), EngineError>;

    /// Advance by one frame. `frame` is 1-indexed.
    ///
    /// Returns `EngineError::NotInitialized` if called before `initialize`.
    fn step(&mut self, frame: u64) -> Result<StepOutcome, EngineError>;

    /// The drawing surface, once initialized.
    fn canvas(&self) -> Option<&Canvas>;

    /// Current parameter values as a JSON object.
    fn params(&self) -> Value;

    /// Schema describing all available parameters, their types, ranges, and defaults.
    fn param_schema(&self) -> Value;

    /// True once the sketch has halted and its final image is ready.
    fn preview_captured(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Srgb;
    use serde_json::json;

    /// Minimal sketch that halts after a fixed number of frames.
    struct Countdown {
        canvas: Option<Canvas>,
        frames: u64,
        stepped: u64,
    }

    impl Countdown {
        fn new(frames: u64) -> Self {
            Self {
                canvas: None,
                frames,
                stepped: 0,
            }
        }
    }

    impl Simulation for Countdown {
        fn initialize(&mut self) -> Result<(), EngineError> {
            self.canvas = Some(Canvas::new(4.0, 4.0, 1.0, Srgb::BLACK)?);
            Ok(())
        }

        fn step(&mut self, frame: u64) -> Result<StepOutcome, EngineError> {
            if self.canvas.is_none() {
                return Err(EngineError::NotInitialized);
            }
            if frame > self.frames {
                return Ok(StepOutcome::Halt);
            }
            self.stepped += 1;
            Ok(if frame == self.frames {
                StepOutcome::Halt
            } else {
                StepOutcome::Continue
            })
        }

        fn canvas(&self) -> Option<&Canvas> {
            self.canvas.as_ref()
        }

        fn params(&self) -> Value {
            json!({"frames": self.frames})
        }

        fn param_schema(&self) -> Value {
            json!({"frames": {"type": "integer", "default": 3}})
        }
    }

    #[test]
    fn simulation_trait_is_object_safe() {
        let mut sim: Box<dyn Simulation> = Box::new(Countdown::new(3));
        assert!(sim.canvas().is_none());
        sim.initialize().unwrap();
        assert_eq!(sim.canvas().unwrap().pixel_width(), 4);
    }

    #[test]
    fn step_before_initialize_is_an_error() {
        let mut sim = Countdown::new(3);
        assert!(matches!(sim.step(1), Err(EngineError::NotInitialized)));
    }

    #[test]
    fn countdown_halts_on_last_frame() {
        let mut sim = Countdown::new(3);
        sim.initialize().unwrap();
        assert_eq!(sim.step(1).unwrap(), StepOutcome::Continue);
        assert_eq!(sim.step(2).unwrap(), StepOutcome::Continue);
        assert_eq!(sim.step(3).unwrap(), StepOutcome::Halt);
        assert_eq!(sim.step(4).unwrap(), StepOutcome::Halt);
        assert_eq!(sim.stepped, 3);
    }

    #[test]
    fn default_preview_captured_is_false() {
        let sim = Countdown::new(1);
        assert!(!sim.preview_captured());
    }

    #[test]
    fn dyn_reference_exposes_params() {
        let sim = Countdown::new(5);
        let sim_ref: &dyn Simulation = &sim;
        assert_eq!(sim_ref.params()["frames"], 5);
        assert_eq!(sim_ref.param_schema()["frames"]["type"], "integer");
    }
}
