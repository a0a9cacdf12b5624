//! The undulate driver: setup, periodic reseeding and the frame budget.

use crate::colors::ColorScheme;
use crate::field::Field;
use crate::vector::Plotter;
use serde::Serialize;
use serde_json::{json, Value};
use undulate_core::error::EngineError;
use undulate_core::params::{param_f64, param_usize};
use undulate_core::{Canvas, CanvasGeometry, RandomSource, Simulation, StepOutcome, Xorshift64};

/// Default dot opacity.
const DEFAULT_ALPHA: f64 = 0.4;
/// Default number of reseed cycles.
const DEFAULT_TIMES: usize = 4;
/// Default plot margin as a fraction of the canvas side.
const DEFAULT_BORDER: f64 = 0.2;
/// Default frames per cycle.
const DEFAULT_MAX_FRAMES: usize = 128;
/// Default particle pairs seeded per cycle.
const DEFAULT_AMOUNT: usize = 1024;
/// Largest accepted `amount`.
pub const MAX_AMOUNT: usize = 1 << 20;
/// Probability of the excursion toggle.
const FRAME_CHANCE: f64 = 0.15;
/// Probability of the inverted color toggle.
const COLORS_CHANCE: f64 = 0.05;

/// Tunable constants of a piece. Fixed once the sketch is constructed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SketchParams {
    /// Dot opacity in [0, 1].
    pub alpha: f64,
    /// Number of reseed cycles.
    pub times: usize,
    /// Plot margin in [0, 0.5).
    pub border: f64,
    /// Frames per cycle.
    pub max_frames: usize,
    /// Forward/backward pairs seeded per cycle.
    pub amount: usize,
}

impl Default for SketchParams {
    fn default() -> Self {
        Self {
            alpha: DEFAULT_ALPHA,
            times: DEFAULT_TIMES,
            border: DEFAULT_BORDER,
            max_frames: DEFAULT_MAX_FRAMES,
            amount: DEFAULT_AMOUNT,
        }
    }
}

impl SketchParams {
    /// Extracts parameters from a JSON object, falling back to defaults.
    pub fn from_json(params: &Value) -> Self {
        Self {
            alpha: param_f64(params, "alpha", DEFAULT_ALPHA),
            times: param_usize(params, "times", DEFAULT_TIMES),
            border: param_f64(params, "border", DEFAULT_BORDER),
            max_frames: param_usize(params, "max_frames", DEFAULT_MAX_FRAMES),
            amount: param_usize(params, "amount", DEFAULT_AMOUNT),
        }
    }

    /// Rejects values that leave nothing to draw or map off the canvas.
    pub fn validate(&self) -> Result<(), EngineError> {
        let invalid = |name: &str, reason: &str| {
            Err(EngineError::InvalidParam {
                name: name.to_string(),
                reason: reason.to_string(),
            })
        };
        if !(0.0..=1.0).contains(&self.alpha) {
            return invalid("alpha", "must be in [0, 1]");
        }
        if !(0.0..0.5).contains(&self.border) {
            return invalid("border", "must be in [0, 0.5)");
        }
        if self.times == 0 {
            return invalid("times", "must be at least 1");
        }
        if self.max_frames == 0 {
            return invalid("max_frames", "must be at least 1");
        }
        if self.amount > MAX_AMOUNT {
            return invalid("amount", "must be at most 1048576");
        }
        if self.total_frames().is_none() {
            return invalid("times", "times * max_frames overflows");
        }
        Ok(())
    }

    /// Frame budget `max_frames * times`, or `None` on overflow.
    pub fn total_frames(&self) -> Option<u64> {
        (self.max_frames as u64).checked_mul(self.times as u64)
    }

    /// True on frames where the population is replaced: frame 1 and every
    /// multiple of `max_frames`.
    pub fn is_reseed_frame(&self, frame: u64) -> bool {
        frame == 1 || frame % self.max_frames as u64 == 0
    }
}

/// Boolean features decided once, before setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Toggles {
    /// Lets particles keep unclamped positions half of the time.
    pub frame: bool,
    /// Dark background with light dots.
    pub colors: bool,
}

impl Toggles {
    /// Draws `frame`, then `colors`.
    pub fn random<R: RandomSource + ?Sized>(rng: &mut R) -> Self {
        let frame = rng.chance(FRAME_CHANCE);
        let colors = rng.chance(COLORS_CHANCE);
        Self { frame, colors }
    }
}

/// JSON view of a sketch: parameters, toggles and, once set up, the palette.
#[derive(Serialize)]
struct Report<'a> {
    #[serde(flatten)]
    params: &'a SketchParams,
    #[serde(flatten)]
    toggles: Toggles,
    #[serde(skip_serializing_if = "Option::is_none")]
    palette: Option<&'a ColorScheme>,
}

/// State created by `initialize`.
#[derive(Debug, Clone)]
struct Scene {
    canvas: Canvas,
    field: Field,
    colors: ColorScheme,
}

/// The undulate sketch.
///
/// Seeds a flow [`Field`] and, every `max_frames` frames, a fresh population
/// of `2 * amount` particles; each frame advances and plots every particle.
/// Halts after `max_frames * times` frames.
pub struct Undulate<R: RandomSource = Xorshift64> {
    params: SketchParams,
    geometry: CanvasGeometry,
    rng: R,
    toggles: Toggles,
    scene: Option<Scene>,
    frames_run: u64,
    reseed_frames: Vec<u64>,
    halted: bool,
}

impl<R: RandomSource> Undulate<R> {
    /// Creates the sketch and draws its toggles.
    ///
    /// Returns `EngineError::InvalidParam` if `params` fail validation.
    pub fn new(
        geometry: CanvasGeometry,
        params: SketchParams,
        mut rng: R,
    ) -> Result<Self, EngineError> {
        params.validate()?;
        let toggles = Toggles::random(&mut rng);
        Ok(Self {
            params,
            geometry,
            rng,
            toggles,
            scene: None,
            frames_run: 0,
            reseed_frames: Vec::new(),
            halted: false,
        })
    }

    pub fn sketch_params(&self) -> &SketchParams {
        &self.params
    }

    pub fn geometry(&self) -> &CanvasGeometry {
        &self.geometry
    }

    pub fn toggles(&self) -> Toggles {
        self.toggles
    }

    /// The flow field, once initialized.
    pub fn field(&self) -> Option<&Field> {
        self.scene.as_ref().map(|s| &s.field)
    }

    /// The color scheme, once initialized.
    pub fn colors(&self) -> Option<&ColorScheme> {
        self.scene.as_ref().map(|s| &s.colors)
    }

    /// Number of frames that advanced the field.
    pub fn frames_run(&self) -> u64 {
        self.frames_run
    }

    /// Frames on which the population was replaced, in order.
    pub fn reseed_frames(&self) -> &[u64] {
        &self.reseed_frames
    }

    pub fn is_halted(&self) -> bool {
        self.halted
    }

    fn budget(&self) -> u64 {
        // validate() guarantees this fits.
        self.params.total_frames().unwrap_or(u64::MAX)
    }
}

impl Undulate<Xorshift64> {
    /// Creates a square sketch of side `size` seeded with `seed`, reading
    /// parameter overrides from JSON.
    ///
    /// `resolution` is the raster side in pixels.
    pub fn from_json(
        size: f64,
        resolution: f64,
        seed: u64,
        params: &Value,
    ) -> Result<Self, EngineError> {
        let geometry = CanvasGeometry::square(size, resolution)?;
        Self::new(geometry, SketchParams::from_json(params), Xorshift64::new(seed))
    }
}

impl<R: RandomSource> Simulation for Undulate<R> {
    fn initialize(&mut self) -> Result<(), EngineError> {
        let colors = ColorScheme::random(&mut self.rng, self.toggles.colors);
        let field = Field::new(&mut self.rng);
        let size = self.geometry.canvas_size;
        let density = self.geometry.pixel_density();
        let canvas = Canvas::new(size, size, density, colors.background)?;
        self.scene = Some(Scene {
            canvas,
            field,
            colors,
        });
        self.frames_run = 0;
        self.reseed_frames.clear();
        self.halted = false;
        Ok(())
    }

    fn step(&mut self, frame: u64) -> Result<StepOutcome, EngineError> {
        if frame == 0 {
            return Err(EngineError::InvalidParam {
                name: "frame".into(),
                reason: "frames are 1-indexed".into(),
            });
        }
        let budget = self.budget();
        let scene = self.scene.as_mut().ok_or(EngineError::NotInitialized)?;
        if self.halted || frame > budget {
            self.halted = true;
            return Ok(StepOutcome::Halt);
        }

        if self.params.is_reseed_frame(frame) {
            scene.field.clear_points();
            scene.field.initialize_points(self.params.amount, &mut self.rng);
            self.reseed_frames.push(frame);
        }

        let mut plotter = Plotter::new(
            &mut scene.canvas,
            &self.geometry,
            self.params.border,
            scene.colors.fill,
            self.params.alpha,
        );
        scene.field.update(self.toggles.frame, &mut self.rng, &mut plotter);
        self.frames_run += 1;

        if frame >= budget {
            self.halted = true;
            return Ok(StepOutcome::Halt);
        }
        Ok(StepOutcome::Continue)
    }

    fn canvas(&self) -> Option<&Canvas> {
        self.scene.as_ref().map(|s| &s.canvas)
    }

    fn params(&self) -> Value {
        let report = Report {
            params: &self.params,
            toggles: self.toggles,
            palette: self.colors(),
        };
        serde_json::to_value(report).unwrap_or(Value::Null)
    }

    fn param_schema(&self) -> Value {
        json!({
            "alpha": {
                "type": "number",
                "default": DEFAULT_ALPHA,
                "min": 0.0,
                "max": 1.0,
                "description": "Dot opacity"
            },
            "times": {
                "type": "integer",
                "default": DEFAULT_TIMES,
                "min": 1,
                "description": "Number of reseed cycles before the piece halts"
            },
            "border": {
                "type": "number",
                "default": DEFAULT_BORDER,
                "min": 0.0,
                "max": 0.5,
                "description": "Plot margin as a fraction of the canvas side"
            },
            "max_frames": {
                "type": "integer",
                "default": DEFAULT_MAX_FRAMES,
                "min": 1,
                "description": "Frames per reseed cycle"
            },
            "amount": {
                "type": "integer",
                "default": DEFAULT_AMOUNT,
                "min": 0,
                "max": MAX_AMOUNT,
                "description": "Forward/backward particle pairs seeded per cycle"
            }
        })
    }

    fn preview_captured(&self) -> bool {
        self.halted
    }
}
