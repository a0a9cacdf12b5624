//! The host frame loop: setup once, then step until the sketch halts.

use undulate_core::{EngineError, Simulation, StepOutcome};

/// Result of driving a sketch to completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Frames passed to `step`, including the one that answered `Halt`.
    pub frames: u64,
    /// False if `frame_limit` was reached first.
    pub halted: bool,
}

/// Initializes `sim` and steps frames `1, 2, ...` until it halts or
/// `frame_limit` frames have run.
///
/// `on_frame` sees the sketch after every frame, with the frame index and
/// its outcome, in order.
pub fn run<S, F>(sim: &mut S, frame_limit: u64, mut on_frame: F) -> Result<RunSummary, EngineError>
where
    S: Simulation + ?Sized,
    F: FnMut(&S, u64, StepOutcome),
{
    sim.initialize()?;
    for frame in 1..=frame_limit {
        let outcome = sim.step(frame)?;
        on_frame(sim, frame, outcome);
        if outcome == StepOutcome::Halt {
            return Ok(RunSummary {
                frames: frame,
                halted: true,
            });
        }
    }
    Ok(RunSummary {
        frames: frame_limit,
        halted: false,
    })
}
