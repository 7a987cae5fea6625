//! Timer-driven input → transformer → output animation.

mod component;
mod state;

pub use component::PipelineAnimator;
pub use state::{INPUT_CELLS, PHASE_PERIOD, PhaseTask, PipelinePhase, Scheduler, Stage, TaskHandle};
