use std::time::Duration;

use crate::dom::DomError;

/// Interval between phase advances.
pub const PHASE_PERIOD: Duration = Duration::from_millis(2000);
const PHASE_COUNT: u8 = 4;
/// Cells in the 3×3 input grid.
pub const INPUT_CELLS: usize = 9;

/// Step of the animator cycle, always in `0..4`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct PipelinePhase(u8);

/// The three boxes of the pipeline diagram.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
	/// Raw tokens.
	Input,
	/// Attention layers.
	Transformer,
	/// Generated result.
	Output,
}

impl PipelinePhase {
	/// Every phase in cycle order.
	pub const ALL: [PipelinePhase; PHASE_COUNT as usize] = [Self(0), Self(1), Self(2), Self(3)];

	/// Position in the cycle.
	pub fn index(self) -> u8 {
		self.0
	}

	/// The phase after this one, wrapping 3 back to 0.
	pub fn next(self) -> Self {
		Self((self.0 + 1) % PHASE_COUNT)
	}

	/// The stage highlighted during this phase. The transformer holds for two phases.
	pub fn stage(self) -> Stage {
		match self.0 {
			0 => Stage::Input,
			1 | 2 => Stage::Transformer,
			_ => Stage::Output,
		}
	}

	/// Attention scan lines only run on the first transformer phase.
	pub fn is_scanning(self) -> bool {
		self.0 == 1
	}

	/// Whether the input → transformer connector is lit.
	pub fn feeds_transformer(self) -> bool {
		self.0 >= 1
	}

	/// Whether the transformer → output connector is lit.
	pub fn feeds_output(self) -> bool {
		self.0 >= 3
	}

	/// Whether `cell` of the input grid is drawn filled during this phase.
	/// Roughly a third of the cells are, in a fixed pattern that changes with the phase.
	pub fn input_dot_filled(self, cell: usize) -> bool {
		let seed = (self.0 as usize * INPUT_CELLS + cell) * 7919;
		let x = ((seed + 1) * 9301 + 49297) % 233280;
		(x as f64) / 233280.0 > 0.7
	}
}

/// A registration that can be cancelled exactly once.
pub trait TaskHandle {
	/// Release the registration; its callback never runs afterwards.
	fn cancel(self);
}

/// Something that can invoke a callback on a fixed period until cancelled.
pub trait Scheduler {
	/// Cancellation handle of a running registration.
	type Handle: TaskHandle;

	/// Call `tick` every `period` until the returned handle is cancelled.
	fn repeat(&self, period: Duration, tick: Box<dyn FnMut()>) -> Result<Self::Handle, DomError>;
}

/// The animator's repeating tick. Stopping (or dropping) it guarantees the tick
/// callback never runs again.
pub struct PhaseTask<H: TaskHandle> {
	handle: Option<H>,
}

impl<H: TaskHandle> PhaseTask<H> {
	/// Register the tick with `scheduler`; the first tick fires one period from now.
	pub fn start<S>(scheduler: &S, mut on_tick: impl FnMut() + 'static) -> Result<Self, DomError>
	where
		S: Scheduler<Handle = H>,
	{
		let handle = scheduler.repeat(PHASE_PERIOD, Box::new(move || on_tick()))?;
		Ok(Self {
			handle: Some(handle),
		})
	}

	/// Whether the tick is still registered.
	pub fn is_running(&self) -> bool {
		self.handle.is_some()
	}

	/// Cancel the tick. Idempotent.
	pub fn stop(&mut self) {
		if let Some(handle) = self.handle.take() {
			handle.cancel();
		}
	}
}

impl<H: TaskHandle> Drop for PhaseTask<H> {
	fn drop(&mut self) {
		self.stop();
	}
}

#[cfg(test)]
mod tests {
	use std::cell::{Cell, RefCell};
	use std::rc::Rc;

	use super::*;

	struct Timer {
		period_ms: u64,
		due_ms: u64,
		tick: Box<dyn FnMut()>,
		cancelled: Rc<Cell<bool>>,
	}

	/// Virtual clock: timers fire only when `advance` moves time past them.
	#[derive(Default)]
	struct ManualScheduler {
		now_ms: Cell<u64>,
		timers: RefCell<Vec<Timer>>,
	}

	struct ManualHandle(Rc<Cell<bool>>);

	impl TaskHandle for ManualHandle {
		fn cancel(self) {
			self.0.set(true);
		}
	}

	impl Scheduler for ManualScheduler {
		type Handle = ManualHandle;

		fn repeat(&self, period: Duration, tick: Box<dyn FnMut()>) -> Result<ManualHandle, DomError> {
			let cancelled = Rc::new(Cell::new(false));
			let period_ms = period.as_millis() as u64;
			self.timers.borrow_mut().push(Timer {
				period_ms,
				due_ms: self.now_ms.get() + period_ms,
				tick,
				cancelled: cancelled.clone(),
			});
			Ok(ManualHandle(cancelled))
		}
	}

	impl ManualScheduler {
		fn advance(&self, ms: u64) {
			let target = self.now_ms.get() + ms;
			let mut timers = self.timers.borrow_mut();
			timers.retain(|t| !t.cancelled.get());
			while let Some(timer) = timers
				.iter_mut()
				.filter(|t| !t.cancelled.get() && t.due_ms <= target)
				.min_by_key(|t| t.due_ms)
			{
				self.now_ms.set(timer.due_ms);
				timer.due_ms += timer.period_ms;
				(timer.tick)();
			}
			self.now_ms.set(target);
		}

		fn live_timers(&self) -> usize {
			self.timers.borrow().iter().filter(|t| !t.cancelled.get()).count()
		}
	}

	fn start_counter(
		scheduler: &ManualScheduler,
	) -> (PhaseTask<ManualHandle>, Rc<Cell<PipelinePhase>>) {
		let phase = Rc::new(Cell::new(PipelinePhase::default()));
		let phase_tick = phase.clone();
		let task = PhaseTask::start(scheduler, move || phase_tick.set(phase_tick.get().next()))
			.expect("manual scheduler never fails");
		(task, phase)
	}

	#[test]
	fn four_ticks_from_zero_cycle_back() {
		let scheduler = ManualScheduler::default();
		let (_task, phase) = start_counter(&scheduler);

		let mut seen = Vec::new();
		for _ in 0..4 {
			scheduler.advance(PHASE_PERIOD.as_millis() as u64);
			seen.push(phase.get().index());
		}
		assert_eq!(seen, vec![1, 2, 3, 0]);
	}

	#[test]
	fn first_tick_waits_a_full_period() {
		let scheduler = ManualScheduler::default();
		let (_task, phase) = start_counter(&scheduler);

		scheduler.advance(1999);
		assert_eq!(phase.get().index(), 0);
		scheduler.advance(1);
		assert_eq!(phase.get().index(), 1);
	}

	#[test]
	fn large_jump_fires_every_elapsed_period() {
		let scheduler = ManualScheduler::default();
		let (_task, phase) = start_counter(&scheduler);

		scheduler.advance(5 * 2000);
		assert_eq!(phase.get().index(), 1);
	}

	#[test]
	fn no_tick_after_stop() {
		let scheduler = ManualScheduler::default();
		let (mut task, phase) = start_counter(&scheduler);

		scheduler.advance(2000);
		assert_eq!(phase.get().index(), 1);

		task.stop();
		assert!(!task.is_running());
		scheduler.advance(60_000);
		assert_eq!(phase.get().index(), 1);
		assert_eq!(scheduler.live_timers(), 0);
	}

	#[test]
	fn dropping_the_task_cancels_it() {
		let scheduler = ManualScheduler::default();
		let (task, phase) = start_counter(&scheduler);

		scheduler.advance(4000);
		drop(task);
		scheduler.advance(60_000);
		assert_eq!(phase.get().index(), 2);
	}

	#[test]
	fn stages_follow_phase() {
		let stages: Vec<Stage> = PipelinePhase::ALL.iter().map(|p| p.stage()).collect();
		assert_eq!(
			stages,
			vec![Stage::Input, Stage::Transformer, Stage::Transformer, Stage::Output]
		);

		let lit: Vec<(bool, bool)> = PipelinePhase::ALL
			.iter()
			.map(|p| (p.feeds_transformer(), p.feeds_output()))
			.collect();
		assert_eq!(lit, vec![(false, false), (true, false), (true, false), (true, true)]);
		assert!(PipelinePhase::ALL[1].is_scanning());
		assert!(!PipelinePhase::ALL[2].is_scanning());
	}

	#[test]
	fn input_grid_mixes_filled_and_empty_dots() {
		let grids: Vec<Vec<bool>> = PipelinePhase::ALL
			.iter()
			.map(|p| (0..INPUT_CELLS).map(|cell| p.input_dot_filled(cell)).collect())
			.collect();

		for grid in &grids {
			assert!(grid.iter().any(|&f| f), "{grid:?}");
			assert!(grid.iter().any(|&f| !f), "{grid:?}");
		}
		let filled = grids.iter().flatten().filter(|&&f| f).count();
		assert!((8..=16).contains(&filled), "{filled} of 36 filled");
		assert_ne!(grids[0], grids[1]);
		assert_eq!(grids[0], [false, true, true, false, false, true, false, false, false]);
	}
}
