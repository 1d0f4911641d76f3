// Copyright © 2025 Stephan Kunz

//! `Repeater` decorator implementation.

// region:      --- modules
use crate::behavior::{Behavior, BehaviorError, NodeContext, NodeData, Status, execute};
use crate::tree::Tick;
use crate::{LOOP_COUNT, MAX_LOOP, UNBOUNDED_REPEAT_SLICE};
// endregion:   --- modules

// region:      --- Repeater
/// The `Repeater` decorator re-evaluates its child until the child yields
/// [`Status::Running`] or [`Status::Error`], or until the counter in the
/// per-node blackboard key `i` reaches `maxLoop`.
///
/// A negative `maxLoop` repeats without bound; to avoid starving the rest
/// of the tree, an unbounded repeater yields [`Status::Running`] after a
/// fixed iteration slice and continues on the next tick.
#[derive(Debug, Default)]
pub struct Repeater {
	/// Number of repetitions; negative means unbounded. Required at load.
	max_loop: i64,
}

#[async_trait::async_trait]
impl Behavior for Repeater {
	fn initialize(&mut self, data: &NodeData) -> Result<(), BehaviorError> {
		self.max_loop = data
			.properties()
			.get_i64(MAX_LOOP)
			.ok_or(BehaviorError::MissingProperty {
				behavior: "Repeater".into(),
				property: MAX_LOOP.into(),
			})?;
		Ok(())
	}

	fn on_open(&self, ctx: &NodeContext<'_>, tick: &mut Tick) {
		ctx.set(tick, LOOP_COUNT, 0_i64);
	}

	async fn on_tick(&self, ctx: &NodeContext<'_>, tick: &mut Tick) -> Status {
		let Some(child) = ctx.child() else {
			return Status::Error;
		};
		let mut count = ctx.get::<i64>(tick, LOOP_COUNT).unwrap_or(0);
		let mut slice = 0;
		let mut status = Status::Success;
		while self.max_loop < 0 || count < self.max_loop {
			if self.max_loop < 0 && slice >= UNBOUNDED_REPEAT_SLICE {
				status = Status::Running;
				break;
			}
			status = execute(ctx.tree(), child, tick).await;
			if status == Status::Success || status == Status::Failure {
				count += 1;
				slice += 1;
			} else {
				break;
			}
		}
		ctx.set(tick, LOOP_COUNT, count);
		status
	}
}
// endregion:   --- Repeater
