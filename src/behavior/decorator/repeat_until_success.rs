// Copyright © 2025 Stephan Kunz

//! `RepeatUntilSuccess` decorator implementation.

// region:      --- modules
use crate::behavior::{Behavior, BehaviorError, NodeContext, NodeData, Status, execute};
use crate::tree::Tick;
use crate::{LOOP_COUNT, MAX_LOOP, UNBOUNDED_REPEAT_SLICE};
// endregion:   --- modules

// region:      --- RepeatUntilSuccess
/// The `RepeatUntilSuccess` decorator re-evaluates its child while the
/// child fails, stopping on [`Status::Success`], [`Status::Running`] or
/// [`Status::Error`], or once the counter in the per-node blackboard key
/// `i` reaches `maxLoop`.
///
/// A negative `maxLoop` retries without bound, sliced per tick like
/// [`Repeater`](crate::behavior::decorator::Repeater).
#[derive(Debug, Default)]
pub struct RepeatUntilSuccess {
	/// Number of retries; negative means unbounded. Required at load.
	max_loop: i64,
}

#[async_trait::async_trait]
impl Behavior for RepeatUntilSuccess {
	fn initialize(&mut self, data: &NodeData) -> Result<(), BehaviorError> {
		self.max_loop = data
			.properties()
			.get_i64(MAX_LOOP)
			.ok_or(BehaviorError::MissingProperty {
				behavior: "RepeatUntilSuccess".into(),
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
		let mut status = Status::Failure;
		while self.max_loop < 0 || count < self.max_loop {
			if self.max_loop < 0 && slice >= UNBOUNDED_REPEAT_SLICE {
				status = Status::Running;
				break;
			}
			status = execute(ctx.tree(), child, tick).await;
			if status == Status::Failure {
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
// endregion:   --- RepeatUntilSuccess
