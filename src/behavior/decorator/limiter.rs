// Copyright © 2025 Stephan Kunz

//! `Limiter` decorator implementation.

// region:      --- modules
use crate::behavior::{Behavior, BehaviorError, NodeContext, NodeData, Status, execute};
use crate::tree::Tick;
use crate::{LOOP_COUNT, MAX_LOOP};
// endregion:   --- modules

// region:      --- Limiter
/// The `Limiter` decorator bounds how often its child is evaluated. Once
/// the child has finished `maxLoop` times, the limiter returns
/// [`Status::Failure`] without evaluating the child again.
///
/// A running child does not count against the limit. The counter lives in
/// the per-node blackboard scope and is never reset, the limit holds for
/// the lifetime of the agent's blackboard.
#[derive(Debug, Default)]
pub struct Limiter {
	/// Maximum number of child completions, at least 1. Required at load.
	max_loop: i64,
}

#[async_trait::async_trait]
impl Behavior for Limiter {
	fn initialize(&mut self, data: &NodeData) -> Result<(), BehaviorError> {
		let max_loop = data
			.properties()
			.get_i64(MAX_LOOP)
			.ok_or(BehaviorError::MissingProperty {
				behavior: "Limiter".into(),
				property: MAX_LOOP.into(),
			})?;
		if max_loop < 1 {
			return Err(BehaviorError::InvalidProperty {
				behavior: "Limiter".into(),
				property: MAX_LOOP.into(),
				reason: "must be at least 1".into(),
			});
		}
		self.max_loop = max_loop;
		Ok(())
	}

	async fn on_tick(&self, ctx: &NodeContext<'_>, tick: &mut Tick) -> Status {
		let Some(child) = ctx.child() else {
			return Status::Error;
		};
		let count = ctx.get::<i64>(tick, LOOP_COUNT).unwrap_or(0);
		if count < self.max_loop {
			let status = execute(ctx.tree(), child, tick).await;
			if status == Status::Success || status == Status::Failure {
				ctx.set(tick, LOOP_COUNT, count + 1);
			}
			return status;
		}
		Status::Failure
	}
}
// endregion:   --- Limiter
