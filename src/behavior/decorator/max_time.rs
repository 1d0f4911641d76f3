// Copyright © 2025 Stephan Kunz

//! `MaxTime` decorator implementation.

// region:      --- modules
use crate::behavior::{Behavior, BehaviorError, NodeContext, NodeData, Status, execute};
use crate::tree::Tick;
use crate::{MAX_TIME, START_TIME};
use core::time::Duration;
use std::time::Instant;
// endregion:   --- modules

// region:      --- MaxTime
/// The `MaxTime` decorator limits how long its child may take. On open it
/// records the start instant; whenever the child returns after more than
/// `maxTime` milliseconds have passed, the child's status is overridden
/// with [`Status::Failure`].
///
/// Non-preemptive: the child is never interrupted, the timeout is only
/// checked when the child actually returns.
#[derive(Debug, Default)]
pub struct MaxTime {
	/// Time limit in milliseconds, at least 1. Required at load.
	max_time: u64,
}

#[async_trait::async_trait]
impl Behavior for MaxTime {
	fn initialize(&mut self, data: &NodeData) -> Result<(), BehaviorError> {
		let max_time = data
			.properties()
			.get_u64(MAX_TIME)
			.ok_or(BehaviorError::MissingProperty {
				behavior: "MaxTime".into(),
				property: MAX_TIME.into(),
			})?;
		if max_time < 1 {
			return Err(BehaviorError::InvalidProperty {
				behavior: "MaxTime".into(),
				property: MAX_TIME.into(),
				reason: "must be at least 1".into(),
			});
		}
		self.max_time = max_time;
		Ok(())
	}

	fn on_open(&self, ctx: &NodeContext<'_>, tick: &mut Tick) {
		ctx.set(tick, START_TIME, Instant::now());
	}

	async fn on_tick(&self, ctx: &NodeContext<'_>, tick: &mut Tick) -> Status {
		let Some(child) = ctx.child() else {
			return Status::Error;
		};
		let Some(start) = ctx.get::<Instant>(tick, START_TIME) else {
			return Status::Error;
		};
		let status = execute(ctx.tree(), child, tick).await;
		if start.elapsed() > Duration::from_millis(self.max_time) {
			return Status::Failure;
		}
		status
	}
}
// endregion:   --- MaxTime
