// Copyright © 2025 Stephan Kunz

//! `Wait` action implementation.

// region:      --- modules
use crate::behavior::{Behavior, NodeContext, NodeData, Status};
use crate::tree::Tick;
use crate::{MILLISECONDS, START_TIME};
use core::time::Duration;
use std::time::Instant;
// endregion:   --- modules

// region:      --- Wait
/// The `Wait` action succeeds once the configured amount of time has
/// passed since the node opened.
///
/// On open the current instant goes into the per-node blackboard; every
/// tick before the deadline returns [`Status::Running`], the first tick at
/// or after it returns [`Status::Success`]. The calling tick is never
/// blocked.
#[derive(Debug, Default)]
pub struct Wait {
	/// Time to wait in milliseconds. Defaults to 0.
	milliseconds: u64,
}

#[async_trait::async_trait]
impl Behavior for Wait {
	fn initialize(&mut self, data: &NodeData) -> Result<(), crate::behavior::BehaviorError> {
		self.milliseconds = data.properties().get_u64(MILLISECONDS).unwrap_or(0);
		Ok(())
	}

	fn on_open(&self, ctx: &NodeContext<'_>, tick: &mut Tick) {
		ctx.set(tick, START_TIME, Instant::now());
	}

	async fn on_tick(&self, ctx: &NodeContext<'_>, tick: &mut Tick) -> Status {
		let Some(start) = ctx.get::<Instant>(tick, START_TIME) else {
			return Status::Error;
		};
		if start.elapsed() >= Duration::from_millis(self.milliseconds) {
			Status::Success
		} else {
			Status::Running
		}
	}
}
// endregion:   --- Wait
