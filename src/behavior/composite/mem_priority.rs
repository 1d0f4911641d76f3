// Copyright © 2025 Stephan Kunz

//! `MemPriority` composite implementation.

// region:      --- modules
use crate::RUNNING_CHILD;
use crate::behavior::{Behavior, NodeContext, Status, execute};
use crate::tree::Tick;
// endregion:   --- modules

// region:      --- MemPriority
/// A `Priority` with memory: the index of the currently running child is
/// kept in the per-node blackboard key `runningChild` and the next tick
/// resumes there instead of restarting at the first child.
///
/// Children before the resume point are not re-evaluated while the node
/// stays open. On failure of the resumed child the selection advances;
/// only if all remaining children fail, the priority fails.
#[derive(Debug, Default)]
pub struct MemPriority;

#[async_trait::async_trait]
impl Behavior for MemPriority {
	fn on_open(&self, ctx: &NodeContext<'_>, tick: &mut Tick) {
		ctx.set(tick, RUNNING_CHILD, 0_i64);
	}

	#[allow(clippy::cast_possible_truncation)]
	#[allow(clippy::cast_sign_loss)]
	async fn on_tick(&self, ctx: &NodeContext<'_>, tick: &mut Tick) -> Status {
		let resume = ctx.get::<i64>(tick, RUNNING_CHILD).unwrap_or(0).max(0) as usize;
		let children = ctx.children();
		for index in resume..children.len() {
			ctx.set(tick, RUNNING_CHILD, index as i64);
			let status = execute(ctx.tree(), children[index], tick).await;
			if status != Status::Failure {
				return status;
			}
		}
		Status::Failure
	}
}
// endregion:   --- MemPriority
