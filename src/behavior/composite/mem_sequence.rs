// Copyright © 2025 Stephan Kunz

//! `MemSequence` composite implementation.

// region:      --- modules
use crate::RUNNING_CHILD;
use crate::behavior::{Behavior, NodeContext, Status, close_branch, execute};
use crate::tree::{NodeRef, Tick};

use super::cancel_requested;
// endregion:   --- modules

// region:      --- MemSequence
/// A `Sequence` with memory: the index of the currently running child is
/// kept in the per-node blackboard key `runningChild` and the next tick
/// resumes there instead of restarting at the first child.
///
/// Children before the resume point are not re-evaluated while the node
/// stays open. Cancellation from an ancestor `Parallel` is honored exactly
/// like in [`Sequence`](crate::behavior::composite::Sequence): a running
/// child is treated as succeeded once the signal fired.
#[derive(Debug, Default)]
pub struct MemSequence;

#[async_trait::async_trait]
impl Behavior for MemSequence {
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
			let mut status = execute(ctx.tree(), children[index], tick).await;
			if status == Status::Running && cancel_requested(ctx, tick) {
				// the child's kernel left it open; finishing early on
				// cancellation has to close it and its descendants
				close_branch(&NodeRef::new(ctx.tree().clone(), children[index]), tick);
				status = Status::Success;
			}
			if status != Status::Success {
				return status;
			}
		}
		Status::Success
	}
}
// endregion:   --- MemSequence
