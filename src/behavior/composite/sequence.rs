// Copyright © 2025 Stephan Kunz

//! `Sequence` composite implementation.

// region:      --- modules
use crate::behavior::{Behavior, NodeContext, Status, close_branch, execute};
use crate::tree::{NodeRef, Tick};

use super::cancel_requested;
// endregion:   --- modules

// region:      --- Sequence
/// A `Sequence` ticks its children in order and returns the first status
/// that is not [`Status::Success`]. Only if every child succeeds, the
/// sequence succeeds.
///
/// The sequence is stateless across ticks: a child returning
/// [`Status::Running`] is reported upward immediately and the next tick
/// restarts at the first child. If an ancestor `Parallel` has signalled
/// cancellation, a running child is treated as succeeded instead, so the
/// sequence can finish promptly.
#[derive(Debug, Default)]
pub struct Sequence;

#[async_trait::async_trait]
impl Behavior for Sequence {
	async fn on_tick(&self, ctx: &NodeContext<'_>, tick: &mut Tick) -> Status {
		for &child in ctx.children() {
			let mut status = execute(ctx.tree(), child, tick).await;
			if status == Status::Running && cancel_requested(ctx, tick) {
				// the child's kernel left it open; finishing early on
				// cancellation has to close it and its descendants
				close_branch(&NodeRef::new(ctx.tree().clone(), child), tick);
				status = Status::Success;
			}
			if status != Status::Success {
				return status;
			}
		}
		Status::Success
	}
}
// endregion:   --- Sequence
