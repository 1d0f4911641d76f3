// Copyright © 2025 Stephan Kunz

//! `Priority` composite implementation.

// region:      --- modules
use crate::behavior::{Behavior, NodeContext, Status, execute};
use crate::tree::Tick;
// endregion:   --- modules

// region:      --- Priority
/// A `Priority` (selector) ticks its children in order and returns the first
/// status that is not [`Status::Failure`]. Only if every child fails, the
/// priority fails.
///
/// The selection is stateless across ticks: every tick restarts at the first
/// child, so a higher priority child that recovers takes over again.
#[derive(Debug, Default)]
pub struct Priority;

#[async_trait::async_trait]
impl Behavior for Priority {
	async fn on_tick(&self, ctx: &NodeContext<'_>, tick: &mut Tick) -> Status {
		for &child in ctx.children() {
			let status = execute(ctx.tree(), child, tick).await;
			if status != Status::Failure {
				return status;
			}
		}
		Status::Failure
	}
}
// endregion:   --- Priority
