// Copyright © 2025 Stephan Kunz

//! `Inverter` decorator implementation.

// region:      --- modules
use crate::behavior::{Behavior, NodeContext, Status, execute};
use crate::tree::Tick;
// endregion:   --- modules

// region:      --- Inverter
/// The `Inverter` decorator inverts the result of its child, returning
/// [`Status::Failure`] for [`Status::Success`] and vice versa.
/// [`Status::Running`] and [`Status::Error`] pass through unchanged.
#[derive(Debug, Default)]
pub struct Inverter;

#[async_trait::async_trait]
impl Behavior for Inverter {
	async fn on_tick(&self, ctx: &NodeContext<'_>, tick: &mut Tick) -> Status {
		let Some(child) = ctx.child() else {
			return Status::Error;
		};
		match execute(ctx.tree(), child, tick).await {
			Status::Success => Status::Failure,
			Status::Failure => Status::Success,
			status => status,
		}
	}
}
// endregion:   --- Inverter
