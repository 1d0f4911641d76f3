// Copyright © 2025 Stephan Kunz

//! `Succeeder` action implementation.

use crate::behavior::{Behavior, NodeContext, Status};
use crate::tree::Tick;

/// Always returns [`Status::Success`].
#[derive(Debug, Default)]
pub struct Succeeder;

#[async_trait::async_trait]
impl Behavior for Succeeder {
	async fn on_tick(&self, _ctx: &NodeContext<'_>, _tick: &mut Tick) -> Status {
		Status::Success
	}
}
