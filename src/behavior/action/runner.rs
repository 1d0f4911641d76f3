// Copyright © 2025 Stephan Kunz

//! `Runner` action implementation.

use crate::behavior::{Behavior, NodeContext, Status};
use crate::tree::Tick;

/// Always returns [`Status::Running`], so the node stays open forever.
#[derive(Debug, Default)]
pub struct Runner;

#[async_trait::async_trait]
impl Behavior for Runner {
	async fn on_tick(&self, _ctx: &NodeContext<'_>, _tick: &mut Tick) -> Status {
		Status::Running
	}
}
