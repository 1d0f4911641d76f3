// Copyright © 2025 Stephan Kunz

//! `Failer` action implementation.

use crate::behavior::{Behavior, NodeContext, Status};
use crate::tree::Tick;

/// Always returns [`Status::Failure`].
#[derive(Debug, Default)]
pub struct Failer;

#[async_trait::async_trait]
impl Behavior for Failer {
	async fn on_tick(&self, _ctx: &NodeContext<'_>, _tick: &mut Tick) -> Status {
		Status::Failure
	}
}
