// Copyright © 2025 Stephan Kunz

//! `Error` action implementation.

use crate::behavior::{Behavior, NodeContext, Status};
use crate::tree::Tick;

/// Always returns [`Status::Error`]. Registered under the name `Error`.
#[derive(Debug, Default)]
pub struct ErrorAction;

#[async_trait::async_trait]
impl Behavior for ErrorAction {
	async fn on_tick(&self, _ctx: &NodeContext<'_>, _tick: &mut Tick) -> Status {
		Status::Error
	}
}
