// Copyright © 2025 Stephan Kunz

//! `Log` action implementation.

// region:      --- modules
use crate::ConstString;
use crate::INFO;
use crate::behavior::{Behavior, NodeContext, NodeData, Status};
use crate::tree::Tick;
use tracing::{Level, event};
// endregion:   --- modules

// region:      --- Log
/// The `Log` action emits its configured `info` text to the host's log
/// sink and succeeds.
#[derive(Debug)]
pub struct Log {
	/// The text to emit.
	info: ConstString,
}

impl Default for Log {
	fn default() -> Self {
		Self { info: "".into() }
	}
}

#[async_trait::async_trait]
impl Behavior for Log {
	fn initialize(&mut self, data: &NodeData) -> Result<(), crate::behavior::BehaviorError> {
		self.info = data.properties().get_str(INFO).unwrap_or_default().into();
		Ok(())
	}

	async fn on_tick(&self, _ctx: &NodeContext<'_>, _tick: &mut Tick) -> Status {
		event!(Level::INFO, "{}", self.info);
		Status::Success
	}
}
// endregion:   --- Log
