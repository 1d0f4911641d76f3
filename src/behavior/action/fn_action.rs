// Copyright © 2025 Stephan Kunz

//! Closure backed action behavior.

// region:      --- modules
use crate::behavior::{Behavior, NodeContext, Status};
use crate::tree::Tick;
use std::sync::Arc;
// endregion:   --- modules

// region:      --- FnAction
/// Signature of a simple function usable as action.
pub type ActionFn = Arc<dyn Fn(&NodeContext<'_>, &mut Tick) -> Status + Send + Sync>;

/// An action delegating its tick to a plain function or closure.
///
/// The shortest way to author a leaf: the function receives the node
/// context and the tick and returns the [`Status`]. Anything it needs to
/// remember across ticks belongs into the blackboard, typically under the
/// per-node scope via [`NodeContext::set`].
pub struct FnAction {
	func: ActionFn,
}

impl FnAction {
	/// Create an action from the given function.
	#[must_use]
	pub fn new<F>(func: F) -> Self
	where
		F: Fn(&NodeContext<'_>, &mut Tick) -> Status + Send + Sync + 'static,
	{
		Self { func: Arc::new(func) }
	}
}

#[async_trait::async_trait]
impl Behavior for FnAction {
	async fn on_tick(&self, ctx: &NodeContext<'_>, tick: &mut Tick) -> Status {
		(self.func)(ctx, tick)
	}
}
// endregion:   --- FnAction
