// Copyright © 2025 Stephan Kunz
//! `Condition` behaviors of [`ticktree`](crate).
//!
//! Concrete conditions are authored by the user; the engine only ships the
//! closure backed [`FnCondition`].

// region:      --- modules
use crate::behavior::{Behavior, NodeContext, Status};
use crate::tree::Tick;
use std::sync::Arc;
// endregion:   --- modules

// region:      --- FnCondition
/// Signature of a predicate usable as condition.
pub type ConditionFn = Arc<dyn Fn(&NodeContext<'_>, &Tick) -> bool + Send + Sync>;

/// A condition delegating its test to a plain predicate.
///
/// Returns [`Status::Success`] when the predicate holds and
/// [`Status::Failure`] otherwise; a condition never keeps running.
pub struct FnCondition {
	predicate: ConditionFn,
}

impl FnCondition {
	/// Create a condition from the given predicate.
	#[must_use]
	pub fn new<F>(predicate: F) -> Self
	where
		F: Fn(&NodeContext<'_>, &Tick) -> bool + Send + Sync + 'static,
	{
		Self {
			predicate: Arc::new(predicate),
		}
	}
}

#[async_trait::async_trait]
impl Behavior for FnCondition {
	async fn on_tick(&self, ctx: &NodeContext<'_>, tick: &mut Tick) -> Status {
		if (self.predicate)(ctx, tick) {
			Status::Success
		} else {
			Status::Failure
		}
	}
}
// endregion:   --- FnCondition
