// Copyright © 2025 Stephan Kunz

//! `Subscriber` action implementation.

// region:      --- modules
use crate::SUB_CLIENT;
use crate::behavior::composite::SubscriberClient;
use crate::behavior::{Behavior, BehaviorError, NodeContext, Status};
use crate::tree::Tick;
use std::sync::Arc;
// endregion:   --- modules

// region:      --- Subscriber
/// Signature of the user supplied topic handler of a [`Subscriber`].
pub type SubscriberTopicFn =
	Arc<dyn Fn(&Tick, &Arc<dyn SubscriberClient>) -> Result<(), BehaviorError> + Send + Sync>;

/// The `Subscriber` action configures the client of the nearest enclosing
/// [`Subscription`](crate::behavior::composite::Subscription).
///
/// It pulls the published client from the ancestors' blackboard scopes and
/// invokes the host supplied topic handler on it. Fails if there is no
/// client to be found, no handler was attached, or the handler reports an
/// error.
#[derive(Default)]
pub struct Subscriber {
	/// The topic handler, attached by the host.
	topic: Option<SubscriberTopicFn>,
}

impl Subscriber {
	/// Create a subscriber with the given topic handler.
	#[must_use]
	pub fn new(topic: SubscriberTopicFn) -> Self {
		Self { topic: Some(topic) }
	}
}

#[async_trait::async_trait]
impl Behavior for Subscriber {
	async fn on_tick(&self, ctx: &NodeContext<'_>, tick: &mut Tick) -> Status {
		let Some(client) = ctx.find_in_ancestors::<Arc<dyn SubscriberClient>>(tick, SUB_CLIENT) else {
			return Status::Failure;
		};
		let Some(topic) = &self.topic else {
			return Status::Failure;
		};
		match topic(tick, &client) {
			Ok(()) => Status::Success,
			Err(_) => Status::Failure,
		}
	}
}
// endregion:   --- Subscriber
