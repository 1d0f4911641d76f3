// Copyright © 2025 Stephan Kunz

//! `Subscription` composite implementation.

// region:      --- modules
use crate::behavior::cancel::CancelSignal;
use crate::behavior::{Behavior, BehaviorError, NodeContext, Status, execute};
use crate::tree::Tick;
use crate::{CANCEL_CTX, PARALLEL, SUB_CLIENT, SUB_SUM, SUBSCRIPTION};
use std::sync::Arc;
use tracing::{Level, event};

use super::parallel::SubscriptionCounter;
// endregion:   --- modules

// region:      --- SubscriberClient
/// A long-lived side channel managed by a [`Subscription`], created by a
/// host supplied factory.
#[async_trait::async_trait]
pub trait SubscriberClient: Send + Sync {
	/// The long-running work of the client, launched as its own task.
	/// # Errors
	/// - on client specific failures, which are logged but do not affect the tree
	async fn run(&self) -> Result<(), BehaviorError>;

	/// Shut the client down. Must be idempotent.
	/// # Errors
	/// - on client specific failures, which are logged but do not affect the tree
	async fn close(&self) -> Result<(), BehaviorError>;
}

/// Host supplied factory creating the [`SubscriberClient`] of one
/// [`Subscription`] node. Attached before load via the registry.
pub type SubscriberClientFactory = Arc<dyn Fn(&Tick) -> Arc<dyn SubscriberClient> + Send + Sync>;
// endregion:   --- SubscriberClient

// region:      --- Subscription
/// A `Subscription` hosts a long-lived side channel below a `Parallel`.
///
/// The placement is validated on every tick by walking the ancestors: some
/// ancestor must be a `Parallel` and no `Subscription` may sit in between,
/// otherwise the node fails immediately and no client is created.
///
/// Protocol of one tick:
/// 1. create the client and publish it under `subClient`, where descendant
///    [`Subscriber`](crate::behavior::action::Subscriber) leaves find it,
/// 2. tick the children in order like a sequence, so conditions and actions
///    can configure the subscription; any non-success is reported upward,
/// 3. register with the parallel by incrementing its `subSum` counter,
/// 4. launch the client's [`run`](SubscriberClient::run) as its own task,
/// 5. await the parallel's cancellation, close the client and succeed.
#[derive(Default)]
pub struct Subscription {
	/// Factory for the subscriber client, attached by the host.
	client_factory: Option<SubscriberClientFactory>,
}

impl Subscription {
	/// Create a subscription with the given client factory.
	#[must_use]
	pub fn new(client_factory: SubscriberClientFactory) -> Self {
		Self {
			client_factory: Some(client_factory),
		}
	}

	/// Valid only below a `Parallel` with no `Subscription` in between.
	fn valid_placement(&self, ctx: &NodeContext<'_>, tick: &Tick) -> bool {
		for ancestor in tick.ancestors(ctx.tree(), ctx.index()) {
			match ancestor.data().name().as_ref() {
				PARALLEL => return true,
				SUBSCRIPTION => return false,
				_ => {}
			}
		}
		false
	}
}

#[async_trait::async_trait]
impl Behavior for Subscription {
	async fn on_tick(&self, ctx: &NodeContext<'_>, tick: &mut Tick) -> Status {
		if !self.valid_placement(ctx, tick) {
			return Status::Failure;
		}
		let Some(client_factory) = &self.client_factory else {
			return Status::Failure;
		};

		let client = client_factory(tick);
		ctx.set(tick, SUB_CLIENT, client.clone());

		// let the children configure the subscription
		for &child in ctx.children() {
			let status = execute(ctx.tree(), child, tick).await;
			if status != Status::Success {
				return status;
			}
		}

		let Some(counter) = ctx.find_in_ancestors::<Arc<SubscriptionCounter>>(tick, SUB_SUM) else {
			return Status::Failure;
		};
		let Some(cancel) = ctx.find_in_ancestors::<CancelSignal>(tick, CANCEL_CTX) else {
			return Status::Failure;
		};

		counter.increment();
		let runner = client.clone();
		tokio::spawn(async move {
			if let Err(error) = runner.run().await {
				event!(Level::WARN, %error, "subscriber client run failed");
			}
		});

		cancel.fired().await;
		if let Err(error) = client.close().await {
			event!(Level::WARN, %error, "subscriber client close failed");
		}
		Status::Success
	}
}
// endregion:   --- Subscription
