// Copyright © 2025 Stephan Kunz
//! Built-in `Composite` behaviors of [`ticktree`](crate).

mod mem_priority;
mod mem_sequence;
mod parallel;
mod priority;
mod sequence;
mod subscription;

// flatten
pub use mem_priority::MemPriority;
pub use mem_sequence::MemSequence;
pub use parallel::{Parallel, SubscriptionCounter};
pub use priority::Priority;
pub use sequence::Sequence;
pub use subscription::{Subscription, SubscriberClient, SubscriberClientFactory};

use crate::CANCEL_CTX;
use crate::behavior::NodeContext;
use crate::behavior::cancel::CancelSignal;
use crate::tree::Tick;

/// `true` if an open ancestor `Parallel` has signalled cancellation.
///
/// Sequences check this after a child returned
/// [`Running`](crate::behavior::Status::Running) and then treat the child as
/// succeeded, so the whole sub-traversal can quiesce promptly.
pub(crate) fn cancel_requested(ctx: &NodeContext<'_>, tick: &Tick) -> bool {
	ctx.find_in_ancestors::<CancelSignal>(tick, CANCEL_CTX)
		.is_some_and(|signal| signal.is_fired())
}
