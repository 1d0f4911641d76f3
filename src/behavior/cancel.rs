// Copyright © 2025 Stephan Kunz

//! One-shot cancellation signal published by [`Parallel`](crate::behavior::composite::Parallel).

// region:      --- modules
use core::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::Notify;
// endregion:   --- modules

// region:		--- CancelSignal
/// A one-shot, cloneable cancellation signal.
///
/// A [`Parallel`](crate::behavior::composite::Parallel) publishes a fresh
/// signal under the blackboard key `cancelCtx` when it opens and fires it
/// once its first child reaches a terminal status. Propagation is
/// cooperative: descendant sequences observe it between child steps,
/// subscriptions await it directly.
#[derive(Clone, Debug, Default)]
pub struct CancelSignal {
	inner: Arc<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
	fired: AtomicBool,
	notify: Notify,
}

impl CancelSignal {
	/// Create a fresh, unfired signal.
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Fire the signal. Only the first call has an effect.
	pub fn fire(&self) {
		if !self.inner.fired.swap(true, Ordering::AcqRel) {
			self.inner.notify.notify_waiters();
		}
	}

	/// Whether the signal has been fired.
	#[must_use]
	pub fn is_fired(&self) -> bool {
		self.inner.fired.load(Ordering::Acquire)
	}

	/// Wait until the signal fires. Returns immediately if it already has.
	pub async fn fired(&self) {
		let notified = self.inner.notify.notified();
		tokio::pin!(notified);
		// register interest before checking the flag to not lose a wakeup
		notified.as_mut().enable();
		if self.is_fired() {
			return;
		}
		notified.await;
	}
}
// endregion:	--- CancelSignal
