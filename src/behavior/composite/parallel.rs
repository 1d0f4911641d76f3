// Copyright © 2025 Stephan Kunz

//! `Parallel` composite implementation.

// region:      --- modules
use crate::behavior::cancel::CancelSignal;
use crate::behavior::{Behavior, NodeContext, Status, close_branch, execute};
use crate::tree::{NodeRef, Tick};
use crate::{CANCEL_CTX, RUN_STATE, SUB_SUM};
use core::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::sync::{Mutex, Notify};
// endregion:   --- modules

// region:      --- SubscriptionCounter
/// Atomic counter published by [`Parallel`] under the blackboard key
/// `subSum`. Every [`Subscription`](crate::behavior::composite::Subscription)
/// below the parallel registers itself here before it starts awaiting
/// cancellation, which tells the parallel how many of its outstanding
/// branches will only terminate once cancellation fires.
#[derive(Debug, Default)]
pub struct SubscriptionCounter {
	count: AtomicI64,
	notify: Notify,
}

impl SubscriptionCounter {
	/// Register one subscription.
	pub fn increment(&self) {
		self.count.fetch_add(1, Ordering::AcqRel);
		self.notify.notify_waiters();
	}

	/// Number of registered subscriptions.
	#[must_use]
	pub fn count(&self) -> i64 {
		self.count.load(Ordering::Acquire)
	}

	pub(crate) fn notified(&self) -> tokio::sync::futures::Notified<'_> {
		self.notify.notified()
	}
}
// endregion:   --- SubscriptionCounter

// region:      --- RunState
/// Termination report of one dispatched child.
struct ChildReport {
	child: usize,
	status: Status,
	node_count: i64,
}

/// Per open-cycle bookkeeping of a [`Parallel`], kept in its per-node scope.
struct RunState {
	tx: mpsc::Sender<ChildReport>,
	rx: Mutex<mpsc::Receiver<ChildReport>>,
	book: spin::Mutex<RunBook>,
}

#[derive(Default)]
struct RunBook {
	/// Children that reached a terminal status during this open cycle.
	completed: Vec<bool>,
	/// Children dispatched and not yet reported back.
	in_flight: Vec<bool>,
}
// endregion:   --- RunState

// region:      --- Parallel
/// A `Parallel` runs all of its children concurrently.
///
/// Every child is dispatched as its own task with a
/// [derived](Tick::derive) tick context; terminations are collected over a
/// bounded channel kept for the whole open cycle. The parallel succeeds
/// only once every child has reached a terminal status, regardless of the
/// individual outcomes; while children are outstanding it reports
/// [`Status::Running`] so the driver revisits it.
///
/// When the first terminal outcome arrives, the cancellation signal
/// published under `cancelCtx` fires exactly once for this open cycle.
/// Descendant sequences then convert running children to success between
/// steps and subscriptions shut down, letting the whole sub-traversal
/// quiesce. A child reporting [`Status::Error`] counts as terminal and
/// does not abort its siblings.
///
/// Children start in authoring order; completion order is unspecified.
#[derive(Debug, Default)]
pub struct Parallel;

#[async_trait::async_trait]
impl Behavior for Parallel {
	fn on_open(&self, ctx: &NodeContext<'_>, tick: &mut Tick) {
		let count = ctx.children().len();
		let (tx, rx) = mpsc::channel(count.max(1));
		let state = Arc::new(RunState {
			tx,
			rx: Mutex::new(rx),
			book: spin::Mutex::new(RunBook {
				completed: vec![false; count],
				in_flight: vec![false; count],
			}),
		});
		ctx.set(tick, CANCEL_CTX, CancelSignal::new());
		ctx.set(tick, SUB_SUM, Arc::new(SubscriptionCounter::default()));
		ctx.set(tick, RUN_STATE, state);
	}

	async fn on_tick(&self, ctx: &NodeContext<'_>, tick: &mut Tick) -> Status {
		let Some(state) = ctx.get::<Arc<RunState>>(tick, RUN_STATE) else {
			return Status::Error;
		};
		let Some(cancel) = ctx.get::<CancelSignal>(tick, CANCEL_CTX) else {
			return Status::Error;
		};
		let Some(counter) = ctx.get::<Arc<SubscriptionCounter>>(tick, SUB_SUM) else {
			return Status::Error;
		};

		// dispatch every child that is neither completed nor still in flight
		let to_dispatch: Vec<usize> = {
			let mut book = state.book.lock();
			let waiting: Vec<usize> = (0..ctx.children().len())
				.filter(|&index| !book.completed[index] && !book.in_flight[index])
				.collect();
			for &index in &waiting {
				book.in_flight[index] = true;
			}
			waiting
		};
		for index in to_dispatch {
			let child = ctx.children()[index];
			let tree = ctx.tree().clone();
			let tx = state.tx.clone();
			let mut child_tick = tick.derive();
			let base_count = child_tick.node_count();
			tokio::spawn(async move {
				let status = execute(&tree, child, &mut child_tick).await;
				let _ = tx
					.send(ChildReport {
						child: index,
						status,
						node_count: child_tick.node_count() - base_count,
					})
					.await;
			});
		}

		// collect terminations until only branches blocked on a subscription remain
		let mut rx = state.rx.lock().await;
		loop {
			let notified = counter.notified();
			tokio::pin!(notified);
			// register interest before reading the counter to not lose a wakeup
			notified.as_mut().enable();

			let pending = state.book.lock().in_flight.iter().filter(|flag| **flag).count();
			if pending == 0 {
				break;
			}
			let blocked = if cancel.is_fired() {
				0
			} else {
				usize::try_from(counter.count()).unwrap_or(0)
			};
			if pending <= blocked {
				break;
			}

			tokio::select! {
				report = rx.recv() => {
					let Some(report) = report else { break };
					tick.add_node_count(report.node_count);
					let terminal = report.status.is_terminal();
					{
						let mut book = state.book.lock();
						book.in_flight[report.child] = false;
						if terminal {
							book.completed[report.child] = true;
						}
					}
					if terminal {
						// the first terminal outcome cancels the remaining children
						cancel.fire();
					}
				}
				() = &mut notified => {}
			}
		}
		drop(rx);

		let done = state.book.lock().completed.iter().all(|flag| *flag);
		if done { Status::Success } else { Status::Running }
	}

	fn on_close(&self, ctx: &NodeContext<'_>, tick: &mut Tick) {
		// release subscriptions still blocked when the driver abandons the branch
		if let Some(cancel) = ctx.get::<CancelSignal>(tick, CANCEL_CTX) {
			cancel.fire();
		}
		// the children ran on derived contexts whose trails the driver never
		// sees; sweep whatever the ending cycle left open below this node
		for &child in ctx.children() {
			close_branch(&NodeRef::new(ctx.tree().clone(), child), tick);
		}
		ctx.remove(tick, CANCEL_CTX);
		ctx.remove(tick, SUB_SUM);
		ctx.remove(tick, RUN_STATE);
	}
}
// endregion:   --- Parallel
