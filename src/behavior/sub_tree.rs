// Copyright © 2025 Stephan Kunz

//! `SubTree` node implementation.

// region:      --- modules
use crate::MAX_SUBTREE_DEPTH;
use crate::behavior::{Behavior, NodeContext, Status, execute};
use crate::tree::{NodeRef, Tick};
// endregion:   --- modules

// region:      --- SubTree
/// An action shaped node delegating evaluation to another tree.
///
/// The target tree is named by this node's `title` and resolved through the
/// lookup registered on the owning tree at load; an unresolved target is a
/// [`Status::Error`]. The target's root executes with the *same* tick
/// context, so blackboard scoping, cancellation and the open-node trail
/// flow through — necessary for cross-tick running continuation when the
/// same subtree is referenced from several places.
#[derive(Debug, Default)]
pub struct SubTree;

#[async_trait::async_trait]
impl Behavior for SubTree {
	async fn on_tick(&self, ctx: &NodeContext<'_>, tick: &mut Tick) -> Status {
		let Some(resolver) = ctx.tree().resolver() else {
			return Status::Error;
		};
		let Some(target) = resolver(ctx.data().title()) else {
			return Status::Error;
		};
		if tick.subtree_depth() >= MAX_SUBTREE_DEPTH {
			return Status::Error;
		}

		tick.push_subtree(NodeRef::new(ctx.tree().clone(), ctx.index()));
		let status = execute(&target, target.root_index(), tick).await;
		tick.pop_subtree();
		status
	}
}
// endregion:   --- SubTree
