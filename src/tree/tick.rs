// Copyright © 2025 Stephan Kunz

//! The per-traversal [`Tick`] context.

// region:      --- modules
use crate::blackboard::SharedBlackboard;
use crate::{DebugHandle, Target};

use super::tree::BehaviorTree;
use super::tree_node::NodeRef;
// endregion:   --- modules

// region:		--- Tick
/// One [`Tick`] is created per traversal of a tree and threaded through the
/// whole descent. It carries the tree handle, the agent's blackboard, the
/// opaque debug handle, the host target object, the trail of currently open
/// nodes, the stack of entered subtree nodes and the node counter.
///
/// The context is owned by exactly one task. A
/// [`Parallel`](crate::behavior::composite::Parallel) hands each child a
/// [derived](Tick::derive) context instead of sharing its own.
pub struct Tick {
	/// The tree this tick was started on.
	tree: BehaviorTree,
	/// The agent's blackboard.
	blackboard: SharedBlackboard,
	/// The host provided target object.
	target: Option<Target>,
	/// The opaque debug handle of the tree.
	debug: Option<DebugHandle>,
	/// Trail of nodes entered and not yet closed during this tick.
	open_nodes: Vec<NodeRef>,
	/// Stack of currently entered subtree nodes.
	subtree_stack: Vec<NodeRef>,
	/// Number of nodes entered during this tick.
	node_count: i64,
}

impl Tick {
	pub(crate) fn new(
		tree: BehaviorTree,
		blackboard: SharedBlackboard,
		target: Option<Target>,
		debug: Option<DebugHandle>,
	) -> Self {
		Self {
			tree,
			blackboard,
			target,
			debug,
			open_nodes: Vec::new(),
			subtree_stack: Vec::new(),
			node_count: 0,
		}
	}

	/// The tree this tick was started on.
	#[must_use]
	pub const fn tree(&self) -> &BehaviorTree {
		&self.tree
	}

	/// The agent's blackboard.
	#[must_use]
	pub const fn blackboard(&self) -> &SharedBlackboard {
		&self.blackboard
	}

	/// The host provided target object, if any.
	#[must_use]
	pub const fn target(&self) -> Option<&Target> {
		self.target.as_ref()
	}

	/// The opaque debug handle, if any.
	#[must_use]
	pub const fn debug(&self) -> Option<&DebugHandle> {
		self.debug.as_ref()
	}

	/// Number of nodes entered so far during this tick.
	#[must_use]
	pub const fn node_count(&self) -> i64 {
		self.node_count
	}

	/// The trail of nodes entered and not yet closed.
	#[must_use]
	pub fn open_nodes(&self) -> &[NodeRef] {
		&self.open_nodes
	}

	/// The innermost subtree node currently entered,
	/// `None` while executing the main tree.
	#[must_use]
	pub fn last_subtree(&self) -> Option<&NodeRef> {
		self.subtree_stack.last()
	}

	/// Nesting depth of subtree execution.
	#[must_use]
	pub fn subtree_depth(&self) -> usize {
		self.subtree_stack.len()
	}

	/// Create a derived context for the child of a concurrent composite.
	///
	/// The derived context shares blackboard, tree, target and debug handle
	/// and seeds its open-nodes trail and subtree stack from this context,
	/// but tracks its own subsequent enters. Children must not race on their
	/// parent's single trail.
	#[must_use]
	pub fn derive(&self) -> Self {
		Self {
			tree: self.tree.clone(),
			blackboard: self.blackboard.clone(),
			target: self.target.clone(),
			debug: self.debug.clone(),
			open_nodes: self.open_nodes.clone(),
			subtree_stack: self.subtree_stack.clone(),
			node_count: self.node_count,
		}
	}

	/// Called when entering a node.
	pub(crate) fn enter_node(&mut self, tree: &BehaviorTree, index: u16) {
		self.node_count += 1;
		self.open_nodes.push(NodeRef::new(tree.clone(), index));
	}

	/// Called when closing a node: the innermost open node leaves the trail.
	pub(crate) fn close_node(&mut self) {
		self.open_nodes.pop();
	}

	pub(crate) fn push_subtree(&mut self, node: NodeRef) {
		self.subtree_stack.push(node);
	}

	pub(crate) fn pop_subtree(&mut self) {
		self.subtree_stack.pop();
	}

	pub(crate) fn add_node_count(&mut self, delta: i64) {
		self.node_count += delta;
	}

	/// All ancestors of the given node, nearest first.
	///
	/// The walk follows parent indices within the owning tree and crosses
	/// subtree boundaries through the subtree stack, so a node inside a
	/// referenced tree sees the subtree node and its ancestors as well.
	pub(crate) fn ancestors(&self, tree: &BehaviorTree, index: u16) -> Vec<NodeRef> {
		let mut out = Vec::new();
		let mut tree = tree.clone();
		let mut index = index;
		let mut depth = self.subtree_stack.len();
		loop {
			match tree.node(index).data().parent() {
				Some(parent) => {
					index = parent;
					out.push(NodeRef::new(tree.clone(), index));
				}
				None => {
					if depth == 0 {
						break;
					}
					depth -= 1;
					let link = &self.subtree_stack[depth];
					tree = link.tree().clone();
					index = link.index();
					out.push(link.clone());
				}
			}
		}
		out
	}

	/// Look for a value under `key` in the per-node scopes of the ancestors
	/// of the given node, nearest first.
	#[must_use]
	pub fn find_in_ancestors<T: core::any::Any + Clone>(
		&self,
		tree: &BehaviorTree,
		index: u16,
		key: &str,
	) -> Option<T> {
		for ancestor in self.ancestors(tree, index) {
			let data = ancestor.data();
			if let Some(value) = self.blackboard.get_node::<T>(key, data.tree_id(), data.id()) {
				return Some(value);
			}
		}
		None
	}
}
// endregion:	--- Tick
