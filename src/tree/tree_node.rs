// Copyright © 2025 Stephan Kunz

//! Arena entries of a [`BehaviorTree`] and references to them.

// region:      --- modules
use crate::behavior::{Behavior, NodeData};

use super::tree::BehaviorTree;
// endregion:   --- modules

// region:		--- TreeNode
/// One node of a loaded tree: its frozen data, its behavior and the arena
/// indices of its children.
///
/// Composites keep their full, ordered child list here; decorators use the
/// first entry; leaves have none. The structure is fixed after load, parent
/// and child links are indices, never owning references.
pub struct TreeNode {
	/// Frozen data of the node.
	data: NodeData,
	/// The behavior of the node.
	behavior: Box<dyn Behavior>,
	/// Arena indices of the children, in authoring order.
	children: Vec<u16>,
}

impl TreeNode {
	pub(crate) fn new(data: NodeData, behavior: Box<dyn Behavior>, children: Vec<u16>) -> Self {
		Self {
			data,
			behavior,
			children,
		}
	}

	/// Get a reference to the node data.
	#[must_use]
	pub const fn data(&self) -> &NodeData {
		&self.data
	}

	/// Get a reference to the behavior.
	#[must_use]
	pub fn behavior(&self) -> &dyn Behavior {
		self.behavior.as_ref()
	}

	/// The arena indices of the children, in authoring order.
	#[must_use]
	pub fn children(&self) -> &[u16] {
		&self.children
	}
}
// endregion:	--- TreeNode

// region:		--- NodeRef
/// A cheap reference to one node of a loaded tree: the tree handle plus the
/// node's arena index. Used for the open-nodes trail and the subtree stack.
#[derive(Clone)]
pub struct NodeRef {
	tree: BehaviorTree,
	index: u16,
}

impl NodeRef {
	pub(crate) const fn new(tree: BehaviorTree, index: u16) -> Self {
		Self { tree, index }
	}

	/// The tree owning the referenced node.
	#[must_use]
	pub const fn tree(&self) -> &BehaviorTree {
		&self.tree
	}

	/// The arena index of the referenced node.
	#[must_use]
	pub const fn index(&self) -> u16 {
		self.index
	}

	/// The data of the referenced node.
	#[must_use]
	pub fn data(&self) -> &NodeData {
		self.tree.node(self.index).data()
	}
}

impl PartialEq for NodeRef {
	fn eq(&self, other: &Self) -> bool {
		self.index == other.index && self.tree.uuid() == other.tree.uuid()
	}
}

impl Eq for NodeRef {}

impl core::fmt::Debug for NodeRef {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		write!(f, "NodeRef({}:{})", self.tree.id(), self.data().id())
	}
}
// endregion:	--- NodeRef
