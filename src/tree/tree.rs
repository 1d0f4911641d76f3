// Copyright © 2025 Stephan Kunz

//! [`BehaviorTree`] implementation: the tree handle and the tick driver.

// region:      --- modules
use crate::behavior::{NodeData, Properties, Status, close_abandoned, execute};
use crate::blackboard::SharedBlackboard;
use crate::{ConstString, DebugHandle, NODE_COUNT, Target};
use spin::RwLock;
use std::sync::Arc;
use tracing::{Level, event};
use uuid::Uuid;

use super::tick::Tick;
use super::tree_node::{NodeRef, TreeNode};
// endregion:   --- modules

// region:		--- types
/// The host registered lookup resolving a tree name to a loaded tree.
/// Used by every subtree node at tick time.
pub type SubTreeResolver = Arc<dyn Fn(&str) -> Option<BehaviorTree> + Send + Sync>;
// endregion:	--- types

// region:		--- BehaviorTree
struct TreeInner {
	/// The trees unique id.
	uuid: Uuid,
	/// The id as string, used as blackboard tree scope.
	id: ConstString,
	/// The tree title.
	title: ConstString,
	/// Description of the tree.
	description: ConstString,
	/// Authoring time constants of the tree.
	properties: Properties,
	/// Arena index of the root node.
	root: u16,
	/// The node arena in load order.
	nodes: Vec<TreeNode>,
	/// Lookup for subtree references, set at load.
	resolver: Option<SubTreeResolver>,
	/// An opaque handle threaded through every tick.
	debug: RwLock<Option<DebugHandle>>,
}

/// A loaded behavior tree.
///
/// The handle is cheap to clone and the tree is immutable after load, so one
/// instance may be ticked for many agents concurrently, provided each agent
/// brings its own blackboard. All execution state lives there.
#[derive(Clone)]
pub struct BehaviorTree {
	inner: Arc<TreeInner>,
}

impl BehaviorTree {
	pub(crate) fn new(
		uuid: Uuid,
		title: &str,
		description: &str,
		properties: Properties,
		root: u16,
		nodes: Vec<TreeNode>,
		resolver: Option<SubTreeResolver>,
	) -> Self {
		Self {
			inner: Arc::new(TreeInner {
				uuid,
				id: uuid.to_string().into(),
				title: title.into(),
				description: description.into(),
				properties,
				root,
				nodes,
				resolver,
				debug: RwLock::new(None),
			}),
		}
	}

	/// Get the trees uuid.
	#[must_use]
	pub fn uuid(&self) -> Uuid {
		self.inner.uuid
	}

	/// The tree id as string, used as blackboard tree scope.
	#[must_use]
	pub fn id(&self) -> &ConstString {
		&self.inner.id
	}

	/// The tree title. Subtree references resolve against it.
	#[must_use]
	pub fn title(&self) -> &ConstString {
		&self.inner.title
	}

	/// The tree description.
	#[must_use]
	pub fn description(&self) -> &ConstString {
		&self.inner.description
	}

	/// The trees authoring time constants.
	#[must_use]
	pub fn properties(&self) -> &Properties {
		&self.inner.properties
	}

	/// The trees total number of nodes.
	#[must_use]
	pub fn size(&self) -> usize {
		self.inner.nodes.len()
	}

	/// Iterate over the nodes in load order.
	pub fn iter(&self) -> impl Iterator<Item = &TreeNode> {
		self.inner.nodes.iter()
	}

	/// The subtree lookup registered at load, if any.
	#[must_use]
	pub fn resolver(&self) -> Option<&SubTreeResolver> {
		self.inner.resolver.as_ref()
	}

	/// Attach an opaque debug handle, handed into every subsequent tick.
	pub fn set_debug(&self, debug: Option<DebugHandle>) {
		*self.inner.debug.write() = debug;
	}

	/// The current debug handle, if any.
	#[must_use]
	pub fn debug(&self) -> Option<DebugHandle> {
		self.inner.debug.read().clone()
	}

	pub(crate) fn node(&self, index: u16) -> &TreeNode {
		&self.inner.nodes[usize::from(index)]
	}

	pub(crate) fn root_index(&self) -> u16 {
		self.inner.root
	}

	/// Find the data of a node by its ID.
	#[must_use]
	pub fn node_data(&self, id: &str) -> Option<&NodeData> {
		self.inner
			.nodes
			.iter()
			.map(TreeNode::data)
			.find(|data| data.id().as_ref() == id)
	}

	/// Propagate one tick signal through the tree, starting from the root.
	///
	/// See [`BehaviorTree::tick_with`].
	#[inline]
	pub async fn tick(&self, blackboard: &SharedBlackboard) -> Status {
		self.tick_with(None, blackboard).await
	}

	/// Propagate one tick signal through the tree, starting from the root,
	/// with a host provided target object.
	///
	/// The target is opaque to the engine and only read by user authored
	/// leaves. After the traversal the driver compares the open-nodes trail
	/// with the one from the previous tick and force-closes every node that
	/// was left open but not visited again, deepest first. The new trail and
	/// the node counter are then stored in the per-tree scope of the
	/// blackboard.
	pub async fn tick_with(&self, target: Option<Target>, blackboard: &SharedBlackboard) -> Status {
		let mut tick = Tick::new(self.clone(), blackboard.clone(), target, self.debug());

		// TICK NODE
		let status = execute(self, self.inner.root, &mut tick).await;

		// CLOSE NODES FROM LAST TICK, IF NEEDED
		let last_open_nodes = blackboard.with_tree_data(self.id(), |data| data.take_open_nodes());
		// a node whose parent closed while itself still running leaves a
		// stale trail entry for the parent; keep only nodes actually open
		let current_open_nodes: Vec<NodeRef> = tick
			.open_nodes()
			.iter()
			.filter(|node| {
				let data = node.data();
				blackboard
					.get_node(crate::IS_OPEN, data.tree_id(), data.id())
					.unwrap_or(false)
			})
			.cloned()
			.collect();

		// do not close what is still open in this tick
		let mut divergence = last_open_nodes.len().min(current_open_nodes.len());
		for index in 0..divergence {
			if last_open_nodes[index] != current_open_nodes[index] {
				divergence = index;
				break;
			}
		}

		// close the abandoned nodes, deepest first
		for node in last_open_nodes[divergence..].iter().rev() {
			close_abandoned(node, &mut tick);
		}

		// POPULATE BLACKBOARD
		let node_count = tick.node_count();
		blackboard.with_tree_data(self.id(), |data| {
			data.store_tick(current_open_nodes, node_count);
		});
		blackboard.set_tree(NODE_COUNT, node_count, self.id());

		event!(Level::TRACE, tree = %self.inner.id, %status, node_count, "tick");
		status
	}

	/// Render the tree as indented pre-order listing.
	#[must_use]
	pub fn render(&self) -> String {
		let mut out = String::new();
		self.render_node(self.inner.root, 0, &mut out);
		out
	}

	fn render_node(&self, index: u16, level: usize, out: &mut String) {
		let data = self.node(index).data();
		for _ in 0..level {
			out.push_str("  ");
		}
		let label = if data.title().is_empty() {
			data.name()
		} else {
			data.title()
		};
		out.push_str(label);
		out.push('\n');
		for &child in self.node(index).children() {
			self.render_node(child, level + 1, out);
		}
	}

	/// Pretty print the tree.
	pub fn print(&self) {
		print!("{}", self.render());
	}
}
// endregion:	--- BehaviorTree
