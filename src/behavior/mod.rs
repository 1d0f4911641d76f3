// Copyright © 2025 Stephan Kunz
//! Node kernel of [`ticktree`](crate): the [`Status`] type, the [`Behavior`]
//! trait with its five callbacks and the uniform execution pipeline
//! [`execute`] shared by every node category.

// region:      --- modules
pub mod action;
mod behavior_data;
pub mod cancel;
pub mod composite;
pub mod condition;
pub mod decorator;
mod error;
mod sub_tree;

// flatten
pub use behavior_data::{NodeData, Properties, PropertyValue};
pub use error::Error as BehaviorError;
pub use sub_tree::SubTree;

use crate::IS_OPEN;
use crate::tree::{BehaviorTree, NodeRef, Tick, TreeNode};
use core::fmt::Display;
use core::str::FromStr;
// endregion:   --- modules

// region:		--- Status
/// The four valued result of every node evaluation.
#[repr(u8)]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Status {
	/// The node finished and achieved its goal.
	Success,
	/// The node finished without achieving its goal.
	Failure,
	/// The node did not finish, tick it again.
	Running,
	/// A structural fault at runtime, e.g. a decorator without a child
	/// or an unresolvable subtree reference.
	Error,
}

impl Display for Status {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		match self {
			Self::Success => write!(f, "Success"),
			Self::Failure => write!(f, "Failure"),
			Self::Running => write!(f, "Running"),
			Self::Error => write!(f, "Error"),
		}
	}
}

impl Status {
	/// Returns `true` for [`Status::Success`], [`Status::Failure`] and [`Status::Error`].
	#[must_use]
	pub fn is_terminal(self) -> bool {
		self != Self::Running
	}
}
// endregion:	--- Status

// region:		--- Category
/// The category of a node within a tree.
#[repr(u8)]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Category {
	/// A leaf performing work.
	Action,
	/// A leaf testing a predicate.
	Condition,
	/// An inner node with an ordered list of children.
	Composite,
	/// An inner node with a single child.
	Decorator,
	/// An action shaped reference to another tree, resolved by name at tick time.
	Tree,
}

impl Display for Category {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		match self {
			Self::Action => write!(f, "action"),
			Self::Condition => write!(f, "condition"),
			Self::Composite => write!(f, "composite"),
			Self::Decorator => write!(f, "decorator"),
			Self::Tree => write!(f, "tree"),
		}
	}
}

impl FromStr for Category {
	type Err = BehaviorError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"action" => Ok(Self::Action),
			"condition" => Ok(Self::Condition),
			"composite" => Ok(Self::Composite),
			"decorator" => Ok(Self::Decorator),
			"tree" => Ok(Self::Tree),
			_ => Err(BehaviorError::UnknownCategory { category: s.into() }),
		}
	}
}
// endregion:	--- Category

// region:		--- NodeContext
/// Read access to the executing node and its owning tree,
/// handed into every [`Behavior`] callback together with the [`Tick`].
#[derive(Clone, Copy)]
pub struct NodeContext<'a> {
	tree: &'a BehaviorTree,
	node: &'a TreeNode,
}

impl<'a> NodeContext<'a> {
	pub(crate) const fn new(tree: &'a BehaviorTree, node: &'a TreeNode) -> Self {
		Self { tree, node }
	}

	/// Access the tree owning the node.
	#[must_use]
	pub const fn tree(&self) -> &'a BehaviorTree {
		self.tree
	}

	/// Access the node data.
	#[must_use]
	pub const fn data(&self) -> &'a NodeData {
		self.node.data()
	}

	/// The arena index of the node within its tree.
	#[must_use]
	pub const fn index(&self) -> u16 {
		self.node.data().index()
	}

	/// The ordered children of a composite.
	#[must_use]
	pub fn children(&self) -> &'a [u16] {
		self.node.children()
	}

	/// The single child of a decorator, if any.
	#[must_use]
	pub fn child(&self) -> Option<u16> {
		self.node.children().first().copied()
	}

	/// Read a value from the per-node scope of the tick's blackboard.
	#[must_use]
	pub fn get<T: core::any::Any + Clone>(&self, tick: &Tick, key: &str) -> Option<T> {
		let data = self.data();
		tick.blackboard().get_node(key, data.tree_id(), data.id())
	}

	/// Write a value into the per-node scope of the tick's blackboard.
	pub fn set<T: core::any::Any + Send + Sync>(&self, tick: &Tick, key: &str, value: T) {
		let data = self.data();
		tick.blackboard().set_node(key, value, data.tree_id(), data.id());
	}

	/// Remove a value from the per-node scope of the tick's blackboard.
	pub fn remove(&self, tick: &Tick, key: &str) {
		let data = self.data();
		tick.blackboard().remove_node(key, data.tree_id(), data.id());
	}

	/// Look for a value under `key` in the per-node scope of the ancestors,
	/// nearest first. The walk crosses subtree boundaries through the tick's
	/// subtree stack.
	#[must_use]
	pub fn find_in_ancestors<T: core::any::Any + Clone>(&self, tick: &Tick, key: &str) -> Option<T> {
		tick.find_in_ancestors(self.tree, self.index(), key)
	}
}
// endregion:	--- NodeContext

// region:		--- Behavior
/// The five callbacks every node category implements.
///
/// Implementations must stay stateless across agents: struct fields are
/// configuration frozen at load time, all runtime state lives in the
/// blackboard scoped per (tree, node). The pipeline around these callbacks
/// is the free function [`execute`] and is never overridden.
#[async_trait::async_trait]
pub trait Behavior: Send + Sync {
	/// Read configuration from the frozen node properties.
	/// Called exactly once at tree load; errors abort the load.
	/// # Errors
	/// - if a required property is missing or out of range
	fn initialize(&mut self, data: &NodeData) -> Result<(), BehaviorError> {
		let _ = data;
		Ok(())
	}

	/// Called every time the node is visited, before anything else.
	fn on_enter(&self, ctx: &NodeContext<'_>, tick: &mut Tick) {
		let _ = (ctx, tick);
	}

	/// Called only when the node is not yet open.
	fn on_open(&self, ctx: &NodeContext<'_>, tick: &mut Tick) {
		let _ = (ctx, tick);
	}

	/// The real work of the node. Must return a [`Status`];
	/// structural faults are reported as [`Status::Error`], never panicked.
	async fn on_tick(&self, ctx: &NodeContext<'_>, tick: &mut Tick) -> Status;

	/// Called when the tick returned anything but [`Status::Running`],
	/// or when the driver force-closes an abandoned node.
	fn on_close(&self, ctx: &NodeContext<'_>, tick: &mut Tick) {
		let _ = (ctx, tick);
	}

	/// Called every time the node is visited, after everything else.
	fn on_exit(&self, ctx: &NodeContext<'_>, tick: &mut Tick) {
		let _ = (ctx, tick);
	}
}
// endregion:	--- Behavior

// region:		--- execute
/// The uniform execution pipeline: `enter → open → tick → close → exit`.
///
/// A node opens only if its `isOpen` flag in the blackboard is unset and
/// closes only if the tick returned something other than [`Status::Running`],
/// so a node stays open across ticks exactly while it keeps running.
/// The pipeline never produces a status itself, it forwards whatever
/// [`Behavior::on_tick`] returns.
pub async fn execute(tree: &BehaviorTree, index: u16, tick: &mut Tick) -> Status {
	let node = tree.node(index);
	let ctx = NodeContext::new(tree, node);
	let data = node.data();

	// ENTER
	tick.enter_node(tree, index);
	node.behavior().on_enter(&ctx, tick);

	// OPEN
	let is_open = tick
		.blackboard()
		.get_node(IS_OPEN, data.tree_id(), data.id())
		.unwrap_or(false);
	if !is_open {
		tick.blackboard()
			.set_node(IS_OPEN, true, data.tree_id(), data.id());
		node.behavior().on_open(&ctx, tick);
	}

	// TICK
	let status = node.behavior().on_tick(&ctx, tick).await;

	// CLOSE
	if status != Status::Running {
		tick.close_node();
		tick.blackboard()
			.set_node(IS_OPEN, false, data.tree_id(), data.id());
		node.behavior().on_close(&ctx, tick);
	}

	// EXIT
	node.behavior().on_exit(&ctx, tick);

	status
}

/// Close a node and every still-open descendant, deepest first.
///
/// The driver's trail only covers nodes entered through the main tick
/// context. Children of a `Parallel` run on derived contexts whose trails
/// are discarded, and a sequence finishing early on cancellation leaves its
/// running child untouched by the child's own kernel. Both sites sweep the
/// branch with this helper so no `isOpen` flag outlives its open cycle.
/// A referenced tree is entered only while its subtree node is itself open,
/// leaving state reached through other references alone.
pub(crate) fn close_branch(target: &NodeRef, tick: &mut Tick) {
	let tree = target.tree().clone();
	let node = tree.node(target.index());
	for &child in node.children() {
		close_branch(&NodeRef::new(tree.clone(), child), tick);
	}
	if node.data().category() == Category::Tree {
		let data = node.data();
		let is_open = tick
			.blackboard()
			.get_node(IS_OPEN, data.tree_id(), data.id())
			.unwrap_or(false);
		if is_open {
			if let Some(resolver) = tree.resolver() {
				if let Some(sub) = resolver(data.title()) {
					let root = sub.root_index();
					close_branch(&NodeRef::new(sub, root), tick);
				}
			}
		}
	}
	close_abandoned(target, tick);
}

/// Close a node left open by a previous tick.
///
/// Used by the tree driver for branches abandoned between ticks. Closes only
/// nodes still flagged open, so `on_open` stays paired with exactly one
/// `on_close` per open cycle.
pub(crate) fn close_abandoned(target: &NodeRef, tick: &mut Tick) {
	let tree = target.tree().clone();
	let node = tree.node(target.index());
	let data = node.data();
	let is_open = tick
		.blackboard()
		.get_node(IS_OPEN, data.tree_id(), data.id())
		.unwrap_or(false);
	if is_open {
		tick.blackboard()
			.set_node(IS_OPEN, false, data.tree_id(), data.id());
		let ctx = NodeContext::new(&tree, node);
		node.behavior().on_close(&ctx, tick);
	}
}
// endregion:	--- execute
