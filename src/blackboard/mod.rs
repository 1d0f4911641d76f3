// Copyright © 2025 Stephan Kunz
//! Scoped memory for [`ticktree`](crate) trees and their agents.
//!
//! A [`Blackboard`] keeps three nested scopes:
//! - the global scope, visible to all nodes of all trees sharing the board,
//! - the per-tree scope, visible to the nodes of one tree,
//! - the per-(tree, node) scope, visible to a single node of one tree.
//!
//! Neither trees nor nodes store execution state in their own structs, the
//! blackboard is the single source of truth. That is what allows one loaded
//! tree instance to drive any number of agents, each with its own board.

// region:      --- modules
use crate::ConstString;
use crate::tree::NodeRef;
use core::any::Any;
use spin::{Mutex, RwLock};
use std::collections::HashMap;
use std::sync::Arc;
// endregion:   --- modules

// region:		--- types
/// Thread safe shared reference to a [`Blackboard`].
pub type SharedBlackboard = Arc<Blackboard>;

type Entry = Arc<dyn Any + Send + Sync>;
// endregion:	--- types

// region:      --- Memory
/// A single scope: a concurrent `key → value` map of type erased entries.
#[derive(Default)]
struct Memory {
	entries: RwLock<HashMap<ConstString, Entry>>,
}

impl Memory {
	fn get<T: Any + Clone>(&self, key: &str) -> Option<T> {
		self.entries
			.read()
			.get(key)
			.and_then(|entry| entry.downcast_ref::<T>().cloned())
	}

	fn set<T: Any + Send + Sync>(&self, key: &str, value: T) {
		self.entries.write().insert(key.into(), Arc::new(value));
	}

	fn remove(&self, key: &str) {
		self.entries.write().remove(key);
	}
}
// endregion:   --- Memory

// region:      --- TreeData
/// Bookkeeping the driver keeps per tree in the per-tree scope:
/// the nodes still open at the end of the last tick and tick counters.
#[derive(Default)]
pub struct TreeData {
	/// Nodes that stayed open at the end of the last tick,
	/// ordered root first.
	open_nodes: Vec<NodeRef>,
	/// Number of nodes entered during the last tick.
	node_count: i64,
	/// Deepest open-node trail seen so far.
	traversal_depth: usize,
	/// Number of completed ticks.
	traversal_cycle: u64,
}

impl TreeData {
	/// The nodes still open at the end of the last tick, root first.
	#[must_use]
	pub fn open_nodes(&self) -> &[NodeRef] {
		&self.open_nodes
	}

	/// Number of nodes entered during the last tick.
	#[must_use]
	pub const fn node_count(&self) -> i64 {
		self.node_count
	}

	/// Deepest open-node trail seen so far.
	#[must_use]
	pub const fn traversal_depth(&self) -> usize {
		self.traversal_depth
	}

	/// Number of completed ticks.
	#[must_use]
	pub const fn traversal_cycle(&self) -> u64 {
		self.traversal_cycle
	}

	pub(crate) fn take_open_nodes(&mut self) -> Vec<NodeRef> {
		core::mem::take(&mut self.open_nodes)
	}

	pub(crate) fn store_tick(&mut self, open_nodes: Vec<NodeRef>, node_count: i64) {
		self.traversal_depth = self.traversal_depth.max(open_nodes.len());
		self.traversal_cycle += 1;
		self.open_nodes = open_nodes;
		self.node_count = node_count;
	}
}
// endregion:   --- TreeData

// region:      --- TreeMemory
/// Per-tree storage: the tree scope, the node scopes and the [`TreeData`].
#[derive(Default)]
struct TreeMemory {
	memory: Memory,
	node_memory: RwLock<HashMap<ConstString, Arc<Memory>>>,
	tree_data: Mutex<TreeData>,
}

impl TreeMemory {
	fn node_memory(&self, node_scope: &str) -> Arc<Memory> {
		if let Some(memory) = self.node_memory.read().get(node_scope) {
			return memory.clone();
		}
		self.node_memory
			.write()
			.entry(node_scope.into())
			.or_default()
			.clone()
	}
}
// endregion:   --- TreeMemory

// region:      --- Blackboard
/// The scoped memory shared by trees and one agent.
///
/// Create one board per agent and hand it into every
/// [`tick`](crate::tree::BehaviorTree::tick) of that agent. Access is safe
/// from concurrent tasks, which [`Parallel`](crate::behavior::composite::Parallel)
/// children rely on.
#[derive(Default)]
pub struct Blackboard {
	base_memory: Memory,
	tree_memory: RwLock<HashMap<ConstString, Arc<TreeMemory>>>,
}

impl Blackboard {
	/// Create a new shared blackboard.
	#[must_use]
	pub fn shared() -> SharedBlackboard {
		Arc::new(Self::default())
	}

	fn tree_memory(&self, tree_scope: &str) -> Arc<TreeMemory> {
		if let Some(memory) = self.tree_memory.read().get(tree_scope) {
			return memory.clone();
		}
		self.tree_memory
			.write()
			.entry(tree_scope.into())
			.or_default()
			.clone()
	}

	/// Retrieve a value from the global scope.
	#[must_use]
	pub fn get<T: Any + Clone>(&self, key: &str) -> Option<T> {
		self.base_memory.get(key)
	}

	/// Store a value in the global scope.
	pub fn set<T: Any + Send + Sync>(&self, key: &str, value: T) {
		self.base_memory.set(key, value);
	}

	/// Remove a value from the global scope.
	pub fn remove(&self, key: &str) {
		self.base_memory.remove(key);
	}

	/// Retrieve a value from the per-tree scope.
	#[must_use]
	pub fn get_tree<T: Any + Clone>(&self, key: &str, tree_scope: &str) -> Option<T> {
		self.tree_memory(tree_scope).memory.get(key)
	}

	/// Store a value in the per-tree scope.
	pub fn set_tree<T: Any + Send + Sync>(&self, key: &str, value: T, tree_scope: &str) {
		self.tree_memory(tree_scope).memory.set(key, value);
	}

	/// Remove a value from the per-tree scope.
	pub fn remove_tree(&self, key: &str, tree_scope: &str) {
		self.tree_memory(tree_scope).memory.remove(key);
	}

	/// Retrieve a value from the per-(tree, node) scope.
	#[must_use]
	pub fn get_node<T: Any + Clone>(&self, key: &str, tree_scope: &str, node_scope: &str) -> Option<T> {
		self.tree_memory(tree_scope).node_memory(node_scope).get(key)
	}

	/// Store a value in the per-(tree, node) scope.
	pub fn set_node<T: Any + Send + Sync>(&self, key: &str, value: T, tree_scope: &str, node_scope: &str) {
		self.tree_memory(tree_scope)
			.node_memory(node_scope)
			.set(key, value);
	}

	/// Remove a value from the per-(tree, node) scope.
	pub fn remove_node(&self, key: &str, tree_scope: &str, node_scope: &str) {
		self.tree_memory(tree_scope)
			.node_memory(node_scope)
			.remove(key);
	}

	/// Run `f` on the [`TreeData`] of the given tree scope.
	pub(crate) fn with_tree_data<R>(&self, tree_scope: &str, f: impl FnOnce(&mut TreeData) -> R) -> R {
		let memory = self.tree_memory(tree_scope);
		let mut guard = memory.tree_data.lock();
		f(&mut guard)
	}

	/// The IDs of the nodes still open for the given tree, root first.
	#[must_use]
	pub fn open_node_ids(&self, tree_scope: &str) -> Vec<ConstString> {
		self.with_tree_data(tree_scope, |data| {
			data.open_nodes()
				.iter()
				.map(|node| node.data().id().clone())
				.collect()
		})
	}

	/// Number of nodes entered during the last tick of the given tree.
	#[must_use]
	pub fn node_count(&self, tree_scope: &str) -> i64 {
		self.with_tree_data(tree_scope, |data| data.node_count())
	}
}
// endregion:   --- Blackboard
