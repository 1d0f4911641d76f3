// Copyright © 2025 Stephan Kunz

//! [`TreeFactory`] implementation: turns tree documents into live trees.

// region:      --- modules
use crate::ConstString;
use crate::behavior::{Behavior, Category, NodeData, SubTree};
use crate::tree::{BehaviorTree, SubTreeResolver, TreeNode};
use core::str::FromStr;
use nanoserde::DeJson;
use spin::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{Level, event, instrument};
use uuid::Uuid;

use super::error::Error;
use super::json_config::{ProjectDescriptor, TreeDescriptor};
use super::registry::NodeRegistry;
// endregion:   --- modules

// region:      --- SubTreeLibrary
/// A name → tree map feeding the subtree lookup.
///
/// Insert loaded trees under their title, then register
/// [`resolver`](SubTreeLibrary::resolver) on the factory before loading
/// trees that reference them. The library is shared, so trees inserted
/// after a referencing tree was loaded are still found at tick time.
#[derive(Clone, Default)]
pub struct SubTreeLibrary {
	trees: Arc<RwLock<HashMap<ConstString, BehaviorTree>>>,
}

impl SubTreeLibrary {
	/// An empty library.
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Insert a tree under its title.
	pub fn insert(&self, tree: &BehaviorTree) {
		self.trees.write().insert(tree.title().clone(), tree.clone());
	}

	/// Find a tree by name.
	#[must_use]
	pub fn find(&self, name: &str) -> Option<BehaviorTree> {
		self.trees.read().get(name).cloned()
	}

	/// A [`SubTreeResolver`] backed by this library.
	#[must_use]
	pub fn resolver(&self) -> SubTreeResolver {
		let library = self.clone();
		Arc::new(move |name| library.find(name))
	}
}
// endregion:   --- SubTreeLibrary

// region:      --- TreeFactory
/// Creates [`BehaviorTree`]s from JSON documents.
///
/// The factory owns the [`NodeRegistry`] used to construct behaviors by
/// name and the optional subtree lookup stored into every created tree.
pub struct TreeFactory {
	registry: NodeRegistry,
	resolver: Option<SubTreeResolver>,
}

impl Default for TreeFactory {
	fn default() -> Self {
		Self {
			registry: NodeRegistry::with_builtins(),
			resolver: None,
		}
	}
}

impl TreeFactory {
	/// A factory with the built-in behaviors registered.
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Access the registry.
	#[must_use]
	pub const fn registry(&self) -> &NodeRegistry {
		&self.registry
	}

	/// Access the registry mutable, e.g. to register host behaviors.
	pub const fn registry_mut(&mut self) -> &mut NodeRegistry {
		&mut self.registry
	}

	/// Register the lookup handed to every subtree node of trees created
	/// afterwards.
	pub fn set_subtree_resolver(&mut self, resolver: SubTreeResolver) {
		self.resolver = Some(resolver);
	}

	/// Create a tree from a JSON tree document.
	/// # Errors
	/// - on malformed JSON or structural errors in the document
	pub fn create_from_text(&self, json: &str) -> Result<BehaviorTree, Error> {
		let descriptor = TreeDescriptor::deserialize_json(json)?;
		self.create_from_descriptor(&descriptor)
	}

	/// Create all trees of a JSON project document, in authoring order.
	/// # Errors
	/// - on malformed JSON or structural errors in any tree document
	pub fn create_project_from_text(&self, json: &str) -> Result<Vec<BehaviorTree>, Error> {
		let project = ProjectDescriptor::deserialize_json(json)?;
		project
			.trees
			.iter()
			.map(|descriptor| self.create_from_descriptor(descriptor))
			.collect()
	}

	/// Create a tree from an already parsed document.
	///
	/// Nodes are constructed through the registry, connected by arena
	/// indices and initialized from their frozen properties. Every
	/// structural invariant is checked here: ids unique, children resolved,
	/// exactly one parent per node, the root parentless.
	/// # Errors
	/// - on structural errors in the document
	#[instrument(level = Level::DEBUG, skip_all)]
	#[allow(clippy::cast_possible_truncation)]
	pub fn create_from_descriptor(&self, descriptor: &TreeDescriptor) -> Result<BehaviorTree, Error> {
		event!(Level::TRACE, title = %descriptor.title, "create_from_descriptor");
		let count = descriptor.nodes.len();
		if count > usize::from(u16::MAX) {
			return Err(Error::TooManyNodes { count });
		}

		// assign arena indices in authoring order
		let mut index_of: HashMap<&str, u16> = HashMap::with_capacity(count);
		for (position, (id, _)) in descriptor.nodes.iter().enumerate() {
			if index_of.insert(id.as_str(), position as u16).is_some() {
				return Err(Error::DuplicateNode { id: id.as_str().into() });
			}
		}

		// connect the nodes
		let mut categories: Vec<Category> = Vec::with_capacity(count);
		let mut parents: Vec<Option<u16>> = vec![None; count];
		let mut children_of: Vec<Vec<u16>> = vec![Vec::new(); count];
		for (position, (id, node)) in descriptor.nodes.iter().enumerate() {
			let category = Category::from_str(&node.category)?;
			categories.push(category);
			let index = position as u16;
			let mut link = |child_id: &str| -> Result<(), Error> {
				let child = *index_of.get(child_id).ok_or_else(|| Error::DanglingChild {
					child: child_id.into(),
					node: id.as_str().into(),
				})?;
				if parents[usize::from(child)].is_some() {
					return Err(Error::DuplicateParent {
						node: child_id.into(),
					});
				}
				parents[usize::from(child)] = Some(index);
				children_of[usize::from(index)].push(child);
				Ok(())
			};
			match category {
				Category::Composite => {
					for child_id in &node.children {
						link(child_id)?;
					}
				}
				Category::Decorator => {
					if let Some(child_id) = &node.child {
						link(child_id)?;
					}
				}
				Category::Action | Category::Condition | Category::Tree => {}
			}
		}

		// resolve the root
		let root = *index_of
			.get(descriptor.root.as_str())
			.ok_or_else(|| Error::DanglingRoot {
				root: descriptor.root.as_str().into(),
			})?;
		if parents[usize::from(root)].is_some() {
			return Err(Error::RootHasParent {
				root: descriptor.root.as_str().into(),
			});
		}

		// construct and initialize the behaviors
		let uuid = Uuid::new_v4();
		let tree_id: ConstString = uuid.to_string().into();
		let mut nodes: Vec<TreeNode> = Vec::with_capacity(count);
		for (position, (id, node)) in descriptor.nodes.iter().enumerate() {
			if !node.id.is_empty() && node.id != *id {
				return Err(Error::IdMismatch {
					key: id.as_str().into(),
					id: node.id.as_str().into(),
				});
			}
			let category = categories[position];
			let mut behavior: Box<dyn Behavior> = if category == Category::Tree {
				Box::new(SubTree)
			} else {
				self.registry
					.create(&node.name)
					.ok_or_else(|| Error::UnknownNode {
						name: node.name.as_str().into(),
						title: node.title.as_str().into(),
					})?
			};
			let data = NodeData::new(
				position as u16,
				id,
				&node.name,
				&node.title,
				&node.description,
				category,
				node.properties.clone(),
				parents[position],
				tree_id.clone(),
			);
			behavior.initialize(&data)?;
			nodes.push(TreeNode::new(
				data,
				behavior,
				core::mem::take(&mut children_of[position]),
			));
		}

		Ok(BehaviorTree::new(
			uuid,
			&descriptor.title,
			&descriptor.description,
			descriptor.properties.clone(),
			root,
			nodes,
			self.resolver.clone(),
		))
	}
}
// endregion:   --- TreeFactory
