// Copyright © 2025 Stephan Kunz
//! `ticktree` factory errors

// region		--- modules
use crate::ConstString;
use crate::behavior::BehaviorError;
// endregion:	--- modules

/// Factory errors. All of them are fatal at load and abort the load call.
#[non_exhaustive]
pub enum Error {
	/// Pass through from behavior initialization
	Behavior {
		/// The source error
		source: BehaviorError,
	},
	/// A node lists a child id that does not exist in the document
	DanglingChild {
		/// The missing child id
		child: ConstString,
		/// The referencing node id
		node: ConstString,
	},
	/// The documents root id does not exist in the document
	DanglingRoot {
		/// The missing root id
		root: ConstString,
	},
	/// A node id occurs more than once in the document
	DuplicateNode {
		/// The duplicated node id
		id: ConstString,
	},
	/// A node is referenced as child by more than one parent
	DuplicateParent {
		/// The node id with several parents
		node: ConstString,
	},
	/// A node descriptors id differs from its key in the nodes map
	IdMismatch {
		/// The key in the nodes map
		key: ConstString,
		/// The id inside the descriptor
		id: ConstString,
	},
	/// Pass through errors from nanoserde
	Json {
		/// The source error
		source: nanoserde::DeJsonErr,
	},
	/// The documents root node is referenced as a child
	RootHasParent {
		/// The root id
		root: ConstString,
	},
	/// The document contains more nodes than a tree can address
	TooManyNodes {
		/// The number of nodes found
		count: usize,
	},
	/// A node name without registered constructor
	UnknownNode {
		/// The unknown name
		name: ConstString,
		/// The nodes title, for diagnostics
		title: ConstString,
	},
}

/// Only default implementation needed.
impl core::error::Error for Error {}

impl core::fmt::Debug for Error {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		match self {
			Self::Behavior { source } => write!(f, "Behavior({source})"),
			Self::DanglingChild { child, node } => write!(f, "DanglingChild(child: {child}, node: {node})"),
			Self::DanglingRoot { root } => write!(f, "DanglingRoot({root})"),
			Self::DuplicateNode { id } => write!(f, "DuplicateNode({id})"),
			Self::DuplicateParent { node } => write!(f, "DuplicateParent({node})"),
			Self::IdMismatch { key, id } => write!(f, "IdMismatch(key: {key}, id: {id})"),
			Self::Json { source } => write!(f, "Json({source})"),
			Self::RootHasParent { root } => write!(f, "RootHasParent({root})"),
			Self::TooManyNodes { count } => write!(f, "TooManyNodes({count})"),
			Self::UnknownNode { name, title } => write!(f, "UnknownNode(name: {name}, title: {title})"),
		}
	}
}

impl core::fmt::Display for Error {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		match self {
			Self::Behavior { source } => write!(f, "behavior initialization failed: {source}"),
			Self::DanglingChild { child, node } => {
				write!(f, "node {node} references the nonexistent child {child}")
			}
			Self::DanglingRoot { root } => write!(f, "the root id {root} does not exist in the document"),
			Self::DuplicateNode { id } => write!(f, "the node id {id} occurs more than once"),
			Self::DuplicateParent { node } => write!(f, "node {node} is referenced by more than one parent"),
			Self::IdMismatch { key, id } => {
				write!(f, "the node key {key} differs from the descriptors id {id}")
			}
			Self::Json { source } => write!(f, "a deserialization error occured: {source}"),
			Self::RootHasParent { root } => write!(f, "the root node {root} must not have a parent"),
			Self::TooManyNodes { count } => write!(f, "a tree is limited to 65536 nodes, found {count}"),
			Self::UnknownNode { name, title } => {
				write!(f, "no behavior registered under the name {name} (title: {title})")
			}
		}
	}
}

impl From<BehaviorError> for Error {
	fn from(source: BehaviorError) -> Self {
		Self::Behavior { source }
	}
}

impl From<nanoserde::DeJsonErr> for Error {
	fn from(source: nanoserde::DeJsonErr) -> Self {
		Self::Json { source }
	}
}
