// Copyright © 2025 Stephan Kunz

//! Tree handling of [`ticktree`](crate).

mod tick;
#[allow(clippy::module_inception)]
mod tree;
mod tree_node;

// flatten
pub use tick::Tick;
pub use tree::{BehaviorTree, SubTreeResolver};
pub use tree_node::{NodeRef, TreeNode};
