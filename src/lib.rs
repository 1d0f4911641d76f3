// Copyright © 2025 Stephan Kunz
#![doc = include_str!("../README.md")]

#[cfg(doctest)]
doc_comment::doctest!("../README.md");

// mostly needed stuff
pub mod prelude;

// modules
pub mod behavior;
mod blackboard;
mod error;
pub mod factory;
mod tree;

// flatten:
pub use behavior::cancel::CancelSignal;
pub use behavior::composite::{SubscriberClient, SubscriberClientFactory, SubscriptionCounter};
pub use behavior::{Behavior, BehaviorError, Category, NodeContext, Status, execute};
pub use behavior::{NodeData, Properties, PropertyValue};
pub use blackboard::{Blackboard, SharedBlackboard, TreeData};
pub use error::{Error, TickTreeResult};
pub use factory::{FactoryError, NodeRegistry, SubTreeLibrary, TreeFactory};
pub use tree::{BehaviorTree, NodeRef, SubTreeResolver, Tick, TreeNode};

// region:		--- modules
use core::any::Any;
use std::sync::Arc;
// endregion:	--- modules

// region		--- types
/// An immutable thread safe `String` type
/// see: [Logan Smith](https://www.youtube.com/watch?v=A4cKi7PTJSs).
pub type ConstString = Arc<str>;

/// The host provided target object handed into a tick.
/// The engine never looks inside; only user authored leaves do.
pub type Target = Arc<dyn Any + Send + Sync>;

/// An opaque debug handle stored on a tree and threaded through every tick.
pub type DebugHandle = Arc<dyn Any + Send + Sync>;
// endregion:   --- types

// region:		--- literal constants
/// Blackboard keys
const CANCEL_CTX: &str = "cancelCtx";
const IS_OPEN: &str = "isOpen";
const LOOP_COUNT: &str = "i";
const NODE_COUNT: &str = "nodeCount";
const RUN_STATE: &str = "runState";
const RUNNING_CHILD: &str = "runningChild";
const START_TIME: &str = "startTime";
const SUB_CLIENT: &str = "subClient";
const SUB_SUM: &str = "subSum";

/// Property names
const INFO: &str = "info";
const MAX_LOOP: &str = "maxLoop";
const MAX_TIME: &str = "maxTime";
const MILLISECONDS: &str = "milliseconds";

/// Names of the behaviors taking part in ancestry checks
const PARALLEL: &str = "Parallel";
const SUBSCRIPTION: &str = "Subscription";

/// Limit for nested subtree execution within a single tick.
const MAX_SUBTREE_DEPTH: usize = 127;

/// Iteration slice for unbounded repeat decorators within a single tick.
const UNBOUNDED_REPEAT_SLICE: i64 = 1024;
// endregion:	--- literal constants

// region:		---macros
/// Macro to register a behavior with a [`TreeFactory`].
///
/// # Usage:
///
/// Register a behavior type constructible via [`Default`]:
/// ```no-test
/// register_node!(<mutable (reference to) tree factory>, <"identifying name">, <struct to register>)
/// ```
///
/// Register a behavior via a creation closure:
/// ```no-test
/// register_node!(<mutable (reference to) tree factory>, <"identifying name">, || MyNode::new(42))
/// ```
#[macro_export]
macro_rules! register_node {
	// a behavior struct constructible via `Default`
	($factory:expr, $name:literal, $tp:ty $(,)?) => {{
		$factory.registry_mut().register($name, <$tp>::default);
	}};
	// a creation closure returning the behavior
	($factory:expr, $name:literal, $ctor:expr $(,)?) => {{
		$factory.registry_mut().register($name, $ctor);
	}};
}
// endregion:	---macros
