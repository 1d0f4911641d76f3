// Copyright © 2025 Stephan Kunz

//! Most commonly used interface of `ticktree`.
//!
//! Typically it is sufficient to include the prelude with
//!
//! ```use ticktree::prelude::*;```

// public exports
// error handling
pub use crate::error::{Error, TickTreeResult};
// behavior macros
pub use crate::register_node;
// behavior
pub use crate::behavior::{
	Behavior, BehaviorError, Category, NodeContext, NodeData, Properties, PropertyValue, Status,
	execute,
};
pub use crate::behavior::action::{FnAction, Subscriber, SubscriberTopicFn};
pub use crate::behavior::cancel::CancelSignal;
pub use crate::behavior::composite::{
	Subscription, SubscriberClient, SubscriberClientFactory, SubscriptionCounter,
};
pub use crate::behavior::condition::FnCondition;
// blackboard
pub use crate::blackboard::{Blackboard, SharedBlackboard, TreeData};
// factory
pub use crate::factory::{NodeRegistry, SubTreeLibrary, TreeFactory, TreeDescriptor};
// tree
pub use crate::tree::{BehaviorTree, NodeRef, SubTreeResolver, Tick};
// types
pub use crate::{ConstString, DebugHandle, Target};
