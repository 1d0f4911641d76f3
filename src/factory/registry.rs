// Copyright © 2025 Stephan Kunz

//! [`NodeRegistry`]: named constructors for behaviors.

// region:      --- modules
use crate::ConstString;
use crate::behavior::Behavior;
use crate::behavior::action::{ErrorAction, Failer, Log, Runner, Succeeder, Wait};
use crate::behavior::composite::{MemPriority, MemSequence, Parallel, Priority, Sequence};
use crate::behavior::decorator::{
	Inverter, Limiter, MaxTime, RepeatUntilFailure, RepeatUntilSuccess, Repeater,
};
use std::collections::BTreeMap;
// endregion:   --- modules

// region:     --- NodeRegistry
/// A constructor for one registered behavior.
pub type NodeCreationFn = Box<dyn Fn() -> Box<dyn Behavior> + Send + Sync>;

/// Maps node names to behavior constructors.
///
/// The built-in set covers the standard leaves, composites and decorators;
/// host registrations are merged on top and may replace built-ins. Nodes
/// needing host attachments, like `Subscription` clients or `Subscriber`
/// topics, are registered by the host with the attachment baked into the
/// constructor closure.
#[derive(Default)]
pub struct NodeRegistry {
	behaviors: BTreeMap<ConstString, NodeCreationFn>,
}

impl NodeRegistry {
	/// An empty registry.
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// A registry with all built-in behaviors.
	#[must_use]
	pub fn with_builtins() -> Self {
		let mut registry = Self::default();
		// actions
		registry.register("Error", || ErrorAction);
		registry.register("Failer", || Failer);
		registry.register("Log", Log::default);
		registry.register("Runner", || Runner);
		registry.register("Succeeder", || Succeeder);
		registry.register("Wait", Wait::default);
		// composites
		registry.register("MemPriority", || MemPriority);
		registry.register("MemSequence", || MemSequence);
		registry.register("Parallel", || Parallel);
		registry.register("Priority", || Priority);
		registry.register("Sequence", || Sequence);
		// decorators
		registry.register("Inverter", || Inverter);
		registry.register("Limiter", Limiter::default);
		registry.register("MaxTime", MaxTime::default);
		registry.register("Repeater", Repeater::default);
		registry.register("RepeatUntilFailure", RepeatUntilFailure::default);
		registry.register("RepeatUntilSuccess", RepeatUntilSuccess::default);
		registry
	}

	/// Register a behavior constructor under a name.
	/// An existing registration under the same name is replaced.
	pub fn register<F, B>(&mut self, name: &str, creation_fn: F)
	where
		F: Fn() -> B + Send + Sync + 'static,
		B: Behavior + 'static,
	{
		self.behaviors.insert(
			name.into(),
			Box::new(move || -> Box<dyn Behavior> { Box::new(creation_fn()) }),
		);
	}

	/// Whether a constructor is registered under the name.
	#[must_use]
	pub fn contains(&self, name: &str) -> bool {
		self.behaviors.contains_key(name)
	}

	/// Construct a fresh behavior by name.
	pub(crate) fn create(&self, name: &str) -> Option<Box<dyn Behavior>> {
		self.behaviors.get(name).map(|creation_fn| creation_fn())
	}

	/// The names of all registered behaviors.
	#[must_use]
	pub fn names(&self) -> Vec<ConstString> {
		self.behaviors.keys().cloned().collect()
	}
}
// endregion:   --- NodeRegistry
