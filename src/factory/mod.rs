// Copyright © 2025 Stephan Kunz

//! Loading [`BehaviorTree`](crate::tree::BehaviorTree)s from JSON documents
//! via a registry of named node constructors.

mod error;
#[allow(clippy::module_inception)]
mod factory;
mod json_config;
mod registry;

// flatten
pub use error::Error as FactoryError;
pub use factory::{SubTreeLibrary, TreeFactory};
pub use json_config::{NodeDescriptor, ProjectDescriptor, TreeDescriptor};
pub use registry::{NodeCreationFn, NodeRegistry};
