// Copyright © 2025 Stephan Kunz

//! Tests the [`Sequence`] composite

use crate::utilities::Probe;
use core::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use ticktree::prelude::*;

const THREE_SUCCEEDERS: &str = r#"{
	"title": "three succeeders",
	"root": "seq-1",
	"nodes": {
		"seq-1": { "id": "seq-1", "name": "Sequence", "category": "composite", "children": ["child-1", "child-2", "child-3"] },
		"child-1": { "id": "child-1", "name": "Succeeder", "category": "action" },
		"child-2": { "id": "child-2", "name": "Succeeder", "category": "action" },
		"child-3": { "id": "child-3", "name": "Succeeder", "category": "action" }
	}
}"#;

#[tokio::test]
async fn sequence_of_succeeders() -> Result<(), Error> {
	let factory = TreeFactory::new();
	let tree = factory.create_from_text(THREE_SUCCEEDERS)?;
	let blackboard = Blackboard::shared();

	let status = tree.tick(&blackboard).await;
	assert_eq!(status, Status::Success);
	// root plus three children
	assert_eq!(blackboard.node_count(tree.id()), 4);
	assert!(blackboard.open_node_ids(tree.id()).is_empty());

	// a second tick behaves identically, no stale open state
	let status = tree.tick(&blackboard).await;
	assert_eq!(status, Status::Success);
	assert_eq!(blackboard.node_count(tree.id()), 4);
	assert!(blackboard.open_node_ids(tree.id()).is_empty());
	Ok(())
}

const STOPS_AT_FIRST: &str = r#"{
	"title": "sequence stops at first non success",
	"root": "seq-1",
	"nodes": {
		"seq-1": { "id": "seq-1", "name": "Sequence", "category": "composite", "children": ["child-1", "child-2"] },
		"child-1": { "id": "child-1", "name": "First", "category": "action" },
		"child-2": { "id": "child-2", "name": "Second", "category": "action" }
	}
}"#;

#[tokio::test]
async fn sequence_stops_at_failure() -> Result<(), Error> {
	let mut factory = TreeFactory::new();
	let first = Arc::new(AtomicUsize::new(0));
	let second = Arc::new(AtomicUsize::new(0));
	{
		let first = first.clone();
		register_node!(factory, "First", move || Probe::new(Status::Failure, first.clone()));
	}
	{
		let second = second.clone();
		register_node!(factory, "Second", move || Probe::new(Status::Success, second.clone()));
	}
	let tree = factory.create_from_text(STOPS_AT_FIRST)?;
	let blackboard = Blackboard::shared();

	assert_eq!(tree.tick(&blackboard).await, Status::Failure);
	assert_eq!(first.load(Ordering::SeqCst), 1);
	assert_eq!(second.load(Ordering::SeqCst), 0);
	Ok(())
}

#[tokio::test]
async fn sequence_propagates_error() -> Result<(), Error> {
	let mut factory = TreeFactory::new();
	let first = Arc::new(AtomicUsize::new(0));
	let second = Arc::new(AtomicUsize::new(0));
	{
		let first = first.clone();
		register_node!(factory, "First", move || Probe::new(Status::Success, first.clone()));
	}
	{
		let second = second.clone();
		register_node!(factory, "Second", move || Probe::new(Status::Error, second.clone()));
	}
	let tree = factory.create_from_text(STOPS_AT_FIRST)?;
	let blackboard = Blackboard::shared();

	assert_eq!(tree.tick(&blackboard).await, Status::Error);
	assert_eq!(first.load(Ordering::SeqCst), 1);
	assert_eq!(second.load(Ordering::SeqCst), 1);
	Ok(())
}

#[tokio::test]
async fn sequence_restarts_from_zero() -> Result<(), Error> {
	// a plain sequence has no memory: the running child makes the next tick
	// re-enter from the first child
	let mut factory = TreeFactory::new();
	let first = Arc::new(AtomicUsize::new(0));
	let second = Arc::new(AtomicUsize::new(0));
	{
		let first = first.clone();
		register_node!(factory, "First", move || Probe::new(Status::Success, first.clone()));
	}
	{
		let second = second.clone();
		register_node!(factory, "Second", move || Probe::new(Status::Running, second.clone()));
	}
	let tree = factory.create_from_text(STOPS_AT_FIRST)?;
	let blackboard = Blackboard::shared();

	assert_eq!(tree.tick(&blackboard).await, Status::Running);
	assert_eq!(tree.tick(&blackboard).await, Status::Running);
	assert_eq!(first.load(Ordering::SeqCst), 2);
	assert_eq!(second.load(Ordering::SeqCst), 2);
	Ok(())
}
