// Copyright © 2025 Stephan Kunz

//! Tests the [`Priority`] composite

use crate::utilities::Probe;
use core::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use ticktree::prelude::*;

const FAILER_RUNNER_SUCCEEDER: &str = r#"{
	"title": "priority",
	"root": "pri-1",
	"nodes": {
		"pri-1": { "id": "pri-1", "name": "Priority", "category": "composite", "children": ["fail-1", "run-1", "succeed-1"] },
		"fail-1": { "id": "fail-1", "name": "Failer", "category": "action" },
		"run-1": { "id": "run-1", "name": "Runner", "category": "action" },
		"succeed-1": { "id": "succeed-1", "name": "Tail", "category": "action" }
	}
}"#;

#[tokio::test]
async fn priority_sticks_at_running_child() -> Result<(), Error> {
	let mut factory = TreeFactory::new();
	let tail = Arc::new(AtomicUsize::new(0));
	{
		let tail = tail.clone();
		register_node!(factory, "Tail", move || Probe::new(Status::Success, tail.clone()));
	}
	let tree = factory.create_from_text(FAILER_RUNNER_SUCCEEDER)?;
	let blackboard = Blackboard::shared();

	assert_eq!(tree.tick(&blackboard).await, Status::Running);
	let open: Vec<ConstString> = blackboard.open_node_ids(tree.id());
	let open: Vec<&str> = open.iter().map(AsRef::as_ref).collect();
	assert_eq!(open, ["pri-1", "run-1"]);

	assert_eq!(tree.tick(&blackboard).await, Status::Running);
	// the child behind the running one is never entered
	assert_eq!(tail.load(Ordering::SeqCst), 0);
	Ok(())
}

const ALL_FAILERS: &str = r#"{
	"title": "all failers",
	"root": "pri-1",
	"nodes": {
		"pri-1": { "id": "pri-1", "name": "Priority", "category": "composite", "children": ["fail-1", "fail-2"] },
		"fail-1": { "id": "fail-1", "name": "Failer", "category": "action" },
		"fail-2": { "id": "fail-2", "name": "Failer", "category": "action" }
	}
}"#;

#[tokio::test]
async fn priority_fails_when_all_fail() -> Result<(), Error> {
	let factory = TreeFactory::new();
	let tree = factory.create_from_text(ALL_FAILERS)?;
	let blackboard = Blackboard::shared();

	assert_eq!(tree.tick(&blackboard).await, Status::Failure);
	assert!(blackboard.open_node_ids(tree.id()).is_empty());
	Ok(())
}

const FAILER_THEN_ERROR: &str = r#"{
	"title": "error propagation",
	"root": "pri-1",
	"nodes": {
		"pri-1": { "id": "pri-1", "name": "Priority", "category": "composite", "children": ["fail-1", "err-1"] },
		"fail-1": { "id": "fail-1", "name": "Failer", "category": "action" },
		"err-1": { "id": "err-1", "name": "Error", "category": "action" }
	}
}"#;

#[tokio::test]
async fn priority_propagates_error() -> Result<(), Error> {
	let factory = TreeFactory::new();
	let tree = factory.create_from_text(FAILER_THEN_ERROR)?;
	let blackboard = Blackboard::shared();

	assert_eq!(tree.tick(&blackboard).await, Status::Error);
	Ok(())
}
