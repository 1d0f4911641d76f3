// Copyright © 2025 Stephan Kunz

//! Tests the [`MemPriority`] composite

use crate::utilities::{Probe, SucceedAfter};
use core::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use ticktree::prelude::*;

const RESUMABLE: &str = r#"{
	"title": "memory priority",
	"root": "mem-1",
	"nodes": {
		"mem-1": { "id": "mem-1", "name": "MemPriority", "category": "composite", "children": ["fail-1", "slow-1", "tail-1"] },
		"fail-1": { "id": "fail-1", "name": "FailProbe", "category": "action" },
		"slow-1": { "id": "slow-1", "name": "Slow", "category": "action" },
		"tail-1": { "id": "tail-1", "name": "Tail", "category": "action" }
	}
}"#;

#[tokio::test]
async fn mem_priority_resumes_and_succeeds() -> Result<(), Error> {
	let mut factory = TreeFactory::new();
	let failures = Arc::new(AtomicUsize::new(0));
	let tail = Arc::new(AtomicUsize::new(0));
	{
		let failures = failures.clone();
		register_node!(factory, "FailProbe", move || Probe::new(
			Status::Failure,
			failures.clone()
		));
	}
	register_node!(factory, "Slow", || SucceedAfter::new(1));
	{
		let tail = tail.clone();
		register_node!(factory, "Tail", move || Probe::new(Status::Success, tail.clone()));
	}
	let tree = factory.create_from_text(RESUMABLE)?;
	let blackboard = Blackboard::shared();

	assert_eq!(tree.tick(&blackboard).await, Status::Running);
	assert_eq!(
		blackboard.get_node::<i64>("runningChild", tree.id(), "mem-1"),
		Some(1)
	);

	// resumes at the running child: the failer is not asked again
	assert_eq!(tree.tick(&blackboard).await, Status::Success);
	assert_eq!(failures.load(Ordering::SeqCst), 1);
	// the running child succeeded, nothing behind it was entered
	assert_eq!(tail.load(Ordering::SeqCst), 0);
	Ok(())
}

const ALL_FAIL: &str = r#"{
	"title": "memory priority all fail",
	"root": "mem-1",
	"nodes": {
		"mem-1": { "id": "mem-1", "name": "MemPriority", "category": "composite", "children": ["fail-1", "fail-2"] },
		"fail-1": { "id": "fail-1", "name": "Failer", "category": "action" },
		"fail-2": { "id": "fail-2", "name": "Failer", "category": "action" }
	}
}"#;

#[tokio::test]
async fn mem_priority_fails_when_all_fail() -> Result<(), Error> {
	let factory = TreeFactory::new();
	let tree = factory.create_from_text(ALL_FAIL)?;
	let blackboard = Blackboard::shared();

	assert_eq!(tree.tick(&blackboard).await, Status::Failure);
	assert!(blackboard.open_node_ids(tree.id()).is_empty());
	Ok(())
}
