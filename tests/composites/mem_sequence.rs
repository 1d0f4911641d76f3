// Copyright © 2025 Stephan Kunz

//! Tests the [`MemSequence`] composite

use crate::utilities::Probe;
use core::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use ticktree::prelude::*;

const RESUMABLE: &str = r#"{
	"title": "memory sequence",
	"root": "mem-1",
	"nodes": {
		"mem-1": { "id": "mem-1", "name": "MemSequence", "category": "composite", "children": ["head-1", "run-1", "tail-1"] },
		"head-1": { "id": "head-1", "name": "Head", "category": "action" },
		"run-1": { "id": "run-1", "name": "Runner", "category": "action" },
		"tail-1": { "id": "tail-1", "name": "Tail", "category": "action" }
	}
}"#;

#[tokio::test]
async fn mem_sequence_resumes_at_running_child() -> Result<(), Error> {
	let mut factory = TreeFactory::new();
	let head = Arc::new(AtomicUsize::new(0));
	let tail = Arc::new(AtomicUsize::new(0));
	{
		let head = head.clone();
		register_node!(factory, "Head", move || Probe::new(Status::Success, head.clone()));
	}
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
	assert_eq!(head.load(Ordering::SeqCst), 1);

	// the next tick resumes at the running child, the head is not re-ticked
	assert_eq!(tree.tick(&blackboard).await, Status::Running);
	assert_eq!(
		blackboard.get_node::<i64>("runningChild", tree.id(), "mem-1"),
		Some(1)
	);
	assert_eq!(head.load(Ordering::SeqCst), 1);
	assert_eq!(tail.load(Ordering::SeqCst), 0);
	Ok(())
}

const FAILING_TAIL: &str = r#"{
	"title": "memory sequence failing",
	"root": "mem-1",
	"nodes": {
		"mem-1": { "id": "mem-1", "name": "MemSequence", "category": "composite", "children": ["head-1", "fail-1"] },
		"head-1": { "id": "head-1", "name": "Head", "category": "action" },
		"fail-1": { "id": "fail-1", "name": "Failer", "category": "action" }
	}
}"#;

#[tokio::test]
async fn mem_sequence_fails_and_reopens() -> Result<(), Error> {
	let mut factory = TreeFactory::new();
	let head = Arc::new(AtomicUsize::new(0));
	{
		let head = head.clone();
		register_node!(factory, "Head", move || Probe::new(Status::Success, head.clone()));
	}
	let tree = factory.create_from_text(FAILING_TAIL)?;
	let blackboard = Blackboard::shared();

	assert_eq!(tree.tick(&blackboard).await, Status::Failure);
	// failure closes the node; the next tick opens fresh and restarts at 0
	assert_eq!(tree.tick(&blackboard).await, Status::Failure);
	assert_eq!(head.load(Ordering::SeqCst), 2);
	Ok(())
}
