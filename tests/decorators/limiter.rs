// Copyright © 2025 Stephan Kunz

//! Tests the [`Limiter`] decorator

use crate::utilities::{Probe, SucceedAfter};
use core::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use ticktree::prelude::*;

const LIMITED: &str = r#"{
	"title": "limiter",
	"root": "lim-1",
	"nodes": {
		"lim-1": { "id": "lim-1", "name": "Limiter", "category": "decorator", "child": "child-1", "properties": { "maxLoop": 2 } },
		"child-1": { "id": "child-1", "name": "Child", "category": "action" }
	}
}"#;

#[tokio::test]
async fn limiter_stops_after_max_loop_completions() -> Result<(), Error> {
	let mut factory = TreeFactory::new();
	let ticks = Arc::new(AtomicUsize::new(0));
	{
		let ticks = ticks.clone();
		register_node!(factory, "Child", move || Probe::new(Status::Failure, ticks.clone()));
	}
	let tree = factory.create_from_text(LIMITED)?;
	let blackboard = Blackboard::shared();

	assert_eq!(tree.tick(&blackboard).await, Status::Failure);
	assert_eq!(tree.tick(&blackboard).await, Status::Failure);
	// limit reached, the child is not evaluated again
	assert_eq!(tree.tick(&blackboard).await, Status::Failure);
	assert_eq!(ticks.load(Ordering::SeqCst), 2);
	assert_eq!(blackboard.get_node::<i64>("i", tree.id(), "lim-1"), Some(2));
	Ok(())
}

const LIMITED_RUNNING: &str = r#"{
	"title": "limiter over running child",
	"root": "lim-1",
	"nodes": {
		"lim-1": { "id": "lim-1", "name": "Limiter", "category": "decorator", "child": "child-1", "properties": { "maxLoop": 1 } },
		"child-1": { "id": "child-1", "name": "Slow", "category": "action" }
	}
}"#;

#[tokio::test]
async fn limiter_ignores_running_ticks() -> Result<(), Error> {
	let mut factory = TreeFactory::new();
	register_node!(factory, "Slow", || SucceedAfter::new(2));
	let tree = factory.create_from_text(LIMITED_RUNNING)?;
	let blackboard = Blackboard::shared();

	// two running ticks do not count against the limit
	assert_eq!(tree.tick(&blackboard).await, Status::Running);
	assert_eq!(tree.tick(&blackboard).await, Status::Running);
	assert_eq!(blackboard.get_node::<i64>("i", tree.id(), "lim-1"), None);
	// the completion does
	assert_eq!(tree.tick(&blackboard).await, Status::Success);
	assert_eq!(blackboard.get_node::<i64>("i", tree.id(), "lim-1"), Some(1));
	// afterwards the limiter refuses without asking the child
	assert_eq!(tree.tick(&blackboard).await, Status::Failure);
	Ok(())
}

const MISSING_MAX_LOOP: &str = r#"{
	"title": "limiter missing maxLoop",
	"root": "lim-1",
	"nodes": {
		"lim-1": { "id": "lim-1", "name": "Limiter", "category": "decorator", "child": "child-1" },
		"child-1": { "id": "child-1", "name": "Succeeder", "category": "action" }
	}
}"#;

#[tokio::test]
async fn limiter_requires_max_loop() {
	let factory = TreeFactory::new();
	let result = factory.create_from_text(MISSING_MAX_LOOP);
	assert!(result.is_err());
}
