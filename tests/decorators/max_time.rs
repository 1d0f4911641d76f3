// Copyright © 2025 Stephan Kunz

//! Tests the [`MaxTime`] decorator

use crate::utilities::SucceedAfter;
use core::time::Duration;
use ticktree::prelude::*;

const TIMED: &str = r#"{
	"title": "max time",
	"root": "time-1",
	"nodes": {
		"time-1": { "id": "time-1", "name": "MaxTime", "category": "decorator", "child": "child-1", "properties": { "maxTime": 50 } },
		"child-1": { "id": "child-1", "name": "Slow", "category": "action" }
	}
}"#;

#[tokio::test]
async fn max_time_fails_overrunning_child() -> Result<(), Error> {
	let mut factory = TreeFactory::new();
	register_node!(factory, "Slow", || SucceedAfter::new(1000));
	let tree = factory.create_from_text(TIMED)?;
	let blackboard = Blackboard::shared();

	assert_eq!(tree.tick(&blackboard).await, Status::Running);
	tokio::time::sleep(Duration::from_millis(80)).await;
	// the child still runs, but the time limit overrides its status
	assert_eq!(tree.tick(&blackboard).await, Status::Failure);
	assert!(blackboard.open_node_ids(tree.id()).is_empty());
	Ok(())
}

#[tokio::test]
async fn max_time_passes_fast_child_through() -> Result<(), Error> {
	let mut factory = TreeFactory::new();
	register_node!(factory, "Slow", || SucceedAfter::new(1));
	let tree = factory.create_from_text(TIMED)?;
	let blackboard = Blackboard::shared();

	assert_eq!(tree.tick(&blackboard).await, Status::Running);
	assert_eq!(tree.tick(&blackboard).await, Status::Success);
	Ok(())
}

const MISSING_MAX_TIME: &str = r#"{
	"title": "max time missing property",
	"root": "time-1",
	"nodes": {
		"time-1": { "id": "time-1", "name": "MaxTime", "category": "decorator", "child": "child-1" },
		"child-1": { "id": "child-1", "name": "Succeeder", "category": "action" }
	}
}"#;

#[tokio::test]
async fn max_time_requires_property() {
	let factory = TreeFactory::new();
	assert!(factory.create_from_text(MISSING_MAX_TIME).is_err());
}
