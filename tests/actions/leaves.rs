// Copyright © 2025 Stephan Kunz

//! Tests the built-in leaf behaviors

use core::sync::atomic::{AtomicUsize, Ordering};
use core::time::Duration;
use rstest::rstest;
use std::sync::Arc;
use ticktree::prelude::*;

fn single_leaf(name: &str) -> String {
	format!(
		r#"{{
		"title": "single leaf",
		"root": "leaf-1",
		"nodes": {{
			"leaf-1": {{ "id": "leaf-1", "name": "{name}", "category": "action" }}
		}}
	}}"#
	)
}

#[rstest]
#[case("Succeeder", Status::Success)]
#[case("Failer", Status::Failure)]
#[case("Runner", Status::Running)]
#[case("Error", Status::Error)]
#[tokio::test]
async fn constant_leaves(#[case] name: &str, #[case] expected: Status) -> Result<(), Error> {
	let factory = TreeFactory::new();
	let tree = factory.create_from_text(&single_leaf(name))?;
	let blackboard = Blackboard::shared();

	assert_eq!(tree.tick(&blackboard).await, expected);
	Ok(())
}

const IMMEDIATE_WAIT: &str = r#"{
	"title": "wait without delay",
	"root": "wait-1",
	"nodes": {
		"wait-1": { "id": "wait-1", "name": "Wait", "category": "action", "properties": { "milliseconds": 0 } }
	}
}"#;

#[tokio::test]
async fn wait_without_delay_succeeds_immediately() -> Result<(), Error> {
	let factory = TreeFactory::new();
	let tree = factory.create_from_text(IMMEDIATE_WAIT)?;
	let blackboard = Blackboard::shared();

	assert_eq!(tree.tick(&blackboard).await, Status::Success);
	Ok(())
}

const DELAYED_WAIT: &str = r#"{
	"title": "wait with deadline",
	"root": "wait-1",
	"nodes": {
		"wait-1": { "id": "wait-1", "name": "Wait", "category": "action", "properties": { "milliseconds": 50 } }
	}
}"#;

#[tokio::test]
async fn wait_runs_until_deadline() -> Result<(), Error> {
	let factory = TreeFactory::new();
	let tree = factory.create_from_text(DELAYED_WAIT)?;
	let blackboard = Blackboard::shared();

	// before the deadline the node keeps running and stays open
	assert_eq!(tree.tick(&blackboard).await, Status::Running);
	let open: Vec<ConstString> = blackboard.open_node_ids(tree.id());
	assert_eq!(open.len(), 1);

	tokio::time::sleep(Duration::from_millis(80)).await;
	assert_eq!(tree.tick(&blackboard).await, Status::Success);
	assert!(blackboard.open_node_ids(tree.id()).is_empty());
	Ok(())
}

const LOGGING: &str = r#"{
	"title": "log",
	"root": "log-1",
	"nodes": {
		"log-1": { "id": "log-1", "name": "Log", "category": "action", "properties": { "info": "tick happened" } }
	}
}"#;

#[tokio::test]
async fn log_succeeds() -> Result<(), Error> {
	let factory = TreeFactory::new();
	let tree = factory.create_from_text(LOGGING)?;
	let blackboard = Blackboard::shared();

	assert_eq!(tree.tick(&blackboard).await, Status::Success);
	Ok(())
}

const CLOSURE_LEAVES: &str = r#"{
	"title": "closure leaves",
	"root": "seq-1",
	"nodes": {
		"seq-1": { "id": "seq-1", "name": "Sequence", "category": "composite", "children": ["check-1", "work-1"] },
		"check-1": { "id": "check-1", "name": "Check", "category": "condition" },
		"work-1": { "id": "work-1", "name": "Work", "category": "action" }
	}
}"#;

#[tokio::test]
async fn closure_backed_leaves() -> Result<(), Error> {
	let mut factory = TreeFactory::new();
	let worked = Arc::new(AtomicUsize::new(0));
	register_node!(factory, "Check", || FnCondition::new(|_ctx, _tick| true));
	{
		let worked = worked.clone();
		register_node!(factory, "Work", move || {
			let worked = worked.clone();
			FnAction::new(move |_ctx, _tick| {
				worked.fetch_add(1, Ordering::SeqCst);
				Status::Success
			})
		});
	}
	let tree = factory.create_from_text(CLOSURE_LEAVES)?;
	let blackboard = Blackboard::shared();

	assert_eq!(tree.tick(&blackboard).await, Status::Success);
	assert_eq!(worked.load(Ordering::SeqCst), 1);
	Ok(())
}

#[tokio::test]
async fn failing_condition_fails_the_sequence() -> Result<(), Error> {
	let mut factory = TreeFactory::new();
	let worked = Arc::new(AtomicUsize::new(0));
	register_node!(factory, "Check", || FnCondition::new(|_ctx, _tick| false));
	{
		let worked = worked.clone();
		register_node!(factory, "Work", move || {
			let worked = worked.clone();
			FnAction::new(move |_ctx, _tick| {
				worked.fetch_add(1, Ordering::SeqCst);
				Status::Success
			})
		});
	}
	let tree = factory.create_from_text(CLOSURE_LEAVES)?;
	let blackboard = Blackboard::shared();

	assert_eq!(tree.tick(&blackboard).await, Status::Failure);
	assert_eq!(worked.load(Ordering::SeqCst), 0);
	Ok(())
}
