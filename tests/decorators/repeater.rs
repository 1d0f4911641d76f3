// Copyright © 2025 Stephan Kunz

//! Tests the [`Repeater`] decorator

use crate::utilities::Probe;
use core::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use ticktree::prelude::*;

const THREE_TIMES: &str = r#"{
	"title": "repeater",
	"root": "rep-1",
	"nodes": {
		"rep-1": { "id": "rep-1", "name": "Repeater", "category": "decorator", "child": "child-1", "properties": { "maxLoop": 3 } },
		"child-1": { "id": "child-1", "name": "Child", "category": "action" }
	}
}"#;

#[tokio::test]
async fn repeater_repeats_within_one_tick() -> Result<(), Error> {
	let mut factory = TreeFactory::new();
	let ticks = Arc::new(AtomicUsize::new(0));
	{
		let ticks = ticks.clone();
		register_node!(factory, "Child", move || Probe::new(Status::Success, ticks.clone()));
	}
	let tree = factory.create_from_text(THREE_TIMES)?;
	let blackboard = Blackboard::shared();

	// three internal iterations within a single tick
	assert_eq!(tree.tick(&blackboard).await, Status::Success);
	assert_eq!(ticks.load(Ordering::SeqCst), 3);
	assert_eq!(blackboard.get_node::<i64>("i", tree.id(), "rep-1"), Some(3));
	Ok(())
}

#[tokio::test]
async fn repeater_stops_at_running_child() -> Result<(), Error> {
	let mut factory = TreeFactory::new();
	let ticks = Arc::new(AtomicUsize::new(0));
	{
		let ticks = ticks.clone();
		register_node!(factory, "Child", move || Probe::new(Status::Running, ticks.clone()));
	}
	let tree = factory.create_from_text(THREE_TIMES)?;
	let blackboard = Blackboard::shared();

	assert_eq!(tree.tick(&blackboard).await, Status::Running);
	assert_eq!(ticks.load(Ordering::SeqCst), 1);
	assert_eq!(blackboard.get_node::<i64>("i", tree.id(), "rep-1"), Some(0));
	Ok(())
}

const UNBOUNDED: &str = r#"{
	"title": "unbounded repeater",
	"root": "rep-1",
	"nodes": {
		"rep-1": { "id": "rep-1", "name": "Repeater", "category": "decorator", "child": "child-1", "properties": { "maxLoop": -1 } },
		"child-1": { "id": "child-1", "name": "Child", "category": "action" }
	}
}"#;

#[tokio::test]
async fn unbounded_repeater_yields_between_ticks() -> Result<(), Error> {
	let mut factory = TreeFactory::new();
	let ticks = Arc::new(AtomicUsize::new(0));
	{
		let ticks = ticks.clone();
		register_node!(factory, "Child", move || Probe::new(Status::Success, ticks.clone()));
	}
	let tree = factory.create_from_text(UNBOUNDED)?;
	let blackboard = Blackboard::shared();

	// the unbounded repeater must not starve the tick, it yields after a
	// bounded iteration slice and resumes on the next tick
	assert_eq!(tree.tick(&blackboard).await, Status::Running);
	let after_first = ticks.load(Ordering::SeqCst);
	assert!(after_first > 0);
	assert_eq!(
		blackboard.get_node::<i64>("i", tree.id(), "rep-1"),
		Some(after_first as i64)
	);

	assert_eq!(tree.tick(&blackboard).await, Status::Running);
	assert_eq!(ticks.load(Ordering::SeqCst), after_first * 2);
	Ok(())
}

const MISSING_MAX_LOOP: &str = r#"{
	"title": "repeater missing maxLoop",
	"root": "rep-1",
	"nodes": {
		"rep-1": { "id": "rep-1", "name": "Repeater", "category": "decorator", "child": "child-1" },
		"child-1": { "id": "child-1", "name": "Succeeder", "category": "action" }
	}
}"#;

#[tokio::test]
async fn repeater_requires_max_loop() {
	let factory = TreeFactory::new();
	assert!(factory.create_from_text(MISSING_MAX_LOOP).is_err());
}
