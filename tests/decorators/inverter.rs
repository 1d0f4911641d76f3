// Copyright © 2025 Stephan Kunz

//! Tests the [`Inverter`] decorator

use rstest::rstest;
use ticktree::prelude::*;

fn inverter_over(child_name: &str) -> String {
	format!(
		r#"{{
		"title": "inverter",
		"root": "inv-1",
		"nodes": {{
			"inv-1": {{ "id": "inv-1", "name": "Inverter", "category": "decorator", "child": "child-1" }},
			"child-1": {{ "id": "child-1", "name": "{child_name}", "category": "action" }}
		}}
	}}"#
	)
}

#[rstest]
#[case("Succeeder", Status::Failure)]
#[case("Failer", Status::Success)]
#[case("Runner", Status::Running)]
#[case("Error", Status::Error)]
#[tokio::test]
async fn inverter_flips_terminal_outcomes(
	#[case] child: &str,
	#[case] expected: Status,
) -> Result<(), Error> {
	let factory = TreeFactory::new();
	let tree = factory.create_from_text(&inverter_over(child))?;
	let blackboard = Blackboard::shared();

	assert_eq!(tree.tick(&blackboard).await, expected);
	Ok(())
}

const WITHOUT_CHILD: &str = r#"{
	"title": "inverter without child",
	"root": "inv-1",
	"nodes": {
		"inv-1": { "id": "inv-1", "name": "Inverter", "category": "decorator" }
	}
}"#;

#[tokio::test]
async fn inverter_without_child_errors() -> Result<(), Error> {
	let factory = TreeFactory::new();
	let tree = factory.create_from_text(WITHOUT_CHILD)?;
	let blackboard = Blackboard::shared();

	assert_eq!(tree.tick(&blackboard).await, Status::Error);
	Ok(())
}
