// Copyright © 2025 Stephan Kunz
//! JSON documents describing authored trees and projects.
//!
//! A tree document is an object with `title`, `description`, `root`,
//! `properties` and a `nodes` map from node id to node descriptor. A
//! project document wraps one or more tree documents under `data.trees`.
//! Unknown fields are skipped, so documents written by visual editors load
//! as well.

// region:      --- modules
use crate::behavior::Properties;
use nanoserde::{DeJson, DeJsonErr, DeJsonState, DeJsonTok};
// endregion:   --- modules

// region:      --- helpers
fn unexpected(state: &DeJsonState) -> DeJsonErr {
	DeJsonErr {
		line: state.line,
		col: state.col,
		msg: nanoserde::DeJsonErrReason::UnexpectedToken(state.tok.clone(), state.strbuf.clone()),
	}
}

/// Skip one JSON value of any shape, including nested objects and arrays.
fn skip_value(state: &mut DeJsonState, input: &mut core::str::Chars) -> Result<(), DeJsonErr> {
	let mut depth = 0_usize;
	loop {
		match state.tok {
			DeJsonTok::CurlyOpen | DeJsonTok::BlockOpen => depth += 1,
			DeJsonTok::CurlyClose | DeJsonTok::BlockClose => {
				if depth == 0 {
					return Err(unexpected(state));
				}
				depth -= 1;
			}
			DeJsonTok::Eof => return Err(unexpected(state)),
			_ => {}
		}
		state.next_tok(input)?;
		if depth == 0 {
			return Ok(());
		}
	}
}

/// Walk the fields of a JSON object, calling `on_field` for every value.
/// `on_field` must consume the value completely.
fn walk_object<F>(state: &mut DeJsonState, input: &mut core::str::Chars, mut on_field: F) -> Result<(), DeJsonErr>
where
	F: FnMut(&str, &mut DeJsonState, &mut core::str::Chars) -> Result<(), DeJsonErr>,
{
	if state.tok != DeJsonTok::CurlyOpen {
		return Err(unexpected(state));
	}
	state.next_tok(input)?;
	while state.tok != DeJsonTok::CurlyClose {
		if state.tok != DeJsonTok::Str {
			return Err(unexpected(state));
		}
		let field = state.strbuf.clone();
		// consume field name and colon
		state.next_tok(input)?;
		if state.tok != DeJsonTok::Colon {
			return Err(unexpected(state));
		}
		state.next_tok(input)?;
		on_field(&field, state, input)?;
		if state.tok == DeJsonTok::Comma {
			state.next_tok(input)?;
		}
	}
	// consume the closing curly brace
	state.next_tok(input)?;
	Ok(())
}
// endregion:   --- helpers

// region:      --- NodeDescriptor
/// One node of an authored tree document.
#[derive(Clone, Debug, Default)]
pub struct NodeDescriptor {
	/// The node id, equal to its key in the `nodes` map.
	pub id: String,
	/// The factory name used to construct the behavior.
	pub name: String,
	/// Display title; names the target tree for subtree references.
	pub title: String,
	/// Optional description.
	pub description: String,
	/// The category: `action`, `condition`, `composite`, `decorator` or `tree`.
	pub category: String,
	/// Authoring time constants.
	pub properties: Properties,
	/// Ordered child ids, present for composites.
	pub children: Vec<String>,
	/// The single child id, present for decorators.
	pub child: Option<String>,
}

impl DeJson for NodeDescriptor {
	fn de_json(state: &mut DeJsonState, input: &mut core::str::Chars) -> Result<Self, DeJsonErr> {
		let mut node = Self::default();
		walk_object(state, input, |field, state, input| {
			match field {
				"id" => node.id = String::de_json(state, input)?,
				"name" => node.name = String::de_json(state, input)?,
				"title" => node.title = String::de_json(state, input)?,
				"description" => node.description = String::de_json(state, input)?,
				"category" => node.category = String::de_json(state, input)?,
				"properties" => node.properties = Properties::de_json(state, input)?,
				"children" => {
					if state.tok == DeJsonTok::Null {
						state.next_tok(input)?;
					} else {
						node.children = Vec::<String>::de_json(state, input)?;
					}
				}
				"child" => {
					if state.tok == DeJsonTok::Null {
						state.next_tok(input)?;
					} else {
						node.child = Some(String::de_json(state, input)?);
					}
				}
				_ => skip_value(state, input)?,
			}
			Ok(())
		})?;
		Ok(node)
	}
}
// endregion:   --- NodeDescriptor

// region:      --- TreeDescriptor
/// An authored tree document.
#[derive(Clone, Debug, Default)]
pub struct TreeDescriptor {
	/// Optional authoring id. Runtime identity is a fresh UUID per load.
	pub id: String,
	/// The tree title. Subtree references resolve against it.
	pub title: String,
	/// Optional description.
	pub description: String,
	/// The id of the root node.
	pub root: String,
	/// Authoring time constants of the tree.
	pub properties: Properties,
	/// The nodes keyed by id, in authoring order.
	pub nodes: Vec<(String, NodeDescriptor)>,
}

impl DeJson for TreeDescriptor {
	fn de_json(state: &mut DeJsonState, input: &mut core::str::Chars) -> Result<Self, DeJsonErr> {
		let mut tree = Self::default();
		walk_object(state, input, |field, state, input| {
			match field {
				"id" => tree.id = String::de_json(state, input)?,
				"title" => tree.title = String::de_json(state, input)?,
				"description" => tree.description = String::de_json(state, input)?,
				"root" => tree.root = String::de_json(state, input)?,
				"properties" => tree.properties = Properties::de_json(state, input)?,
				"nodes" => {
					walk_object(state, input, |id, state, input| {
						let node = NodeDescriptor::de_json(state, input)?;
						tree.nodes.push((id.into(), node));
						Ok(())
					})?;
				}
				_ => skip_value(state, input)?,
			}
			Ok(())
		})?;
		Ok(tree)
	}
}
// endregion:   --- TreeDescriptor

// region:      --- ProjectDescriptor
/// A project document wrapping several tree documents under `data.trees`.
#[derive(Clone, Debug, Default)]
pub struct ProjectDescriptor {
	/// The tree documents in authoring order.
	pub trees: Vec<TreeDescriptor>,
}

impl DeJson for ProjectDescriptor {
	fn de_json(state: &mut DeJsonState, input: &mut core::str::Chars) -> Result<Self, DeJsonErr> {
		let mut project = Self::default();
		walk_object(state, input, |field, state, input| {
			match field {
				"data" => {
					walk_object(state, input, |inner, state, input| {
						match inner {
							"trees" => project.trees = Vec::<TreeDescriptor>::de_json(state, input)?,
							_ => skip_value(state, input)?,
						}
						Ok(())
					})?;
				}
				_ => skip_value(state, input)?,
			}
			Ok(())
		})?;
		Ok(project)
	}
}
// endregion:   --- ProjectDescriptor
