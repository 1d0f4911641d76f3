// Copyright © 2025 Stephan Kunz
//! Per-node authoring data: identity, category and frozen properties.

// region:      --- modules
use crate::ConstString;
use crate::behavior::Category;
use nanoserde::{DeJson, DeJsonErr, DeJsonState, DeJsonTok};
use std::collections::HashMap;
// endregion:   --- modules

// region:      --- PropertyValue
/// A primitive JSON value attached to a node at authoring time.
#[derive(Clone, Debug, PartialEq)]
pub enum PropertyValue {
	/// JSON `null`.
	Null,
	/// A boolean.
	Bool(bool),
	/// Any JSON number.
	Number(f64),
	/// A string.
	Text(String),
}

impl PropertyValue {
	/// The value as boolean, if it is one.
	#[must_use]
	pub const fn as_bool(&self) -> Option<bool> {
		match self {
			Self::Bool(value) => Some(*value),
			_ => None,
		}
	}

	/// The value as float, if it is a number.
	#[must_use]
	pub const fn as_f64(&self) -> Option<f64> {
		match self {
			Self::Number(value) => Some(*value),
			_ => None,
		}
	}

	/// The value as signed integer, if it is a whole number.
	#[must_use]
	pub fn as_i64(&self) -> Option<i64> {
		match self {
			Self::Number(value) if value.fract() == 0.0 => Some(*value as i64),
			_ => None,
		}
	}

	/// The value as unsigned integer, if it is a whole non-negative number.
	#[must_use]
	pub fn as_u64(&self) -> Option<u64> {
		match self {
			Self::Number(value) if value.fract() == 0.0 && *value >= 0.0 => Some(*value as u64),
			_ => None,
		}
	}

	/// The value as string slice, if it is a string.
	#[must_use]
	pub fn as_str(&self) -> Option<&str> {
		match self {
			Self::Text(value) => Some(value),
			_ => None,
		}
	}
}

impl DeJson for PropertyValue {
	#[allow(clippy::cast_precision_loss)]
	fn de_json(state: &mut DeJsonState, input: &mut core::str::Chars) -> Result<Self, DeJsonErr> {
		let value = match &state.tok {
			DeJsonTok::Null => Self::Null,
			DeJsonTok::Bool(b) => Self::Bool(*b),
			DeJsonTok::U64(u) => Self::Number(*u as f64),
			DeJsonTok::I64(i) => Self::Number(*i as f64),
			DeJsonTok::F64(f) => Self::Number(*f),
			DeJsonTok::Str => Self::Text(state.strbuf.clone()),
			_ => {
				return Err(DeJsonErr {
					line: state.line,
					col: state.col,
					msg: nanoserde::DeJsonErrReason::UnexpectedToken(state.tok.clone(), state.strbuf.clone()),
				});
			}
		};
		state.next_tok(input)?;
		Ok(value)
	}
}
// endregion:   --- PropertyValue

// region:      --- Properties
/// The frozen `key → value` map of authoring time constants of a node.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Properties(HashMap<String, PropertyValue>);

impl Properties {
	/// Look up a raw property value.
	#[must_use]
	pub fn get(&self, key: &str) -> Option<&PropertyValue> {
		self.0.get(key)
	}

	/// Look up a boolean property.
	#[must_use]
	pub fn get_bool(&self, key: &str) -> Option<bool> {
		self.get(key).and_then(PropertyValue::as_bool)
	}

	/// Look up a float property.
	#[must_use]
	pub fn get_f64(&self, key: &str) -> Option<f64> {
		self.get(key).and_then(PropertyValue::as_f64)
	}

	/// Look up a signed integer property.
	#[must_use]
	pub fn get_i64(&self, key: &str) -> Option<i64> {
		self.get(key).and_then(PropertyValue::as_i64)
	}

	/// Look up an unsigned integer property.
	#[must_use]
	pub fn get_u64(&self, key: &str) -> Option<u64> {
		self.get(key).and_then(PropertyValue::as_u64)
	}

	/// Look up a string property.
	#[must_use]
	pub fn get_str(&self, key: &str) -> Option<&str> {
		self.get(key).and_then(PropertyValue::as_str)
	}

	/// `true` if there are no properties.
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Iterate over all properties.
	pub fn iter(&self) -> impl Iterator<Item = (&String, &PropertyValue)> {
		self.0.iter()
	}
}

impl DeJson for Properties {
	fn de_json(state: &mut DeJsonState, input: &mut core::str::Chars) -> Result<Self, DeJsonErr> {
		let mut map = HashMap::new();
		if state.tok != DeJsonTok::CurlyOpen {
			return Err(DeJsonErr {
				line: state.line,
				col: state.col,
				msg: nanoserde::DeJsonErrReason::UnexpectedToken(state.tok.clone(), state.strbuf.clone()),
			});
		}
		state.next_tok(input)?;
		while state.tok != DeJsonTok::CurlyClose {
			if state.tok != DeJsonTok::Str {
				return Err(DeJsonErr {
					line: state.line,
					col: state.col,
					msg: nanoserde::DeJsonErrReason::UnexpectedToken(state.tok.clone(), state.strbuf.clone()),
				});
			}
			let key = state.strbuf.clone();
			// consume key and colon
			state.next_tok(input)?;
			if state.tok != DeJsonTok::Colon {
				return Err(DeJsonErr {
					line: state.line,
					col: state.col,
					msg: nanoserde::DeJsonErrReason::UnexpectedToken(state.tok.clone(), state.strbuf.clone()),
				});
			}
			state.next_tok(input)?;
			let value = PropertyValue::de_json(state, input)?;
			map.insert(key, value);
			if state.tok == DeJsonTok::Comma {
				state.next_tok(input)?;
			}
		}
		// consume the closing curly brace
		state.next_tok(input)?;
		Ok(Self(map))
	}
}

impl FromIterator<(String, PropertyValue)> for Properties {
	fn from_iter<T: IntoIterator<Item = (String, PropertyValue)>>(iter: T) -> Self {
		Self(iter.into_iter().collect())
	}
}
// endregion:   --- Properties

// region:      --- NodeData
/// The authoring data of a node, fixed once a tree is loaded.
///
/// Everything mutable at runtime lives in the blackboard under the
/// per-(tree, node) scope derived from [`NodeData::tree_id`] and
/// [`NodeData::id`], so one loaded tree can serve any number of agents.
pub struct NodeData {
	/// Arena index of the node within its tree.
	index: u16,
	/// Node ID, unique within the tree. Used as blackboard node scope.
	id: ConstString,
	/// Node name, the key it was created under in the factory registry.
	name: ConstString,
	/// Display title. For subtree references it names the target tree.
	title: ConstString,
	/// Optional description.
	description: ConstString,
	/// The node category.
	category: Category,
	/// Frozen authoring time constants.
	properties: Properties,
	/// Arena index of the parent, `None` for the root.
	parent: Option<u16>,
	/// ID of the owning tree. Used as blackboard tree scope.
	tree_id: ConstString,
}

impl NodeData {
	#[allow(clippy::too_many_arguments)]
	pub(crate) fn new(
		index: u16,
		id: &str,
		name: &str,
		title: &str,
		description: &str,
		category: Category,
		properties: Properties,
		parent: Option<u16>,
		tree_id: ConstString,
	) -> Self {
		Self {
			index,
			id: id.into(),
			name: name.into(),
			title: title.into(),
			description: description.into(),
			category,
			properties,
			parent,
			tree_id,
		}
	}

	/// The arena index within the owning tree.
	#[must_use]
	pub const fn index(&self) -> u16 {
		self.index
	}

	/// The tree-unique node ID.
	#[must_use]
	pub const fn id(&self) -> &ConstString {
		&self.id
	}

	/// The factory name the node was created under.
	#[must_use]
	pub const fn name(&self) -> &ConstString {
		&self.name
	}

	/// The display title.
	#[must_use]
	pub const fn title(&self) -> &ConstString {
		&self.title
	}

	/// The description.
	#[must_use]
	pub const fn description(&self) -> &ConstString {
		&self.description
	}

	/// The node category.
	#[must_use]
	pub const fn category(&self) -> Category {
		self.category
	}

	/// The frozen properties.
	#[must_use]
	pub const fn properties(&self) -> &Properties {
		&self.properties
	}

	/// The parent's arena index, `None` for the root.
	#[must_use]
	pub const fn parent(&self) -> Option<u16> {
		self.parent
	}

	/// The ID of the owning tree.
	#[must_use]
	pub const fn tree_id(&self) -> &ConstString {
		&self.tree_id
	}
}
// endregion:   --- NodeData
