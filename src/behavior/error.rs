// Copyright © 2025 Stephan Kunz
//! `ticktree` behavior errors

// region		--- modules
use crate::ConstString;
// endregion:	--- modules

/// Behavior errors.
#[non_exhaustive]
pub enum Error {
	/// A user supplied function or subscriber client reported a failure
	External {
		/// The textual error message.
		txt: ConstString,
	},
	/// A required property is missing in the node configuration
	MissingProperty {
		/// Affected behavior
		behavior: ConstString,
		/// Name of the property
		property: ConstString,
	},
	/// A property value is outside the allowed range
	InvalidProperty {
		/// Affected behavior
		behavior: ConstString,
		/// Name of the property
		property: ConstString,
		/// What is wrong with the value
		reason: ConstString,
	},
	/// A node descriptor names an unknown category
	UnknownCategory {
		/// The category found
		category: ConstString,
	},
}

/// Only default implementation needed.
impl core::error::Error for Error {}

impl core::fmt::Debug for Error {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		match self {
			Self::External { txt } => write!(f, "External({txt})"),
			Self::MissingProperty { behavior, property } => {
				write!(f, "MissingProperty(behavior: {behavior}, property: {property})")
			}
			Self::InvalidProperty {
				behavior,
				property,
				reason,
			} => write!(
				f,
				"InvalidProperty(behavior: {behavior}, property: {property}, reason: {reason})"
			),
			Self::UnknownCategory { category } => write!(f, "UnknownCategory({category})"),
		}
	}
}

impl core::fmt::Display for Error {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		match self {
			Self::External { txt } => write!(f, "an external function failed: {txt}"),
			Self::MissingProperty { behavior, property } => {
				write!(f, "property {property} in behavior {behavior} is an obligatory parameter")
			}
			Self::InvalidProperty {
				behavior,
				property,
				reason,
			} => write!(f, "property {property} in behavior {behavior} is invalid: {reason}"),
			Self::UnknownCategory { category } => write!(f, "the node category {category} is not known"),
		}
	}
}
