// Copyright © 2025 Stephan Kunz

//! [`ticktree`](crate) errors.
//!
//! Errors only surface from loading; ticking a tree never fails, runtime
//! faults travel upward as [`Status::Error`](crate::behavior::Status).

// region		--- modules
use thiserror::Error;
// endregion:	--- modules

// region:		--- types
/// Result type definition for behavior trees.
pub type TickTreeResult<Output = crate::behavior::Status> = Result<Output, self::Error>;
// endregion:   --- types

// region:		--- Error
/// `ticktree` error type
#[derive(Error, Debug)]
pub enum Error {
	/// Pass through from `crate::behavior::BehaviorError`
	#[error("{0}")]
	Behavior(#[from] crate::behavior::BehaviorError),
	/// Pass through from `crate::factory::FactoryError`
	#[error("{0}")]
	Factory(#[from] crate::factory::FactoryError),
	/// Pass through from `nanoserde`
	#[error("{0}")]
	Json(#[from] nanoserde::DeJsonErr),
}
// region:		--- Error
