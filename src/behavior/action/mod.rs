// Copyright © 2025 Stephan Kunz
//! Built-in `Action` behaviors of [`ticktree`](crate).

mod error_action;
mod failer;
mod fn_action;
mod log;
mod runner;
mod subscriber;
mod succeeder;
mod wait;

// flatten
pub use error_action::ErrorAction;
pub use failer::Failer;
pub use fn_action::{ActionFn, FnAction};
pub use log::Log;
pub use runner::Runner;
pub use subscriber::{Subscriber, SubscriberTopicFn};
pub use succeeder::Succeeder;
pub use wait::Wait;
