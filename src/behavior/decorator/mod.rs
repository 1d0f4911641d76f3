// Copyright © 2025 Stephan Kunz
//! Built-in `Decorator` behaviors of [`ticktree`](crate).

mod inverter;
mod limiter;
mod max_time;
mod repeat_until_failure;
mod repeat_until_success;
mod repeater;

// flatten
pub use inverter::Inverter;
pub use limiter::Limiter;
pub use max_time::MaxTime;
pub use repeat_until_failure::RepeatUntilFailure;
pub use repeat_until_success::RepeatUntilSuccess;
pub use repeater::Repeater;
