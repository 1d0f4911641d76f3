// Copyright © 2025 Stephan Kunz

mod inverter;
mod limiter;
mod max_time;
mod repeater;
