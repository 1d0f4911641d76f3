// Copyright © 2025 Stephan Kunz

mod mem_priority;
mod mem_sequence;
mod priority;
mod sequence;
