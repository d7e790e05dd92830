//! Event loop module
//!
//! This module contains the loop that drives the timer to completion.

pub mod animator;

// Re-export main functions
pub use animator::{run_timer, Outcome};
