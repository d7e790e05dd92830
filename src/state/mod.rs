//! State management module
//!
//! The timer owns a single state record; every event mutates it in turn.

pub mod timer_state;

// Re-export main types
pub use timer_state::{Control, TimerEvent, TimerState, FPS, MAX_WIDTH, PADDING};
