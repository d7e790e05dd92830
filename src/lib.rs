//! Sleepbar - sleep for a number of seconds behind a depleting progress bar
//!
//! The timer owns one state record driven by two clocks: a 30 Hz animation
//! tick that decays the bar and a one-shot deadline that ends the run. Any
//! key press ends it early.

pub mod config;
pub mod state;
pub mod tasks;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use state::TimerState;
pub use tasks::{run_timer, Outcome};
pub use utils::signals::shutdown_signal;
