//! Terminal user interface module
//!
//! Widget, frame layout and the raw-mode terminal the frames are painted on.

pub mod progress;
pub mod terminal;
pub mod view;

// Re-export main types
pub use progress::ProgressBar;
pub use terminal::{Renderer, TerminalGuard};
pub use view::render_frame;
