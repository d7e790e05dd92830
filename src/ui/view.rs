//! Frame composition

use crossterm::style::{Color, Stylize};

use super::progress::ProgressBar;
use crate::state::{TimerState, PADDING};

pub const HELP_TEXT: &str = "Press any key to exit";
/// Colour of the hint line (#626262)
pub const HELP_COLOR: Color = Color::Rgb { r: 0x62, g: 0x62, b: 0x62 };

/// Build the frame for the current state; empty once the timer is done
pub fn render_frame(state: &TimerState, bar: &mut ProgressBar) -> String {
    if state.is_done() {
        return String::new();
    }
    bar.set_width(state.render_width());

    let pad = " ".repeat(usize::from(PADDING));
    format!(
        "\n{pad}{}\n\n{pad}{}\n",
        bar.view_as(state.remaining_fraction()),
        HELP_TEXT.with(HELP_COLOR),
    )
}
