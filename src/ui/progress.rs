//! Progress bar widget
//!
//! Turns a fraction and a column width into a styled bar string.

use crossterm::style::{Color, Stylize};

/// Gradient start for the filled part of the bar (#5A56E0)
pub const GRADIENT_START: (u8, u8, u8) = (0x5A, 0x56, 0xE0);
/// Gradient end for the filled part of the bar (#EE6FF8)
pub const GRADIENT_END: (u8, u8, u8) = (0xEE, 0x6F, 0xF8);
/// Colour of the unfilled part (#606060)
pub const EMPTY_COLOR: Color = Color::Rgb { r: 0x60, g: 0x60, b: 0x60 };

pub const FULL_CHAR: char = '█';
pub const EMPTY_CHAR: char = '░';

/// Gradient progress bar without a percentage label
#[derive(Debug, Clone)]
pub struct ProgressBar {
    width: u16,
    start: (u8, u8, u8),
    end: (u8, u8, u8),
}

impl ProgressBar {
    pub fn new(width: u16) -> Self {
        Self {
            width,
            start: GRADIENT_START,
            end: GRADIENT_END,
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn set_width(&mut self, width: u16) {
        self.width = width;
    }

    /// Number of filled cells for a fraction
    pub fn filled_cells(&self, fraction: f64) -> usize {
        let fraction = fraction.clamp(0.0, 1.0);
        (f64::from(self.width) * fraction).round() as usize
    }

    /// Render the bar for a fraction in [0, 1]
    pub fn view_as(&self, fraction: f64) -> String {
        let width = usize::from(self.width);
        let filled = self.filled_cells(fraction).min(width);

        let mut out = String::with_capacity(width * 24);
        for i in 0..filled {
            let color = self.color_at(i);
            out.push_str(&FULL_CHAR.with(color).to_string());
        }
        if filled < width {
            let empty: String = std::iter::repeat(EMPTY_CHAR).take(width - filled).collect();
            out.push_str(&empty.with(EMPTY_COLOR).to_string());
        }
        out
    }

    /// Gradient colour of cell `i`; the gradient spans the whole bar width
    fn color_at(&self, i: usize) -> Color {
        let t = if self.width <= 1 {
            0.0
        } else {
            i as f64 / f64::from(self.width - 1)
        };
        let lerp = |a: u8, b: u8| (f64::from(a) + (f64::from(b) - f64::from(a)) * t).round() as u8;
        Color::Rgb {
            r: lerp(self.start.0, self.end.0),
            g: lerp(self.start.1, self.end.1),
            b: lerp(self.start.2, self.end.2),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(s: &str, c: char) -> usize {
        s.chars().filter(|&ch| ch == c).count()
    }

    #[test]
    fn full_bar_is_all_filled() {
        let bar = ProgressBar::new(10);
        let out = bar.view_as(1.0);
        assert_eq!(count(&out, FULL_CHAR), 10);
        assert_eq!(count(&out, EMPTY_CHAR), 0);
    }

    #[test]
    fn partial_bar_rounds_filled_cells() {
        let bar = ProgressBar::new(40);
        let out = bar.view_as(0.5);
        assert_eq!(count(&out, FULL_CHAR), 20);
        assert_eq!(count(&out, EMPTY_CHAR), 20);
        assert_eq!(bar.filled_cells(0.51), 20);
        assert_eq!(bar.filled_cells(0.52), 21);
    }

    #[test]
    fn empty_and_out_of_range_fractions() {
        let bar = ProgressBar::new(8);
        assert_eq!(count(&bar.view_as(0.0), EMPTY_CHAR), 8);
        assert_eq!(count(&bar.view_as(-1.0), FULL_CHAR), 0);
        assert_eq!(count(&bar.view_as(2.0), FULL_CHAR), 8);
    }

    #[test]
    fn gradient_runs_between_endpoints() {
        let bar = ProgressBar::new(5);
        assert_eq!(
            bar.color_at(0),
            Color::Rgb { r: 0x5A, g: 0x56, b: 0xE0 }
        );
        assert_eq!(
            bar.color_at(4),
            Color::Rgb { r: 0xEE, g: 0x6F, b: 0xF8 }
        );
    }

    #[test]
    fn zero_width_renders_nothing() {
        let mut bar = ProgressBar::new(12);
        bar.set_width(0);
        assert_eq!(bar.view_as(0.7), "");
    }
}
