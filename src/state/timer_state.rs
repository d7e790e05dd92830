//! Timer state structure and transitions

use std::time::Duration;

use crossterm::event::{KeyEvent, KeyEventKind};
use tracing::debug;

/// Animation frames per second
pub const FPS: u32 = 30;
/// Columns of padding on each side of the bar
pub const PADDING: u16 = 2;
/// Upper bound on the rendered bar width
pub const MAX_WIDTH: u16 = 80;
/// Bar width used until the terminal size is known
pub const DEFAULT_WIDTH: u16 = 40;

/// Interval between two animation ticks
pub fn frame_interval() -> Duration {
    Duration::from_secs(1) / FPS
}

/// Events fed into the timer, one at a time
#[derive(Debug, Clone)]
pub enum TimerEvent {
    /// Periodic frame tick driving the visual decay
    AnimationTick,
    /// The requested duration has elapsed
    Expired,
    /// A key was pressed
    Key(KeyEvent),
    /// The terminal was resized to the given number of columns
    Resize(u16),
    /// A termination signal was received
    Signal(i32),
}

/// What the event loop should do after handling an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

/// Timer state: one fraction decaying from 1.0 to 0.0 over the requested duration
#[derive(Debug, Clone)]
pub struct TimerState {
    total_duration: Duration,
    remaining_fraction: f64,
    render_width: u16,
}

impl TimerState {
    /// Create a full timer for the given duration
    pub fn new(total_duration: Duration) -> Self {
        Self {
            total_duration,
            remaining_fraction: 1.0,
            render_width: DEFAULT_WIDTH,
        }
    }

    /// Create a timer and size the bar for a terminal of `columns` width
    pub fn with_columns(total_duration: Duration, columns: u16) -> Self {
        let mut state = Self::new(total_duration);
        state.resize(columns);
        state
    }

    pub fn total_duration(&self) -> Duration {
        self.total_duration
    }

    pub fn remaining_fraction(&self) -> f64 {
        self.remaining_fraction
    }

    pub fn render_width(&self) -> u16 {
        self.render_width
    }

    pub fn is_running(&self) -> bool {
        self.remaining_fraction > 0.0
    }

    pub fn is_done(&self) -> bool {
        !self.is_running()
    }

    /// Amount removed from the fraction on every animation tick.
    ///
    /// Durations shorter than one frame deplete the bar in a single tick.
    pub fn step(&self) -> f64 {
        let frames = f64::from(FPS) * self.total_duration.as_secs_f64();
        if frames <= 1.0 {
            1.0
        } else {
            1.0 / frames
        }
    }

    /// Decay the fraction by one frame. Returns true while more ticks are wanted.
    pub fn on_animation_tick(&mut self) -> bool {
        if self.is_done() {
            return false;
        }
        self.remaining_fraction = (self.remaining_fraction - self.step()).max(0.0);
        if self.is_done() {
            debug!("Animation reached zero before the deadline");
        }
        self.is_running()
    }

    /// Force the timer to its terminal state
    pub fn expire(&mut self) {
        self.remaining_fraction = 0.0;
    }

    /// Recompute the bar width for a terminal of `columns` width
    pub fn resize(&mut self, columns: u16) {
        self.render_width = columns.saturating_sub(PADDING * 2 + 4).min(MAX_WIDTH);
    }

    /// Apply one event and decide whether the loop keeps running
    pub fn handle(&mut self, event: &TimerEvent) -> Control {
        match event {
            TimerEvent::AnimationTick => {
                self.on_animation_tick();
                Control::Continue
            }
            TimerEvent::Expired => {
                self.expire();
                Control::Quit
            }
            TimerEvent::Key(key) if key.kind == KeyEventKind::Press => Control::Quit,
            TimerEvent::Key(_) => Control::Continue,
            TimerEvent::Resize(columns) => {
                self.resize(*columns);
                Control::Continue
            }
            TimerEvent::Signal(_) => Control::Quit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEventState, KeyModifiers};

    #[test]
    fn starts_full_and_running() {
        let state = TimerState::new(Duration::from_secs(3));
        assert_eq!(state.remaining_fraction(), 1.0);
        assert!(state.is_running());
        assert_eq!(state.render_width(), DEFAULT_WIDTH);
    }

    #[test]
    fn decays_monotonically_and_never_negative() {
        let mut state = TimerState::new(Duration::from_secs(2));
        let mut previous = state.remaining_fraction();
        let mut ticks = 0;
        while state.on_animation_tick() {
            assert!(state.remaining_fraction() <= previous);
            assert!(state.remaining_fraction() >= 0.0);
            previous = state.remaining_fraction();
            ticks += 1;
            assert!(ticks < 1000, "animation never finished");
        }
        assert_eq!(state.remaining_fraction(), 0.0);
        // 2 seconds at 30 fps, give or take one frame of rounding
        assert!((59..=61).contains(&(ticks + 1)));
    }

    #[test]
    fn no_decay_after_done() {
        let mut state = TimerState::new(Duration::from_secs(1));
        state.expire();
        assert!(!state.on_animation_tick());
        assert_eq!(state.remaining_fraction(), 0.0);
    }

    #[test]
    fn zero_duration_depletes_in_one_frame() {
        let mut state = TimerState::new(Duration::ZERO);
        assert_eq!(state.step(), 1.0);
        assert!(!state.on_animation_tick());
        assert!(state.is_done());
    }

    #[test]
    fn expiration_forces_done_and_quits() {
        let mut state = TimerState::new(Duration::from_secs(60));
        state.on_animation_tick();
        assert_eq!(state.handle(&TimerEvent::Expired), Control::Quit);
        assert_eq!(state.remaining_fraction(), 0.0);
    }

    #[test]
    fn key_press_quits_without_touching_fraction() {
        let mut state = TimerState::new(Duration::from_secs(60));
        let key = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        assert_eq!(state.handle(&TimerEvent::Key(key)), Control::Quit);
        assert_eq!(state.remaining_fraction(), 1.0);
    }

    #[test]
    fn key_release_is_ignored() {
        let mut state = TimerState::new(Duration::from_secs(60));
        let key = KeyEvent::new_with_kind_and_state(
            KeyCode::Enter,
            KeyModifiers::NONE,
            KeyEventKind::Release,
            KeyEventState::NONE,
        );
        assert_eq!(state.handle(&TimerEvent::Key(key)), Control::Continue);
    }

    #[test]
    fn resize_clamps_width_and_keeps_fraction() {
        let mut state = TimerState::new(Duration::from_secs(10));
        state.on_animation_tick();
        let fraction = state.remaining_fraction();

        assert_eq!(state.handle(&TimerEvent::Resize(50)), Control::Continue);
        assert_eq!(state.render_width(), 42);

        state.resize(200);
        assert_eq!(state.render_width(), MAX_WIDTH);

        state.resize(3);
        assert_eq!(state.render_width(), 0);

        assert_eq!(state.remaining_fraction(), fraction);
    }

    #[test]
    fn signal_quits() {
        let mut state = TimerState::new(Duration::from_secs(10));
        assert_eq!(state.handle(&TimerEvent::Signal(15)), Control::Quit);
    }
}
