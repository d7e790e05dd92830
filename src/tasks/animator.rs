//! Timer event loop
//!
//! Serializes the animation tick, the expiration deadline, terminal input and
//! termination signals into one `select!` loop that owns the timer state.

use std::{future::Future, io, io::Write};

use anyhow::Context;
use crossterm::event::Event;
use futures::stream::{Stream, StreamExt};
use tokio::time::{interval_at, sleep, Instant, MissedTickBehavior};
use tracing::{debug, info, trace, warn};

use crate::{
    state::{timer_state::frame_interval, Control, TimerEvent, TimerState},
    ui::{render_frame, ProgressBar, Renderer},
};

/// How a timer run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The full duration elapsed
    Expired,
    /// A key was pressed before the deadline
    Cancelled,
    /// A termination signal arrived
    Interrupted(i32),
}

/// Map a terminal event onto a timer event; unrelated events are dropped
fn timer_event(event: Event) -> Option<TimerEvent> {
    match event {
        Event::Key(key) => Some(TimerEvent::Key(key)),
        Event::Resize(columns, _) => Some(TimerEvent::Resize(columns)),
        _ => None,
    }
}

/// Run the timer until it expires, a key is pressed or `shutdown` resolves.
///
/// The deadline wins ties against the animation tick; input and shutdown win
/// against both. The frame is cleared before returning successfully.
pub async fn run_timer<S, W, F>(
    state: &mut TimerState,
    mut input: S,
    renderer: &mut Renderer<W>,
    shutdown: F,
) -> anyhow::Result<Outcome>
where
    S: Stream<Item = io::Result<Event>> + Unpin,
    W: Write,
    F: Future<Output = i32>,
{
    info!(
        "Starting timer for {}s (width={})",
        state.total_duration().as_secs(),
        state.render_width()
    );

    let mut bar = ProgressBar::new(state.render_width());
    let frame = frame_interval();

    let deadline = sleep(state.total_duration());
    tokio::pin!(deadline);
    tokio::pin!(shutdown);

    let mut ticker = interval_at(Instant::now() + frame, frame);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let mut input_open = true;

    renderer
        .draw(&render_frame(state, &mut bar))
        .context("Failed to draw frame")?;

    let outcome = loop {
        let event = tokio::select! {
            biased;

            signal = &mut shutdown => TimerEvent::Signal(signal),

            next = input.next(), if input_open => match next {
                Some(Ok(event)) => match timer_event(event) {
                    Some(event) => event,
                    None => continue,
                },
                Some(Err(e)) => return Err(e).context("Failed to read terminal input"),
                None => {
                    warn!("Terminal input closed, waiting for the deadline");
                    input_open = false;
                    continue;
                }
            },

            () = &mut deadline => TimerEvent::Expired,

            _ = ticker.tick(), if state.is_running() => TimerEvent::AnimationTick,
        };

        trace!("Timer event: {:?}", event);
        let control = state.handle(&event);

        renderer
            .draw(&render_frame(state, &mut bar))
            .context("Failed to draw frame")?;

        if control == Control::Quit {
            break match event {
                TimerEvent::Signal(signal) => Outcome::Interrupted(signal),
                TimerEvent::Key(_) => Outcome::Cancelled,
                _ => Outcome::Expired,
            };
        }
    };

    debug!(
        "Timer finished: {:?}, remaining fraction {:.3}",
        outcome,
        state.remaining_fraction()
    );
    renderer.clear().context("Failed to clear frame")?;
    Ok(outcome)
}
