//! Signal handling for early termination

use futures::stream::StreamExt;
use signal_hook::consts::{SIGHUP, SIGINT, SIGTERM};
use signal_hook_tokio::Signals;
use tracing::info;

/// Register the termination signals (SIGTERM, SIGINT, SIGHUP)
pub fn termination_signals() -> std::io::Result<Signals> {
    Signals::new([SIGTERM, SIGINT, SIGHUP])
}

/// Wait for the first termination signal and return its number
pub async fn shutdown_signal(mut signals: Signals) -> i32 {
    match signals.next().await {
        Some(signal) => {
            info!("Received signal: {}", signal);
            signal
        }
        // The stream only ends once the handle is closed; treat it as a plain termination
        None => SIGTERM,
    }
}

/// Conventional exit status for a process ended by `signal`
pub fn exit_code_for(signal: i32) -> i32 {
    128 + signal
}
