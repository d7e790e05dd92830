//! Sleepbar - a terminal sleep timer with a depleting progress bar
//!
//! This is the main entry point for the sleepbar application.

use std::io;

use anyhow::Context;
use crossterm::event::EventStream;
use tracing::info;
use tracing_subscriber::EnvFilter;

use sleepbar::{
    config::{Config, ParseOutcome, USAGE},
    run_timer,
    state::TimerState,
    ui::{terminal::columns, Renderer, TerminalGuard},
    utils::{exit_code_for, shutdown_signal, termination_signals},
    Outcome,
};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let config = match Config::parse_args() {
        ParseOutcome::Run(config) => config,
        ParseOutcome::Info(e) => e.exit(),
        ParseOutcome::Usage(_) => {
            println!("{}", USAGE);
            std::process::exit(1);
        }
    };

    // Logs go to stderr so they never interleave with the frame on stdout
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("sleepbar=warn")),
        )
        .with_writer(io::stderr)
        .init();

    match run(config).await {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            tracing::error!("{:#}", e);
            println!("Unexpected Error!!: {:#}", e);
            std::process::exit(1);
        }
    }
}

/// Run the timer on the real terminal and return the process exit code
async fn run(config: Config) -> anyhow::Result<i32> {
    let signals = termination_signals().context("Failed to register signal handlers")?;
    let signals_handle = signals.handle();

    let mut state = TimerState::new(config.duration());
    if let Some(cols) = columns() {
        state.resize(cols);
    }

    let outcome = {
        let _guard = TerminalGuard::new()?;
        let mut renderer = Renderer::new(io::stdout());
        run_timer(
            &mut state,
            EventStream::new(),
            &mut renderer,
            shutdown_signal(signals),
        )
        .await?
    };
    signals_handle.close();

    info!("Timer ended: {:?}", outcome);
    Ok(match outcome {
        Outcome::Expired | Outcome::Cancelled => 0,
        Outcome::Interrupted(signal) => exit_code_for(signal),
    })
}
