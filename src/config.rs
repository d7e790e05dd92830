//! Configuration and CLI argument handling

use std::time::Duration;

use clap::{error::ErrorKind, Parser};

/// Message printed for any malformed invocation
pub const USAGE: &str = "Usage: sleepbar <seconds>";

/// CLI argument parsing structure
#[derive(Debug, Parser)]
#[command(name = "sleepbar")]
#[command(about = "Sleep for a number of seconds while a progress bar runs down")]
#[command(version = "1.0.0")]
pub struct Config {
    /// Number of seconds to sleep
    pub seconds: u64,
}

/// Result of reading the command line
#[derive(Debug)]
pub enum ParseOutcome {
    /// A valid duration was supplied
    Run(Config),
    /// Help or version output was requested; clap prints it and exits 0
    Info(clap::Error),
    /// Missing, extra or non-numeric argument
    Usage(clap::Error),
}

impl Config {
    /// Parse configuration from the process arguments
    pub fn parse_args() -> ParseOutcome {
        Self::parse_from_iter(std::env::args_os())
    }

    /// Parse configuration from an explicit argument list (first item is the program name)
    pub fn parse_from_iter<I, T>(args: I) -> ParseOutcome
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        match Self::try_parse_from(args) {
            Ok(config) => ParseOutcome::Run(config),
            Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
                ParseOutcome::Info(e)
            }
            Err(e) => ParseOutcome::Usage(e),
        }
    }

    /// Requested sleep as a duration
    pub fn duration(&self) -> Duration {
        Duration::from_secs(self.seconds)
    }
}
