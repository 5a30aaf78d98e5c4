//! Structured logging setup
//!
//! Logs go to stderr so they never mix with the success line on stdout.
//! `RBDL_LOG` takes an `EnvFilter` directive and overrides `-v`.

use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

use crate::cli::LogFormat;

/// Environment variable holding a log filter directive
pub const LOG_ENV: &str = "RBDL_LOG";

/// Filter directive for a `-v` count
pub fn level_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "warn,rbdl=info",
        2 => "warn,rbdl=debug",
        _ => "debug",
    }
}

/// Install the global subscriber; later calls are no-ops
pub fn init(verbose: u8, format: LogFormat) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(level_directive(verbose)));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false);

    let _ = match format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
}
