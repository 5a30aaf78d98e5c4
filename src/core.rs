use chrono::Local;
use clap::Parser;
use tracing::{debug, info};

use crate::cli::{process_args, Args};
use crate::client::fetch_repeaters;
use crate::config::Config;
use crate::errors::RbdlError;
use crate::logging;
use crate::output::{generate_filename, save_to_file};
use crate::status::ExitStatus;

/// Main entry point for the CLI.
///
/// Loads configuration, parses arguments, then fetches and saves the
/// repeater data on a tokio runtime.
pub fn run(args: Vec<String>) -> ExitStatus {
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: Failed to load config: {}", e);
            Config::default()
        }
    };

    let merged_args = merge_default_options(args, &config);

    let traceback = merged_args.iter().any(|a| a == "--traceback" || a == "--debug");

    let parsed = match Args::try_parse_from(&merged_args) {
        Ok(args) => args,
        Err(e) => {
            e.print().ok();
            return if e.kind() == clap::error::ErrorKind::DisplayHelp
                || e.kind() == clap::error::ErrorKind::DisplayVersion {
                ExitStatus::Success
            } else {
                ExitStatus::Error
            };
        }
    };

    let verbose = if parsed.debug { parsed.verbose.max(2) } else { parsed.verbose };
    logging::init(verbose, parsed.log_format.unwrap_or_default());
    debug!(config_file = %config.config_file().display(), defaults = config.default_options.len(), "Configuration loaded");

    let runtime = match tokio::runtime::Builder::new_multi_thread().enable_all().build() {
        Ok(runtime) => runtime,
        Err(e) => return handle_error(RbdlError::Io(e), traceback),
    };

    match runtime.block_on(program(parsed)) {
        Ok(status) => status,
        Err(e) => handle_error(e, traceback),
    }
}

/// Fetch the repeater list for `args` and write it to disk.
pub async fn program(args: Args) -> Result<ExitStatus, RbdlError> {
    let processed = process_args(&args)?;

    let url = processed
        .filters
        .build_url(&processed.endpoint)
        .map_err(RbdlError::fetch)?;

    if args.dry_run {
        println!("{}", url);
        return Ok(ExitStatus::Success);
    }

    info!(url = %url, format = %processed.format, on_air = processed.on_air, "Fetching repeater data");

    let data = tokio::select! {
        result = fetch_repeaters(&url, &processed.email, processed.timeout) => {
            result.map_err(RbdlError::fetch)?
        }
        Ok(()) = tokio::signal::ctrl_c() => {
            eprintln!("\nInterrupted");
            return Ok(ExitStatus::Interrupted);
        }
    };

    let path = processed
        .output
        .clone()
        .unwrap_or_else(|| generate_filename(&processed.filters, processed.format, &Local::now()));

    save_to_file(&path, &data, processed.format, processed.on_air).map_err(RbdlError::save)?;

    if !args.quiet {
        println!("Successfully saved data to: {}", path.display());
    }

    Ok(ExitStatus::Success)
}

/// Prepend the config file's default flags to the command line so that
/// explicit flags, parsed later, take precedence.
pub fn merge_default_options(args: Vec<String>, config: &Config) -> Vec<String> {
    if config.default_options.is_empty() {
        return args;
    }

    let (flags, positional): (Vec<_>, Vec<_>) = config.default_options.iter()
        .partition(|opt| opt.starts_with('-'));

    if !positional.is_empty() {
        eprintln!("Warning: Positional arguments in default options are ignored: {:?}", positional);
        eprintln!("Only flags (starting with -) can be used in default options.");
    }

    if flags.is_empty() {
        return args;
    }

    let mut merged = Vec::with_capacity(args.len() + flags.len());

    if let Some(program) = args.first() {
        merged.push(program.clone());
    }

    merged.extend(flags.into_iter().cloned());
    merged.extend(args.into_iter().skip(1));

    merged
}

fn handle_error(error: RbdlError, traceback: bool) -> ExitStatus {
    let message = match &error {
        RbdlError::Fetch(_) | RbdlError::Save(_) => error.to_string(),
        _ => format!("Error: {}", error),
    };

    if traceback {
        eprintln!("{}\n{:?}", message, error);
    } else {
        eprintln!("{}", message);
    }

    // All errors return the same exit code (1) following Unix conventions
    ExitStatus::Error
}
