//! CLI argument definitions using clap
//!
//! This module defines all command-line arguments for rbdl.

use clap::{ArgAction, Parser, ValueEnum};
use std::fmt;

/// Public RepeaterBook export endpoint
pub const DEFAULT_ENDPOINT: &str = "https://www.repeaterbook.com/api/export.php";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: f64 = 30.0;

const AFTER_HELP: &str = "\
Examples:
  rbdl --email user@example.com --country \"United States\" --mode DMR
  rbdl --email user@example.com --country Canada --mode DMR --format csv
  rbdl --email user@example.com --country \"United States\" --on-air
  rbdl --email user@example.com --output repeaters.csv
  rbdl --email user@example.com --country Mexico --frequency 146.52
  rbdl --email user@example.com --callsign W%

Note: Use % as wildcard for pattern matching";

/// RepeaterbookDL - Download repeater data from RepeaterBook API
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "rbdl", version, about, long_about = None, after_help = AFTER_HELP)]
#[command(args_override_self = true)]  // config defaults come first, explicit flags override them
pub struct Args {
    // =========================================================================
    // IDENTITY & OUTPUT
    // =========================================================================

    /// Email address (required, or set RBDL_EMAIL)
    #[arg(long = "email", value_name = "EMAIL", env = "RBDL_EMAIL", hide_env_values = true)]
    pub email: Option<String>,

    /// Output file path (auto-generated if not specified or empty)
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<String>,

    /// Output format (auto-detected from output filename if not specified)
    #[arg(short = 'f', long = "format", value_name = "FORMAT", value_enum)]
    pub format: Option<OutputFormat>,

    /// Only include on-air repeaters
    #[arg(long = "on-air", action = ArgAction::SetTrue)]
    pub on_air: bool,

    // =========================================================================
    // SEARCH FILTERS
    // =========================================================================

    /// Repeater callsign (supports % wildcard)
    #[arg(long = "callsign", value_name = "CALLSIGN")]
    pub callsign: Option<String>,

    /// Repeater city (supports % wildcard)
    #[arg(long = "city", value_name = "CITY")]
    pub city: Option<String>,

    /// Repeater country (supports % wildcard)
    #[arg(long = "country", value_name = "COUNTRY")]
    pub country: Option<String>,

    /// Repeater frequency
    #[arg(long = "frequency", value_name = "FREQUENCY")]
    pub frequency: Option<String>,

    /// Operating mode (analog, DMR, NXDN, P25, tetra)
    #[arg(long = "mode", value_name = "MODE")]
    pub mode: Option<String>,

    /// Landmark (supports % wildcard)
    #[arg(long = "landmark", value_name = "LANDMARK")]
    pub landmark: Option<String>,

    /// State/Province FIPS code
    #[arg(long = "state", value_name = "FIPS")]
    pub state: Option<String>,

    /// Region (for international repeaters)
    #[arg(long = "region", value_name = "REGION")]
    pub region: Option<String>,

    /// Service type (e.g., GMRS)
    #[arg(long = "stype", value_name = "STYPE")]
    pub stype: Option<String>,

    // =========================================================================
    // NETWORK
    // =========================================================================

    /// Request timeout in seconds
    #[arg(long = "timeout", value_name = "SECONDS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: f64,

    /// API endpoint override
    #[arg(long = "endpoint", value_name = "URL", env = "RBDL_ENDPOINT", hide = true)]
    pub endpoint: Option<String>,

    /// Print the request URL and exit without fetching
    #[arg(long = "dry-run", action = ArgAction::SetTrue)]
    pub dry_run: bool,

    // =========================================================================
    // TROUBLESHOOTING
    // =========================================================================

    /// Verbose logging. Use -vv for debug output
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    /// Don't print the success message
    #[arg(short = 'q', long = "quiet", action = ArgAction::SetTrue)]
    pub quiet: bool,

    /// Log line format: text (default) or json (JSON Lines)
    #[arg(long = "log-format", value_name = "FORMAT", value_enum)]
    pub log_format: Option<LogFormat>,

    /// Show traceback on error
    #[arg(long = "traceback", action = ArgAction::SetTrue)]
    pub traceback: bool,

    /// Debug mode (implies --traceback)
    #[arg(long = "debug", action = ArgAction::SetTrue)]
    pub debug: bool,
}

/// Serialization format of the saved file
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Tab-indented JSON
    #[default]
    Json,
    /// Comma-separated values, one row per repeater
    Csv,
}

impl OutputFormat {
    /// File extension including the leading dot
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Json => ".json",
            OutputFormat::Csv => ".csv",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err("format must be either 'json' or 'csv'".to_string()),
        }
    }
}

/// Log format for structured output (CI/CD)
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Plain text output (default)
    #[default]
    Text,
    /// JSON Lines format for parsing
    Json,
}
