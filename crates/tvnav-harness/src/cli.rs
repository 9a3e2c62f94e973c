#![forbid(unsafe_code)]

//! Command-line argument parsing for the harness.
//!
//! Parsed by hand to keep the binary lean. `TVNAV_HARNESS_*` environment
//! variables supply defaults; explicit flags win.

use std::env;
use std::fmt;
use std::path::PathBuf;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const HELP_TEXT: &str = "\
tvnav-harness: remote-control focus navigation over a movie catalog

USAGE:
    tvnav-harness [OPTIONS]

OPTIONS:
    --catalog=PATH   Catalog JSON (default: bundled test data)
    --script=KEYS    Replay KEYS instead of reading the keyboard
                     U/D/L/R arrows, S select, B back, P play, M menu
    --rows=N         Dashboard rows over the catalog (default: 3)
    --help, -h       Show this help message
    --version, -V    Show version

KEYBINDINGS (interactive):
    Arrows / h j k l   Move focus
    Enter              Select focused tile
    Esc / Backspace    Back
    q / Ctrl+C         Quit

ENVIRONMENT VARIABLES:
    TVNAV_HARNESS_CATALOG   Override --catalog
    TVNAV_HARNESS_SCRIPT    Override --script
    TVNAV_ROWS              Default for --rows
    TVNAV_SCROLL_ANCHOR     center|nearest
    TVNAV_LOG_TRANSITIONS   Log focus changes at info
    TVNAV_DEBUG_TRACE       Timestamped focus trace on stderr
    RUST_LOG                tracing filter (default: info)";

/// What the harness was asked to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Run(Opts),
    Help,
    Version,
}

/// Parsed command-line options.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Opts {
    /// Catalog path; `None` uses the bundled data.
    pub catalog: Option<PathBuf>,
    /// Key script; `None` reads the keyboard.
    pub script: Option<String>,
    /// Row override; `None` defers to `TVNAV_ROWS`.
    pub rows: Option<usize>,
}

/// Bad command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliError {
    InvalidValue { flag: &'static str, value: String },
    UnknownArgument(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidValue { flag, value } => write!(f, "invalid {flag} value: {value}"),
            Self::UnknownArgument(arg) => {
                write!(f, "unknown argument: {arg}\nrun with --help for usage information")
            }
        }
    }
}

impl std::error::Error for CliError {}

impl Command {
    /// Parse the process arguments and environment.
    pub fn parse() -> Result<Self, CliError> {
        Self::parse_from(env::args().skip(1), |key| env::var(key).ok())
    }

    pub fn parse_from<I, F>(args: I, lookup: F) -> Result<Self, CliError>
    where
        I: IntoIterator<Item = String>,
        F: Fn(&str) -> Option<String>,
    {
        let mut opts = Opts {
            catalog: lookup("TVNAV_HARNESS_CATALOG").map(PathBuf::from),
            script: lookup("TVNAV_HARNESS_SCRIPT"),
            rows: None,
        };

        for arg in args {
            match arg.as_str() {
                "--help" | "-h" => return Ok(Self::Help),
                "--version" | "-V" => return Ok(Self::Version),
                other => {
                    if let Some(val) = other.strip_prefix("--catalog=") {
                        opts.catalog = Some(PathBuf::from(val));
                    } else if let Some(val) = other.strip_prefix("--script=") {
                        opts.script = Some(val.to_string());
                    } else if let Some(val) = other.strip_prefix("--rows=") {
                        match val.parse::<usize>() {
                            Ok(n) if n > 0 => opts.rows = Some(n),
                            _ => {
                                return Err(CliError::InvalidValue {
                                    flag: "--rows",
                                    value: val.to_string(),
                                });
                            }
                        }
                    } else {
                        return Err(CliError::UnknownArgument(other.to_string()));
                    }
                }
            }
        }

        Ok(Self::Run(opts))
    }
}
