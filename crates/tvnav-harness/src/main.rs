#![forbid(unsafe_code)]

//! tvnav reference harness
//!
//! Loads a movie catalog, builds the three-row dashboard grid over it, and
//! drives focus navigation from either a key script or the keyboard. Every
//! focus change is printed as the tile the view would scroll to.
//!
//! # Running
//!
//! ```sh
//! cargo run -p tvnav-harness -- --script=RRDDU
//! cargo run -p tvnav-harness -- --catalog=movies.json
//! ```

mod cli;
mod session;

use std::io;
use std::process::ExitCode;

use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;
use tvnav_catalog::Catalog;
use tvnav_runtime::NavConfig;

use crate::cli::{Command, HELP_TEXT, Opts, VERSION};
use crate::session::Session;

const BUNDLED_CATALOG: &str = include_str!("../../tvnav-catalog/data/test_data.json");

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn load_catalog(opts: &Opts) -> Catalog {
    match &opts.catalog {
        Some(path) => Catalog::load_or_empty(path),
        None => Catalog::from_json_str(BUNDLED_CATALOG).unwrap_or_else(|err| {
            warn!(error = %err, "bundled catalog unreadable, continuing with an empty list");
            Catalog::default()
        }),
    }
}

fn run(opts: Opts) -> ExitCode {
    let mut config = match NavConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            error!(error = %err, "invalid configuration");
            return ExitCode::FAILURE;
        }
    };
    if let Some(rows) = opts.rows {
        config.rows = rows;
    }

    let catalog = load_catalog(&opts);
    info!(movies = catalog.len(), rows = config.rows, "dashboard ready");

    match &opts.script {
        Some(script) => {
            let mut session = Session::new(catalog, &config, io::stdout(), "\n");
            session.start();
            if let Err(err) = session.run_script(script) {
                error!(error = %err, "invalid key script");
                return ExitCode::FAILURE;
            }
            if let Some(cell) = session.focus() {
                info!(focus = %cell, "script finished");
            }
        }
        None => {
            let mut session = Session::new(catalog, &config, io::stdout(), "\r\n");
            session.start();
            if let Err(err) = session.run_interactive() {
                error!(error = %err, "terminal input failed");
                return ExitCode::FAILURE;
            }
        }
    }
    ExitCode::SUCCESS
}

fn main() -> ExitCode {
    init_tracing();
    match Command::parse() {
        Ok(Command::Run(opts)) => run(opts),
        Ok(Command::Help) => {
            println!("{HELP_TEXT}");
            ExitCode::SUCCESS
        }
        Ok(Command::Version) => {
            println!("tvnav-harness {VERSION}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
