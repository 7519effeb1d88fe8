//! # jsonvet Entry Point
//!
//! Parses arguments, dispatches to the driver, and maps every failure
//! path to exit status 1: bad usage, unreadable or unparseable input,
//! a schema that fails to compile, and data that fails validation.
//! Only a clean validation pass exits 0.

use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;

use jsonvet_cli::{run, Cli, RunOutcome};

fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            // --help and --version are not failures; bad usage exits 1
            // rather than clap's default 2.
            return match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::FAILURE,
            };
        }
    };

    match run(&cli) {
        Ok(RunOutcome::Valid) => ExitCode::SUCCESS,
        Ok(RunOutcome::Invalid) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("An error occurred: {err}");
            ExitCode::FAILURE
        }
    }
}
