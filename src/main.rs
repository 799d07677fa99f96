//! lazypass: a password generator and plain JSON credential store.
//!
//! This file is the entry point. It sets up logging, parses arguments,
//! dispatches the subcommand, and turns errors into an exit status.
//! Commands live in `commands/`, terminal and clipboard helpers in `ui.rs`.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod config;
mod error;
mod form;
mod generator;
mod store;
mod ui;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = cli::Cli::parse();
    match commands::dispatch(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
