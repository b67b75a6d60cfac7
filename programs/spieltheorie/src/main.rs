//! Spieltheorie - Iterated Prisoner's Dilemma runner
//!
//! Thin command-line shell over `match-logic`: parses arguments, runs a
//! single match or a full tournament, and prints the results.

mod cli;
mod commands;
mod render;

use std::process::ExitCode;

use clap::Parser;
use cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match commands::run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::from(commands::exit_code(&err))
        }
    }
}

/// `RUST_LOG` wins; otherwise `-v` raises the level from warn
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}
