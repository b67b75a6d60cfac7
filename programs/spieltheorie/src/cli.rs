//! Command-line arguments

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "spieltheorie",
    version,
    about = "Iterated Prisoner's Dilemma matches and tournaments"
)]
pub struct Cli {
    /// Increase log output (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the strategy catalogue
    List,
    /// Play one match between two strategies
    Match(MatchArgs),
    /// Play every strategy against every other and rank them
    Tournament(TournamentArgs),
}

#[derive(Debug, Args)]
pub struct MatchArgs {
    /// Strategy for player A (name or identifier)
    pub strategy_a: String,

    /// Strategy for player B (name or identifier)
    pub strategy_b: String,

    /// Number of rounds
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    pub rounds: u32,

    /// Seed for randomized strategies; defaults to the clock
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Pause between rounds, in milliseconds
    #[arg(long, default_value_t = 0)]
    pub delay_ms: u64,

    /// Print the result as JSON instead of a round table
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct TournamentArgs {
    /// Rounds per match; overrides the config file
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    pub rounds: Option<u32>,

    /// Seed for randomized strategies; overrides the config file
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// JSON config file (round_count, seed, strategies)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print the standings as JSON
    #[arg(long)]
    pub json: bool,
}
