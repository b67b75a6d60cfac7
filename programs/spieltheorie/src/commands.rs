//! Subcommand handlers

use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use match_logic::{
    time_seed, ArenaConfig, EngineError, Match, SeededRng, StrategyKind, Tournament,
};

use crate::cli::{Command, MatchArgs, TournamentArgs};
use crate::render;

pub fn run(command: Command) -> Result<()> {
    match command {
        Command::List => {
            println!("{}", render::catalogue());
            Ok(())
        }
        Command::Match(args) => play(args),
        Command::Tournament(args) => tournament(args),
    }
}

/// Exit status for a failed command: 2 for bad arguments, like clap's usage
/// errors, 1 for everything else
pub fn exit_code(err: &anyhow::Error) -> u8 {
    let bad_argument = err
        .chain()
        .filter_map(|cause| cause.downcast_ref::<EngineError>())
        .any(EngineError::is_invalid_argument);
    if bad_argument {
        2
    } else {
        1
    }
}

fn resolve(name: &str) -> Result<StrategyKind> {
    StrategyKind::from_name(name).with_context(|| format!("resolving strategy {:?}", name))
}

/// Single match, printed round by round as it is played
fn play(args: MatchArgs) -> Result<()> {
    let kind_a = resolve(&args.strategy_a)?;
    let kind_b = resolve(&args.strategy_b)?;
    let seed = args.seed.unwrap_or_else(time_seed);
    log::info!("{} vs {}, {} rounds, seed {}", kind_a, kind_b, args.rounds, seed);

    let mut strategy_a = kind_a.spawn();
    let mut strategy_b = kind_b.spawn();
    let mut game = Match::new(
        strategy_a.as_mut(),
        strategy_b.as_mut(),
        args.rounds,
        SeededRng::new(seed, 0),
    )?;

    if !args.json {
        println!("{}", render::match_header(kind_a.name(), kind_b.name()));
    }
    while let Some(round) = game.play_round() {
        if !args.json {
            println!("{}", render::round_line(&round));
        }
        if args.delay_ms > 0 {
            thread::sleep(Duration::from_millis(args.delay_ms));
        }
    }
    let result = game.finish();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("\n{}", render::match_summary(&result));
    }
    Ok(())
}

fn tournament(args: TournamentArgs) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => ArenaConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => ArenaConfig::default(),
    };
    if let Some(rounds) = args.rounds {
        config.round_count = rounds;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }

    let tournament = Tournament::new(config)?;
    log::info!(
        "running {} strategies, {} rounds per match, seed {}",
        tournament.config().strategies.len(),
        tournament.config().round_count,
        tournament.seed()
    );

    let results = tournament.run()?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        print!("{}", render::standings(&results));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_strategy_has_context() {
        let err = resolve("Pavlov").unwrap_err();
        let text = format!("{:#}", err);
        assert!(text.contains("resolving strategy \"Pavlov\""));
        assert!(text.contains("unknown strategy: Pavlov"));
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(exit_code(&resolve("Pavlov").unwrap_err()), 2);

        let args = TournamentArgs {
            rounds: None,
            seed: None,
            config: Some("/nonexistent/arena.json".into()),
            json: false,
        };
        assert_eq!(exit_code(&tournament(args).unwrap_err()), 1);
    }

    #[test]
    fn test_bad_config_round_count_is_argument_error() {
        let path = std::env::temp_dir().join("spieltheorie_zero_rounds.json");
        std::fs::write(&path, r#"{ "round_count": 0 }"#).unwrap();
        let args = TournamentArgs {
            rounds: None,
            seed: Some(1),
            config: Some(path.clone()),
            json: true,
        };
        let err = tournament(args).unwrap_err();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(exit_code(&err), 2);
    }

    #[test]
    fn test_match_runs() {
        let args = MatchArgs {
            strategy_a: "Shubik".into(),
            strategy_b: "Joss".into(),
            rounds: 5,
            seed: Some(1),
            delay_ms: 0,
            json: true,
        };
        assert!(play(args).is_ok());
    }

    #[test]
    fn test_tournament_missing_config() {
        let args = TournamentArgs {
            rounds: Some(3),
            seed: Some(1),
            config: Some("/nonexistent/arena.json".into()),
            json: false,
        };
        let err = tournament(args).unwrap_err();
        assert!(format!("{:#}", err).contains("loading config"));
    }

    #[test]
    fn test_tournament_runs_with_overrides() {
        let args = TournamentArgs { rounds: Some(3), seed: Some(2), config: None, json: true };
        assert!(tournament(args).is_ok());
    }
}
