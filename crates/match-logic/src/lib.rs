//! Match Logic for Spieltheorie
//!
//! Strategy and tournament engine for the Iterated Prisoner's Dilemma.
//! This crate is compiled to:
//! - Native (for the command-line runner)
//! - WASM (for front-end match replay, `wasm` feature)

mod random;
mod strategy;
mod catalogue;
mod game;
mod tournament;
mod config;
mod error;

#[cfg(feature = "wasm")]
mod wasm;

pub use random::{time_seed, SeededRng};
pub use strategy::{
    Davis, Downing, Feld, Friedman, Graaskamp, Grofman, Joss, Move, NameWithheld, Nydegger,
    Random, Shubik, SteinRapoport, Strategy, TidemanChieruzzi, TitForTat, Tullock,
};
pub use catalogue::StrategyKind;
pub use game::{play_match, run_match, Match, MatchResult, Outcome, RoundResult};
pub use tournament::{
    generate_all_pairings, match_count, pairing_for_match, run_all_vs_all, Tournament,
    TournamentResult,
};
pub use config::{ArenaConfig, DEFAULT_ROUND_COUNT};
pub use error::EngineError;

/// Payoff matrix for the Prisoner's Dilemma
/// Returns (score_a, score_b)
pub fn payoff(a: Move, b: Move) -> (u8, u8) {
    match (a, b) {
        (Move::Cooperate, Move::Cooperate) => (7, 7),
        (Move::Cooperate, Move::Defect) => (0, 10),
        (Move::Defect, Move::Cooperate) => (10, 0),
        (Move::Defect, Move::Defect) => (1, 1),
    }
}
