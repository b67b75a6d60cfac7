//! Match execution engine

use serde::{Deserialize, Serialize};
use crate::catalogue::StrategyKind;
use crate::error::EngineError;
use crate::random::SeededRng;
use crate::strategy::{Move, Strategy};
use crate::payoff;

/// Result of a single round
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    pub round: u32,
    pub move_a: Move,
    pub move_b: Move,
    pub score_a: u8,
    pub score_b: u8,
    pub cumulative_a: u64,
    pub cumulative_b: u64,
}

/// Final standing between the two sides of a match
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    WinA,
    WinB,
    Draw,
}

/// Result of a complete match
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub name_a: String,
    pub name_b: String,
    pub rounds: Vec<RoundResult>,
    pub total_score_a: u64,
    pub total_score_b: u64,
    pub round_count: u32,
}

impl MatchResult {
    /// Player A's moves in round order
    pub fn moves_a(&self) -> Vec<Move> {
        self.rounds.iter().map(|r| r.move_a).collect()
    }

    /// Player B's moves in round order
    pub fn moves_b(&self) -> Vec<Move> {
        self.rounds.iter().map(|r| r.move_b).collect()
    }

    pub fn outcome(&self) -> Outcome {
        match self.total_score_a.cmp(&self.total_score_b) {
            std::cmp::Ordering::Greater => Outcome::WinA,
            std::cmp::Ordering::Less => Outcome::WinB,
            std::cmp::Ordering::Equal => Outcome::Draw,
        }
    }

    /// Name of the winning side, `None` on a draw
    pub fn winner(&self) -> Option<&str> {
        match self.outcome() {
            Outcome::WinA => Some(&self.name_a),
            Outcome::WinB => Some(&self.name_b),
            Outcome::Draw => None,
        }
    }
}

/// One pairing of two strategy instances, advanced a round at a time.
///
/// Both histories grow by exactly one move per round and are never rewritten.
/// Once `round_count` rounds are played the match only reports its result.
pub struct Match<'s> {
    strategy_a: &'s mut dyn Strategy,
    strategy_b: &'s mut dyn Strategy,
    round_count: u32,
    round: u32,
    history_a: Vec<Move>,
    history_b: Vec<Move>,
    rounds: Vec<RoundResult>,
    total_a: u64,
    total_b: u64,
    rng: SeededRng,
}

impl<'s> Match<'s> {
    pub fn new(
        strategy_a: &'s mut dyn Strategy,
        strategy_b: &'s mut dyn Strategy,
        round_count: u32,
        rng: SeededRng,
    ) -> Result<Self, EngineError> {
        if round_count == 0 {
            return Err(EngineError::InvalidRoundCount(round_count));
        }
        let capacity = round_count as usize;
        Ok(Self {
            strategy_a,
            strategy_b,
            round_count,
            round: 0,
            history_a: Vec::with_capacity(capacity),
            history_b: Vec::with_capacity(capacity),
            rounds: Vec::with_capacity(capacity),
            total_a: 0,
            total_b: 0,
            rng,
        })
    }

    pub fn round_count(&self) -> u32 {
        self.round_count
    }

    /// Rounds played so far
    pub fn rounds_played(&self) -> u32 {
        self.round
    }

    pub fn is_finished(&self) -> bool {
        self.round >= self.round_count
    }

    pub fn history_a(&self) -> &[Move] {
        &self.history_a
    }

    pub fn history_b(&self) -> &[Move] {
        &self.history_b
    }

    pub fn scores(&self) -> (u64, u64) {
        (self.total_a, self.total_b)
    }

    /// Play the next round, or return `None` once every round has been played
    pub fn play_round(&mut self) -> Option<RoundResult> {
        if self.is_finished() {
            return None;
        }
        let round = self.round;

        // Separate streams per player so one side's draws never shift the other's
        let mut rng_a = self.rng.for_round(round.wrapping_mul(2));
        let mut rng_b = self.rng.for_round(round.wrapping_mul(2).wrapping_add(1));

        // Both sides decide before either history is extended
        let move_a = self.strategy_a.next_move(round, &self.history_b, &mut rng_a);
        let move_b = self.strategy_b.next_move(round, &self.history_a, &mut rng_b);

        self.history_a.push(move_a);
        self.history_b.push(move_b);

        let (score_a, score_b) = payoff(move_a, move_b);
        self.total_a += score_a as u64;
        self.total_b += score_b as u64;

        let result = RoundResult {
            round,
            move_a,
            move_b,
            score_a,
            score_b,
            cumulative_a: self.total_a,
            cumulative_b: self.total_b,
        };
        self.rounds.push(result);
        self.round += 1;

        Some(result)
    }

    /// Play any remaining rounds and return the full result
    pub fn finish(mut self) -> MatchResult {
        while self.play_round().is_some() {}

        log::debug!(
            "{} vs {} -> {} : {} ({} rounds)",
            self.strategy_a.name(),
            self.strategy_b.name(),
            self.total_a,
            self.total_b,
            self.round_count
        );

        MatchResult {
            name_a: self.strategy_a.name().to_string(),
            name_b: self.strategy_b.name().to_string(),
            rounds: self.rounds,
            total_score_a: self.total_a,
            total_score_b: self.total_b,
            round_count: self.round_count,
        }
    }
}

impl Iterator for Match<'_> {
    type Item = RoundResult;

    fn next(&mut self) -> Option<Self::Item> {
        self.play_round()
    }
}

/// Run a complete match between two strategy instances
///
/// # Arguments
/// * `strategy_a` - First player's strategy
/// * `strategy_b` - Second player's strategy
/// * `round_count` - Number of rounds, at least 1
/// * `rng` - Randomness source for this match
///
/// # Returns
/// Complete match result with round-by-round details
pub fn run_match(
    strategy_a: &mut dyn Strategy,
    strategy_b: &mut dyn Strategy,
    round_count: u32,
    rng: SeededRng,
) -> Result<MatchResult, EngineError> {
    Ok(Match::new(strategy_a, strategy_b, round_count, rng)?.finish())
}

/// Single-match interface: fresh instances for both sides, seeded rng
pub fn play_match(
    kind_a: StrategyKind,
    kind_b: StrategyKind,
    round_count: u32,
    seed: u64,
) -> Result<MatchResult, EngineError> {
    let mut strategy_a = kind_a.spawn();
    let mut strategy_b = kind_b.spawn();
    run_match(
        strategy_a.as_mut(),
        strategy_b.as_mut(),
        round_count,
        SeededRng::new(seed, 0),
    )
}
