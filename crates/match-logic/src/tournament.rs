//! All-vs-all tournament execution and ranking
//!
//! Every ordered pair of catalogue slots plays once, self-pairings included,
//! so a catalogue of `n` entries runs `n²` matches. Match `i` always gets the
//! rng stream `(seed, i)`, which makes a tournament a pure function of its
//! catalogue, round count and seed, no matter what order matches run in.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use crate::catalogue::StrategyKind;
use crate::config::ArenaConfig;
use crate::error::EngineError;
use crate::game::{play_match, run_match, MatchResult};
use crate::random::SeededRng;

/// One ranked record per distinct strategy name
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TournamentResult {
    pub name: String,
    pub total_score: u64,
    /// Match-sides played; a self-pairing counts twice
    pub matches_played: u64,
}

/// Score line of one finished match, kept small for aggregation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct MatchScore {
    index_a: u32,
    index_b: u32,
    score_a: u64,
    score_b: u64,
}

/// Total number of matches for a catalogue of `n` entries
pub fn match_count(catalogue_len: u32) -> u64 {
    u64::from(catalogue_len) * u64::from(catalogue_len)
}

/// Get the ordered pairing for one match index in O(1), row-major
pub fn pairing_for_match(catalogue_len: u32, match_index: u64) -> Option<(u32, u32)> {
    if match_index >= match_count(catalogue_len) {
        return None;
    }
    // quotient and remainder are both below catalogue_len
    let n = u64::from(catalogue_len);
    Some(((match_index / n) as u32, (match_index % n) as u32))
}

/// Every ordered pairing `(a, b)` including `a == b`, in match-index order
pub fn generate_all_pairings(catalogue_len: u32) -> Vec<(u32, u32)> {
    (0..catalogue_len)
        .flat_map(|a| (0..catalogue_len).map(move |b| (a, b)))
        .collect()
}

fn catalogue_len(catalogue: &[StrategyKind]) -> Result<u32, EngineError> {
    u32::try_from(catalogue.len()).map_err(|_| EngineError::CatalogueTooLarge(catalogue.len()))
}

/// Run one tournament match with fresh instances for both sides
fn run_indexed_match(
    catalogue: &[StrategyKind],
    round_count: u32,
    seed: u64,
    match_index: u64,
    (index_a, index_b): (u32, u32),
) -> Result<MatchScore, EngineError> {
    let mut strategy_a = catalogue[index_a as usize].spawn();
    let mut strategy_b = catalogue[index_b as usize].spawn();
    let result = run_match(
        strategy_a.as_mut(),
        strategy_b.as_mut(),
        round_count,
        SeededRng::new(seed, match_index),
    )?;

    Ok(MatchScore {
        index_a,
        index_b,
        score_a: result.total_score_a,
        score_b: result.total_score_b,
    })
}

#[cfg(not(feature = "parallel"))]
fn run_all_matches(
    catalogue: &[StrategyKind],
    catalogue_len: u32,
    round_count: u32,
    seed: u64,
) -> Result<Vec<MatchScore>, EngineError> {
    generate_all_pairings(catalogue_len)
        .into_iter()
        .zip(0u64..)
        .map(|(pair, i)| run_indexed_match(catalogue, round_count, seed, i, pair))
        .collect()
}

#[cfg(feature = "parallel")]
fn run_all_matches(
    catalogue: &[StrategyKind],
    catalogue_len: u32,
    round_count: u32,
    seed: u64,
) -> Result<Vec<MatchScore>, EngineError> {
    use rayon::prelude::*;

    generate_all_pairings(catalogue_len)
        .into_par_iter()
        .enumerate()
        .map(|(i, pair)| run_indexed_match(catalogue, round_count, seed, i as u64, pair))
        .collect()
}

/// Sum match scores per name, in first-appearance order, then rank
fn aggregate(catalogue: &[StrategyKind], scores: &[MatchScore]) -> Vec<TournamentResult> {
    let mut slot: HashMap<&'static str, usize> = HashMap::new();
    let mut results: Vec<TournamentResult> = Vec::new();
    for kind in catalogue {
        slot.entry(kind.name()).or_insert_with(|| {
            results.push(TournamentResult {
                name: kind.name().to_string(),
                total_score: 0,
                matches_played: 0,
            });
            results.len() - 1
        });
    }

    for score in scores {
        let a = slot[catalogue[score.index_a as usize].name()];
        let b = slot[catalogue[score.index_b as usize].name()];
        results[a].total_score += score.score_a;
        results[a].matches_played += 1;
        results[b].total_score += score.score_b;
        results[b].matches_played += 1;
    }

    // stable: equal totals keep catalogue order
    results.sort_by(|x, y| y.total_score.cmp(&x.total_score));
    results
}

/// Run every ordered pairing of the catalogue and rank strategies by total score
///
/// # Arguments
/// * `catalogue` - Entries to play; duplicates are merged by name in the output
/// * `round_count` - Rounds per match, at least 1
/// * `seed` - Tournament randomness seed
///
/// # Returns
/// One record per distinct name, sorted by descending total score
pub fn run_all_vs_all(
    catalogue: &[StrategyKind],
    round_count: u32,
    seed: u64,
) -> Result<Vec<TournamentResult>, EngineError> {
    if round_count == 0 {
        return Err(EngineError::InvalidRoundCount(round_count));
    }

    let len = catalogue_len(catalogue)?;
    let scores = run_all_matches(catalogue, len, round_count, seed)?;
    let results = aggregate(catalogue, &scores);

    log::info!(
        "tournament: {} strategies, {} matches, {} rounds each",
        results.len(),
        scores.len(),
        round_count
    );
    if let Some(top) = results.first() {
        log::info!("tournament winner: {} with {} points", top.name, top.total_score);
    }

    Ok(results)
}

/// Tournament bound to a configuration, resolving strategies by name
#[derive(Clone, Debug)]
pub struct Tournament {
    config: ArenaConfig,
    seed: u64,
}

impl Tournament {
    pub fn new(config: ArenaConfig) -> Result<Self, EngineError> {
        config.validate()?;
        let seed = config.rng_seed();
        Ok(Self { config, seed })
    }

    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }

    /// Seed actually in use, so a clock-seeded run can be repeated
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Run the configured all-vs-all tournament
    pub fn run(&self) -> Result<Vec<TournamentResult>, EngineError> {
        run_all_vs_all(&self.config.strategies, self.config.round_count, self.seed)
    }

    /// Play a single match between two strategies given by name
    pub fn play(&self, name_a: &str, name_b: &str) -> Result<MatchResult, EngineError> {
        let kind_a = StrategyKind::from_name(name_a)?;
        let kind_b = StrategyKind::from_name(name_b)?;
        play_match(kind_a, kind_b, self.config.round_count, self.seed)
    }
}
