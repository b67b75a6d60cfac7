//! WASM bindings for front-end match replay

#![cfg(feature = "wasm")]

use wasm_bindgen::prelude::*;
use crate::{play_match, run_all_vs_all, StrategyKind};

fn parse_kind(name: &str) -> Result<StrategyKind, JsError> {
    StrategyKind::from_name(name).map_err(|e| JsError::new(&e.to_string()))
}

/// Play a match with full round-by-round details
///
/// # Arguments
/// * `strategy_a` - Display name or identifier of player A's strategy
/// * `strategy_b` - Display name or identifier of player B's strategy
/// * `round_count` - Number of rounds, at least 1
/// * `seed` - Randomness seed
///
/// # Returns
/// JSON serialized MatchResult
#[wasm_bindgen]
pub fn replay_match(
    strategy_a: &str,
    strategy_b: &str,
    round_count: u32,
    seed: u64,
) -> Result<JsValue, JsError> {
    let kind_a = parse_kind(strategy_a)?;
    let kind_b = parse_kind(strategy_b)?;

    let result = play_match(kind_a, kind_b, round_count, seed)
        .map_err(|e| JsError::new(&e.to_string()))?;

    serde_wasm_bindgen::to_value(&result)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

/// Run the full catalogue all-vs-all and return the ranked results
#[wasm_bindgen]
pub fn run_tournament(round_count: u32, seed: u64) -> Result<JsValue, JsError> {
    let results = run_all_vs_all(&StrategyKind::ALL, round_count, seed)
        .map_err(|e| JsError::new(&e.to_string()))?;

    serde_wasm_bindgen::to_value(&results)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

/// Get human-readable description of a strategy
#[wasm_bindgen]
pub fn get_strategy_description(name: &str) -> Result<String, JsError> {
    Ok(parse_kind(name)?.description().to_string())
}

#[derive(serde::Serialize)]
struct StrategyInfo {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    randomized: bool,
    stateful: bool,
}

/// Get the whole catalogue in display order
#[wasm_bindgen]
pub fn get_strategy_types() -> Result<JsValue, JsError> {
    let types: Vec<StrategyInfo> = StrategyKind::ALL
        .iter()
        .map(|kind| StrategyInfo {
            id: kind.id(),
            name: kind.name(),
            description: kind.description(),
            randomized: kind.is_randomized(),
            stateful: kind.is_stateful(),
        })
        .collect();

    serde_wasm_bindgen::to_value(&types)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}
