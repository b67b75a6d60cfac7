//! Run configuration
//!
//! Loaded from JSON, e.g.
//!
//! ```json
//! { "round_count": 200, "seed": 42, "strategies": ["TitForTat", "Friedman"] }
//! ```
//!
//! Every field is optional; missing fields take the defaults below.

use std::path::Path;

use serde::{Deserialize, Serialize};
use crate::catalogue::StrategyKind;
use crate::error::EngineError;
use crate::random::time_seed;

/// Default rounds per match
pub const DEFAULT_ROUND_COUNT: u32 = 200;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    /// Rounds per match (at least 1)
    pub round_count: u32,
    /// Fixed seed for reproducible runs; `None` seeds from the clock
    pub seed: Option<u64>,
    /// Catalogue to play, in ranking tie-break order
    pub strategies: Vec<StrategyKind>,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            round_count: DEFAULT_ROUND_COUNT,
            seed: None,
            strategies: StrategyKind::ALL.to_vec(),
        }
    }
}

impl ArenaConfig {
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, EngineError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        if self.round_count == 0 {
            return Err(EngineError::InvalidRoundCount(self.round_count));
        }
        Ok(())
    }

    /// Fixed seed if configured, otherwise one derived from the clock
    pub fn rng_seed(&self) -> u64 {
        self.seed.unwrap_or_else(time_seed)
    }
}
