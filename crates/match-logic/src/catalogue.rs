//! The strategy catalogue
//!
//! Each `StrategyKind` is one catalogue entry. `spawn` is the entry's factory
//! and always returns a new instance, so stateful rules never share memory
//! between matches.

use serde::{Deserialize, Serialize};
use crate::error::EngineError;
use crate::strategy::*;

/// Catalogue entry
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StrategyKind {
    /// Copy opponent's last move. Start with cooperate.
    TitForTat,
    /// Coin flip each round.
    Random,
    /// Tit-for-Tat that forgives rare recent defections.
    TidemanChieruzzi,
    /// Probing opening, then Tit-for-Tat.
    Nydegger,
    /// Defect every fifth round.
    Grofman,
    /// Two rounds of punishment per defection.
    Shubik,
    /// Tit-for-Tat with random forgiveness.
    SteinRapoport,
    /// Grim trigger.
    Friedman,
    /// Ten rounds of trust, then Tit-for-Tat.
    Davis,
    /// Majority rule over the whole history.
    Graaskamp,
    /// Tallies opponent's moves.
    Downing,
    /// Increasingly likely to defect.
    Feld,
    /// Tit-for-Tat with 10% sneaky defections.
    Joss,
    /// Cooperates with 5% test defections.
    Tullock,
    /// Tit-for-Tat with 5% defections.
    NameWithheld,
}

impl StrategyKind {
    /// Full catalogue in display order
    pub const ALL: [StrategyKind; 15] = [
        StrategyKind::TitForTat,
        StrategyKind::Random,
        StrategyKind::TidemanChieruzzi,
        StrategyKind::Nydegger,
        StrategyKind::Grofman,
        StrategyKind::Shubik,
        StrategyKind::SteinRapoport,
        StrategyKind::Friedman,
        StrategyKind::Davis,
        StrategyKind::Graaskamp,
        StrategyKind::Downing,
        StrategyKind::Feld,
        StrategyKind::Joss,
        StrategyKind::Tullock,
        StrategyKind::NameWithheld,
    ];

    /// Build a fresh instance of this rule
    pub fn spawn(self) -> Box<dyn Strategy> {
        match self {
            StrategyKind::TitForTat => Box::new(TitForTat),
            StrategyKind::Random => Box::new(Random),
            StrategyKind::TidemanChieruzzi => Box::new(TidemanChieruzzi),
            StrategyKind::Nydegger => Box::new(Nydegger),
            StrategyKind::Grofman => Box::new(Grofman),
            StrategyKind::Shubik => Box::new(Shubik::default()),
            StrategyKind::SteinRapoport => Box::new(SteinRapoport),
            StrategyKind::Friedman => Box::new(Friedman::default()),
            StrategyKind::Davis => Box::new(Davis),
            StrategyKind::Graaskamp => Box::new(Graaskamp),
            StrategyKind::Downing => Box::new(Downing::default()),
            StrategyKind::Feld => Box::new(Feld),
            StrategyKind::Joss => Box::new(Joss),
            StrategyKind::Tullock => Box::new(Tullock),
            StrategyKind::NameWithheld => Box::new(NameWithheld),
        }
    }

    /// Display name, identical to `Strategy::name` of the spawned instance
    pub fn name(self) -> &'static str {
        match self {
            StrategyKind::TitForTat => "Tit-for-Tat",
            StrategyKind::Random => "Random",
            StrategyKind::TidemanChieruzzi => "Tideman & Chieruzzi",
            StrategyKind::Nydegger => "Nydegger",
            StrategyKind::Grofman => "Grofman",
            StrategyKind::Shubik => "Shubik",
            StrategyKind::SteinRapoport => "Stein & Rapoport",
            StrategyKind::Friedman => "Friedman",
            StrategyKind::Davis => "Davis",
            StrategyKind::Graaskamp => "Graaskamp",
            StrategyKind::Downing => "Downing",
            StrategyKind::Feld => "Feld",
            StrategyKind::Joss => "Joss",
            StrategyKind::Tullock => "Tullock",
            StrategyKind::NameWithheld => "Name Withheld",
        }
    }

    /// Identifier used in JSON config and on the command line
    pub fn id(self) -> &'static str {
        match self {
            StrategyKind::TitForTat => "TitForTat",
            StrategyKind::Random => "Random",
            StrategyKind::TidemanChieruzzi => "TidemanChieruzzi",
            StrategyKind::Nydegger => "Nydegger",
            StrategyKind::Grofman => "Grofman",
            StrategyKind::Shubik => "Shubik",
            StrategyKind::SteinRapoport => "SteinRapoport",
            StrategyKind::Friedman => "Friedman",
            StrategyKind::Davis => "Davis",
            StrategyKind::Graaskamp => "Graaskamp",
            StrategyKind::Downing => "Downing",
            StrategyKind::Feld => "Feld",
            StrategyKind::Joss => "Joss",
            StrategyKind::Tullock => "Tullock",
            StrategyKind::NameWithheld => "NameWithheld",
        }
    }

    /// Resolve a display name or identifier (case-insensitive)
    pub fn from_name(name: &str) -> Result<Self, EngineError> {
        let wanted = name.trim();
        Self::ALL
            .into_iter()
            .find(|kind| {
                kind.name().eq_ignore_ascii_case(wanted) || kind.id().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| EngineError::UnknownStrategy(name.to_string()))
    }

    /// Rules that draw from the rng
    pub fn is_randomized(self) -> bool {
        matches!(
            self,
            StrategyKind::Random
                | StrategyKind::SteinRapoport
                | StrategyKind::Feld
                | StrategyKind::Joss
                | StrategyKind::Tullock
                | StrategyKind::NameWithheld
        )
    }

    /// Rules that keep private memory across rounds of a match
    pub fn is_stateful(self) -> bool {
        matches!(
            self,
            StrategyKind::Shubik | StrategyKind::Friedman | StrategyKind::Downing
        )
    }

    pub fn description(self) -> &'static str {
        match self {
            StrategyKind::TitForTat => "Cooperates first, then copies the opponent's last move.",
            StrategyKind::Random => "Cooperates or defects with equal probability.",
            StrategyKind::TidemanChieruzzi => {
                "Tit-for-Tat, forgiving a defection when the opponent defected \
                 in fewer than half of the last five rounds."
            }
            StrategyKind::Nydegger => {
                "Opens cooperate, defect, cooperate; cooperates on round four only \
                 if the opponent never defected, then plays Tit-for-Tat."
            }
            StrategyKind::Grofman => "Defects every fifth round, cooperates otherwise.",
            StrategyKind::Shubik => "Answers each defection with two rounds of defection.",
            StrategyKind::SteinRapoport => "Tit-for-Tat with a 20% chance to forgive a defection.",
            StrategyKind::Friedman => "Cooperates until betrayed, then always defects.",
            StrategyKind::Davis => "Cooperates for ten rounds, then plays Tit-for-Tat.",
            StrategyKind::Graaskamp => {
                "Defects while the opponent has defected more than half of the time."
            }
            StrategyKind::Downing => {
                "Cooperates while the opponent has cooperated more often than defected."
            }
            StrategyKind::Feld => {
                "Defects with a probability that rises linearly to certainty at round 200."
            }
            StrategyKind::Joss => "Tit-for-Tat with a 10% chance to defect anyway.",
            StrategyKind::Tullock => "Cooperates, defecting 5% of the time to test the opponent.",
            StrategyKind::NameWithheld => "Tit-for-Tat with a 5% chance to defect anyway.",
        }
    }
}

impl std::fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for StrategyKind {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}
