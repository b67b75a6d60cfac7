//! Strategy definitions and execution

use serde::{Deserialize, Serialize};
use crate::random::SeededRng;

/// A move in the Prisoner's Dilemma
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    Cooperate,
    Defect,
}

impl Move {
    pub fn is_defect(self) -> bool {
        self == Move::Defect
    }
}

/// A decision rule for one side of a match.
///
/// `opponent_history` holds the opponent's moves from earlier rounds, most
/// recent last, so inside a match its length equals `round`. Implementations
/// with private state must treat round 0 as the start of a new match, but the
/// engine always hands each match a fresh instance anyway.
pub trait Strategy {
    fn next_move(&mut self, round: u32, opponent_history: &[Move], rng: &mut SeededRng) -> Move;

    /// Stable display name, unique within the catalogue
    fn name(&self) -> &'static str;
}

/// Opponent's last move, or Cooperate when there is none
fn mirror(opponent_history: &[Move]) -> Move {
    opponent_history.last().copied().unwrap_or(Move::Cooperate)
}

fn opening(round: u32, opponent_history: &[Move]) -> bool {
    round == 0 || opponent_history.is_empty()
}

/// Tit-for-Tat: Copy opponent's last move, start with cooperate
#[derive(Clone, Copy, Debug, Default)]
pub struct TitForTat;

impl Strategy for TitForTat {
    fn next_move(&mut self, round: u32, opponent_history: &[Move], _rng: &mut SeededRng) -> Move {
        if opening(round, opponent_history) {
            return Move::Cooperate;
        }
        mirror(opponent_history)
    }

    fn name(&self) -> &'static str {
        "Tit-for-Tat"
    }
}

/// Random: Fair coin flip every round
#[derive(Clone, Copy, Debug, Default)]
pub struct Random;

impl Strategy for Random {
    fn next_move(&mut self, _round: u32, _opponent_history: &[Move], rng: &mut SeededRng) -> Move {
        if rng.coin() {
            Move::Cooperate
        } else {
            Move::Defect
        }
    }

    fn name(&self) -> &'static str {
        "Random"
    }
}

/// Tideman & Chieruzzi: Tit-for-Tat that forgives a defection when the
/// opponent defected in fewer than half of the last five rounds
#[derive(Clone, Copy, Debug, Default)]
pub struct TidemanChieruzzi;

impl TidemanChieruzzi {
    const WINDOW: usize = 5;
}

impl Strategy for TidemanChieruzzi {
    fn next_move(&mut self, round: u32, opponent_history: &[Move], _rng: &mut SeededRng) -> Move {
        if opening(round, opponent_history) {
            return Move::Cooperate;
        }

        let last = mirror(opponent_history);
        if last == Move::Defect {
            let start = opponent_history.len().saturating_sub(Self::WINDOW);
            let recent = &opponent_history[start..];
            let recent_defects = recent.iter().filter(|m| m.is_defect()).count();
            // Integer division: a window of 1 or 2 never forgives a single defection
            if recent_defects < recent.len() / 2 {
                return Move::Cooperate;
            }
        }
        last
    }

    fn name(&self) -> &'static str {
        "Tideman & Chieruzzi"
    }
}

/// Nydegger: Probes with C, D, C, then judges the opponent's response
#[derive(Clone, Copy, Debug, Default)]
pub struct Nydegger;

impl Strategy for Nydegger {
    fn next_move(&mut self, round: u32, opponent_history: &[Move], _rng: &mut SeededRng) -> Move {
        match round {
            0 | 2 => Move::Cooperate,
            1 => Move::Defect,
            3 => match opponent_history.get(..3) {
                Some(first) if first.iter().all(|m| *m == Move::Cooperate) => Move::Cooperate,
                Some(_) => Move::Defect,
                None => Move::Cooperate,
            },
            _ => mirror(opponent_history),
        }
    }

    fn name(&self) -> &'static str {
        "Nydegger"
    }
}

/// Grofman: Defect every fifth round, starting with round 0
#[derive(Clone, Copy, Debug, Default)]
pub struct Grofman;

impl Strategy for Grofman {
    fn next_move(&mut self, round: u32, _opponent_history: &[Move], _rng: &mut SeededRng) -> Move {
        if round % 5 == 0 {
            Move::Defect
        } else {
            Move::Cooperate
        }
    }

    fn name(&self) -> &'static str {
        "Grofman"
    }
}

/// Shubik: Punishes each observed defection with two rounds of defection
#[derive(Clone, Copy, Debug, Default)]
pub struct Shubik {
    punishment: u32,
}

impl Strategy for Shubik {
    fn next_move(&mut self, round: u32, opponent_history: &[Move], _rng: &mut SeededRng) -> Move {
        if opening(round, opponent_history) {
            self.punishment = 0;
            return Move::Cooperate;
        }
        if self.punishment > 0 {
            self.punishment -= 1;
            return Move::Defect;
        }
        if mirror(opponent_history) == Move::Defect {
            // this round plus one more
            self.punishment = 1;
            return Move::Defect;
        }
        Move::Cooperate
    }

    fn name(&self) -> &'static str {
        "Shubik"
    }
}

/// Stein & Rapoport: Tit-for-Tat with a 20% chance to forgive a defection
#[derive(Clone, Copy, Debug, Default)]
pub struct SteinRapoport;

impl SteinRapoport {
    const FORGIVENESS: f64 = 0.2;
}

impl Strategy for SteinRapoport {
    fn next_move(&mut self, round: u32, opponent_history: &[Move], rng: &mut SeededRng) -> Move {
        if opening(round, opponent_history) {
            return Move::Cooperate;
        }
        match mirror(opponent_history) {
            Move::Defect if rng.chance(Self::FORGIVENESS) => Move::Cooperate,
            last => last,
        }
    }

    fn name(&self) -> &'static str {
        "Stein & Rapoport"
    }
}

/// Friedman: Grim trigger, defects forever after the first betrayal
#[derive(Clone, Copy, Debug, Default)]
pub struct Friedman {
    triggered: bool,
}

impl Strategy for Friedman {
    fn next_move(&mut self, round: u32, opponent_history: &[Move], _rng: &mut SeededRng) -> Move {
        if opening(round, opponent_history) {
            self.triggered = false;
            return Move::Cooperate;
        }
        if self.triggered {
            return Move::Defect;
        }
        if mirror(opponent_history) == Move::Defect {
            self.triggered = true;
            return Move::Defect;
        }
        Move::Cooperate
    }

    fn name(&self) -> &'static str {
        "Friedman"
    }
}

/// Davis: Cooperates for the first ten rounds, then plays Tit-for-Tat
#[derive(Clone, Copy, Debug, Default)]
pub struct Davis;

impl Davis {
    const GRACE_ROUNDS: u32 = 10;
}

impl Strategy for Davis {
    fn next_move(&mut self, round: u32, opponent_history: &[Move], _rng: &mut SeededRng) -> Move {
        if round < Self::GRACE_ROUNDS {
            return Move::Cooperate;
        }
        mirror(opponent_history)
    }

    fn name(&self) -> &'static str {
        "Davis"
    }
}

/// Graaskamp: Defects while the opponent's overall defection rate is above half
#[derive(Clone, Copy, Debug, Default)]
pub struct Graaskamp;

impl Strategy for Graaskamp {
    fn next_move(&mut self, round: u32, opponent_history: &[Move], _rng: &mut SeededRng) -> Move {
        if opening(round, opponent_history) {
            return Move::Cooperate;
        }
        let defects = opponent_history.iter().filter(|m| m.is_defect()).count();
        let proportion = defects as f64 / opponent_history.len() as f64;
        if proportion > 0.5 {
            Move::Defect
        } else {
            Move::Cooperate
        }
    }

    fn name(&self) -> &'static str {
        "Graaskamp"
    }
}

/// Downing: Tallies the opponent's moves and cooperates while cooperation leads
#[derive(Clone, Copy, Debug, Default)]
pub struct Downing {
    cooperations: u32,
    defections: u32,
}

impl Strategy for Downing {
    fn next_move(&mut self, round: u32, opponent_history: &[Move], _rng: &mut SeededRng) -> Move {
        if opening(round, opponent_history) {
            self.cooperations = 0;
            self.defections = 0;
            return Move::Cooperate;
        }
        match mirror(opponent_history) {
            Move::Cooperate => self.cooperations += 1,
            Move::Defect => self.defections += 1,
        }
        if self.cooperations > self.defections {
            Move::Cooperate
        } else {
            Move::Defect
        }
    }

    fn name(&self) -> &'static str {
        "Downing"
    }
}

/// Feld: Defection probability grows linearly, reaching certainty at round 200
#[derive(Clone, Copy, Debug, Default)]
pub struct Feld;

impl Feld {
    const HORIZON: f64 = 200.0;

    pub fn defect_probability(round: u32) -> f64 {
        (round as f64 / Self::HORIZON).min(1.0)
    }
}

impl Strategy for Feld {
    fn next_move(&mut self, round: u32, _opponent_history: &[Move], rng: &mut SeededRng) -> Move {
        if rng.chance(Self::defect_probability(round)) {
            Move::Defect
        } else {
            Move::Cooperate
        }
    }

    fn name(&self) -> &'static str {
        "Feld"
    }
}

/// Joss: Tit-for-Tat that sneaks in a defection 10% of the time
#[derive(Clone, Copy, Debug, Default)]
pub struct Joss;

impl Strategy for Joss {
    fn next_move(&mut self, round: u32, opponent_history: &[Move], rng: &mut SeededRng) -> Move {
        if opening(round, opponent_history) {
            return Move::Cooperate;
        }
        if rng.chance(0.1) {
            return Move::Defect;
        }
        mirror(opponent_history)
    }

    fn name(&self) -> &'static str {
        "Joss"
    }
}

/// Tullock: Cooperates, testing the opponent with a 5% chance of defection
#[derive(Clone, Copy, Debug, Default)]
pub struct Tullock;

impl Strategy for Tullock {
    fn next_move(&mut self, _round: u32, _opponent_history: &[Move], rng: &mut SeededRng) -> Move {
        if rng.chance(0.05) {
            Move::Defect
        } else {
            Move::Cooperate
        }
    }

    fn name(&self) -> &'static str {
        "Tullock"
    }
}

/// Name Withheld: Tit-for-Tat with a 5% chance of defection
#[derive(Clone, Copy, Debug, Default)]
pub struct NameWithheld;

impl Strategy for NameWithheld {
    fn next_move(&mut self, round: u32, opponent_history: &[Move], rng: &mut SeededRng) -> Move {
        if opening(round, opponent_history) {
            return Move::Cooperate;
        }
        if rng.chance(0.05) {
            return Move::Defect;
        }
        mirror(opponent_history)
    }

    fn name(&self) -> &'static str {
        "Name Withheld"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::Move::{Cooperate as C, Defect as D};

    fn make_rng() -> SeededRng {
        SeededRng::new(42, 0)
    }

    /// Feed a fixed opponent sequence through a strategy, round by round
    fn replay<S: Strategy>(strategy: &mut S, opponent: &[Move]) -> Vec<Move> {
        let mut rng = make_rng();
        (0..=opponent.len())
            .map(|round| strategy.next_move(round as u32, &opponent[..round], &mut rng))
            .collect()
    }

    #[test]
    fn test_tit_for_tat_first_move() {
        let mut rng = make_rng();
        assert_eq!(TitForTat.next_move(0, &[], &mut rng), C);
    }

    #[test]
    fn test_tit_for_tat_copies() {
        let mut rng = make_rng();
        assert_eq!(TitForTat.next_move(1, &[C], &mut rng), C);
        assert_eq!(TitForTat.next_move(1, &[D], &mut rng), D);
        assert_eq!(TitForTat.next_move(3, &[D, D, C], &mut rng), C);
    }

    #[test]
    fn test_tideman_chieruzzi_forgives_sparse_defection() {
        let mut rng = make_rng();
        // window [C, C, C, C, D]: 1 defect < 5/2 = 2
        assert_eq!(TidemanChieruzzi.next_move(5, &[C, C, C, C, D], &mut rng), C);
        // window [C, C, C, D, D]: 2 defects, not < 2
        assert_eq!(TidemanChieruzzi.next_move(5, &[C, C, C, D, D], &mut rng), D);
    }

    #[test]
    fn test_tideman_chieruzzi_integer_division() {
        let mut rng = make_rng();
        // window of 1: 1 < 0 is false
        assert_eq!(TidemanChieruzzi.next_move(1, &[D], &mut rng), D);
        // window of 3: 1 < 1 is false
        assert_eq!(TidemanChieruzzi.next_move(3, &[C, C, D], &mut rng), D);
        // window of 4: 1 < 2 forgives
        assert_eq!(TidemanChieruzzi.next_move(4, &[C, C, C, D], &mut rng), C);
    }

    #[test]
    fn test_tideman_chieruzzi_only_looks_at_last_five() {
        let mut rng = make_rng();
        let history = [D, D, D, D, D, C, C, C, C, D];
        assert_eq!(TidemanChieruzzi.next_move(10, &history, &mut rng), C);
    }

    #[test]
    fn test_nydegger_opening_sequence() {
        let moves = replay(&mut Nydegger, &[C, C, C]);
        assert_eq!(moves, vec![C, D, C, C]);
    }

    #[test]
    fn test_nydegger_punishes_probe_response() {
        let moves = replay(&mut Nydegger, &[C, D, C, C, D]);
        // round 3 defects because of round 1, then mirrors
        assert_eq!(moves, vec![C, D, C, D, C, D]);
    }

    #[test]
    fn test_nydegger_short_history_at_round_three() {
        let mut rng = make_rng();
        assert_eq!(Nydegger.next_move(3, &[], &mut rng), C);
    }

    #[test]
    fn test_grofman_every_fifth_round() {
        let mut rng = make_rng();
        for round in 0..20u32 {
            let expected = if round % 5 == 0 { D } else { C };
            assert_eq!(Grofman.next_move(round, &[D; 20][..round as usize], &mut rng), expected);
        }
    }

    #[test]
    fn test_shubik_punishes_twice() {
        let mut shubik = Shubik::default();
        let moves = replay(&mut shubik, &[C, D, C, C, C]);
        assert_eq!(moves, vec![C, C, D, D, C, C]);
    }

    #[test]
    fn test_shubik_resets_on_round_zero() {
        let mut shubik = Shubik::default();
        let mut rng = make_rng();
        assert_eq!(shubik.next_move(1, &[D], &mut rng), D);
        assert_eq!(shubik.punishment, 1);

        assert_eq!(shubik.next_move(0, &[], &mut rng), C);
        assert_eq!(shubik.punishment, 0);
    }

    #[test]
    fn test_stein_rapoport_mirrors_cooperation() {
        let mut rng = make_rng();
        for _ in 0..100 {
            assert_eq!(SteinRapoport.next_move(1, &[C], &mut rng), C);
        }
    }

    #[test]
    fn test_stein_rapoport_forgives_sometimes() {
        let mut rng = make_rng();
        let samples = 5000;
        let forgiven = (0..samples)
            .filter(|_| SteinRapoport.next_move(1, &[D], &mut rng) == C)
            .count();
        let rate = forgiven as f64 / samples as f64;
        assert!(rate > 0.15 && rate < 0.25, "forgiveness rate {} not ~0.2", rate);
    }

    #[test]
    fn test_friedman_triggers_forever() {
        let mut friedman = Friedman::default();
        let moves = replay(&mut friedman, &[C, D, C, C, C]);
        assert_eq!(moves, vec![C, C, D, D, D, D]);
    }

    #[test]
    fn test_friedman_resets_on_round_zero() {
        let mut friedman = Friedman::default();
        let mut rng = make_rng();
        friedman.next_move(1, &[D], &mut rng);
        assert!(friedman.triggered);
        assert_eq!(friedman.next_move(0, &[], &mut rng), C);
        assert!(!friedman.triggered);
    }

    #[test]
    fn test_davis_grace_period() {
        let opponent = [D; 12];
        let moves = replay(&mut Davis, &opponent);
        assert!(moves[..10].iter().all(|m| *m == C));
        assert!(moves[10..].iter().all(|m| *m == D));
    }

    #[test]
    fn test_davis_empty_history_after_grace() {
        let mut rng = make_rng();
        assert_eq!(Davis.next_move(15, &[], &mut rng), C);
    }

    #[test]
    fn test_graaskamp_majority_rule() {
        let mut rng = make_rng();
        assert_eq!(Graaskamp.next_move(2, &[C, D], &mut rng), C); // exactly half
        assert_eq!(Graaskamp.next_move(3, &[D, C, D], &mut rng), D);
        assert_eq!(Graaskamp.next_move(3, &[D, C, C], &mut rng), C);
    }

    #[test]
    fn test_downing_tallies() {
        let mut downing = Downing::default();
        let moves = replay(&mut downing, &[C, D, D, C, C]);
        // tallies after each observation: 1-0, 1-1, 1-2, 2-2, 3-2
        assert_eq!(moves, vec![C, C, D, D, D, C]);
    }

    #[test]
    fn test_feld_probability_curve() {
        assert_eq!(Feld::defect_probability(0), 0.0);
        assert_eq!(Feld::defect_probability(100), 0.5);
        assert_eq!(Feld::defect_probability(200), 1.0);
        assert_eq!(Feld::defect_probability(5000), 1.0);

        let mut rng = make_rng();
        for _ in 0..100 {
            assert_eq!(Feld.next_move(0, &[], &mut rng), C);
            assert_eq!(Feld.next_move(250, &[], &mut rng), D);
        }
    }

    #[test]
    fn test_joss_mostly_mirrors() {
        let mut rng = make_rng();
        assert_eq!(Joss.next_move(0, &[], &mut rng), C);
        for _ in 0..100 {
            assert_eq!(Joss.next_move(1, &[D], &mut rng), D);
        }
        let samples = 5000;
        let sneaky = (0..samples)
            .filter(|_| Joss.next_move(1, &[C], &mut rng) == D)
            .count();
        let rate = sneaky as f64 / samples as f64;
        assert!(rate > 0.07 && rate < 0.13, "Joss defect rate {} not ~0.1", rate);
    }

    #[test]
    fn test_tullock_rarely_defects() {
        let mut rng = make_rng();
        let samples = 10_000;
        let defects = (0..samples)
            .filter(|_| Tullock.next_move(0, &[], &mut rng) == D)
            .count();
        let rate = defects as f64 / samples as f64;
        assert!(rate > 0.035 && rate < 0.065, "Tullock defect rate {} not ~0.05", rate);
    }

    #[test]
    fn test_name_withheld_mirrors_defection() {
        let mut rng = make_rng();
        assert_eq!(NameWithheld.next_move(0, &[], &mut rng), C);
        for _ in 0..100 {
            assert_eq!(NameWithheld.next_move(2, &[C, D], &mut rng), D);
        }
    }

    #[test]
    fn test_random_uses_both_moves() {
        let mut rng = make_rng();
        let moves: Vec<_> = (0..100).map(|r| Random.next_move(r, &[], &mut rng)).collect();
        assert!(moves.contains(&C));
        assert!(moves.contains(&D));
    }
}
