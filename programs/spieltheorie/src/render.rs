//! Plain-text rendering of engine results

use match_logic::{MatchResult, Move, RoundResult, StrategyKind, TournamentResult};

pub fn symbol(m: Move) -> &'static str {
    match m {
        Move::Cooperate => "✅",
        Move::Defect => "❌",
    }
}

pub fn match_header(name_a: &str, name_b: &str) -> String {
    format!("{:>6}  {:<20} {:<20} {:>8} {:>8}", "Round", name_a, name_b, "Score A", "Score B")
}

/// One table row; rounds are shown 1-based
pub fn round_line(round: &RoundResult) -> String {
    format!(
        "{:>6}  {:<20} {:<20} {:>8} {:>8}",
        round.round + 1,
        symbol(round.move_a),
        symbol(round.move_b),
        round.cumulative_a,
        round.cumulative_b
    )
}

pub fn match_summary(result: &MatchResult) -> String {
    let mut out = String::from("Final result:\n");
    out.push_str(&format!("{}: {} points\n", result.name_a, result.total_score_a));
    out.push_str(&format!("{}: {} points\n", result.name_b, result.total_score_b));
    match result.winner() {
        Some(name) => out.push_str(&format!("Winner: {}!\n", name)),
        None => out.push_str("Draw!\n"),
    }
    out
}

pub fn standings(results: &[TournamentResult]) -> String {
    let mut out = String::from("Final standings (by total score):\n");
    out.push_str("------------------------------------------\n");
    for (i, result) in results.iter().enumerate() {
        out.push_str(&format!("{}. {}: {} points\n", i + 1, result.name, result.total_score));
    }
    out
}

fn traits(kind: StrategyKind) -> &'static str {
    match (kind.is_randomized(), kind.is_stateful()) {
        (true, true) => "random,stateful",
        (true, false) => "random",
        (false, true) => "stateful",
        (false, false) => "",
    }
}

pub fn catalogue() -> String {
    StrategyKind::ALL
        .iter()
        .map(|kind| {
            format!(
                "{:<22} {:<18} {:<9} {}",
                kind.name(),
                kind.id(),
                traits(*kind),
                kind.description()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use match_logic::play_match;

    #[test]
    fn test_round_line_is_one_based() {
        let round = RoundResult {
            round: 0,
            move_a: Move::Cooperate,
            move_b: Move::Defect,
            score_a: 0,
            score_b: 10,
            cumulative_a: 0,
            cumulative_b: 10,
        };
        let line = round_line(&round);
        assert!(line.trim_start().starts_with("1 "));
        assert!(line.contains("✅"));
        assert!(line.contains("❌"));
        assert!(line.ends_with("10"));
    }

    #[test]
    fn test_summary_draw() {
        let result = play_match(StrategyKind::TitForTat, StrategyKind::Davis, 3, 0).unwrap();
        let text = match_summary(&result);
        assert!(text.contains("Tit-for-Tat: 21 points"));
        assert!(text.contains("Davis: 21 points"));
        assert!(text.ends_with("Draw!\n"));
    }

    #[test]
    fn test_summary_winner() {
        let result = play_match(StrategyKind::Grofman, StrategyKind::Davis, 3, 0).unwrap();
        assert!(match_summary(&result).contains("Winner: Grofman!"));
    }

    #[test]
    fn test_standings_are_numbered() {
        let results = vec![
            TournamentResult { name: "Friedman".into(), total_score: 442, matches_played: 6 },
            TournamentResult { name: "Grofman".into(), total_score: 262, matches_played: 6 },
        ];
        let text = standings(&results);
        assert!(text.contains("1. Friedman: 442 points"));
        assert!(text.contains("2. Grofman: 262 points"));
    }

    #[test]
    fn test_catalogue_lists_every_strategy() {
        let text = catalogue();
        assert_eq!(text.lines().count(), StrategyKind::ALL.len());
        assert!(text.contains("Name Withheld"));
    }

    #[test]
    fn test_catalogue_marks_traits() {
        let text = catalogue();
        let line = |name: &str| text.lines().find(|l| l.starts_with(name)).unwrap().to_string();
        assert!(line("Friedman").contains(" stateful "));
        assert!(line("Joss").contains(" random "));
        let tft = line("Tit-for-Tat");
        assert!(!tft.contains("stateful") && !tft.contains("random"));
    }
}
