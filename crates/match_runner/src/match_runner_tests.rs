use super::*;
use crate::results::MatchReport;
use alpha_beta_engine::AlphaBetaEngine;
use dots_core::SearchResult;
use random_engine::RandomEngine;

/// Never proposes a move, so every edge comes from the runner's fallback.
struct SilentEngine;

impl Engine for SilentEngine {
    fn search(&mut self, _board: &mut Board, _to_move: Player, _limits: SearchLimits) -> SearchResult {
        SearchResult {
            best_move: None,
            score: 0,
            depth: 0,
            nodes: 0,
            stopped: true,
            exhaustive: false,
        }
    }

    fn name(&self) -> &str {
        "Silent"
    }
}

fn quiet(games: u32, rows: usize, cols: usize) -> MatchConfig {
    MatchConfig {
        games,
        rows,
        cols,
        time_per_move: None,
        max_depth: None,
        alternate_first: true,
        verbose: false,
    }
}

#[test]
fn test_self_play() {
    let mut engine1 = AlphaBetaEngine::new();
    let mut engine2 = AlphaBetaEngine::new();

    let config = MatchConfig {
        max_depth: Some(2),
        ..quiet(2, 2, 2)
    };

    let runner = MatchRunner::new(config);
    let result = runner.run_match(&mut engine1, &mut engine2).unwrap();

    assert_eq!(result.total_games(), 2);
    assert_eq!(result.cells_won + result.cells_lost, 2 * 4);
    for game in &result.games {
        assert_eq!(game.moves, 12);
    }
}

#[test]
fn test_second_player_always_wins_one_by_one() {
    // B draws the fourth edge of a 1x1 board no matter what.
    let mut solver = AlphaBetaEngine::new();
    let mut random = RandomEngine::with_seed(7);

    let runner = MatchRunner::new(quiet(2, 1, 1));
    let result = runner.run_match(&mut solver, &mut random).unwrap();

    assert_eq!(result.losses, 1);
    assert_eq!(result.wins, 1);
    assert!(result.games[0].engine1_first);
    assert_eq!(result.games[0].result(), GameResult::Loss);
    assert_eq!(result.games[1].result(), GameResult::Win);
}

#[test]
fn test_without_alternation_engine1_always_starts() {
    let mut a = RandomEngine::with_seed(1);
    let mut b = RandomEngine::with_seed(2);
    let config = MatchConfig {
        alternate_first: false,
        ..quiet(3, 2, 3)
    };
    let result = MatchRunner::new(config).run_match(&mut a, &mut b).unwrap();
    assert!(result.games.iter().all(|g| g.engine1_first));
    assert!(
        result
            .games
            .iter()
            .all(|g| g.engine1_cells + g.engine2_cells == 6)
    );
}

#[test]
fn test_engine_without_move_gets_fallback() {
    let mut silent = SilentEngine;
    let mut random = RandomEngine::with_seed(5);
    let result = quick_match(&mut silent, &mut random, 2, 2, 2).unwrap();
    assert_eq!(result.total_games(), 2);
    assert!(result.games.iter().all(|g| g.moves == 12));
}

#[test]
fn test_invalid_dimensions_fail_the_match() {
    let mut a = RandomEngine::with_seed(1);
    let mut b = RandomEngine::with_seed(2);
    let err = MatchRunner::new(quiet(1, 0, 3))
        .run_match(&mut a, &mut b)
        .unwrap_err();
    assert_eq!(err, Error::InvalidDimensions { rows: 0, cols: 3 });
}

#[test]
fn test_report_json_and_text() {
    let mut a = RandomEngine::with_seed(11);
    let mut b = RandomEngine::with_seed(12);
    let config = quiet(2, 1, 2);
    let result = MatchRunner::new(config.clone())
        .run_match(&mut a, &mut b)
        .unwrap();
    let report = MatchReport::new(a.name(), b.name(), config, result);

    let json = report.to_json().unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed["engine1"], "Random v1.0");
    assert_eq!(parsed["result"]["games"].as_array().unwrap().len(), 2);

    let back: MatchReport = serde_json::from_str(&json).unwrap();
    assert_eq!(back, report);

    let text = report.generate_report();
    assert!(text.contains("=== Match: Random v1.0 vs Random v1.0 ==="));
    assert!(text.contains("1x2 board"));
}
