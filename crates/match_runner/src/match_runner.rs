//! Match runner for playing games between engines

use dots_core::{Applied, Board, Engine, Error, Move, Player, SearchLimits, first_legal_move};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::results::{GameRecord, GameResult, MatchResult};

/// Configuration for a match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Number of games to play
    pub games: u32,
    /// Board height in cells
    pub rows: usize,
    /// Board width in cells
    pub cols: usize,
    /// Maximum time per move (None = no limit)
    pub time_per_move: Option<Duration>,
    /// Depth cap for iterative deepening (None = until solved)
    pub max_depth: Option<u32>,
    /// Whether to alternate which engine moves first each game
    pub alternate_first: bool,
    /// Print progress during match
    pub verbose: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            games: 10,
            rows: 3,
            cols: 3,
            time_per_move: Some(Duration::from_secs(1)),
            max_depth: None,
            alternate_first: true,
            verbose: true,
        }
    }
}

impl MatchConfig {
    /// Create search limits based on this config
    pub fn search_limits(&self) -> SearchLimits {
        match (self.max_depth, self.time_per_move) {
            (Some(depth), Some(time)) => SearchLimits::depth_and_time(depth, time),
            (Some(depth), None) => SearchLimits::depth(depth),
            (None, Some(time)) => SearchLimits::time(time),
            (None, None) => SearchLimits::unlimited(),
        }
    }
}

/// Runs matches between two engines
pub struct MatchRunner {
    config: MatchConfig,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Run a match between two engines
    ///
    /// Returns the result from engine1's perspective. Fails only if the
    /// configured board dimensions are invalid.
    pub fn run_match(
        &self,
        engine1: &mut dyn Engine,
        engine2: &mut dyn Engine,
    ) -> Result<MatchResult, Error> {
        // Reject bad dimensions before any engine is touched.
        Board::new(self.config.rows, self.config.cols)?;

        let mut result = MatchResult::new();

        for game_num in 0..self.config.games {
            let engine1_first = !self.config.alternate_first || game_num % 2 == 0;

            let (cells1, cells2, moves) = if engine1_first {
                let (a, b, moves) = self.play_game(engine1, engine2)?;
                (a, b, moves)
            } else {
                let (a, b, moves) = self.play_game(engine2, engine1)?;
                (b, a, moves)
            };

            let record = GameRecord {
                engine1_first,
                engine1_cells: cells1,
                engine2_cells: cells2,
                moves,
            };
            result.record(record);

            info!(
                game = game_num + 1,
                engine1_first,
                engine1_cells = cells1,
                engine2_cells = cells2,
                "game finished"
            );

            if self.config.verbose {
                let first = if engine1_first { "1st" } else { "2nd" };
                let outcome = match record.result() {
                    GameResult::Win => "1-0",
                    GameResult::Loss => "0-1",
                    GameResult::Draw => "1/2",
                };
                println!(
                    "Game {}/{}: {} ({}) {}:{} - Score: {}-{}-{}",
                    game_num + 1,
                    self.config.games,
                    outcome,
                    first,
                    cells1,
                    cells2,
                    result.wins,
                    result.losses,
                    result.draws
                );
            }
        }

        Ok(result)
    }

    /// Play a single game until every edge is drawn.
    ///
    /// Returns (cells of the first engine, cells of the second, edges drawn).
    fn play_game(
        &self,
        first: &mut dyn Engine,
        second: &mut dyn Engine,
    ) -> Result<(usize, usize, u32), Error> {
        let mut board = Board::new(self.config.rows, self.config.cols)?;
        first.new_game();
        second.new_game();

        let mut to_move = Player::A;
        let mut moves = 0;

        while !board.is_complete() {
            // Create fresh search limits for each move (resets the clock)
            let limits = self.config.search_limits();

            let (result, name) = if to_move == Player::A {
                (first.search(&mut board, to_move, limits), first.name())
            } else {
                (second.search(&mut board, to_move, limits), second.name())
            };
            let Some((_, applied)) = commit_move(&mut board, to_move, result.best_move, name)? else {
                break;
            };
            moves += 1;

            debug!(
                player = %to_move,
                score = result.score,
                depth = result.depth,
                extra_turn = applied.extra_turn(),
                "move played"
            );

            if !applied.extra_turn() {
                to_move = to_move.other();
            }
        }

        Ok((board.owned_by(Player::A), board.owned_by(Player::B), moves))
    }
}

/// Applies the engine's move, falling back to the first empty edge when the
/// engine proposed nothing usable. `None` only once the board is complete.
pub fn commit_move(
    board: &mut Board,
    to_move: Player,
    proposed: Option<Move>,
    engine: &str,
) -> Result<Option<(Move, Applied)>, Error> {
    if let Some(mv) = proposed {
        let mv = mv.with_player(to_move);
        match board.apply(mv) {
            Ok(applied) => return Ok(Some((mv, applied))),
            Err(err) => warn!(engine, %err, "engine proposed an invalid move"),
        }
    } else {
        warn!(engine, "engine returned no move");
    }

    let Some(fallback) = first_legal_move(board, to_move) else {
        return Ok(None);
    };
    warn!(engine, mv = %fallback, "playing first empty edge instead");
    let applied = board.apply(fallback)?;
    Ok(Some((fallback, applied)))
}

/// Quick utility to run a single match
pub fn quick_match(
    engine1: &mut dyn Engine,
    engine2: &mut dyn Engine,
    games: u32,
    rows: usize,
    cols: usize,
) -> Result<MatchResult, Error> {
    let config = MatchConfig {
        games,
        rows,
        cols,
        verbose: false,
        ..Default::default()
    };
    let runner = MatchRunner::new(config);
    runner.run_match(engine1, engine2)
}

#[cfg(test)]
#[path = "match_runner_tests.rs"]
mod match_runner_tests;
