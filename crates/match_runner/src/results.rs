//! Match results storage and reporting

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::match_runner::MatchConfig;

/// Result of a single game
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameResult {
    Win,
    Loss,
    Draw,
}

/// One finished game, from engine 1's point of view
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameRecord {
    /// Engine 1 played A and drew the first edge
    pub engine1_first: bool,
    pub engine1_cells: usize,
    pub engine2_cells: usize,
    /// Edges drawn, equal to the board's edge count
    pub moves: u32,
}

impl GameRecord {
    pub fn result(&self) -> GameResult {
        match self.engine1_cells.cmp(&self.engine2_cells) {
            std::cmp::Ordering::Greater => GameResult::Win,
            std::cmp::Ordering::Less => GameResult::Loss,
            std::cmp::Ordering::Equal => GameResult::Draw,
        }
    }
}

/// Result of a match (multiple games)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MatchResult {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    /// Cells won by engine 1 across all games
    pub cells_won: usize,
    /// Cells won by engine 2 across all games
    pub cells_lost: usize,
    pub games: Vec<GameRecord>,
}

impl MatchResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, game: GameRecord) {
        match game.result() {
            GameResult::Win => self.wins += 1,
            GameResult::Loss => self.losses += 1,
            GameResult::Draw => self.draws += 1,
        }
        self.cells_won += game.engine1_cells;
        self.cells_lost += game.engine2_cells;
        self.games.push(game);
    }

    pub fn total_games(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    /// Score from engine1's perspective (1 for win, 0.5 for draw, 0 for loss)
    pub fn score(&self) -> f64 {
        let total = self.total_games() as f64;
        if total == 0.0 {
            return 0.5;
        }
        (self.wins as f64 + 0.5 * self.draws as f64) / total
    }
}

/// Complete match report
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchReport {
    pub engine1: String,
    pub engine2: String,
    /// Configuration used
    pub config: MatchConfig,
    pub result: MatchResult,
}

impl MatchReport {
    pub fn new(engine1: &str, engine2: &str, config: MatchConfig, result: MatchResult) -> Self {
        Self {
            engine1: engine1.to_string(),
            engine2: engine2.to_string(),
            config,
            result,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Save report to JSON file
    pub fn save(&self, path: &Path) -> Result<(), String> {
        let json = self
            .to_json()
            .map_err(|e| format!("Failed to serialize: {}", e))?;
        std::fs::write(path, json).map_err(|e| format!("Failed to write: {}", e))
    }

    /// Load report from JSON file
    pub fn load(path: &Path) -> Result<Self, String> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| format!("Failed to read: {}", e))?;
        serde_json::from_str(&contents).map_err(|e| format!("Failed to parse: {}", e))
    }

    /// Generate a text report
    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        report.push_str(&format!(
            "=== Match: {} vs {} ===\n\n",
            self.engine1, self.engine2
        ));
        let think = match self.config.time_per_move {
            Some(time) => format!("{} ms/move", time.as_millis()),
            None => "no time limit".to_string(),
        };
        let depth = match self.config.max_depth {
            Some(depth) => format!("depth <= {}", depth),
            None => "depth unlimited".to_string(),
        };
        report.push_str(&format!(
            "Config: {} games, {}x{} board, {}, {}\n\n",
            self.config.games, self.config.rows, self.config.cols, think, depth
        ));

        report.push_str(&format!(
            "{:<6} {:<6} {:>8} {:>8}\n",
            "Game", "First", "Engine 1", "Engine 2"
        ));
        report.push_str(&"-".repeat(32));
        report.push('\n');
        for (i, game) in self.result.games.iter().enumerate() {
            let first = if game.engine1_first { "1" } else { "2" };
            report.push_str(&format!(
                "{:<6} {:<6} {:>8} {:>8}\n",
                i + 1,
                first,
                game.engine1_cells,
                game.engine2_cells
            ));
        }

        report.push_str(&format!(
            "\nResult: {}-{}-{} (W-L-D), cells {}:{}, score {:.3}\n",
            self.result.wins,
            self.result.losses,
            self.result.draws,
            self.result.cells_won,
            self.result.cells_lost,
            self.result.score()
        ));
        report
    }

    /// Print report to stdout
    pub fn print_report(&self) {
        println!("{}", self.generate_report());
    }
}
