pub mod board;
pub mod error;
pub mod movegen;
pub mod notation;
pub mod perft;
pub mod time_control;
pub mod types;
pub mod zobrist;

// Re-export core game logic (not engine-specific)
pub use board::*;
pub use error::{Error, InvalidMoveReason};
pub use movegen::*;
pub use notation::*;
pub use perft::perft;
pub use time_control::*;
pub use types::*;
pub use zobrist::ZobristKeys;

// =============================================================================
// Engine trait: implemented by all automated players (alpha-beta, random)
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// The best move found (None if the board is full or time ran out first)
    pub best_move: Option<Move>,
    /// Estimated final score differential (A minus B)
    pub score: i32,
    /// Deepest depth limit whose iteration finished
    pub depth: u32,
    /// Number of nodes searched (optional, for stats)
    pub nodes: u64,
    /// Whether search was stopped early due to time limit
    pub stopped: bool,
    /// Whether `score` is the exact game value (whole tree solved)
    pub exhaustive: bool,
}

impl SearchResult {
    /// Result for a board with nothing left to play.
    pub fn finished(board: &Board) -> Self {
        Self {
            best_move: None,
            score: board.score_diff(),
            depth: 0,
            nodes: 0,
            stopped: false,
            exhaustive: true,
        }
    }
}

/// Trait that all engines must implement.
///
/// Engines search the caller's board in place: every trial move is applied to
/// `board` and undone before returning, so the board must come back exactly
/// as it was passed in.
pub trait Engine: Send {
    /// Search the position with the given search limits.
    ///
    /// # Arguments
    /// * `board` - The current board, restored before returning
    /// * `to_move` - The player the engine is choosing a move for
    /// * `limits` - Search limits (depth, time, etc.)
    ///
    /// # Returns
    /// SearchResult containing best move, score, and statistics
    fn search(&mut self, board: &mut Board, to_move: Player, limits: SearchLimits) -> SearchResult;

    /// Returns the engine's name for reports
    fn name(&self) -> &str;

    /// Returns the engine's author
    fn author(&self) -> &str {
        "ML-dots"
    }

    /// Reset internal state for a new game
    fn new_game(&mut self) {}
}
