//! Alpha-Beta Dots-and-Boxes Engine
//!
//! Iterative-deepening minimax with alpha-beta pruning, extra turns and a
//! per-iteration transposition table.

mod eval;
mod search;
mod transposition;

use dots_core::{Board, Engine, Player, SearchLimits, SearchResult};
use tracing::info;

/// Dots-and-boxes engine using mirrored max/min alpha-beta search.
///
/// This engine uses:
/// - Iterative deepening until the tree is solved or the deadline passes
/// - Extra-turn handling (same role, same depth)
/// - Transposition table keyed by fingerprint and depth
/// - Time control support for move time limits
#[derive(Debug, Default)]
pub struct AlphaBetaEngine {
    /// Node counter for statistics
    nodes: u64,
    tt: TranspositionTable,
}

impl AlphaBetaEngine {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Engine for AlphaBetaEngine {
    fn search(&mut self, board: &mut Board, to_move: Player, limits: SearchLimits) -> SearchResult {
        self.nodes = 0;
        if board.is_complete() {
            return SearchResult::finished(board);
        }
        let mut limits = limits;
        limits.start();

        let outcome = iterative_deepening(board, to_move, &limits, &mut self.tt, &mut self.nodes);

        info!(
            player = %to_move,
            best_move = ?outcome.best_move,
            score = outcome.score,
            depth = outcome.depth,
            nodes = self.nodes,
            stopped = outcome.stopped,
            exhaustive = outcome.exhaustive,
            elapsed_ms = limits.time_control.elapsed().as_millis() as u64,
            "search finished"
        );

        SearchResult {
            best_move: outcome.best_move,
            score: outcome.score,
            depth: outcome.depth,
            nodes: self.nodes,
            stopped: outcome.stopped,
            exhaustive: outcome.exhaustive,
        }
    }

    fn name(&self) -> &str {
        "AlphaBeta v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
        self.tt.clear();
    }
}

// Re-export for direct use if needed
pub use eval::evaluate;
pub use search::{INFINITY, SearchOutcome, SearchValue, Searcher, iterative_deepening};
pub use transposition::{Bound, Entry, Probe, TranspositionTable};
