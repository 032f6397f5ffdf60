//! Random Move Dots-and-Boxes Engine
//!
//! A simple engine that draws a uniformly random empty edge.
//! Useful for:
//! - Testing the game driver and match runner without waiting on search
//! - Baseline comparisons (the alpha-beta engine should easily beat this)

use dots_core::{Board, Engine, Player, SearchLimits, SearchResult, legal_moves_into};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tracing::trace;


/// An engine that plays random empty edges.
///
/// This engine provides no evaluation. Seeding it makes a game reproducible.
#[derive(Debug, Clone)]
pub struct RandomEngine {
    nodes: u64,
    rng: StdRng,
    moves: Vec<dots_core::Move>,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Deterministic engine: the same seed replays the same choices.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            nodes: 0,
            rng,
            moves: Vec::new(),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn search(&mut self, board: &mut Board, to_move: Player, _limits: SearchLimits) -> SearchResult {
        legal_moves_into(board, to_move, &mut self.moves);
        self.nodes = 1;

        let best_move = self.moves.choose(&mut self.rng).copied();
        trace!(choices = self.moves.len(), ?best_move, "random pick");

        SearchResult {
            best_move,
            score: board.score_diff(),
            depth: 0,
            nodes: self.nodes,
            stopped: false,
            exhaustive: best_move.is_none(),
        }
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}
