//! Minimax search with alpha-beta pruning and extra turns
//!
//! Player A is the maximizer and player B the minimizer of the board's
//! A-minus-B score differential. A move that completes a cell keeps the same
//! role on turn at the same depth; any other move hands the turn over and
//! goes one level deeper.
//!
//! Every trial move is applied to the caller's board and undone before the
//! child result is inspected, so the board is intact on every return path,
//! including deadline aborts.

use dots_core::{Board, Move, Orientation, Player, SearchLimits, TimeControl, edge_slots};
use tracing::debug;

use crate::eval::evaluate;
use crate::transposition::{Bound, Entry, Probe, TranspositionTable};

/// Larger than any reachable score differential.
pub const INFINITY: i32 = i32::MAX / 2;

/// What a node learned about its subtree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchValue {
    /// Every explored line reached a finished board.
    Value(i32),
    /// At least one explored line was cut off by the depth limit and scored
    /// heuristically.
    DepthLimited(i32),
    /// The deadline passed before the subtree was explored. Carries no score.
    Aborted,
}

impl SearchValue {
    pub fn from_parts(score: i32, depth_limited: bool) -> Self {
        if depth_limited {
            SearchValue::DepthLimited(score)
        } else {
            SearchValue::Value(score)
        }
    }

    pub fn score(self) -> Option<i32> {
        match self {
            SearchValue::Value(s) | SearchValue::DepthLimited(s) => Some(s),
            SearchValue::Aborted => None,
        }
    }

    pub fn is_exact(self) -> bool {
        matches!(self, SearchValue::Value(_))
    }
}

/// One depth-limited pass over the tree.
///
/// Holds the per-iteration state: the depth limit, the table and the node
/// counter shared by the two mutually recursive routines.
pub struct Searcher<'a> {
    tc: &'a TimeControl,
    tt: &'a mut TranspositionTable,
    /// Every in-bounds edge slot, in enumeration order.
    slots: &'a [(Orientation, usize, usize)],
    depth_limit: u32,
    /// Nodes entered by earlier iterations of the same search.
    base_nodes: u64,
    nodes: u64,
    hit_depth_limit: bool,
}

impl<'a> Searcher<'a> {
    pub fn new(
        tc: &'a TimeControl,
        tt: &'a mut TranspositionTable,
        slots: &'a [(Orientation, usize, usize)],
        depth_limit: u32,
    ) -> Self {
        Self {
            tc,
            tt,
            slots,
            depth_limit,
            base_nodes: 0,
            nodes: 0,
            hit_depth_limit: false,
        }
    }

    /// Continue the clock-check cadence and node budget from `nodes`.
    pub fn with_node_base(mut self, nodes: u64) -> Self {
        self.base_nodes = nodes;
        self
    }

    /// Nodes entered by this pass.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Whether any node in this pass was scored at the depth limit.
    pub fn hit_depth_limit(&self) -> bool {
        self.hit_depth_limit
    }

    /// Searches for `to_move` with a full window.
    pub fn search_root(&mut self, board: &mut Board, to_move: Player) -> (Option<Move>, SearchValue) {
        match to_move {
            Player::A => self.search_max(board, -INFINITY, INFINITY, 0),
            Player::B => self.search_min(board, -INFINITY, INFINITY, 0),
        }
    }

    fn out_of_time(&mut self) -> bool {
        if self.tc.is_stopped() {
            return true;
        }
        let total = self.base_nodes + self.nodes;
        self.nodes += 1;
        self.tc.check_nodes(total) || (self.tc.should_check_time(total) && self.tc.check_time())
    }

    /// Steps 1-4 shared by both roles. `Err` carries the node's answer.
    fn enter(
        &mut self,
        board: &Board,
        player: Player,
        alpha: &mut i32,
        beta: &mut i32,
        depth: u32,
    ) -> Result<bool, SearchValue> {
        if board.is_complete() {
            return Err(SearchValue::Value(board.score_diff()));
        }
        if self.out_of_time() {
            return Err(SearchValue::Aborted);
        }
        let mut depth_limited = false;
        match self
            .tt
            .probe(board.fingerprint(player), depth, alpha, beta)
        {
            Probe::Hit(value) => return Err(value),
            Probe::Narrowed { depth_limited: d } => depth_limited = d,
            Probe::Miss => {}
        }
        if depth > self.depth_limit {
            self.hit_depth_limit = true;
            return Err(SearchValue::DepthLimited(evaluate(board)));
        }
        Ok(depth_limited)
    }

    fn remember(
        &mut self,
        board: &Board,
        player: Player,
        depth: u32,
        value: i32,
        (alpha, beta): (i32, i32),
        depth_limited: bool,
    ) {
        let entry = Entry {
            value,
            bound: Bound::classify(value, alpha, beta),
            depth_limited,
        };
        self.tt.store(board.fingerprint(player), depth, entry);
    }

    /// Maximizer: player A to move.
    pub fn search_max(
        &mut self,
        board: &mut Board,
        mut alpha: i32,
        mut beta: i32,
        depth: u32,
    ) -> (Option<Move>, SearchValue) {
        let window = (alpha, beta);
        let mut depth_limited = match self.enter(board, Player::A, &mut alpha, &mut beta, depth) {
            Ok(d) => d,
            Err(value) => return (None, value),
        };

        let mut best_move = None;
        let mut best = -INFINITY;

        for i in 0..self.slots.len() {
            let (orientation, row, col) = self.slots[i];
            let mv = Move::new(Player::A, orientation, row, col);
            let Ok(applied) = board.apply(mv) else {
                continue;
            };
            let (_, child) = if applied.extra_turn() {
                self.search_max(board, alpha, beta, depth)
            } else {
                self.search_min(board, alpha, beta, depth + 1)
            };
            let undone = board.undo(mv, applied);
            debug_assert!(undone.is_ok(), "undo after apply failed: {undone:?}");

            let value = match child {
                SearchValue::Aborted => return (best_move, SearchValue::Aborted),
                SearchValue::Value(v) => v,
                SearchValue::DepthLimited(v) => {
                    depth_limited = true;
                    v
                }
            };

            if value > best {
                best = value;
                best_move = Some(mv);
            }
            if best >= beta {
                break;
            }
            alpha = alpha.max(best);
        }

        self.remember(board, Player::A, depth, best, window, depth_limited);
        (best_move, SearchValue::from_parts(best, depth_limited))
    }

    /// Minimizer: player B to move.
    pub fn search_min(
        &mut self,
        board: &mut Board,
        mut alpha: i32,
        mut beta: i32,
        depth: u32,
    ) -> (Option<Move>, SearchValue) {
        let window = (alpha, beta);
        let mut depth_limited = match self.enter(board, Player::B, &mut alpha, &mut beta, depth) {
            Ok(d) => d,
            Err(value) => return (None, value),
        };

        let mut best_move = None;
        let mut best = INFINITY;

        for i in 0..self.slots.len() {
            let (orientation, row, col) = self.slots[i];
            let mv = Move::new(Player::B, orientation, row, col);
            let Ok(applied) = board.apply(mv) else {
                continue;
            };
            let (_, child) = if applied.extra_turn() {
                self.search_min(board, alpha, beta, depth)
            } else {
                self.search_max(board, alpha, beta, depth + 1)
            };
            let undone = board.undo(mv, applied);
            debug_assert!(undone.is_ok(), "undo after apply failed: {undone:?}");

            let value = match child {
                SearchValue::Aborted => return (best_move, SearchValue::Aborted),
                SearchValue::Value(v) => v,
                SearchValue::DepthLimited(v) => {
                    depth_limited = true;
                    v
                }
            };

            if value < best {
                best = value;
                best_move = Some(mv);
            }
            if best <= alpha {
                break;
            }
            beta = beta.min(best);
        }

        self.remember(board, Player::B, depth, best, window, depth_limited);
        (best_move, SearchValue::from_parts(best, depth_limited))
    }
}

/// Result of the iterative-deepening driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Best move from the last finished iteration (None if none finished and
    /// the aborted one had not fully searched any root move)
    pub best_move: Option<Move>,
    /// Score of `best_move`, A minus B
    pub score: i32,
    /// Depth limit of the last finished iteration
    pub depth: u32,
    /// True if search was stopped early due to time
    pub stopped: bool,
    /// True if `score` is the solved game value
    pub exhaustive: bool,
}

/// Runs depth limits 0, 1, 2, ... until the root value is exact, the deadline
/// passes or `limits.max_depth` is reached.
///
/// # Arguments
/// * `board` - The board to search, restored before returning
/// * `to_move` - Player whose move is being chosen
/// * `limits` - Depth cap and time control (already started)
/// * `tt` - Table reused across calls, cleared before every iteration
/// * `nodes` - Counter for nodes searched (for statistics)
pub fn iterative_deepening(
    board: &mut Board,
    to_move: Player,
    limits: &SearchLimits,
    tt: &mut TranspositionTable,
    nodes: &mut u64,
) -> SearchOutcome {
    let slots: Vec<_> = edge_slots(board.rows(), board.cols()).collect();
    let mut outcome = SearchOutcome {
        best_move: None,
        score: board.score_diff(),
        depth: 0,
        stopped: false,
        exhaustive: board.is_complete(),
    };
    if outcome.exhaustive {
        return outcome;
    }

    let mut finished_any = false;
    for depth_limit in 0.. {
        if let Some(max) = limits.max_depth
            && depth_limit > max
        {
            break;
        }

        tt.clear();
        let mut searcher =
            Searcher::new(&limits.time_control, tt, &slots, depth_limit).with_node_base(*nodes);
        let (mv, value) = searcher.search_root(board, to_move);
        *nodes += searcher.nodes();

        match value {
            SearchValue::Aborted => {
                debug!(depth_limit, "search aborted by deadline");
                outcome.stopped = true;
                if !finished_any {
                    outcome.best_move = mv;
                }
                break;
            }
            SearchValue::Value(score) | SearchValue::DepthLimited(score) => {
                finished_any = true;
                outcome.best_move = mv;
                outcome.score = score;
                outcome.depth = depth_limit;
                outcome.exhaustive = value.is_exact();
                debug!(
                    depth_limit,
                    score,
                    exact = outcome.exhaustive,
                    nodes = *nodes,
                    table = tt.len(),
                    "iteration finished"
                );
                if outcome.exhaustive {
                    break;
                }
            }
        }
    }

    outcome
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
