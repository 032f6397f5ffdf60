//! Static evaluation used at the depth limit.

use dots_core::Board;

/// Current cell differential, A minus B.
///
/// Unclaimed cells are worth nothing; the search only ever compares this
/// value against other positions reached at the same iteration depth.
pub fn evaluate(board: &Board) -> i32 {
    board.score_diff()
}
