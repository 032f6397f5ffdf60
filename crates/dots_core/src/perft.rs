use crate::{board::Board, movegen::legal_moves_into, types::*};

/// Pure perft node count.
/// Counts all move sequences of length `depth` from the current board, with
/// `to_move` on turn and the extra-turn rule deciding who plays each ply.
/// Sequences that finish the board early count as one leaf.
pub fn perft(board: &mut Board, to_move: Player, depth: u8) -> u64 {
    if depth == 0 || board.is_complete() {
        return 1;
    }

    fn inner(board: &mut Board, to_move: Player, depth: u8, layers: &mut [Vec<Move>]) -> u64 {
        if depth == 0 || board.is_complete() {
            return 1;
        }

        let Some((buf, rest)) = layers.split_first_mut() else {
            return 1;
        };

        legal_moves_into(board, to_move, buf);

        let mut nodes = 0u64;
        for mv in buf.iter().copied() {
            let Ok(applied) = board.apply(mv) else {
                continue;
            };
            let next = if applied.extra_turn() {
                to_move
            } else {
                to_move.other()
            };
            nodes += inner(board, next, depth - 1, rest);
            // Restores the edge we just drew; cannot fail.
            let _ = board.undo(mv, applied);
        }
        nodes
    }

    let mut layers = vec![Vec::with_capacity(board.total_edges()); depth as usize];
    inner(board, to_move, depth, &mut layers[..])
}
