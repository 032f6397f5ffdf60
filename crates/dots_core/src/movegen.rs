use crate::{board::Board, types::*};

/// Generate all empty edges for `player`, returning a freshly allocated vector.
pub fn legal_moves(board: &Board, player: Player) -> Vec<Move> {
    let mut out = Vec::with_capacity(board.total_edges() - board.edges_placed());
    legal_moves_into(board, player, &mut out);
    out
}

/// Generate all empty edges into the provided buffer, reusing it across calls.
///
/// Order is fixed: orientation (vertical first), then row, then column. The
/// search relies on it to break ties between equally scored moves.
pub fn legal_moves_into(board: &Board, player: Player, out: &mut Vec<Move>) {
    out.clear();
    out.extend(
        edge_slots(board.rows(), board.cols())
            .filter(|&(o, r, c)| !board.has_edge(o, r, c))
            .map(|(o, r, c)| Move::new(player, o, r, c)),
    );
}

/// Every edge slot of a `rows x cols` board, drawn or not, in enumeration
/// order.
pub fn edge_slots(rows: usize, cols: usize) -> impl Iterator<Item = (Orientation, usize, usize)> {
    Orientation::ALL.into_iter().flat_map(move |orientation| {
        let (row_end, col_end) = match orientation {
            Orientation::Vertical => (rows, cols + 1),
            Orientation::Horizontal => (rows + 1, cols),
        };
        (0..row_end).flat_map(move |row| (0..col_end).map(move |col| (orientation, row, col)))
    })
}

/// First empty edge in enumeration order.
pub fn first_legal_move(board: &Board, player: Player) -> Option<Move> {
    edge_slots(board.rows(), board.cols())
        .find(|&(o, r, c)| !board.has_edge(o, r, c))
        .map(|(o, r, c)| Move::new(player, o, r, c))
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
