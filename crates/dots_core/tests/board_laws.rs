//! Property tests for the board model
//!
//! - Apply/undo inverse law
//! - Completion criterion
//! - Score conservation
//! - Extra-turn correctness

use dots_core::{Board, Move, Player, legal_moves};
use proptest::prelude::*;

/// Plays `picks` as indices into the current legal move list, following the
/// extra-turn rule. Returns the board and the player to move next.
fn play_indices(rows: usize, cols: usize, picks: &[usize]) -> (Board, Player) {
    let mut board = Board::new(rows, cols).unwrap();
    let mut to_move = Player::A;
    for &pick in picks {
        let moves = legal_moves(&board, to_move);
        if moves.is_empty() {
            break;
        }
        let applied = board.apply(moves[pick % moves.len()]).unwrap();
        if !applied.extra_turn() {
            to_move = to_move.other();
        }
    }
    (board, to_move)
}

fn assert_conserved(board: &Board) {
    let a = board.owned_by(Player::A);
    let b = board.owned_by(Player::B);
    let unowned = (0..board.rows())
        .flat_map(|r| (0..board.cols()).map(move |c| (r, c)))
        .filter(|&(r, c)| board.owner(r, c).is_none())
        .count();
    assert_eq!(a + b + unowned, board.cells());
    assert_eq!(board.score_diff(), a as i32 - b as i32);
}

proptest! {
    #[test]
    fn apply_then_undo_is_identity(
        rows in 1usize..4,
        cols in 1usize..4,
        picks in prop::collection::vec(0usize..64, 0..20),
        probe in 0usize..64,
    ) {
        let (mut board, to_move) = play_indices(rows, cols, &picks);
        let moves = legal_moves(&board, to_move);
        prop_assume!(!moves.is_empty());

        let before = board.clone();
        let fingerprint = board.fingerprint(to_move);
        let mv = moves[probe % moves.len()];

        let applied = board.apply(mv).unwrap();
        board.undo(mv, applied).unwrap();

        prop_assert_eq!(&board, &before);
        prop_assert_eq!(board.fingerprint(to_move), fingerprint);
        prop_assert_eq!(board.compute_fingerprint(to_move), fingerprint);
    }

    #[test]
    fn score_is_conserved(
        rows in 1usize..4,
        cols in 1usize..4,
        picks in prop::collection::vec(0usize..64, 0..40),
    ) {
        let (board, _) = play_indices(rows, cols, &picks);
        assert_conserved(&board);
    }

    #[test]
    fn extra_turn_iff_cells_claimed(
        rows in 1usize..4,
        cols in 1usize..4,
        picks in prop::collection::vec(0usize..64, 0..30),
        probe in 0usize..64,
    ) {
        let (mut board, to_move) = play_indices(rows, cols, &picks);
        let moves = legal_moves(&board, to_move);
        prop_assume!(!moves.is_empty());

        let owned_before = board.owned_by(Player::A) + board.owned_by(Player::B);
        let applied = board.apply(moves[probe % moves.len()]).unwrap();
        let owned_after = board.owned_by(Player::A) + board.owned_by(Player::B);

        prop_assert!(applied.claimed() <= 2);
        prop_assert_eq!(owned_after - owned_before, applied.claimed() as usize);
        prop_assert_eq!(board.last_move_extra_turn(), applied.claimed() > 0);
    }
}

#[test]
fn complete_exactly_when_every_edge_is_drawn() {
    for (rows, cols) in [(1, 1), (1, 2), (2, 3), (3, 3)] {
        let mut board = Board::new(rows, cols).unwrap();
        let expected = (rows + 1) * cols + rows * (cols + 1);
        assert_eq!(board.total_edges(), expected);

        let moves = legal_moves(&board, Player::A);
        assert_eq!(moves.len(), expected);
        for (i, mv) in moves.iter().enumerate() {
            assert!(!board.is_complete(), "complete after only {i} edges");
            let _ = board.apply(*mv).unwrap();
        }
        assert!(board.is_complete());
        assert_conserved(&board);

        // A's moves claimed every cell.
        assert_eq!(board.final_scores(), (rows * cols, 0));
    }
}

#[test]
fn last_edge_of_one_by_one_claims_for_either_player() {
    for closer in [Player::A, Player::B] {
        let mut board = Board::new(1, 1).unwrap();
        let _ = board.apply(Move::horizontal(Player::A, 0, 0)).unwrap();
        let _ = board.apply(Move::horizontal(Player::B, 1, 0)).unwrap();
        let _ = board.apply(Move::vertical(Player::A, 0, 0)).unwrap();

        let applied = board.apply(Move::vertical(closer, 0, 1)).unwrap();
        assert!(applied.extra_turn());
        assert_eq!(board.score_diff(), closer.sign());
    }
}
