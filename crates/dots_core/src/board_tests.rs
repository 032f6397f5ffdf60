use super::*;

fn sides_of_cell(player: Player, row: usize, col: usize) -> [Move; 4] {
    [
        Move::horizontal(player, row, col),
        Move::horizontal(player, row + 1, col),
        Move::vertical(player, row, col),
        Move::vertical(player, row, col + 1),
    ]
}

#[test]
fn test_new_board_is_empty() {
    let board = Board::new(2, 3).unwrap();
    assert_eq!(board.cells(), 6);
    assert_eq!(board.total_edges(), 3 * 3 + 2 * 4);
    assert_eq!(board.edges_placed(), 0);
    assert_eq!(board.score_diff(), 0);
    assert!(!board.is_complete());
    assert!(!board.last_move_extra_turn());
}

#[test]
fn test_rejects_empty_dimensions() {
    assert_eq!(
        Board::new(0, 3),
        Err(Error::InvalidDimensions { rows: 0, cols: 3 })
    );
    assert!(Board::new(3, 0).is_err());
}

#[test]
fn test_apply_out_of_bounds() {
    let mut board = Board::new(1, 1).unwrap();
    let before = board.clone();
    for mv in [
        Move::horizontal(Player::A, 2, 0),
        Move::horizontal(Player::A, 0, 1),
        Move::vertical(Player::A, 1, 0),
        Move::vertical(Player::A, 0, 2),
    ] {
        let err = board.apply(mv).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidMove {
                mv,
                reason: InvalidMoveReason::OutOfBounds
            }
        );
    }
    assert_eq!(board, before);
}

#[test]
fn test_apply_twice_is_rejected() {
    let mut board = Board::new(1, 1).unwrap();
    let mv = Move::horizontal(Player::A, 0, 0);
    let _ = board.apply(mv).unwrap();
    let snapshot = board.clone();

    let err = board.apply(mv.with_player(Player::B)).unwrap_err();
    assert!(err.is_invalid_move());
    assert_eq!(board, snapshot, "failed apply must not change the board");
}

#[test]
fn test_single_cell_claim_and_extra_turn() {
    let mut board = Board::new(1, 1).unwrap();
    let [top, bottom, left, right] = sides_of_cell(Player::B, 0, 0);
    for mv in [top, bottom, left] {
        let applied = board.apply(mv).unwrap();
        assert!(!applied.extra_turn());
        assert!(!board.last_move_extra_turn());
    }

    let applied = board.apply(right).unwrap();
    assert_eq!(applied.claimed(), 1);
    assert!(board.last_move_extra_turn());
    assert_eq!(board.owner(0, 0), Some(Player::B));
    assert_eq!(board.score_diff(), -1);
    assert!(board.is_complete());
    assert_eq!(board.final_scores(), (0, 1));
}

#[test]
fn test_shared_edge_claims_two_cells() {
    // 1x2 board: the middle vertical edge borders both cells.
    let mut board = Board::new(1, 2).unwrap();
    for mv in [
        Move::horizontal(Player::A, 0, 0),
        Move::horizontal(Player::B, 0, 1),
        Move::horizontal(Player::A, 1, 0),
        Move::horizontal(Player::B, 1, 1),
        Move::vertical(Player::A, 0, 0),
        Move::vertical(Player::B, 0, 2),
    ] {
        let applied = board.apply(mv).unwrap();
        assert_eq!(applied.claimed(), 0);
    }

    let applied = board.apply(Move::vertical(Player::A, 0, 1)).unwrap();
    assert_eq!(applied.claimed(), 2);
    assert!(applied.extra_turn());
    assert_eq!(board.owned_by(Player::A), 2);
    assert_eq!(board.score_diff(), 2);
    assert!(board.is_complete());
    assert_eq!(board.final_scores(), (2, 0));
}

#[test]
fn test_undo_restores_everything() {
    let mut board = Board::new(2, 2).unwrap();
    let [top, bottom, left, right] = sides_of_cell(Player::A, 1, 1);
    for mv in [top, bottom, left] {
        let _ = board.apply(mv).unwrap();
    }
    let before = board.clone();
    let fp = board.fingerprint(Player::B);

    let closing = right.with_player(Player::B);
    let applied = board.apply(closing).unwrap();
    assert_eq!(board.owner(1, 1), Some(Player::B));
    assert_ne!(board.fingerprint(Player::B), fp);

    board.undo(closing, applied).unwrap();
    assert_eq!(board, before);
    assert_eq!(board.fingerprint(Player::B), fp);
    assert_eq!(board.owner(1, 1), None);
}

#[test]
fn test_undo_restores_previous_extra_turn_flag() {
    let mut board = Board::new(1, 2).unwrap();
    for mv in sides_of_cell(Player::A, 0, 0) {
        let _ = board.apply(mv).unwrap();
    }
    assert!(board.last_move_extra_turn());

    let mv = Move::horizontal(Player::A, 0, 1);
    let applied = board.apply(mv).unwrap();
    assert!(!board.last_move_extra_turn());
    board.undo(mv, applied).unwrap();
    assert!(board.last_move_extra_turn());
}

#[test]
fn test_undo_undrawn_edge_fails() {
    let mut board = Board::new(1, 1).unwrap();
    let mv = Move::vertical(Player::A, 0, 0);
    let applied = board.apply(mv).unwrap();
    board.undo(mv, applied).unwrap();

    let err = board.undo(mv, applied).unwrap_err();
    assert_eq!(
        err,
        Error::InvalidMove {
            mv,
            reason: InvalidMoveReason::NotDrawn
        }
    );
}

#[test]
fn test_fingerprint_matches_recompute() {
    let mut board = Board::new(2, 2).unwrap();
    let moves = [
        Move::horizontal(Player::A, 0, 0),
        Move::vertical(Player::B, 0, 0),
        Move::vertical(Player::A, 0, 1),
        Move::horizontal(Player::B, 1, 0),
        Move::vertical(Player::B, 1, 2),
    ];
    for mv in moves {
        let _ = board.apply(mv).unwrap();
        for p in [Player::A, Player::B] {
            assert_eq!(board.fingerprint(p), board.compute_fingerprint(p));
        }
    }
    assert_ne!(board.fingerprint(Player::A), board.fingerprint(Player::B));
}

#[test]
fn test_fingerprint_distinguishes_owner() {
    let mut by_a = Board::new(1, 1).unwrap();
    let mut by_b = Board::new(1, 1).unwrap();
    for mv in sides_of_cell(Player::A, 0, 0) {
        let _ = by_a.apply(mv).unwrap();
        let _ = by_b.apply(mv.with_player(Player::B)).unwrap();
    }
    assert_ne!(by_a.fingerprint(Player::A), by_b.fingerprint(Player::A));
}

#[test]
fn test_display_renders_edges_and_owner() {
    let mut board = Board::new(1, 2).unwrap();
    for mv in sides_of_cell(Player::A, 0, 0) {
        let _ = board.apply(mv).unwrap();
    }
    let text = board.to_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines, vec!["o-o o", "|A|  ", "o-o o"]);
}
