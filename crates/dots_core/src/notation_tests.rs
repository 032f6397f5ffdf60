use super::*;

#[test]
fn test_parse_letters() {
    let mv = parse_move("h 1 2", Player::B).unwrap();
    assert_eq!(mv, Move::horizontal(Player::B, 0, 1));

    let mv = parse_move("  Vertical 3 1 \n", Player::A).unwrap();
    assert_eq!(mv, Move::vertical(Player::A, 2, 0));
}

#[test]
fn test_parse_numeric_orientation() {
    assert_eq!(
        parse_move("1 1 1", Player::A).unwrap().orientation,
        Orientation::Vertical
    );
    assert_eq!(
        parse_move("2 1 1", Player::A).unwrap().orientation,
        Orientation::Horizontal
    );
}

#[test]
fn test_round_trip_text() {
    let mv = Move::vertical(Player::A, 4, 2);
    assert_eq!(move_to_notation(mv), "v 5 3");
    assert_eq!(parse_move(&move_to_notation(mv), Player::A).unwrap(), mv);
}

#[test]
fn test_parse_errors() {
    for input in ["", "h 1", "h 1 2 3", "x 1 1", "h 0 1", "h one 1"] {
        let err = parse_move(input, Player::A).unwrap_err();
        assert!(
            matches!(err, Error::Notation { .. }),
            "expected notation error for '{input}', got {err:?}"
        );
    }
}

#[test]
fn test_unknown_orientation_message() {
    let err = parse_move("d 1 1", Player::A).unwrap_err();
    assert!(err.to_string().contains("unknown orientation 'd'"));
}
