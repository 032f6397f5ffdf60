use super::*;

#[test]
fn test_zobrist_keys_unique() {
    // Verify that keys are unique (no collisions in small sample)
    let keys = ZobristKeys::new(4, 5);
    let mut seen = std::collections::HashSet::new();
    for key in keys.all_keys() {
        assert!(seen.insert(key), "Duplicate Zobrist key found");
    }
    // 25 horizontal + 24 vertical + 2 * 20 owners + side to move
    assert_eq!(
        seen.len(),
        horizontal_edge_count(4, 5) + vertical_edge_count(4, 5) + 2 * 20 + 1
    );
    assert_eq!(seen.len(), 25 + 24 + 40 + 1);
}

#[test]
fn test_zobrist_keys_deterministic_per_shape() {
    assert_eq!(ZobristKeys::new(3, 3), ZobristKeys::new(3, 3));
    assert_ne!(ZobristKeys::new(3, 3), ZobristKeys::new(3, 4));
}

#[test]
fn test_side_key_only_for_b() {
    let keys = ZobristKeys::new(2, 2);
    assert_eq!(keys.side_key(Player::A), 0);
    assert_ne!(keys.side_key(Player::B), 0);
}

#[test]
fn test_owner_keys_differ_by_player() {
    let keys = ZobristKeys::new(1, 2);
    assert_ne!(keys.owner_key(0, Player::A), keys.owner_key(0, Player::B));
    assert_ne!(keys.owner_key(0, Player::A), keys.owner_key(1, Player::A));
}
