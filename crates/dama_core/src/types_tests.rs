use super::*;

#[test]
fn forward_and_promotion_rows() {
    assert_eq!(Player::White.forward(), -1);
    assert_eq!(Player::Black.forward(), 1);
    assert_eq!(Player::White.promotion_row(), 0);
    assert_eq!(Player::Black.promotion_row(), 7);
    assert_eq!(Player::White.back_row(), 7);
    assert_eq!(Player::Black.back_row(), 0);
}

#[test]
fn difficulty_depths() {
    assert_eq!(Difficulty::Beginner.search_depth(32), 2);
    assert_eq!(Difficulty::Normal.search_depth(32), 4);
    assert_eq!(Difficulty::Expert.search_depth(32), 6);
    // Expert deepens once fewer than 12 pieces remain
    assert_eq!(Difficulty::Expert.search_depth(12), 6);
    assert_eq!(Difficulty::Expert.search_depth(11), 8);
    // The other settings do not
    assert_eq!(Difficulty::Beginner.search_depth(4), 2);
    assert_eq!(Difficulty::Normal.search_depth(4), 4);
}

#[test]
fn square_helpers_round_trip() {
    assert_eq!(sq(0, 0), Some(0));
    assert_eq!(sq(7, 7), Some(63));
    assert_eq!(sq(-1, 3), None);
    assert_eq!(sq(3, 8), None);

    for s in 0..64u8 {
        assert_eq!(sq(col_of(s), row_of(s)), Some(s));
        assert_eq!(coord_to_sq(&sq_to_coord(s)), Some(s));
    }
    assert_eq!(coord_to_sq("a1"), Some(0));
    assert_eq!(coord_to_sq("h8"), Some(63));
    assert_eq!(coord_to_sq("i1"), None);
    assert_eq!(coord_to_sq("a9"), None);
}

#[test]
fn simple_move_shape() {
    let mv = Move::simple(40, 32);
    assert_eq!(mv.path, vec![32]);
    assert!(mv.captured.is_empty());
    assert!(!mv.is_capture());
    assert_eq!(mv.capture_count(), 0);
}
