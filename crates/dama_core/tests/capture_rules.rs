//! Cross-cutting rule invariants checked through the public API.

use dama_core::{Board, Move, Piece, PieceId, Player, player_moves, sq};

fn man(b: &mut Board, col: i8, row: i8, owner: Player) -> u8 {
    let s = sq(col, row).unwrap();
    b.set_piece(s, Some(Piece::man(PieceId(s), owner)));
    s
}

/// Board with captures of different lengths for White plus quiet movers.
fn mixed_capture_board() -> Board {
    let mut b = Board::empty();
    man(&mut b, 2, 4, Player::White); // two-jump chain down column 2
    man(&mut b, 2, 3, Player::Black);
    man(&mut b, 2, 1, Player::Black);
    man(&mut b, 6, 4, Player::White); // single capture
    man(&mut b, 6, 3, Player::Black);
    man(&mut b, 0, 6, Player::White); // quiet only
    b
}

#[test]
fn generated_moves_start_owned_and_land_empty() {
    for (board, player) in [
        (Board::startpos(), Player::White),
        (Board::startpos(), Player::Black),
        (mixed_capture_board(), Player::White),
        (mixed_capture_board(), Player::Black),
    ] {
        for mv in player_moves(&board, player) {
            assert_eq!(board.piece_at(mv.from).unwrap().owner, player);
            assert!(board.piece_at(mv.to).is_none());
        }
    }
}

#[test]
fn captures_exclude_every_simple_move() {
    let b = mixed_capture_board();
    let moves = player_moves(&b, Player::White);
    assert!(!moves.is_empty());
    assert!(moves.iter().all(Move::is_capture));
}

#[test]
fn returned_chains_share_the_maximal_length() {
    let b = mixed_capture_board();
    let moves = player_moves(&b, Player::White);
    let max = moves.iter().map(Move::capture_count).max().unwrap();
    assert_eq!(max, 2);
    assert!(moves.iter().all(|m| m.capture_count() == max));
}

#[test]
fn no_chain_captures_a_square_twice() {
    let b = mixed_capture_board();
    for mv in player_moves(&b, Player::White) {
        let mut seen = mv.captured.clone();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), mv.captured.len());
    }
}

#[test]
fn apply_leaves_the_original_reconstructable() {
    let b = mixed_capture_board();
    let snapshot = b.clone();
    for mv in player_moves(&b, Player::White) {
        let _ = b.apply(&mv);
    }
    assert_eq!(b, snapshot);
}

#[test]
fn eliminated_side_is_visible_through_piece_count() {
    let mut b = Board::empty();
    man(&mut b, 3, 3, Player::White);
    // The outcome driver watches piece counts, not search
    assert_eq!(b.piece_count(Player::Black), 0);
    assert_eq!(b.piece_count(Player::White), 1);
    assert!(player_moves(&b, Player::Black).is_empty());
}
