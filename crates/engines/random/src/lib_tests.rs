use super::*;
use dama_core::{Piece, PieceId, sq};

#[test]
fn random_engine_returns_legal_move() {
    let mut engine = RandomEngine::new();
    let board = Board::startpos();
    let limits = SearchLimits::depth(1);

    let result = engine.search(&board, Player::White, limits);

    let mv = result.best_move.expect("startpos always has moves");
    assert!(player_moves(&board, Player::White).contains(&mv));
}

#[test]
fn random_engine_still_obeys_mandatory_capture() {
    // One capture available next to a pile of quiet movers: every draw
    // must come out of the capture-filtered set.
    let mut board = Board::empty();
    let white = sq(4, 4).unwrap();
    let victim = sq(4, 3).unwrap();
    board.set_piece(white, Some(Piece::man(PieceId(0), Player::White)));
    board.set_piece(victim, Some(Piece::man(PieceId(1), Player::Black)));
    board.set_piece(
        sq(0, 6).unwrap(),
        Some(Piece::man(PieceId(2), Player::White)),
    );

    let mut engine = RandomEngine::new();
    for _ in 0..16 {
        let result = engine.search(&board, Player::White, SearchLimits::depth(1));
        let mv = result.best_move.expect("a capture is available");
        assert_eq!(mv.captured, vec![victim]);
    }
}

#[test]
fn random_engine_handles_no_moves() {
    let mut engine = RandomEngine::new();
    let mut board = Board::empty();
    board.set_piece(
        sq(3, 3).unwrap(),
        Some(Piece::man(PieceId(0), Player::White)),
    );

    let result = engine.search(&board, Player::Black, SearchLimits::depth(1));

    assert!(result.best_move.is_none());
}
