use rayon::prelude::*;

use dama_core::{Board, Player, perft, player_moves};

#[test]
fn perft_startpos_small_depths() {
    let board = Board::startpos();
    // Depth 1: only the eight front-rank pushes. Depth 2: Black's eight
    // replies are independent of White's choice. Depth 3: hand-counted —
    // mirrored pushes force a mandatory chain (1 reply), edge pushes allow
    // 11 and interior pushes 13 quiet replies.
    assert_eq!(perft(&board, Player::White, 1), 8);
    assert_eq!(perft(&board, Player::White, 2), 64);
    assert_eq!(perft(&board, Player::White, 3), 708);

    // The layout is mirrored, so Black opens with the same eight pushes
    assert_eq!(perft(&board, Player::Black, 1), 8);
    assert_eq!(perft(&board, Player::Black, 2), 64);
}

#[test]
fn perft_root_split_matches_sequential() {
    let board = Board::startpos();
    let total = perft(&board, Player::White, 4);

    let split: u64 = player_moves(&board, Player::White)
        .par_iter()
        .map(|mv| perft(&board.apply(mv), Player::Black, 3))
        .sum();

    assert_eq!(split, total);
}
