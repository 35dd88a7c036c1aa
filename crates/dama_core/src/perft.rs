use crate::{board::Board, movegen::player_moves, types::Player};

/// Pure perft node count: positions reachable in exactly `depth` moves,
/// sides alternating from `to_move`. A multi-jump chain counts as one
/// move, exactly as it is one turn in play.
///
/// Works over owned board clones; dama moves have no unmake because
/// `Board::apply` never mutates its input.
pub fn perft(board: &Board, to_move: Player, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    let mut nodes = 0u64;
    for mv in player_moves(board, to_move) {
        nodes += perft(&board.apply(&mv), to_move.other(), depth - 1);
    }
    nodes
}
