//! Minimax search with alpha-beta pruning over owned board clones.

use dama_core::{Board, Move, Player, player_moves};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::eval::evaluate;

/// Sentinel for a side with no legal reply; large enough to dominate any
/// static evaluation at the depths in use.
const NO_MOVE_SCORE: i32 = 50_000;

/// Searches the position and returns the best move with its score.
///
/// The maximizing side is always `ai`, the engine's own identity; when
/// `to_move` is the other side, the root picks the move that minimizes
/// `ai`'s score, so one engine can be asked to move for either player.
///
/// The root move list is shuffled with the caller's seedable RNG so that
/// equally scored moves resolve differently from game to game; deeper
/// nodes stay deterministic. Returns None when `to_move` has no legal
/// moves.
pub fn pick_best_move(
    board: &Board,
    to_move: Player,
    ai: Player,
    depth: u8,
    rng: &mut StdRng,
    nodes: &mut u64,
) -> Option<(Move, i32)> {
    let mut moves = player_moves(board, to_move);
    if moves.is_empty() {
        return None;
    }

    moves.shuffle(rng);

    let mut best: Option<(Move, i32)> = None;
    for mv in moves {
        let child = board.apply(&mv);
        *nodes += 1;
        let score = minimax(
            &child,
            depth.saturating_sub(1),
            i32::MIN / 2,
            i32::MAX / 2,
            to_move != ai,
            ai,
            nodes,
        );

        // Strict improvement only: the first of equally scored moves wins,
        // which together with the shuffle is the whole tie-break.
        let better = match best {
            None => true,
            Some((_, s)) if to_move == ai => score > s,
            Some((_, s)) => score < s,
        };
        if better {
            best = Some((mv, score));
        }
    }
    best
}

/// Recursive minimax with alpha-beta pruning.
///
/// `maximizing` means it is `ai`'s turn in the subtree. A node whose side
/// has no legal moves scores as an outright loss for that side, at any
/// depth.
fn minimax(
    board: &Board,
    depth: u8,
    mut alpha: i32,
    mut beta: i32,
    maximizing: bool,
    ai: Player,
    nodes: &mut u64,
) -> i32 {
    if depth == 0 {
        return evaluate(board, ai);
    }

    let side = if maximizing { ai } else { ai.other() };
    let mut moves = player_moves(board, side);
    if moves.is_empty() {
        return if maximizing {
            -NO_MOVE_SCORE
        } else {
            NO_MOVE_SCORE
        };
    }

    // Biggest captures first to tighten the pruning window early
    moves.sort_by(|a, b| b.captured.len().cmp(&a.captured.len()));

    if maximizing {
        let mut best = i32::MIN;
        for mv in moves {
            *nodes += 1;
            let score = minimax(&board.apply(&mv), depth - 1, alpha, beta, false, ai, nodes);
            best = best.max(score);
            alpha = alpha.max(score);
            if beta <= alpha {
                break;
            }
        }
        best
    } else {
        let mut best = i32::MAX;
        for mv in moves {
            *nodes += 1;
            let score = minimax(&board.apply(&mv), depth - 1, alpha, beta, true, ai, nodes);
            best = best.min(score);
            beta = beta.min(score);
            if beta <= alpha {
                break;
            }
        }
        best
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
