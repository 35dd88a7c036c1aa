use crate::{board::Board, types::*};

/// Orthogonal direction set, as (dcol, drow) pairs. Movement and capture
/// in this variant are orthogonal, never diagonal.
const DIRS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Legal moves for the piece on `from`; empty when the square is empty.
///
/// Capture chains take precedence: once a piece can jump, its simple
/// moves are not offered. The player-wide mandatory-capture rule is
/// applied one level up, in `player_moves`.
pub fn piece_moves(board: &Board, from: u8) -> Vec<Move> {
    let Some(piece) = board.piece_at(from) else {
        return Vec::new();
    };

    let chains = capture_chains(board, from, piece.owner, piece.king, &[], &[], from);
    if !chains.is_empty() {
        return chains;
    }

    simple_moves(board, from, piece)
}

/// All legal moves for `player` under the mandatory-maximum-capture rule:
/// if any piece can capture, only chains of globally maximal length are
/// legal, and every tie is kept for the caller to choose among. With no
/// captures anywhere, all simple moves are returned unfiltered.
///
/// Called once per turn, both to validate human input and as the root
/// move list for search.
pub fn player_moves(board: &Board, player: Player) -> Vec<Move> {
    let mut all = Vec::with_capacity(32);
    for from in board.squares_of(player) {
        all.extend(piece_moves(board, from));
    }

    let max_captures = all.iter().map(|m| m.captured.len()).max().unwrap_or(0);
    if max_captures > 0 {
        all.retain(|m| m.captured.len() == max_captures);
    }
    all
}

fn simple_moves(board: &Board, from: u8, piece: Piece) -> Vec<Move> {
    let col = col_of(from);
    let row = row_of(from);
    let mut out = Vec::new();

    for (dc, dr) in DIRS {
        if !piece.king && dr == -piece.owner.forward() {
            continue; // men never step backward
        }

        if piece.king {
            // Slide along the clear line, one move per reachable square.
            let mut c = col + dc;
            let mut r = row + dr;
            while let Some(to) = sq(c, r) {
                if board.piece_at(to).is_some() {
                    break;
                }
                out.push(Move::simple(from, to));
                c += dc;
                r += dr;
            }
        } else if let Some(to) = sq(col + dc, row + dr)
            && board.piece_at(to).is_none()
        {
            out.push(Move::simple(from, to));
        }
    }
    out
}

/// Depth-first search for capture chains from `at`.
///
/// Each discovered jump is replayed on a cloned board before recursing, so
/// sibling branches never observe each other's captures. `origin` is the
/// square the whole chain started from: emitted moves always report it as
/// `from`, making a multi-jump chain one atomic move. A chain is emitted
/// only when no further jump exists from its landing square — shorter
/// prefixes of a longer chain are suppressed.
fn capture_chains(
    board: &Board,
    at: u8,
    player: Player,
    king: bool,
    path: &[u8],
    captured: &[u8],
    origin: u8,
) -> Vec<Move> {
    let mut chains = Vec::new();
    let col = col_of(at);
    let row = row_of(at);

    // A man standing on its promotion row does not start or continue a
    // chain; king-ness is only granted once the full move is applied.
    if !king && row == player.promotion_row() {
        return chains;
    }

    for (dc, dr) in DIRS {
        if !king {
            if dr == -player.forward() {
                continue; // men never jump backward
            }
            let Some(over) = sq(col + dc, row + dr) else {
                continue;
            };
            let Some(land) = sq(col + 2 * dc, row + 2 * dr) else {
                continue;
            };
            if let Some(target) = board.piece_at(over)
                && target.owner != player
                && board.piece_at(land).is_none()
            {
                follow_jump(
                    board, at, over, land, player, king, path, captured, origin, &mut chains,
                );
            }
        } else {
            // Scan outward: the first piece met decides. Own piece or an
            // already-captured square blocks; an opponent becomes the
            // target, and every empty square beyond it until the next
            // blocker is a distinct landing branch.
            let mut c = col + dc;
            let mut r = row + dr;
            let mut target: Option<u8> = None;
            while let Some(s) = sq(c, r) {
                match board.piece_at(s) {
                    Some(pc) => {
                        if pc.owner == player || target.is_some() || captured.contains(&s) {
                            break;
                        }
                        target = Some(s);
                    }
                    None => {
                        if let Some(victim) = target {
                            follow_jump(
                                board, at, victim, s, player, king, path, captured, origin,
                                &mut chains,
                            );
                        }
                    }
                }
                c += dc;
                r += dr;
            }
        }
    }
    chains
}

/// Play one jump on a cloned board, then either emit the accumulated chain
/// or recurse for deeper continuations.
#[allow(clippy::too_many_arguments)]
fn follow_jump(
    board: &Board,
    at: u8,
    victim: u8,
    land: u8,
    player: Player,
    king: bool,
    path: &[u8],
    captured: &[u8],
    origin: u8,
    out: &mut Vec<Move>,
) {
    let mut next = board.clone();
    let piece = next.piece_at(at);
    next.set_piece(victim, None);
    next.set_piece(at, None);
    next.set_piece(land, piece);

    let mut next_path = path.to_vec();
    next_path.push(land);
    let mut next_captured = captured.to_vec();
    next_captured.push(victim);

    let deeper = capture_chains(&next, land, player, king, &next_path, &next_captured, origin);
    if deeper.is_empty() {
        out.push(Move {
            from: origin,
            to: land,
            path: next_path,
            captured: next_captured,
        });
    } else {
        out.extend(deeper);
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
