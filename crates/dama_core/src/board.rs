use crate::types::*;

/// 8x8 dama board: at most one piece per cell, nothing off-grid.
///
/// The board is pure data. Turn, clocks, and outcome live in the session
/// layer; move legality lives in `movegen`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    squares: [Option<Piece>; 64],
}

impl Board {
    pub fn empty() -> Self {
        Board {
            squares: [None; 64],
        }
    }

    /// Starting layout: two full ranks of men per side. Black occupies
    /// rows 1-2 and marches toward row 7; White occupies rows 5-6 and
    /// marches toward row 0. Piece ids are assigned sequentially.
    pub fn startpos() -> Self {
        let mut b = Board::empty();
        let mut next_id = 0u8;
        for (owner, rows) in [(Player::Black, [1u8, 2]), (Player::White, [5u8, 6])] {
            for row in rows {
                for col in 0..8u8 {
                    b.squares[(row * 8 + col) as usize] =
                        Some(Piece::man(PieceId(next_id), owner));
                    next_id += 1;
                }
            }
        }
        b
    }

    pub fn piece_at(&self, sq: u8) -> Option<Piece> {
        self.squares[sq as usize]
    }
    pub fn set_piece(&mut self, sq: u8, pc: Option<Piece>) {
        self.squares[sq as usize] = pc;
    }

    /// Apply a move, returning the resulting board. The receiver is never
    /// mutated: search relies on sibling branches not observing each
    /// other's boards, and the session keeps old boards as undo snapshots.
    ///
    /// Promotion is judged once, on the chain's final landing square — a
    /// chain that crosses the promotion row mid-hop does not promote.
    pub fn apply(&self, mv: &Move) -> Board {
        let mut next = self.clone();
        let Some(mut piece) = next.piece_at(mv.from) else {
            return next;
        };
        next.set_piece(mv.from, None);
        for &victim in &mv.captured {
            next.set_piece(victim, None);
        }
        if !piece.king && row_of(mv.to) == piece.owner.promotion_row() {
            piece.king = true;
        }
        next.set_piece(mv.to, Some(piece));
        next
    }

    pub fn piece_count(&self, player: Player) -> u32 {
        self.squares
            .iter()
            .flatten()
            .filter(|p| p.owner == player)
            .count() as u32
    }

    pub fn total_pieces(&self) -> u32 {
        self.squares.iter().flatten().count() as u32
    }

    /// Squares currently occupied by `player`, in index order.
    pub fn squares_of(&self, player: Player) -> Vec<u8> {
        (0..64u8)
            .filter(|&s| {
                self.piece_at(s)
                    .is_some_and(|p| p.owner == player)
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
