//! Static board evaluation.
//!
//! Scores are asymmetric: the engine evaluates every position from its own
//! side's perspective, charging extra for opposing men that close in on
//! their promotion row so that search leans toward blocking runners.

use dama_core::{Board, Player, col_of, row_of};

const MAN_VALUE: i32 = 100;
const KING_VALUE: i32 = 400;
const CENTER_BONUS: i32 = 25;
const BACK_ROW_BONUS: i32 = 50;
const ADVANCE_BONUS: i32 = 10;
const THREAT_PER_ROW: i32 = 20;
const PROMOTION_PANIC: i32 = 150;
const OPEN_LANE_PENALTY: i32 = 100;

/// Evaluates `board` from `ai`'s perspective. Positive favors `ai`.
///
/// Per piece: material (man 100, king 400) plus a +25 bonus inside the
/// central 4x4. Opposing men are additionally charged 20 per row already
/// marched toward promotion, a flat 150 once within two rows of promoting,
/// and 100 when running down a column `ai` does not occupy. Own men earn a
/// small advance bonus and a shield bonus for holding the back row.
pub fn evaluate(board: &Board, ai: Player) -> i32 {
    let opponent = ai.other();
    let mut score = 0i32;

    // Columns where an ai piece can still contest the lane
    let mut guarded = [false; 8];
    for s in 0..64u8 {
        if board.piece_at(s).map_or(false, |pc| pc.owner == ai) {
            guarded[col_of(s) as usize] = true;
        }
    }

    for s in 0..64u8 {
        let Some(pc) = board.piece_at(s) else {
            continue;
        };
        let row = row_of(s);
        let col = col_of(s);
        let mut val = if pc.king { KING_VALUE } else { MAN_VALUE };

        if !pc.king {
            if pc.owner == opponent {
                let to_promotion = i32::from((row - opponent.promotion_row()).abs());
                val += (7 - to_promotion) * THREAT_PER_ROW;
                if to_promotion <= 2 {
                    val += PROMOTION_PANIC;
                }
                if !guarded[col as usize] {
                    val += OPEN_LANE_PENALTY;
                }
            } else {
                let to_promotion = i32::from((row - ai.promotion_row()).abs());
                val += (7 - to_promotion) * ADVANCE_BONUS;
                if row == ai.back_row() {
                    val += BACK_ROW_BONUS;
                }
            }
        }

        if (2..=5).contains(&row) && (2..=5).contains(&col) {
            val += CENTER_BONUS;
        }

        if pc.owner == ai {
            score += val;
        } else {
            score -= val;
        }
    }
    score
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
