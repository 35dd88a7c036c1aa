//! Random Move Dama Engine
//!
//! A simple engine that selects moves uniformly at random from all legal moves.
//! Useful for:
//! - Baseline comparisons (any real engine should easily beat this)
//! - Stress testing move generation and the tournament harness
//!
//! Legality comes from the aggregate generator, so even this engine obeys
//! the mandatory-maximum-capture rule: when a chain is on, every candidate
//! it draws from is a maximal chain.

use dama_core::{Board, Engine, Player, SearchLimits, SearchResult, player_moves};
use rand::seq::SliceRandom;
use rand::thread_rng;

#[cfg(test)]
mod lib_tests;

/// A dama engine that plays random legal moves.
///
/// This engine provides no evaluation - it simply picks a random move
/// from all available legal moves. It's the simplest possible engine
/// and serves as a baseline for testing.
#[derive(Debug, Clone, Default)]
pub struct RandomEngine {
    nodes: u64,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self { nodes: 0 }
    }
}

impl Engine for RandomEngine {
    fn search(&mut self, board: &Board, to_move: Player, _limits: SearchLimits) -> SearchResult {
        let moves = player_moves(board, to_move);
        self.nodes = 1;

        let best_move = moves.choose(&mut thread_rng()).cloned();

        SearchResult {
            best_move,
            score: 0,
            depth: 1,
            nodes: self.nodes,
        }
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}
