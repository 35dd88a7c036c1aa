//! Minimax Dama Engine
//!
//! Depth-limited minimax with alpha-beta pruning and a handcrafted
//! positional evaluation. This is the engine behind the AI opponent:
//! - capture-ordered move exploration at every node
//! - seedable root-shuffle tie-breaking, so play is varied in games and
//!   reproducible in tests
//! - depth by difficulty, deepening in thinned-out endgames

mod eval;
mod search;

use dama_core::{Board, Engine, Player, SearchLimits, SearchResult};
use rand::rngs::StdRng;
use rand::SeedableRng;

// Re-export for direct use if needed
pub use eval::evaluate;
pub use search::pick_best_move;

/// Dama engine using minimax with alpha-beta pruning.
#[derive(Debug, Clone)]
pub struct MinimaxEngine {
    /// The side whose perspective the evaluation maximizes
    side: Player,
    rng: StdRng,
    /// Node counter for statistics
    nodes: u64,
}

impl MinimaxEngine {
    pub fn new(side: Player) -> Self {
        Self {
            side,
            rng: StdRng::from_entropy(),
            nodes: 0,
        }
    }

    /// Fixed-seed constructor so tests can pin down the root shuffle.
    pub fn with_seed(side: Player, seed: u64) -> Self {
        Self {
            side,
            rng: StdRng::seed_from_u64(seed),
            nodes: 0,
        }
    }

    pub fn side(&self) -> Player {
        self.side
    }
}

impl Engine for MinimaxEngine {
    fn search(&mut self, board: &Board, to_move: Player, limits: SearchLimits) -> SearchResult {
        self.nodes = 0;

        let outcome = search::pick_best_move(
            board,
            to_move,
            self.side,
            limits.depth,
            &mut self.rng,
            &mut self.nodes,
        );

        let (best_move, score) = match outcome {
            Some((mv, score)) => (Some(mv), score),
            None => (None, 0),
        };

        SearchResult {
            best_move,
            score,
            depth: limits.depth,
            nodes: self.nodes,
        }
    }

    fn name(&self) -> &str {
        "Minimax v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}
