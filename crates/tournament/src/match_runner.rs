//! Match runner for playing games between engines

use dama_core::{Difficulty, Engine, Player};
use dama_session::{GameSession, Outcome, TurnClock};

use crate::elo::{GameResult, MatchResult};

/// Configuration for a match
#[derive(Debug, Clone)]
pub struct MatchConfig {
    /// Number of games to play
    pub num_games: u32,
    /// Difficulty (search depth) both engines play at
    pub difficulty: Difficulty,
    /// Maximum moves per game before declaring a draw
    pub max_moves: u32,
    /// Whether to alternate colors each game
    pub alternate_colors: bool,
    /// Print progress during the match
    pub verbose: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            num_games: 10,
            difficulty: Difficulty::Normal,
            max_moves: 200,
            alternate_colors: true,
            verbose: true,
        }
    }
}

/// Difficulty from its config/CLI spelling
pub fn parse_difficulty(s: &str) -> Option<Difficulty> {
    match s.to_lowercase().as_str() {
        "beginner" | "easy" => Some(Difficulty::Beginner),
        "normal" | "medium" => Some(Difficulty::Normal),
        "expert" | "hard" => Some(Difficulty::Expert),
        _ => None,
    }
}

/// Runs matches between two engines
pub struct MatchRunner {
    config: MatchConfig,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    /// Run a match between two engines
    ///
    /// Returns the result from engine1's perspective
    pub fn run_match(&self, engine1: &mut dyn Engine, engine2: &mut dyn Engine) -> MatchResult {
        let mut result = MatchResult::new();

        for game_num in 0..self.config.num_games {
            // Alternate colors if configured
            let engine1_white = !self.config.alternate_colors || game_num % 2 == 0;

            let game_result = if engine1_white {
                self.play_game(engine1, engine2)
            } else {
                // Flip result since engine1 is black
                match self.play_game(engine2, engine1) {
                    GameResult::Win => GameResult::Loss,
                    GameResult::Loss => GameResult::Win,
                    GameResult::Draw => GameResult::Draw,
                }
            };

            result.record(game_result);

            if self.config.verbose {
                let color = if engine1_white { "W" } else { "B" };
                let outcome = match game_result {
                    GameResult::Win => "1-0",
                    GameResult::Loss => "0-1",
                    GameResult::Draw => "1/2",
                };
                println!(
                    "Game {}/{}: {} ({}) - Score: {}-{}-{}",
                    game_num + 1,
                    self.config.num_games,
                    outcome,
                    color,
                    result.wins,
                    result.losses,
                    result.draws
                );
            }
        }

        result
    }

    /// Play a single game, returns the result from White's perspective
    fn play_game(&self, white: &mut dyn Engine, black: &mut dyn Engine) -> GameResult {
        let mut session = GameSession::with_clock(TurnClock::unlimited());
        white.new_game();
        black.new_game();

        for _move_num in 0..self.config.max_moves {
            // None means the game just ended: the mover has no pieces or
            // no legal reply, and the session has recorded the outcome
            let moved = if session.turn() == Player::White {
                session.engine_turn(white, self.config.difficulty)
            } else {
                session.engine_turn(black, self.config.difficulty)
            };
            if moved.is_none() {
                break;
            }
        }

        match session.outcome() {
            Some(Outcome::WhiteWins) => GameResult::Win,
            Some(Outcome::BlackWins) => GameResult::Loss,
            // Still undecided at the move cap
            _ => GameResult::Draw,
        }
    }
}

/// Quick utility to run a single match
pub fn quick_match(
    engine1: &mut dyn Engine,
    engine2: &mut dyn Engine,
    num_games: u32,
    difficulty: Difficulty,
) -> MatchResult {
    let config = MatchConfig {
        num_games,
        difficulty,
        verbose: false,
        ..Default::default()
    };
    let runner = MatchRunner::new(config);
    runner.run_match(engine1, engine2)
}

#[cfg(test)]
#[path = "match_runner_tests.rs"]
mod match_runner_tests;
