//! Elo rating calculation and tracking

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Default starting Elo for new engines
pub const DEFAULT_ELO: f64 = 1500.0;

/// K-factor for Elo updates (higher = more volatile)
pub const K_FACTOR: f64 = 32.0;

/// Result of a single game, from the first engine's point of view
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameResult {
    Win,
    Loss,
    Draw,
}

/// Result of a match (multiple games)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchResult {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

impl MatchResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, result: GameResult) {
        match result {
            GameResult::Win => self.wins += 1,
            GameResult::Loss => self.losses += 1,
            GameResult::Draw => self.draws += 1,
        }
    }

    pub fn total_games(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    /// Score from the first engine's perspective (1 per win, 0.5 per draw)
    pub fn score(&self) -> f64 {
        let total = self.total_games() as f64;
        if total == 0.0 {
            return 0.5;
        }
        (self.wins as f64 + 0.5 * self.draws as f64) / total
    }
}

/// Rating and game count for one engine
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EngineRecord {
    pub rating: f64,
    pub games: u32,
}

impl Default for EngineRecord {
    fn default() -> Self {
        Self {
            rating: DEFAULT_ELO,
            games: 0,
        }
    }
}

/// Elo standings across every engine that has played
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Standings {
    engines: HashMap<String, EngineRecord>,
}

impl Standings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load standings from a JSON file
    pub fn load(path: &str) -> Result<Self, String> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| format!("Failed to read file: {}", e))?;
        serde_json::from_str(&contents).map_err(|e| format!("Failed to parse JSON: {}", e))
    }

    /// Save standings to a JSON file
    pub fn save(&self, path: &str) -> Result<(), String> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize: {}", e))?;
        std::fs::write(path, json).map_err(|e| format!("Failed to write file: {}", e))
    }

    /// Current rating for an engine; unseen engines start at the default
    pub fn rating(&self, engine: &str) -> f64 {
        self.engines
            .get(engine)
            .map_or(DEFAULT_ELO, |rec| rec.rating)
    }

    pub fn games_played(&self, engine: &str) -> u32 {
        self.engines.get(engine).map_or(0, |rec| rec.games)
    }

    /// Expected score for engine1 against engine2
    pub fn expected_score(&self, engine1: &str, engine2: &str) -> f64 {
        let r1 = self.rating(engine1);
        let r2 = self.rating(engine2);
        1.0 / (1.0 + 10.0_f64.powf((r2 - r1) / 400.0))
    }

    /// Update both engines' ratings after a match
    pub fn update_ratings(&mut self, engine1: &str, engine2: &str, result: &MatchResult) {
        let expected = self.expected_score(engine1, engine2);
        let actual = result.score();
        let games = result.total_games();
        let elo_change = K_FACTOR * games as f64 * (actual - expected);

        let rec1 = self.engines.entry(engine1.to_string()).or_default();
        rec1.rating += elo_change;
        rec1.games += games;

        let rec2 = self.engines.entry(engine2.to_string()).or_default();
        rec2.rating -= elo_change;
        rec2.games += games;
    }

    /// Ratings sorted strongest first
    pub fn leaderboard(&self) -> Vec<(String, EngineRecord)> {
        let mut entries: Vec<_> = self
            .engines
            .iter()
            .map(|(name, rec)| (name.clone(), *rec))
            .collect();
        entries.sort_by(|a, b| {
            b.1.rating
                .partial_cmp(&a.1.rating)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        entries
    }

    /// Print leaderboard to stdout
    pub fn print_leaderboard(&self) {
        println!("\n=== Engine Leaderboard ===");
        println!("{:<30} {:>8} {:>8}", "Engine", "Elo", "Games");
        println!("{}", "-".repeat(50));
        for (name, rec) in self.leaderboard() {
            println!("{:<30} {:>8.1} {:>8}", name, rec.rating, rec.games);
        }
        println!();
    }
}

#[cfg(test)]
#[path = "elo_tests.rs"]
mod elo_tests;
