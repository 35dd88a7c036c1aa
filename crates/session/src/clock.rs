//! Per-turn thinking clock.

use std::time::{Duration, Instant};

/// Default thinking budget per turn.
pub const DEFAULT_THINKING_TIME: Duration = Duration::from_secs(120);

/// Countdown for a single turn's thinking time.
///
/// Unlike a chess clock there is no banked time: every turn starts from
/// the full budget again, and an expired clock means a timeout outcome for
/// the game, not a flag fall for one side.
#[derive(Debug, Clone)]
pub struct TurnClock {
    budget: Duration,
    started_at: Option<Instant>,
    enabled: bool,
}

impl Default for TurnClock {
    fn default() -> Self {
        Self::new(DEFAULT_THINKING_TIME)
    }
}

impl TurnClock {
    /// A zero budget disables the clock entirely.
    pub fn new(budget: Duration) -> Self {
        Self {
            budget,
            started_at: None,
            enabled: !budget.is_zero(),
        }
    }

    /// Clock that never expires.
    pub fn unlimited() -> Self {
        Self::new(Duration::ZERO)
    }

    pub fn budget(&self) -> Duration {
        self.budget
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    /// Restart the countdown from the full budget.
    pub fn start_turn(&mut self) {
        if self.enabled {
            self.started_at = Some(Instant::now());
        }
    }

    /// Halt the countdown, e.g. while a move animates or once the game is
    /// over.
    pub fn stop(&mut self) {
        self.started_at = None;
    }

    /// Time left in the current turn; the full budget when not running.
    pub fn remaining(&self) -> Duration {
        match self.started_at {
            Some(started) => self.budget.saturating_sub(started.elapsed()),
            None => self.budget,
        }
    }

    pub fn is_expired(&self) -> bool {
        self.enabled && self.started_at.is_some() && self.remaining().is_zero()
    }

    /// Format a remaining time as M:SS for a countdown display.
    pub fn format_time(duration: Duration) -> String {
        let total_secs = duration.as_secs();
        format!("{}:{:02}", total_secs / 60, total_secs % 60)
    }
}

#[cfg(test)]
#[path = "clock_tests.rs"]
mod clock_tests;
