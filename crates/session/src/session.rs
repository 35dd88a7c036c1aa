//! Game session state and turn driving.

use dama_core::{Board, Difficulty, Engine, Move, Player, SearchLimits, player_moves};

use crate::clock::TurnClock;

/// How a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    WhiteWins,
    BlackWins,
    Draw,
    Timeout,
}

/// Undo snapshot: the board and mover exactly as they were before a move.
#[derive(Debug, Clone)]
struct Snapshot {
    board: Board,
    turn: Player,
}

/// One running game.
///
/// Owns the single mutable board plus everything around it that used to be
/// ambient UI state: the side to move, the legal-move set for that side
/// (computed once per turn), the undo stack, the thinking clock, and the
/// outcome once one is detected. All move legality flows through the
/// cached set, so a human input and an engine reply are validated against
/// the exact same list.
///
/// At most one mutation may be in flight: while the host animates a move
/// it sets the busy flag, and every mutating entry point refuses re-entry
/// until it is cleared.
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    turn: Player,
    legal: Vec<Move>,
    history: Vec<Snapshot>,
    outcome: Option<Outcome>,
    clock: TurnClock,
    busy: bool,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    /// Fresh game from the starting position, White to move.
    pub fn new() -> Self {
        Self::from_position(Board::startpos(), Player::White)
    }

    /// Fresh game with a specific thinking clock.
    pub fn with_clock(clock: TurnClock) -> Self {
        let mut session = Self {
            clock,
            ..Self::new()
        };
        session.clock.start_turn();
        session
    }

    /// Session over an arbitrary position, e.g. a test setup or a resumed
    /// game. An already-terminal position gets its outcome set immediately.
    pub fn from_position(board: Board, turn: Player) -> Self {
        let legal = player_moves(&board, turn);
        let mut session = Self {
            board,
            turn,
            legal,
            history: Vec::new(),
            outcome: None,
            clock: TurnClock::default(),
            busy: false,
        };
        session.detect_outcome();
        if session.outcome.is_none() {
            session.clock.start_turn();
        }
        session
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Player {
        self.turn
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Legal moves for the side to move, already filtered by the
    /// mandatory-maximum-capture rule.
    pub fn legal_moves(&self) -> &[Move] {
        &self.legal
    }

    pub fn clock(&self) -> &TurnClock {
        &self.clock
    }

    /// Number of undo snapshots available.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Raised by the host for the duration of a move animation. The clock
    /// pauses while busy and restarts with a full budget after.
    pub fn set_busy(&mut self, busy: bool) {
        self.busy = busy;
        if busy || self.outcome.is_some() {
            self.clock.stop();
        } else {
            self.clock.start_turn();
        }
    }

    /// True when the side to move is forced to capture this turn. Hosts
    /// use this to explain why a quiet move was rejected.
    pub fn mandatory_capture_pending(&self) -> bool {
        self.legal.iter().any(Move::is_capture)
    }

    /// Look up the legal move from `from` to `to`, if any. A miss is the
    /// silent "no match" answer to an invalid request; the returned move
    /// carries the full `path`/`captured` chain for animation.
    pub fn find_move(&self, from: u8, to: u8) -> Option<&Move> {
        self.legal.iter().find(|m| m.from == from && m.to == to)
    }

    /// Validate and play a human move. Returns the applied move, or None
    /// when the request does not match a legal move, the game is over, or
    /// a mutation is already in flight.
    pub fn try_move(&mut self, from: u8, to: u8) -> Option<Move> {
        if self.busy || self.outcome.is_some() {
            return None;
        }
        let mv = self.find_move(from, to)?.clone();
        self.commit(&mv);
        Some(mv)
    }

    /// Let `engine` play the current turn. A None from the engine means
    /// the side to move has no legal reply; the outcome will already
    /// reflect it.
    pub fn engine_turn(&mut self, engine: &mut dyn Engine, difficulty: Difficulty) -> Option<Move> {
        if self.busy || self.outcome.is_some() {
            return None;
        }
        let limits = SearchLimits::for_difficulty(difficulty, &self.board);
        let result = engine.search(&self.board, self.turn, limits);
        let mv = result.best_move?;
        self.commit(&mv);
        Some(mv)
    }

    /// Roll back one move. Refused while busy, once the game is over, and
    /// when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        if self.busy || self.outcome.is_some() {
            return false;
        }
        let Some(prev) = self.history.pop() else {
            return false;
        };
        self.board = prev.board;
        self.turn = prev.turn;
        self.refresh();
        true
    }

    /// Timer driver hook, polled while a player thinks. Returns true when
    /// the budget just ran out, in which case the outcome is now Timeout.
    pub fn check_timeout(&mut self) -> bool {
        if self.outcome.is_none() && !self.busy && self.clock.is_expired() {
            self.outcome = Some(Outcome::Timeout);
            self.clock.stop();
            return true;
        }
        false
    }

    /// Discard everything and start a new game with the same clock budget.
    /// The only way past a set outcome.
    pub fn reset(&mut self) {
        *self = Self::with_clock(TurnClock::new(self.clock.budget()));
    }

    fn commit(&mut self, mv: &Move) {
        self.history.push(Snapshot {
            board: self.board.clone(),
            turn: self.turn,
        });
        self.board = self.board.apply(mv);
        self.turn = self.turn.other();
        self.refresh();
    }

    fn refresh(&mut self) {
        self.legal = player_moves(&self.board, self.turn);
        self.detect_outcome();
        if self.outcome.is_none() {
            self.clock.start_turn();
        } else {
            self.clock.stop();
        }
    }

    /// A side with no pieces has lost; so has a side to move with no
    /// legal moves.
    fn detect_outcome(&mut self) {
        if self.outcome.is_some() {
            return;
        }
        if self.board.piece_count(Player::White) == 0 {
            self.outcome = Some(Outcome::BlackWins);
        } else if self.board.piece_count(Player::Black) == 0 {
            self.outcome = Some(Outcome::WhiteWins);
        } else if self.legal.is_empty() {
            self.outcome = Some(match self.turn {
                Player::White => Outcome::BlackWins,
                Player::Black => Outcome::WhiteWins,
            });
        }
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
