//! Game session layer for dama.
//!
//! The core crates are pure functions over boards; everything a running
//! game needs on top of them lives here: whose turn it is, the cached
//! legal-move set, undo history, the per-turn thinking clock, and outcome
//! detection. Hosts (UI, tournament runner) own a [`GameSession`] and
//! drive it; the session never reaches back into presentation concerns.

mod clock;
mod session;

pub use clock::*;
pub use session::*;
