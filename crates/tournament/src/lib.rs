//! Tournament Runner for dama
//!
//! This crate provides infrastructure for:
//! - Running matches between different engines
//! - Tracking Elo ratings across engine versions
//! - Generating reports for validating engine changes
//!
//! # Usage
//!
//! ```bash
//! # Run a match between the minimax engine and the random baseline
//! cargo run -p tournament -- match minimax random --games 20 --difficulty normal
//!
//! # Run a gauntlet (one engine vs all baselines)
//! cargo run -p tournament -- gauntlet minimax:42 --games 10
//! ```

mod elo;
mod match_runner;
mod results;

pub use elo::*;
pub use match_runner::*;
pub use results::*;
