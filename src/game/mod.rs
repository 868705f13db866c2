//! Running games.
//!
//! `Game` owns a rule, its `Context`, one `Player` per seat and the move
//! history. It knows nothing about cards beyond what `Rule` exposes, so any
//! ruleset runs unchanged.

mod runner;

pub use runner::{Game, GameSummary};
