//! # rust-uno
//!
//! A turn-based engine for UNO-style shedding card games.
//!
//! ## Design Principles
//!
//! 1. **Rules Are Pluggable**: The game loop only talks to the `Rule` trait.
//!    `StandardRule` and `NumbersRule` ship with the crate; others slot in
//!    without touching the loop.
//!
//! 2. **N-Player First**: Every API takes `player_count` as context. Seats
//!    run from 2 to 10 players.
//!
//! 3. **Deterministic Replay**: All shuffling goes through a seeded
//!    `GameRng`. The same seed and the same moves give the same game.
//!
//! ## Architecture
//!
//! - **Lazy Round Transitions**: A round that has ended is scored and
//!   re-dealt at the top of the next step, never mid-step.
//!
//! - **Snapshots For Players**: Players receive a `Request` copy of what
//!   they may see, plus the move history as a persistent `im::Vector`.
//!
//! - **Forgiving Moves**: A move that names a card the player does not hold,
//!   or one that does not match, becomes a draw.
//!
//! ## Modules
//!
//! - `core`: Cards, players, moves, state, RNG, configuration
//! - `rules`: The `Rule` trait and the bundled rulesets
//! - `players`: Always-draw, greedy and terminal players
//! - `game`: The game loop
//! - `error`: Error types

pub mod core;
pub mod error;
pub mod game;
pub mod players;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Card, Color, Effect, Symbol,
    PlayerId, PlayerMap,
    GameRng,
    DeckConfig, RuleConfig,
    Move, MoveRecord, StepOutcome,
    Context, Request, Round,
};

pub use crate::error::{GameError, PlayerError, RuleError};

pub use crate::rules::{NumbersRule, Rule, StandardRule};

pub use crate::players::{DrawPlayer, GreedyPlayer, HumanPlayer, Player};

pub use crate::game::{Game, GameSummary};
