//! Error types.
//!
//! Rule errors are fatal: the game state cannot continue. Moves a player
//! gets wrong are not errors at all; the rules coerce them into a draw.

use thiserror::Error;

use crate::core::config::{MAX_PLAYERS, MIN_PLAYERS};
use crate::core::PlayerId;

/// Fatal rule-engine errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RuleError {
    #[error("player count {count} outside supported range {}..={}", MIN_PLAYERS, MAX_PLAYERS)]
    InvalidPlayerCount { count: usize },

    #[error("no cards left in the draw or discard pile")]
    DeckExhausted,

    #[error("draw pile holds no card that can start the discard pile")]
    NoSeedCard,

    #[error("dealing needs {needed} cards but the deck has {available}")]
    DeckTooSmall { needed: usize, available: usize },

    #[error("the game is already over")]
    GameOver,
}

/// Errors raised while asking a player for a move.
#[derive(Debug, Error)]
pub enum PlayerError {
    #[error("player input closed")]
    InputClosed,

    #[error("player i/o failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors surfaced by the game loop.
#[derive(Debug, Error)]
pub enum GameError {
    #[error(transparent)]
    Rule(#[from] RuleError),

    #[error("{player} could not move: {source}")]
    Player {
        player: PlayerId,
        #[source]
        source: PlayerError,
    },

    #[error("turn limit of {limit} reached before the game ended")]
    TurnLimit { limit: u64 },
}
