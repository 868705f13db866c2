//! Core types: cards, players, moves, state, RNG, configuration.
//!
//! Everything a ruleset reads and mutates lives here. Rulesets themselves
//! live in `rules`.

pub mod card;
pub mod player;
pub mod rng;
pub mod config;
pub mod action;
pub mod state;

pub use card::{Card, Color, Effect, ParseColorError, Symbol};
pub use player::{PlayerId, PlayerMap};
pub use rng::GameRng;
pub use config::{DeckConfig, RuleConfig, MAX_PLAYERS, MIN_PLAYERS};
pub use action::{Move, MoveRecord, StepOutcome};
pub use state::{check_player_count, Context, Effects, Request, Round};
