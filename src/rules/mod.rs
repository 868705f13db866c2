//! Rulesets.
//!
//! Rulesets implement `Rule` to define:
//! - Deck composition and round setup
//! - How a move modifies the context
//! - When the game ends
//!
//! The game loop calls into `Rule` and never interprets cards itself.

pub mod engine;
pub mod numbers;
pub mod standard;

pub use engine::Rule;
pub use numbers::NumbersRule;
pub use standard::StandardRule;
