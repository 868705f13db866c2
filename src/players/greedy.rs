use crate::core::{Color, GameRng, Move, Request};
use crate::error::PlayerError;

use super::Player;

/// Plays the first card in hand that matches the top card.
///
/// Wild cards count as matching and get a uniformly random color from the
/// player's own RNG, so a seeded bot plays the same game every time.
#[derive(Clone, Debug)]
pub struct GreedyPlayer {
    name: String,
    rng: GameRng,
}

impl GreedyPlayer {
    /// Create a bot with its own seed.
    pub fn new(name: impl Into<String>, seed: u64) -> Self {
        Self::with_rng(name, GameRng::new(seed))
    }

    /// Create a bot around an existing RNG stream.
    pub fn with_rng(name: impl Into<String>, rng: GameRng) -> Self {
        Self {
            name: name.into(),
            rng,
        }
    }
}

impl Player for GreedyPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn play(&mut self, request: &Request) -> Result<Move, PlayerError> {
        let Some(top) = request.top_card else {
            return Ok(Move::draw());
        };
        if request.is_blocked() {
            return Ok(Move::draw());
        }

        let Some(&card) = request.hand.iter().find(|card| card.matches(top)) else {
            return Ok(Move::draw());
        };

        if card.is_wild() {
            let color = self.rng.choose(&Color::PLAYABLE).copied().unwrap_or(Color::Red);
            Ok(Move::play_wild(card, color))
        } else {
            Ok(Move::play(card))
        }
    }
}
