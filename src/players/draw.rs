use crate::core::{Move, Request};
use crate::error::PlayerError;

use super::Player;

/// Never plays; always draws.
#[derive(Clone, Debug)]
pub struct DrawPlayer {
    name: String,
}

impl DrawPlayer {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Player for DrawPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn play(&mut self, _request: &Request) -> Result<Move, PlayerError> {
        Ok(Move::draw())
    }
}
