//! Players: decision makers that turn a `Request` into a `Move`.
//!
//! - `DrawPlayer`: always draws
//! - `GreedyPlayer`: plays the first matching card, naming a random color
//!   for wilds
//! - `HumanPlayer`: asks over a line-oriented terminal
//!
//! Players only ever see a snapshot. The rules check every move again, so a
//! player that gets it wrong just draws.

mod draw;
mod greedy;
mod human;

pub use draw::DrawPlayer;
pub use greedy::GreedyPlayer;
pub use human::HumanPlayer;

use crate::core::{Move, Request};
use crate::error::PlayerError;

/// A seat at the table.
pub trait Player {
    /// Display name.
    fn name(&self) -> &str;

    /// Decide this turn's move.
    fn play(&mut self, request: &Request) -> Result<Move, PlayerError>;
}

impl<P: Player + ?Sized> Player for Box<P> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn play(&mut self, request: &Request) -> Result<Move, PlayerError> {
        (**self).play(request)
    }
}
