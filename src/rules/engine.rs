//! Rule trait for rulesets.
//!
//! A ruleset defines:
//! - How a game and each round are set up
//! - How a move changes the state
//! - When the game is over, and who won
//!
//! The game loop only talks to `Rule`, so rulesets can be swapped without
//! touching it.

use crate::core::{Card, Context, Move, PlayerId, StepOutcome};
use crate::error::RuleError;

/// Rule trait.
///
/// Rules hold configuration only. All game state lives in `Context`.
///
/// ## Implementation Notes
///
/// - `step`: must be deterministic given the context's RNG state, so that a
///   seeded game replays exactly
/// - `step`: coerce bad moves instead of failing; errors are for states the
///   game cannot continue from
pub trait Rule {
    /// Set up the context for a new game: reset scores, start the first round.
    fn init_game(&self, ctx: &mut Context) -> Result<(), RuleError>;

    /// Apply the current player's move and pass the turn.
    fn step(&self, ctx: &mut Context, mv: &Move) -> Result<StepOutcome, RuleError>;

    /// Check if the game is finished.
    fn is_over(&self, ctx: &Context) -> bool;

    /// Check if the current player may play `card` right now.
    fn is_playable(&self, ctx: &Context, card: Card) -> bool;

    /// The winner of a finished game.
    ///
    /// Default: highest score, lowest seat on ties. `None` while the game
    /// is still running.
    fn winner(&self, ctx: &Context) -> Option<PlayerId> {
        if !self.is_over(ctx) {
            return None;
        }
        ctx.scoreboard
            .iter()
            .max_by(|(pa, a), (pb, b)| a.cmp(b).then(pb.cmp(pa)))
            .map(|(player, _)| player)
    }
}

impl<R: Rule + ?Sized> Rule for Box<R> {
    fn init_game(&self, ctx: &mut Context) -> Result<(), RuleError> {
        (**self).init_game(ctx)
    }

    fn step(&self, ctx: &mut Context, mv: &Move) -> Result<StepOutcome, RuleError> {
        (**self).step(ctx, mv)
    }

    fn is_over(&self, ctx: &Context) -> bool {
        (**self).is_over(ctx)
    }

    fn is_playable(&self, ctx: &Context, card: Card) -> bool {
        (**self).is_playable(ctx, card)
    }

    fn winner(&self, ctx: &Context) -> Option<PlayerId> {
        (**self).winner(ctx)
    }
}
