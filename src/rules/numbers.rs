//! Numbers-only ruleset.
//!
//! A stripped-down variant: 32 number cards (four colors, ranks 0–7), no
//! action cards, no auto-play, and the game ends with the first round.
//! Shares the matching and drawing mechanics of `StandardRule`.

use crate::core::{Card, Context, DeckConfig, Move, PlayerId, RuleConfig, StepOutcome};
use crate::error::RuleError;

use super::engine::Rule;
use super::standard::StandardRule;

/// Number ranks in the numbers-only deck.
pub const NUMBER_RANKS: u8 = 8;

/// Single-round ruleset over number cards.
#[derive(Clone, Debug)]
pub struct NumbersRule {
    inner: StandardRule,
}

impl Default for NumbersRule {
    fn default() -> Self {
        Self::with_hand_size(7)
    }
}

impl NumbersRule {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the ruleset with a custom starting hand size.
    #[must_use]
    pub fn with_hand_size(hand_size: usize) -> Self {
        let config = RuleConfig::new()
            .with_hand_size(hand_size)
            .with_deck(DeckConfig::numbers_only(NUMBER_RANKS))
            .with_auto_play_drawn(false);
        Self {
            inner: StandardRule::with_config(config),
        }
    }
}

impl Rule for NumbersRule {
    fn init_game(&self, ctx: &mut Context) -> Result<(), RuleError> {
        self.inner.init_game(ctx)
    }

    fn step(&self, ctx: &mut Context, mv: &Move) -> Result<StepOutcome, RuleError> {
        if self.is_over(ctx) {
            return Err(RuleError::GameOver);
        }
        self.inner.step(ctx, mv)
    }

    fn is_over(&self, ctx: &Context) -> bool {
        ctx.round.is_started() && ctx.round.is_over()
    }

    fn is_playable(&self, ctx: &Context, card: Card) -> bool {
        self.inner.is_playable(ctx, card)
    }

    fn winner(&self, ctx: &Context) -> Option<PlayerId> {
        if ctx.round.is_started() {
            ctx.round.winner()
        } else {
            None
        }
    }
}
