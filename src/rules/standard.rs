//! Standard UNO-style ruleset.
//!
//! Based on the 2008 instruction sheet, simplified:
//! - Match the top card by color or symbol; wilds always match
//! - `draw 2`, `skip` and `wild draw 4` block the next player, who must take
//!   the effect instead of playing
//! - `reverse` flips the direction of play; a second one flips it back
//! - A round ends when a hand empties; the winner scores the cards left in
//!   every other hand
//! - The game ends when a score reaches the target (500 by default)

use log::{debug, info, warn};

use crate::core::{
    check_player_count, Card, Color, Context, Move, PlayerId, Round, RuleConfig, StepOutcome,
};
use crate::error::RuleError;

use super::engine::Rule;

/// The standard ruleset.
#[derive(Clone, Debug, Default)]
pub struct StandardRule {
    config: RuleConfig,
}

impl StandardRule {
    /// Create the ruleset with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the ruleset with a custom configuration.
    ///
    /// Panics if `config.fallback_color` is `Color::Wild`.
    #[must_use]
    pub fn with_config(config: RuleConfig) -> Self {
        assert!(
            config.fallback_color != Color::Wild,
            "Fallback color must be a playable color"
        );
        Self { config }
    }

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &RuleConfig {
        &self.config
    }

    /// Build a fresh deck and shuffle it with the context's RNG.
    pub fn build_deck(&self, ctx: &mut Context) -> Vec<Card> {
        let mut deck = self.config.deck.build();
        ctx.rng.shuffle(&mut deck);
        deck
    }

    /// Replace the active round with a freshly dealt one.
    ///
    /// Cards are dealt round-robin, one per player per pass. The discard pile
    /// starts with the first non-wild card off the draw pile; wilds passed
    /// over go to the bottom of the draw pile.
    pub fn init_round(&self, ctx: &mut Context) -> Result<(), RuleError> {
        let player_count = ctx.player_count();
        check_player_count(player_count)?;

        let needed = self.config.hand_size * player_count + 1;
        let available = self.config.deck.size();
        if needed > available {
            return Err(RuleError::DeckTooSmall { needed, available });
        }

        let mut round = Round::empty(player_count);
        round.draw = self.build_deck(ctx);
        ctx.round = round;

        for _ in 0..self.config.hand_size {
            for player in PlayerId::all(player_count) {
                ctx.draw_card(player)?;
            }
        }

        let mut passed_over = Vec::new();
        let seed = loop {
            let card = ctx.round.draw.pop().ok_or(RuleError::NoSeedCard)?;
            if !card.is_wild() {
                break card;
            }
            passed_over.push(card);
        };
        ctx.round.draw.splice(0..0, passed_over);
        ctx.round.discard.push(seed);
        ctx.round.last_card = Some(seed);

        ctx.rounds += 1;
        info!("round {} starts on {}", ctx.rounds, seed);
        Ok(())
    }

    /// True when some hand is empty.
    #[must_use]
    pub fn round_is_over(&self, ctx: &Context) -> bool {
        ctx.round.is_over()
    }

    /// Credit the round winner with the value of every other hand.
    ///
    /// Returns the winner and the points scored, or `None` if no hand is
    /// empty.
    pub fn update_score(&self, ctx: &mut Context) -> Option<(PlayerId, u32)> {
        let winner = ctx.round.winner()?;
        let points: u32 = ctx
            .round
            .hands
            .iter()
            .filter(|&(player, _)| player != winner)
            .flat_map(|(_, hand)| hand.iter())
            .map(|card| card.symbol.value())
            .sum();

        ctx.scoreboard[winner] += points;
        Some((winner, points))
    }

    /// Score the finished round and deal the next one unless the game is over.
    fn finish_round(&self, ctx: &mut Context) -> Result<StepOutcome, RuleError> {
        let (winner, points) = match self.update_score(ctx) {
            Some((winner, points)) => {
                info!(
                    "round {} won by {} for {} points (total {})",
                    ctx.rounds, winner, points, ctx.scoreboard[winner]
                );
                (Some(winner), points)
            }
            None => (None, 0),
        };

        let next_round = if self.is_over(ctx) {
            info!("game over after {} rounds", ctx.rounds);
            None
        } else {
            self.init_round(ctx)?;
            Some(ctx.rounds)
        };

        Ok(StepOutcome::RoundOver { winner, points, next_round })
    }

    /// Check a submitted move, returning the card and the color it will show.
    ///
    /// `None` means the move is a draw, either by choice or because the card
    /// is not in hand or not playable.
    fn validate(&self, ctx: &Context, player: PlayerId, mv: &Move) -> Option<(Card, Color)> {
        let card = mv.card?;

        if !ctx.round.hand(player).contains(&card) || !self.is_playable(ctx, card) {
            warn!("{} cannot play {}, drawing instead", player, card);
            return None;
        }

        Some((card, self.shown_color(card, mv.color)))
    }

    /// The color a card shows once played.
    fn shown_color(&self, card: Card, chosen: Option<Color>) -> Color {
        if card.is_wild() {
            chosen
                .filter(|&color| color != Color::Wild)
                .unwrap_or(self.config.fallback_color)
        } else {
            card.color
        }
    }

    /// Take a pending effect, or draw one card and maybe play it.
    fn draw_or_resolve(&self, ctx: &mut Context, player: PlayerId) -> Result<StepOutcome, RuleError> {
        if let Some(effect) = ctx.round.take_blocking() {
            let drawn = effect.penalty();
            for _ in 0..drawn {
                ctx.draw_card(player)?;
            }
            return Ok(StepOutcome::Resolved { effect, drawn });
        }

        let card = ctx.draw_card(player)?;
        if self.config.auto_play_drawn && self.is_playable(ctx, card) {
            let color = self.shown_color(card, None);
            return Ok(self.play_card(ctx, player, card, color, true));
        }
        Ok(StepOutcome::Drew { card: Some(card) })
    }

    /// Move a validated card from hand to discard and apply its effect.
    fn play_card(
        &self,
        ctx: &mut Context,
        player: PlayerId,
        card: Card,
        color: Color,
        auto: bool,
    ) -> StepOutcome {
        let round = &mut ctx.round;
        round.remove_from_hand(player, card);
        round.discard.push(card);
        round.last_card = Some(card.with_color(color));

        if let Some(effect) = card.symbol.effect() {
            round.push_effect(effect);
        }

        StepOutcome::Played { card, color, auto }
    }
}

impl Rule for StandardRule {
    fn init_game(&self, ctx: &mut Context) -> Result<(), RuleError> {
        for player in PlayerId::all(ctx.player_count()) {
            ctx.scoreboard[player] = 0;
        }
        ctx.rounds = 0;
        self.init_round(ctx)
    }

    fn step(&self, ctx: &mut Context, mv: &Move) -> Result<StepOutcome, RuleError> {
        if self.is_over(ctx) {
            return Err(RuleError::GameOver);
        }
        if !ctx.round.is_started() {
            self.init_round(ctx)?;
            return Ok(StepOutcome::RoundOver {
                winner: None,
                points: 0,
                next_round: Some(ctx.rounds),
            });
        }
        if self.round_is_over(ctx) {
            return self.finish_round(ctx);
        }

        ctx.round.turns += 1;
        let player = ctx.round.current_player;

        let outcome = match self.validate(ctx, player, mv) {
            Some((card, color)) => self.play_card(ctx, player, card, color, false),
            None => self.draw_or_resolve(ctx, player)?,
        };

        let reversed = ctx.round.is_reversed();
        ctx.round.current_player = player.next(ctx.player_count(), reversed);

        debug!(
            "turn {}: {} {} -> {} ({} left)",
            ctx.round.turns,
            player,
            outcome,
            ctx.round.current_player,
            ctx.round.hand(player).len()
        );
        Ok(outcome)
    }

    fn is_over(&self, ctx: &Context) -> bool {
        ctx.scoreboard.values().any(|&score| score >= self.config.target_score)
    }

    fn is_playable(&self, ctx: &Context, card: Card) -> bool {
        if ctx.round.pending_blocking().is_some() {
            return false;
        }
        match ctx.round.last_card {
            Some(top) => card.matches(top),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Effect, Symbol};

    fn red(n: u8) -> Card {
        Card::number(Color::Red, n)
    }

    /// Four players, dealt, with a known top card and an empty effect list.
    fn fixture() -> (StandardRule, Context) {
        let rule = StandardRule::new();
        let mut ctx = Context::new(4, 42).unwrap();
        rule.init_game(&mut ctx).unwrap();
        ctx.round.last_card = Some(red(5));
        ctx.round.current_player = PlayerId::new(0);
        ctx.round.active_effects.clear();
        (rule, ctx)
    }

    #[test]
    fn test_init_game_deals_seven_each() {
        let rule = StandardRule::new();
        let mut ctx = Context::new(4, 42).unwrap();
        rule.init_game(&mut ctx).unwrap();

        for player in ctx.player_ids() {
            assert_eq!(ctx.round.hand(player).len(), 7);
        }
        assert_eq!(ctx.round.discard.len(), 1);
        assert_eq!(ctx.round.card_count(), 108);
        assert_eq!(ctx.rounds, 1);
        assert_eq!(ctx.round.last_card, ctx.round.discard.last().copied());
    }

    #[test]
    fn test_deal_is_round_robin() {
        let rule = StandardRule::new();
        let mut ctx = Context::new(3, 9).unwrap();

        // Same shuffle as init_round will see.
        let mut probe = ctx.clone();
        let deck = rule.build_deck(&mut probe);

        rule.init_round(&mut ctx).unwrap();

        let mut expected: Vec<Vec<Card>> = vec![Vec::new(); 3];
        let mut pile = deck;
        for _ in 0..7 {
            for hand in expected.iter_mut() {
                hand.push(pile.pop().unwrap());
            }
        }
        for (i, hand) in expected.iter().enumerate() {
            assert_eq!(ctx.round.hand(PlayerId::new(i as u8)), hand.as_slice());
        }
    }

    #[test]
    fn test_discard_seed_never_wild() {
        let rule = StandardRule::new();
        for seed in 0..50 {
            let mut ctx = Context::new(4, seed).unwrap();
            rule.init_game(&mut ctx).unwrap();
            assert!(!ctx.round.last_card.unwrap().is_wild());
            assert_eq!(ctx.round.card_count(), 108);
        }
    }

    #[test]
    fn test_discard_seed_needs_a_colored_card() {
        let rule = StandardRule::with_config(
            RuleConfig::new().with_hand_size(0).with_deck(crate::core::DeckConfig {
                ranks: 0,
                zero_copies: 0,
                number_copies: 0,
                action_copies: 0,
                wild_copies: 2,
            }),
        );
        let mut ctx = Context::new(2, 3).unwrap();
        assert_eq!(rule.init_game(&mut ctx), Err(RuleError::NoSeedCard));
    }

    #[test]
    fn test_dealing_too_many_cards_fails() {
        let rule = StandardRule::with_config(RuleConfig::new().with_hand_size(11));
        let mut ctx = Context::new(10, 3).unwrap();
        assert_eq!(
            rule.init_game(&mut ctx),
            Err(RuleError::DeckTooSmall { needed: 111, available: 108 })
        );
    }

    #[test]
    fn test_compact_deck_seat_limit() {
        let rule = StandardRule::with_config(RuleConfig::new().with_deck(crate::core::DeckConfig::compact()));

        let mut ctx = Context::new(7, 1).unwrap();
        rule.init_game(&mut ctx).unwrap();
        assert_eq!(ctx.round.draw.len(), 52 - 49 - 1);

        let mut ctx = Context::new(8, 1).unwrap();
        assert_eq!(
            rule.init_game(&mut ctx),
            Err(RuleError::DeckTooSmall { needed: 57, available: 52 })
        );
        assert_eq!(ctx.rounds, 0);
    }

    #[test]
    #[should_panic(expected = "Fallback color must be a playable color")]
    fn test_with_config_rejects_wild_fallback() {
        let mut config = RuleConfig::new();
        config.fallback_color = Color::Wild;
        let _ = StandardRule::with_config(config);
    }

    #[test]
    fn test_deserialized_fallback_colors_wild() {
        let mut json = serde_json::to_value(RuleConfig::new()).unwrap();
        json["fallback_color"] = serde_json::json!("Yellow");
        let rule = StandardRule::with_config(serde_json::from_value(json).unwrap());

        let (_, mut ctx) = fixture();
        ctx.round.hands[PlayerId::new(0)].push(Card::wild());
        let outcome = rule.step(&mut ctx, &Move::play(Card::wild())).unwrap();

        assert_eq!(
            outcome,
            StepOutcome::Played { card: Card::wild(), color: Color::Yellow, auto: false }
        );
        assert_eq!(ctx.round.last_card, Some(Card::new(Color::Yellow, Symbol::Wild)));
    }

    #[test]
    fn test_is_playable() {
        let (rule, ctx) = fixture();

        assert!(rule.is_playable(&ctx, red(1)));
        assert!(rule.is_playable(&ctx, Card::number(Color::Blue, 5)));
        assert!(rule.is_playable(&ctx, Card::wild()));
        assert!(rule.is_playable(&ctx, Card::wild_draw_four()));
        assert!(!rule.is_playable(&ctx, Card::number(Color::Blue, 1)));
        assert!(!rule.is_playable(&ctx, Card::new(Color::Green, Symbol::Skip)));
    }

    #[test]
    fn test_nothing_playable_while_blocked() {
        for effect in [Effect::Skip, Effect::DrawTwo, Effect::WildDrawFour] {
            let (rule, mut ctx) = fixture();
            ctx.round.push_effect(effect);

            assert!(!rule.is_playable(&ctx, red(1)));
            assert!(!rule.is_playable(&ctx, Card::wild()));
        }

        let (rule, mut ctx) = fixture();
        ctx.round.push_effect(Effect::Reverse);
        assert!(rule.is_playable(&ctx, red(1)));
    }

    #[test]
    fn test_step_play_card() {
        let (rule, mut ctx) = fixture();
        let card = red(1);
        ctx.round.hands[PlayerId::new(0)] = vec![card, red(7)];

        let outcome = rule.step(&mut ctx, &Move::play(card)).unwrap();

        assert_eq!(outcome, StepOutcome::Played { card, color: Color::Red, auto: false });
        assert_eq!(ctx.round.last_card, Some(card));
        assert_eq!(ctx.round.discard.last(), Some(&card));
        assert_eq!(ctx.round.hand(PlayerId::new(0)), &[red(7)]);
        assert_eq!(ctx.round.current_player, PlayerId::new(1));
        assert_eq!(ctx.round.turns, 1);
    }

    #[test]
    fn test_wild_color_choice() {
        let (rule, mut ctx) = fixture();
        ctx.round.hands[PlayerId::new(0)].push(Card::wild());

        rule.step(&mut ctx, &Move::play_wild(Card::wild(), Color::Blue)).unwrap();

        let top = ctx.round.last_card.unwrap();
        assert_eq!(top.color, Color::Blue);
        assert_eq!(top.symbol, Symbol::Wild);
        assert_eq!(ctx.round.discard.last(), Some(&Card::wild()));
    }

    #[test]
    fn test_wild_without_color_uses_fallback() {
        let rule = StandardRule::with_config(RuleConfig::new().with_fallback_color(Color::Green));
        let mut ctx = Context::new(2, 42).unwrap();
        rule.init_game(&mut ctx).unwrap();
        ctx.round.active_effects.clear();
        ctx.round.hands[PlayerId::new(0)].push(Card::wild_draw_four());

        rule.step(&mut ctx, &Move::play(Card::wild_draw_four())).unwrap();

        assert_eq!(ctx.round.last_card.unwrap().color, Color::Green);
        assert_eq!(ctx.round.pending_blocking(), Some(Effect::WildDrawFour));
    }

    #[test]
    fn test_invalid_card_becomes_draw() {
        let (rule, mut ctx) = fixture();
        let p0 = PlayerId::new(0);
        let bad = Card::number(Color::Blue, 1);
        ctx.round.hands[p0] = vec![bad, red(9)];
        // A card nobody can auto-play next.
        ctx.round.draw.push(Card::number(Color::Green, 2));

        let outcome = rule.step(&mut ctx, &Move::play(bad)).unwrap();

        assert_eq!(outcome, StepOutcome::Drew { card: Some(Card::number(Color::Green, 2)) });
        assert_eq!(ctx.round.hand(p0), &[bad, red(9), Card::number(Color::Green, 2)]);
        assert_eq!(ctx.round.last_card, Some(red(5)));
        assert_eq!(ctx.round.current_player, PlayerId::new(1));
    }

    #[test]
    fn test_card_not_in_hand_becomes_draw() {
        let (rule, mut ctx) = fixture();
        let p0 = PlayerId::new(0);
        ctx.round.hands[p0] = vec![red(9)];
        ctx.round.draw.push(Card::number(Color::Green, 2));

        let outcome = rule.step(&mut ctx, &Move::play(red(1))).unwrap();

        assert!(matches!(outcome, StepOutcome::Drew { .. }));
        assert_eq!(ctx.round.hand(p0).len(), 2);
    }

    #[test]
    fn test_drawn_card_auto_played() {
        let (rule, mut ctx) = fixture();
        let p0 = PlayerId::new(0);
        ctx.round.hands[p0] = vec![Card::number(Color::Blue, 1)];
        ctx.round.draw.push(red(3));

        let outcome = rule.step(&mut ctx, &Move::draw()).unwrap();

        assert_eq!(outcome, StepOutcome::Played { card: red(3), color: Color::Red, auto: true });
        assert_eq!(ctx.round.hand(p0), &[Card::number(Color::Blue, 1)]);
        assert_eq!(ctx.round.last_card, Some(red(3)));
    }

    #[test]
    fn test_drawn_wild_takes_fallback_color() {
        let (rule, mut ctx) = fixture();
        ctx.round.draw.push(Card::wild());

        let outcome = rule.step(&mut ctx, &Move::draw()).unwrap();

        assert_eq!(
            outcome,
            StepOutcome::Played { card: Card::wild(), color: Color::Red, auto: true }
        );
    }

    #[test]
    fn test_auto_play_can_be_disabled() {
        let rule = StandardRule::with_config(RuleConfig::new().with_auto_play_drawn(false));
        let mut ctx = Context::new(2, 42).unwrap();
        rule.init_game(&mut ctx).unwrap();
        ctx.round.last_card = Some(red(5));
        ctx.round.active_effects.clear();
        ctx.round.draw.push(red(3));

        let outcome = rule.step(&mut ctx, &Move::draw()).unwrap();

        assert_eq!(outcome, StepOutcome::Drew { card: Some(red(3)) });
        assert!(ctx.round.hand(PlayerId::new(0)).contains(&red(3)));
    }

    #[test]
    fn test_draw_two_forces_two_cards() {
        let (rule, mut ctx) = fixture();
        let p0 = PlayerId::new(0);
        ctx.round.hands[p0] = vec![red(1)];
        ctx.round.push_effect(Effect::DrawTwo);

        // Submitting a card while blocked is coerced into taking the effect.
        let outcome = rule.step(&mut ctx, &Move::play(red(1))).unwrap();

        assert_eq!(outcome, StepOutcome::Resolved { effect: Effect::DrawTwo, drawn: 2 });
        assert_eq!(ctx.round.hand(p0).len(), 3);
        assert!(ctx.round.active_effects.is_empty());
        assert_eq!(ctx.round.current_player, PlayerId::new(1));
    }

    #[test]
    fn test_wild_draw_four_forces_four_cards() {
        let (rule, mut ctx) = fixture();
        let before = ctx.round.hand(PlayerId::new(0)).len();
        ctx.round.push_effect(Effect::WildDrawFour);

        let outcome = rule.step(&mut ctx, &Move::draw()).unwrap();

        assert_eq!(outcome, StepOutcome::Resolved { effect: Effect::WildDrawFour, drawn: 4 });
        assert_eq!(ctx.round.hand(PlayerId::new(0)).len(), before + 4);
    }

    #[test]
    fn test_skip_loses_turn_without_drawing() {
        let (rule, mut ctx) = fixture();
        let before = ctx.round.hand(PlayerId::new(0)).len();
        ctx.round.push_effect(Effect::Skip);

        let outcome = rule.step(&mut ctx, &Move::draw()).unwrap();

        assert_eq!(outcome, StepOutcome::Resolved { effect: Effect::Skip, drawn: 0 });
        assert_eq!(ctx.round.hand(PlayerId::new(0)).len(), before);
        assert_eq!(ctx.round.current_player, PlayerId::new(1));
    }

    #[test]
    fn test_action_cards_queue_effects() {
        let (rule, mut ctx) = fixture();
        let skip = Card::new(Color::Red, Symbol::Skip);
        ctx.round.hands[PlayerId::new(0)].push(skip);

        rule.step(&mut ctx, &Move::play(skip)).unwrap();

        assert_eq!(ctx.round.active_effects.as_slice(), &[Effect::Skip]);
        assert_eq!(ctx.round.current_player, PlayerId::new(1));
        assert!(!rule.is_playable(&ctx, red(2)));
    }

    #[test]
    fn test_reverse_flips_direction() {
        let (rule, mut ctx) = fixture();
        let reverse = Card::new(Color::Red, Symbol::Reverse);
        ctx.round.hands[PlayerId::new(0)].push(reverse);

        rule.step(&mut ctx, &Move::play(reverse)).unwrap();

        assert!(ctx.round.is_reversed());
        assert_eq!(ctx.round.current_player, PlayerId::new(3));
    }

    #[test]
    fn test_two_reverses_cancel() {
        let (rule, mut ctx) = fixture();
        let first = Card::new(Color::Red, Symbol::Reverse);
        let second = Card::new(Color::Blue, Symbol::Reverse);
        ctx.round.hands[PlayerId::new(0)].push(first);
        ctx.round.hands[PlayerId::new(3)].push(second);

        rule.step(&mut ctx, &Move::play(first)).unwrap();
        assert_eq!(ctx.round.current_player, PlayerId::new(3));

        rule.step(&mut ctx, &Move::play(second)).unwrap();

        assert!(!ctx.round.is_reversed());
        assert_eq!(ctx.round.current_player, PlayerId::new(0));

        // Direction is forward again.
        let next = red(4);
        ctx.round.hands[PlayerId::new(0)].push(next);
        ctx.round.last_card = Some(red(5));
        rule.step(&mut ctx, &Move::play(next)).unwrap();
        assert_eq!(ctx.round.current_player, PlayerId::new(1));
    }

    #[test]
    fn test_update_score() {
        let (rule, mut ctx) = fixture();
        ctx.round.hands[PlayerId::new(0)] = vec![];
        ctx.round.hands[PlayerId::new(1)] =
            vec![red(5), Card::new(Color::Blue, Symbol::Skip)];
        ctx.round.hands[PlayerId::new(2)] = vec![Card::wild()];
        ctx.round.hands[PlayerId::new(3)] = vec![];

        assert_eq!(rule.update_score(&mut ctx), Some((PlayerId::new(0), 75)));
        assert_eq!(ctx.scoreboard[PlayerId::new(0)], 75);
        assert_eq!(ctx.scoreboard[PlayerId::new(1)], 0);
    }

    #[test]
    fn test_update_score_without_winner() {
        let (rule, mut ctx) = fixture();
        assert!(!rule.round_is_over(&ctx));
        assert_eq!(rule.update_score(&mut ctx), None);
        assert!(ctx.scoreboard.values().all(|&s| s == 0));
    }

    #[test]
    fn test_round_over_detected_on_next_step() {
        let (rule, mut ctx) = fixture();
        let p0 = PlayerId::new(0);
        ctx.round.hands[p0] = vec![red(1)];
        ctx.round.hands[PlayerId::new(1)] = vec![red(8)];
        ctx.round.hands[PlayerId::new(2)] = vec![Card::wild()];
        ctx.round.hands[PlayerId::new(3)] = vec![Card::new(Color::Green, Symbol::DrawTwo)];

        rule.step(&mut ctx, &Move::play(red(1))).unwrap();
        assert!(rule.round_is_over(&ctx));
        assert_eq!(ctx.scoreboard[p0], 0);

        let outcome = rule.step(&mut ctx, &Move::draw()).unwrap();

        assert_eq!(
            outcome,
            StepOutcome::RoundOver { winner: Some(p0), points: 78, next_round: Some(2) }
        );
        assert_eq!(ctx.scoreboard[p0], 78);
        assert_eq!(ctx.rounds, 2);
        assert_eq!(ctx.round.card_count(), 108);
        assert!(ctx.player_ids().all(|p| ctx.round.hand(p).len() == 7));
    }

    #[test]
    fn test_final_round_ends_game() {
        let rule = StandardRule::with_config(RuleConfig::new().with_target_score(50));
        let mut ctx = Context::new(2, 42).unwrap();
        rule.init_game(&mut ctx).unwrap();
        ctx.round.hands[PlayerId::new(0)] = vec![];
        ctx.round.hands[PlayerId::new(1)] = vec![Card::wild()];

        let outcome = rule.step(&mut ctx, &Move::draw()).unwrap();

        assert_eq!(
            outcome,
            StepOutcome::RoundOver { winner: Some(PlayerId::new(0)), points: 50, next_round: None }
        );
        assert!(rule.is_over(&ctx));
        assert_eq!(rule.winner(&ctx), Some(PlayerId::new(0)));
        assert_eq!(rule.step(&mut ctx, &Move::draw()), Err(RuleError::GameOver));
    }

    #[test]
    fn test_step_before_init_starts_round() {
        let rule = StandardRule::new();
        let mut ctx = Context::new(3, 5).unwrap();

        let outcome = rule.step(&mut ctx, &Move::draw()).unwrap();

        assert_eq!(
            outcome,
            StepOutcome::RoundOver { winner: None, points: 0, next_round: Some(1) }
        );
        assert_eq!(ctx.round.card_count(), 108);
    }

    #[test]
    fn test_is_over_at_target() {
        let (rule, mut ctx) = fixture();
        assert!(!rule.is_over(&ctx));
        ctx.scoreboard[PlayerId::new(2)] = 499;
        assert!(!rule.is_over(&ctx));
        ctx.scoreboard[PlayerId::new(2)] = 500;
        assert!(rule.is_over(&ctx));
    }
}
