//! Seed-quantified properties of the engine.
//!
//! Each case plays a bounded number of turns with greedy bots, so a failing
//! seed shrinks to a short, replayable game.

use proptest::prelude::*;

use rust_uno::core::{Context, DeckConfig, GameRng, Move, PlayerId, RuleConfig, StepOutcome};
use rust_uno::game::Game;
use rust_uno::players::{GreedyPlayer, Player};
use rust_uno::rules::{Rule, StandardRule};

const TURNS: usize = 150;

fn greedy_table(count: usize, seed: u64) -> Vec<Box<dyn Player>> {
    let rng = GameRng::new(seed);
    (0..count)
        .map(|i| {
            let stream = rng.for_context(&format!("player-{}", i));
            Box::new(GreedyPlayer::with_rng(format!("bot {}", i), stream)) as Box<dyn Player>
        })
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Property: a seeded game with seeded bots replays move for move.
    #[test]
    fn prop_same_seed_same_history(seed in any::<u64>(), players in 2usize..=6) {
        let run = || {
            let mut game = Game::with_players(StandardRule::new(), greedy_table(players, seed), Some(seed))
                .unwrap();
            game.init().unwrap();
            for _ in 0..TURNS {
                if game.play_turn().is_err() {
                    break;
                }
            }
            (game.history().clone(), game.context().scoreboard.clone())
        };

        prop_assert_eq!(run(), run());
    }

    /// Property: no step creates or destroys cards.
    #[test]
    fn prop_card_count_is_conserved(seed in any::<u64>(), players in 2usize..=6, compact in any::<bool>()) {
        let deck = if compact { DeckConfig::compact() } else { DeckConfig::standard() };
        let size = deck.size();
        let rule = StandardRule::with_config(RuleConfig::new().with_deck(deck));

        let mut game = Game::with_players(rule, greedy_table(players, seed), Some(seed)).unwrap();
        game.init().unwrap();
        prop_assert_eq!(game.context().round.card_count(), size);

        for _ in 0..TURNS {
            if game.play_turn().is_err() {
                break;
            }
            prop_assert_eq!(game.context().round.card_count(), size);
        }
    }

    /// Property: the discard pile never opens on a wild card.
    #[test]
    fn prop_seed_card_not_wild(seed in any::<u64>(), players in 2usize..=10) {
        let rule = StandardRule::new();
        let mut ctx = Context::new(players, seed).unwrap();
        rule.init_game(&mut ctx).unwrap();

        let top = ctx.round.last_card.unwrap();
        prop_assert!(!top.is_wild());
        prop_assert_eq!(ctx.round.discard.last().copied(), Some(top));
    }

    /// Property: a move naming a card the player does not hold acts as a draw.
    #[test]
    fn prop_foreign_card_is_a_draw(seed in any::<u64>()) {
        let rule = StandardRule::with_config(RuleConfig::new().with_auto_play_drawn(false));

        let mut played = Context::new(3, seed).unwrap();
        rule.init_game(&mut played).unwrap();
        let mut drawn = played.clone();

        let player = played.round.current_player;
        let foreign = played
            .round
            .hand(PlayerId::new(1))
            .iter()
            .copied()
            .find(|card| !played.round.hand(player).contains(card));

        if let Some(card) = foreign {
            let a = rule.step(&mut played, &Move::play(card)).unwrap();
            let b = rule.step(&mut drawn, &Move::draw()).unwrap();

            prop_assert_eq!(a, b);
            prop_assert!(!matches!(a, StepOutcome::Played { .. }), "foreign card must not be played: {:?}", a);
            prop_assert_eq!(played.round.hands, drawn.round.hands);
            prop_assert_eq!(played.round.current_player, drawn.round.current_player);
        }
    }
}
