//! Game state: the current round, the game-wide context, and the per-turn
//! view handed to players.
//!
//! ## Round
//!
//! One hand-to-hand play sequence:
//! - Draw and discard piles (top = end of vec)
//! - Hands per player
//! - Top card, pending effects, current player, turn counter
//!
//! ## Context
//!
//! Everything that lives for the whole game:
//! - Player count and scoreboard
//! - Round counter and the single active `Round`
//! - The seeded RNG every shuffle draws from
//!
//! ## Request
//!
//! Read-only snapshot for the player about to move.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::action::MoveRecord;
use super::card::{Card, Effect};
use super::config::{MAX_PLAYERS, MIN_PLAYERS};
use super::player::{PlayerId, PlayerMap};
use super::rng::GameRng;
use crate::error::RuleError;

/// Pending effects. A blocking effect makes every card unplayable, so in
/// practice this holds at most one blocking effect plus a `Reverse`.
pub type Effects = SmallVec<[Effect; 4]>;

/// State of one round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    /// Face-down draw pile. Cards are taken from the end.
    pub draw: Vec<Card>,

    /// Face-up discard pile. The last card is on top.
    pub discard: Vec<Card>,

    /// Hands per player.
    pub hands: PlayerMap<Vec<Card>>,

    /// Turns taken this round.
    pub turns: u32,

    /// The card to match. Same face as the top of the discard pile, but a
    /// wild shows the color its player named. `None` until the round starts.
    pub last_card: Option<Card>,

    /// Effects waiting on the next player, oldest first.
    pub active_effects: Effects,

    /// Seat whose turn it is.
    pub current_player: PlayerId,
}

impl Round {
    /// A round with no cards, before anything is dealt.
    #[must_use]
    pub fn empty(player_count: usize) -> Self {
        Self {
            draw: Vec::new(),
            discard: Vec::new(),
            hands: PlayerMap::with_default(player_count),
            turns: 0,
            last_card: None,
            active_effects: Effects::new(),
            current_player: PlayerId::new(0),
        }
    }

    /// True once a starting card has been turned.
    #[must_use]
    pub fn is_started(&self) -> bool {
        self.last_card.is_some()
    }

    /// True when some hand is empty.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.hands.values().any(Vec::is_empty)
    }

    /// The first player whose hand is empty.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.hands
            .iter()
            .find(|(_, hand)| hand.is_empty())
            .map(|(player, _)| player)
    }

    /// Cards across draw pile, discard pile and every hand.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.draw.len() + self.discard.len() + self.hands.values().map(Vec::len).sum::<usize>()
    }

    /// A player's hand.
    #[must_use]
    pub fn hand(&self, player: PlayerId) -> &[Card] {
        &self.hands[player]
    }

    /// Hand sizes, which every player may see.
    #[must_use]
    pub fn hand_sizes(&self) -> PlayerMap<usize> {
        self.hands.map(Vec::len)
    }

    /// Remove one copy of `card` from a player's hand.
    ///
    /// Returns true if the card was found and removed.
    pub fn remove_from_hand(&mut self, player: PlayerId, card: Card) -> bool {
        let hand = &mut self.hands[player];
        if let Some(pos) = hand.iter().position(|&c| c == card) {
            hand.remove(pos);
            true
        } else {
            false
        }
    }

    // === Effects ===

    /// The most recent blocking effect, if any.
    #[must_use]
    pub fn pending_blocking(&self) -> Option<Effect> {
        self.active_effects
            .iter()
            .rev()
            .copied()
            .find(|effect| effect.is_blocking())
    }

    /// Remove and return the most recent blocking effect.
    pub fn take_blocking(&mut self) -> Option<Effect> {
        let pos = self.active_effects.iter().rposition(|e| e.is_blocking())?;
        Some(self.active_effects.remove(pos))
    }

    /// True while play runs backwards.
    #[must_use]
    pub fn is_reversed(&self) -> bool {
        self.active_effects.contains(&Effect::Reverse)
    }

    /// Queue the effect of a card just played.
    ///
    /// A second `Reverse` cancels the pending one.
    pub fn push_effect(&mut self, effect: Effect) {
        if effect == Effect::Reverse {
            if let Some(pos) = self.active_effects.iter().position(|&e| e == Effect::Reverse) {
                self.active_effects.remove(pos);
                return;
            }
        }
        self.active_effects.push(effect);
    }
}

/// Game-wide mutable state.
///
/// Created once per game. The round is replaced at round boundaries; the
/// scoreboard carries across rounds.
#[derive(Clone, Debug)]
pub struct Context {
    player_count: usize,

    /// Points per player.
    pub scoreboard: PlayerMap<u32>,

    /// Rounds started so far.
    pub rounds: u32,

    /// The active round.
    pub round: Round,

    /// Every shuffle in the game draws from this.
    pub rng: GameRng,
}

impl Context {
    /// Create a context for `player_count` players with a seeded RNG.
    pub fn new(player_count: usize, seed: u64) -> Result<Self, RuleError> {
        Self::with_rng(player_count, GameRng::new(seed))
    }

    /// Create a context around an existing RNG.
    pub fn with_rng(player_count: usize, rng: GameRng) -> Result<Self, RuleError> {
        check_player_count(player_count)?;

        Ok(Self {
            player_count,
            scoreboard: PlayerMap::with_value(player_count, 0),
            rounds: 0,
            round: Round::empty(player_count),
            rng,
        })
    }

    /// Get player count.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.player_count
    }

    /// Iterate over all seats.
    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        PlayerId::all(self.player_count)
    }

    /// Shuffle the discard pile back into the draw pile.
    ///
    /// The top discard stays face up.
    pub fn refill_draw_pile(&mut self) {
        let round = &mut self.round;
        let Some(top) = round.discard.pop() else {
            return;
        };
        round.draw.append(&mut round.discard);
        round.discard.push(top);
        self.rng.shuffle(&mut round.draw);
    }

    /// Draw the top card of the draw pile into a player's hand.
    ///
    /// Refills from the discard pile when the draw pile is empty.
    pub fn draw_card(&mut self, player: PlayerId) -> Result<Card, RuleError> {
        if self.round.draw.is_empty() {
            self.refill_draw_pile();
        }
        let card = self.round.draw.pop().ok_or(RuleError::DeckExhausted)?;
        self.round.hands[player].push(card);
        Ok(card)
    }

    /// Build the snapshot the current player decides from.
    #[must_use]
    pub fn request(&self, history: &Vector<MoveRecord>) -> Request {
        let player = self.round.current_player;
        Request {
            player,
            hand: self.round.hand(player).to_vec(),
            hand_sizes: self.round.hand_sizes(),
            scores: self.scoreboard.clone(),
            history: history.clone(),
            top_card: self.round.last_card,
            pending_effects: self.round.active_effects.clone(),
        }
    }
}

/// Reject player counts outside `[MIN_PLAYERS, MAX_PLAYERS]`.
pub fn check_player_count(player_count: usize) -> Result<(), RuleError> {
    if (MIN_PLAYERS..=MAX_PLAYERS).contains(&player_count) {
        Ok(())
    } else {
        Err(RuleError::InvalidPlayerCount { count: player_count })
    }
}

/// What a player sees when asked to move.
///
/// Built fresh each turn; players never mutate game state through it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Request {
    /// The seat being asked.
    pub player: PlayerId,

    /// That seat's hand.
    pub hand: Vec<Card>,

    /// Hand sizes of every seat.
    pub hand_sizes: PlayerMap<usize>,

    /// Scoreboard.
    pub scores: PlayerMap<u32>,

    /// Every move so far.
    pub history: Vector<MoveRecord>,

    /// The card to match, with a wild showing its named color.
    pub top_card: Option<Card>,

    /// Effects waiting on this player.
    pub pending_effects: Effects,
}

impl Request {
    /// True if a blocking effect must be taken this turn.
    #[must_use]
    pub fn is_blocked(&self) -> bool {
        self.pending_effects.iter().any(|e| e.is_blocking())
    }
}
