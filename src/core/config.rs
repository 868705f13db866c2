//! Rule configuration types.
//!
//! Rulesets are configured at construction:
//! - `DeckConfig`: Deck composition (ranks and copies per card)
//! - `RuleConfig`: Hand size, target score, deck, and draw behavior
//!
//! Neither type holds any game state.

use serde::{de, Deserialize, Deserializer, Serialize};

use super::card::{Card, Color, Symbol};

/// Fewest seats a game can start with.
pub const MIN_PLAYERS: usize = 2;

/// Most seats a game can start with.
pub const MAX_PLAYERS: usize = 10;

/// Deck composition.
///
/// Per color: `zero_copies` zeros, `number_copies` of each rank `1..ranks`,
/// `action_copies` of each action symbol. Plus `wild_copies` each of `wild`
/// and `wild draw 4`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckConfig {
    /// Number ranks run `0..ranks`.
    pub ranks: u8,
    pub zero_copies: usize,
    pub number_copies: usize,
    pub action_copies: usize,
    pub wild_copies: usize,
}

impl DeckConfig {
    /// The canonical 108-card deck, number ranks 0–9.
    ///
    /// The 0–7 rank variant is `compact()`.
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            ranks: 10,
            zero_copies: 1,
            number_copies: 2,
            action_copies: 2,
            wild_copies: 4,
        }
    }

    /// The truncated deck with number ranks 0–7: one of everything per
    /// color, 52 cards.
    ///
    /// Deals seven cards to at most 7 players; past 5 players a round can
    /// run out of cards to draw.
    #[must_use]
    pub const fn compact() -> Self {
        Self {
            ranks: 8,
            zero_copies: 1,
            number_copies: 1,
            action_copies: 1,
            wild_copies: 4,
        }
    }

    /// Number cards only, one of each rank per color.
    #[must_use]
    pub const fn numbers_only(ranks: u8) -> Self {
        Self {
            ranks,
            zero_copies: 1,
            number_copies: 1,
            action_copies: 0,
            wild_copies: 0,
        }
    }

    /// Total cards this configuration builds.
    #[must_use]
    pub fn size(&self) -> usize {
        let numbers = self.zero_copies + self.number_copies * self.ranks.saturating_sub(1) as usize;
        let actions = self.action_copies * Symbol::ACTIONS.len();
        Color::PLAYABLE.len() * (numbers + actions) + 2 * self.wild_copies
    }

    /// Build the deck in a fixed order. Shuffling is the caller's job.
    #[must_use]
    pub fn build(&self) -> Vec<Card> {
        let mut deck = Vec::with_capacity(self.size());

        for color in Color::PLAYABLE {
            for rank in 0..self.ranks {
                let copies = if rank == 0 { self.zero_copies } else { self.number_copies };
                deck.extend(std::iter::repeat(Card::number(color, rank)).take(copies));
            }
            for symbol in Symbol::ACTIONS {
                deck.extend(std::iter::repeat(Card::new(color, symbol)).take(self.action_copies));
            }
        }

        deck.extend(std::iter::repeat(Card::wild()).take(self.wild_copies));
        deck.extend(std::iter::repeat(Card::wild_draw_four()).take(self.wild_copies));

        deck
    }
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self::standard()
    }
}

/// Configuration for the standard ruleset.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Cards dealt to each player at the start of a round.
    pub hand_size: usize,

    /// The game ends once any player's score reaches this.
    pub target_score: u32,

    /// Deck composition.
    pub deck: DeckConfig,

    /// Play a voluntarily drawn card immediately when it is playable.
    pub auto_play_drawn: bool,

    /// Color given to a wild card played without a color choice
    /// (auto-played, or submitted without one). Never `Color::Wild`.
    #[serde(deserialize_with = "playable_color")]
    pub fallback_color: Color,
}

fn playable_color<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Color, D::Error> {
    let color = Color::deserialize(deserializer)?;
    if color == Color::Wild {
        return Err(de::Error::custom("fallback color must be a playable color"));
    }
    Ok(color)
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            hand_size: 7,
            target_score: 500,
            deck: DeckConfig::standard(),
            auto_play_drawn: true,
            fallback_color: Color::Red,
        }
    }
}

impl RuleConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the starting hand size.
    #[must_use]
    pub fn with_hand_size(mut self, size: usize) -> Self {
        self.hand_size = size;
        self
    }

    /// Set the score that ends the game.
    #[must_use]
    pub fn with_target_score(mut self, score: u32) -> Self {
        self.target_score = score;
        self
    }

    /// Set the deck composition.
    #[must_use]
    pub fn with_deck(mut self, deck: DeckConfig) -> Self {
        self.deck = deck;
        self
    }

    /// Enable or disable auto-playing a drawn card.
    #[must_use]
    pub fn with_auto_play_drawn(mut self, enabled: bool) -> Self {
        self.auto_play_drawn = enabled;
        self
    }

    /// Set the color a wild card takes when none was chosen.
    ///
    /// Panics if `color` is `Color::Wild`.
    #[must_use]
    pub fn with_fallback_color(mut self, color: Color) -> Self {
        assert!(color != Color::Wild, "Fallback color must be a playable color");
        self.fallback_color = color;
        self
    }
}
