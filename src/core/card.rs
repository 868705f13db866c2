//! Cards and the effects they leave behind.
//!
//! A `Card` is an immutable `(Color, Symbol)` pair compared by value. Two
//! copies of "red 5" in the deck are indistinguishable, which is all the
//! rules ever need.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Card color. `Wild` marks the color-independent wild family.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Blue,
    Green,
    Yellow,
    Wild,
}

impl Color {
    /// Colors a player may name when playing a wild card.
    pub const PLAYABLE: [Color; 4] = [Color::Red, Color::Blue, Color::Green, Color::Yellow];

    /// Lowercase name, as shown to players.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Blue => "blue",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Wild => "wild",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a color name is not recognised.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown color `{0}`")]
pub struct ParseColorError(pub String);

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "red" | "r" => Ok(Color::Red),
            "blue" | "b" => Ok(Color::Blue),
            "green" | "g" => Ok(Color::Green),
            "yellow" | "y" => Ok(Color::Yellow),
            "wild" => Ok(Color::Wild),
            _ => Err(ParseColorError(s.to_string())),
        }
    }
}

/// Card face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Symbol {
    Number(u8),
    DrawTwo,
    Reverse,
    Skip,
    Wild,
    WildDrawFour,
}

impl Symbol {
    /// The action symbols printed on every color.
    pub const ACTIONS: [Symbol; 3] = [Symbol::DrawTwo, Symbol::Reverse, Symbol::Skip];

    /// Points this card is worth in an opponent's hand at round end.
    #[must_use]
    pub const fn value(self) -> u32 {
        match self {
            Symbol::Number(n) => n as u32,
            Symbol::DrawTwo | Symbol::Reverse | Symbol::Skip => 20,
            Symbol::Wild | Symbol::WildDrawFour => 50,
        }
    }

    /// The effect left pending when a card with this symbol is played.
    #[must_use]
    pub const fn effect(self) -> Option<Effect> {
        match self {
            Symbol::DrawTwo => Some(Effect::DrawTwo),
            Symbol::Reverse => Some(Effect::Reverse),
            Symbol::Skip => Some(Effect::Skip),
            Symbol::WildDrawFour => Some(Effect::WildDrawFour),
            Symbol::Number(_) | Symbol::Wild => None,
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::Number(n) => write!(f, "{}", n),
            Symbol::DrawTwo => f.write_str("draw 2"),
            Symbol::Reverse => f.write_str("reverse"),
            Symbol::Skip => f.write_str("skip"),
            Symbol::Wild => f.write_str("wild"),
            Symbol::WildDrawFour => f.write_str("draw 4"),
        }
    }
}

/// An immutable card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub color: Color,
    pub symbol: Symbol,
}

impl Card {
    #[must_use]
    pub const fn new(color: Color, symbol: Symbol) -> Self {
        Self { color, symbol }
    }

    /// Shorthand for a number card.
    #[must_use]
    pub const fn number(color: Color, n: u8) -> Self {
        Self::new(color, Symbol::Number(n))
    }

    #[must_use]
    pub const fn wild() -> Self {
        Self::new(Color::Wild, Symbol::Wild)
    }

    #[must_use]
    pub const fn wild_draw_four() -> Self {
        Self::new(Color::Wild, Symbol::WildDrawFour)
    }

    /// True for the wild family (`wild` and `wild draw 4`).
    #[must_use]
    pub fn is_wild(self) -> bool {
        self.color == Color::Wild
    }

    /// Same face, repainted. Used when a wild card takes the chosen color.
    #[must_use]
    pub const fn with_color(self, color: Color) -> Self {
        Self::new(color, self.symbol)
    }

    /// True if this card can follow `top` by color, symbol, or wildness.
    ///
    /// Ignores pending effects; see `StandardRule::is_playable` for the
    /// full check.
    #[must_use]
    pub fn matches(self, top: Card) -> bool {
        self.is_wild() || self.color == top.color || self.symbol == top.symbol
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.color, self.symbol) {
            (Color::Wild, Symbol::Wild) => f.write_str("wild"),
            (Color::Wild, Symbol::WildDrawFour) => f.write_str("wild draw 4"),
            (color, symbol) => write!(f, "{} {}", color, symbol),
        }
    }
}

/// A pending action, resolved on the next player's turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Effect {
    DrawTwo,
    Skip,
    WildDrawFour,
    /// Not resolved by a turn; stays pending while play runs backwards.
    Reverse,
}

impl Effect {
    /// Blocking effects leave the next player unable to play a card.
    #[must_use]
    pub const fn is_blocking(self) -> bool {
        !matches!(self, Effect::Reverse)
    }

    /// Cards forced on the player who resolves the effect.
    #[must_use]
    pub const fn penalty(self) -> usize {
        match self {
            Effect::DrawTwo => 2,
            Effect::WildDrawFour => 4,
            Effect::Skip | Effect::Reverse => 0,
        }
    }
}

impl fmt::Display for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Effect::DrawTwo => f.write_str("draw 2"),
            Effect::Skip => f.write_str("skip"),
            Effect::WildDrawFour => f.write_str("wild draw 4"),
            Effect::Reverse => f.write_str("reverse"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structural_equality() {
        assert_eq!(Card::number(Color::Red, 5), Card::new(Color::Red, Symbol::Number(5)));
        assert_ne!(Card::number(Color::Red, 5), Card::number(Color::Blue, 5));
    }

    #[test]
    fn test_values() {
        assert_eq!(Symbol::Number(7).value(), 7);
        assert_eq!(Symbol::Number(0).value(), 0);
        assert_eq!(Symbol::Skip.value(), 20);
        assert_eq!(Symbol::Reverse.value(), 20);
        assert_eq!(Symbol::DrawTwo.value(), 20);
        assert_eq!(Symbol::Wild.value(), 50);
        assert_eq!(Symbol::WildDrawFour.value(), 50);
    }

    #[test]
    fn test_effects() {
        assert_eq!(Symbol::Number(3).effect(), None);
        assert_eq!(Symbol::Wild.effect(), None);
        assert_eq!(Symbol::WildDrawFour.effect(), Some(Effect::WildDrawFour));
        assert!(Effect::Skip.is_blocking());
        assert!(!Effect::Reverse.is_blocking());
        assert_eq!(Effect::DrawTwo.penalty(), 2);
        assert_eq!(Effect::WildDrawFour.penalty(), 4);
        assert_eq!(Effect::Skip.penalty(), 0);
    }

    #[test]
    fn test_matches() {
        let top = Card::number(Color::Red, 5);
        assert!(Card::number(Color::Red, 1).matches(top));
        assert!(Card::number(Color::Blue, 5).matches(top));
        assert!(Card::wild().matches(top));
        assert!(Card::wild_draw_four().matches(top));
        assert!(!Card::number(Color::Blue, 1).matches(top));
        assert!(!Card::new(Color::Green, Symbol::Skip).matches(top));
    }

    #[test]
    fn test_display() {
        assert_eq!(Card::number(Color::Red, 5).to_string(), "red 5");
        assert_eq!(Card::new(Color::Blue, Symbol::DrawTwo).to_string(), "blue draw 2");
        assert_eq!(Card::wild().to_string(), "wild");
        assert_eq!(Card::wild_draw_four().to_string(), "wild draw 4");
        assert_eq!(Card::wild().with_color(Color::Green).to_string(), "green wild");
    }

    #[test]
    fn test_parse_color() {
        assert_eq!("Red".parse::<Color>(), Ok(Color::Red));
        assert_eq!(" yellow ".parse::<Color>(), Ok(Color::Yellow));
        assert_eq!("g".parse::<Color>(), Ok(Color::Green));
        assert!("purple".parse::<Color>().is_err());
    }

    #[test]
    fn test_card_serde() {
        let card = Card::new(Color::Yellow, Symbol::Reverse);
        let json = serde_json::to_string(&card).unwrap();
        assert_eq!(serde_json::from_str::<Card>(&json).unwrap(), card);
    }
}
