//! Moves: what a player submits, and what the engine actually did with it.
//!
//! A `Move` is a request. The engine may coerce it (an unplayable card turns
//! into a draw) or extend it (a drawn card gets auto-played), so every step
//! reports a `StepOutcome`. History keeps both.

use serde::{Deserialize, Serialize};

use super::card::{Card, Color, Effect};
use super::player::PlayerId;

/// A player's decision for one turn.
///
/// ```
/// use rust_uno::core::{Card, Color, Move};
///
/// let draw = Move::draw();
/// assert!(draw.is_draw());
///
/// let wild = Move::play_wild(Card::wild(), Color::Blue);
/// assert_eq!(wild.color, Some(Color::Blue));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Card to play, `None` to draw (or to take a pending effect).
    pub card: Option<Card>,

    /// Color named for a wild card. Ignored for colored cards.
    pub color: Option<Color>,
}

impl Move {
    /// Draw instead of playing.
    #[must_use]
    pub const fn draw() -> Self {
        Self { card: None, color: None }
    }

    /// Play a colored card.
    #[must_use]
    pub const fn play(card: Card) -> Self {
        Self { card: Some(card), color: None }
    }

    /// Play a wild card and name its color.
    #[must_use]
    pub const fn play_wild(card: Card, color: Color) -> Self {
        Self { card: Some(card), color: Some(color) }
    }

    #[must_use]
    pub const fn is_draw(&self) -> bool {
        self.card.is_none()
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.card, self.color) {
            (None, _) => f.write_str("draw"),
            (Some(card), Some(color)) if card.is_wild() => write!(f, "{} as {}", card, color),
            (Some(card), _) => write!(f, "{}", card),
        }
    }
}

/// What one call to `Rule::step` applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepOutcome {
    /// A card went from the player's hand to the discard pile.
    ///
    /// `color` is the color the card now shows (the chosen color for wilds).
    /// `auto` is set when the card was drawn this turn and played by the
    /// engine without asking the player.
    Played { card: Card, color: Color, auto: bool },

    /// The player drew one card and kept it. `None` only for rulesets that
    /// allow passing on an exhausted deck.
    Drew { card: Option<Card> },

    /// The player took a pending effect instead of playing.
    Resolved { effect: Effect, drawn: usize },

    /// The previous round had ended. It was scored and, unless the game is
    /// over, a new round started. The submitted move was not applied.
    RoundOver {
        winner: Option<PlayerId>,
        points: u32,
        next_round: Option<u32>,
    },
}

impl StepOutcome {
    /// The card played this step, if any.
    #[must_use]
    pub fn played_card(&self) -> Option<Card> {
        match self {
            StepOutcome::Played { card, .. } => Some(*card),
            _ => None,
        }
    }
}

impl std::fmt::Display for StepOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StepOutcome::Played { card, color, auto } => {
                if card.is_wild() {
                    write!(f, "played {} as {}", card, color)?;
                } else {
                    write!(f, "played {}", card)?;
                }
                if *auto {
                    f.write_str(" (drawn)")?;
                }
                Ok(())
            }
            StepOutcome::Drew { card: Some(_) } => f.write_str("drew a card"),
            StepOutcome::Drew { card: None } => f.write_str("passed"),
            StepOutcome::Resolved { effect, drawn } => write!(f, "took {} (+{})", effect, drawn),
            StepOutcome::RoundOver { winner: Some(w), points, .. } => {
                write!(f, "round won by {} for {} points", w, points)
            }
            StepOutcome::RoundOver { winner: None, .. } => f.write_str("round ended"),
        }
    }
}

/// One entry of game history.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The seat that was asked to move.
    pub player: PlayerId,

    /// Round number (1-based) the move was made in.
    pub round: u32,

    /// Turn counter of that round after the step. For a round-over step,
    /// the number of turns the ended round lasted.
    pub turn: u32,

    /// What the player submitted.
    pub requested: Move,

    /// What the engine applied.
    pub outcome: StepOutcome,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::card::Symbol;

    #[test]
    fn test_move_constructors() {
        let card = Card::number(Color::Red, 3);
        assert!(Move::draw().is_draw());
        assert_eq!(Move::default(), Move::draw());
        assert_eq!(Move::play(card).card, Some(card));
        assert_eq!(Move::play(card).color, None);
    }

    #[test]
    fn test_move_display() {
        assert_eq!(Move::draw().to_string(), "draw");
        assert_eq!(Move::play(Card::new(Color::Blue, Symbol::Skip)).to_string(), "blue skip");
        assert_eq!(Move::play_wild(Card::wild(), Color::Green).to_string(), "wild as green");
    }

    #[test]
    fn test_outcome_display() {
        let played = StepOutcome::Played {
            card: Card::wild_draw_four(),
            color: Color::Yellow,
            auto: true,
        };
        assert_eq!(played.to_string(), "played wild draw 4 as yellow (drawn)");
        assert_eq!(played.played_card(), Some(Card::wild_draw_four()));

        let resolved = StepOutcome::Resolved { effect: Effect::DrawTwo, drawn: 2 };
        assert_eq!(resolved.to_string(), "took draw 2 (+2)");
        assert_eq!(resolved.played_card(), None);
    }

    #[test]
    fn test_record_serialization() {
        let record = MoveRecord {
            player: PlayerId::new(2),
            round: 1,
            turn: 4,
            requested: Move::play(Card::number(Color::Red, 1)),
            outcome: StepOutcome::Drew { card: Some(Card::number(Color::Blue, 9)) },
        };

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: MoveRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, deserialized);
    }
}
