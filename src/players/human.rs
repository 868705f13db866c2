use std::io::{self, BufRead, Write};

use crate::core::{Color, Move, Request};
use crate::error::PlayerError;

use super::Player;

/// A person at a terminal.
///
/// Reads one answer per line. Bad input is reported and asked again; a card
/// that does not match the top card is refused locally before the rules
/// ever see it.
pub struct HumanPlayer<R, W> {
    name: String,
    input: R,
    output: W,
}

impl HumanPlayer<io::StdinLock<'static>, io::Stdout> {
    /// A player on the process's stdin and stdout.
    pub fn stdio(name: impl Into<String>) -> Self {
        Self::new(name, io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    pub fn new(name: impl Into<String>, input: R, output: W) -> Self {
        Self {
            name: name.into(),
            input,
            output,
        }
    }

    /// Give back the output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    fn ask(&mut self, prompt: &str) -> Result<String, PlayerError> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PlayerError::InputClosed);
        }
        Ok(line.trim().to_ascii_lowercase())
    }

    fn ask_color(&mut self) -> Result<Color, PlayerError> {
        loop {
            let answer = self.ask("Choose color (red, blue, green, yellow): ")?;
            match answer.parse::<Color>() {
                Ok(color) if color != Color::Wild => return Ok(color),
                _ => writeln!(self.output, "Invalid color.")?,
            }
        }
    }

    fn show(&mut self, request: &Request) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "--- {}'s turn ---", self.name)?;
        if let Some(top) = request.top_card {
            writeln!(self.output, "Top card: {}", top)?;
        }
        writeln!(self.output, "Your hand:")?;
        for (idx, card) in request.hand.iter().enumerate() {
            writeln!(self.output, "  {}: {}", idx, card)?;
        }
        Ok(())
    }
}

impl<R: BufRead, W: Write> Player for HumanPlayer<R, W> {
    fn name(&self) -> &str {
        &self.name
    }

    fn play(&mut self, request: &Request) -> Result<Move, PlayerError> {
        self.show(request)?;

        if let Some(effect) = request.pending_effects.iter().rev().find(|e| e.is_blocking()) {
            writeln!(self.output, "You must take the {}.", effect)?;
            return Ok(Move::draw());
        }

        loop {
            let answer = self.ask("Enter card index to play, or 'd' to draw: ")?;
            if answer == "d" {
                return Ok(Move::draw());
            }

            let Ok(idx) = answer.parse::<usize>() else {
                writeln!(self.output, "Invalid input.")?;
                continue;
            };
            let Some(&card) = request.hand.get(idx) else {
                writeln!(self.output, "Invalid index.")?;
                continue;
            };

            if card.is_wild() {
                let color = self.ask_color()?;
                return Ok(Move::play_wild(card, color));
            }
            if let Some(top) = request.top_card {
                if !card.matches(top) {
                    writeln!(self.output, "Invalid move! Card {} does not match {}", card, top)?;
                    continue;
                }
            }
            return Ok(Move::play(card));
        }
    }
}
