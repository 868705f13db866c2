//! The game loop.
//!
//! Drives a `Rule` with a table of `Player`s until the rule says the game is
//! over, recording every move.

use im::Vector;
use log::info;

use crate::core::{Context, GameRng, Move, MoveRecord, PlayerId, PlayerMap, StepOutcome};
use crate::error::{GameError, RuleError};
use crate::players::{DrawPlayer, Player};
use crate::rules::Rule;

/// How a finished (or abandoned) game stands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameSummary {
    /// `None` until the rule declares the game over.
    pub winner: Option<PlayerId>,
    pub rounds: u32,
    pub turns: u64,
    pub scores: PlayerMap<u32>,
}

/// One game: rule, context, seats and history.
///
/// ## Example
///
/// ```
/// use rust_uno::game::Game;
/// use rust_uno::players::{GreedyPlayer, Player};
/// use rust_uno::rules::StandardRule;
///
/// let players: Vec<Box<dyn Player>> = (0..3)
///     .map(|i| Box::new(GreedyPlayer::new(format!("bot {}", i), i)) as Box<dyn Player>)
///     .collect();
///
/// let mut game = Game::with_players(StandardRule::new(), players, Some(42)).unwrap();
/// let summary = game.start().unwrap();
/// assert!(summary.winner.is_some());
/// ```
pub struct Game<R: Rule> {
    rule: R,
    context: Context,
    players: Vec<Box<dyn Player>>,
    history: Vector<MoveRecord>,
    max_turns: Option<u64>,
    turns: u64,
}

impl<R: Rule> Game<R> {
    /// Create a game with `player_count` always-draw seats.
    ///
    /// Replace seats with `set_player`. Without a seed the game is seeded
    /// from OS entropy.
    pub fn new(rule: R, player_count: usize, seed: Option<u64>) -> Result<Self, RuleError> {
        let players = (0..player_count)
            .map(|i| Box::new(DrawPlayer::new(format!("Player {}", i))) as Box<dyn Player>)
            .collect();
        Self::with_players(rule, players, seed)
    }

    /// Create a game with the given seats, in turn order.
    pub fn with_players(
        rule: R,
        players: Vec<Box<dyn Player>>,
        seed: Option<u64>,
    ) -> Result<Self, RuleError> {
        let rng = seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let context = Context::with_rng(players.len(), rng)?;

        Ok(Self {
            rule,
            context,
            players,
            history: Vector::new(),
            max_turns: None,
            turns: 0,
        })
    }

    /// Fail with `GameError::TurnLimit` instead of playing more than `limit`
    /// turns.
    #[must_use]
    pub fn with_max_turns(mut self, limit: u64) -> Self {
        self.max_turns = Some(limit);
        self
    }

    /// Seat a different player, returning the one replaced.
    ///
    /// Panics if the seat does not exist.
    pub fn set_player(&mut self, seat: PlayerId, player: Box<dyn Player>) -> Box<dyn Player> {
        assert!(
            seat.index() < self.players.len(),
            "{} does not exist in a {}-player game",
            seat,
            self.players.len()
        );
        std::mem::replace(&mut self.players[seat.index()], player)
    }

    /// Get the rule.
    pub fn rule(&self) -> &R {
        &self.rule
    }

    /// Get the game state.
    pub fn context(&self) -> &Context {
        &self.context
    }

    /// The seed every shuffle in this game derives from.
    pub fn seed(&self) -> u64 {
        self.context.rng.seed()
    }

    /// Every move so far.
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    /// Name of the player in a seat.
    pub fn player_name(&self, seat: PlayerId) -> &str {
        self.players[seat.index()].name()
    }

    /// Deal the first round.
    pub fn init(&mut self) -> Result<(), GameError> {
        self.rule.init_game(&mut self.context)?;
        self.history.clear();
        self.turns = 0;
        info!(
            "game starts: {} players, seed {}",
            self.context.player_count(),
            self.seed()
        );
        Ok(())
    }

    /// Ask the current player for a move and apply it.
    ///
    /// While a finished round waits to be scored, the player is not asked;
    /// the step only scores and deals.
    pub fn play_turn(&mut self) -> Result<MoveRecord, GameError> {
        if let Some(limit) = self.max_turns {
            if self.turns >= limit {
                return Err(GameError::TurnLimit { limit });
            }
        }

        let player = self.context.round.current_player;
        let round = self.context.rounds;
        let turns_before = self.context.round.turns;

        let requested = if self.context.round.is_started() && self.context.round.is_over() {
            Move::draw()
        } else {
            let request = self.context.request(&self.history);
            self.players[player.index()]
                .play(&request)
                .map_err(|source| GameError::Player { player, source })?
        };

        let outcome = self.rule.step(&mut self.context, &requested)?;

        // A round-over step deals a new round; report the one that ended.
        let turn = match outcome {
            StepOutcome::RoundOver { .. } => turns_before,
            _ => self.context.round.turns,
        };
        let record = MoveRecord {
            player,
            round,
            turn,
            requested,
            outcome,
        };
        self.history.push_back(record);
        self.turns += 1;
        Ok(record)
    }

    /// Play a whole game: deal, then take turns until the rule says stop.
    pub fn start(&mut self) -> Result<GameSummary, GameError> {
        self.init()?;
        while !self.rule.is_over(&self.context) {
            self.play_turn()?;
        }

        let summary = self.summary();
        if let Some(winner) = summary.winner {
            info!(
                "{} ({}) wins after {} rounds, {} turns",
                winner,
                self.player_name(winner),
                summary.rounds,
                summary.turns
            );
        }
        Ok(summary)
    }

    /// Current standing.
    pub fn summary(&self) -> GameSummary {
        GameSummary {
            winner: self.rule.winner(&self.context),
            rounds: self.context.rounds,
            turns: self.turns,
            scores: self.context.scoreboard.clone(),
        }
    }
}
