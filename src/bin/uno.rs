//! Terminal UNO.
//!
//! Seat 0 is you unless `--bots` is given; every other seat is a greedy bot.
//! Logs go to stderr (`RUST_LOG` overrides the default `info`). Ctrl-C or a
//! closed stdin ends the game with "Game aborted.".

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;

use rust_uno::core::{check_player_count, GameRng, RuleConfig, MAX_PLAYERS, MIN_PLAYERS};
use rust_uno::error::{GameError, PlayerError};
use rust_uno::game::Game;
use rust_uno::players::{GreedyPlayer, HumanPlayer, Player};
use rust_uno::rules::{Rule, StandardRule};

const DEFAULT_PLAYERS: usize = 4;

const ABORTED: &str = "Game aborted.";

#[derive(Parser)]
#[command(name = "uno")]
#[command(about = "Play UNO against greedy bots", long_about = None)]
struct Cli {
    /// Number of players; asked interactively when omitted
    #[arg(long)]
    players: Option<usize>,

    /// Seed for a replayable game
    #[arg(long)]
    seed: Option<u64>,

    /// Seat a bot in every chair and just watch
    #[arg(long, default_value = "false")]
    bots: bool,

    /// Score that ends the game
    #[arg(long, default_value = "500")]
    target_score: u32,
}

fn ask_player_count() -> io::Result<usize> {
    print!("How many players ({}-{})? ", MIN_PLAYERS, MAX_PLAYERS);
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    match line.trim().parse::<usize>() {
        Ok(n) if (MIN_PLAYERS..=MAX_PLAYERS).contains(&n) => Ok(n),
        _ => {
            println!("Invalid number, playing with {}.", DEFAULT_PLAYERS);
            Ok(DEFAULT_PLAYERS)
        }
    }
}

/// Print the abort message and exit on Ctrl-C, wherever the game is.
fn abort_on_interrupt() -> Result<(), ctrlc::Error> {
    ctrlc::set_handler(|| {
        println!();
        println!("{}", ABORTED);
        log::warn!("interrupt received, exiting");
        std::process::exit(0);
    })
}

fn seats(count: usize, seed: u64, human: bool) -> Vec<Box<dyn Player>> {
    let rng = GameRng::new(seed);
    (0..count)
        .map(|i| -> Box<dyn Player> {
            if human && i == 0 {
                Box::new(HumanPlayer::stdio("You"))
            } else {
                let stream = rng.for_context(&format!("player-{}", i));
                Box::new(GreedyPlayer::with_rng(format!("Bot {}", i), stream))
            }
        })
        .collect()
}

fn run<R: Rule>(game: &mut Game<R>) -> Result<(), GameError> {
    game.init()?;
    while !game.rule().is_over(game.context()) {
        let record = game.play_turn()?;
        println!("{}: {}", game.player_name(record.player), record.outcome);
    }

    println!();
    println!("Final scores:");
    let scores = game.context().scoreboard.clone();
    for (player, score) in scores.iter() {
        println!("  {}: {}", game.player_name(player), score);
    }
    if let Some(winner) = game.rule().winner(game.context()) {
        println!("{} wins!", game.player_name(winner));
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    if let Err(e) = abort_on_interrupt() {
        log::warn!("could not install interrupt handler: {}", e);
    }

    let count = match cli.players {
        Some(n) => n,
        None => match ask_player_count() {
            Ok(n) => n,
            Err(e) => {
                eprintln!("error: {}", e);
                return ExitCode::FAILURE;
            }
        },
    };

    if let Err(e) = check_player_count(count) {
        eprintln!("error: {}", e);
        return ExitCode::FAILURE;
    }

    let seed = cli.seed.unwrap_or_else(|| GameRng::from_entropy().seed());
    let rule = StandardRule::with_config(RuleConfig::new().with_target_score(cli.target_score));

    let mut game = match Game::with_players(rule, seats(count, seed, !cli.bots), Some(seed)) {
        Ok(game) => game,
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match run(&mut game) {
        Ok(()) => ExitCode::SUCCESS,
        Err(GameError::Player { source: PlayerError::InputClosed, .. }) => {
            println!();
            println!("{}", ABORTED);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
