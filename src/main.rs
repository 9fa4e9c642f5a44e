//! Terminal front-end for the PomoPets tic-tac-toe mini-game.
//!
//! Stands in for the app's rendering layer: it renders every published
//! snapshot, forwards cell selections while it is the human's turn, and
//! keeps input disabled while a bot move is pending.

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Side};
use pomopets_games::{EngineConfig, GameEngine, GameState, Mark, Outcome, Phase, UniformRandom};
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = EngineConfig {
        bot_delay_min: Duration::from_millis(cli.delay_min),
        bot_delay_max: Duration::from_millis(cli.delay_max),
        reveal_delay: Duration::from_millis(cli.reveal),
    };
    let strategy = match cli.seed {
        Some(seed) => UniformRandom::seeded(seed),
        None => UniformRandom::new(),
    };
    let engine = GameEngine::with_strategy(config, Box::new(strategy));
    let mut updates = engine.subscribe();

    let side = match cli.side {
        Side::X => Mark::X,
        Side::O => Mark::O,
    };

    let mut snapshot = engine.select_side(side);
    render(&snapshot, cli.json)?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        if snapshot.phase() == Phase::Finished {
            match snapshot.winner() {
                Some(Outcome::Won(mark)) if mark == side => println!("You win!"),
                Some(Outcome::Won(_)) => println!("The bot wins!"),
                Some(Outcome::Draw) => println!("Draw!"),
                None => {}
            }
            println!("Replay? [y/N]");
            let Some(line) = lines.next_line().await? else {
                break;
            };
            if line.trim().eq_ignore_ascii_case("y") {
                engine.replay();
                snapshot = engine.select_side(side);
                render(&snapshot, cli.json)?;
                continue;
            }
            break;
        }

        let my_turn = snapshot.phase() == Phase::Playing
            && snapshot.winner().is_none()
            && !snapshot.bot_pending()
            && snapshot.current_turn() == snapshot.human_mark();

        if my_turn {
            let Some(index) = prompt_for_cell(&mut lines).await? else {
                break;
            };
            let next = engine.select_cell(index);
            if next == snapshot {
                println!("Cell {index} is not available.");
            } else {
                snapshot = next;
                render(&snapshot, cli.json)?;
            }
        } else {
            // Waiting on the scheduler: bot move or result reveal.
            updates.changed().await?;
            snapshot = updates.borrow_and_update().clone();
            render(&snapshot, cli.json)?;
        }
    }

    engine.dispose();
    Ok(())
}

/// Reads a cell index from stdin; `None` on end of input.
async fn prompt_for_cell(lines: &mut Lines<BufReader<Stdin>>) -> Result<Option<usize>> {
    loop {
        println!("Your move (0-8):");
        let Some(line) = lines.next_line().await? else {
            return Ok(None);
        };
        match line.trim().parse::<usize>() {
            Ok(index) if index < 9 => return Ok(Some(index)),
            _ => println!("Enter a cell index between 0 and 8."),
        }
    }
}

fn render(state: &GameState, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(state)?);
    } else {
        println!("{}\n", state.board().display());
    }
    Ok(())
}
