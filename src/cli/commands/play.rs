//! Play command - interactive game against the engine
//!
//! The shell owns the turn-taking loop: it reads human moves as 0-based cell
//! indices, re-prompts on malformed or illegal input without touching the
//! game state, and asks the search for one move per engine turn.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};

use crate::{
    cli::output::{render_board, render_index_grid},
    search,
    tictactoe::{Game, GameOutcome, Player},
};

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum HumanMark {
    X,
    O,
}

impl HumanMark {
    fn to_player(self) -> Player {
        match self {
            HumanMark::X => Player::X,
            HumanMark::O => Player::O,
        }
    }
}

#[derive(Parser, Debug)]
#[command(about = "Play an interactive game against the engine")]
pub struct PlayArgs {
    /// Mark to play as (X moves first)
    #[arg(long, value_enum, default_value = "x")]
    pub mark: HumanMark,
}

/// Run the interactive game loop
pub fn execute(args: PlayArgs) -> Result<()> {
    let human = args.mark.to_player();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("Perfect Tic-Tac-Toe\n");
    println!("Cells are numbered as follows:\n");
    println!("{}", render_index_grid());

    let mut game = Game::new();

    while !game.is_over() {
        if game.current.to_move == human {
            let position = prompt_for_move(&mut lines, human)?;
            if game.play(position).is_err() {
                println!("That position is already taken. Try again.");
                continue;
            }
        } else {
            let best = search::best_move(&game.current)
                .context("engine searched a position with no legal moves")?;
            game.play(best.position)
                .context("engine selected an illegal move")?;
            println!("Engine plays {}:\n", best.position);
            println!("{}", render_board(&game.current));
        }
    }

    match game.outcome {
        Some(GameOutcome::Win(winner)) if winner == human => println!("You win!"),
        Some(GameOutcome::Win(_)) => println!("Engine wins!"),
        _ => println!("It's a draw!"),
    }

    Ok(())
}

/// Prompt until a parseable in-range cell index is read.
///
/// Occupied-cell rejection happens in the caller so the game state stays the
/// single source of truth for legality.
fn prompt_for_move(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    human: Player,
) -> Result<usize> {
    loop {
        print!("Your move ({human}) - what position (0-8)? ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            bail!("input closed before the game finished");
        };
        let line = line.context("failed to read move")?;

        let Ok(position) = line.trim().parse::<usize>() else {
            println!("Invalid input, please enter a number between 0 and 8.");
            continue;
        };

        if position >= 9 {
            println!("Out of range, please enter a number between 0 and 8.");
            continue;
        }

        return Ok(position);
    }
}
