//! Solve command - evaluate a position and report the optimal move

use std::{fs::File, path::PathBuf};

use anyhow::Result;
use clap::Parser;
use serde::Serialize;

use crate::{
    cli::output::{print_kv, print_section},
    search::{self, DRAW, LOSS, WIN},
    tictactoe::{BoardState, LineAnalyzer},
};

#[derive(Parser, Debug)]
#[command(about = "Evaluate a position and report the optimal move")]
pub struct SolveArgs {
    /// Board state to evaluate (e.g. "XX..O...._O"); defaults to the empty board
    #[arg(long)]
    pub state: Option<String>,

    /// Export the evaluation as JSON
    #[arg(long)]
    pub export: Option<PathBuf>,
}

/// JSON shape of an exported evaluation
#[derive(Debug, Serialize)]
struct Evaluation {
    state: String,
    value: i32,
    best_move: Option<usize>,
    move_values: Vec<MoveValue>,
}

#[derive(Debug, Serialize)]
struct MoveValue {
    position: usize,
    value: i32,
}

/// Evaluate the position and print the minimax verdict
pub fn execute(args: SolveArgs) -> Result<()> {
    let state = match &args.state {
        Some(s) => BoardState::from_string(s)?,
        None => BoardState::new(),
    };

    print_section("Minimax evaluation");
    println!("{state}\n");

    let value = search::evaluate(&state);
    print_kv("Side to move", &state.to_move.to_string());
    print_kv("Value", describe_value(value));

    let move_values: Vec<MoveValue> = state
        .empty_positions()
        .into_iter()
        .map(|position| {
            let child = state
                .make_move(position)
                .expect("empty positions are always legal");
            MoveValue {
                position,
                value: search::evaluate(&child),
            }
        })
        .collect();

    let best = if state.is_terminal() || move_values.is_empty() {
        println!("  (state is terminal)");
        None
    } else {
        let best = search::best_move(&state)?;
        print_kv("Best move", &best.position.to_string());

        let mut immediate: Vec<usize> =
            LineAnalyzer::winning_moves(&state.cells, state.to_move)
                .into_iter()
                .collect();
        if !immediate.is_empty() {
            immediate.sort_unstable();
            let listed: Vec<String> = immediate.iter().map(|p| p.to_string()).collect();
            print_kv("Immediate wins", &listed.join(", "));
        }

        println!("\nMove values (from X's perspective):");
        for mv in &move_values {
            println!("  {}: {}", mv.position, describe_value(mv.value));
        }
        Some(best.position)
    };

    if let Some(path) = &args.export {
        let report = Evaluation {
            state: state.encode(),
            value,
            best_move: best,
            move_values,
        };
        serde_json::to_writer_pretty(File::create(path)?, &report)?;
        println!("\nEvaluation exported to: {}", path.display());
    }

    Ok(())
}

fn describe_value(value: i32) -> &'static str {
    match value {
        WIN => "X wins with perfect play",
        LOSS => "O wins with perfect play",
        DRAW => "draw with perfect play",
        _ => "unknown",
    }
}
