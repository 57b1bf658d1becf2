//! Enumerate command - materialize the game tree and dump its leading slots

use anyhow::Result;
use clap::{Parser, ValueEnum};

use crate::{
    cli::output::{create_spinner, format_number, print_kv, print_section},
    enumeration::expand_game_tree,
    tictactoe::Player,
};

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum FirstPlayer {
    X,
    O,
}

impl FirstPlayer {
    fn to_player(self) -> Player {
        match self {
            FirstPlayer::X => Player::X,
            FirstPlayer::O => Player::O,
        }
    }
}

#[derive(Parser, Debug)]
#[command(about = "Materialize the game tree and dump its leading slots")]
pub struct EnumerateArgs {
    /// Player making the first move
    #[arg(long, value_enum, default_value = "x")]
    pub first_player: FirstPlayer,

    /// Limit expansion depth in plies (default: expand to terminal positions)
    #[arg(long)]
    pub plies: Option<usize>,

    /// Number of leading slots to dump
    #[arg(long, default_value_t = 100)]
    pub count: usize,
}

/// Expand the game tree and print statistics plus a slot dump
pub fn execute(args: EnumerateArgs) -> Result<()> {
    let spinner = create_spinner("Expanding game tree...");
    let tree = expand_game_tree(args.first_player.to_player(), args.plies);
    spinner.finish_and_clear();

    print_section("Game tree enumeration");
    print_kv("Positions", &format_number(tree.len()));
    if let Some(max_slot) = tree.max_slot() {
        print_kv("Highest slot", &format_number(max_slot));
    }
    if let Some(plies) = args.plies {
        print_kv("Ply limit", &plies.to_string());
    }

    println!("\nLeading slots:");
    for slot in 0..args.count {
        match tree.get(slot) {
            Some(state) => {
                let cells: String = state.cells.iter().map(|c| c.to_char()).collect();
                println!("{slot:>3}) {cells}");
            }
            None => println!("{slot:>3}) (empty)"),
        }
    }

    Ok(())
}
