//! Perfect Tic-Tac-Toe CLI
//!
//! This binary provides a unified interface for:
//! - Playing interactively against the perfect-play engine
//! - Evaluating arbitrary positions with exhaustive minimax
//! - Materializing and dumping the slot-addressed game tree

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "perfect-ttt")]
#[command(version, about = "Perfect-play Tic-Tac-Toe engine", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive game against the engine
    Play(perfect_ttt::cli::commands::play::PlayArgs),

    /// Evaluate a position and report the optimal move
    Solve(perfect_ttt::cli::commands::solve::SolveArgs),

    /// Materialize the game tree and dump its leading slots
    Enumerate(perfect_ttt::cli::commands::enumerate::EnumerateArgs),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => perfect_ttt::cli::commands::play::execute(args),
        Commands::Solve(args) => perfect_ttt::cli::commands::solve::execute(args),
        Commands::Enumerate(args) => perfect_ttt::cli::commands::enumerate::execute(args),
    }
}
