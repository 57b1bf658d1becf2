//! Tic-Tac-Toe game implementation

pub mod board;
pub mod game;
pub mod lines;
pub mod symmetry;

pub use board::{BoardState, Cell, Player};
pub use game::{Game, GameOutcome, Move};
pub use lines::{LineAnalyzer, WINNING_LINES};
pub use symmetry::D4Transform;
