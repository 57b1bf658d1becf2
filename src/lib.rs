//! Perfect-play Tic-Tac-Toe engine with an array-indexed game tree
//!
//! This crate provides:
//! - Complete Tic-Tac-Toe board implementation with parsing and win analysis
//! - Exhaustive minimax search computing perfect play
//! - A generic fixed-capacity, order-configurable array-indexed tree
//! - Game tree materialization in slot-addressed form for dumps and analysis

pub mod cli;
pub mod enumeration;
pub mod error;
pub mod search;
pub mod tictactoe;
pub mod tree;

pub use enumeration::{GameTreeArray, expand_game_tree};
pub use error::{Error, Result};
pub use search::{BestMove, best_move, evaluate};
pub use tree::ArrayTree;
