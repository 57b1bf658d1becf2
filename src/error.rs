//! Error types for the perfect_ttt crate

use thiserror::Error;

/// Main error type for the perfect_ttt crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid move: position {position} is out of range or already occupied")]
    InvalidMove { position: usize },

    #[error("game already over")]
    GameOver,

    #[error("no valid moves available")]
    NoMovesAvailable,

    #[error("invalid tree configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("root already exists at slot 0")]
    RootAlreadyExists,

    #[error("child ordinal {ordinal} is out of range for order {order}")]
    ChildOrdinalOutOfRange { ordinal: usize, order: usize },

    #[error("slot {slot} exceeds tree capacity {capacity}")]
    CapacityExceeded { slot: usize, capacity: usize },

    #[error("slot {slot} is already occupied")]
    SlotOccupied { slot: usize },

    #[error("slot {slot} holds no value")]
    SlotNotFound { slot: usize },

    #[error("board string too short: expected {expected} cells, got {got} in '{context}'")]
    InvalidBoardLength {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("invalid character '{character}' at position {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("invalid piece counts: X={x_count}, O={o_count} (must differ by at most 1)")]
    InvalidPieceCounts { x_count: usize, o_count: usize },

    #[error("invalid player '{player}' in '{context}' (expected 'X' or 'O')")]
    InvalidPlayerString { player: String, context: String },

    #[error("invalid board: {message}")]
    InvalidBoard { message: String },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;
