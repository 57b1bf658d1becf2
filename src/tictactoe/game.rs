//! High-level game management

use serde::{Deserialize, Serialize};

use super::board::{BoardState, Player};

/// A move in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub position: usize,
    pub player: Player,
}

/// Outcome of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Player),
    Draw,
}

/// A complete game with history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    pub current: BoardState,
    pub moves: Vec<Move>,
    pub outcome: Option<GameOutcome>,
}

impl Game {
    /// Create a new game from the standard initial position
    pub fn new() -> Self {
        Game {
            current: BoardState::new(),
            moves: Vec::new(),
            outcome: None,
        }
    }

    /// Play a move for the side to move
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::GameOver`] if the game already has an outcome,
    /// or [`crate::Error::InvalidMove`] for an out-of-range or occupied
    /// position. The game state is unchanged on error.
    pub fn play(&mut self, position: usize) -> Result<(), crate::Error> {
        if self.outcome.is_some() {
            return Err(crate::Error::GameOver);
        }

        let mover = self.current.to_move;
        let new_state = self.current.make_move(position)?;

        self.moves.push(Move {
            position,
            player: mover,
        });
        self.current = new_state;

        if new_state.is_terminal() {
            self.outcome = Some(if let Some(winner) = new_state.winner() {
                GameOutcome::Win(winner)
            } else {
                GameOutcome::Draw
            });
        }

        Ok(())
    }

    /// Whether the game has ended
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
