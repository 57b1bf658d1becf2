//! Board state representation and basic operations

use std::fmt;

use serde::{Deserialize, Serialize};

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | ' ' | '-' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }
}

/// A player in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}

/// Complete board state including cells and whose turn it is
///
/// This type implements `Copy` since it's only 10 bytes (9 bytes for cells +
/// 1 byte for the player enum). Moves produce fresh values; a state held by a
/// caller is never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardState {
    pub cells: [Cell; 9],
    pub to_move: Player,
}

/// Count of each piece type on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PieceCount {
    x: usize,
    o: usize,
}

impl BoardState {
    /// Create a new empty board with X to move
    pub fn new() -> Self {
        Self::new_with_player(Player::X)
    }

    /// Create a new empty board with a specified player to move first.
    ///
    /// Standard games open with X; O-first boards are supported for analysis
    /// and for enumerating trees from either perspective.
    pub fn new_with_player(first_player: Player) -> Self {
        BoardState {
            cells: [Cell::Empty; 9],
            to_move: first_player,
        }
    }

    /// Helper: Parse 9 cells from a slice of characters.
    fn parse_cells(chars: &[char], context: &str) -> Result<[Cell; 9], crate::Error> {
        if chars.len() < 9 {
            return Err(crate::Error::InvalidBoardLength {
                expected: 9,
                got: chars.len(),
                context: context.to_string(),
            });
        }

        let mut cells = [Cell::Empty; 9];
        for (i, &c) in chars.iter().take(9).enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: context.to_string(),
            })?;
        }

        Ok(cells)
    }

    /// Helper: Count pieces on the board.
    fn count_pieces(cells: &[Cell; 9]) -> PieceCount {
        let mut count = PieceCount { x: 0, o: 0 };
        for cell in cells {
            match cell {
                Cell::X => count.x += 1,
                Cell::O => count.o += 1,
                Cell::Empty => {}
            }
        }
        count
    }

    fn parse_player(player_str: &str, context: &str) -> Result<Player, crate::Error> {
        match player_str {
            "X" => Ok(Player::X),
            "O" => Ok(Player::O),
            _ => Err(crate::Error::InvalidPlayerString {
                player: player_str.to_string(),
                context: context.to_string(),
            }),
        }
    }

    fn determine_turn_from_counts(count: &PieceCount) -> Result<Player, crate::Error> {
        if count.x == count.o {
            Ok(Player::X)
        } else if count.x == count.o + 1 {
            Ok(Player::O)
        } else {
            Err(crate::Error::InvalidPieceCounts {
                x_count: count.x,
                o_count: count.o,
            })
        }
    }

    fn ensure_turn_consistent_with_counts(
        count: &PieceCount,
        player: Player,
        context: &str,
    ) -> Result<(), crate::Error> {
        let valid = match player {
            Player::X => count.x == count.o || count.o == count.x + 1,
            Player::O => count.x == count.o || count.x == count.o + 1,
        };

        if valid {
            Ok(())
        } else {
            Err(crate::Error::InvalidBoard {
                message: format!(
                    "piece counts (X={}, O={}) are inconsistent with {player} to move in '{context}'",
                    count.x, count.o
                ),
            })
        }
    }

    /// Create a board from a string representation.
    ///
    /// The string should contain 9 characters (whitespace is filtered out;
    /// `.`, `-` or a space denote an empty cell) and may optionally include a
    /// suffix `_X` or `_O` to explicitly set the player to move. When the
    /// suffix is omitted, the player is inferred from the piece counts,
    /// defaulting to X-first semantics for ambiguous cases.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The board part has fewer than 9 non-whitespace characters
    /// - Any character is not a valid cell representation
    /// - The piece counts are invalid (difference greater than 1)
    /// - A provided `_X`/`_O` suffix conflicts with the piece counts
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let cleaned: String = s.chars().filter(|c| !c.is_whitespace()).collect();
        let (board_part, specified_turn) = Self::split_board_and_turn(&cleaned)?;
        let chars: Vec<char> = board_part.chars().collect();
        let cells = Self::parse_cells(&chars, s)?;
        let count = Self::count_pieces(&cells);

        let to_move = if let Some(turn) = specified_turn {
            Self::ensure_turn_consistent_with_counts(&count, turn, s).map(|_| turn)?
        } else {
            Self::determine_turn_from_counts(&count)?
        };

        Ok(BoardState { cells, to_move })
    }

    fn split_board_and_turn(cleaned: &str) -> Result<(&str, Option<Player>), crate::Error> {
        if let Some(idx) = cleaned.find('_') {
            let board = &cleaned[..idx];
            let suffix = &cleaned[idx + 1..];
            if suffix.is_empty() {
                return Err(crate::Error::InvalidPlayerString {
                    player: String::new(),
                    context: cleaned.to_string(),
                });
            }
            let player = Self::parse_player(suffix, cleaned)?;
            Ok((board, Some(player)))
        } else {
            Ok((cleaned, None))
        }
    }

    /// Count the number of occupied cells on the board.
    pub fn occupied_count(&self) -> usize {
        let count = Self::count_pieces(&self.cells);
        count.x + count.o
    }

    /// Get cell at position (0-8)
    pub fn get(&self, pos: usize) -> Cell {
        self.cells[pos]
    }

    /// Check if a position is empty
    pub fn is_empty(&self, pos: usize) -> bool {
        self.cells[pos] == Cell::Empty
    }

    /// Get all empty positions in ascending order
    pub fn empty_positions(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| i)
            .collect()
    }

    /// Make a move and return a new board state
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidMove`] if the position is out of range
    /// or already occupied. The original state is unchanged either way, so the
    /// interactive shell can re-prompt on failure.
    #[must_use = "make_move returns a new board state; the original is unchanged"]
    pub fn make_move(&self, pos: usize) -> Result<BoardState, crate::Error> {
        if pos >= 9 || !self.is_empty(pos) {
            return Err(crate::Error::InvalidMove { position: pos });
        }

        let mut new_state = *self;
        new_state.cells[pos] = self.to_move.to_cell();
        new_state.to_move = self.to_move.opponent();
        Ok(new_state)
    }

    /// Get legal moves in this position (empty cells when game not terminal)
    pub fn legal_moves(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }
        self.empty_positions()
    }

    /// Check if a player has won
    pub fn has_won(&self, player: Player) -> bool {
        super::lines::LineAnalyzer::has_won(&self.cells, player)
    }

    /// Check if the game is over (win or draw)
    pub fn is_terminal(&self) -> bool {
        self.has_won(Player::X) || self.has_won(Player::O) || self.occupied_count() == 9
    }

    /// Check if the position is a draw (all cells filled, no winner)
    pub fn is_draw(&self) -> bool {
        !self.cells.contains(&Cell::Empty) && self.winner().is_none()
    }

    /// Get the winner if there is one
    pub fn winner(&self) -> Option<Player> {
        if self.has_won(Player::X) {
            Some(Player::X)
        } else if self.has_won(Player::O) {
            Some(Player::O)
        } else {
            None
        }
    }

    /// Get a canonical string representation for use as a key
    pub fn encode(&self) -> String {
        format!(
            "{}_{}",
            self.cells.iter().map(|&c| c.to_char()).collect::<String>(),
            self.to_move
        )
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.cells.iter().enumerate() {
            write!(f, "{}", cell.to_char())?;
            if (i + 1).is_multiple_of(3) && i < 8 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
