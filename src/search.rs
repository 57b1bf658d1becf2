//! Exhaustive minimax search over Tic-Tac-Toe positions
//!
//! The search assigns every position a game-theoretic value from the fixed
//! perspective of X as the maximizer: `1` for an X win, `-1` for an O win,
//! `0` for a draw. Evaluation is plain exhaustive recursion; there is no
//! pruning and no transposition cache. The state space is bounded by the
//! 3x3 board, so a full search from the empty board completes in well under
//! human-perceptible latency.

use tracing::debug;

use crate::{
    error::{Error, Result},
    tictactoe::{BoardState, Player},
};

/// Value of a won position for X, the fixed maximizer.
pub const WIN: i32 = 1;
/// Value of a drawn position.
pub const DRAW: i32 = 0;
/// Value of a won position for O, the minimizer.
pub const LOSS: i32 = -1;

/// The move chosen by [`best_move`] together with its minimax value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BestMove {
    pub position: usize,
    pub value: i32,
}

/// Compute the game-theoretic value of a position.
///
/// The side to move is carried by `state.to_move`. Terminal positions return
/// their fixed value regardless of whose turn it is; both players' win
/// conditions and board fullness are re-tested on every call. Non-terminal
/// positions fold the values of all children, enumerated over empty cells in
/// ascending index order: X takes the maximum, O the minimum.
pub fn evaluate(state: &BoardState) -> i32 {
    if state.has_won(Player::X) {
        return WIN;
    }
    if state.has_won(Player::O) {
        return LOSS;
    }

    let empty = state.empty_positions();
    if empty.is_empty() {
        return DRAW;
    }

    let mut best = match state.to_move {
        Player::X => i32::MIN,
        Player::O => i32::MAX,
    };

    for pos in empty {
        let child = state
            .make_move(pos)
            .expect("empty positions are always legal");
        let value = evaluate(&child);

        best = match state.to_move {
            Player::X => best.max(value),
            Player::O => best.min(value),
        };
    }

    best
}

/// Find the optimal move for the side to move.
///
/// Empty cells are scanned in ascending index order and the first cell
/// achieving a strictly better value for the mover is kept, so ties resolve
/// to the earliest-found cell. A position that is already won but still has
/// empty cells is not an error; its children evaluate to the decided value.
///
/// # Errors
///
/// Returns [`Error::NoMovesAvailable`] when no empty cell exists.
pub fn best_move(state: &BoardState) -> Result<BestMove> {
    let empty = state.empty_positions();
    if empty.is_empty() {
        return Err(Error::NoMovesAvailable);
    }

    let mut chosen: Option<BestMove> = None;

    for pos in empty {
        let child = state
            .make_move(pos)
            .expect("empty positions are always legal");
        let value = evaluate(&child);

        let improves = match (&chosen, state.to_move) {
            (None, _) => true,
            (Some(best), Player::X) => value > best.value,
            (Some(best), Player::O) => value < best.value,
        };

        if improves {
            chosen = Some(BestMove {
                position: pos,
                value,
            });
        }
    }

    let best = chosen.expect("at least one empty cell was enumerated");
    debug!(
        state = %state.encode(),
        position = best.position,
        value = best.value,
        "minimax move selected"
    );
    Ok(best)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::Cell;

    #[test]
    fn test_empty_board_is_a_draw() {
        assert_eq!(evaluate(&BoardState::new()), DRAW);
    }

    #[test]
    fn test_terminal_values_ignore_side_to_move() {
        // X has won the top row; value is the same whether the encoding says
        // O to move (normal) or is probed mid-analysis.
        let won = BoardState::from_string("XXXOO...._O").unwrap();
        assert_eq!(evaluate(&won), WIN);

        let lost = BoardState::from_string("OOOXX..X._O").unwrap();
        assert_eq!(evaluate(&lost), LOSS);

        let drawn = BoardState::from_string("XOXXOOOXX").unwrap();
        assert_eq!(evaluate(&drawn), DRAW);
    }

    #[test]
    fn test_best_move_completes_a_row() {
        // XX------- with X to move: index 2 completes the top row. The
        // position is unreachable by legal play (O has not answered), so it
        // is built directly rather than parsed.
        let mut state = BoardState::new();
        state.cells[0] = Cell::X;
        state.cells[1] = Cell::X;
        let best = best_move(&state).unwrap();
        assert_eq!(best.position, 2);
        assert_eq!(best.value, WIN);

        // The resulting position evaluates to the win value for the mover.
        let after = state.make_move(2).unwrap();
        assert_eq!(evaluate(&after), WIN);
    }

    #[test]
    fn test_best_move_for_minimizer_blocks() {
        // X threatens the top row; O to move must take cell 2 or lose.
        let state = BoardState::from_string("XX..O...._O").unwrap();
        let best = best_move(&state).unwrap();
        assert_eq!(best.position, 2);
    }

    #[test]
    fn test_single_empty_cell_is_returned() {
        // Only cell 8 remains; it must be chosen whatever its value.
        let state = BoardState::from_string("XOXXOOOX._X").unwrap();
        let best = best_move(&state).unwrap();
        assert_eq!(best.position, 8);
    }

    #[test]
    fn test_full_board_has_no_moves() {
        let state = BoardState::from_string("XOXXOOOXX").unwrap();
        assert!(matches!(
            best_move(&state).unwrap_err(),
            Error::NoMovesAvailable
        ));
    }

    #[test]
    fn test_tie_break_keeps_earliest_cell() {
        // From the empty board every reply is a draw under perfect play, so
        // the ascending scan must settle on cell 0.
        let best = best_move(&BoardState::new()).unwrap();
        assert_eq!(best.position, 0);
        assert_eq!(best.value, DRAW);
    }
}
