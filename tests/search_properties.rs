//! Test suite for the exhaustive minimax search
//! Validates game-theoretic values, move selection, and symmetry consistency

use perfect_ttt::{
    Error, best_move, evaluate,
    search::{DRAW, WIN},
    tictactoe::{BoardState, Cell, D4Transform, Player},
};

mod game_values {
    use super::*;

    #[test]
    fn empty_board_is_a_draw_under_perfect_play() {
        let empty = BoardState::new();
        assert_eq!(evaluate(&empty), DRAW);

        let best = best_move(&empty).unwrap();
        assert_eq!(best.value, DRAW);
    }

    #[test]
    fn o_first_empty_board_is_also_a_draw() {
        let empty = BoardState::new_with_player(Player::O);
        assert_eq!(evaluate(&empty), DRAW);
    }

    #[test]
    fn won_positions_evaluate_to_their_fixed_value() {
        let x_won = BoardState::from_string("XXXOO...._O").unwrap();
        assert_eq!(evaluate(&x_won), 1);

        let o_won = BoardState::from_string("OOOXX..X._O").unwrap();
        assert_eq!(evaluate(&o_won), -1);

        let drawn = BoardState::from_string("XOXXOOOXX").unwrap();
        assert_eq!(evaluate(&drawn), 0);
    }

    #[test]
    fn x_opening_any_cell_keeps_the_draw() {
        // No first move loses for X under perfect play
        let empty = BoardState::new();
        for pos in 0..9 {
            let after = empty.make_move(pos).unwrap();
            assert_eq!(evaluate(&after), DRAW, "opening {pos} should hold the draw");
        }
    }
}

mod move_selection {
    use super::*;

    #[test]
    fn completes_two_in_a_row() {
        // XX. on the top row, OO. on the middle row; X to move takes cell 2
        let state = BoardState::from_string("XX..OO...").unwrap();
        assert_eq!(state.to_move, Player::X);

        let best = best_move(&state).unwrap();
        assert_eq!(best.position, 2);
        assert_eq!(best.value, WIN);

        let after = state.make_move(best.position).unwrap();
        assert_eq!(evaluate(&after), WIN);
    }

    #[test]
    fn unanswered_double_x_scenario() {
        // "XX-------" with X to move, as unreachable analysis position
        let mut state = BoardState::new();
        state.cells[0] = Cell::X;
        state.cells[1] = Cell::X;

        let best = best_move(&state).unwrap();
        assert_eq!(best.position, 2);
        assert_eq!(best.value, WIN);
    }

    #[test]
    fn minimizer_blocks_the_threat() {
        // X threatens the top row; O must answer at 2
        let state = BoardState::from_string("XX..O...._O").unwrap();
        let best = best_move(&state).unwrap();
        assert_eq!(best.position, 2);
    }

    #[test]
    fn single_empty_cell_is_chosen_regardless_of_value() {
        let state = BoardState::from_string("XOXXOOOX.").unwrap();
        let best = best_move(&state).unwrap();
        assert_eq!(best.position, 8);
    }

    #[test]
    fn full_board_reports_no_moves() {
        let state = BoardState::from_string("XOXXOOOXX").unwrap();
        assert!(matches!(
            best_move(&state).unwrap_err(),
            Error::NoMovesAvailable
        ));
    }

    #[test]
    fn ties_resolve_to_the_earliest_cell() {
        let best = best_move(&BoardState::new()).unwrap();
        assert_eq!(best.position, 0);
    }
}

mod symmetry_consistency {
    use super::*;

    fn sample_positions() -> Vec<BoardState> {
        [
            ".........",
            "X........",
            "....X....",
            "XO.......",
            "X...O....",
            "XX..O....",
            "XOX.O....",
            "X.O.XO...",
        ]
        .iter()
        .map(|s| BoardState::from_string(s).unwrap())
        .collect()
    }

    #[test]
    fn evaluation_is_invariant_under_d4_transforms() {
        for state in sample_positions() {
            let value = evaluate(&state);
            for transform in D4Transform::all() {
                let mirrored = state.transform(&transform);
                assert_eq!(
                    evaluate(&mirrored),
                    value,
                    "value changed under {transform:?} for {}",
                    state.encode()
                );
            }
        }
    }

    #[test]
    fn best_move_values_match_across_symmetries() {
        // The chosen index may differ among ties, but the achieved value must
        // be identical, and mirroring the chosen move back must stay optimal.
        for state in sample_positions() {
            if state.is_terminal() {
                continue;
            }
            let best = best_move(&state).unwrap();

            for transform in D4Transform::all() {
                let mirrored = state.transform(&transform);
                let mirrored_best = best_move(&mirrored).unwrap();
                assert_eq!(mirrored_best.value, best.value);

                // The best move of the base position, mapped through the
                // transform, must achieve the same value in the mirror.
                let mapped = transform.transform_position(best.position);
                let after = mirrored.make_move(mapped).unwrap();
                assert_eq!(evaluate(&after), best.value);
            }
        }
    }
}

mod end_to_end {
    use super::*;

    #[test]
    fn engine_against_itself_always_draws() {
        let mut state = BoardState::new();
        while !state.is_terminal() {
            let best = best_move(&state).unwrap();
            state = state.make_move(best.position).unwrap();
        }

        assert!(state.is_draw());
        assert_eq!(state.winner(), None);
    }

    #[test]
    fn engine_never_loses_to_a_greedy_opponent() {
        // Opponent always takes the lowest-indexed empty cell; the engine
        // (playing O, the minimizer) must not lose.
        let mut state = BoardState::new();
        while !state.is_terminal() {
            let pos = if state.to_move == Player::X {
                state.empty_positions()[0]
            } else {
                best_move(&state).unwrap().position
            };
            state = state.make_move(pos).unwrap();
        }

        assert_ne!(state.winner(), Some(Player::X));
    }
}
