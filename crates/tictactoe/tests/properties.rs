//! Property-based tests for the evaluator and the state machine.

use proptest::prelude::*;
use tictactoe::{
    Board, Cell, GameState, Mark, Outcome, Placement, Position,
    invariants::{GameInvariants, InvariantSet},
    rules::{LINES, evaluate},
};

/// Generate any cell value.
fn arb_cell() -> impl Strategy<Value = Cell> {
    prop_oneof![
        Just(Cell::Empty),
        Just(Cell::Occupied(Mark::X)),
        Just(Cell::Occupied(Mark::O)),
    ]
}

/// Generate any board, reachable or not.
fn arb_board() -> impl Strategy<Value = Board> {
    proptest::array::uniform9(arb_cell()).prop_map(Board::from_cells)
}

/// Generate a sequence of activations, repeats allowed.
fn arb_activations() -> impl Strategy<Value = Vec<usize>> {
    proptest::collection::vec(0usize..9, 0..20)
}

/// Render a cell the way serde writes it in TOML.
fn cell_toml(cell: Cell) -> &'static str {
    match cell {
        Cell::Empty => "\"Empty\"",
        Cell::Occupied(Mark::X) => "{ Occupied = \"X\" }",
        Cell::Occupied(Mark::O) => "{ Occupied = \"O\" }",
    }
}

/// Generate a saved game with arbitrary fields, including a stored outcome
/// that may disagree with the board.
fn arb_saved_game() -> impl Strategy<Value = String> {
    (
        proptest::array::uniform9(arb_cell()),
        prop_oneof![Just("X"), Just("O")],
        proptest::option::of(0usize..9),
        prop_oneof![Just("InProgress"), Just("Tie")],
    )
        .prop_map(|(cells, turn, last, outcome)| {
            let last = last
                .and_then(Position::from_index)
                .map(|p| format!("last_moved = \"{p:?}\"\n"))
                .unwrap_or_default();
            let cells: Vec<&str> = cells.into_iter().map(cell_toml).collect();
            format!(
                "current_turn = \"{turn}\"\noutcome = \"{outcome}\"\n{last}\
                 [board]\ncells = [{}]\n",
                cells.join(", ")
            )
        })
}

fn line_owner(board: &Board, line_idx: usize) -> Option<Mark> {
    let [a, b, c] = LINES[line_idx].positions();
    let first = board.get(a);
    if first != Cell::Empty && first == board.get(b) && first == board.get(c) {
        first.mark()
    } else {
        None
    }
}

proptest! {
    #[test]
    fn prop_evaluate_reports_first_complete_line(board in arb_board()) {
        let first = (0..LINES.len()).find_map(|i| line_owner(&board, i).map(|m| (m, LINES[i])));
        let full = board.cells().iter().all(|c| *c != Cell::Empty);

        let expected = match first {
            Some((mark, line)) => Outcome::Win { mark, line },
            None if full => Outcome::Tie,
            None => Outcome::InProgress,
        };
        prop_assert_eq!(evaluate(&board), expected);
    }

    #[test]
    fn prop_occupied_placement_changes_nothing(moves in arb_activations(), target in 0usize..9) {
        let mut state = GameState::replay(&moves);
        let pos = Position::from_index(target).unwrap();
        prop_assume!(!state.board().is_empty(pos));

        let before = state.clone();
        let placement = state.place(pos);
        prop_assert!(!placement.is_accepted());
        prop_assert_eq!(state, before);
    }

    #[test]
    fn prop_decided_game_is_frozen(moves in arb_activations(), target in 0usize..9) {
        let mut state = GameState::replay(&moves);
        prop_assume!(state.outcome().is_over());

        let before = state.clone();
        state.place(Position::from_index(target).unwrap());
        prop_assert_eq!(state, before);
    }

    #[test]
    fn prop_open_placement_flips_turn(moves in arb_activations(), target in 0usize..9) {
        let mut state = GameState::replay(&moves);
        let before = state.current_turn();
        let pos = Position::from_index(target).unwrap();

        if let Placement::Accepted { mark, outcome, .. } = state.place(pos) {
            prop_assert_eq!(mark, before);
            if outcome == Outcome::InProgress {
                prop_assert_eq!(state.current_turn(), before.opponent());
            } else {
                prop_assert_eq!(state.current_turn(), before);
            }
        }
    }

    #[test]
    fn prop_reachable_states_hold_invariants(moves in arb_activations()) {
        let state = GameState::replay(&moves);
        prop_assert!(GameInvariants::check_all(&state).is_ok());
        prop_assert_eq!(state.outcome(), &evaluate(state.board()));
    }

    #[test]
    fn prop_loaded_states_hold_invariants(text in arb_saved_game()) {
        if let Ok(state) = toml::from_str::<GameState>(&text) {
            prop_assert!(GameInvariants::check_all(&state).is_ok());
            prop_assert_eq!(state.outcome(), &evaluate(state.board()));
        }
    }

    #[test]
    fn prop_reachable_states_load_back(moves in arb_activations()) {
        let state = GameState::replay(&moves);
        let cells: Vec<&str> = state.board().cells().iter().copied().map(cell_toml).collect();
        let last = state
            .last_moved()
            .map(|p| format!("last_moved = \"{p:?}\"\n"))
            .unwrap_or_default();
        let text = format!(
            "current_turn = \"{}\"\n{last}[board]\ncells = [{}]\n",
            state.current_turn(),
            cells.join(", ")
        );
        prop_assert_eq!(toml::from_str::<GameState>(&text).unwrap(), state);
    }

    #[test]
    fn prop_reset_yields_initial_state(moves in arb_activations()) {
        let mut state = GameState::replay(&moves);
        state.reset();
        prop_assert_eq!(state, GameState::new());
    }
}
