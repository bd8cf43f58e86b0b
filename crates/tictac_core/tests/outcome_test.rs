//! Tests for the outcome evaluator over every reachable board.

mod common;

use tictac_core::{Board, Mark, Outcome, evaluate, rules::WINNING_LINES};

#[test]
fn test_reachable_board_count() {
    // 5478 distinct positions, terminal ones included.
    assert_eq!(common::reachable_boards().len(), 5478);
}

#[test]
fn test_at_most_one_mark_has_a_line() {
    for board in common::reachable_boards() {
        let lines_for = |mark: Mark| {
            WINNING_LINES
                .iter()
                .filter(|line| line.iter().all(|pos| board.get(*pos).mark() == Some(mark)))
                .count()
        };
        let x_lines = lines_for(Mark::X);
        let o_lines = lines_for(Mark::O);
        assert!(x_lines == 0 || o_lines == 0, "both marks won on {}", board.compact());

        let expected = match (x_lines > 0, o_lines > 0, board.is_full()) {
            (true, _, _) => Outcome::XWon,
            (_, true, _) => Outcome::OWon,
            (false, false, true) => Outcome::Tie,
            (false, false, false) => Outcome::Ongoing,
        };
        assert_eq!(evaluate(&board), expected, "board {}", board.compact());
    }
}

#[test]
fn test_evaluate_is_idempotent_and_pure() {
    for board in common::reachable_boards() {
        let before = board;
        let first = evaluate(&board);
        let second = evaluate(&board);
        assert_eq!(first, second);
        assert_eq!(board, before);
    }
}

#[test]
fn test_winner_matches_last_mover() {
    // A won board was won by whoever moved last.
    for board in common::reachable_boards() {
        if let Some(winner) = evaluate(&board).winner() {
            assert_eq!(winner, board.to_move().opponent(), "board {}", board.compact());
        }
    }
}

#[test]
fn test_examples() {
    assert_eq!(evaluate(&Board::new()), Outcome::Ongoing);
    assert_eq!(evaluate(&"XOXOXOXOX".parse().unwrap()), Outcome::XWon);
    assert_eq!(evaluate(&"XOXXOOOXX".parse().unwrap()), Outcome::Tie);
    assert_eq!(evaluate(&"OOOXX_XX_".parse().unwrap()), Outcome::OWon);
}

#[test]
fn test_board_json_is_validated() {
    let board: Board = "XX__O____".parse().unwrap();
    let json = serde_json::to_string(&board).unwrap();
    let back: Board = serde_json::from_str(&json).unwrap();
    assert_eq!(back, board);

    let two_o = r#"[{"Occupied":"O"},{"Occupied":"O"},"Empty","Empty","Empty","Empty","Empty","Empty","Empty"]"#;
    assert!(serde_json::from_str::<Board>(two_o).is_err());
}
