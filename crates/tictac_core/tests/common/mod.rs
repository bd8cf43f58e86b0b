//! Shared helpers for tictac_core integration tests.

#![allow(dead_code)]

use std::collections::HashSet;
use tictac_core::{Board, evaluate};

/// Every distinct board reachable by legal play, stopping at terminal boards.
pub fn reachable_boards() -> HashSet<Board> {
    let mut seen = HashSet::new();
    visit(Board::new(), &mut seen);
    seen
}

fn visit(board: Board, seen: &mut HashSet<Board>) {
    if !seen.insert(board) || evaluate(&board).is_terminal() {
        return;
    }
    let mark = board.to_move();
    for pos in board.empty_cells() {
        let next = board.with_move(pos, mark).expect("empty cell in turn");
        visit(next, seen);
    }
}
