//! Exhaustive game-tree search.
//!
//! Scores are from the computer's point of view: +1 for a computer win,
//! -1 for an opponent win, 0 for a tie. Depth is not rewarded, so a quick
//! win and a slow win score the same and the lowest-index cell decides.
//!
//! The search works on `Board` values (the board is `Copy`), so every ply
//! gets its own board and sibling branches never see each other's marks.

use super::MoveStrategy;
use crate::error::GameError;
use crate::outcome::{Outcome, evaluate};
use crate::position::Position;
use crate::types::{Board, Mark};
use rand::RngCore;
use tracing::{debug, instrument};

const WIN: i8 = 1;
const LOSS: i8 = -1;
const TIE: i8 = 0;

/// Optimal play via minimax with alpha-beta pruning. Never loses.
#[derive(Debug, Clone, Copy, Default)]
pub struct Minimax;

impl Minimax {
    /// Returns the best cell for `computer` together with its score.
    ///
    /// Cells are tried in ascending index order and only a strictly
    /// greater score replaces the current choice, so the lowest-index cell
    /// among equally good ones is returned.
    #[instrument(skip(board), fields(cells = %board.compact()))]
    pub fn best_move(board: &Board, computer: Mark) -> Result<(Position, i8), GameError> {
        let mut best: Option<(Position, i8)> = None;

        for position in Position::ALL {
            if !board.is_empty(position) {
                continue;
            }

            let alpha = best.map_or(i8::MIN, |(_, score)| score);
            let child = board.placed(position, computer);
            let score = search(&child, computer, computer.opponent(), alpha, i8::MAX);

            if best.is_none_or(|(_, best_score)| score > best_score) {
                best = Some((position, score));
            }
            if score == WIN {
                break;
            }
        }

        let (position, score) = best.ok_or(GameError::NoLegalMove)?;
        debug!(%computer, %position, score, "Minimax choice");
        Ok((position, score))
    }

    /// Value of `board` for `computer` with `to_move` about to play, assuming
    /// both sides play perfectly from here.
    pub fn score(board: &Board, computer: Mark, to_move: Mark) -> i8 {
        search(board, computer, to_move, i8::MIN, i8::MAX)
    }
}

fn terminal_score(outcome: Outcome, computer: Mark) -> Option<i8> {
    match outcome {
        Outcome::Ongoing => None,
        Outcome::Tie => Some(TIE),
        won => Some(if won.winner() == Some(computer) { WIN } else { LOSS }),
    }
}

/// Fail-hard alpha-beta. A result `<= alpha` or `>= beta` is only a bound,
/// which is all the caller needs since it compares strictly.
fn search(board: &Board, computer: Mark, to_move: Mark, mut alpha: i8, mut beta: i8) -> i8 {
    if let Some(score) = terminal_score(evaluate(board), computer) {
        return score;
    }

    let maximizing = to_move == computer;
    let mut best = if maximizing { i8::MIN } else { i8::MAX };

    for position in Position::ALL {
        if !board.is_empty(position) {
            continue;
        }

        let child = board.placed(position, to_move);
        let score = search(&child, computer, to_move.opponent(), alpha, beta);

        if maximizing {
            best = best.max(score);
            alpha = alpha.max(score);
        } else {
            best = best.min(score);
            beta = beta.min(score);
        }
        if alpha >= beta {
            break;
        }
    }

    best
}

impl MoveStrategy for Minimax {
    fn choose(
        &self,
        board: &Board,
        mark: Mark,
        _rng: &mut dyn RngCore,
    ) -> Result<Position, GameError> {
        Self::best_move(board, mark).map(|(position, _)| position)
    }

    fn name(&self) -> &'static str {
        "hard"
    }
}
