//! One-ply lookahead: win if possible, otherwise block, otherwise random.

use super::{Easy, MoveStrategy};
use crate::error::GameError;
use crate::position::Position;
use crate::rules::WINNING_LINES;
use crate::types::{Board, Cell, Mark};
use rand::RngCore;
use tracing::debug;

/// Finds the empty cell that gives `mark` three in a row.
///
/// Lines are scanned in table order and the first line with two of
/// `mark` and one empty cell wins.
pub fn find_completion(board: &Board, mark: Mark) -> Option<Position> {
    WINNING_LINES.iter().find_map(|line| {
        let owned = line
            .iter()
            .filter(|pos| board.get(**pos) == Cell::Occupied(mark))
            .count();
        let mut empty = line.iter().copied().filter(|pos| board.is_empty(*pos));
        match (owned, empty.next()) {
            (2, Some(pos)) => Some(pos),
            _ => None,
        }
    })
}

/// Takes an immediate win, else blocks the opponent's, else plays randomly.
///
/// Beatable by any opponent who sets up two threats at once.
#[derive(Debug, Clone, Copy, Default)]
pub struct Medium;

impl MoveStrategy for Medium {
    fn choose(
        &self,
        board: &Board,
        mark: Mark,
        rng: &mut dyn RngCore,
    ) -> Result<Position, GameError> {
        if board.is_full() {
            return Err(GameError::NoLegalMove);
        }

        if let Some(position) = find_completion(board, mark) {
            debug!(%mark, %position, "Completing line");
            return Ok(position);
        }

        if let Some(position) = find_completion(board, mark.opponent()) {
            debug!(%mark, %position, "Blocking opponent line");
            return Ok(position);
        }

        Easy.choose(board, mark, rng)
    }

    fn name(&self) -> &'static str {
        "medium"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_completes_own_line() {
        // O can win on the middle row; X threatens the top row.
        let board: Board = "XX_OO_X__".parse().unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        assert_eq!(
            Medium.choose(&board, Mark::O, &mut rng),
            Ok(Position::MiddleRight)
        );
    }

    #[test]
    fn test_blocks_opponent_line() {
        let board: Board = "XX__O____".parse().unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        assert_eq!(
            Medium.choose(&board, Mark::O, &mut rng),
            Ok(Position::TopRight)
        );
    }

    #[test]
    fn test_first_line_in_table_order() {
        // X threatens the top row and the left column; the row comes first.
        let board: Board = "X_XX__O_O".parse().unwrap();
        assert_eq!(find_completion(&board, Mark::X), Some(Position::TopCenter));
    }

    #[test]
    fn test_gap_in_the_middle_of_a_line() {
        let board: Board = "X_X_O____".parse().unwrap();
        assert_eq!(find_completion(&board, Mark::X), Some(Position::TopCenter));
    }

    #[test]
    fn test_blocked_line_is_not_completable() {
        let board: Board = "XXO______".parse().unwrap();
        assert_eq!(find_completion(&board, Mark::X), None);
    }

    #[test]
    fn test_full_board_has_no_move() {
        let board: Board = "XOXXOOOXX".parse().unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        assert_eq!(
            Medium.choose(&board, Mark::O, &mut rng),
            Err(GameError::NoLegalMove)
        );
    }
}
