//! Uniformly random play.

use super::MoveStrategy;
use crate::error::GameError;
use crate::position::Position;
use crate::types::{Board, Mark};
use rand::{Rng, RngCore};
use tracing::debug;

/// Picks any empty cell, each with equal probability.
#[derive(Debug, Clone, Copy, Default)]
pub struct Easy;

impl MoveStrategy for Easy {
    fn choose(
        &self,
        board: &Board,
        mark: Mark,
        rng: &mut dyn RngCore,
    ) -> Result<Position, GameError> {
        let empty = board.empty_cells();
        if empty.is_empty() {
            return Err(GameError::NoLegalMove);
        }

        let position = empty[rng.gen_range(0..empty.len())];
        debug!(%mark, %position, candidates = empty.len(), "Random move");
        Ok(position)
    }

    fn name(&self) -> &'static str {
        "easy"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_only_empty_cells_are_chosen() {
        let board: Board = "XOXOX_O__".parse().unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..200 {
            let pos = Easy.choose(&board, Mark::O, &mut rng).unwrap();
            assert!(board.is_empty(pos));
        }
    }

    #[test]
    fn test_single_empty_cell() {
        let board: Board = "XOXOXOOX_".parse().unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(
            Easy.choose(&board, Mark::X, &mut rng),
            Ok(Position::BottomRight)
        );
    }

    #[test]
    fn test_full_board_has_no_move() {
        let board: Board = "XOXXOOOXX".parse().unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(
            Easy.choose(&board, Mark::O, &mut rng),
            Err(GameError::NoLegalMove)
        );
    }

    #[test]
    fn test_same_seed_same_choice() {
        let board = Board::new();
        let mut a = ChaCha8Rng::seed_from_u64(99);
        let mut b = ChaCha8Rng::seed_from_u64(99);
        for _ in 0..20 {
            assert_eq!(
                Easy.choose(&board, Mark::X, &mut a),
                Easy.choose(&board, Mark::X, &mut b)
            );
        }
    }
}
