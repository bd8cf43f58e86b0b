//! One-shot board analysis.

use rand::RngCore;
use serde::Serialize;
use tictac_core::{
    Board, Difficulty, GameError, Mark, Minimax, Outcome, Position, choose_computer_move,
    evaluate,
};
use tracing::instrument;

/// What the engine thinks of a board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Analysis {
    /// The board in nine-character form.
    pub board: String,
    /// Current outcome.
    pub outcome: Outcome,
    /// Side to move while the game is ongoing.
    pub to_move: Option<Mark>,
    /// Mark the suggestion is for.
    pub computer_mark: Mark,
    /// Mover used for the suggestion.
    pub difficulty: Difficulty,
    /// Suggested cell while the game is ongoing.
    pub suggestion: Option<Position>,
    /// Suggested cell as a 0-8 index.
    pub suggestion_index: Option<usize>,
    /// Perfect-play value for `computer_mark` with it to move: 1 win, 0 tie, -1 loss.
    pub perfect_play_score: Option<i8>,
}

/// Evaluates `board` and asks the `difficulty` mover for `computer_mark`'s reply.
#[instrument(skip(board, rng), fields(cells = %board.compact()))]
pub fn analyze(
    board: &Board,
    difficulty: Difficulty,
    computer_mark: Mark,
    rng: &mut impl RngCore,
) -> Result<Analysis, GameError> {
    let outcome = evaluate(board);
    let (suggestion, perfect_play_score) = if outcome.is_terminal() {
        (None, None)
    } else {
        let position = choose_computer_move(board, difficulty, computer_mark, rng)?;
        let (_, score) = Minimax::best_move(board, computer_mark)?;
        (Some(position), Some(score))
    };

    Ok(Analysis {
        board: board.compact(),
        outcome,
        to_move: (!outcome.is_terminal()).then(|| board.to_move()),
        computer_mark,
        difficulty,
        suggestion,
        suggestion_index: suggestion.map(Position::to_index),
        perfect_play_score,
    })
}

impl std::fmt::Display for Analysis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Outcome: {}", self.outcome)?;
        if let Some(mark) = self.to_move {
            writeln!(f, "To move: {}", mark)?;
        }
        if let (Some(position), Some(index)) = (self.suggestion, self.suggestion_index) {
            writeln!(
                f,
                "{} ({}) plays {} (cell {})",
                self.computer_mark,
                self.difficulty,
                position,
                index + 1
            )?;
        }
        if let Some(score) = self.perfect_play_score {
            let verdict = match score {
                1 => "forced win",
                -1 => "lost against perfect play",
                _ => "draw with perfect play",
            };
            writeln!(f, "Value for {}: {}", self.computer_mark, verdict)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_analysis_suggests_block() {
        let board: Board = "XX__O____".parse().unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let analysis = analyze(&board, Difficulty::Hard, Mark::O, &mut rng).unwrap();
        assert_eq!(analysis.outcome, Outcome::Ongoing);
        assert_eq!(analysis.to_move, Some(Mark::O));
        assert_eq!(analysis.suggestion, Some(Position::TopRight));
        assert_eq!(analysis.suggestion_index, Some(2));
        assert_eq!(analysis.perfect_play_score, Some(0));
    }

    #[test]
    fn test_finished_board_has_no_suggestion() {
        let board: Board = "XOXOXOXOX".parse().unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let analysis = analyze(&board, Difficulty::Hard, Mark::O, &mut rng).unwrap();
        assert_eq!(analysis.outcome, Outcome::XWon);
        assert_eq!(analysis.to_move, None);
        assert_eq!(analysis.suggestion, None);
        assert!(analysis.to_string().starts_with("Outcome: Player X won"));
    }

    #[test]
    fn test_json_shape() {
        let board: Board = "XX__O____".parse().unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let analysis = analyze(&board, Difficulty::Medium, Mark::O, &mut rng).unwrap();
        let json = serde_json::to_value(&analysis).unwrap();
        assert_eq!(json["board"], "XX__O____");
        assert_eq!(json["outcome"], "Ongoing");
        assert_eq!(json["difficulty"], "medium");
        assert_eq!(json["suggestion_index"], 2);
    }
}
