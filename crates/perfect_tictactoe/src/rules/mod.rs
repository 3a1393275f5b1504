//! Game rules for tic-tac-toe.
//!
//! Pure, total queries over a [`Board`]. Rules are kept apart from
//! board storage so the search and the round bookkeeping share them.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{is_win, LINES};

use crate::{Board, Outcome, Player, Position};

/// Every empty square in ascending index order; empty when the board is full.
pub fn legal_moves(board: &Board) -> Vec<Position> {
    Position::valid_moves(board)
}

/// Classifies the board from the engine's point of view.
///
/// Order matters: engine win, then player win, then draw.
pub fn classify(board: &Board, engine: Player) -> Outcome {
    if is_win(board, engine) {
        Outcome::EngineWin
    } else if is_win(board, engine.opponent()) {
        Outcome::PlayerWin
    } else if is_draw(board) {
        Outcome::Draw
    } else {
        Outcome::Ongoing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legal_moves_full_board() {
        let board: Board = "XOXOXXOXO".parse().unwrap();
        assert!(legal_moves(&board).is_empty());
    }

    #[test]
    fn test_classify_each_outcome() {
        let cases = [
            ("_________", Outcome::Ongoing),
            ("OOOXX____", Outcome::EngineWin),
            ("XXXOO____", Outcome::PlayerWin),
            ("XOXOXXOXO", Outcome::Draw),
        ];
        for (text, expected) in cases {
            let board: Board = text.parse().unwrap();
            assert_eq!(classify(&board, Player::O), expected, "{text}");
        }
    }

    #[test]
    fn test_classify_depends_on_engine_mark() {
        let board: Board = "XXXOO____".parse().unwrap();
        assert_eq!(classify(&board, Player::X), Outcome::EngineWin);
        assert_eq!(classify(&board, Player::O), Outcome::PlayerWin);
    }

    #[test]
    fn test_full_board_win_beats_draw() {
        let board: Board = "XXXOOXXOO".parse().unwrap();
        assert_eq!(classify(&board, Player::O), Outcome::PlayerWin);
    }
}
