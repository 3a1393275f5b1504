//! Win detection logic for tic-tac-toe.

use crate::{Board, Player, Position, Square};

/// The 8 winning lines: rows, columns, diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns true if `mark` holds all three squares of any line.
pub fn is_win(board: &Board, mark: Player) -> bool {
    let sq = Square::Occupied(mark);
    LINES
        .iter()
        .any(|line| line.iter().all(|pos| board.get(*pos) == sq))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert!(!is_win(&board, Player::X));
        assert!(!is_win(&board, Player::O));
    }

    #[test]
    fn test_every_line_wins() {
        for line in LINES {
            let mut board = Board::new();
            for pos in line {
                board.place(pos, Player::O);
            }
            assert!(is_win(&board, Player::O), "line {:?}", line);
            assert!(!is_win(&board, Player::X));
        }
    }

    #[test]
    fn test_winner_diagonal() {
        let board: Board = "O_X_O_X_O".parse().unwrap();
        assert!(is_win(&board, Player::O));
        assert!(!is_win(&board, Player::X));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board: Board = "XX_OO____".parse().unwrap();
        assert!(!is_win(&board, Player::X));
        assert!(!is_win(&board, Player::O));
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board: Board = "XOX______".parse().unwrap();
        assert!(!is_win(&board, Player::X));
        assert!(!is_win(&board, Player::O));
    }
}
