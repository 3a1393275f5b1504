//! Draw detection logic for tic-tac-toe.

use super::win::is_win;
use crate::{Board, Player};

/// Checks if the board is full (all squares occupied).
pub fn is_full(board: &Board) -> bool {
    board.filled() == board.squares().len()
}

/// A draw is a full board where neither side completed a line.
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && !is_win(board, Player::X) && !is_win(board, Player::O)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_one_empty_square_not_full() {
        assert!(!is_full(&"XOXOXXOX_".parse().unwrap()));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X X / O X O
        let board: Board = "XOXOXXOXO".parse().unwrap();
        assert!(is_full(&board));
        assert!(is_draw(&board));
    }

    #[test]
    fn test_full_board_with_winner_is_not_draw() {
        // X X X / O O X / X O O
        let board: Board = "XXXOOXXOO".parse().unwrap();
        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }

    #[test]
    fn test_partial_board_not_draw() {
        let board: Board = "XOXOXXOX_".parse().unwrap();
        assert!(!is_draw(&board));
    }
}
