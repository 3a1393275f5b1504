//! Core domain types for tic-tac-toe.

use super::position::Position;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::ops::{Deref, DerefMut};
use std::str::FromStr;

/// Mark placed by one side of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Player {
    /// Player X (the human side by default).
    #[serde(alias = "x")]
    X,
    /// Player O (the engine side by default).
    #[serde(alias = "o")]
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    fn symbol(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Places `mark` on an empty square.
    ///
    /// The square must be empty; callers validate against
    /// [`crate::legal_moves`] before committing a move.
    pub fn place(&mut self, pos: Position, mark: Player) {
        debug_assert!(self.is_empty(pos), "{pos} is already occupied");
        self.squares[pos.to_index()] = Square::Occupied(mark);
    }

    /// Clears a square back to empty.
    pub fn unplace(&mut self, pos: Position) {
        self.squares[pos.to_index()] = Square::Empty;
    }

    /// Places `mark` for the lifetime of the returned guard.
    pub fn speculate(&mut self, pos: Position, mark: Player) -> Placement<'_> {
        Placement::new(self, pos, mark)
    }

    /// Clears every square.
    pub fn reset(&mut self) {
        self.squares = [Square::Empty; 9];
    }

    /// Number of occupied squares.
    pub fn filled(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }

    /// Formats the board as a human-readable string.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.squares[pos] {
                    Square::Empty => (pos + 1).to_string(),
                    Square::Occupied(player) => player.symbol().to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Compact one-line form, e.g. `XX__O____`.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for square in &self.squares {
            let c = match square {
                Square::Empty => '_',
                Square::Occupied(player) => player.symbol(),
            };
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

/// Error parsing a board from its text form.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ParseBoardError {
    /// Wrong number of cells.
    #[display("Expected 9 cells, found {}", _0)]
    Length(#[error(not(source))] usize),

    /// A character that is neither a mark nor an empty marker.
    #[display("Invalid cell {:?} at index {}", found, index)]
    InvalidCell {
        /// Cell index (0-8).
        index: usize,
        /// Offending character.
        found: char,
    },
}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Accepts 9 cells (`X`, `O`, or one of `_ . -` and space for empty),
    /// optionally split into rows with `/`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells: Vec<char> = s.chars().filter(|c| *c != '/').collect();
        if cells.len() != 9 {
            return Err(ParseBoardError::Length(cells.len()));
        }

        let mut board = Board::new();
        for (index, c) in cells.into_iter().enumerate() {
            board.squares[index] = match c {
                'X' | 'x' => Square::Occupied(Player::X),
                'O' | 'o' => Square::Occupied(Player::O),
                '_' | '.' | '-' | ' ' => Square::Empty,
                found => return Err(ParseBoardError::InvalidCell { index, found }),
            };
        }
        Ok(board)
    }
}

/// A mark placed speculatively; the square is cleared again on drop.
///
/// Dereferences to the board, so the search can keep exploring
/// through the guard and every exit path restores the square.
#[derive(Debug)]
pub struct Placement<'a> {
    board: &'a mut Board,
    position: Position,
}

impl<'a> Placement<'a> {
    fn new(board: &'a mut Board, position: Position, mark: Player) -> Self {
        board.place(position, mark);
        Self { board, position }
    }
}

impl Deref for Placement<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for Placement<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for Placement<'_> {
    fn drop(&mut self) {
        self.board.unplace(self.position);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_and_unplace() {
        let mut board = Board::new();
        board.place(Position::Center, Player::X);
        assert_eq!(board.get(Position::Center), Square::Occupied(Player::X));
        board.unplace(Position::Center);
        assert!(board.is_empty(Position::Center));
    }

    #[test]
    fn test_placement_guard_restores_square() {
        let mut board = Board::new();
        {
            let guard = board.speculate(Position::TopRight, Player::O);
            assert_eq!(guard.get(Position::TopRight), Square::Occupied(Player::O));
        }
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_nested_placements() {
        let mut board: Board = "X________".parse().unwrap();
        let before = board.clone();
        {
            let mut outer = board.speculate(Position::Center, Player::O);
            let inner = outer.speculate(Position::BottomRight, Player::X);
            assert_eq!(inner.filled(), 3);
        }
        assert_eq!(board, before);
    }

    #[test]
    fn test_parse_and_display() {
        let board: Board = "XX_/_O_/___".parse().unwrap();
        assert_eq!(board.get(Position::TopLeft), Square::Occupied(Player::X));
        assert_eq!(board.get(Position::Center), Square::Occupied(Player::O));
        assert_eq!(board.to_string(), "XX__O____");
        assert_eq!(board.display(), "X|X|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9");
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!("XO".parse::<Board>(), Err(ParseBoardError::Length(2)));
        assert_eq!(
            "XO_Z_____".parse::<Board>(),
            Err(ParseBoardError::InvalidCell { index: 3, found: 'Z' })
        );
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "already occupied")]
    fn test_place_on_occupied_square_panics() {
        let mut board: Board = "____X____".parse().unwrap();
        board.place(Position::Center, Player::O);
    }

    #[test]
    fn test_reset() {
        let mut board: Board = "XOXOXOXOX".parse().unwrap();
        board.reset();
        assert_eq!(board.filled(), 0);
    }
}
