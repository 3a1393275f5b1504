//! Perfect-play tic-tac-toe.
//!
//! Pure game logic with no presentation concerns:
//!
//! - **Board & rules**: [`Board`], [`Position`], [`legal_moves`], [`classify`]
//! - **Search**: [`Engine::find_best_move`], exhaustive minimax with alpha-beta pruning
//! - **Rounds**: [`Round`] validates player input and commits engine replies
//!
//! # Example
//!
//! ```
//! use perfect_tictactoe::{Board, Engine, Position};
//!
//! let mut board: Board = "XX__O____".parse()?;
//! let engine = Engine::default();
//! assert_eq!(engine.find_best_move(&mut board), Some(Position::TopRight));
//! # Ok::<(), perfect_tictactoe::ParseBoardError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod game;
mod outcome;
mod position;
pub mod rules;
mod search;
mod types;

pub use game::{MoveError, Round, Seat};
pub use outcome::Outcome;
pub use position::Position;
pub use rules::{classify, is_draw, is_win, legal_moves};
pub use search::{Analysis, DRAW_SCORE, Engine, LOSS_SCORE, MoveScore, Score, WIN_SCORE};
pub use types::{Board, ParseBoardError, Placement, Player, Square};
