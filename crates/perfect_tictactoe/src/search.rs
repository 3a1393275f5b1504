//! Perfect-play search: minimax with alpha-beta pruning.
//!
//! The tree is small enough (at most 9! leaves) to search to the end on
//! every call, so the only evaluation is the terminal score. The engine
//! keeps no memory between calls: the same board always yields the same
//! move, and every speculative mark is cleared before a call returns.

use crate::rules::{classify, is_draw, legal_moves};
use crate::{Board, Outcome, Player, Position};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Minimax score from the engine's point of view.
pub type Score = i32;

/// Score of a board the engine has won.
pub const WIN_SCORE: Score = 10;
/// Score of a board the player has won.
pub const LOSS_SCORE: Score = -10;
/// Score of a draw, and of any board that is not yet decided.
pub const DRAW_SCORE: Score = 0;

/// Score of a single candidate move at the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct MoveScore {
    /// Square the engine would take.
    position: Position,
    /// Guaranteed score after that move.
    score: Score,
}

/// Full root analysis: every candidate's score plus the chosen move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Analysis {
    /// Mark the engine plays.
    engine: Player,
    /// Classification of the analyzed board.
    outcome: Outcome,
    /// The move `find_best_move` returns, `None` on a full board.
    best_move: Option<Position>,
    /// Root candidates in ascending index order.
    scores: Vec<MoveScore>,
    /// Nodes visited below the root.
    nodes: u64,
}

/// The perfect-play engine for one side of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Engine {
    mark: Player,
}

impl Engine {
    /// Creates an engine that plays `mark`.
    pub fn new(mark: Player) -> Self {
        Self { mark }
    }

    /// Mark the engine places.
    pub fn mark(&self) -> Player {
        self.mark
    }

    /// Mark of the engine's opponent.
    pub fn opponent(&self) -> Player {
        self.mark.opponent()
    }

    /// Classifies the board from this engine's point of view.
    pub fn classify(&self, board: &Board) -> Outcome {
        classify(board, self.mark)
    }

    /// Terminal score: +10 engine win, -10 player win, 0 otherwise.
    pub fn evaluate(&self, board: &Board) -> Score {
        match self.classify(board) {
            Outcome::EngineWin => WIN_SCORE,
            Outcome::PlayerWin => LOSS_SCORE,
            Outcome::Draw | Outcome::Ongoing => DRAW_SCORE,
        }
    }

    /// Minimax value of `board` within the `alpha`/`beta` window.
    ///
    /// `maximizing` is true when the engine is the side to move.
    /// The board is returned unchanged.
    pub fn search(&self, board: &mut Board, alpha: Score, beta: Score, maximizing: bool) -> Score {
        let mut nodes = 0;
        self.alpha_beta(board, alpha, beta, maximizing, 0, &mut nodes)
    }

    /// Returns the engine's best move, or `None` if the board is full.
    ///
    /// Candidates are tried in ascending index order; a later move only
    /// replaces the current choice when it scores strictly higher.
    #[instrument(skip(self, board), fields(engine = %self.mark, board = %board))]
    pub fn find_best_move(&self, board: &mut Board) -> Option<Position> {
        self.analyze(board).best_move
    }

    /// Scores every root move and reports the choice `find_best_move` makes.
    #[instrument(skip(self, board), fields(engine = %self.mark, board = %board))]
    pub fn analyze(&self, board: &mut Board) -> Analysis {
        let outcome = self.classify(board);
        let mut nodes = 0;
        let mut scores = Vec::new();
        let mut best: Option<MoveScore> = None;

        for position in legal_moves(board) {
            let score = {
                let mut child = board.speculate(position, self.mark);
                self.alpha_beta(&mut child, Score::MIN, Score::MAX, false, 0, &mut nodes)
            };
            let candidate = MoveScore { position, score };
            scores.push(candidate);

            if best.is_none_or(|b| score > b.score) {
                best = Some(candidate);
            }
        }

        match best {
            Some(choice) => debug!(
                position = %choice.position,
                score = choice.score,
                nodes,
                "Engine chose move"
            ),
            None => debug!("No legal moves left"),
        }

        Analysis {
            engine: self.mark,
            outcome,
            best_move: best.map(|b| b.position),
            scores,
            nodes,
        }
    }

    /// Recursive alpha-beta. `ply` counts placements below the searched
    /// node; decided boards lose one point per ply, so the engine takes
    /// the quickest win and puts off a loss as long as it can.
    fn alpha_beta(
        &self,
        board: &mut Board,
        mut alpha: Score,
        mut beta: Score,
        maximizing: bool,
        ply: Score,
        nodes: &mut u64,
    ) -> Score {
        *nodes += 1;

        let score = self.evaluate(board);
        if score != DRAW_SCORE {
            return score - score.signum() * ply;
        }
        if is_draw(board) {
            return DRAW_SCORE;
        }

        if maximizing {
            let mut best = Score::MIN;
            for position in legal_moves(board) {
                let child = {
                    let mut next = board.speculate(position, self.mark);
                    self.alpha_beta(&mut next, alpha, beta, false, ply + 1, nodes)
                };
                best = best.max(child);
                alpha = alpha.max(best);
                if beta <= alpha {
                    break;
                }
            }
            best
        } else {
            let mut best = Score::MAX;
            for position in legal_moves(board) {
                let child = {
                    let mut next = board.speculate(position, self.opponent());
                    self.alpha_beta(&mut next, alpha, beta, true, ply + 1, nodes)
                };
                best = best.min(child);
                beta = beta.min(best);
                if beta <= alpha {
                    break;
                }
            }
            best
        }
    }
}

/// The engine plays O, the player X.
impl Default for Engine {
    fn default() -> Self {
        Self::new(Player::O)
    }
}
