//! One-shot analysis of a board given on the command line.

use anyhow::{Context, Result};
use derive_getters::Getters;
use perfect_tictactoe::{Analysis, Board, Engine, MoveScore, Outcome, Player, Position};
use serde::Serialize;
use tracing::{info, instrument};

/// The engine's verdict on a board.
#[derive(Debug, Clone, Serialize, Getters)]
pub struct Advice {
    /// Board in compact form.
    board: String,
    /// Board the advice was computed for.
    #[serde(skip)]
    grid: Board,
    /// Mark the engine plays.
    engine: Player,
    /// Classification before the engine moves.
    outcome: Outcome,
    /// Recommended square, `None` on a full board.
    best_move: Option<Position>,
    /// Board index of the recommended square.
    best_index: Option<usize>,
    /// Per-candidate scores, only when explaining.
    #[serde(skip_serializing_if = "Option::is_none")]
    scores: Option<Vec<MoveScore>>,
    /// Nodes searched, only when explaining.
    #[serde(skip_serializing_if = "Option::is_none")]
    nodes: Option<u64>,
}

impl Advice {
    /// Parses `text` and asks the engine playing `mark` for its move.
    #[instrument]
    pub fn for_board(text: &str, mark: Player, explain: bool) -> Result<Self> {
        let mut board: Board = text
            .parse()
            .with_context(|| format!("Invalid board {:?}", text))?;
        let analysis = Engine::new(mark).analyze(&mut board);
        info!(board = %board, best_move = ?analysis.best_move(), "Advice computed");
        Ok(Self::from_analysis(&board, analysis, explain))
    }

    fn from_analysis(board: &Board, analysis: Analysis, explain: bool) -> Self {
        let best_move = *analysis.best_move();
        Self {
            board: board.to_string(),
            grid: board.clone(),
            engine: *analysis.engine(),
            outcome: *analysis.outcome(),
            best_move,
            best_index: best_move.map(Position::to_index),
            scores: explain.then(|| analysis.scores().clone()),
            nodes: explain.then(|| *analysis.nodes()),
        }
    }
}

/// Human-readable report.
impl std::fmt::Display for Advice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}\n", self.grid.display())?;
        writeln!(f, "Engine plays: {}", self.engine)?;
        writeln!(f, "Status: {}", self.outcome)?;
        match self.best_move {
            Some(position) => writeln!(f, "Best move: {} (index {})", position, position.to_index())?,
            None => writeln!(f, "Best move: none (board is full)")?,
        }
        if let Some(scores) = &self.scores {
            writeln!(f, "\nCandidates:")?;
            for candidate in scores {
                writeln!(
                    f,
                    "  {:>2} {:<14} {:>3}",
                    candidate.position().to_index(),
                    candidate.position().label(),
                    candidate.score()
                )?;
            }
        }
        if let Some(nodes) = self.nodes {
            writeln!(f, "Nodes searched: {}", nodes)?;
        }
        Ok(())
    }
}
