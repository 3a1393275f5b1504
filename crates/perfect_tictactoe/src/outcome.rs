//! Terminal-state classification.

use serde::{Deserialize, Serialize};

/// Outcome of a board, seen from the engine's side.
///
/// Derived from the board on demand, never stored alongside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Outcome {
    /// The engine completed a line.
    #[strum(to_string = "Engine wins")]
    EngineWin,
    /// The player completed a line.
    #[strum(to_string = "Player wins")]
    PlayerWin,
    /// Full board, no line.
    #[strum(to_string = "Draw")]
    Draw,
    /// Moves remain and nobody has won.
    #[strum(to_string = "Ongoing")]
    Ongoing,
}

impl Outcome {
    /// Returns true once the round can no longer continue.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }
}
