//! Application state and logic.

use crate::config::GameConfig;
use perfect_tictactoe::{Board, Outcome, Player, Position, Seat};
use tracing::debug;

use super::orchestrator::GameEvent;

/// Main application state.
pub struct App {
    board: Board,
    cursor: Position,
    player_mark: Player,
    engine_mark: Player,
    status_message: String,
}

impl App {
    /// Creates a new application.
    pub fn new(config: &GameConfig) -> Self {
        let engine_mark = *config.engine_mark();
        Self {
            board: Board::new(),
            cursor: Position::Center,
            player_mark: engine_mark.opponent(),
            engine_mark,
            status_message: "Waiting for game to start...".to_string(),
        }
    }

    /// Board as last reported by the orchestrator.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Highlighted square.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Moves the highlight.
    pub fn set_cursor(&mut self, position: Position) {
        self.cursor = position;
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Mark the human plays.
    pub fn player_mark(&self) -> Player {
        self.player_mark
    }

    /// Handles a game event from the orchestrator.
    pub fn handle_event(&mut self, event: GameEvent) {
        debug!(?event, "Handling game event");

        match event {
            GameEvent::StateChanged {
                board,
                to_move,
                outcome,
            } => {
                self.board = board;
                if !outcome.is_terminal() && to_move == Seat::Player {
                    self.status_message = format!("Your turn ({})", self.player_mark);
                }
            }
            GameEvent::EngineThinking => {
                self.status_message = "Engine thinking...".to_string();
            }
            GameEvent::MoveMade { seat, position } => {
                debug!(%seat, %position, "Move shown");
            }
            GameEvent::Rejected(reason) => {
                self.status_message = reason;
            }
            GameEvent::GameOver(outcome) => {
                let verdict = match outcome {
                    Outcome::EngineWin => format!("{} wins!", self.engine_mark),
                    Outcome::PlayerWin => format!("{} wins!", self.player_mark),
                    _ => "It's a draw!".to_string(),
                };
                self.status_message =
                    format!("{} Press 'r' to restart or 'q' to quit.", verdict);
            }
            GameEvent::Restarted => {
                self.cursor = Position::Center;
                self.status_message = "Game restarted.".to_string();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_follows_turns() {
        let mut app = App::new(&GameConfig::default());
        app.handle_event(GameEvent::StateChanged {
            board: Board::new(),
            to_move: Seat::Player,
            outcome: Outcome::Ongoing,
        });
        assert_eq!(app.status_message(), "Your turn (X)");

        app.handle_event(GameEvent::EngineThinking);
        assert_eq!(app.status_message(), "Engine thinking...");
    }

    #[test]
    fn test_game_over_names_winner() {
        let mut app = App::new(&GameConfig::default());
        app.handle_event(GameEvent::GameOver(Outcome::EngineWin));
        assert!(app.status_message().starts_with("O wins!"));

        app.handle_event(GameEvent::GameOver(Outcome::Draw));
        assert!(app.status_message().starts_with("It's a draw!"));
    }

    #[test]
    fn test_state_change_replaces_board() {
        let mut app = App::new(&GameConfig::default());
        let board: Board = "X___O____".parse().unwrap();
        app.handle_event(GameEvent::StateChanged {
            board: board.clone(),
            to_move: Seat::Player,
            outcome: Outcome::Ongoing,
        });
        assert_eq!(app.board(), &board);
    }
}
