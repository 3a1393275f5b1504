//! Round bookkeeping between a player and the engine.
//!
//! The rules and the search never validate moves. This is the layer
//! that does: it accepts player input, alternates turns, commits the
//! engine's reply, and resets the board for the next round.

use crate::{Board, Engine, Outcome, Player, Position};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Which side of the table moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
pub enum Seat {
    /// The human (or scripted) player.
    #[display("player")]
    Player,
    /// The search engine.
    #[display("engine")]
    Engine,
}

impl Seat {
    /// Returns the other seat.
    pub fn other(self) -> Self {
        match self {
            Seat::Player => Seat::Engine,
            Seat::Engine => Seat::Player,
        }
    }
}

/// Error that can occur when committing a move.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The round has already been decided.
    #[display("Round is already over")]
    RoundOver,

    /// It's not this seat's turn.
    #[display("It's not the {}'s turn", _0)]
    NotYourTurn(Seat),
}

impl std::error::Error for MoveError {}

/// One round of tic-tac-toe against the engine.
#[derive(Debug, Clone)]
pub struct Round {
    board: Board,
    engine: Engine,
    first: Seat,
    to_move: Seat,
    outcome: Outcome,
    history: Vec<Position>,
}

impl Round {
    /// Creates a round on an empty board; `first` moves first.
    #[instrument]
    pub fn new(engine: Engine, first: Seat) -> Self {
        Self {
            board: Board::new(),
            engine,
            first,
            to_move: first,
            outcome: Outcome::Ongoing,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the engine.
    pub fn engine(&self) -> Engine {
        self.engine
    }

    /// Seat to move next.
    pub fn to_move(&self) -> Seat {
        self.to_move
    }

    /// Mark placed by `seat`.
    pub fn mark_of(&self, seat: Seat) -> Player {
        match seat {
            Seat::Engine => self.engine.mark(),
            Seat::Player => self.engine.opponent(),
        }
    }

    /// Outcome after the last committed move.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Positions played so far, in order.
    pub fn history(&self) -> &[Position] {
        &self.history
    }

    /// Commits a player move.
    ///
    /// # Errors
    ///
    /// Rejects the move if the round is over, if it is the engine's turn,
    /// or if the square is taken.
    #[instrument(skip(self), fields(to_move = %self.to_move))]
    pub fn play(&mut self, position: Position) -> Result<Outcome, MoveError> {
        self.play_as(Seat::Player, position)
    }

    /// Commits a move for `seat`, e.g. an engine reply searched elsewhere.
    ///
    /// # Errors
    ///
    /// Same checks as [`Round::play`], against `seat` instead of the player.
    pub fn play_as(&mut self, seat: Seat, position: Position) -> Result<Outcome, MoveError> {
        self.check_turn(seat)?;
        if !self.board.is_empty(position) {
            return Err(MoveError::SquareOccupied(position));
        }
        Ok(self.commit(position))
    }

    /// Asks the engine for its move and commits it.
    ///
    /// Returns `Ok(None)` when the board has no empty square left.
    ///
    /// # Errors
    ///
    /// Rejects the request if the round is over or it is the player's turn.
    #[instrument(skip(self), fields(to_move = %self.to_move))]
    pub fn engine_move(&mut self) -> Result<Option<Position>, MoveError> {
        self.check_turn(Seat::Engine)?;
        let choice = self.engine.find_best_move(&mut self.board);
        if let Some(position) = choice {
            self.commit(position);
        }
        Ok(choice)
    }

    /// Clears the board and gives the first move back to the opening seat.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!(first = %self.first, "Starting new round");
        self.board.reset();
        self.history.clear();
        self.to_move = self.first;
        self.outcome = Outcome::Ongoing;
    }

    fn check_turn(&self, seat: Seat) -> Result<(), MoveError> {
        if self.outcome.is_terminal() {
            return Err(MoveError::RoundOver);
        }
        if self.to_move != seat {
            return Err(MoveError::NotYourTurn(seat));
        }
        Ok(())
    }

    fn commit(&mut self, position: Position) -> Outcome {
        let mark = self.mark_of(self.to_move);
        self.board.place(position, mark);
        self.history.push(position);
        self.outcome = self.engine.classify(&self.board);
        debug!(%position, %mark, outcome = %self.outcome, "Move committed");
        self.to_move = self.to_move.other();
        self.outcome
    }
}

impl Default for Round {
    fn default() -> Self {
        Self::new(Engine::default(), Seat::Player)
    }
}
