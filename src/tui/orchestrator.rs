//! Game orchestration between the terminal player and the engine.

use crate::config::GameConfig;
use anyhow::{Context, Result, bail};
use perfect_tictactoe::{Board, Outcome, Position, Round, Seat};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::sleep;
use tracing::{debug, info, instrument};

/// Requests sent from the UI to the orchestrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Place the player's mark.
    Place(Position),
    /// Start a new round.
    Restart,
    /// Stop the game loop.
    Quit,
}

/// Messages sent from orchestrator to UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// Board or turn changed.
    StateChanged {
        /// Current board.
        board: Board,
        /// Seat to move next.
        to_move: Seat,
        /// Classification of the board.
        outcome: Outcome,
    },
    /// Engine is thinking.
    EngineThinking,
    /// Move was made.
    MoveMade {
        /// Seat that moved.
        seat: Seat,
        /// Square taken.
        position: Position,
    },
    /// A player command was refused.
    Rejected(String),
    /// Round ended.
    GameOver(Outcome),
    /// A fresh round started.
    Restarted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

enum EngineTurn {
    Chosen(Option<Position>),
    Interrupted(Option<Command>),
}

/// Owns the round and alternates turns.
pub struct Orchestrator {
    round: Round,
    delay: Duration,
    commands: mpsc::UnboundedReceiver<Command>,
    events: mpsc::UnboundedSender<GameEvent>,
}

impl Orchestrator {
    /// Creates a new orchestrator.
    pub fn new(
        config: &GameConfig,
        commands: mpsc::UnboundedReceiver<Command>,
        events: mpsc::UnboundedSender<GameEvent>,
    ) -> Self {
        Self {
            round: Round::new(config.engine(), *config.first_to_move()),
            delay: config.engine_delay(),
            commands,
            events,
        }
    }

    /// Runs the game loop until the UI quits or hangs up.
    #[instrument(skip(self))]
    pub async fn run(mut self) -> Result<()> {
        info!("Starting game orchestration");
        self.publish_state()?;

        loop {
            let flow = if self.round.outcome().is_terminal() {
                self.await_restart().await?
            } else {
                match self.round.to_move() {
                    Seat::Player => self.player_turn().await?,
                    Seat::Engine => self.engine_turn().await?,
                }
            };

            if flow == Flow::Quit {
                info!("Game loop stopped");
                return Ok(());
            }
        }
    }

    async fn player_turn(&mut self) -> Result<Flow> {
        debug!("Waiting for player move");
        match self.commands.recv().await {
            None | Some(Command::Quit) => Ok(Flow::Quit),
            Some(Command::Restart) => {
                self.restart()?;
                Ok(Flow::Continue)
            }
            Some(Command::Place(position)) => {
                match self.round.play(position) {
                    Ok(_) => self.after_move(Seat::Player, position)?,
                    Err(e) => {
                        debug!(error = %e, %position, "Player move rejected");
                        self.events.send(GameEvent::Rejected(e.to_string()))?;
                    }
                }
                Ok(Flow::Continue)
            }
        }
    }

    /// Searches off the async workers after the configured pause. The
    /// player can still restart or quit while the engine thinks.
    async fn engine_turn(&mut self) -> Result<Flow> {
        self.events.send(GameEvent::EngineThinking)?;

        let engine = self.round.engine();
        let mut board = self.round.board().clone();
        let delay = self.delay;
        let think = async move {
            sleep(delay).await;
            tokio::task::spawn_blocking(move || engine.find_best_move(&mut board)).await
        };
        tokio::pin!(think);

        loop {
            let next = tokio::select! {
                choice = &mut think => EngineTurn::Chosen(choice.context("Engine task failed")?),
                command = self.commands.recv() => EngineTurn::Interrupted(command),
            };

            match next {
                EngineTurn::Chosen(Some(position)) => {
                    self.round.play_as(Seat::Engine, position)?;
                    self.after_move(Seat::Engine, position)?;
                    return Ok(Flow::Continue);
                }
                EngineTurn::Chosen(None) => bail!("Engine found no move on an undecided board"),
                EngineTurn::Interrupted(None | Some(Command::Quit)) => return Ok(Flow::Quit),
                EngineTurn::Interrupted(Some(Command::Restart)) => {
                    self.restart()?;
                    return Ok(Flow::Continue);
                }
                EngineTurn::Interrupted(Some(Command::Place(position))) => {
                    debug!(%position, "Ignoring move while engine thinks");
                    self.events
                        .send(GameEvent::Rejected("Engine is thinking".to_string()))?;
                }
            }
        }
    }

    async fn await_restart(&mut self) -> Result<Flow> {
        match self.commands.recv().await {
            None | Some(Command::Quit) => Ok(Flow::Quit),
            Some(Command::Restart) => {
                self.restart()?;
                Ok(Flow::Continue)
            }
            Some(Command::Place(_)) => {
                self.events.send(GameEvent::Rejected(
                    "Round is over, press 'r' to restart".to_string(),
                ))?;
                Ok(Flow::Continue)
            }
        }
    }

    fn after_move(&mut self, seat: Seat, position: Position) -> Result<()> {
        self.events.send(GameEvent::MoveMade { seat, position })?;
        self.publish_state()?;

        let outcome = self.round.outcome();
        if outcome.is_terminal() {
            info!(%outcome, "Round over");
            self.events.send(GameEvent::GameOver(outcome))?;
        }
        Ok(())
    }

    fn restart(&mut self) -> Result<()> {
        self.round.reset();
        self.events.send(GameEvent::Restarted)?;
        self.publish_state()
    }

    fn publish_state(&self) -> Result<()> {
        self.events.send(GameEvent::StateChanged {
            board: self.round.board().clone(),
            to_move: self.round.to_move(),
            outcome: self.round.outcome(),
        })?;
        Ok(())
    }
}
