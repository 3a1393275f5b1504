//! Terminal game against the engine.

mod app;
mod input;
mod orchestrator;
mod ui;

pub use app::App;
pub use input::{Action, action_for, move_cursor};
pub use orchestrator::{Command, GameEvent, Orchestrator};

use crate::config::GameConfig;
use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::Duration;
use tokio::sync::mpsc::{self, error::TryRecvError};
use tracing::{debug, error, info, instrument};

/// Raw-mode terminal that is put back on drop, even on error paths.
struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self { terminal })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

/// Runs the terminal game until the user quits.
pub async fn run_tui(config: GameConfig) -> Result<()> {
    // Log to a file so output doesn't tear the screen
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!(
        first_to_move = %config.first_to_move(),
        engine_mark = %config.engine_mark(),
        "Starting Perfect Games TUI"
    );

    let (command_tx, command_rx) = mpsc::unbounded_channel();
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let game = tokio::spawn(Orchestrator::new(&config, command_rx, event_tx).run());

    let mut guard = TerminalGuard::enter()?;
    let mut app = App::new(&config);
    let res = run_app(&mut guard.terminal, &mut app, &command_tx, &mut event_rx).await;
    drop(guard);
    drop(command_tx);

    match game.await {
        Ok(Ok(())) => {}
        Ok(Err(e)) => error!(error = %e, "Game loop failed"),
        Err(e) => error!(error = %e, "Game task panicked"),
    }
    res
}

#[instrument(skip_all)]
async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    commands: &mpsc::UnboundedSender<Command>,
    events: &mut mpsc::UnboundedReceiver<GameEvent>,
) -> Result<()> {
    loop {
        loop {
            match events.try_recv() {
                Ok(event) => app.handle_event(event),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    info!("Game loop ended");
                    return Ok(());
                }
            }
        }

        terminal.draw(|f| ui::draw(f, app))?;

        if !event::poll(Duration::from_millis(50))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match action_for(key.code, app.cursor()) {
            Some(Action::Quit) => {
                info!("User quit");
                let _ = commands.send(Command::Quit);
                return Ok(());
            }
            Some(Action::Cursor(position)) => app.set_cursor(position),
            Some(Action::Place(position)) => {
                debug!(%position, "Player picked square");
                app.set_cursor(position);
                commands.send(Command::Place(position))?;
            }
            Some(Action::Restart) => commands.send(Command::Restart)?,
            None => {}
        }
    }
}
