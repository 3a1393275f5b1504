//! Perfect Games - Unified CLI
//!
//! Play, ask for advice, or audit the engine.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use perfect_games::cli::{AuditFirst, Cli, Command, FirstArg, MarkArg};
use perfect_games::{Advice, GameConfig, run_audit, tui};
use perfect_tictactoe::Engine;
use std::path::PathBuf;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { config, first } => run_play(config, first).await,
        Command::Advice {
            board,
            engine,
            json,
            explain,
        } => {
            initialize_tracing();
            run_advice(&board, engine, json, explain)
        }
        Command::Audit { first } => {
            initialize_tracing();
            run_audit_command(first)
        }
    }
}

/// Run the terminal game
async fn run_play(config: Option<PathBuf>, first: Option<FirstArg>) -> Result<()> {
    let mut config = GameConfig::load(config.as_deref())?;
    if let Some(first) = first {
        config = config.with_first_to_move(first.into());
    }
    tui::run_tui(config).await
}

/// Print the engine's move for one board
#[instrument]
fn run_advice(board: &str, engine: MarkArg, json: bool, explain: bool) -> Result<()> {
    let advice = Advice::for_board(board, engine.into(), explain)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&advice)?);
    } else {
        print!("{}", advice);
    }
    Ok(())
}

/// Play every opponent line and print the tallies
#[instrument]
fn run_audit_command(first: AuditFirst) -> Result<()> {
    info!("Starting audit");
    for report in run_audit(Engine::default(), &first.seats())? {
        println!("{}", report);
    }
    Ok(())
}

fn initialize_tracing() {
    // Logs go to stderr so stdout stays machine-readable
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();
}
