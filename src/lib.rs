//! Perfect Games - tic-tac-toe against an engine that never loses
//!
//! The search itself lives in the `perfect_tictactoe` crate. This crate
//! wraps it in something you can run.
//!
//! # Architecture
//!
//! - **Advice**: one-shot best move for a board given on the command line
//! - **Audit**: plays the engine against every possible opponent line
//! - **Config**: TOML settings for interactive games
//! - **TUI**: terminal game driven by an async orchestrator
//!
//! # Example
//!
//! ```
//! use perfect_games::Advice;
//! use perfect_tictactoe::{Player, Position};
//!
//! # fn example() -> anyhow::Result<()> {
//! let advice = Advice::for_board("XX__O____", Player::O, false)?;
//! assert_eq!(*advice.best_move(), Some(Position::TopRight));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod advice;
mod audit;
pub mod cli;
mod config;
pub mod tui;

// Crate-level exports - Advice
pub use advice::Advice;

// Crate-level exports - Audit
pub use audit::{AuditReport, audit, run as run_audit};

// Crate-level exports - Configuration
pub use config::{ConfigError, DEFAULT_CONFIG_FILE, GameConfig};
