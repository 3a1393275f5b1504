//! Command-line interface for perfect_games.

use clap::{Parser, Subcommand, ValueEnum};
use perfect_tictactoe::{Player, Seat};

/// Perfect Games - tic-tac-toe against an engine that never loses
#[derive(Parser, Debug)]
#[command(name = "perfect_games")]
#[command(about = "Unbeatable tic-tac-toe engine", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play against the engine in the terminal
    Play {
        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,

        /// Who moves first (overrides the config file)
        #[arg(long, value_enum)]
        first: Option<FirstArg>,
    },

    /// Print the engine's move for a board
    Advice {
        /// Board as 9 cells, e.g. "XX__O____" or "XX_/_O_/___"
        board: String,

        /// Mark the engine plays
        #[arg(long, value_enum, default_value = "o")]
        engine: MarkArg,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,

        /// Include every candidate's score and the node count
        #[arg(long)]
        explain: bool,
    },

    /// Play the engine against every possible opponent line
    Audit {
        /// Which seat opens the games
        #[arg(long, value_enum, default_value = "both")]
        first: AuditFirst,
    },
}

/// Mark selection on the command line.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkArg {
    /// Play X
    X,
    /// Play O
    O,
}

impl From<MarkArg> for Player {
    fn from(arg: MarkArg) -> Self {
        match arg {
            MarkArg::X => Player::X,
            MarkArg::O => Player::O,
        }
    }
}

/// Opening seat on the command line.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum FirstArg {
    /// The human moves first
    Player,
    /// The engine moves first
    Engine,
}

impl From<FirstArg> for Seat {
    fn from(arg: FirstArg) -> Self {
        match arg {
            FirstArg::Player => Seat::Player,
            FirstArg::Engine => Seat::Engine,
        }
    }
}

/// Opening seats to audit.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuditFirst {
    /// Only games the player opens
    Player,
    /// Only games the engine opens
    Engine,
    /// Both
    Both,
}

impl AuditFirst {
    /// Seats to audit, in order.
    pub fn seats(self) -> Vec<Seat> {
        match self {
            AuditFirst::Player => vec![Seat::Player],
            AuditFirst::Engine => vec![Seat::Engine],
            AuditFirst::Both => vec![Seat::Player, Seat::Engine],
        }
    }
}
