//! Exhaustive check that the engine never loses.
//!
//! Every legal player reply is tried at every player turn, while the
//! engine answers with its single best move. The tree is small enough
//! to walk in full.

use anyhow::{Context, Result, bail};
use derive_getters::Getters;
use perfect_tictactoe::{Engine, Outcome, Position, Round, Seat, legal_moves};
use serde::Serialize;
use tracing::{info, instrument, warn};

/// Tally of every game played from one opening seat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct AuditReport {
    /// Seat that opened the games.
    opening: Seat,
    /// Finished games.
    games: u64,
    /// Games the engine won.
    engine_wins: u64,
    /// Drawn games.
    draws: u64,
    /// Games the player won; anything above zero is a bug.
    player_wins: u64,
    /// Move sequences of lost games.
    losing_lines: Vec<Vec<Position>>,
}

impl AuditReport {
    /// Creates an empty tally for games opened by `opening`.
    pub fn new(opening: Seat) -> Self {
        Self {
            opening,
            games: 0,
            engine_wins: 0,
            draws: 0,
            player_wins: 0,
            losing_lines: Vec::new(),
        }
    }

    fn record(&mut self, round: &Round) -> Result<()> {
        match round.outcome() {
            Outcome::EngineWin => self.engine_wins += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::PlayerWin => {
                warn!(line = ?round.history(), "Engine lost");
                self.player_wins += 1;
                self.losing_lines.push(round.history().to_vec());
            }
            Outcome::Ongoing => bail!("Recorded an undecided game: {:?}", round.history()),
        }
        self.games += 1;
        Ok(())
    }
}

impl std::fmt::Display for AuditReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:<7} opens: {:>4} games, {:>4} engine wins, {:>4} draws, {} player wins",
            self.opening.to_string(),
            self.games, self.engine_wins, self.draws, self.player_wins
        )
    }
}

/// Plays the engine against every opponent line from an empty board.
///
/// # Errors
///
/// Fails if a move is rejected or the engine has no move on an
/// undecided board; lost games are tallied, not errors.
#[instrument(skip(engine), fields(engine = %engine.mark()))]
pub fn audit(engine: Engine, opening: Seat) -> Result<AuditReport> {
    let mut report = AuditReport::new(opening);
    walk(Round::new(engine, opening), &mut report)?;
    info!(
        games = report.games,
        engine_wins = report.engine_wins,
        draws = report.draws,
        player_wins = report.player_wins,
        "Audit finished"
    );
    Ok(report)
}

/// Runs [`audit`] for each opening seat and fails if any game was lost.
pub fn run(engine: Engine, openings: &[Seat]) -> Result<Vec<AuditReport>> {
    let reports = openings
        .iter()
        .map(|seat| audit(engine, *seat))
        .collect::<Result<Vec<_>>>()?;
    let lost: u64 = reports.iter().map(|r| r.player_wins).sum();
    if lost > 0 {
        let first = reports
            .iter()
            .flat_map(|r| r.losing_lines.first())
            .next()
            .cloned()
            .unwrap_or_default();
        bail!("Engine lost {} game(s), first losing line: {:?}", lost, first);
    }
    Ok(reports)
}

fn walk(mut round: Round, report: &mut AuditReport) -> Result<()> {
    if round.outcome().is_terminal() {
        return report.record(&round);
    }

    match round.to_move() {
        Seat::Engine => {
            let choice = round
                .engine_move()
                .with_context(|| format!("Engine move rejected after {:?}", round.history()))?;
            if choice.is_none() {
                bail!("Engine found no move on an undecided board: {}", round.board());
            }
            walk(round, report)
        }
        Seat::Player => {
            for position in legal_moves(round.board()) {
                let mut next = round.clone();
                next.play(position).with_context(|| {
                    format!("Player move {} rejected after {:?}", position, round.history())
                })?;
                walk(next, report)?;
            }
            Ok(())
        }
    }
}
