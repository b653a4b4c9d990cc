//! Scoring engine.
//!
//! Derives everything shown about a league from its snapshot of picks and
//! game results:
//! - per-pick outcome shares for the season grid
//! - season totals and the most recent week's score
//! - BYE quota usage
//! - the weekly pick table order
//!
//! Everything here is a pure function of its inputs. A failure on one
//! (player, week) entry is recorded and the rest of the league still scores.

pub mod byes;
pub mod eligibility;
pub mod index;
pub mod leaderboard;
pub mod ordering;
pub mod outcome;
pub mod standings;

use std::collections::BTreeMap;

use serde::Serialize;
use thiserror::Error;
use tracing::info;

use crate::models::{ByeStatus, Game, League, PlayerId, WeeklyRow};

pub use index::GameResultIndex;
pub use leaderboard::{leaderboard, RankingKey};
pub use standings::{EntryError, PlayerResults, Standings};

/// Errors raised while scoring a single entry or building a view.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EngineError {
    #[error("No game found for {team} in week {week}")]
    GameNotFound { week: u32, team: String },

    #[error("Player {player_id} has {picks} picks in week {week}, expected 2")]
    MalformedPair {
        player_id: PlayerId,
        week: u32,
        picks: usize,
    },

    #[error("Week {week} is not revealed yet (revealed through week {revealed_week})")]
    WeekNotRevealed { week: u32, revealed_week: u32 },
}

/// The full derived state of one league.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeagueReport {
    pub player_results: PlayerResults,
    pub standings: Standings,
    pub bye_status: BTreeMap<PlayerId, ByeStatus>,
    pub errors: Vec<EntryError>,
}

/// Score a league against a season's games.
pub fn evaluate_league(league: &League, games: &[Game], bye_quota: u32) -> LeagueReport {
    let index = GameResultIndex::build(games);
    let scores = standings::score_league(league, &index);

    let report = LeagueReport {
        player_results: standings::player_results(&scores),
        standings: standings::standings(league, &scores),
        bye_status: byes::bye_statuses(league, bye_quota),
        errors: scores.errors,
    };

    info!(
        "Scored league {} ({} players, {} picks over {} scheduled weeks, {} entry errors)",
        league.id,
        league.players.len(),
        league.picks.len(),
        index.week_count(),
        report.errors.len()
    );

    report
}

/// Display rows for one revealed week of a league.
pub fn weekly_view(
    league: &League,
    games: &[Game],
    week: u32,
    current_user: Option<&PlayerId>,
) -> Result<Vec<WeeklyRow>, EngineError> {
    let index = GameResultIndex::build(games);
    let scores = standings::score_league(league, &index);
    ordering::weekly_display_order(league, week, &scores, &index, current_user)
}
