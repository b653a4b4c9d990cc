//! Filesystem snapshot storage.
//!
//! League data lives under a local data directory as JSON Lines files:
//! - `leagues.jsonl` for league records
//! - `leagues/<id>/` for each league's players and picks
//! - `seasons/<year>/` for the schedule and team list

pub mod jsonl;
pub mod snapshot;

use std::path::PathBuf;
use thiserror::Error;

use crate::models::LeagueId;

pub use jsonl::{JsonlReader, JsonlWriter};
pub use snapshot::LeagueSnapshot;

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Path not found: {0}")]
    PathNotFound(PathBuf),

    #[error("League not found: {0}")]
    LeagueNotFound(LeagueId),
}

/// Configuration for storage paths.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
}

impl StorageConfig {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    pub fn leagues_path(&self) -> PathBuf {
        self.data_dir.join("leagues.jsonl")
    }

    pub fn league_dir(&self, league_id: &LeagueId) -> PathBuf {
        self.data_dir.join("leagues").join(league_id.as_str())
    }

    pub fn players_path(&self, league_id: &LeagueId) -> PathBuf {
        self.league_dir(league_id).join("players.jsonl")
    }

    pub fn picks_path(&self, league_id: &LeagueId) -> PathBuf {
        self.league_dir(league_id).join("picks.jsonl")
    }

    pub fn season_dir(&self, season: i32) -> PathBuf {
        self.data_dir.join("seasons").join(season.to_string())
    }

    pub fn games_path(&self, season: i32) -> PathBuf {
        self.season_dir(season).join("games.jsonl")
    }

    pub fn teams_path(&self, season: i32) -> PathBuf {
        self.season_dir(season).join("teams.jsonl")
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self::new(PathBuf::from("./data"))
    }
}
