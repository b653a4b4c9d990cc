//! Assembles one league's full snapshot from the data directory.

use tracing::info;

use crate::models::{Game, League, LeagueId, Pick, Player, Team};

use super::{JsonlReader, JsonlWriter, StorageConfig, StorageError};

/// Everything the engine needs to score one league.
#[derive(Debug, Clone)]
pub struct LeagueSnapshot {
    /// The league with its players and picks attached.
    pub league: League,
    pub games: Vec<Game>,
    pub teams: Vec<Team>,
}

impl LeagueSnapshot {
    /// Load a league, its players and picks, and its season's schedule.
    pub fn load(storage: &StorageConfig, league_id: &LeagueId) -> Result<Self, StorageError> {
        let league: League = JsonlReader::new(storage.leagues_path())
            .find(|l: &League| &l.id == league_id)?
            .ok_or_else(|| StorageError::LeagueNotFound(league_id.clone()))?;

        let players: Vec<Player> = JsonlReader::new(storage.players_path(league_id)).read_all()?;
        let picks: Vec<Pick> = JsonlReader::new(storage.picks_path(league_id))
            .read_all()?
            .into_iter()
            .filter(|p: &Pick| &p.league_id == league_id)
            .collect();
        let games: Vec<Game> = JsonlReader::new(storage.games_path(league.season)).read_all()?;
        let teams: Vec<Team> = JsonlReader::new(storage.teams_path(league.season)).read_all()?;

        info!(
            "Loaded league {} (season {}): {} players, {} picks, {} games",
            league_id,
            league.season,
            players.len(),
            picks.len(),
            games.len()
        );

        Ok(Self {
            league: league.with_players(players).with_picks(picks),
            games,
            teams,
        })
    }

    /// Write this snapshot into the data directory.
    ///
    /// The league record is appended to `leagues.jsonl`; the league's players
    /// and picks and the season's games and teams files are replaced.
    pub fn save(&self, storage: &StorageConfig) -> Result<(), StorageError> {
        let league = &self.league;
        let record = League::new(
            league.id.clone(),
            league.season,
            league.current_week,
            league.revealed_week,
        );
        JsonlWriter::new(storage.leagues_path()).append(&League {
            name: league.name.clone(),
            ..record
        })?;

        JsonlWriter::new(storage.players_path(&league.id)).write_all(&league.players)?;
        JsonlWriter::new(storage.picks_path(&league.id)).write_all(&league.picks)?;
        JsonlWriter::new(storage.games_path(league.season)).write_all(&self.games)?;
        JsonlWriter::new(storage.teams_path(league.season)).write_all(&self.teams)?;
        Ok(())
    }
}
