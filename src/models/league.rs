//! League snapshot: players, picks and week pointers.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::{LeagueId, Pick, PlayerId};

/// Last regular-season week of the NFL schedule.
pub const NFL_FINAL_WEEK: u32 = 18;

/// A league member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub display_name: String,
}

impl Player {
    pub fn new(id: impl Into<PlayerId>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
        }
    }
}

/// A league as seen by the engine. `revealed_week <= current_week`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct League {
    pub id: LeagueId,

    #[serde(default)]
    pub name: String,

    /// Season year, e.g. 2024 for the 2024-25 season.
    pub season: i32,

    pub current_week: u32,

    /// Last week whose full pick grid is visible to everyone.
    pub revealed_week: u32,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub players: Vec<Player>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub picks: Vec<Pick>,
}

impl League {
    pub fn new(id: impl Into<LeagueId>, season: i32, current_week: u32, revealed_week: u32) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            season,
            current_week,
            revealed_week,
            players: Vec::new(),
            picks: Vec::new(),
        }
    }

    pub fn with_players(mut self, players: Vec<Player>) -> Self {
        self.players = players;
        self
    }

    pub fn with_picks(mut self, picks: Vec<Pick>) -> Self {
        self.picks = picks;
        self
    }

    /// The week used for "most recent week" scores: the revealed week while
    /// it is still current, otherwise the week before the current one.
    pub fn scoring_week(&self) -> u32 {
        if self.current_week == self.revealed_week {
            self.revealed_week
        } else {
            self.current_week.saturating_sub(1)
        }
    }

    pub fn is_week_revealed(&self, week: u32) -> bool {
        week <= self.revealed_week
    }

    /// Weeks whose full pick tables can be browsed after the fact.
    pub fn archive_weeks(&self, current_season: i32, final_week: u32) -> Vec<u32> {
        let max_week = if self.season == current_season {
            if self.current_week < 2 {
                return Vec::new();
            }
            self.current_week - 1
        } else {
            final_week.saturating_sub(1)
        };
        (1..=max_week).collect()
    }

    pub fn player(&self, id: &PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| &p.id == id)
    }

    /// A player's picks for one week.
    pub fn picks_for(&self, player_id: &PlayerId, week: u32) -> Vec<&Pick> {
        self.picks
            .iter()
            .filter(|p| &p.user_id == player_id && p.week == week)
            .collect()
    }

    /// All of a player's picks for the season.
    pub fn picks_by(&self, player_id: &PlayerId) -> Vec<&Pick> {
        self.picks.iter().filter(|p| &p.user_id == player_id).collect()
    }
}

/// NFL season year a date falls in. January and February games belong to
/// the season that kicked off the previous autumn.
pub fn current_season(today: NaiveDate) -> i32 {
    if today.month() <= 2 {
        today.year() - 1
    } else {
        today.year()
    }
}

/// Whether a user is the one viewing. The viewer is always passed in explicitly.
pub fn is_current_player(player_id: &PlayerId, current_user: Option<&PlayerId>) -> bool {
    current_user.is_some_and(|id| id == player_id)
}
