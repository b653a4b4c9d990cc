//! Team reference data and the per-pick team selection.

use serde::{Deserialize, Serialize};

use super::TeamId;

/// Short name used for the BYE sentinel in frequency tables and display.
pub const BYE_SHORT_NAME: &str = "BYE";

/// An NFL team. `short_name` is unique within a season.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    pub short_name: String,
}

impl Team {
    pub fn new(id: impl Into<TeamId>, name: impl Into<String>, short_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            short_name: short_name.into(),
        }
    }
}

/// What a single pick slot holds: a real team or the BYE sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Selection {
    Bye,
    Team(Team),
}

impl Selection {
    pub fn is_bye(&self) -> bool {
        matches!(self, Selection::Bye)
    }

    /// Display label; `BYE` for the sentinel.
    pub fn short_name(&self) -> &str {
        match self {
            Selection::Bye => BYE_SHORT_NAME,
            Selection::Team(team) => &team.short_name,
        }
    }

    pub fn team(&self) -> Option<&Team> {
        match self {
            Selection::Bye => None,
            Selection::Team(team) => Some(team),
        }
    }
}

impl From<Team> for Selection {
    fn from(team: Team) -> Self {
        Selection::Team(team)
    }
}

impl std::fmt::Display for Selection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.short_name())
    }
}
