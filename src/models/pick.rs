//! Pick model: one of a player's two weekly selections.

use serde::{Deserialize, Serialize};

use super::{EntityId, LeagueId, PickId, PlayerId, Selection};

/// A single pick. Picks for a (player, week) come in pairs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pick {
    /// Unique identifier
    pub id: PickId,

    /// Player who made the pick
    pub user_id: PlayerId,

    /// League the pick belongs to
    pub league_id: LeagueId,

    /// Week number (1-based)
    pub week: u32,

    /// Picked team or BYE
    pub team: Selection,
}

impl Pick {
    /// Create a new Pick with auto-generated ID.
    ///
    /// The slot index keeps BYE/BYE pairs from colliding on the same ID.
    pub fn new(
        league_id: LeagueId,
        user_id: PlayerId,
        week: u32,
        slot: u8,
        team: Selection,
    ) -> Self {
        let id = EntityId::generate(&[
            league_id.as_str(),
            user_id.as_str(),
            &week.to_string(),
            &slot.to_string(),
            team.short_name(),
        ]);

        Self {
            id,
            user_id,
            league_id,
            week,
            team,
        }
    }

    pub fn is_bye(&self) -> bool {
        self.team.is_bye()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Team;

    #[test]
    fn test_pick_creation() {
        let pick = Pick::new(
            EntityId::from("league-1"),
            EntityId::from("user-1"),
            4,
            0,
            Team::new("t-kc", "Kansas City Chiefs", "KC").into(),
        );

        assert_eq!(pick.week, 4);
        assert_eq!(pick.team.short_name(), "KC");
        assert!(!pick.is_bye());
        assert!(!pick.id.as_str().is_empty());
    }

    #[test]
    fn test_bye_pair_ids_differ() {
        let first = Pick::new("l".into(), "u".into(), 5, 0, Selection::Bye);
        let second = Pick::new("l".into(), "u".into(), 5, 1, Selection::Bye);
        assert!(first.is_bye() && second.is_bye());
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn test_pick_serialization() {
        let pick = Pick::new("l".into(), "u".into(), 2, 0, Selection::Bye);
        let json = serde_json::to_string(&pick).unwrap();
        let deserialized: Pick = serde_json::from_str(&json).unwrap();
        assert_eq!(pick, deserialized);
    }
}
