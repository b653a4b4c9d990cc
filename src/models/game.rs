//! Scheduled games and their results.

use serde::{Deserialize, Serialize};

use super::{GameId, Team};

/// Score state for a game. Scores stay `None` until the results feed posts them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    pub complete: bool,
    pub home_score: Option<i32>,
    pub away_score: Option<i32>,
}

impl GameResult {
    pub fn final_score(home_score: i32, away_score: i32) -> Self {
        Self {
            complete: true,
            home_score: Some(home_score),
            away_score: Some(away_score),
        }
    }

    pub fn pending() -> Self {
        Self::default()
    }
}

/// A single game in a season's schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub id: GameId,
    pub week: u32,
    pub home_team: Team,
    pub away_team: Team,
    #[serde(default)]
    pub result: GameResult,
}

impl Game {
    pub fn new(id: impl Into<GameId>, week: u32, home_team: Team, away_team: Team) -> Self {
        Self {
            id: id.into(),
            week,
            home_team,
            away_team,
            result: GameResult::pending(),
        }
    }

    /// Builder method to set the result.
    pub fn with_result(mut self, result: GameResult) -> Self {
        self.result = result;
        self
    }

    /// Complete only when the flag is set and both scores are posted.
    pub fn is_complete(&self) -> bool {
        self.result.complete && self.result.home_score.is_some() && self.result.away_score.is_some()
    }

    /// Picked team's score minus the opponent's score.
    ///
    /// `None` when the game is not complete or the team did not play in it.
    pub fn margin_for(&self, short_name: &str) -> Option<i32> {
        if !self.is_complete() {
            return None;
        }
        let home = self.result.home_score?;
        let away = self.result.away_score?;
        if self.away_team.short_name == short_name {
            Some(away - home)
        } else if self.home_team.short_name == short_name {
            Some(home - away)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game() -> Game {
        Game::new(
            "g-1",
            3,
            Team::new("t-kc", "Kansas City Chiefs", "KC"),
            Team::new("t-den", "Denver Broncos", "DEN"),
        )
    }

    #[test]
    fn test_pending_game_has_no_margin() {
        let g = game();
        assert!(!g.is_complete());
        assert_eq!(g.margin_for("KC"), None);
    }

    #[test]
    fn test_complete_flag_requires_both_scores() {
        let g = game().with_result(GameResult {
            complete: true,
            home_score: Some(21),
            away_score: None,
        });
        assert!(!g.is_complete());
        assert_eq!(g.margin_for("KC"), None);
    }

    #[test]
    fn test_margin_home_and_away() {
        let g = game().with_result(GameResult::final_score(24, 10));
        assert_eq!(g.margin_for("KC"), Some(14));
        assert_eq!(g.margin_for("DEN"), Some(-14));
        assert_eq!(g.margin_for("SF"), None);
    }

    #[test]
    fn test_tie_is_zero_margin() {
        let g = game().with_result(GameResult::final_score(17, 17));
        assert_eq!(g.margin_for("KC"), Some(0));
        assert_eq!(g.margin_for("DEN"), Some(0));
    }

    #[test]
    fn test_result_defaults_when_missing() {
        let json = r#"{"id":"g-9","week":1,
            "home_team":{"id":"a","name":"A","short_name":"A"},
            "away_team":{"id":"b","name":"B","short_name":"B"}}"#;
        let g: Game = serde_json::from_str(json).unwrap();
        assert_eq!(g.result, GameResult::pending());
    }
}
