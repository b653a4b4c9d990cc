//! Season schedule index keyed by (week, team short name).

use std::collections::HashMap;

use tracing::warn;

use crate::models::Game;

use super::EngineError;

/// O(1) lookup of the game a team plays in a given week.
#[derive(Debug, Default)]
pub struct GameResultIndex<'a> {
    by_week: HashMap<u32, HashMap<&'a str, &'a Game>>,
}

impl<'a> GameResultIndex<'a> {
    /// Build the index from a season's flat game list.
    ///
    /// A team scheduled twice in one week keeps its first game.
    pub fn build(games: &'a [Game]) -> Self {
        let mut by_week: HashMap<u32, HashMap<&'a str, &'a Game>> = HashMap::new();

        for game in games {
            let week = by_week.entry(game.week).or_default();
            for team in [&game.home_team, &game.away_team] {
                if let Some(existing) = week.get(team.short_name.as_str()) {
                    warn!(
                        "Team {} scheduled twice in week {} (games {} and {}), keeping {}",
                        team.short_name, game.week, existing.id, game.id, existing.id
                    );
                    continue;
                }
                week.insert(team.short_name.as_str(), game);
            }
        }

        Self { by_week }
    }

    /// Find the game `short_name` plays in `week`.
    pub fn find_game(&self, week: u32, short_name: &str) -> Result<&'a Game, EngineError> {
        self.by_week
            .get(&week)
            .and_then(|teams| teams.get(short_name))
            .copied()
            .ok_or_else(|| EngineError::GameNotFound {
                week,
                team: short_name.to_string(),
            })
    }

    /// Number of weeks with at least one scheduled game.
    pub fn week_count(&self) -> usize {
        self.by_week.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GameResult, Team};

    fn team(short: &str) -> Team {
        Team::new(format!("t-{}", short.to_lowercase()), short, short)
    }

    fn schedule() -> Vec<Game> {
        vec![
            Game::new("1", 1, team("KC"), team("BAL")).with_result(GameResult::final_score(27, 20)),
            Game::new("2", 1, team("SF"), team("PIT")),
            Game::new("3", 2, team("KC"), team("CIN")),
        ]
    }

    #[test]
    fn test_find_game_home_and_away() {
        let games = schedule();
        let index = GameResultIndex::build(&games);

        assert_eq!(index.find_game(1, "KC").unwrap().id.as_str(), "1");
        assert_eq!(index.find_game(1, "BAL").unwrap().id.as_str(), "1");
        assert_eq!(index.find_game(2, "KC").unwrap().id.as_str(), "3");
        assert_eq!(index.week_count(), 2);
    }

    #[test]
    fn test_missing_team_is_game_not_found() {
        let games = schedule();
        let index = GameResultIndex::build(&games);

        let err = index.find_game(2, "SF").unwrap_err();
        assert_eq!(
            err,
            EngineError::GameNotFound {
                week: 2,
                team: "SF".to_string()
            }
        );
    }

    #[test]
    fn test_missing_week_is_game_not_found() {
        let games = schedule();
        let index = GameResultIndex::build(&games);
        assert!(matches!(
            index.find_game(9, "KC"),
            Err(EngineError::GameNotFound { week: 9, .. })
        ));
    }

    #[test]
    fn test_duplicate_schedule_keeps_first() {
        let mut games = schedule();
        games.push(Game::new("4", 1, team("KC"), team("LV")));
        let index = GameResultIndex::build(&games);

        assert_eq!(index.find_game(1, "KC").unwrap().id.as_str(), "1");
        assert_eq!(index.find_game(1, "LV").unwrap().id.as_str(), "4");
    }
}
