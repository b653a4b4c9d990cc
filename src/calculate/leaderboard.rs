//! Leaderboard ranking over computed standings.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::{is_current_player, League, LeaderboardEntry, PlayerId, Standing};

use super::standings::Standings;

/// Which standings column the leaderboard sorts by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RankingKey {
    #[default]
    Total,
    Last,
}

impl FromStr for RankingKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "total" => Ok(RankingKey::Total),
            "last" | "last_week" | "last-week" => Ok(RankingKey::Last),
            other => Err(format!("unknown ranking key: {}", other)),
        }
    }
}

impl std::fmt::Display for RankingKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RankingKey::Total => write!(f, "total"),
            RankingKey::Last => write!(f, "last"),
        }
    }
}

/// Rank league players by `key`, highest first.
///
/// Unknown last-week scores sort as zero. Ties break by player id so equal
/// input always gives equal output. Players with equal keys share a rank.
/// `only_current` keeps just the viewer's own line.
pub fn leaderboard(
    league: &League,
    standings: &Standings,
    key: RankingKey,
    current_user: Option<&PlayerId>,
    only_current: bool,
) -> Vec<LeaderboardEntry> {
    let mut lines: Vec<_> = league
        .players
        .iter()
        .filter_map(|player| standings.get(&player.id).map(|s| (player, s)))
        .collect();

    let sort_value = |standing: &Standing| match key {
        RankingKey::Total => standing.total,
        RankingKey::Last => standing.last_week.sort_value(),
    };

    lines.sort_by(|(pa, sa), (pb, sb)| {
        sort_value(*sb)
            .cmp(&sort_value(*sa))
            .then_with(|| pa.id.cmp(&pb.id))
    });

    let mut entries = Vec::with_capacity(lines.len());
    let mut rank = 0;
    let mut previous = None;
    for (position, (player, standing)) in lines.into_iter().enumerate() {
        let value = sort_value(standing);
        if previous != Some(value) {
            rank = position + 1;
            previous = Some(value);
        }
        entries.push(LeaderboardEntry {
            rank,
            player_id: player.id.clone(),
            display_name: player.display_name.clone(),
            total: standing.total,
            last_week: standing.last_week,
            is_current_player: is_current_player(&player.id, current_user),
        });
    }

    if only_current {
        entries.retain(|e| e.is_current_player);
    }
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Player, WeekScore};

    fn fixture() -> (League, Standings) {
        let league = League::new("l", 2024, 4, 4).with_players(vec![
            Player::new("c", "Cat"),
            Player::new("a", "Ari"),
            Player::new("b", "Ben"),
            Player::new("d", "Dee"),
        ]);
        let mut standings = Standings::new();
        standings.insert(
            "a".into(),
            Standing {
                total: 30,
                last_week: WeekScore::Unknown,
            },
        );
        standings.insert(
            "b".into(),
            Standing {
                total: 45,
                last_week: WeekScore::Points(-3),
            },
        );
        standings.insert(
            "c".into(),
            Standing {
                total: 30,
                last_week: WeekScore::Points(12),
            },
        );
        standings.insert(
            "d".into(),
            Standing {
                total: -5,
                last_week: WeekScore::Points(0),
            },
        );
        (league, standings)
    }

    fn ids(entries: &[LeaderboardEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.player_id.as_str()).collect()
    }

    #[test]
    fn test_rank_by_total() {
        let (league, standings) = fixture();
        let board = leaderboard(&league, &standings, RankingKey::Total, None, false);

        assert_eq!(ids(&board), vec!["b", "a", "c", "d"]);
        let ranks: Vec<_> = board.iter().map(|e| e.rank).collect();
        assert_eq!(ranks, vec![1, 2, 2, 4]);
    }

    #[test]
    fn test_rank_by_last_week_treats_unknown_as_zero() {
        let (league, standings) = fixture();
        let board = leaderboard(&league, &standings, RankingKey::Last, None, false);

        assert_eq!(ids(&board), vec!["c", "a", "d", "b"]);
        assert_eq!(board[1].last_week, WeekScore::Unknown);
        assert_eq!(board[1].last_week.to_string(), "?");
    }

    #[test]
    fn test_only_current_player() {
        let (league, standings) = fixture();
        let me = PlayerId::from("d");
        let board = leaderboard(&league, &standings, RankingKey::Total, Some(&me), true);

        assert_eq!(board.len(), 1);
        assert_eq!(board[0].player_id, me);
        assert_eq!(board[0].rank, 4);
        assert!(board[0].is_current_player);
    }

    #[test]
    fn test_deterministic_across_player_order() {
        let (league, standings) = fixture();
        let mut shuffled = league.clone();
        shuffled.players.reverse();

        let a = leaderboard(&league, &standings, RankingKey::Total, None, false);
        let b = leaderboard(&shuffled, &standings, RankingKey::Total, None, false);
        assert_eq!(a, b);
    }

    #[test]
    fn test_ranking_key_parse() {
        assert_eq!("total".parse::<RankingKey>().unwrap(), RankingKey::Total);
        assert_eq!("LAST".parse::<RankingKey>().unwrap(), RankingKey::Last);
        assert!("me".parse::<RankingKey>().is_err());
    }
}
