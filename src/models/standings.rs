//! Derived standings and display view-models.

use serde::{Deserialize, Serialize};

use super::{PickOutcome, PlayerId, TeamResult};

/// Most-recent-week score. `Unknown` while any of that week's games is pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawWeekScore", into = "RawWeekScore")]
pub enum WeekScore {
    Points(i32),
    Unknown,
}

impl WeekScore {
    /// Value used for sort position only.
    pub fn sort_value(&self) -> i32 {
        match self {
            WeekScore::Points(points) => *points,
            WeekScore::Unknown => 0,
        }
    }
}

impl std::fmt::Display for WeekScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WeekScore::Points(points) => write!(f, "{}", points),
            WeekScore::Unknown => write!(f, "?"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum RawWeekScore {
    Points(i32),
    Symbol(String),
}

impl TryFrom<RawWeekScore> for WeekScore {
    type Error = String;

    fn try_from(raw: RawWeekScore) -> Result<Self, Self::Error> {
        match raw {
            RawWeekScore::Points(points) => Ok(WeekScore::Points(points)),
            RawWeekScore::Symbol(s) if s == "unknown" => Ok(WeekScore::Unknown),
            RawWeekScore::Symbol(s) => Err(format!("invalid week score: {}", s)),
        }
    }
}

impl From<WeekScore> for RawWeekScore {
    fn from(score: WeekScore) -> Self {
        match score {
            WeekScore::Points(points) => RawWeekScore::Points(points),
            WeekScore::Unknown => RawWeekScore::Symbol("unknown".to_string()),
        }
    }
}

/// A player's standings line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    pub total: i32,
    pub last_week: WeekScore,
}

/// BYE quota accounting for one player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ByeStatus {
    /// BYE weeks consumed (BYE picks / 2)
    pub used: u32,

    /// Quota minus used; negative when overconsumed
    pub remaining: i32,

    /// Set when `remaining < 0`
    pub violated: bool,

    /// Player holds a BYE for the league's current week
    pub bye_this_week: bool,
}

impl ByeStatus {
    /// Grid cell text: one marker per remaining BYE, `!!!` on a violation.
    pub fn display_value(&self) -> String {
        if self.violated {
            "!!!".to_string()
        } else {
            vec!["\u{25cf}"; self.remaining.max(0) as usize].join(" ")
        }
    }
}

/// One row of a week's pick table, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyRow {
    pub player_id: PlayerId,
    pub display_name: String,
    pub left_pick: Option<String>,
    pub right_pick: Option<String>,
    pub left_result: Option<TeamResult>,
    pub right_result: Option<TeamResult>,
    /// Style classes for the two pick cells, from their `TeamResult`.
    pub left_class: Option<String>,
    pub right_class: Option<String>,
    /// Pair outcome; `None` when the player has no picks or the entry failed to score.
    pub outcome: Option<PickOutcome>,
    pub outcome_class: Option<String>,
    pub is_current_player: bool,
}

/// One leaderboard line, already in rank order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub rank: usize,
    pub player_id: PlayerId,
    pub display_name: String,
    pub total: i32,
    pub last_week: WeekScore,
    pub is_current_player: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_week_score_serialization() {
        assert_eq!(serde_json::to_string(&WeekScore::Points(12)).unwrap(), "12");
        assert_eq!(serde_json::to_string(&WeekScore::Unknown).unwrap(), "\"unknown\"");

        let unknown: WeekScore = serde_json::from_str("\"unknown\"").unwrap();
        assert_eq!(unknown, WeekScore::Unknown);
        let points: WeekScore = serde_json::from_str("-4").unwrap();
        assert_eq!(points, WeekScore::Points(-4));
        assert!(serde_json::from_str::<WeekScore>("\"pending\"").is_err());
    }

    #[test]
    fn test_week_score_sort_value_and_display() {
        assert_eq!(WeekScore::Unknown.sort_value(), 0);
        assert_eq!(WeekScore::Points(-6).sort_value(), -6);
        assert_eq!(WeekScore::Unknown.to_string(), "?");
    }

    #[test]
    fn test_bye_status_display() {
        let ok = ByeStatus {
            used: 0,
            remaining: 2,
            violated: false,
            bye_this_week: false,
        };
        assert_eq!(ok.display_value(), "● ●");

        let over = ByeStatus {
            used: 3,
            remaining: -1,
            violated: true,
            bye_this_week: true,
        };
        assert_eq!(over.display_value(), "!!!");
    }
}
