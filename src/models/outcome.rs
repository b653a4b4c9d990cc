//! Derived pick outcomes.

use serde::{Deserialize, Serialize};

/// Result of a scored pick pair, or of one pick's share of it.
///
/// `value` on the scoring variants is the numeric contribution to standings.
/// `Split` always contributes zero; `Unknown` and `Bye` contribute nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PickOutcome {
    DoubleWin { week: u32, value: i32 },
    DoubleLoss { week: u32, value: i32 },
    Split { week: u32 },
    Unknown { week: u32 },
    Bye { week: u32 },
}

impl PickOutcome {
    pub fn week(&self) -> u32 {
        match *self {
            PickOutcome::DoubleWin { week, .. }
            | PickOutcome::DoubleLoss { week, .. }
            | PickOutcome::Split { week }
            | PickOutcome::Unknown { week }
            | PickOutcome::Bye { week } => week,
        }
    }

    /// Numeric value for aggregation; `None` for pending games and BYE weeks.
    pub fn points(&self) -> Option<i32> {
        match *self {
            PickOutcome::DoubleWin { value, .. } | PickOutcome::DoubleLoss { value, .. } => {
                Some(value)
            }
            PickOutcome::Split { .. } => Some(0),
            PickOutcome::Unknown { .. } | PickOutcome::Bye { .. } => None,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, PickOutcome::Unknown { .. })
    }

    /// Cell text: signed points, `?` while pending, `–` for a BYE.
    pub fn display_value(&self) -> String {
        match *self {
            PickOutcome::DoubleWin { value, .. } => format!("+{}", value),
            PickOutcome::DoubleLoss { value, .. } => value.to_string(),
            PickOutcome::Split { .. } => "0".to_string(),
            PickOutcome::Unknown { .. } => "?".to_string(),
            PickOutcome::Bye { .. } => "\u{2013}".to_string(),
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            PickOutcome::DoubleWin { .. } => "outcome-double-win",
            PickOutcome::DoubleLoss { .. } => "outcome-double-loss",
            PickOutcome::Split { .. } => "outcome-split",
            PickOutcome::Unknown { .. } => "outcome-unknown",
            PickOutcome::Bye { .. } => "outcome-bye",
        }
    }
}

impl std::fmt::Display for PickOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_value())
    }
}

/// How a single picked team fared in its game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TeamResult {
    Win,
    Loss,
    Tie,
    Unknown,
    Bye,
}

impl TeamResult {
    pub fn from_margin(margin: Option<i32>) -> Self {
        match margin {
            None => TeamResult::Unknown,
            Some(m) if m > 0 => TeamResult::Win,
            Some(m) if m < 0 => TeamResult::Loss,
            Some(_) => TeamResult::Tie,
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            TeamResult::Win => "gameresult-win",
            TeamResult::Loss => "gameresult-loss",
            TeamResult::Tie => "gameresult-tie",
            TeamResult::Unknown => "gameresult-unknown",
            TeamResult::Bye => "team-bye",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_points() {
        assert_eq!(PickOutcome::DoubleWin { week: 1, value: 10 }.points(), Some(10));
        assert_eq!(PickOutcome::DoubleLoss { week: 1, value: -7 }.points(), Some(-7));
        assert_eq!(PickOutcome::Split { week: 1 }.points(), Some(0));
        assert_eq!(PickOutcome::Unknown { week: 1 }.points(), None);
        assert_eq!(PickOutcome::Bye { week: 1 }.points(), None);
    }

    #[test]
    fn test_display_value() {
        assert_eq!(PickOutcome::DoubleWin { week: 2, value: 10 }.display_value(), "+10");
        assert_eq!(PickOutcome::DoubleLoss { week: 2, value: -3 }.display_value(), "-3");
        assert_eq!(PickOutcome::Split { week: 2 }.display_value(), "0");
        assert_eq!(PickOutcome::Unknown { week: 2 }.display_value(), "?");
        assert_eq!(PickOutcome::Bye { week: 2 }.display_value(), "–");
    }

    #[test]
    fn test_week_accessor() {
        assert_eq!(PickOutcome::Bye { week: 9 }.week(), 9);
        assert_eq!(PickOutcome::DoubleLoss { week: 4, value: -1 }.week(), 4);
    }

    #[test]
    fn test_outcome_serialization() {
        let json = serde_json::to_string(&PickOutcome::DoubleWin { week: 3, value: 10 }).unwrap();
        assert_eq!(json, r#"{"outcome":"DOUBLE_WIN","week":3,"value":10}"#);

        let split: PickOutcome = serde_json::from_str(r#"{"outcome":"SPLIT","week":3}"#).unwrap();
        assert_eq!(split, PickOutcome::Split { week: 3 });
    }

    #[test]
    fn test_css_class() {
        let classes: Vec<_> = [
            PickOutcome::DoubleWin { week: 1, value: 3 },
            PickOutcome::DoubleLoss { week: 1, value: -3 },
            PickOutcome::Split { week: 1 },
            PickOutcome::Unknown { week: 1 },
            PickOutcome::Bye { week: 1 },
        ]
        .iter()
        .map(PickOutcome::css_class)
        .collect();
        assert_eq!(
            classes,
            vec![
                "outcome-double-win",
                "outcome-double-loss",
                "outcome-split",
                "outcome-unknown",
                "outcome-bye"
            ]
        );

        let classes: Vec<_> = [
            TeamResult::Win,
            TeamResult::Loss,
            TeamResult::Tie,
            TeamResult::Unknown,
            TeamResult::Bye,
        ]
        .iter()
        .map(TeamResult::css_class)
        .collect();
        assert_eq!(
            classes,
            vec![
                "gameresult-win",
                "gameresult-loss",
                "gameresult-tie",
                "gameresult-unknown",
                "team-bye"
            ]
        );
    }

    #[test]
    fn test_team_result_from_margin() {
        assert_eq!(TeamResult::from_margin(Some(3)), TeamResult::Win);
        assert_eq!(TeamResult::from_margin(Some(-3)), TeamResult::Loss);
        assert_eq!(TeamResult::from_margin(Some(0)), TeamResult::Tie);
        assert_eq!(TeamResult::from_margin(None), TeamResult::Unknown);
    }
}
