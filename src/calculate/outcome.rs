//! Pick-pair outcome classification and point values.

use std::cmp::Ordering;

use tracing::debug;

use crate::models::{Game, GameId, PickOutcome, Selection, TeamResult};

use super::{EngineError, GameResultIndex};

/// Score of one pick pair.
///
/// `outcome` is the pair as a whole. `first` and `second` carry the same
/// variant with each pick's share of the value, so the two shares always
/// sum to the pair's value. The grid view shows the shares per team.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairScore {
    pub outcome: PickOutcome,
    pub first: PickOutcome,
    pub second: PickOutcome,
}

impl PairScore {
    fn uniform(outcome: PickOutcome) -> Self {
        Self {
            outcome,
            first: outcome,
            second: outcome,
        }
    }
}

/// Score a player's two picks for `week`.
///
/// Either slot holding BYE makes the whole pair a BYE. A real team with no
/// game that week is a data-integrity failure, never an `Unknown`.
pub fn score_pair(
    week: u32,
    first: &Selection,
    second: &Selection,
    index: &GameResultIndex<'_>,
) -> Result<PairScore, EngineError> {
    let (first_team, second_team) = match (first, second) {
        (Selection::Team(a), Selection::Team(b)) => (a, b),
        _ => return Ok(PairScore::uniform(PickOutcome::Bye { week })),
    };

    let first_game = index.find_game(week, &first_team.short_name)?;
    let second_game = index.find_game(week, &second_team.short_name)?;

    if !(first_game.is_complete() && second_game.is_complete()) {
        return Ok(PairScore::uniform(PickOutcome::Unknown { week }));
    }

    let first_margin = game_margin(first_game, &first_team.short_name)?;
    let second_margin = game_margin(second_game, &second_team.short_name)?;

    let score = classify(
        week,
        (&first_game.id, first_margin),
        (&second_game.id, second_margin),
    );
    debug!(
        "Week {} pair {}/{} margins {}/{} -> {:?}",
        week, first_team.short_name, second_team.short_name, first_margin, second_margin, score.outcome
    );
    Ok(score)
}

fn classify(week: u32, first: (&GameId, i32), second: (&GameId, i32)) -> PairScore {
    let (first_id, a) = first;
    let (second_id, b) = second;

    if a >= 0 && b >= 0 {
        return PairScore {
            outcome: PickOutcome::DoubleWin { week, value: a + b },
            first: PickOutcome::DoubleWin { week, value: a },
            second: PickOutcome::DoubleWin { week, value: b },
        };
    }

    if a <= 0 && b <= 0 {
        // Only the worse loss counts. Equal losses go to the lower game id.
        let first_counts = match a.cmp(&b) {
            Ordering::Less => true,
            Ordering::Greater => false,
            Ordering::Equal => compare_game_ids(first_id, second_id) != Ordering::Greater,
        };
        let (first_value, second_value) = if first_counts { (a, 0) } else { (0, b) };
        return PairScore {
            outcome: PickOutcome::DoubleLoss {
                week,
                value: a.min(b),
            },
            first: PickOutcome::DoubleLoss {
                week,
                value: first_value,
            },
            second: PickOutcome::DoubleLoss {
                week,
                value: second_value,
            },
        };
    }

    PairScore::uniform(PickOutcome::Split { week })
}

/// Picked team's score minus its opponent's in a completed game.
pub fn game_margin(game: &Game, short_name: &str) -> Result<i32, EngineError> {
    game.margin_for(short_name)
        .ok_or_else(|| EngineError::GameNotFound {
            week: game.week,
            team: short_name.to_string(),
        })
}

/// Game id ordering. Ids are opaque strings and compare lexically, so
/// `"10"` sorts before `"9"`.
pub fn compare_game_ids(a: &GameId, b: &GameId) -> Ordering {
    a.as_str().cmp(b.as_str())
}

/// Win/loss/tie state of a single selection for the week's table.
pub fn team_result(
    week: u32,
    selection: &Selection,
    index: &GameResultIndex<'_>,
) -> Result<TeamResult, EngineError> {
    match selection {
        Selection::Bye => Ok(TeamResult::Bye),
        Selection::Team(team) => {
            let game = index.find_game(week, &team.short_name)?;
            Ok(TeamResult::from_margin(game.margin_for(&team.short_name)))
        }
    }
}
