//! Validation of a proposed pick pair before it is submitted.

use thiserror::Error;

use crate::calculate::byes::bye_weeks_used;
use crate::config::ScoringConfig;
use crate::models::{League, PlayerId, Selection, Team};

/// Why a pick pair cannot be submitted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    #[error("Both pick slots must be filled")]
    MissingSelection,

    #[error("Week {week} is not open for picks (weeks {first} to {last})")]
    WeekOutOfRange { week: u32, first: u32, last: u32 },

    #[error("BYE must be picked in both slots or neither")]
    MixedBye,

    #[error("Cannot pick {0} twice in the same week")]
    DuplicateTeam(String),

    #[error("{team} was already picked in week {week}")]
    TeamAlreadyUsed { team: String, week: u32 },

    #[error("No BYE weeks remaining (quota {quota})")]
    ByeQuotaExhausted { quota: u32 },
}

/// Check a pick pair for `week`. Picks the player already holds for that
/// same week are treated as being replaced.
pub fn validate_submission(
    league: &League,
    player_id: &PlayerId,
    week: u32,
    first: Option<&Selection>,
    second: Option<&Selection>,
    rules: &ScoringConfig,
) -> Result<(), SubmissionError> {
    let (first, second) = match (first, second) {
        (Some(a), Some(b)) => (a, b),
        _ => return Err(SubmissionError::MissingSelection),
    };

    if week < league.current_week.max(1) || week > rules.final_week {
        return Err(SubmissionError::WeekOutOfRange {
            week,
            first: league.current_week.max(1),
            last: rules.final_week,
        });
    }

    let other_weeks: Vec<_> = league
        .picks_by(player_id)
        .into_iter()
        .filter(|p| p.week != week)
        .collect();

    match (first, second) {
        (Selection::Bye, Selection::Bye) => {
            let used = bye_weeks_used(other_weeks.iter().filter(|p| p.is_bye()).count() as u32);
            if used >= rules.bye_quota {
                return Err(SubmissionError::ByeQuotaExhausted {
                    quota: rules.bye_quota,
                });
            }
            Ok(())
        }
        (Selection::Team(a), Selection::Team(b)) => {
            if a.id == b.id {
                return Err(SubmissionError::DuplicateTeam(a.short_name.clone()));
            }
            for team in [a, b] {
                let used = other_weeks
                    .iter()
                    .find(|p| p.team.team().is_some_and(|t| t.id == team.id));
                if let Some(pick) = used {
                    return Err(SubmissionError::TeamAlreadyUsed {
                        team: team.short_name.clone(),
                        week: pick.week,
                    });
                }
            }
            Ok(())
        }
        _ => Err(SubmissionError::MixedBye),
    }
}

/// Teams the player can still pick for `week`, sorted by full name.
pub fn available_teams<'a>(
    teams: &'a [Team],
    league: &League,
    player_id: &PlayerId,
    week: u32,
) -> Vec<&'a Team> {
    let history = league.picks_by(player_id);
    let mut available: Vec<_> = teams
        .iter()
        .filter(|team| {
            !history.iter().any(|p| {
                p.week != week && p.team.team().is_some_and(|t| t.id == team.id)
            })
        })
        .collect();
    available.sort_by(|a, b| a.name.cmp(&b.name));
    available
}
