//! Folds pick-pair scores into per-player grid results and standings.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::{debug, warn};

use crate::models::{League, Pick, PickOutcome, PlayerId, Selection, Standing, TeamId, WeekScore};

use super::outcome::{score_pair, PairScore};
use super::{EngineError, GameResultIndex};

/// Player id → team id → that pick's outcome share. Feeds the season grid.
pub type PlayerResults = BTreeMap<PlayerId, BTreeMap<TeamId, PickOutcome>>;

/// Player id → standings line.
pub type Standings = BTreeMap<PlayerId, Standing>;

/// One scored (player, week) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredWeek {
    pub week: u32,
    pub first: Selection,
    pub second: Selection,
    pub score: PairScore,
}

/// A (player, week) whose derivation failed. Other entries are unaffected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryError {
    pub player_id: PlayerId,
    pub week: u32,
    pub error: EngineError,
}

/// Every scored pair in a league, grouped by player and ordered by week.
#[derive(Debug, Clone, Default)]
pub struct LeagueScores {
    pub weeks: BTreeMap<PlayerId, Vec<ScoredWeek>>,
    pub errors: Vec<EntryError>,
}

impl LeagueScores {
    pub fn for_player(&self, player_id: &PlayerId) -> &[ScoredWeek] {
        self.weeks.get(player_id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn for_player_week(&self, player_id: &PlayerId, week: u32) -> Option<&ScoredWeek> {
        self.for_player(player_id).iter().find(|s| s.week == week)
    }

    pub fn error_for(&self, player_id: &PlayerId, week: u32) -> Option<&EntryError> {
        self.errors
            .iter()
            .find(|e| &e.player_id == player_id && e.week == week)
    }
}

/// Score every (player, week) pick pair in the league.
///
/// Picks are grouped before scoring, so the result does not depend on the
/// order of `league.picks`.
pub fn score_league(league: &League, index: &GameResultIndex<'_>) -> LeagueScores {
    let mut grouped: BTreeMap<(PlayerId, u32), Vec<&Pick>> = BTreeMap::new();
    for pick in &league.picks {
        grouped
            .entry((pick.user_id.clone(), pick.week))
            .or_default()
            .push(pick);
    }

    let mut scores = LeagueScores::default();
    for player in &league.players {
        scores.weeks.entry(player.id.clone()).or_default();
    }

    for ((player_id, week), mut picks) in grouped {
        picks.sort_by(|a, b| {
            a.team
                .short_name()
                .cmp(b.team.short_name())
                .then_with(|| a.id.cmp(&b.id))
        });

        let result = match picks.as_slice() {
            [first, second] => {
                score_pair(week, &first.team, &second.team, index).map(|score| ScoredWeek {
                    week,
                    first: first.team.clone(),
                    second: second.team.clone(),
                    score,
                })
            }
            _ => Err(EngineError::MalformedPair {
                player_id: player_id.clone(),
                week,
                picks: picks.len(),
            }),
        };

        match result {
            Ok(scored) => scores.weeks.entry(player_id).or_default().push(scored),
            Err(error) => {
                warn!("Skipping week {} for player {}: {}", week, player_id, error);
                scores.errors.push(EntryError {
                    player_id,
                    week,
                    error,
                });
            }
        }
    }

    debug!(
        "Scored {} players, {} entry errors",
        scores.weeks.len(),
        scores.errors.len()
    );
    scores
}

/// Total and most-recent-week score for every scored player.
pub fn standings(league: &League, scores: &LeagueScores) -> Standings {
    let scoring_week = league.scoring_week();

    scores
        .weeks
        .iter()
        .map(|(player_id, weeks)| {
            let total = weeks.iter().filter_map(|w| w.score.outcome.points()).sum();
            let last_week = week_score(scores, player_id, weeks, scoring_week);
            (player_id.clone(), Standing { total, last_week })
        })
        .collect()
}

fn week_score(
    scores: &LeagueScores,
    player_id: &PlayerId,
    weeks: &[ScoredWeek],
    week: u32,
) -> WeekScore {
    if scores.error_for(player_id, week).is_some() {
        return WeekScore::Unknown;
    }

    let mut points = 0;
    for scored in weeks.iter().filter(|w| w.week == week) {
        if scored.score.outcome.is_unknown() {
            return WeekScore::Unknown;
        }
        points += scored.score.outcome.points().unwrap_or(0);
    }
    WeekScore::Points(points)
}

/// Per-team outcome shares for the season grid. BYE weeks have no team cell.
///
/// A team picked more than once keeps its earliest week.
pub fn player_results(scores: &LeagueScores) -> PlayerResults {
    let mut results = PlayerResults::new();

    for (player_id, weeks) in &scores.weeks {
        let cells = results.entry(player_id.clone()).or_default();
        for scored in weeks {
            let shares = [
                (&scored.first, scored.score.first),
                (&scored.second, scored.score.second),
            ];
            for (selection, outcome) in shares {
                if let Some(team) = selection.team() {
                    cells.entry(team.id.clone()).or_insert(outcome);
                }
            }
        }
    }

    results
}
